use bevy::prelude::*;

use super::TerrainConfig;
use super::entities::{TileHeights, TileMaterials};
use crate::map_data::HexMapData;

// ── Startup ─────────────────────────────────────────────────────────

/// Creates one material per biome of the loaded palette. Runs after
/// [`load_heights`].
pub fn setup_tile_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    heights: Res<TileHeights>,
) {
    let tile_materials = TileMaterials::new(&heights.biome_names, &mut materials);
    debug!("created {} biome materials", tile_materials.biomes.len());
    commands.insert_resource(tile_materials);
}

/// Spawns a directional light angled across the tile walls.
pub fn spawn_sun(mut commands: Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 20.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Inserts [`TileHeights`] from the configured map file, falling back to the
/// noise field when no map is configured or it cannot be used.
pub fn load_heights(mut commands: Commands, cfg: Res<TerrainConfig>) {
    let from_map = cfg.map_path.as_ref().and_then(|path| {
        match HexMapData::load(path).and_then(|map| TileHeights::from_map(&map)) {
            Ok(heights) => {
                info!(
                    "loaded {} tiles from {}",
                    heights.field.len(),
                    path.display()
                );
                Some(heights)
            }
            Err(err) => {
                error!("cannot use map {}: {err}; generating noise terrain", path.display());
                None
            }
        }
    });

    let heights = from_map.unwrap_or_else(|| {
        let heights = TileHeights::from_noise(&cfg.noise);
        info!(
            "generated {} noise tiles (seed {})",
            heights.field.len(),
            cfg.noise.seed
        );
        heights
    });
    commands.insert_resource(heights);
}
