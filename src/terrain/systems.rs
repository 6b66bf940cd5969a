use bevy::prelude::*;
use bevy_egui::egui;
use hexx::Hex;

use super::TerrainConfig;
use super::entities::{HexTile, TerrainRoot, TileHeights, TileMaterials};
use crate::camera::FlyCamera;
use crate::grid_build;

// ── Update: tile meshes ────────────────────────────────────────────

/// Despawns the previous terrain (if any) and rebuilds every tile from the
/// current [`TileHeights`] snapshot.
///
/// Tiles are built in parallel on the compute task pool, then spawned as
/// children of a fresh [`TerrainRoot`] with their biome's material.
pub fn sync_tile_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    heights: Res<TileHeights>,
    materials: Res<TileMaterials>,
    cfg: Res<TerrainConfig>,
    roots: Query<Entity, With<TerrainRoot>>,
) {
    for root in &roots {
        commands.entity(root).despawn();
    }

    let layout = cfg.layout();
    let coords: Vec<Hex> = heights.dimensions.coords().collect();
    let tiles = grid_build::build_grid(&heights.field, &coords, &cfg.mesh);

    let root = commands
        .spawn((
            TerrainRoot,
            Name::new("HexTerrain"),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    for tile in tiles {
        let material = materials.pick(tile.coord, heights.biome_at(&tile.coord));
        let child = commands
            .spawn((
                HexTile {
                    coord: tile.coord,
                    level: tile.level,
                },
                Name::new(format!("HexTile({},{})", tile.coord.x, tile.coord.y)),
                Mesh3d(meshes.add(tile.mesh.to_mesh())),
                MeshMaterial3d(material),
                Transform::from_translation(layout.world_position(tile.coord)),
            ))
            .id();
        commands.entity(root).add_child(child);
    }

    info!(
        "built {} hex tiles ({}x{})",
        coords.len(),
        heights.dimensions.width,
        heights.dimensions.height
    );
}

// ── Update: debug labels ───────────────────────────────────────────

/// Draws `column,row:level` above each nearby [`HexTile`] as a screen-projected
/// egui label.
pub fn draw_tile_labels(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    camera_q: Query<(&Camera, &GlobalTransform), With<FlyCamera>>,
    tiles: Query<(&GlobalTransform, &HexTile)>,
    cfg: Res<TerrainConfig>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok((camera, cam_gt)) = camera_q.single() else {
        return;
    };
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let cam_pos = cam_gt.translation();
    let hex_size = cfg.mesh.hex_size();

    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());

    for (tile_gt, tile) in &tiles {
        let top = tile_gt.translation() + Vec3::Y * cfg.mesh.world_height(tile.level);
        if cam_pos.distance(top) > 30.0 * hex_size {
            continue;
        }
        if let Ok(viewport) = camera.world_to_viewport(cam_gt, top) {
            painter.text(
                egui::pos2(viewport.x, viewport.y),
                egui::Align2::CENTER_CENTER,
                format!("{},{}:{}", tile.coord.x, tile.coord.y, tile.level),
                egui::FontId::proportional(11.0),
                egui::Color32::WHITE,
            );
        }
    }
}
