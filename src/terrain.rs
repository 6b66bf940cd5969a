//! Hex terrain plugin: height source, parallel tile mesh build, tile entities.
//!
//! Tiles are rebuilt in full whenever the [`TileHeights`] resource changes;
//! its first insertion counts as a change, so the initial spawn takes the same
//! path as every later rebuild.

mod entities;
mod height_source;
mod startup_systems;
mod systems;

pub use entities::{HexTile, TerrainRoot, TileHeights, TileMaterials, biome_color};
pub use height_source::noise_height_field;

use std::path::PathBuf;

use bevy::prelude::*;

use crate::GameState;
use crate::hex_mesh::HexMeshSettings;
use crate::layout::{GridDimensions, TileLayout};

/// Nested configuration for the terrain subsystem.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct TerrainConfig {
    /// Validated tile geometry shared by every tile.
    pub mesh: HexMeshSettings,
    /// Saved map to load; the noise field is used when absent or unreadable.
    pub map_path: Option<PathBuf>,
    /// Noise-generated fallback field.
    pub noise: NoiseSettings,
    /// Background clear color.
    pub clear_color: Color,
}

/// Parameters of the noise-generated height field.
#[derive(Clone, Debug, Reflect)]
pub struct NoiseSettings {
    /// Grid extent.
    pub dimensions: GridDimensions,
    /// Seed for the height noise generator.
    pub seed: u32,
    /// Number of fractal octaves.
    pub octaves: usize,
    /// Spatial scale divisor for noise sampling (in tile-radius units).
    pub scale: f64,
    /// Highest level produced.
    pub max_level: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            mesh: HexMeshSettings::default(),
            map_path: None,
            noise: NoiseSettings {
                dimensions: GridDimensions {
                    width: 32,
                    height: 24,
                },
                seed: 42,
                octaves: 4,
                scale: 18.0,
                max_level: 10,
            },
            clear_color: Color::srgb(0.52, 0.68, 0.85),
        }
    }
}

impl TerrainConfig {
    /// Tile placement for this configuration's hex size.
    pub fn layout(&self) -> TileLayout {
        TileLayout {
            hex_size: self.mesh.hex_size(),
        }
    }
}

/// Terrain plugin: loads heights at startup, (re)builds tile meshes on change.
pub struct TerrainPlugin(pub TerrainConfig);

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TerrainConfig>()
            .register_type::<HexTile>()
            .register_type::<TerrainRoot>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(
                Startup,
                (
                    startup_systems::spawn_sun,
                    (
                        startup_systems::load_heights,
                        startup_systems::setup_tile_materials,
                    )
                        .chain(),
                ),
            )
            .add_systems(
                Update,
                systems::sync_tile_meshes.run_if(resource_exists_and_changed::<TileHeights>),
            );

        app.add_systems(
            Update,
            systems::draw_tile_labels.run_if(in_state(GameState::Debugging)),
        );
    }
}
