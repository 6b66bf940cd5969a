use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::error::TerrainError;
use crate::height_field::HeightField;
use crate::layout::TileLayout;
use crate::map_data::HexMapData;
use crate::math;

use super::NoiseSettings;
use super::entities::TileHeights;

/// Samples fractal Perlin noise at each cell's unit-radius world position and
/// quantizes it into `0..=max_level`. Every cell of the grid gets a tile.
pub fn noise_height_field(n: &NoiseSettings) -> HeightField {
    let unit_layout = TileLayout { hex_size: 1.0 };
    let fbm: Fbm<Perlin> = Fbm::new(n.seed).set_octaves(n.octaves);

    n.dimensions
        .coords()
        .map(|coord| {
            let pos = unit_layout.world_position(coord);
            let noise_val = fbm.get([pos.x as f64 / n.scale, pos.z as f64 / n.scale]);
            (coord, math::noise_to_level(noise_val, n.max_level))
        })
        .collect()
}

impl TileHeights {
    /// Heights sampled from noise.
    pub fn from_noise(n: &NoiseSettings) -> Self {
        Self::new(noise_height_field(n), n.dimensions)
    }

    /// Heights and biomes of the painted cells of a saved map.
    pub fn from_map(map: &HexMapData) -> Result<Self, TerrainError> {
        Ok(Self {
            field: map.to_height_field()?,
            dimensions: map.dimensions(),
            biomes: map.biome_field(),
            biome_names: map.biome_names.clone(),
        })
    }
}
