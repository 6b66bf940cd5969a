use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use hexx::Hex;

use crate::height_field::HeightField;
use crate::layout::GridDimensions;
use crate::math;

/// Frozen height snapshot every tile mesh is built from.
///
/// Replace (or mutate) it to trigger a full rebuild of the terrain.
#[derive(Resource, Clone, Debug)]
pub struct TileHeights {
    /// Placed tiles and their levels.
    pub field: HeightField,
    /// Grid extent; every cell inside it gets a tile mesh.
    pub dimensions: GridDimensions,
    /// Biome painted on each cell. Cells missing here take the first biome.
    pub biomes: HashMap<Hex, String>,
    /// Biome palette in map order; one tile material is built per entry.
    pub biome_names: Vec<String>,
}

impl TileHeights {
    /// Heights without any biome information.
    pub fn new(field: HeightField, dimensions: GridDimensions) -> Self {
        Self {
            field,
            dimensions,
            biomes: HashMap::default(),
            biome_names: Vec::new(),
        }
    }

    /// Biome painted on `coord`, if any.
    pub fn biome_at(&self, coord: &Hex) -> Option<&str> {
        self.biomes.get(coord).map(String::as_str)
    }
}

/// Parent of all [`HexTile`] entities; despawned and respawned on rebuild.
#[derive(Component, Reflect)]
pub struct TerrainRoot;

/// Marker on tile mesh entities.
#[derive(Component, Reflect)]
pub struct HexTile {
    /// The tile coordinate this mesh represents.
    pub coord: Hex,
    /// Level the mesh was built at.
    pub level: u32,
}

/// Tile materials: one per biome of the palette, plus a plain one for
/// terrain without biomes. Vertex colors tint all of them.
#[derive(Resource, Clone, Debug)]
pub struct TileMaterials {
    /// White material used when the palette is empty.
    pub plain: Handle<StandardMaterial>,
    /// Material per biome name, in palette order.
    pub biomes: Vec<(String, Handle<StandardMaterial>)>,
}

impl TileMaterials {
    /// Adds the plain material and one material per biome to `materials`.
    pub fn new(biome_names: &[String], materials: &mut Assets<StandardMaterial>) -> Self {
        let plain = materials.add(tile_material(Color::WHITE));
        let biomes = biome_names
            .iter()
            .map(|name| (name.clone(), materials.add(tile_material(biome_color(name)))))
            .collect();
        Self { plain, biomes }
    }

    /// Material of the first biome, or the plain one when there are none.
    pub fn fallback(&self) -> &Handle<StandardMaterial> {
        self.biomes.first().map_or(&self.plain, |(_, handle)| handle)
    }

    /// Material for the tile at `coord` painted with `biome`.
    ///
    /// Unpainted tiles take the fallback silently; a biome without a material
    /// takes it with a warning.
    pub fn pick(&self, coord: Hex, biome: Option<&str>) -> Handle<StandardMaterial> {
        let Some(name) = biome else {
            return self.fallback().clone();
        };
        match self.biomes.iter().find(|(known, _)| known == name) {
            Some((_, handle)) => handle.clone(),
            None => {
                warn!(
                    "biome {name} at ({}, {}) has no material; using the first biome",
                    coord.x, coord.y
                );
                self.fallback().clone()
            }
        }
    }
}

/// Base color of a biome, derived from its name.
pub fn biome_color(name: &str) -> Color {
    Color::hsl(math::name_hue(name), 0.45, 0.55)
}

fn tile_material(base_color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color,
        perceptual_roughness: 0.85,
        ..default()
    }
}
