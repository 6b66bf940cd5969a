//! Saved hex maps: grid extent plus one `{x, y, biomeName, height}` record per
//! painted cell, stored as pretty-printed JSON.
//!
//! Levels feed mesh building; biome names pick each tile's material.

use std::fs;
use std::path::Path;

use bevy::log::debug;
use bevy::platform::collections::HashMap;
use hexx::Hex;
use serde::{Deserialize, Serialize};

use crate::error::TerrainError;
use crate::height_field::HeightField;
use crate::layout::GridDimensions;

/// Level assigned by the painting tool to cells that were never height-painted.
pub const DEFAULT_PAINTED_LEVEL: u32 = 1;

/// One painted cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HexCellData {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Biome identifier, empty when unassigned.
    #[serde(default)]
    pub biome_name: String,
    /// Elevation level.
    #[serde(default = "default_level")]
    pub height: u32,
}

fn default_level() -> u32 {
    DEFAULT_PAINTED_LEVEL
}

/// A saved map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HexMapData {
    /// Grid columns.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// Painted cells.
    #[serde(default)]
    pub cells: Vec<HexCellData>,
    /// Biome palette available when the map was painted.
    #[serde(default)]
    pub biome_names: Vec<String>,
}

impl HexMapData {
    /// Parses a map from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, TerrainError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TerrainError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let map = Self::from_json_str(&json)?;
        debug!(
            "loaded map {}: {}x{}, {} cells",
            path.display(),
            map.width,
            map.height,
            map.cells.len()
        );
        Ok(map)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, TerrainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the map to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TerrainError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Grid extent.
    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Height field of the painted cells. Later records for the same cell
    /// overwrite earlier ones.
    ///
    /// Fails if any cell lies outside the declared grid.
    pub fn to_height_field(&self) -> Result<HeightField, TerrainError> {
        let dims = self.dimensions();
        let mut field = HeightField::new();
        for cell in &self.cells {
            let coord = Hex::new(cell.x, cell.y);
            if !dims.contains(coord) {
                return Err(TerrainError::CellOutOfBounds {
                    x: cell.x,
                    y: cell.y,
                    width: self.width,
                    height: self.height,
                });
            }
            field.set_height(coord, cell.height);
        }
        Ok(field)
    }

    /// Biome name recorded for `coord`, if the cell was painted with one.
    pub fn biome_at(&self, coord: Hex) -> Option<&str> {
        self.cells
            .iter()
            .rev()
            .find(|c| c.x == coord.x && c.y == coord.y)
            .map(|c| c.biome_name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Biome name of every cell painted with one. Later records for the same
    /// cell overwrite earlier ones.
    pub fn biome_field(&self) -> HashMap<Hex, String> {
        self.cells
            .iter()
            .filter(|c| !c.biome_name.is_empty())
            .map(|c| (Hex::new(c.x, c.y), c.biome_name.clone()))
            .collect()
    }

    /// Builds a map record from a height field. Cells are written in row-major
    /// order; `biome_of` names each cell's biome.
    pub fn from_height_field(
        dims: GridDimensions,
        field: &HeightField,
        biome_of: impl Fn(Hex) -> Option<String>,
    ) -> Self {
        let mut coords: Vec<(Hex, u32)> = field.iter().collect();
        coords.sort_by_key(|(c, _)| (c.y, c.x));

        let cells = coords
            .into_iter()
            .map(|(coord, level)| HexCellData {
                x: coord.x,
                y: coord.y,
                biome_name: biome_of(coord).unwrap_or_default(),
                height: level,
            })
            .collect();

        Self {
            width: dims.width,
            height: dims.height,
            cells,
            biome_names: Vec::new(),
        }
    }
}
