//! World placement of tiles in the odd-column shifted layout.

use bevy::prelude::*;
use hexx::Hex;

/// Grid extent in columns (`width`) and rows (`height`), origin at `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct GridDimensions {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl GridDimensions {
    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Hex) -> bool {
        (0..self.width as i32).contains(&coord.x) && (0..self.height as i32).contains(&coord.y)
    }

    /// Every coordinate of the grid, rows outer and columns inner.
    pub fn coords(&self) -> impl Iterator<Item = Hex> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |row| (0..width).map(move |col| Hex::new(col, row)))
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Places tiles of outer radius `hex_size` in flat-topped columns.
///
/// Columns are `1.5 · hex_size` apart, rows `√3 · hex_size`; odd columns are
/// shifted half a row along +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    /// Hex outer radius.
    pub hex_size: f32,
}

impl TileLayout {
    /// Horizontal distance between adjacent column centers.
    pub fn column_spacing(&self) -> f32 {
        2.0 * self.hex_size * 0.75
    }

    /// Distance between adjacent row centers within a column.
    pub fn row_spacing(&self) -> f32 {
        3.0_f32.sqrt() * self.hex_size
    }

    /// World position of the tile's center at ground level.
    pub fn world_position(&self, coord: Hex) -> Vec3 {
        let x = coord.x as f32 * self.column_spacing();
        let mut z = coord.y as f32 * self.row_spacing();
        if coord.x % 2 == 1 {
            z += self.row_spacing() / 2.0;
        }
        Vec3::new(x, 0.0, z)
    }

    /// Midpoint of the grid's first and last tile centers.
    pub fn center(&self, dims: GridDimensions) -> Vec3 {
        let last = Hex::new(dims.width as i32 - 1, dims.height as i32 - 1);
        (self.world_position(Hex::ZERO) + self.world_position(last)) / 2.0
    }
}
