//! Integer elevation levels keyed by tile coordinate.
//!
//! A [`HeightField`] is the read-only data source the mesh builder queries for
//! neighbor elevations. Absence of a tile and a tile at level 0 are different
//! things: [`HeightField::exists`] tells them apart, and only
//! [`HeightField::height_or_ground`] folds the two together for wall-drop math.

use bevy::platform::collections::HashMap;
use hexx::Hex;

/// One of the six neighbor directions of the offset-column tile layout.
///
/// Direction 0 is east, the rest proceed counter-clockwise. The coordinate
/// deltas are fixed by the layout; changing them breaks wall continuity between
/// adjacent tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDirection {
    /// `(+1, 0)`
    East,
    /// `(0, +1)`
    NorthEast,
    /// `(-1, +1)`
    NorthWest,
    /// `(-1, 0)`
    West,
    /// `(0, -1)`
    SouthWest,
    /// `(+1, -1)`
    SouthEast,
}

impl HexDirection {
    /// All directions in canonical (index) order.
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Direction for a canonical index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`. An out-of-range direction is a caller bug and
    /// is never clamped.
    pub fn from_index(index: usize) -> Self {
        match Self::ALL.get(index) {
            Some(&dir) => dir,
            None => panic!("hex direction index {index} out of range 0..6"),
        }
    }

    /// Canonical index in `0..6`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Coordinate delta `(column, row)` to the neighbor in this direction.
    pub const fn offset(self) -> Hex {
        match self {
            Self::East => Hex::new(1, 0),
            Self::NorthEast => Hex::new(0, 1),
            Self::NorthWest => Hex::new(-1, 1),
            Self::West => Hex::new(-1, 0),
            Self::SouthWest => Hex::new(0, -1),
            Self::SouthEast => Hex::new(1, -1),
        }
    }

    /// The direction pointing back from the neighbor.
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }
}

/// Mapping from tile coordinate (`x` = column, `y` = row) to elevation level.
#[derive(Clone, Debug)]
pub struct HeightField {
    levels: HashMap<Hex, u32>,
}

impl Default for HeightField {
    fn default() -> Self {
        Self::new()
    }
}

impl HeightField {
    /// An empty field with no tiles placed.
    pub fn new() -> Self {
        Self {
            levels: HashMap::new(),
        }
    }

    /// A `width × height` rectangle of columns/rows starting at `(0, 0)`, every
    /// tile at `level`.
    pub fn rectangle(width: u32, height: u32, level: u32) -> Self {
        (0..height as i32)
            .flat_map(|row| (0..width as i32).map(move |col| (Hex::new(col, row), level)))
            .collect()
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Whether a tile has been placed at `coord`.
    pub fn exists(&self, coord: &Hex) -> bool {
        self.levels.contains_key(coord)
    }

    /// Elevation level of the tile at `coord`, `None` if no tile is placed.
    pub fn height(&self, coord: &Hex) -> Option<u32> {
        self.levels.get(coord).copied()
    }

    /// Elevation level of the tile at `coord`, `0` (ground) if no tile is placed.
    pub fn height_or_ground(&self, coord: &Hex) -> u32 {
        self.height(coord).unwrap_or(0)
    }

    /// Coordinate of the adjacent tile in `direction` (whether or not it exists).
    pub fn neighbor(coord: Hex, direction: HexDirection) -> Hex {
        coord + direction.offset()
    }

    /// World-space top elevation of each neighbor of `coord`, indexed by
    /// [`HexDirection::index`]. `None` where no neighbor tile exists.
    pub fn neighbor_heights(&self, coord: Hex, hex_size: f32) -> [Option<f32>; 6] {
        std::array::from_fn(|i| {
            let neighbor = Self::neighbor(coord, HexDirection::from_index(i));
            self.height(&neighbor).map(|level| level as f32 * hex_size)
        })
    }

    /// Every tile whose mesh depends on the level at `coord`: the tile itself
    /// followed by its six neighbors in direction order.
    pub fn rebuild_set(coord: Hex) -> [Hex; 7] {
        std::array::from_fn(|i| match i {
            0 => coord,
            _ => Self::neighbor(coord, HexDirection::from_index(i - 1)),
        })
    }

    /// Number of placed tiles.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when no tile is placed.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterates placed tiles. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (Hex, u32)> + '_ {
        self.levels.iter().map(|(&coord, &level)| (coord, level))
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Places (or re-levels) the tile at `coord`, returning the previous level.
    pub fn set_height(&mut self, coord: Hex, level: u32) -> Option<u32> {
        self.levels.insert(coord, level)
    }

    /// Removes the tile at `coord`, returning its level if it existed.
    pub fn remove(&mut self, coord: &Hex) -> Option<u32> {
        self.levels.remove(coord)
    }
}

impl FromIterator<(Hex, u32)> for HeightField {
    fn from_iter<I: IntoIterator<Item = (Hex, u32)>>(iter: I) -> Self {
        let mut field = Self::new();
        for (coord, level) in iter {
            field.set_height(coord, level);
        }
        field
    }
}
