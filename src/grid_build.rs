//! Whole-grid mesh building on Bevy's compute task pool.
//!
//! Every tile build reads the shared [`HeightField`] and writes only its own
//! output slot, so tiles are fanned out in chunks with no locking. The field is
//! borrowed immutably for the whole build; callers that keep editing heights
//! build from a cloned snapshot.

use bevy::log::debug;
use bevy::tasks::{ComputeTaskPool, TaskPool};
use hexx::Hex;

use crate::height_field::HeightField;
use crate::hex_mesh::{self, HexMesh, HexMeshSettings};

/// Tiles handed to one worker task.
pub const TILES_PER_TASK: usize = 64;

/// A built tile mesh and the level it was built at.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMesh {
    /// Tile coordinate.
    pub coord: Hex,
    /// Level the cap was built at (0 for coordinates with no placed tile).
    pub level: u32,
    /// Generated geometry, relative to the tile's world position.
    pub mesh: HexMesh,
}

/// Builds the mesh of a single tile from the field.
///
/// Coordinates without a placed tile are built at ground level.
pub fn build_tile(field: &HeightField, coord: Hex, settings: &HexMeshSettings) -> TileMesh {
    let level = field.height_or_ground(&coord);
    let neighbors = field.neighbor_heights(coord, settings.hex_size());
    TileMesh {
        coord,
        level,
        mesh: hex_mesh::build(level, settings, &neighbors),
    }
}

/// Builds every tile in `coords`, in parallel, preserving input order.
pub fn build_grid(
    field: &HeightField,
    coords: &[Hex],
    settings: &HexMeshSettings,
) -> Vec<TileMesh> {
    let pool = ComputeTaskPool::get_or_init(TaskPool::default);

    let chunks: Vec<Vec<TileMesh>> = pool.scope(|scope| {
        for chunk in coords.chunks(TILES_PER_TASK) {
            scope.spawn(async move {
                chunk
                    .iter()
                    .map(|&coord| build_tile(field, coord, settings))
                    .collect::<Vec<_>>()
            });
        }
    });

    debug!(
        "built {} tile meshes in {} tasks",
        coords.len(),
        chunks.len()
    );
    chunks.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex_mesh::CAP_VERTEX_COUNT;
    use crate::layout::GridDimensions;

    fn sloped_field(width: u32, height: u32) -> HeightField {
        GridDimensions { width, height }
            .coords()
            .map(|c| (c, ((c.x + 2 * c.y) % 6) as u32))
            .collect()
    }

    #[test]
    fn parallel_build_matches_sequential_build() {
        let dims = GridDimensions {
            width: 17,
            height: 9,
        };
        let field = sloped_field(dims.width, dims.height);
        let coords: Vec<Hex> = dims.coords().collect();
        let settings = HexMeshSettings::default();

        let parallel = build_grid(&field, &coords, &settings);
        let sequential: Vec<TileMesh> = coords
            .iter()
            .map(|&c| build_tile(&field, c, &settings))
            .collect();

        assert_eq!(parallel.len(), coords.len());
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn output_order_follows_input_order() {
        let field = sloped_field(10, 10);
        let mut coords: Vec<Hex> = GridDimensions {
            width: 10,
            height: 10,
        }
        .coords()
        .collect();
        coords.reverse();

        let built = build_grid(&field, &coords, &HexMeshSettings::default());
        let out: Vec<Hex> = built.iter().map(|t| t.coord).collect();
        assert_eq!(out, coords);
    }

    #[test]
    fn unplaced_coordinate_builds_at_ground() {
        let field = HeightField::rectangle(2, 2, 3);
        let tile = build_tile(&field, Hex::new(5, 5), &HexMeshSettings::default());
        assert_eq!(tile.level, 0);
        assert!(tile.mesh.positions[2].y.abs() < 1e-6);
    }

    #[test]
    fn edge_tile_walls_drop_to_ground_on_open_sides() {
        let settings = HexMeshSettings::default();
        let field = HeightField::rectangle(3, 3, 4);
        let tile = build_tile(&field, Hex::new(0, 0), &settings);
        // West (edge 3) has no neighbor: the wall bottom sits on the ground.
        let bottom = tile.mesh.positions[CAP_VERTEX_COUNT + 3 * 4 + 2];
        assert!(bottom.y.abs() < 1e-6);
    }

    #[test]
    fn empty_coordinate_list_builds_nothing() {
        let built = build_grid(&HeightField::new(), &[], &HexMeshSettings::default());
        assert!(built.is_empty());
    }
}
