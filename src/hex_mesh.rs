//! Bevelled, dome-topped hex tile mesh with neighbor-aware connector walls.
//!
//! The builder is a pure function of its inputs: the tile's own level, the
//! geometric [`HexMeshSettings`], and the world-space top elevation of each of
//! its six neighbors. Identical inputs always yield bit-identical output, so
//! whole grids can be built on any number of workers.
//!
//! # Layout of a built mesh
//!
//! | vertices | contents                                             |
//! |----------|------------------------------------------------------|
//! | `0`      | raised cap center                                    |
//! | `1..13`  | per corner `i`: bevelled corner, then outer corner   |
//! | `13..37` | per edge `i`: top A, top B, bottom A, bottom B       |
//!
//! The cap contributes 18 triangles (three per sector), the walls 12 (two per
//! edge). Coincident positions are *not* welded: the cap's outer ring and the
//! walls' top ring are separate vertices, so smooth shading stops at that seam.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;

use crate::error::TerrainError;
use crate::height_field::HexDirection;
use crate::math;

/// Vertices contributed by the top cap: center plus six (bevelled, outer) pairs.
pub const CAP_VERTEX_COUNT: usize = 13;
/// Triangles contributed by the top cap.
pub const CAP_TRIANGLE_COUNT: usize = 18;
/// Vertices contributed by the six wall quads.
pub const WALL_VERTEX_COUNT: usize = 24;
/// Triangles contributed by the six wall quads.
pub const WALL_TRIANGLE_COUNT: usize = 12;

/// Default hex outer radius.
pub const DEFAULT_HEX_SIZE: f32 = 1.0;
/// Default fraction each outer corner is pulled toward the raised center.
pub const DEFAULT_BEVEL_SIZE: f32 = 0.05;
/// Default extra elevation of the center vertex, in units of hex size.
pub const DEFAULT_DOME_HEIGHT_FACTOR: f32 = 0.1;

/// Cap center and outer ring.
pub const CAP_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Bevel ring: black scaled by 0.6.
pub const BEVEL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.6];
/// Wall quads: mid gray scaled by 0.4.
pub const WALL_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 0.4];

const BEVEL_UV_RADIUS: f32 = 0.3;
const OUTER_UV_RADIUS: f32 = 0.8;
const OUTER_UV_SHIFT: f32 = 0.2;
const WALL_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
];

/// Validated geometric constants shared by every tile of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct HexMeshSettings {
    hex_size: f32,
    bevel_size: f32,
    dome_height_factor: f32,
}

impl Default for HexMeshSettings {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            bevel_size: DEFAULT_BEVEL_SIZE,
            dome_height_factor: DEFAULT_DOME_HEIGHT_FACTOR,
        }
    }
}

impl HexMeshSettings {
    /// Validates and bundles the geometric constants.
    ///
    /// Rejects a non-positive or non-finite `hex_size`, a `bevel_size` outside
    /// `[0, 1]`, and a non-finite `dome_height_factor`; any of those would
    /// yield inverted or zero-area geometry.
    pub fn new(
        hex_size: f32,
        bevel_size: f32,
        dome_height_factor: f32,
    ) -> Result<Self, TerrainError> {
        if !hex_size.is_finite() || hex_size <= 0.0 {
            return Err(TerrainError::InvalidHexSize(hex_size));
        }
        if !(0.0..=1.0).contains(&bevel_size) {
            return Err(TerrainError::InvalidBevelSize(bevel_size));
        }
        if !dome_height_factor.is_finite() {
            return Err(TerrainError::InvalidDomeHeight(dome_height_factor));
        }
        Ok(Self {
            hex_size,
            bevel_size,
            dome_height_factor,
        })
    }

    /// Hex outer radius; also the world height of one elevation level.
    pub fn hex_size(&self) -> f32 {
        self.hex_size
    }

    /// Fraction each outer corner is pulled toward the raised center.
    pub fn bevel_size(&self) -> f32 {
        self.bevel_size
    }

    /// Extra elevation of the center vertex, in units of hex size.
    pub fn dome_height_factor(&self) -> f32 {
        self.dome_height_factor
    }

    /// World-space elevation of a level.
    pub fn world_height(&self, level: u32) -> f32 {
        level as f32 * self.hex_size
    }
}

/// Generated geometry for one tile.
///
/// `positions`, `uvs`, `colors` and `normals` always have the same length;
/// every index in `triangles` is below that length.
#[derive(Debug, Clone, PartialEq)]
pub struct HexMesh {
    /// Vertex positions relative to the tile center at world ground level.
    pub positions: Vec<Vec3>,
    /// Counter-clockwise (front-facing) index triples.
    pub triangles: Vec<[u32; 3]>,
    /// One UV per vertex.
    pub uvs: Vec<Vec2>,
    /// One linear RGBA color per vertex.
    pub colors: Vec<[f32; 4]>,
    /// One unit normal per vertex, averaged over the triangles sharing it.
    pub normals: Vec<Vec3>,
}

impl HexMesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Flat index buffer (three entries per triangle).
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Converts into a Bevy triangle-list [`Mesh`] with position, normal,
    /// UV and vertex-color attributes.
    pub fn to_mesh(&self) -> Mesh {
        let positions: Vec<[f32; 3]> = self.positions.iter().map(|p| p.to_array()).collect();
        let normals: Vec<[f32; 3]> = self.normals.iter().map(|n| n.to_array()).collect();
        let uvs: Vec<[f32; 2]> = self.uvs.iter().map(|uv| uv.to_array()).collect();

        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, self.colors.clone())
        .with_inserted_indices(Indices::U32(self.indices()))
    }
}

impl From<&HexMesh> for Mesh {
    fn from(hex_mesh: &HexMesh) -> Self {
        hex_mesh.to_mesh()
    }
}

/// Lowest ground any wall of the tile may reach: the minimum world height
/// over all six neighbors (absent ones count as 0), never above 0.
pub fn lowest_ground(neighbor_heights: &[Option<f32>; 6]) -> f32 {
    neighbor_heights
        .iter()
        .map(|h| h.unwrap_or(0.0))
        .fold(0.0, f32::min)
}

/// Drop of the wall on one edge, from the tile's top down to its bottom.
///
/// `own_height` is the tile's world-space top elevation and `neighbor_height`
/// the neighbor's (0 when absent). A neighbor exactly at 0 pins the bottom to
/// world ground. Walls shorter than one `hex_size` snap to the full
/// `own_height` so near-flush junctions never produce slivers.
pub fn wall_height(
    own_height: f32,
    neighbor_height: f32,
    lowest_ground: f32,
    hex_size: f32,
) -> f32 {
    let lowest_point = if neighbor_height == 0.0 {
        0.0
    } else {
        neighbor_height.min(lowest_ground)
    };

    let wall = own_height - lowest_point;
    if wall < hex_size { own_height } else { wall }
}

/// Builds the mesh for one tile at `own_level`.
///
/// `neighbor_heights[d]` is the world-space top elevation of the neighbor in
/// [`HexDirection::from_index`]`(d)`, or `None` if no tile exists there. The
/// wall on edge `d` spans outer corners `d` and `d + 1`.
pub fn build(
    own_level: u32,
    settings: &HexMeshSettings,
    neighbor_heights: &[Option<f32>; 6],
) -> HexMesh {
    let size = settings.hex_size;
    let own_height = settings.world_height(own_level);
    let center = Vec3::new(0.0, own_height + settings.dome_height_factor * size, 0.0);

    let directions: [Vec2; 6] = std::array::from_fn(|i| {
        let angle = (60.0 * i as f32).to_radians();
        Vec2::new(angle.cos(), angle.sin())
    });
    let outer: [Vec3; 6] = std::array::from_fn(|i| {
        Vec3::new(directions[i].x * size, own_height, directions[i].y * size)
    });
    let bevelled: [Vec3; 6] = std::array::from_fn(|i| outer[i].lerp(center, settings.bevel_size));

    let mut positions = Vec::with_capacity(CAP_VERTEX_COUNT + WALL_VERTEX_COUNT);
    let mut uvs = Vec::with_capacity(CAP_VERTEX_COUNT + WALL_VERTEX_COUNT);
    let mut colors = Vec::with_capacity(CAP_VERTEX_COUNT + WALL_VERTEX_COUNT);
    let mut triangles = Vec::with_capacity(CAP_TRIANGLE_COUNT + WALL_TRIANGLE_COUNT);

    // ── Cap ────────────────────────────────────────────────────────

    positions.push(center);
    uvs.push(Vec2::splat(0.5));
    colors.push(CAP_COLOR);

    for ((dir, &bevel), &corner) in directions.iter().zip(&bevelled).zip(&outer) {
        positions.push(bevel);
        uvs.push(Vec2::splat(0.5) + *dir * BEVEL_UV_RADIUS);
        colors.push(BEVEL_COLOR);

        positions.push(corner);
        uvs.push(Vec2::splat(0.5) + *dir * OUTER_UV_RADIUS - Vec2::new(0.0, OUTER_UV_SHIFT));
        colors.push(CAP_COLOR);
    }

    for i in 0..6u32 {
        let next = (i + 1) % 6;
        let inner = i * 2 + 1;
        let outer_idx = i * 2 + 2;
        let next_inner = next * 2 + 1;
        let next_outer = next * 2 + 2;

        triangles.push([0, next_inner, inner]);
        triangles.push([inner, next_inner, next_outer]);
        triangles.push([inner, next_outer, outer_idx]);
    }

    // ── Walls ──────────────────────────────────────────────────────

    let ground = lowest_ground(neighbor_heights);

    for dir in HexDirection::ALL {
        let i = dir.index();
        let top_a = outer[i];
        let top_b = outer[(i + 1) % 6];

        let neighbor_height = neighbor_heights[i].unwrap_or(0.0);
        let drop = wall_height(own_height, neighbor_height, ground, size);

        let base = positions.len() as u32;
        positions.extend([top_a, top_b, top_a - Vec3::Y * drop, top_b - Vec3::Y * drop]);
        uvs.extend(WALL_UVS);
        colors.extend([WALL_COLOR; 4]);

        triangles.push([base, base + 1, base + 2]);
        triangles.push([base + 1, base + 3, base + 2]);
    }

    let normals = smooth_normals(&positions, &triangles);

    HexMesh {
        positions,
        triangles,
        uvs,
        colors,
        normals,
    }
}

/// Averages face normals into the vertices each triangle references.
///
/// Only triangles sharing a vertex *index* contribute to its normal. Vertices
/// touched solely by zero-area triangles fall back to `+Y`.
pub fn smooth_normals(positions: &[Vec3], triangles: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for &[a, b, c] in triangles {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let face = math::compute_normal(positions[a], positions[b], positions[c]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for n in &mut normals {
        let unit = n.normalize_or_zero();
        *n = if unit == Vec3::ZERO { Vec3::Y } else { unit };
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_NEIGHBORS: [Option<f32>; 6] = [None; 6];

    fn unit_settings() -> HexMeshSettings {
        HexMeshSettings::new(1.0, 0.05, 0.1).unwrap()
    }

    /// Drop of the wall on `edge`, read back from its top/bottom vertices.
    fn built_wall_height(mesh: &HexMesh, edge: usize) -> f32 {
        let base = CAP_VERTEX_COUNT + edge * 4;
        mesh.positions[base].y - mesh.positions[base + 2].y
    }

    // ── Settings validation ────────────────────────────────────────

    #[test]
    fn rejects_non_positive_hex_size() {
        assert!(matches!(
            HexMeshSettings::new(0.0, 0.05, 0.1),
            Err(TerrainError::InvalidHexSize(_))
        ));
        assert!(matches!(
            HexMeshSettings::new(-1.0, 0.05, 0.1),
            Err(TerrainError::InvalidHexSize(_))
        ));
        assert!(HexMeshSettings::new(f32::NAN, 0.05, 0.1).is_err());
    }

    #[test]
    fn rejects_bevel_outside_unit_interval() {
        assert!(matches!(
            HexMeshSettings::new(1.0, 1.5, 0.1),
            Err(TerrainError::InvalidBevelSize(_))
        ));
        assert!(HexMeshSettings::new(1.0, -0.01, 0.1).is_err());
        assert!(HexMeshSettings::new(1.0, f32::NAN, 0.1).is_err());
        assert!(HexMeshSettings::new(1.0, 0.0, 0.1).is_ok());
        assert!(HexMeshSettings::new(1.0, 1.0, 0.1).is_ok());
    }

    #[test]
    fn rejects_non_finite_dome() {
        assert!(matches!(
            HexMeshSettings::new(1.0, 0.05, f32::INFINITY),
            Err(TerrainError::InvalidDomeHeight(_))
        ));
    }

    #[test]
    fn default_settings_match_documented_constants() {
        let s = HexMeshSettings::default();
        assert_eq!(s.hex_size(), 1.0);
        assert_eq!(s.bevel_size(), 0.05);
        assert_eq!(s.dome_height_factor(), 0.1);
    }

    // ── Structural invariants ──────────────────────────────────────

    #[test]
    fn build_is_deterministic() {
        let settings = HexMeshSettings::new(1.7, 0.2, 0.15).unwrap();
        let neighbors = [Some(3.4), None, Some(0.0), Some(8.5), None, Some(1.7)];
        let a = build(4, &settings, &neighbors);
        let b = build(4, &settings, &neighbors);
        assert_eq!(a, b);
    }

    #[test]
    fn attributes_are_parallel_to_positions() {
        for level in [0, 1, 5] {
            let mesh = build(level, &unit_settings(), &NO_NEIGHBORS);
            let n = mesh.vertex_count();
            assert_eq!(mesh.uvs.len(), n);
            assert_eq!(mesh.colors.len(), n);
            assert_eq!(mesh.normals.len(), n);
        }
    }

    #[test]
    fn triangle_indices_are_in_range() {
        let mesh = build(3, &unit_settings(), &[Some(1.0); 6]);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices().iter().all(|&i| i < n));
        assert_eq!(mesh.indices().len(), mesh.triangle_count() * 3);
    }

    #[test]
    fn cap_topology_is_fixed() {
        let cases = [
            (0, NO_NEIGHBORS),
            (7, [Some(2.0), None, Some(9.0), None, Some(0.0), None]),
        ];
        for (level, neighbors) in cases {
            let mesh = build(level, &unit_settings(), &neighbors);
            assert_eq!(mesh.vertex_count(), CAP_VERTEX_COUNT + WALL_VERTEX_COUNT);
            assert_eq!(mesh.triangle_count(), CAP_TRIANGLE_COUNT + WALL_TRIANGLE_COUNT);

            let cap_tris = &mesh.triangles[..CAP_TRIANGLE_COUNT];
            assert!(
                cap_tris.iter().flatten().all(|&i| (i as usize) < CAP_VERTEX_COUNT),
                "cap triangles must only reference cap vertices"
            );
        }
    }

    #[test]
    fn normals_are_unit_length() {
        let settings = unit_settings();
        let cases = [
            (0, NO_NEIGHBORS),
            (2, NO_NEIGHBORS),
            (5, [Some(4.8), Some(1.0), None, Some(6.0), Some(0.0), Some(2.0)]),
        ];
        for (level, neighbors) in cases {
            let mesh = build(level, &settings, &neighbors);
            for (i, n) in mesh.normals.iter().enumerate() {
                assert!(
                    (n.length() - 1.0).abs() < 1e-5,
                    "normal {i} at level {level} has length {}",
                    n.length()
                );
            }
        }
    }

    #[test]
    fn fully_bevelled_cap_still_has_unit_normals() {
        let settings = HexMeshSettings::new(1.0, 1.0, 0.1).unwrap();
        let mesh = build(1, &settings, &NO_NEIGHBORS);
        assert!(mesh.normals.iter().all(|n| (n.length() - 1.0).abs() < 1e-5));
    }

    // ── Cap geometry ───────────────────────────────────────────────

    #[test]
    fn cap_center_is_raised_by_dome() {
        let settings = HexMeshSettings::new(2.0, 0.05, 0.1).unwrap();
        let mesh = build(3, &settings, &NO_NEIGHBORS);
        assert_eq!(mesh.positions[0].x, 0.0);
        assert_eq!(mesh.positions[0].z, 0.0);
        assert!((mesh.positions[0].y - 6.2).abs() < 1e-5);
    }

    #[test]
    fn outer_corners_sit_on_radius_at_own_height() {
        let settings = HexMeshSettings::new(2.0, 0.05, 0.1).unwrap();
        let mesh = build(3, &settings, &NO_NEIGHBORS);
        for i in 0..6 {
            let corner = mesh.positions[2 + i * 2];
            assert!((corner.y - 6.0).abs() < 1e-6);
            let r = Vec2::new(corner.x, corner.z).length();
            assert!((r - 2.0).abs() < 1e-5, "corner {i} radius {r}");
        }
        assert!((mesh.positions[2].x - 2.0).abs() < 1e-6, "corner 0 lies on +X");
    }

    #[test]
    fn bevelled_corner_is_lerped_toward_center() {
        let settings = HexMeshSettings::new(1.0, 0.25, 0.4).unwrap();
        let mesh = build(1, &settings, &NO_NEIGHBORS);
        let center = mesh.positions[0];
        let outer = mesh.positions[2];
        let expected = outer + (center - outer) * 0.25;
        assert!((mesh.positions[1] - expected).length() < 1e-6);
    }

    #[test]
    fn cap_faces_point_up() {
        let mesh = build(2, &unit_settings(), &NO_NEIGHBORS);
        for &[a, b, c] in &mesh.triangles[..CAP_TRIANGLE_COUNT] {
            let n = math::compute_normal(
                mesh.positions[a as usize],
                mesh.positions[b as usize],
                mesh.positions[c as usize],
            );
            assert!(n.y > 0.0, "cap face {a},{b},{c} points down: {n:?}");
        }
    }

    #[test]
    fn cap_colors_darken_only_the_bevel_ring() {
        let mesh = build(1, &unit_settings(), &NO_NEIGHBORS);
        assert_eq!(mesh.colors[0], CAP_COLOR);
        for i in 0..6 {
            assert_eq!(mesh.colors[1 + i * 2], BEVEL_COLOR);
            assert_eq!(mesh.colors[2 + i * 2], CAP_COLOR);
        }
        assert!(mesh.colors[CAP_VERTEX_COUNT..].iter().all(|c| *c == WALL_COLOR));
    }

    #[test]
    fn cap_uvs_are_radial() {
        let mesh = build(1, &unit_settings(), &NO_NEIGHBORS);
        assert_eq!(mesh.uvs[0], Vec2::splat(0.5));
        assert!((mesh.uvs[1] - Vec2::new(0.8, 0.5)).length() < 1e-6);
        assert!((mesh.uvs[2] - Vec2::new(1.3, 0.3)).length() < 1e-6);
    }

    // ── Walls ──────────────────────────────────────────────────────

    #[test]
    fn near_flush_wall_snaps_to_full_height() {
        let mut neighbors = NO_NEIGHBORS;
        neighbors[0] = Some(4.8);
        let mesh = build(5, &unit_settings(), &neighbors);
        assert!((built_wall_height(&mesh, 0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn absent_neighbor_wall_reaches_ground() {
        let mesh = build(3, &unit_settings(), &NO_NEIGHBORS);
        for edge in 0..6 {
            assert!((built_wall_height(&mesh, edge) - 3.0).abs() < 1e-6);
            let bottom = mesh.positions[CAP_VERTEX_COUNT + edge * 4 + 2];
            assert!(bottom.y.abs() < 1e-6);
        }
    }

    #[test]
    fn wall_height_follows_lowest_point_rules() {
        // Neighbor exactly at ground pins the bottom to 0.
        assert_eq!(wall_height(3.0, 0.0, -2.0, 1.0), 3.0);
        // Sunken neighbor extends the wall below ground.
        assert_eq!(wall_height(3.0, -2.0, -2.0, 1.0), 5.0);
        // Positive neighbor is capped by the lowest ground (0).
        assert_eq!(wall_height(3.0, 1.0, 0.0, 1.0), 3.0);
        // Short wall snaps to own height.
        assert_eq!(wall_height(0.5, 0.0, 0.0, 1.0), 0.5);
        assert_eq!(wall_height(1.0, -0.5, -0.5, 2.0), 1.0);
    }

    #[test]
    fn lowest_ground_never_exceeds_zero() {
        assert_eq!(lowest_ground(&NO_NEIGHBORS), 0.0);
        assert_eq!(lowest_ground(&[Some(4.0); 6]), 0.0);
        let mut sunken = NO_NEIGHBORS;
        sunken[3] = Some(-1.5);
        assert_eq!(lowest_ground(&sunken), -1.5);
    }

    #[test]
    fn wall_quads_face_outward() {
        let mesh = build(2, &unit_settings(), &NO_NEIGHBORS);
        for (k, &[a, b, c]) in mesh.triangles[CAP_TRIANGLE_COUNT..].iter().enumerate() {
            let (pa, pb, pc) = (
                mesh.positions[a as usize],
                mesh.positions[b as usize],
                mesh.positions[c as usize],
            );
            let n = math::compute_normal(pa, pb, pc);
            let centroid = (pa + pb + pc) / 3.0;
            let outward = Vec3::new(centroid.x, 0.0, centroid.z);
            assert!(n.dot(outward) > 0.0, "wall triangle {k} faces inward");
        }
    }

    #[test]
    fn wall_uvs_and_edges_follow_corners() {
        let mesh = build(1, &unit_settings(), &NO_NEIGHBORS);
        for edge in 0..6 {
            let base = CAP_VERTEX_COUNT + edge * 4;
            assert_eq!(&mesh.uvs[base..base + 4], &WALL_UVS);
            assert_eq!(mesh.positions[base], mesh.positions[2 + edge * 2]);
            assert_eq!(mesh.positions[base + 1], mesh.positions[2 + ((edge + 1) % 6) * 2]);
        }
    }

    #[test]
    fn seam_vertices_are_not_welded() {
        let mesh = build(2, &unit_settings(), &NO_NEIGHBORS);
        // Cap outer corner 0 and wall 0 top-A share a position but not a normal.
        let cap = 2;
        let wall = CAP_VERTEX_COUNT;
        assert_eq!(mesh.positions[cap], mesh.positions[wall]);
        assert_ne!(mesh.normals[cap], mesh.normals[wall]);
    }

    // ── End to end ─────────────────────────────────────────────────

    #[test]
    fn lone_tile_at_level_two() {
        let mesh = build(2, &unit_settings(), &NO_NEIGHBORS);
        assert!((mesh.positions[0].y - 2.1).abs() < 1e-6);
        for edge in 0..6 {
            assert!(
                (built_wall_height(&mesh, edge) - 2.0).abs() < 1e-6,
                "edge {edge}"
            );
        }
    }

    #[test]
    fn converts_to_bevy_mesh() {
        let mesh = build(1, &unit_settings(), &NO_NEIGHBORS).to_mesh();
        assert_eq!(mesh.count_vertices(), CAP_VERTEX_COUNT + WALL_VERTEX_COUNT);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
        assert_eq!(
            mesh.indices().map(|i| i.len()),
            Some((CAP_TRIANGLE_COUNT + WALL_TRIANGLE_COUNT) * 3)
        );
    }
}
