#![warn(missing_docs)]
//! Bevelled, dome-topped hex tile meshes.
//!
//! Each tile's mesh is a pure function of its own elevation level and the
//! top elevations of its six neighbors: a raised cap with a darkened bevel ring,
//! plus one wall quad per edge that closes the gap to the neighbor below.
//!
//! The pure core lives in [`height_field`], [`hex_mesh`] and [`grid_build`];
//! [`map_data`] and [`layout`] cover saved maps and world placement, and the
//! [`terrain`] / [`camera`] plugins show the result in a Bevy app.

pub mod camera;
pub mod error;
pub mod grid_build;
pub mod height_field;
pub mod hex_mesh;
pub mod layout;
pub mod map_data;
pub mod math;
pub mod terrain;

use bevy::prelude::*;

pub use error::TerrainError;
pub use height_field::{HeightField, HexDirection};
pub use hex_mesh::{HexMesh, HexMeshSettings};

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Normal viewing: fly camera active.
    #[default]
    Running,
    /// Debug overlay active (Tab to toggle).
    Debugging,
}
