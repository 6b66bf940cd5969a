//! Fly camera for inspecting the terrain.
//!
//! WASD pans in the view plane, Q/E changes altitude, holding the right mouse
//! button looks around and the scroll wheel dollies along the view direction.

mod entities;
mod systems;

pub use entities::FlyCamera;

use bevy::prelude::*;

use crate::GameState;

/// Per-plugin configuration for the fly camera.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct CameraConfig {
    /// Movement speed in world-units per second.
    pub move_speed: f32,
    /// Horizontal mouse sensitivity (radians per pixel).
    pub mouse_sensitivity_x: f32,
    /// Vertical mouse sensitivity (radians per pixel).
    pub mouse_sensitivity_y: f32,
    /// Margin from vertical to prevent camera flip (radians).
    pub pitch_margin: f32,
    /// Dolly distance per scroll line.
    pub scroll_sensitivity: f32,
    /// Spawn height above the terrain center.
    pub spawn_altitude: f32,
    /// Spawn distance back (along -Z) from the terrain center.
    pub spawn_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: 15.0,
            mouse_sensitivity_x: 0.003,
            mouse_sensitivity_y: 0.002,
            pitch_margin: 0.05,
            scroll_sensitivity: 3.0,
            spawn_altitude: 28.0,
            spawn_distance: 30.0,
        }
    }
}

/// Fly camera with WASD, right-drag look, and altitude control.
pub struct CameraPlugin(pub CameraConfig);

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FlyCamera>()
            .register_type::<CameraConfig>()
            .insert_resource(self.0.clone())
            .add_systems(PostStartup, systems::spawn_camera)
            .add_systems(Update, systems::fly.run_if(in_state(GameState::Running)));
    }
}
