use bevy::input::mouse::MouseScrollUnit;
use bevy::prelude::*;

use super::CameraConfig;
use super::entities::{FlyCamera, FlyInput};
use crate::math;
use crate::terrain::{TerrainConfig, TileHeights};

/// Spawns the Camera3d looking at the terrain center.
///
/// Runs after startup commands are applied, so the loaded [`TileHeights`]
/// already determine where the grid is.
pub fn spawn_camera(
    mut commands: Commands,
    cfg: Res<CameraConfig>,
    terrain: Res<TerrainConfig>,
    heights: Option<Res<TileHeights>>,
) {
    let focus = heights
        .map(|h| terrain.layout().center(h.dimensions))
        .unwrap_or(Vec3::ZERO);
    let eye = focus + Vec3::new(0.0, cfg.spawn_altitude, -cfg.spawn_distance);

    commands.spawn((
        Name::new("FlyCamera"),
        Camera3d::default(),
        Transform::from_translation(eye).looking_at(focus, Vec3::Y),
        FlyCamera,
    ));
}

/// WASD + right-drag look + Q/E/scroll movement.
pub fn fly(mut input: FlyInput, mut query: Query<&mut Transform, With<FlyCamera>>) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    // Mouse look only while the right button is held
    let mut yaw = 0.0;
    let mut pitch = 0.0;
    let looking = input.buttons.pressed(MouseButton::Right);
    for ev in input.mouse_motion.read() {
        if looking {
            yaw -= ev.delta.x * input.cfg.mouse_sensitivity_x;
            pitch -= ev.delta.y * input.cfg.mouse_sensitivity_y;
        }
    }
    if yaw != 0.0 {
        transform.rotate_y(yaw);
    }
    if pitch != 0.0 {
        let (_, current_pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
        let pitch_delta = math::clamp_pitch(current_pitch, pitch, input.cfg.pitch_margin);
        transform.rotate_local_x(pitch_delta);
    }

    // WASD movement in the camera's forward/right plane (XZ only)
    let forward = transform.forward();
    let forward_xz = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let right = transform.right();
    let right_xz = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();

    let mut direction = Vec3::ZERO;
    if input.keys.pressed(KeyCode::KeyW) {
        direction += forward_xz;
    }
    if input.keys.pressed(KeyCode::KeyS) {
        direction -= forward_xz;
    }
    if input.keys.pressed(KeyCode::KeyD) {
        direction += right_xz;
    }
    if input.keys.pressed(KeyCode::KeyA) {
        direction -= right_xz;
    }
    if input.keys.pressed(KeyCode::KeyE) {
        direction += Vec3::Y;
    }
    if input.keys.pressed(KeyCode::KeyQ) {
        direction -= Vec3::Y;
    }

    if direction != Vec3::ZERO {
        let step = input.cfg.move_speed * input.time.delta_secs();
        transform.translation += direction.normalize() * step;
    }

    // Scroll dollies along the view direction
    let mut dolly = 0.0;
    for ev in input.scroll.read() {
        dolly += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        };
    }
    if dolly != 0.0 {
        let forward = transform.forward();
        transform.translation += forward * dolly * input.cfg.scroll_sensitivity;
    }
}
