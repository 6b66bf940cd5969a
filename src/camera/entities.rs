use bevy::ecs::system::SystemParam;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use super::CameraConfig;

/// Marker component for the fly camera entity.
#[derive(Component, Reflect)]
pub struct FlyCamera;

/// Bundled input parameters for [`super::systems::fly`].
#[derive(SystemParam)]
pub struct FlyInput<'w, 's> {
    /// Frame timing.
    pub time: Res<'w, Time>,
    /// Keyboard state.
    pub keys: Res<'w, ButtonInput<KeyCode>>,
    /// Mouse button state.
    pub buttons: Res<'w, ButtonInput<MouseButton>>,
    /// Raw mouse motion.
    pub mouse_motion: MessageReader<'w, 's, MouseMotion>,
    /// Scroll wheel.
    pub scroll: MessageReader<'w, 's, MouseWheel>,
    /// Camera configuration.
    pub cfg: Res<'w, CameraConfig>,
}
