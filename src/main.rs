//! Hex dome terrain viewer.
//!
//! Loads a saved hex map (or generates a noise field), builds every tile mesh
//! in parallel and shows the result with a fly camera. Tab toggles the debug
//! inspector and tile labels.

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use hex_dome::camera::{CameraConfig, CameraPlugin};
use hex_dome::terrain::{TerrainConfig, TerrainPlugin};
use hex_dome::{GameState, TerrainError};

#[cfg(feature = "native")]
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use hex_dome::hex_mesh::{
        DEFAULT_BEVEL_SIZE, DEFAULT_DOME_HEIGHT_FACTOR, DEFAULT_HEX_SIZE, HexMeshSettings,
    };
    use hex_dome::terrain::TerrainConfig;
    use hex_dome::TerrainError;

    /// Command-line overrides for [`TerrainConfig`].
    #[derive(Parser, Debug)]
    #[command(version, about = "Bevelled hex tile terrain viewer")]
    pub struct Args {
        /// Saved hex map (JSON) to load instead of generating noise terrain.
        #[arg(long)]
        pub map: Option<PathBuf>,
        /// Columns of the generated grid.
        #[arg(long, default_value_t = 32)]
        pub width: u32,
        /// Rows of the generated grid.
        #[arg(long, default_value_t = 24)]
        pub height: u32,
        /// Hex outer radius; also the world height of one level.
        #[arg(long, default_value_t = DEFAULT_HEX_SIZE)]
        pub hex_size: f32,
        /// Fraction each outer corner is pulled toward the cap center.
        #[arg(long, default_value_t = DEFAULT_BEVEL_SIZE)]
        pub bevel_size: f32,
        /// Extra elevation of the cap center, in hex sizes.
        #[arg(long, default_value_t = DEFAULT_DOME_HEIGHT_FACTOR)]
        pub dome_height: f32,
        /// Seed of the generated noise terrain.
        #[arg(long, default_value_t = 42)]
        pub seed: u32,
        /// Highest level of the generated noise terrain.
        #[arg(long, default_value_t = 10)]
        pub max_level: u32,
    }

    impl Args {
        /// Applies the overrides, rejecting degenerate tile geometry up front.
        pub fn into_config(self) -> Result<TerrainConfig, TerrainError> {
            let mut cfg = TerrainConfig {
                mesh: HexMeshSettings::new(self.hex_size, self.bevel_size, self.dome_height)?,
                map_path: self.map,
                ..TerrainConfig::default()
            };
            cfg.noise.dimensions.width = self.width;
            cfg.noise.dimensions.height = self.height;
            cfg.noise.seed = self.seed;
            cfg.noise.max_level = self.max_level;
            Ok(cfg)
        }
    }
}

#[cfg(feature = "native")]
fn terrain_config() -> Result<TerrainConfig, TerrainError> {
    use clap::Parser;
    cli::Args::parse().into_config()
}

#[cfg(not(feature = "native"))]
fn terrain_config() -> Result<TerrainConfig, TerrainError> {
    Ok(TerrainConfig::default())
}

fn main() -> Result<(), TerrainError> {
    let terrain = terrain_config()?;
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hex Dome Terrain".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(TerrainPlugin(terrain))
    .add_plugins(CameraPlugin(CameraConfig::default()))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Debugging)));

    #[cfg(feature = "native")]
    {
        use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
        app.add_plugins(RemotePlugin::default())
            .add_plugins(RemoteHttpPlugin::default());
    }

    app.run();
    Ok(())
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            GameState::Running => GameState::Debugging,
            GameState::Debugging => GameState::Running,
        };
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
