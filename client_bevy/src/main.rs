mod config_source;
mod constants;
mod coord;
mod game;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use constants::{CANVAS_SELECTOR, WINDOW_HEIGHT, WINDOW_WIDTH};
use game::{
    AboutPlugin, CorePlugin, HudPlugin, InputPlugin, InteractionPlugin, NavigationPlugin,
    OrbitCameraPlugin, PointCloudPlugin, RayEffectsPlugin, ScenePlugin, TargetPlugin,
};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Point Cloud Minigame".to_string(),
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            present_mode: PresentMode::AutoVsync,
            resizable: true,
            canvas: Some(CANVAS_SELECTOR.to_string()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: true,
            ..default()
        }),
        ..default()
    }));

    // Resolved after DefaultPlugins so the log subscriber is installed.
    let config = config_source::config_from_env_or_location();

    app.add_plugins(CorePlugin { config })
        .add_plugins(ScenePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(InteractionPlugin)
        .add_plugins(OrbitCameraPlugin)
        .add_plugins(PointCloudPlugin)
        .add_plugins(TargetPlugin)
        .add_plugins(RayEffectsPlugin)
        .add_plugins(HudPlugin)
        .add_plugins(NavigationPlugin)
        .add_plugins(AboutPlugin)
        .run();
}
