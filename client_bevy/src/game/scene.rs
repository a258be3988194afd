//! Mount and unmount of the minigame scene.
//!
//! `OnEnter(AppView::Minigame)` builds a fresh [`MinigameState`] and the
//! camera; the other plugins spawn their entities after it. `OnExit` releases
//! everything tagged [`MinigameEntity`] together with the state.

use bevy::prelude::*;

use minigame_shared::session::MinigameState;
use minigame_shared::vec3::Vec3 as CoreVec3;

use crate::coord::to_world;

use super::core::{AppView, MainCamera, MinigameEntity, MinigameSettings};
use super::hud::HudUiState;

pub struct ScenePlugin;

#[derive(Resource)]
pub(crate) struct SceneState {
    pub(crate) game: MinigameState,
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppView::Minigame), init_scene)
            .add_systems(OnExit(AppView::Minigame), dispose_scene);
    }
}

pub(crate) fn init_scene(mut commands: Commands, settings: Res<MinigameSettings>) {
    let config = settings.0.clone();
    let camera_start = to_world(CoreVec3::from_array(config.camera_start));
    let fov = config.fov_degrees.to_radians();

    let game = MinigameState::new(config, &mut rand::thread_rng());
    info!(
        "minigame mounted: {} points, {} hits to unlock",
        game.cloud().len(),
        game.hits().threshold()
    );

    // WebGL2 MSAA is expensive (often CPU fallback).
    #[cfg(target_arch = "wasm32")]
    let msaa = Msaa::Off;
    #[cfg(not(target_arch = "wasm32"))]
    let msaa = Msaa::Sample4;

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov,
            ..default()
        }),
        Transform::from_translation(camera_start).looking_at(Vec3::ZERO, Vec3::Y),
        msaa,
        MainCamera,
        MinigameEntity,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
        MinigameEntity,
    ));

    commands.insert_resource(SceneState { game });
}

/// Safe to run with nothing mounted, or twice.
pub(crate) fn dispose_scene(
    mut commands: Commands,
    q_entities: Query<Entity, With<MinigameEntity>>,
    scene: Option<Res<SceneState>>,
    hud: Option<Res<HudUiState>>,
) {
    let mut despawned = 0;
    for entity in &q_entities {
        commands.entity(entity).despawn();
        despawned += 1;
    }

    if scene.is_some() {
        commands.remove_resource::<SceneState>();
    }
    if hud.is_some() {
        commands.remove_resource::<HudUiState>();
    }

    info!("minigame unmounted ({despawned} entities released)");
}
