use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use minigame_shared::gesture::Gesture;
use minigame_shared::picking::HitSource;

use crate::coord::{camera_pose, PxPos, Viewport};

use super::core::MainCamera;
use super::input::PointerMessage;
use super::scene::SceneState;
use super::target::SphereHitMessage;
use super::UpdateSet;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, resolve_pointer_system.in_set(UpdateSet::Interaction));
    }
}

/// Press/release bookkeeping plus click resolution against the scene.
pub(crate) fn resolve_pointer_system(
    mut pointer: MessageReader<PointerMessage>,
    scene: Option<ResMut<SceneState>>,
    time: Res<Time>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    q_camera: Query<(&Transform, &Projection), With<MainCamera>>,
    mut hit_writer: MessageWriter<SphereHitMessage>,
) {
    let Some(mut scene) = scene else {
        pointer.clear();
        return;
    };
    let now = time.elapsed_secs_f64();

    for msg in pointer.read() {
        match *msg {
            PointerMessage::Pressed(px) => scene.game.pointer_down(px.to_array()),
            PointerMessage::Released(px) => {
                if scene.game.pointer_up(px.to_array(), now) != Some(Gesture::Click) {
                    continue;
                }
                let Ok(window) = q_window.single() else {
                    continue;
                };
                let Ok((transform, projection)) = q_camera.single() else {
                    continue;
                };
                let viewport = Viewport {
                    width: window.width(),
                    height: window.height(),
                };
                click(&mut scene, transform, projection, viewport, px, now, &mut hit_writer);
            }
            PointerMessage::Dragged(_) | PointerMessage::Scrolled(_) => {}
        }
    }
}

fn click(
    scene: &mut SceneState,
    transform: &Transform,
    projection: &Projection,
    viewport: Viewport,
    px: PxPos,
    now: f64,
    hit_writer: &mut MessageWriter<SphereHitMessage>,
) {
    let Projection::Perspective(perspective) = projection else {
        return;
    };
    let Some(pose) = camera_pose(transform.translation, perspective.fov, viewport) else {
        return;
    };
    let Some(ndc) = viewport.ndc(px) else {
        return;
    };

    let Some(interaction) = scene.game.resolve(&pose, ndc, now) else {
        return;
    };

    match interaction.hit.source {
        HitSource::Sphere => debug!("sphere hit, {} points displaced", interaction.displaced),
        HitSource::Point(i) => debug!("point {i} hit, {} points displaced", interaction.displaced),
    }

    if let Some(outcome) = interaction.sphere_hit {
        hit_writer.write(SphereHitMessage { outcome });
    }
}
