use bevy::prelude::*;

use crate::coord::{from_world, to_world};

use super::core::MainCamera;
use super::input::PointerMessage;
use super::interaction::resolve_pointer_system;
use super::scene::SceneState;
use super::UpdateSet;

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            manual_camera_system
                .in_set(UpdateSet::Interaction)
                .after(resolve_pointer_system),
        )
        .add_systems(Update, orbit_step_system.in_set(UpdateSet::Simulate));
    }
}

fn look_at_origin(position: Vec3) -> Transform {
    Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y)
}

/// Drag-to-orbit and scroll-to-zoom. Active in both camera modes.
fn manual_camera_system(
    mut pointer: MessageReader<PointerMessage>,
    scene: Option<ResMut<SceneState>>,
    mut q_camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(mut scene) = scene else {
        pointer.clear();
        return;
    };
    let Ok(mut transform) = q_camera.single_mut() else {
        pointer.clear();
        return;
    };

    let mut position = from_world(transform.translation);
    let mut moved = false;
    for msg in pointer.read() {
        match *msg {
            PointerMessage::Dragged(delta) => {
                position = scene.game.drag(position, delta.x, delta.y);
                moved = true;
            }
            PointerMessage::Scrolled(lines) => {
                position = scene.game.zoom(position, lines);
                moved = true;
            }
            PointerMessage::Pressed(_) | PointerMessage::Released(_) => {}
        }
    }

    if moved {
        *transform = look_at_origin(to_world(position));
    }
}

fn orbit_step_system(
    scene: Option<ResMut<SceneState>>,
    time: Res<Time>,
    mut q_camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(mut scene) = scene else {
        return;
    };
    let Ok(mut transform) = q_camera.single_mut() else {
        return;
    };

    let current = from_world(transform.translation);
    let next = scene.game.step_camera(time.elapsed_secs_f64(), current);
    if next != current {
        *transform = look_at_origin(to_world(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minigame_shared::config::MinigameConfig;
    use minigame_shared::field::PointCloud;
    use minigame_shared::orbit::CameraMode;
    use minigame_shared::session::MinigameState;

    fn make_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_message::<PointerMessage>();
        app.add_systems(Update, (manual_camera_system, orbit_step_system).chain());
        app.insert_resource(SceneState {
            game: MinigameState::with_cloud(
                MinigameConfig::default(),
                PointCloud::from_rest(vec![], vec![]),
            ),
        });
        app.world_mut()
            .spawn((look_at_origin(Vec3::new(0.0, 0.0, 10.0)), MainCamera));
        app
    }

    fn camera_translation(app: &mut App) -> Vec3 {
        let mut q = app
            .world_mut()
            .query_filtered::<&Transform, With<MainCamera>>();
        q.single(app.world()).unwrap().translation
    }

    #[test]
    fn idle_camera_orbits() {
        let mut app = make_test_app();
        for _ in 0..5 {
            app.update();
        }
        let pos = camera_translation(&mut app);
        assert!(pos.x.abs() > 1e-4);
    }

    #[test]
    fn scroll_zooms_and_keeps_looking_at_origin() {
        let mut app = make_test_app();
        app.world_mut().write_message(PointerMessage::Scrolled(2.0));
        app.update();

        let pos = camera_translation(&mut app);
        // 10 * 0.9^2, then one orbit smoothing step on the same radius.
        assert!((pos.length() - 8.1).abs() < 0.05);

        let mut q = app
            .world_mut()
            .query_filtered::<&Transform, With<MainCamera>>();
        let transform = q.single(app.world()).unwrap();
        let to_origin = (-transform.translation).normalize();
        assert!((*transform.forward() - to_origin).length() < 1e-4);
    }

    #[test]
    fn held_pointer_stops_the_orbit() {
        let mut app = make_test_app();
        app.world_mut()
            .resource_mut::<SceneState>()
            .game
            .pointer_down([0.0, 0.0]);
        let before = camera_translation(&mut app);
        app.update();
        app.update();
        assert_eq!(camera_translation(&mut app), before);
        assert_eq!(
            app.world().resource::<SceneState>().game.orbit().mode(),
            CameraMode::UserControlled
        );
    }
}
