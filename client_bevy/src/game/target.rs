use bevy::prelude::*;

use minigame_shared::hits::HitOutcome;

use crate::constants::{color_from_hex, random_color, Colors, SPHERE_RINGS, SPHERE_SEGMENTS};
use crate::coord::to_world;

use super::core::{AppView, MinigameEntity};
use super::navigation::NavigateToAboutMessage;
use super::scene::{init_scene, SceneState};
use super::UpdateSet;

pub struct TargetPlugin;

#[derive(Component)]
pub(crate) struct Target;

/// A confirmed hit on the target sphere.
#[derive(Message, Clone, Copy, Debug)]
pub(crate) struct SphereHitMessage {
    pub(crate) outcome: HitOutcome,
}

impl Plugin for TargetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppView::Minigame), spawn_target.after(init_scene))
            .add_systems(Update, sphere_hit_system.in_set(UpdateSet::Simulate));
    }
}

fn spawn_target(
    mut commands: Commands,
    scene: Option<Res<SceneState>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(scene) = scene else {
        return;
    };
    let sphere = scene.game.sphere();

    commands.spawn((
        Mesh3d(meshes.add(
            Sphere::new(sphere.radius)
                .mesh()
                .uv(SPHERE_SEGMENTS, SPHERE_RINGS),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::SPHERE),
            perceptual_roughness: 0.4,
            ..default()
        })),
        Transform::from_translation(to_world(sphere.center)),
        Target,
        MinigameEntity,
    ));
}

/// Recolor on every hit; forward the one-time navigation trigger.
fn sphere_hit_system(
    mut hits: MessageReader<SphereHitMessage>,
    q_target: Query<&MeshMaterial3d<StandardMaterial>, With<Target>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut nav_writer: MessageWriter<NavigateToAboutMessage>,
) {
    let mut rng = rand::thread_rng();
    for hit in hits.read() {
        info!("sphere hit {}", hit.outcome.count);

        if let Ok(handle) = q_target.single() {
            if let Some(material) = materials.get_mut(&handle.0) {
                material.base_color = random_color(&mut rng);
            }
        }

        if hit.outcome.navigate {
            nav_writer.write(NavigateToAboutMessage);
        }
    }
}
