use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};
use crate::coord::to_world;

use super::scene::SceneState;
use super::UpdateSet;

pub struct RayEffectsPlugin;

impl Plugin for RayEffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, prune_rays_system.in_set(UpdateSet::Simulate))
            .add_systems(Update, draw_rays_system.in_set(UpdateSet::Visuals));
    }
}

fn prune_rays_system(scene: Option<ResMut<SceneState>>, time: Res<Time>) {
    if let Some(mut scene) = scene {
        scene.game.prune_rays(time.elapsed_secs_f64());
    }
}

/// Each live shot is a line from the muzzle to the hit point, fading out.
fn draw_rays_system(scene: Option<Res<SceneState>>, time: Res<Time>, mut gizmos: Gizmos) {
    let Some(scene) = scene else {
        return;
    };

    let color = color_from_hex(Colors::RAY);
    for (_, ray, alpha) in scene.game.rays().visible(time.elapsed_secs_f64()) {
        gizmos.line(to_world(ray.start), to_world(ray.end), color.with_alpha(alpha));
    }
}
