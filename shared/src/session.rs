//! One minigame session: everything that lives between mount and unmount.

use rand::Rng;

use crate::config::MinigameConfig;
use crate::field::{Impulse, PointCloud};
use crate::gesture::{Gesture, PointerTracker};
use crate::hits::{HitCounter, HitOutcome};
use crate::orbit::{self, OrbitController, OrbitParams};
use crate::picking::{intersect_scene, CameraPose, HitSource, Intersection, Sphere};
use crate::ray_fx::{RayEffects, RayId};
use crate::vec3::Vec3;

/// Result of a click that hit something.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    /// Nearest intersection along the pointer ray
    pub hit: Intersection,
    /// Number of points the impulse moved
    pub displaced: usize,
    /// Set when the nearest hit was the target sphere
    pub sphere_hit: Option<HitOutcome>,
    pub ray: RayId,
}

pub struct MinigameState {
    config: MinigameConfig,
    cloud: PointCloud,
    sphere: Sphere,
    hits: HitCounter,
    orbit: OrbitController,
    pointer: PointerTracker,
    rays: RayEffects,
}

impl MinigameState {
    pub fn new(config: MinigameConfig, rng: &mut impl Rng) -> Self {
        let cloud = PointCloud::sample(config.point_count, config.cloud_half_extent, rng);
        Self::with_cloud(config, cloud)
    }

    pub fn with_cloud(config: MinigameConfig, cloud: PointCloud) -> Self {
        let orbit = OrbitController::new(
            Vec3::from_array(config.camera_start),
            OrbitParams {
                speed: config.orbit_speed,
                smoothing: config.orbit_smoothing,
                resume_delay_secs: config.resume_delay_secs,
            },
        );

        tracing::debug!("minigame session with {} points", cloud.len());

        Self {
            sphere: Sphere {
                center: Vec3::ZERO,
                radius: config.sphere_radius,
            },
            hits: HitCounter::new(config.hit_threshold),
            rays: RayEffects::new(config.ray_fade_secs),
            pointer: PointerTracker::default(),
            orbit,
            cloud,
            config,
        }
    }

    pub fn config(&self) -> &MinigameConfig {
        &self.config
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn sphere(&self) -> Sphere {
        self.sphere
    }

    pub fn hits(&self) -> &HitCounter {
        &self.hits
    }

    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    pub fn rays(&self) -> &RayEffects {
        &self.rays
    }

    pub fn pointer_down(&mut self, pos: [f32; 2]) {
        self.pointer.press(pos);
        self.orbit.pointer_down();
    }

    /// Ends a press. Both clicks and drags schedule the return to orbiting.
    pub fn pointer_up(&mut self, pos: [f32; 2], now: f64) -> Option<Gesture> {
        let gesture = self.pointer.release(pos, self.config.click_threshold_px);
        self.orbit.pointer_up(now);
        gesture
    }

    /// Cast a ray through `ndc` and apply the nearest hit. A miss changes nothing.
    pub fn resolve(&mut self, camera: &CameraPose, ndc: (f32, f32), now: f64) -> Option<Interaction> {
        let ray = camera.ray_through_ndc(ndc.0, ndc.1);
        let hits = intersect_scene(
            &ray,
            &self.sphere,
            self.cloud.current(),
            self.config.pick_radius,
        );
        let nearest = *hits.first()?;

        let sphere_hit = match nearest.source {
            HitSource::Sphere => Some(self.hits.register_hit()),
            HitSource::Point(_) => None,
        };

        let displaced = self.cloud.apply_impulse(
            nearest.point,
            &ray,
            Impulse {
                max_distance: self.config.max_distance,
                force_factor: self.config.force_factor,
                model: self.config.impulse_model,
            },
        );

        let muzzle = camera.local_to_world(self.config.ray_muzzle_offset);
        let ray_id = self.rays.spawn(muzzle, nearest.point, now);

        Some(Interaction {
            hit: nearest,
            displaced,
            sphere_hit,
            ray: ray_id,
        })
    }

    /// Manual orbit from a pointer drag. Returns the new camera position.
    pub fn drag(&self, camera: Vec3, dx: f32, dy: f32) -> Vec3 {
        orbit::orbit_drag(camera, dx, dy, self.config.rotate_sensitivity)
    }

    /// Manual zoom. The automatic orbit adopts the new distance.
    pub fn zoom(&mut self, camera: Vec3, lines: f32) -> Vec3 {
        let zoomed = orbit::zoom(
            camera,
            lines,
            self.config.zoom_speed,
            self.config.min_distance,
            self.config.max_camera_distance,
        );
        self.orbit.resync_distance(zoomed);
        zoomed
    }

    pub fn relax_field(&mut self) {
        self.cloud.relax(self.config.relaxation);
    }

    pub fn prune_rays(&mut self, now: f64) {
        self.rays.prune(now);
    }

    /// Returns the camera position for this frame.
    pub fn step_camera(&mut self, now: f64, camera: Vec3) -> Vec3 {
        self.orbit.step(now, camera)
    }

    /// Per-frame update: relax the field, drop faded rays, move the camera.
    pub fn advance_frame(&mut self, now: f64, camera: Vec3) -> Vec3 {
        self.relax_field();
        self.prune_rays(now);
        self.step_camera(now, camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::CameraMode;
    use crate::vec3::vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn camera() -> CameraPose {
        CameraPose::looking_at(vec3(0.0, 0.0, 10.0), Vec3::ZERO, 75f32.to_radians(), 1.0)
    }

    fn sparse_state(points: Vec<Vec3>) -> MinigameState {
        let colors = vec![[0.5, 0.5, 0.5]; points.len()];
        MinigameState::with_cloud(MinigameConfig::default(), PointCloud::from_rest(points, colors))
    }

    #[test]
    fn new_samples_configured_point_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let state = MinigameState::new(MinigameConfig::default(), &mut rng);
        assert_eq!(state.cloud().len(), 10_000);
        assert_eq!(state.orbit().mode(), CameraMode::Orbiting);
    }

    #[test]
    fn center_click_hits_sphere() {
        let mut state = sparse_state(vec![vec3(3.0, 3.0, 0.0)]);
        let interaction = state.resolve(&camera(), (0.0, 0.0), 0.0).unwrap();
        assert_eq!(interaction.hit.source, HitSource::Sphere);
        assert_eq!(interaction.sphere_hit.map(|h| h.count), Some(1));
        assert_eq!(state.rays().len(), 1);
    }

    #[test]
    fn miss_changes_nothing() {
        let mut state = sparse_state(vec![vec3(3.0, 3.0, 0.0)]);
        let before = state.cloud().current().to_vec();
        assert!(state.resolve(&camera(), (0.9, -0.9), 0.0).is_none());
        assert_eq!(state.cloud().current(), before.as_slice());
        assert_eq!(state.hits().count(), 0);
        assert!(state.rays().is_empty());
    }

    #[test]
    fn drag_and_click_both_schedule_resume() {
        let mut state = sparse_state(vec![]);
        state.pointer_down([10.0, 10.0]);
        assert_eq!(state.orbit().mode(), CameraMode::UserControlled);
        assert_eq!(state.pointer_up([80.0, 10.0], 2.0), Some(Gesture::Drag));
        assert_eq!(state.orbit().pending_resume(), Some(3.5));

        state.pointer_down([10.0, 10.0]);
        assert_eq!(state.pointer_up([11.0, 10.0], 4.0), Some(Gesture::Click));
        assert_eq!(state.orbit().pending_resume(), Some(5.5));
    }

    #[test]
    fn zoom_is_adopted_by_orbit() {
        let mut state = sparse_state(vec![]);
        let zoomed = state.zoom(vec3(0.0, 0.0, 10.0), 1.0);
        assert!((zoomed.z - 9.0).abs() < 1e-5);
        assert!((state.orbit().radius() - 9.0).abs() < 1e-5);
    }
}
