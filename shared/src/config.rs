use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How an impulse measures a point's distance from the shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../client_bevy/generated/")]
#[serde(rename_all = "camelCase")]
pub enum ImpulseModel {
    /// Radial blast around the resolved hit point.
    #[default]
    HitPoint,
    /// Distance to the firing ray, pushing points away from the beam.
    Beam,
}

/// Minigame tuning. The host page may override any subset as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../client_bevy/generated/")]
#[serde(rename_all = "camelCase", default)]
pub struct MinigameConfig {
    pub point_count: usize,
    /// Rest positions are sampled uniformly from [-h, h) on each axis.
    pub cloud_half_extent: f32,
    /// Rendered side length of a point quad (world units)
    pub point_size: f32,
    /// Points are hit-tested as discs of this radius (world units)
    pub pick_radius: f32,
    pub sphere_radius: f32,
    /// Sphere hits needed before navigating to the biography page
    pub hit_threshold: u32,
    pub max_distance: f32,
    pub force_factor: f32,
    pub impulse_model: ImpulseModel,
    /// Fraction of the remaining offset removed per frame
    pub relaxation: f32,
    /// Orbit angle increment per frame (radians)
    pub orbit_speed: f32,
    /// Fraction of the way towards the orbit target per frame
    pub orbit_smoothing: f32,
    pub resume_delay_secs: f64,
    pub click_threshold_px: f32,
    pub ray_fade_secs: f64,
    /// Ray start offset from the camera in camera space (right, up, forward)
    pub ray_muzzle_offset: [f32; 3],
    pub fov_degrees: f32,
    pub camera_start: [f32; 3],
    /// Radians of orbit per dragged pixel
    pub rotate_sensitivity: f32,
    /// Fractional distance change per scroll line
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_camera_distance: f32,
    pub about_url: String,
}

impl Default for MinigameConfig {
    fn default() -> Self {
        Self {
            point_count: 10_000,
            cloud_half_extent: 5.0,
            point_size: 0.1,
            pick_radius: 0.15,
            sphere_radius: 0.5,
            hit_threshold: 5,
            max_distance: 4.0,
            force_factor: 1.7,
            impulse_model: ImpulseModel::HitPoint,
            relaxation: 0.02,
            orbit_speed: 0.005,
            orbit_smoothing: 0.05,
            resume_delay_secs: 1.5,
            click_threshold_px: 5.0,
            ray_fade_secs: 1.0,
            ray_muzzle_offset: [0.4, -0.4, 0.0],
            fov_degrees: 75.0,
            camera_start: [0.0, 0.0, 10.0],
            rotate_sensitivity: 0.005,
            zoom_speed: 0.1,
            min_distance: 2.0,
            max_camera_distance: 50.0,
            about_url: "/about".to_string(),
        }
    }
}

impl MinigameConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid config JSON: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.point_count == 0 {
            return Err("point_count must be > 0".to_string());
        }
        if !self.cloud_half_extent.is_finite() || self.cloud_half_extent <= 0.0 {
            return Err("cloud_half_extent must be finite and > 0".to_string());
        }
        if !self.point_size.is_finite() || self.point_size <= 0.0 {
            return Err("point_size must be finite and > 0".to_string());
        }
        if !self.pick_radius.is_finite() || self.pick_radius <= 0.0 {
            return Err("pick_radius must be finite and > 0".to_string());
        }
        if !self.sphere_radius.is_finite() || self.sphere_radius <= 0.0 {
            return Err("sphere_radius must be finite and > 0".to_string());
        }
        if self.hit_threshold == 0 {
            return Err("hit_threshold must be >= 1".to_string());
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err("max_distance must be finite and > 0".to_string());
        }
        if !self.force_factor.is_finite() || self.force_factor < 0.0 {
            return Err("force_factor must be finite and >= 0".to_string());
        }
        if !(self.relaxation > 0.0 && self.relaxation < 1.0) {
            return Err("relaxation must be in (0, 1)".to_string());
        }
        if !(self.orbit_smoothing > 0.0 && self.orbit_smoothing <= 1.0) {
            return Err("orbit_smoothing must be in (0, 1]".to_string());
        }
        if !self.orbit_speed.is_finite() {
            return Err("orbit_speed must be finite".to_string());
        }
        if !self.resume_delay_secs.is_finite() || self.resume_delay_secs < 0.0 {
            return Err("resume_delay_secs must be finite and >= 0".to_string());
        }
        if !self.click_threshold_px.is_finite() || self.click_threshold_px < 0.0 {
            return Err("click_threshold_px must be finite and >= 0".to_string());
        }
        if !self.ray_fade_secs.is_finite() || self.ray_fade_secs <= 0.0 {
            return Err("ray_fade_secs must be finite and > 0".to_string());
        }
        if !(self.fov_degrees > 1.0 && self.fov_degrees < 179.0) {
            return Err("fov_degrees must be in (1, 179)".to_string());
        }
        if !(self.min_distance > 0.0 && self.min_distance < self.max_camera_distance) {
            return Err("min_distance must be > 0 and < max_camera_distance".to_string());
        }
        let [x, y, z] = self.camera_start;
        let start_distance = (x * x + y * y + z * z).sqrt();
        if !(start_distance >= self.min_distance && start_distance <= self.max_camera_distance) {
            return Err(
                "camera_start distance must be within [min_distance, max_camera_distance]"
                    .to_string(),
            );
        }
        if !(self.zoom_speed > 0.0 && self.zoom_speed < 1.0) {
            return Err("zoom_speed must be in (0, 1)".to_string());
        }
        Ok(())
    }
}
