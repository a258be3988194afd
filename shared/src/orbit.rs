//! Camera mode state machine and manual orbit/zoom controls.
//!
//! The camera always looks at the origin. While `Orbiting`, the controller
//! circles it on a fixed radius and height; while `UserControlled`, the
//! camera only moves from drag and scroll input.

use std::f32::consts::PI;

use crate::vec3::{self, Vec3};

const MIN_POLAR: f32 = 0.05;
const MAX_POLAR: f32 = PI - 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Orbiting,
    UserControlled,
}

#[derive(Clone, Copy, Debug)]
pub struct OrbitParams {
    /// Angle increment per frame (radians)
    pub speed: f32,
    /// Fraction of the way to the orbit target per frame
    pub smoothing: f32,
    pub resume_delay_secs: f64,
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    mode: CameraMode,
    /// Deadline (seconds) for returning to `Orbiting`. At most one is pending.
    pending_resume: Option<f64>,
    angle: f32,
    radius: f32,
    height: f32,
    params: OrbitParams,
}

/// Azimuth of a position around the Y axis, measured from +X towards +Z.
pub fn azimuth(pos: Vec3) -> f32 {
    pos.z.atan2(pos.x)
}

impl OrbitController {
    pub fn new(start: Vec3, params: OrbitParams) -> Self {
        let mut controller = Self {
            mode: CameraMode::Orbiting,
            pending_resume: None,
            angle: 0.0,
            radius: 0.0,
            height: 0.0,
            params,
        };
        controller.sync_from_position(start);
        controller
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn pending_resume(&self) -> Option<f64> {
        self.pending_resume
    }

    pub fn pointer_down(&mut self) {
        self.mode = CameraMode::UserControlled;
        self.pending_resume = None;
    }

    /// Schedule the return to orbiting, replacing any earlier schedule.
    pub fn pointer_up(&mut self, now: f64) {
        self.pending_resume = Some(now + self.params.resume_delay_secs);
    }

    /// Adopt the camera's current azimuth, horizontal radius and height.
    pub fn sync_from_position(&mut self, pos: Vec3) {
        self.angle = azimuth(pos);
        self.resync_distance(pos);
    }

    /// Keep a manual zoom: re-derive radius and height but not the angle.
    pub fn resync_distance(&mut self, pos: Vec3) {
        self.radius = (pos.x * pos.x + pos.z * pos.z).sqrt();
        self.height = pos.y;
    }

    /// Advance one frame. Returns the camera position for this frame.
    pub fn step(&mut self, now: f64, camera: Vec3) -> Vec3 {
        if let Some(deadline) = self.pending_resume {
            if now >= deadline {
                self.pending_resume = None;
                self.mode = CameraMode::Orbiting;
                self.sync_from_position(camera);
                tracing::debug!("orbit resumed at angle {:.3}", self.angle);
            }
        }

        match self.mode {
            CameraMode::UserControlled => camera,
            CameraMode::Orbiting => {
                self.angle += self.params.speed;
                vec3::lerp(camera, self.target(), self.params.smoothing)
            }
        }
    }

    /// Point on the orbit circle for the current angle.
    pub fn target(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.angle.cos(),
            self.height,
            self.radius * self.angle.sin(),
        )
    }
}

/// Rotate a camera position about the origin by a pointer drag in pixels.
/// Horizontal motion turns the azimuth, vertical motion tilts the polar angle.
pub fn orbit_drag(pos: Vec3, dx: f32, dy: f32, sensitivity: f32) -> Vec3 {
    let r = vec3::length(pos);
    if r < 1e-6 {
        return pos;
    }

    let theta = azimuth(pos) + dx * sensitivity;
    let polar = (pos.y / r).clamp(-1.0, 1.0).acos();
    let phi = (polar - dy * sensitivity).clamp(MIN_POLAR, MAX_POLAR);

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

/// Scale the distance to the origin by `(1 - speed)^lines`, clamped.
/// Positive `lines` zooms in.
pub fn zoom(pos: Vec3, lines: f32, speed: f32, min_distance: f32, max_distance: f32) -> Vec3 {
    let r = vec3::length(pos);
    if r < 1e-6 {
        return pos;
    }
    let target = (r * (1.0 - speed).powf(lines)).clamp(min_distance, max_distance);
    vec3::scale(pos, target / r)
}
