use bevy::prelude::Vec3;

use minigame_shared::picking::{pointer_to_ndc, CameraPose};
use minigame_shared::vec3::Vec3 as CoreVec3;

/// Shared-crate vector to Bevy world coordinates. Both are Y-up, right-handed.
pub fn to_world(v: CoreVec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub fn from_world(v: Vec3) -> CoreVec3 {
    CoreVec3::new(v.x, v.y, v.z)
}

/// Pointer position in logical window pixels (origin top-left, Y-down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PxPos {
    pub x: f32,
    pub y: f32,
}

impl PxPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Window size in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }

    pub fn ndc(&self, px: PxPos) -> Option<(f32, f32)> {
        pointer_to_ndc(px.x, px.y, self.width, self.height)
    }
}

/// Picking pose for a camera at `position` looking at the origin.
pub fn camera_pose(position: Vec3, fov_y: f32, viewport: Viewport) -> Option<CameraPose> {
    let aspect = viewport.aspect()?;
    Some(CameraPose::looking_at(
        from_world(position),
        CoreVec3::ZERO,
        fov_y,
        aspect,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_roundtrip() {
        let v = Vec3::new(1.5, -2.0, 3.25);
        assert_eq!(to_world(from_world(v)), v);
    }

    #[test]
    fn viewport_center_is_ndc_origin() {
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        let (x, y) = viewport.ndc(PxPos::new(400.0, 300.0)).unwrap();
        assert!(x.abs() < 1e-6 && y.abs() < 1e-6);
    }

    #[test]
    fn zero_size_viewport_has_no_pose() {
        let viewport = Viewport {
            width: 0.0,
            height: 600.0,
        };
        assert!(camera_pose(Vec3::new(0.0, 0.0, 10.0), 1.3, viewport).is_none());
        assert!(viewport.ndc(PxPos::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn pose_ray_through_center_matches_bevy_look_at() {
        let position = Vec3::new(4.0, 2.0, 7.0);
        let viewport = Viewport {
            width: 1280.0,
            height: 720.0,
        };
        let pose = camera_pose(position, 1.3, viewport).unwrap();
        let ray = pose.ray_through_ndc(0.0, 0.0);

        let transform =
            bevy::prelude::Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y);
        let forward = transform.forward();
        assert!((to_world(ray.direction) - *forward).length() < 1e-5);
        assert!((to_world(pose.up) - *transform.up()).length() < 1e-5);
        assert!((to_world(pose.right) - *transform.right()).length() < 1e-5);
    }
}
