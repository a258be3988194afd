//! Pointer-to-ray projection and ray intersection against the scene.

use crate::vec3::{self, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

impl Ray {
    /// Builds a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: vec3::normalize_or_zero(direction),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        vec3::add(self.origin, vec3::scale(self.direction, t))
    }

    /// Closest point on the ray (not the full line) to `p`.
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        let t = vec3::dot(vec3::sub(p, self.origin), self.direction).max(0.0);
        self.at(t)
    }
}

/// Perspective camera pose used to project pointer positions.
#[derive(Clone, Copy, Debug)]
pub struct CameraPose {
    pub position: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
}

impl CameraPose {
    pub fn looking_at(position: Vec3, target: Vec3, fov_y: f32, aspect: f32) -> Self {
        let forward = vec3::normalize_or_zero(vec3::sub(target, position));
        let mut right = vec3::normalize_or_zero(vec3::cross(forward, Vec3::Y));
        if right == Vec3::ZERO {
            // Looking straight up or down; any horizontal axis works.
            right = Vec3::new(1.0, 0.0, 0.0);
        }
        let up = vec3::cross(right, forward);
        Self {
            position,
            forward,
            right,
            up,
            fov_y,
            aspect,
        }
    }

    /// Ray from the camera through normalized device coordinates (x right, y up, -1..1).
    pub fn ray_through_ndc(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * self.aspect;
        let dir = vec3::add(
            self.forward,
            vec3::add(
                vec3::scale(self.right, ndc_x * half_w),
                vec3::scale(self.up, ndc_y * half_h),
            ),
        );
        Ray::new(self.position, dir)
    }

    /// Camera-space offset (right, up, forward) to world space.
    pub fn local_to_world(&self, offset: [f32; 3]) -> Vec3 {
        vec3::add(
            self.position,
            vec3::add(
                vec3::scale(self.right, offset[0]),
                vec3::add(
                    vec3::scale(self.up, offset[1]),
                    vec3::scale(self.forward, offset[2]),
                ),
            ),
        )
    }
}

/// Pixel position (origin top-left, Y-down) to NDC. `None` for an empty viewport.
pub fn pointer_to_ndc(px: f32, py: f32, width: f32, height: f32) -> Option<(f32, f32)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some((px / width * 2.0 - 1.0, 1.0 - py / height * 2.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitSource {
    Sphere,
    Point(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Distance from the ray origin
    pub distance: f32,
    pub point: Vec3,
    pub source: HitSource,
}

/// Nearest non-negative ray parameter where the ray meets the sphere.
pub fn ray_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let oc = vec3::sub(ray.origin, sphere.center);
    let b = vec3::dot(oc, ray.direction);
    let c = vec3::dot(oc, oc) - sphere.radius * sphere.radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let s = disc.sqrt();
    let near = -b - s;
    let far = -b + s;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Origin inside the sphere
        Some(far)
    } else {
        None
    }
}

/// Points are hit-tested as discs of `radius` facing the ray.
pub fn ray_points(ray: &Ray, points: &[Vec3], radius: f32, out: &mut Vec<Intersection>) {
    let radius_sq = radius * radius;
    for (i, p) in points.iter().enumerate() {
        let t = vec3::dot(vec3::sub(*p, ray.origin), ray.direction);
        if t <= 0.0 {
            continue;
        }
        let closest = ray.at(t);
        let offset = vec3::sub(*p, closest);
        if vec3::dot(offset, offset) <= radius_sq {
            out.push(Intersection {
                distance: t,
                point: closest,
                source: HitSource::Point(i),
            });
        }
    }
}

/// All intersections of the ray with the sphere and the points, nearest first.
pub fn intersect_scene(
    ray: &Ray,
    sphere: &Sphere,
    points: &[Vec3],
    pick_radius: f32,
) -> Vec<Intersection> {
    let mut hits = Vec::new();

    if let Some(t) = ray_sphere(ray, sphere) {
        hits.push(Intersection {
            distance: t,
            point: ray.at(t),
            source: HitSource::Sphere,
        });
    }
    ray_points(ray, points, pick_radius, &mut hits);

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
