use rand::Rng;

use crate::config::ImpulseModel;
use crate::picking::Ray;
use crate::vec3::{self, Vec3};

/// Point cloud with rest and displaced positions.
///
/// `rest` and `colors` are sampled once and never change. `current` is pushed
/// around by impulses and pulled back towards `rest` every frame.
pub struct PointCloud {
    rest: Vec<Vec3>,
    current: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
}

/// Parameters of a single impulse.
#[derive(Clone, Copy, Debug)]
pub struct Impulse {
    pub max_distance: f32,
    pub force_factor: f32,
    pub model: ImpulseModel,
}

/// Linearly decaying impulse strength: `force * max(0, 1 - d / max_d)`.
pub fn impulse_factor(distance: f32, max_distance: f32, force_factor: f32) -> f32 {
    (1.0 - distance / max_distance).max(0.0) * force_factor
}

impl PointCloud {
    /// Sample `count` points uniformly from the cube `[-half_extent, half_extent)^3`.
    pub fn sample(count: usize, half_extent: f32, rng: &mut impl Rng) -> Self {
        let mut rest = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        for _ in 0..count {
            rest.push(Vec3::new(
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
            ));
            colors.push([rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()]);
        }

        Self::from_rest(rest, colors)
    }

    pub fn from_rest(rest: Vec<Vec3>, colors: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(rest.len(), colors.len());
        Self {
            current: rest.clone(),
            rest,
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn rest(&self) -> &[Vec3] {
        &self.rest
    }

    pub fn current(&self) -> &[Vec3] {
        &self.current
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Push points away from a shot. Returns how many points moved.
    pub fn apply_impulse(&mut self, hit_point: Vec3, ray: &Ray, impulse: Impulse) -> usize {
        let mut moved = 0;

        for pos in &mut self.current {
            let origin = match impulse.model {
                ImpulseModel::HitPoint => hit_point,
                ImpulseModel::Beam => ray.closest_point(*pos),
            };

            let offset = vec3::sub(*pos, origin);
            let force = impulse_factor(
                vec3::length(offset),
                impulse.max_distance,
                impulse.force_factor,
            );
            if force <= 0.0 {
                continue;
            }

            // A point sitting exactly on the origin gets a zero offset, so it stays put.
            *pos = vec3::add(*pos, vec3::scale(offset, force));
            moved += 1;
        }

        moved
    }

    /// Blend every point a fraction `k` of the way back to its rest position.
    pub fn relax(&mut self, k: f32) {
        for (pos, rest) in self.current.iter_mut().zip(self.rest.iter()) {
            vec3::lerp_in_place(pos, *rest, k);
        }
    }

    /// Largest distance between any point and its rest position.
    pub fn max_displacement(&self) -> f32 {
        self.current
            .iter()
            .zip(self.rest.iter())
            .map(|(c, r)| vec3::distance(*c, *r))
            .fold(0.0, f32::max)
    }
}
