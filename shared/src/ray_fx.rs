//! Short-lived ray markers drawn from the camera to each resolved hit.

use std::collections::BTreeMap;

use crate::vec3::Vec3;

pub type RayId = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayEffect {
    pub start: Vec3,
    pub end: Vec3,
    pub spawned_at: f64,
}

impl RayEffect {
    /// `max(0, 1 - age / fade)`, clamped to 1 for clocks that run backwards.
    pub fn opacity(&self, now: f64, fade_secs: f64) -> f32 {
        let age = now - self.spawned_at;
        (1.0 - age / fade_secs).clamp(0.0, 1.0) as f32
    }
}

/// Arena of live rays keyed by id. Opacity is computed on read, so rays
/// need no timers of their own.
#[derive(Clone, Debug)]
pub struct RayEffects {
    fade_secs: f64,
    next_id: RayId,
    live: BTreeMap<RayId, RayEffect>,
}

impl RayEffects {
    pub fn new(fade_secs: f64) -> Self {
        Self {
            fade_secs,
            next_id: 0,
            live: BTreeMap::new(),
        }
    }

    pub fn spawn(&mut self, start: Vec3, end: Vec3, now: f64) -> RayId {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(
            id,
            RayEffect {
                start,
                end,
                spawned_at: now,
            },
        );
        id
    }

    pub fn opacity(&self, id: RayId, now: f64) -> Option<f32> {
        self.live.get(&id).map(|r| r.opacity(now, self.fade_secs))
    }

    /// Drop rays that have fully faded.
    pub fn prune(&mut self, now: f64) {
        let fade = self.fade_secs;
        self.live.retain(|_, r| r.opacity(now, fade) > 0.0);
    }

    /// Live rays with their opacity at `now`.
    pub fn visible(&self, now: f64) -> impl Iterator<Item = (RayId, &RayEffect, f32)> + '_ {
        self.live.iter().filter_map(move |(id, r)| {
            let alpha = r.opacity(now, self.fade_secs);
            (alpha > 0.0).then_some((*id, r, alpha))
        })
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects() -> RayEffects {
        RayEffects::new(1.0)
    }

    #[test]
    fn opacity_decays_linearly() {
        let mut fx = effects();
        let id = fx.spawn(Vec3::ZERO, Vec3::Y, 10.0);
        assert_eq!(fx.opacity(id, 10.0), Some(1.0));
        assert!((fx.opacity(id, 10.25).unwrap() - 0.75).abs() < 1e-6);
        assert!((fx.opacity(id, 10.5).unwrap() - 0.5).abs() < 1e-6);
        assert_eq!(fx.opacity(id, 11.0), Some(0.0));
        assert_eq!(fx.opacity(id, 12.0), Some(0.0));
    }

    #[test]
    fn ids_are_unique() {
        let mut fx = effects();
        let a = fx.spawn(Vec3::ZERO, Vec3::Y, 0.0);
        let b = fx.spawn(Vec3::ZERO, Vec3::Y, 0.0);
        assert_ne!(a, b);
        assert_eq!(fx.len(), 2);
    }

    #[test]
    fn rays_fade_independently() {
        let mut fx = effects();
        let early = fx.spawn(Vec3::ZERO, Vec3::Y, 0.0);
        let late = fx.spawn(Vec3::ZERO, Vec3::Y, 0.6);

        fx.prune(1.2);
        assert_eq!(fx.len(), 1);
        assert!(fx.opacity(early, 1.2).is_none());
        assert!((fx.opacity(late, 1.2).unwrap() - 0.4).abs() < 1e-6);

        fx.prune(1.6);
        assert!(fx.is_empty());
    }

    #[test]
    fn visible_skips_faded_rays() {
        let mut fx = effects();
        fx.spawn(Vec3::ZERO, Vec3::Y, 0.0);
        fx.spawn(Vec3::ZERO, Vec3::Y, 0.9);
        let visible: Vec<_> = fx.visible(1.0).collect();
        assert_eq!(visible.len(), 1);
        assert!((visible[0].2 - 0.9).abs() < 1e-6);
    }
}
