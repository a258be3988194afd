/// Outcome of one confirmed sphere hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitOutcome {
    pub count: u32,
    /// True exactly once per session: on the hit that reaches the threshold.
    pub navigate: bool,
}

/// Counts sphere hits and latches the navigation trigger.
#[derive(Clone, Debug)]
pub struct HitCounter {
    count: u32,
    threshold: u32,
    navigated: bool,
}

impl HitCounter {
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold,
            navigated: false,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn has_navigated(&self) -> bool {
        self.navigated
    }

    pub fn register_hit(&mut self) -> HitOutcome {
        self.count = self.count.saturating_add(1).min(self.threshold);

        let navigate = self.count >= self.threshold && !self.navigated;
        if navigate {
            self.navigated = true;
            tracing::info!("hit threshold {} reached", self.threshold);
        }

        HitOutcome {
            count: self.count,
            navigate,
        }
    }
}
