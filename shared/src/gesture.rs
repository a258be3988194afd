/// How a press/release pair is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Click,
    Drag,
}

/// Remembers where the pointer went down so the release can be classified.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    down_at: Option<[f32; 2]>,
}

impl PointerTracker {
    pub fn press(&mut self, pos: [f32; 2]) {
        self.down_at = Some(pos);
    }

    pub fn is_pressed(&self) -> bool {
        self.down_at.is_some()
    }

    /// `None` when no press was recorded (e.g. the press happened before mount).
    pub fn release(&mut self, pos: [f32; 2], threshold_px: f32) -> Option<Gesture> {
        let [x0, y0] = self.down_at.take()?;
        let dx = pos[0] - x0;
        let dy = pos[1] - y0;
        if (dx * dx + dy * dy).sqrt() < threshold_px {
            Some(Gesture::Click)
        } else {
            Some(Gesture::Drag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_movement_is_click() {
        let mut tracker = PointerTracker::default();
        tracker.press([100.0, 100.0]);
        assert_eq!(tracker.release([103.0, 102.0], 5.0), Some(Gesture::Click));
    }

    #[test]
    fn movement_at_threshold_is_drag() {
        let mut tracker = PointerTracker::default();
        tracker.press([0.0, 0.0]);
        assert_eq!(tracker.release([3.0, 4.0], 5.0), Some(Gesture::Drag));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.release([0.0, 0.0], 5.0), None);
    }

    #[test]
    fn release_clears_press() {
        let mut tracker = PointerTracker::default();
        tracker.press([0.0, 0.0]);
        tracker.release([0.0, 0.0], 5.0);
        assert!(!tracker.is_pressed());
        assert_eq!(tracker.release([0.0, 0.0], 5.0), None);
    }
}
