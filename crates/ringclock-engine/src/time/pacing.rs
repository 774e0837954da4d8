use std::time::{Duration, Instant};

/// When the runtime schedules the next frame after one has been presented.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum RedrawPolicy {
    /// Request a redraw immediately after every frame. Pacing comes from the
    /// present mode (FIFO blocks on vsync).
    #[default]
    Continuous,

    /// Request the next redraw once this much time has passed since the
    /// previous frame started.
    Interval(Duration),
}

impl RedrawPolicy {
    /// Instant at which the next redraw should be requested, given the start of
    /// the previous frame. `None` means "now".
    pub fn next_deadline(self, last_frame: Instant) -> Option<Instant> {
        match self {
            RedrawPolicy::Continuous => None,
            RedrawPolicy::Interval(d) if d.is_zero() => None,
            RedrawPolicy::Interval(d) => Some(last_frame + d),
        }
    }

    /// Whether a redraw is due at `now`.
    pub fn is_due(self, last_frame: Instant, now: Instant) -> bool {
        self.next_deadline(last_frame).is_none_or(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_is_always_due() {
        let t = Instant::now();
        assert_eq!(RedrawPolicy::Continuous.next_deadline(t), None);
        assert!(RedrawPolicy::Continuous.is_due(t, t));
    }

    #[test]
    fn interval_waits_for_deadline() {
        let t = Instant::now();
        let policy = RedrawPolicy::Interval(Duration::from_millis(16));
        assert_eq!(policy.next_deadline(t), Some(t + Duration::from_millis(16)));
        assert!(!policy.is_due(t, t + Duration::from_millis(10)));
        assert!(policy.is_due(t, t + Duration::from_millis(16)));
    }

    #[test]
    fn zero_interval_behaves_like_continuous() {
        let t = Instant::now();
        assert_eq!(RedrawPolicy::Interval(Duration::ZERO).next_deadline(t), None);
    }
}
