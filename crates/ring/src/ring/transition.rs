use instant::Instant;
use std::time::Duration;

/// A time-driven linear interpolation between two progress values.
///
/// The duration scales with the magnitude of the change: the configured
/// duration covers a full 0→1 sweep, a smaller delta takes proportionally
/// less time. A zero duration completes on the next sample.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    pub fn begin(from: f32, to: f32, full_duration: Duration, now: Instant) -> Option<Self> {
        let delta = (to - from).abs();
        if delta == 0. {
            return None;
        }

        Some(Self {
            from,
            to,
            started_at: now,
            duration: full_duration.mul_f32(delta),
        })
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        if self.is_complete(now) {
            return self.to;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0., 1.);
        self.from + (self.to - self.from) * t
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: Duration = Duration::from_secs(2);

    #[test]
    fn test_no_transition_without_delta() {
        assert!(Transition::begin(0.5, 0.5, FULL, Instant::now()).is_none());
    }

    #[test]
    fn test_full_sweep_takes_full_duration() {
        let start = Instant::now();
        let transition = Transition::begin(0., 1., FULL, start).unwrap();

        assert!(!transition.is_complete(start + Duration::from_millis(1999)));
        assert!(transition.is_complete(start + FULL));
        assert_eq!(transition.value_at(start + FULL), 1.);
    }

    #[test]
    fn test_duration_scales_with_delta() {
        let start = Instant::now();
        let transition = Transition::begin(0., 0.5, FULL, start).unwrap();

        // Half the delta, half the time.
        assert!(!transition.is_complete(start + Duration::from_millis(999)));
        assert!(transition.is_complete(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_value_is_monotonic() {
        let start = Instant::now();
        let transition = Transition::begin(0., 1., FULL, start).unwrap();

        let mut last = transition.value_at(start);
        assert_eq!(last, 0.);
        for ms in (0..=2000).step_by(50) {
            let value = transition.value_at(start + Duration::from_millis(ms));
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 1.);
    }

    #[test]
    fn test_midpoint_value() {
        let start = Instant::now();
        let transition = Transition::begin(0., 1., FULL, start).unwrap();

        let value = transition.value_at(start + Duration::from_secs(1));
        assert!((value - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_decreasing_transition() {
        let start = Instant::now();
        let transition = Transition::begin(0.8, 0.3, FULL, start).unwrap();

        let value = transition.value_at(start + Duration::from_millis(500));
        assert!((value - 0.55).abs() < 1e-4);
        assert_eq!(transition.value_at(start + Duration::from_secs(1)), 0.3);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let start = Instant::now();
        let transition = Transition::begin(0., 1., Duration::ZERO, start).unwrap();

        assert!(transition.is_complete(start));
        assert_eq!(transition.value_at(start), 1.);
    }
}
