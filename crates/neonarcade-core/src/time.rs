use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a simulation wants to be scheduled against display refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickMode {
    /// At most one tick per frame, only once `1 / hz` has elapsed.
    FixedRate { hz: f32 },
    /// One tick on every display refresh.
    EveryFrame,
}

/// Rate gate deciding, frame by frame, whether the simulation steps.
///
/// Elapsed frame time accumulates until it reaches the tick interval; the
/// frame then gets exactly one tick and the accumulator restarts from zero.
/// Leftover time is discarded rather than replayed as catch-up ticks.
#[derive(Debug, Clone)]
pub struct TickGate {
    interval: Option<Duration>,
    accumulated: Duration,
}

impl TickGate {
    pub fn new(mode: TickMode) -> Self {
        let interval = match mode {
            TickMode::FixedRate { hz } => rate_interval(hz).or_else(|| {
                tracing::warn!(hz, "Invalid tick rate, ticking every frame");
                None
            }),
            TickMode::EveryFrame => None,
        };
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// The gated tick interval, `None` when ticking every frame.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Record a frame's elapsed time. Returns whether this frame should tick.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(interval) = self.interval else {
            return true;
        };
        self.accumulated += elapsed;
        if self.accumulated >= interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// Period of a positive, finite rate in hertz. `None` when the rate is not
/// positive or its period does not fit in a non-zero `Duration`.
pub fn rate_interval(hz: f32) -> Option<Duration> {
    if !(hz > 0.0 && hz.is_finite()) {
        return None;
    }
    Duration::try_from_secs_f32(1.0 / hz)
        .ok()
        .filter(|interval| !interval.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_frame_always_ticks() {
        let mut gate = TickGate::new(TickMode::EveryFrame);
        assert!(gate.advance(Duration::ZERO));
        assert!(gate.advance(Duration::from_millis(1)));
        assert_eq!(gate.interval(), None);
    }

    #[test]
    fn fixed_rate_waits_for_interval() {
        let mut gate = TickGate::new(TickMode::FixedRate { hz: 10.0 });
        assert!(!gate.advance(Duration::from_millis(40)));
        assert!(!gate.advance(Duration::from_millis(40)));
        assert!(gate.advance(Duration::from_millis(40)));
        // Accumulator restarted
        assert!(!gate.advance(Duration::from_millis(40)));
    }

    #[test]
    fn long_frame_yields_single_tick() {
        let mut gate = TickGate::new(TickMode::FixedRate { hz: 60.0 });
        assert!(gate.advance(Duration::from_millis(500)));
        assert!(
            !gate.advance(Duration::from_millis(1)),
            "leftover time must not produce catch-up ticks"
        );
    }

    #[test]
    fn invalid_rate_falls_back_to_every_frame() {
        let mut gate = TickGate::new(TickMode::FixedRate { hz: 0.0 });
        assert_eq!(gate.interval(), None);
        assert!(gate.advance(Duration::ZERO));
    }

    #[test]
    fn vanishing_rate_falls_back_instead_of_panicking() {
        let mut gate = TickGate::new(TickMode::FixedRate { hz: 1e-20 });
        assert_eq!(gate.interval(), None);
        assert!(gate.advance(Duration::ZERO));
    }

    #[test]
    fn rate_interval_bounds() {
        assert_eq!(rate_interval(4.0), Some(Duration::from_millis(250)));
        assert_eq!(rate_interval(0.0), None);
        assert_eq!(rate_interval(-3.0), None);
        assert_eq!(rate_interval(f32::NAN), None);
        assert_eq!(rate_interval(f32::INFINITY), None);
        assert_eq!(rate_interval(1e-20), None);
        assert_eq!(rate_interval(1e30), None);
    }

    #[test]
    fn reset_clears_accumulator() {
        let mut gate = TickGate::new(TickMode::FixedRate { hz: 10.0 });
        assert!(!gate.advance(Duration::from_millis(90)));
        gate.reset();
        assert!(!gate.advance(Duration::from_millis(90)));
    }
}
