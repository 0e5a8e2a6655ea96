//! Count-up animation for the impact metrics.
//!
//! All four metrics share one clock that starts the first time the metrics
//! section scrolls into view. Progress eases out so the digits sprint early
//! and settle gently, and it lands on exactly 1.0 so the final frame shows
//! the true targets rather than a rounding neighbour.

use std::time::{Duration, Instant};

pub const COUNT_UP_DURATION: Duration = Duration::from_millis(1_400);

#[derive(Debug, Clone, Copy, Default)]
pub struct CountUp {
    started: Option<Instant>,
}

impl CountUp {
    /// Arm the animation. Later calls are ignored so re-entering the
    /// viewport does not restart the digits.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn started(&self) -> bool {
        self.started.is_some()
    }

    /// Eased progress in [0, 1]. Zero until started, exactly one from the
    /// end of the animation onward.
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(t0) = self.started else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(t0);
        if elapsed >= COUNT_UP_DURATION {
            return 1.0;
        }
        ease_out_cubic(elapsed.as_secs_f64() / COUNT_UP_DURATION.as_secs_f64())
    }

    pub fn value(&self, target: f64, now: Instant) -> f64 {
        target * self.progress(now)
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
