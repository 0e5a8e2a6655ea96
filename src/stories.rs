//! Auto-rotating story carousel.
//!
//! The carousel advances one story per interval while idle. Manual
//! navigation re-arms the timer so a reader is never yanked away from a
//! story they just picked. Ticking after a long stall advances once, not
//! once per missed interval.

use std::time::{Duration, Instant};

pub const ROTATE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Carousel {
    pub index: usize,
    len: usize,
    next_advance: Instant,
}

impl Carousel {
    /// `len` must be at least one.
    pub fn new(len: usize, now: Instant) -> Self {
        Self {
            index: 0,
            len,
            next_advance: now + ROTATE_INTERVAL,
        }
    }

    /// Advance if the interval has elapsed. Returns whether the index moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_advance {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        self.rearm(now);
        true
    }

    pub fn next(&mut self, now: Instant) {
        self.index = (self.index + 1) % self.len;
        self.rearm(now);
    }

    pub fn prev(&mut self, now: Instant) {
        self.index = (self.index + self.len - 1) % self.len;
        self.rearm(now);
    }

    pub fn select(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.index = index;
            self.rearm(now);
        }
    }

    fn rearm(&mut self, now: Instant) {
        self.next_advance = now + ROTATE_INTERVAL;
    }
}
