//! Fixed-rate tick clock
//!
//! Displays refresh at whatever rate they like; the simulation always ticks at
//! `Params::TICKS_PER_SECOND`. Leftover time carries over to the next frame.

use std::time::Duration;

use crate::Params;

#[derive(Debug, Clone)]
pub struct FrameClock {
    tick: Duration,
    max_frame_time: Duration,
    accumulator: Duration,
    total_ticks: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(
            Params::TICKS_PER_SECOND,
            Duration::from_secs_f32(Params::MAX_FRAME_TIME),
        )
    }
}

impl FrameClock {
    pub fn new(ticks_per_second: u32, max_frame_time: Duration) -> Self {
        Self {
            tick: Duration::from_secs(1) / ticks_per_second.max(1),
            max_frame_time,
            accumulator: Duration::ZERO,
            total_ticks: 0,
        }
    }

    /// Duration of one tick
    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Feed elapsed wall time, get back how many ticks to run now
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        // Clamp to prevent a burst of ticks after a stall
        self.accumulator += elapsed.min(self.max_frame_time);

        let mut ticks = 0;
        while self.accumulator >= self.tick {
            self.accumulator -= self.tick;
            ticks += 1;
        }
        self.total_ticks += u64::from(ticks);
        ticks
    }

    /// Same as [`advance`](Self::advance) for host timestamps in seconds.
    /// Negative or non-finite values count as no time passing.
    pub fn advance_secs(&mut self, elapsed_secs: f64) -> u32 {
        let elapsed = if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            Duration::from_secs_f64(elapsed_secs.min(self.max_frame_time.as_secs_f64()))
        } else {
            Duration::ZERO
        };
        self.advance(elapsed)
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
