//! Console progress: a text bar and a naive ETA.

use std::time::{Duration, Instant};

const BAR_WIDTH: usize = 30;

/// Tracks completed items against a total.
#[derive(Debug, Clone)]
pub struct Progress {
    total: u32,
    done: u32,
    started: Instant,
}

impl Progress {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            done: 0,
            started: Instant::now(),
        }
    }

    /// Marks one more item complete.
    pub fn advance(&mut self) {
        self.done = (self.done + 1).min(self.total);
    }

    pub fn done(&self) -> u32 {
        self.done
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Fraction complete in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        f64::from(self.done) / f64::from(self.total)
    }

    /// Remaining time extrapolated from the average item time so far.
    pub fn eta(&self) -> Duration {
        eta_from(self.elapsed(), self.done, self.total)
    }

    /// `█` for done, `░` for remaining.
    pub fn bar(&self) -> String {
        render_bar(self.fraction(), BAR_WIDTH)
    }
}

fn eta_from(elapsed: Duration, done: u32, total: u32) -> Duration {
    if done == 0 {
        return Duration::ZERO;
    }
    elapsed.mul_f64(f64::from(total - done) / f64::from(done))
}

fn render_bar(fraction: f64, width: usize) -> String {
    let filled = ((width as f64 * fraction) as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
