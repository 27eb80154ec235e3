use std::time::Instant;

/// Wall-clock stopwatch for a check run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElapsedTimer {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl ElapsedTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Start (or restart) the timer.
    pub fn start(&mut self) {
        self.start = Some(Instant::now());
        self.end = None;
    }

    pub fn stop(&mut self) {
        self.end = Some(Instant::now());
    }

    /// Seconds between `start` and `stop`; a running timer measures up to
    /// now, and a timer never started reports zero.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        let Some(start) = self.start else {
            return 0.0;
        };
        let end = self.end.unwrap_or_else(Instant::now);
        end.saturating_duration_since(start).as_secs_f64()
    }
}

#[cfg(test)]
#[path = "elapsed_tests.rs"]
mod tests;
