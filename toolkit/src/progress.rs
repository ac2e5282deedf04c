//! Cosmetic upload progress.
//!
//! Purely visual: the bar restarts after every accepted batch, advances by
//! [`PROGRESS_STEP`] on each timer tick and is forced to 100% once
//! [`PROGRESS_SETTLE_MS`](crate::config::PROGRESS_SETTLE_MS) have elapsed.
//! Nothing waits on it. The caller owns the timers.

use crate::config::PROGRESS_STEP;

/// Percentage shown by the dropzone progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadProgress {
    value: u8,
    running: bool,
}

impl UploadProgress {
    /// Start a new run at 0%.
    pub fn restart(&mut self) {
        self.value = 0;
        self.running = true;
    }

    /// Advance one tick. Returns `false` once the run is over, so the caller
    /// can cancel its interval.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.value = self.value.saturating_add(PROGRESS_STEP).min(100);
        if self.value >= 100 {
            self.running = false;
        }
        self.running
    }

    /// Jump to 100% and stop.
    pub fn finish(&mut self) {
        self.value = 100;
        self.running = false;
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The bar is only drawn strictly between 0% and 100%.
    pub fn is_visible(&self) -> bool {
        self.value > 0 && self.value < 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_to_completion() {
        let mut progress = UploadProgress::default();
        progress.restart();
        assert!(!progress.is_visible());

        let mut ticks = 0;
        while progress.tick() {
            ticks += 1;
            assert!(progress.is_visible());
        }
        assert_eq!(ticks, 9);
        assert_eq!(progress.value(), 100);
        assert!(!progress.is_visible());
        assert!(!progress.tick());
    }

    #[test]
    fn test_restart_resets() {
        let mut progress = UploadProgress::default();
        progress.restart();
        progress.tick();
        progress.tick();
        assert_eq!(progress.value(), 20);
        progress.restart();
        assert_eq!(progress.value(), 0);
        assert!(progress.is_running());
    }

    #[test]
    fn test_finish() {
        let mut progress = UploadProgress::default();
        progress.restart();
        progress.tick();
        progress.finish();
        assert_eq!(progress.value(), 100);
        assert!(!progress.is_running());
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut progress = UploadProgress::default();
        assert!(!progress.tick());
        assert_eq!(progress.value(), 0);
    }
}
