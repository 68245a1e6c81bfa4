//! Countdown engine: a start/stop/reset second counter
//!
//! The engine only holds state; the one-second cadence comes from the
//! ticker task calling [`Countdown::tick`] while the engine is started.

/// Decrementing second counter for the active duration
#[derive(Debug, Clone)]
pub struct Countdown {
    start_seconds: i64,
    remaining: i64,
    running: bool,
}

impl Countdown {
    /// Create a stopped countdown loaded with `start_seconds`
    pub fn new(start_seconds: i64) -> Self {
        Self {
            start_seconds,
            remaining: start_seconds,
            running: false,
        }
    }

    /// Begin decrementing from the current remaining value
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt decrementing, preserving the current remaining value
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reload the counter with `start_seconds`. Implies stopped.
    pub fn reset(&mut self, start_seconds: i64) {
        self.start_seconds = start_seconds;
        self.remaining = start_seconds;
        self.running = false;
    }

    /// Advance one second. Decrements only while running, floored at zero.
    pub fn tick(&mut self) {
        if self.running && self.remaining > 0 {
            self.remaining -= 1;
        }
    }

    /// Seconds left on the counter
    pub fn remaining_seconds(&self) -> i64 {
        self.remaining
    }

    /// The full duration the counter was last loaded with
    pub fn start_seconds(&self) -> i64 {
        self.start_seconds
    }

    /// Check if the countdown is decrementing
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_stopped_and_loaded() {
        let countdown = Countdown::new(1500);
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining_seconds(), 1500);
        assert_eq!(countdown.start_seconds(), 1500);
    }

    #[test]
    fn test_tick_decrements_only_while_running() {
        let mut countdown = Countdown::new(10);
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), 10);

        countdown.start();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), 8);

        countdown.stop();
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), 8);
    }

    #[test]
    fn test_tick_floors_at_zero() {
        let mut countdown = Countdown::new(1);
        countdown.start();
        countdown.tick();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), 0);
        // Still running; reaching zero is not a transition
        assert!(countdown.is_running());
    }

    #[test]
    fn test_reset_implies_stopped() {
        let mut countdown = Countdown::new(10);
        countdown.start();
        countdown.tick();
        countdown.reset(300);
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining_seconds(), 300);
        assert_eq!(countdown.start_seconds(), 300);
    }

    #[test]
    fn test_start_resumes_without_reload() {
        let mut countdown = Countdown::new(10);
        countdown.start();
        countdown.tick();
        countdown.stop();
        countdown.start();
        assert_eq!(countdown.remaining_seconds(), 9);
    }

    #[test]
    fn test_negative_load_stays_frozen() {
        let mut countdown = Countdown::new(-60);
        countdown.start();
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), -60);
    }
}
