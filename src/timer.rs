//! Turn countdown driven by caller-supplied elapsed time.
//!
//! The engine never reads a clock. The presentation layer feeds elapsed time
//! into a [`TurnTimer`] and reacts to [`TimerEvent::Expired`], which fires once
//! per timer.

use core::time::Duration;

/// Result of advancing a [`TurnTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Time is left on the clock.
    Running {
        /// Time left in the turn.
        remaining: Duration,
    },
    /// The turn just ran out of time.
    Expired,
    /// The timer already expired or was stopped.
    Stopped,
}

/// Countdown for a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTimer {
    total: Duration,
    elapsed: Duration,
    stopped: bool,
}

impl TurnTimer {
    /// Creates a timer for a turn of the given length.
    #[must_use]
    pub const fn new(total: Duration) -> Self {
        Self {
            total,
            elapsed: Duration::ZERO,
            stopped: false,
        }
    }

    /// Advances the timer.
    ///
    /// Returns [`TimerEvent::Expired`] on the call that uses up the remaining
    /// time and [`TimerEvent::Stopped`] on every call after that.
    pub fn advance(&mut self, elapsed: Duration) -> TimerEvent {
        if self.stopped {
            return TimerEvent::Stopped;
        }

        self.elapsed = self.elapsed.saturating_add(elapsed).min(self.total);
        if self.elapsed >= self.total {
            self.stopped = true;
            TimerEvent::Expired
        } else {
            TimerEvent::Running {
                remaining: self.remaining(),
            }
        }
    }

    /// Stops the timer without firing [`TimerEvent::Expired`].
    pub const fn stop(&mut self) {
        self.stopped = true;
    }

    /// Returns the time left in the turn.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.total.saturating_sub(self.elapsed)
    }

    /// Returns the configured turn length.
    #[must_use]
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Returns whether the timer expired or was stopped.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_and_expires_once() {
        let mut timer = TurnTimer::new(Duration::from_secs(3));

        assert_eq!(
            timer.advance(Duration::from_secs(1)),
            TimerEvent::Running {
                remaining: Duration::from_secs(2)
            }
        );
        assert_eq!(timer.advance(Duration::from_secs(5)), TimerEvent::Expired);
        assert_eq!(timer.remaining(), Duration::ZERO);
        assert_eq!(timer.advance(Duration::from_secs(1)), TimerEvent::Stopped);
    }

    #[test]
    fn stopped_timer_never_expires() {
        let mut timer = TurnTimer::new(Duration::from_secs(1));
        timer.stop();

        assert!(timer.is_stopped());
        assert_eq!(timer.advance(Duration::from_secs(2)), TimerEvent::Stopped);
        assert_eq!(timer.remaining(), Duration::from_secs(1));
    }

    #[test]
    fn zero_length_turn_expires_on_first_advance() {
        let mut timer = TurnTimer::new(Duration::ZERO);
        assert_eq!(timer.advance(Duration::ZERO), TimerEvent::Expired);
    }
}
