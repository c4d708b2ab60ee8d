use std::time::Duration;

/// Seconds each question gets before the answer is revealed.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 10;

/// Delay between two countdown ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Result of advancing a [`Countdown`] by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Time is left; carries the remaining seconds.
    Running(u32),
    /// The tick brought the countdown to zero.
    Expired,
}

/// Per-question countdown, measured in whole ticks.
///
/// The countdown is a plain value; whoever owns the timer task decides when
/// to call [`Countdown::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
}

impl Countdown {
    /// Returns a countdown starting at `limit` seconds.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Decrement by one second.
    ///
    /// Returns `Expired` exactly on the tick that reaches zero; an already
    /// expired countdown stays at zero and keeps reporting `Expired`.
    pub fn tick(&mut self) -> CountdownStep {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            CountdownStep::Expired
        } else {
            CountdownStep::Running(self.remaining)
        }
    }

    /// Back to the full limit.
    pub fn reset(&mut self) {
        self.remaining = self.limit;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECS)
    }
}
