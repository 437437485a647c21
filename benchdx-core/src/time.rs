//! Timeout arithmetic on the wrapping millisecond clock
//!
//! Elapsed time is always computed as `now - start` with wrapping
//! subtraction and then compared against the budget. This stays correct
//! when the clock rolls over between `start` and `now`; comparing the raw
//! instants (or switching to signed arithmetic) does not.

use benchdx_hal::Millis;

/// A time budget started at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timeout {
    start_ms: Millis,
    budget_ms: Millis,
}

impl Timeout {
    /// Start a budget of `budget_ms` at `start_ms`
    pub const fn new(start_ms: Millis, budget_ms: Millis) -> Self {
        Self {
            start_ms,
            budget_ms,
        }
    }

    /// Milliseconds elapsed since the start
    pub const fn elapsed(&self, now_ms: Millis) -> Millis {
        now_ms.wrapping_sub(self.start_ms)
    }

    /// Check whether the budget has been used up
    ///
    /// A zero budget is expired at any instant.
    pub const fn is_expired(&self, now_ms: Millis) -> bool {
        self.elapsed(now_ms) >= self.budget_ms
    }
}
