//! Monotonic clock backed by the embassy time driver

use benchdx_hal::{Micros, Millis, Monotonic};
use embassy_time::Instant;

/// Zero-sized handle to the embassy time driver
///
/// The 64-bit tick count is truncated, so both readings wrap at
/// `u32::MAX` like any 32-bit tick counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Monotonic for EmbassyClock {
    fn now_ms(&self) -> Millis {
        Instant::now().as_millis() as Millis
    }

    fn now_us(&self) -> Micros {
        Instant::now().as_micros() as Micros
    }
}
