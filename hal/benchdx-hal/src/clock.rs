//! Monotonic time source
//!
//! Both counters wrap at `u32::MAX`. Consumers compare instants with
//! wrapping subtraction (`now.wrapping_sub(start) >= budget`), which stays
//! correct across rollover as long as the measured span fits in a `u32`.

/// Milliseconds on the wrapping monotonic clock
pub type Millis = u32;

/// Microseconds on the wrapping monotonic clock
pub type Micros = u32;

/// Wrapping monotonic clock
pub trait Monotonic {
    /// Milliseconds since an arbitrary epoch
    fn now_ms(&self) -> Millis;

    /// Microseconds since an arbitrary epoch
    fn now_us(&self) -> Micros;
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }

    fn now_us(&self) -> Micros {
        (**self).now_us()
    }
}
