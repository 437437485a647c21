//! Configuration types
//!
//! Board-agnostic configuration structures with the instrument's factory
//! values as their defaults.

pub mod calibration;
pub mod hardware;

pub use calibration::*;
pub use hardware::*;
