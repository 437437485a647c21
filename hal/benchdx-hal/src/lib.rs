//! BenchDx Hardware Abstraction Layer
//!
//! This crate defines the pin-access capabilities every driver is written
//! against. A chip-specific crate implements them once for real hardware,
//! and the [`sim`] module implements them once as a deterministic test
//! double, so drivers and the instrument can be exercised on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  benchdx-instrument (tick + awaits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  benchdx-drivers (GPIO, camera, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  benchdx-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ benchdx-hal-  │       │  sim::SimBoard │
//! │    rp2040     │       │  (host tests)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinBank`] - Digital pin mode, write and read by pin number
//! - [`adc::AnalogBank`] - Ratiometric analog sampling by channel number
//! - [`clock::Monotonic`] - Wrapping millisecond and microsecond clock
//!
//! Handles are expected to be cheap to clone (a zero-sized register token
//! or a shared reference), because every driver keeps its own copy.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod gpio;

#[cfg(feature = "sim")]
pub mod sim;

// Re-export key traits at crate root for convenience
pub use adc::{AnalogBank, AnalogChannel, ADC_RESOLUTION_BITS};
pub use clock::{Micros, Millis, Monotonic};
pub use gpio::{Level, Pin, PinBank, PinMode};
