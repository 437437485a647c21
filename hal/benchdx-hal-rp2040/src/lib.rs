//! RP2040 implementation of the BenchDx HAL
//!
//! Pins are claimed once at startup and then addressed by GPIO number,
//! the same way the instrument's pin map is written. Every claimed pin is
//! an embassy [`Flex`](embassy_rp::gpio::Flex), so drivers can switch
//! direction and bias in their own setup. [`instrument_pins`] is the
//! instrument's wiring on this chip.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod board;
pub mod clock;
pub mod gpio;
pub mod pins;

pub use board::{BoardError, Rp2040Board};
pub use clock::EmbassyClock;
pub use pins::instrument_pins;
