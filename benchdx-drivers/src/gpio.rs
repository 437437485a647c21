//! Polarity-aware digital I/O
//!
//! Active-low signals are normalized here, so everything above this layer
//! talks about "active" and "inactive" rather than electrical levels.

use benchdx_core::config::PinConfig;
use benchdx_hal::{Level, Pin, PinBank, PinMode};

/// Digital output with fixed polarity
///
/// The driven level only ever changes through [`activate`](Self::activate)
/// and [`deactivate`](Self::deactivate).
pub struct DigitalOutput<P> {
    bank: P,
    pin: Pin,
    /// Level that asserts the output
    active: Level,
    /// Current logical state (true = active)
    on: bool,
}

impl<P: PinBank> DigitalOutput<P> {
    /// Create an output
    ///
    /// Nothing touches the pin until [`setup`](Self::setup).
    pub fn new(bank: P, pin: Pin, active_low: bool) -> Self {
        Self {
            bank,
            pin,
            active: Level::from_high(!active_low),
            on: false,
        }
    }

    /// Create an output from its pin configuration
    pub fn from_config(bank: P, config: PinConfig) -> Self {
        Self::new(bank, config.pin, config.active_low)
    }

    /// Configure the pin as an output and drive it inactive
    pub fn setup(&mut self) {
        self.bank.set_mode(self.pin, PinMode::Output);
        self.deactivate();
    }

    /// Drive the active level
    pub fn activate(&mut self) {
        self.on = true;
        self.bank.write(self.pin, self.active);
    }

    /// Drive the inactive level
    pub fn deactivate(&mut self) {
        self.on = false;
        self.bank.write(self.pin, self.active.inverted());
    }

    /// Check if the output was last activated
    pub fn is_active(&self) -> bool {
        self.on
    }

    /// Board pin number
    pub fn pin(&self) -> Pin {
        self.pin
    }
}

/// Digital input with fixed polarity and bias
///
/// Stateless: every read samples the pin. No debouncing.
pub struct DigitalInput<P> {
    bank: P,
    pin: Pin,
    active: Level,
    pull_up: bool,
}

impl<P: PinBank> DigitalInput<P> {
    /// Create an input
    pub fn new(bank: P, pin: Pin, active_low: bool, pull_up: bool) -> Self {
        Self {
            bank,
            pin,
            active: Level::from_high(!active_low),
            pull_up,
        }
    }

    /// Configure the pin as an input, with the pull-up if requested
    pub fn setup(&mut self) {
        let mode = if self.pull_up {
            PinMode::InputPullUp
        } else {
            PinMode::Input
        };
        self.bank.set_mode(self.pin, mode);
    }

    /// Sample the pin and compare against the active level
    pub fn is_active(&mut self) -> bool {
        self.bank.read(self.pin) == self.active
    }

    /// Board pin number
    pub fn pin(&self) -> Pin {
        self.pin
    }
}
