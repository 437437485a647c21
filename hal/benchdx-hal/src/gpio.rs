//! Digital pin access
//!
//! Pins are addressed by board number, mirroring how the instrument's
//! pin map is written down. Implementations own the register access for
//! the specific chip.

/// Board pin number
pub type Pin = u8;

/// Electrical level of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Level for a boolean, `true` being high
    pub const fn from_high(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// The other level
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Direction and bias of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull output
    Output,
    /// Floating input
    Input,
    /// Input with the internal pull-up enabled
    InputPullUp,
}

/// Digital pin bank
///
/// None of these operations can fail on supported hardware, so none of
/// them return a `Result`. Implementations must never block.
pub trait PinBank {
    /// Configure the direction and bias of a pin
    fn set_mode(&mut self, pin: Pin, mode: PinMode);

    /// Drive an output pin to a level
    fn write(&mut self, pin: Pin, level: Level);

    /// Sample the current level of a pin
    fn read(&mut self, pin: Pin) -> Level;
}
