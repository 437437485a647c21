//! Setup and update contract shared by every subsystem

use benchdx_hal::AnalogChannel;

use super::reader::OpticalResult;

/// Reasons a subsystem can refuse to come up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    /// Power-up temperature outside the plausible window
    ThermistorOutOfRange {
        /// Sample channel of the thermistor
        channel: AnalogChannel,
        /// Reading in 0.1 °C units
        celsius_x10: i16,
    },
    /// Thermistor produced no number (open reference, ratio >= 1)
    ThermistorFault {
        /// Sample channel of the thermistor
        channel: AnalogChannel,
    },
    /// Optical reader did not show its idle pattern
    CameraNotReady(OpticalResult),
    /// Subsystem hardware did not respond
    Unavailable,
}

/// A subsystem owned by the instrument
///
/// `setup` is called exactly once, during initialization, and is not
/// required to be idempotent. `update` is the zero-argument tick: it must
/// be cheap, must never block, and is safe to call at high frequency.
pub trait Subsystem {
    /// Bring the subsystem up
    fn setup(&mut self) -> Result<(), SetupError>;

    /// Advance the subsystem by one tick
    fn update(&mut self);
}
