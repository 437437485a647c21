//! Thermistor calibration
//!
//! The thermistor sits in a voltage divider with a fixed series resistor.
//! Temperature is recovered with a single-coefficient Steinhart-Hart fit:
//!
//! ```text
//! 1/T = A + B * ln(R / R0)        (T in kelvin)
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest plausible reading at power-up (°C)
pub const SANITY_MIN_C: f32 = 15.0;

/// Highest plausible reading at power-up (°C)
pub const SANITY_MAX_C: f32 = 130.0;

/// Calibration constants for one thermistor channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermistorCalibration {
    /// Series resistor in the divider (ohms)
    pub series_ohms: f32,
    /// Steinhart-Hart constant term (1/K)
    pub a: f32,
    /// Steinhart-Hart log coefficient (1/K)
    pub b: f32,
    /// Thermistor resistance at the calibration temperature (ohms)
    pub r0_ohms: f32,
    /// Offset subtracted from kelvin to get the reported unit
    pub kelvin_offset: f32,
}

impl Default for ThermistorCalibration {
    fn default() -> Self {
        Self {
            series_ohms: 1977.0,
            a: 0.003354,
            b: 0.000289,
            r0_ohms: 10_000.0,
            kelvin_offset: 273.15,
        }
    }
}

impl ThermistorCalibration {
    /// Temperature at which the thermistor measures `r0_ohms`
    pub fn reference_celsius(&self) -> f32 {
        1.0 / self.a - self.kelvin_offset
    }

    /// Thermistor resistance for a divider ratio (sample over reference)
    pub fn resistance_from_ratio(&self, ratio: f32) -> f32 {
        self.series_ohms * ratio / (1.0 - ratio)
    }

    /// Temperature for a divider ratio
    ///
    /// A ratio of 1 or more (reference channel at or below the sample)
    /// gives NaN or a nonsensical value, which the sanity window rejects.
    pub fn celsius_from_ratio(&self, ratio: f32) -> f32 {
        let resistance = self.resistance_from_ratio(ratio);
        1.0 / (self.a + self.b * libm::logf(resistance / self.r0_ohms)) - self.kelvin_offset
    }

    /// Divider ratio at which the thermistor measures `r0_ohms`
    pub fn reference_ratio(&self) -> f32 {
        self.r0_ohms / (self.series_ohms + self.r0_ohms)
    }

    /// Check a power-up reading against the sanity window
    ///
    /// NaN (from a disconnected reference channel) is never plausible.
    pub fn is_plausible(celsius: f32) -> bool {
        (SANITY_MIN_C..=SANITY_MAX_C).contains(&celsius)
    }
}
