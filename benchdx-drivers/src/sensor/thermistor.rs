//! Ratiometric NTC thermistor
//!
//! Circuit: REF -- series resistor -- SAMPLE -- NTC -- GND
//!
//! Both the divider midpoint and its supply are sampled, so the ratio is
//! independent of the supply voltage. Conversion uses the calibration's
//! Steinhart-Hart fit.

use benchdx_core::config::{ThermistorCalibration, ThermistorPins};
use benchdx_core::traits::SetupError;
use benchdx_hal::{AnalogBank, AnalogChannel, ADC_RESOLUTION_BITS};

/// Thermistor on a sample and a reference analog channel
pub struct Thermistor<A> {
    adc: A,
    sample: AnalogChannel,
    reference: AnalogChannel,
    calibration: ThermistorCalibration,
}

impl<A: AnalogBank> Thermistor<A> {
    /// Create a thermistor with the factory calibration
    pub fn new(adc: A, pins: ThermistorPins) -> Self {
        Self::with_calibration(adc, pins, ThermistorCalibration::default())
    }

    /// Create a thermistor with a specific calibration
    pub fn with_calibration(
        adc: A,
        pins: ThermistorPins,
        calibration: ThermistorCalibration,
    ) -> Self {
        Self {
            adc,
            sample: pins.sample,
            reference: pins.reference,
            calibration,
        }
    }

    /// Set the converter resolution and sanity-check the reading
    ///
    /// The instrument powers up at room temperature; a reading outside
    /// the plausible window means a wiring or calibration fault.
    pub fn setup(&mut self) -> Result<(), SetupError> {
        self.adc.set_resolution(ADC_RESOLUTION_BITS);

        let celsius = self.temperature();
        diag!("Thermistor({}).setup: {} deg C", self.sample, celsius);

        if ThermistorCalibration::is_plausible(celsius) {
            Ok(())
        } else if celsius.is_nan() {
            Err(SetupError::ThermistorFault {
                channel: self.sample,
            })
        } else {
            Err(SetupError::ThermistorOutOfRange {
                channel: self.sample,
                celsius_x10: (celsius * 10.0) as i16,
            })
        }
    }

    /// Live temperature in °C
    pub fn temperature(&mut self) -> f32 {
        let sample = self.adc.read_analog(self.sample) as f32;
        let reference = self.adc.read_analog(self.reference) as f32;
        self.calibration.celsius_from_ratio(sample / reference)
    }

    /// Sample channel, which identifies the thermistor in diagnostics
    pub fn channel(&self) -> AnalogChannel {
        self.sample
    }
}
