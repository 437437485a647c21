//! ESP32 optical reader
//!
//! The reader board reports its result on two active-high lines, decoded
//! by [`OpticalResult::decode`].

use benchdx_core::traits::{OpticalResult, SetupError};
use benchdx_hal::{Pin, PinBank};

use crate::gpio::DigitalInput;

/// Optical reader on two digital inputs
pub struct Esp32Camera<P> {
    input_1: DigitalInput<P>,
    input_2: DigitalInput<P>,
}

impl<P: PinBank + Clone> Esp32Camera<P> {
    /// Create a reader on two plain (no pull-up) active-high inputs
    pub fn new(bank: P, input_1: Pin, input_2: Pin) -> Self {
        Self {
            input_1: DigitalInput::new(bank.clone(), input_1, false, false),
            input_2: DigitalInput::new(bank, input_2, false, false),
        }
    }
}

impl<P: PinBank> Esp32Camera<P> {
    /// Configure both inputs and check the reader's idle pattern
    ///
    /// A freshly powered reader holds both lines high
    /// ([`OpticalResult::Invalid`]); anything else fails setup.
    pub fn setup(&mut self) -> Result<(), SetupError> {
        self.input_1.setup();
        self.input_2.setup();

        let result = self.read();
        if result == OpticalResult::Invalid {
            diag!("ESP32Camera.setup: idle pattern present");
            Ok(())
        } else {
            diag_warn!("ESP32Camera.setup: expected Invalid, read {}", result);
            Err(SetupError::CameraNotReady(result))
        }
    }

    /// Sample both lines and decode the result
    pub fn read(&mut self) -> OpticalResult {
        let input_1 = self.input_1.is_active();
        let input_2 = self.input_2.is_active();
        OpticalResult::decode(input_1, input_2)
    }
}
