//! Instrument wiring on an RP2040 carrier
//!
//! The default pin map numbers pins for a board with digital 22-53 and
//! analog A0 = 54, none of which exist here. This map puts every digital
//! line on GPIO 2-16, clear of the ADC-capable GPIO 26-29, and addresses
//! the thermistor dividers by ADC channel index: the shared reference on
//! ADC0, the two samples on ADC1 and ADC2.

use benchdx_core::config::{
    InstrumentPins, MotionPins, PinConfig, StepperPins, ThermalPins, ThermistorPins,
};

/// Pin map for the RP2040 carrier
pub fn instrument_pins() -> InstrumentPins {
    InstrumentPins {
        button_primary: 2,
        button_secondary: 3,
        camera_input_1: 4,
        camera_input_2: 5,
        thermal_1: ThermalPins {
            heater: 6,
            thermistor: ThermistorPins {
                sample: 1,
                reference: 0,
            },
        },
        thermal_2: ThermalPins {
            heater: 7,
            thermistor: ThermistorPins {
                sample: 2,
                reference: 0,
            },
        },
        fan: PinConfig::active_low(8),
        motion: MotionPins {
            stepper: StepperPins {
                dir: 9,
                step: 10,
                enable: 11,
            },
            limit_top: 12,
            limit_bottom: 13,
        },
        tickler: PinConfig::active_low(14),
        door_lock: 15,
        door_sensor: 16,
    }
}
