//! Hardware configuration types
//!
//! Pin assignments are fixed per subsystem and established once at
//! construction. The defaults are the production board's wiring.

use benchdx_hal::{AnalogChannel, Pin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Analog channel numbering on the production board (A0 = 54)
pub const A0: AnalogChannel = 54;
/// Analog input A1
pub const A1: AnalogChannel = 55;
/// Analog input A2
pub const A2: AnalogChannel = 56;

/// Pin configuration with polarity and bias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// Board pin number
    pub pin: Pin,
    /// Pin is active-low (inverted)
    pub active_low: bool,
    /// Enable internal pull-up (inputs only)
    pub pull_up: bool,
}

impl PinConfig {
    /// Create an active-high pin config
    pub const fn new(pin: Pin) -> Self {
        Self {
            pin,
            active_low: false,
            pull_up: false,
        }
    }

    /// Create an active-low pin
    pub const fn active_low(pin: Pin) -> Self {
        Self {
            pin,
            active_low: true,
            pull_up: false,
        }
    }
}

/// Step/direction driver wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepperPins {
    /// Direction output
    pub dir: Pin,
    /// Step pulse output
    pub step: Pin,
    /// Driver enable output (active-low on the driver board)
    pub enable: Pin,
}

/// Stepper motion parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepperConfig {
    /// Driver microstepping
    pub microsteps: u16,
    /// Full steps per millimeter of travel
    pub full_steps_per_mm: u32,
    /// Default maximum speed (mm/s)
    pub max_speed_mm_s: f32,
    /// Acceleration (mm/s²)
    pub acceleration_mm_s2: f32,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            microsteps: 16,
            full_steps_per_mm: 500,
            max_speed_mm_s: 18.29,
            acceleration_mm_s2: 10.0,
        }
    }
}

impl StepperConfig {
    /// Distance resolution in (micro)steps per millimeter
    pub const fn steps_per_mm(&self) -> u32 {
        self.full_steps_per_mm * self.microsteps as u32
    }

    /// Convert a speed or acceleration from mm to steps
    pub fn to_steps(&self, mm: f32) -> f32 {
        mm * self.steps_per_mm() as f32
    }
}

/// Thermistor divider wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermistorPins {
    /// Divider midpoint
    pub sample: AnalogChannel,
    /// Divider supply, for ratiometric readings
    pub reference: AnalogChannel,
}

/// Thermal controller wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermalPins {
    /// Heater output
    pub heater: Pin,
    /// Thermistor channels
    pub thermistor: ThermistorPins,
}

/// Motion controller wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionPins {
    /// Actuator stepper
    pub stepper: StepperPins,
    /// Limit switch at the top of travel
    pub limit_top: Pin,
    /// Limit switch at the bottom of travel
    pub limit_bottom: Pin,
}

/// Complete pin map of the instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InstrumentPins {
    /// Primary operator button
    pub button_primary: Pin,
    /// Secondary operator button
    pub button_secondary: Pin,
    /// Optical reader result line 1
    pub camera_input_1: Pin,
    /// Optical reader result line 2
    pub camera_input_2: Pin,
    /// Cartridge base heater (95 °C stage)
    pub thermal_1: ThermalPins,
    /// Cartridge top heater (65 °C stage)
    pub thermal_2: ThermalPins,
    /// Enclosure fan, always on while powered
    pub fan: PinConfig,
    /// Linear actuator
    pub motion: MotionPins,
    /// Tickler output
    pub tickler: PinConfig,
    /// Door lock solenoid
    pub door_lock: Pin,
    /// Door open sensor
    pub door_sensor: Pin,
}

impl Default for InstrumentPins {
    fn default() -> Self {
        Self {
            button_primary: 51,
            button_secondary: 53,
            camera_input_1: 45,
            camera_input_2: 47,
            thermal_1: ThermalPins {
                heater: 44,
                thermistor: ThermistorPins {
                    sample: A1,
                    reference: A0,
                },
            },
            thermal_2: ThermalPins {
                heater: 42,
                thermistor: ThermistorPins {
                    sample: A2,
                    reference: A0,
                },
            },
            fan: PinConfig::active_low(36),
            motion: MotionPins {
                stepper: StepperPins {
                    dir: 33,
                    step: 35,
                    enable: 31,
                },
                limit_top: 22,
                limit_bottom: 23,
            },
            tickler: PinConfig::active_low(40),
            door_lock: 38,
            door_sensor: 24,
        }
    }
}

impl InstrumentPins {
    /// Every digital pin in the map
    pub fn digital_pins(&self) -> [Pin; 15] {
        [
            self.button_primary,
            self.button_secondary,
            self.camera_input_1,
            self.camera_input_2,
            self.thermal_1.heater,
            self.thermal_2.heater,
            self.fan.pin,
            self.motion.stepper.dir,
            self.motion.stepper.step,
            self.motion.stepper.enable,
            self.motion.limit_top,
            self.motion.limit_bottom,
            self.tickler.pin,
            self.door_lock,
            self.door_sensor,
        ]
    }

    /// Every analog channel in the map (the shared reference appears twice)
    pub fn analog_channels(&self) -> [AnalogChannel; 4] {
        [
            self.thermal_1.thermistor.sample,
            self.thermal_1.thermistor.reference,
            self.thermal_2.thermistor.sample,
            self.thermal_2.thermistor.reference,
        ]
    }
}
