//! Device drivers
//!
//! This crate turns raw pin access from benchdx-hal into calibrated
//! physical quantities and motion commands:
//!
//! - Polarity-aware digital outputs and inputs
//! - Optical result reader (two binary lines)
//! - Ratiometric thermistor
//! - Step/direction stepper motor with an enable gate
//!
//! Drivers never block. Anything that takes time is advanced by the
//! caller's tick.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
extern crate benchdx_core;

pub mod camera;
pub mod gpio;
pub mod sensor;
pub mod stepper;

pub use camera::Esp32Camera;
pub use gpio::{DigitalInput, DigitalOutput};
pub use sensor::Thermistor;
pub use stepper::StepperMotor;
