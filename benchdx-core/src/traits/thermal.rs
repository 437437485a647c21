//! Thermal controller contract

use super::subsystem::Subsystem;

/// Closed-loop heater controller
///
/// The control loop itself runs in [`Subsystem::update`].
pub trait ThermalControl: Subsystem {
    /// Start regulating toward `target_c`
    fn start_control(&mut self, target_c: f32);

    /// Stop regulating and leave the heater off
    fn stop_control(&mut self);

    /// Live temperature reading in °C
    ///
    /// Takes `&mut self` because reading the sensor samples the ADC.
    fn temperature(&mut self) -> f32;
}
