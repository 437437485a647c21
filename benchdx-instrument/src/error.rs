//! Initialization errors

use benchdx_core::traits::SetupError;

/// Subsystem that can refuse to initialize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Component {
    UserInterface,
    Camera,
    ThermalController1,
    ThermalController2,
    MotionController,
    Door,
}

/// Initialization stopped at the first failing subsystem
///
/// Subsystems after `component` in the initialization order were left
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitError {
    /// The subsystem that failed
    pub component: Component,
    /// Its reason
    pub cause: SetupError,
}

impl InitError {
    pub(crate) fn new(component: Component, cause: SetupError) -> Self {
        Self { component, cause }
    }
}
