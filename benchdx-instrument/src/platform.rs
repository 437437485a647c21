//! Platform bundle
//!
//! A [`Platform`] names the concrete types the instrument is assembled
//! from: the pin and clock handles for the drivers it builds itself, and
//! the externally implemented subsystems it is handed.

use benchdx_core::traits::{
    DebouncedSwitch, DoorControl, MotionControl, ThermalControl, UserInterface,
};
use benchdx_hal::{Monotonic, PinBank};

/// Concrete types for one instrument build
pub trait Platform {
    /// Digital pin access, shared by every driver the instrument builds
    type Pins: PinBank + Clone;
    /// Monotonic clock for await timeouts
    type Clock: Monotonic;
    /// Debounced switch used for buttons and limits
    ///
    /// `Clone` produces a detached copy with its own edge history.
    type Switch: DebouncedSwitch + Clone;
    /// Heater controller (two are owned)
    type Thermal: ThermalControl;
    /// Linear actuator controller
    type Motion: MotionControl<Switch = Self::Switch>;
    /// Display and buttons
    type Ui: UserInterface<Switch = Self::Switch>;
    /// Door lock
    type Door: DoorControl;
}
