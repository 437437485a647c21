//! Debounced switch contract

use benchdx_hal::Pin;

use super::interface::Button;
use super::motion::LimitSwitch;

/// Edge-qualified state of a debounced switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    /// Released, and already released at the previous read
    Inactive,
    /// Became pressed since the previous read
    Activated,
    /// Pressed, and already pressed at the previous read
    Active,
    /// Became released since the previous read
    Deactivated,
}

impl SwitchState {
    /// Check if the switch is pressed, freshly or not
    pub fn is_pressed(self) -> bool {
        matches!(self, SwitchState::Active | SwitchState::Activated)
    }
}

/// A switch with debouncing and edge detection
///
/// Each `read` consumes the pending edge: a press is reported as
/// [`SwitchState::Activated`] once, then as [`SwitchState::Active`].
pub trait DebouncedSwitch {
    /// Sample the switch and report its edge-qualified state
    fn read(&mut self) -> SwitchState;

    /// Pin the switch is wired to, for diagnostics
    fn pin(&self) -> Pin;
}

/// Any switch on the instrument: an operator button or a limit switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchId {
    Button(Button),
    Limit(LimitSwitch),
}

impl From<Button> for SwitchId {
    fn from(button: Button) -> Self {
        SwitchId::Button(button)
    }
}

impl From<LimitSwitch> for SwitchId {
    fn from(limit: LimitSwitch) -> Self {
        SwitchId::Limit(limit)
    }
}
