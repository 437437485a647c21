//! Operator interface contract

use super::subsystem::Subsystem;
use super::switch::DebouncedSwitch;

/// Operator button
///
/// When both buttons are pressed at once, [`Button::Primary`] wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Primary (confirm) button
    Primary,
    /// Secondary (cancel) button
    Secondary,
}

/// Display plus two debounced buttons
pub trait UserInterface: Subsystem {
    /// Switch type used for both buttons
    type Switch: DebouncedSwitch;

    /// Show a message to the operator
    fn print_message(&mut self, message: &str);

    /// Draw the button legends
    fn label_buttons(&mut self);

    /// Primary button
    fn primary(&mut self) -> &mut Self::Switch;

    /// Secondary button
    fn secondary(&mut self) -> &mut Self::Switch;

    /// Button by selector
    fn button(&mut self, which: Button) -> &mut Self::Switch {
        match which {
            Button::Primary => self.primary(),
            Button::Secondary => self.secondary(),
        }
    }
}
