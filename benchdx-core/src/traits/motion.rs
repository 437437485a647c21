//! Motion controller contract

use super::subsystem::Subsystem;
use super::switch::DebouncedSwitch;

/// Limit switch selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitSwitch {
    /// End of travel in the positive direction
    Top,
    /// End of travel in the negative direction
    Bottom,
}

impl LimitSwitch {
    /// The limit a move at `velocity` runs into
    ///
    /// Zero counts as positive.
    pub fn toward(velocity: f32) -> Self {
        if velocity >= 0.0 {
            LimitSwitch::Top
        } else {
            LimitSwitch::Bottom
        }
    }
}

/// Linear actuator sequencing with limit switches
pub trait MotionControl: Subsystem {
    /// Switch type used for both limits
    type Switch: DebouncedSwitch;

    /// Start a relative move of `displacement` at up to `speed` (sign ignored)
    fn start_move(&mut self, displacement: f32, speed: f32);

    /// Start an open-ended move at a signed `velocity`
    fn start_jog(&mut self, velocity: f32);

    /// Check if a move is still in progress
    fn moving(&self) -> bool;

    /// Check if the last move was stopped by the top limit
    fn moved_into_top_limit(&self) -> bool;

    /// Check if the last move was stopped by the bottom limit
    fn moved_into_bottom_limit(&self) -> bool;

    /// Top limit switch
    fn switch_top(&mut self) -> &mut Self::Switch;

    /// Bottom limit switch
    fn switch_bottom(&mut self) -> &mut Self::Switch;

    /// Limit switch by selector
    fn limit(&mut self, which: LimitSwitch) -> &mut Self::Switch {
        match which {
            LimitSwitch::Top => self.switch_top(),
            LimitSwitch::Bottom => self.switch_bottom(),
        }
    }
}
