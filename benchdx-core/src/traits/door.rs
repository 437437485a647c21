//! Door lock contract

use super::subsystem::Subsystem;

/// Solenoid door lock with an open sensor
///
/// Actuation is sequenced inside [`Subsystem::update`]; the start calls
/// only request it.
pub trait DoorControl: Subsystem {
    /// Request the lock to release
    fn start_unlock(&mut self);

    /// Request the lock to engage
    fn start_lock(&mut self);

    /// Check if the door sensor reports the door open
    fn is_open(&mut self) -> bool;
}
