//! Capability traits
//!
//! These traits define the interface between the instrument's tick and
//! await engine and the subsystems it drives. Thermal control, motion
//! sequencing, the operator interface, the door and switch debouncing are
//! implemented outside this workspace against these contracts.

pub mod door;
pub mod interface;
pub mod motion;
pub mod reader;
pub mod subsystem;
pub mod switch;
pub mod thermal;

pub use door::DoorControl;
pub use interface::{Button, UserInterface};
pub use motion::{LimitSwitch, MotionControl};
pub use reader::OpticalResult;
pub use subsystem::{SetupError, Subsystem};
pub use switch::{DebouncedSwitch, SwitchId, SwitchState};
pub use thermal::ThermalControl;
