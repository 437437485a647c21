//! Cooperative control engine for the benchtop diagnostic instrument
//!
//! [`Instrument`] owns every subsystem for the lifetime of the firmware
//! and advances them all from one [`Instrument::tick`]. Long-running
//! operations ("wait for the door to lock", "move until a limit trips")
//! are blocking await combinators that issue a start action and then
//! tick until a completion predicate or a timeout fires.
//!
//! ```text
//!   await_*  ──start──▶ subsystem
//!      │
//!      └─loop─▶ tick() ─▶ thermal 1 ─▶ thermal 2 ─▶ ui ─▶ motion ─▶ door
//!                 │
//!                 ├─ predicate? ──▶ return result
//!                 └─ timeout?   ──▶ return failure
//! ```
//!
//! There is no preemption and nothing runs between ticks, so subsystems
//! are plain owned values with no locking.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
extern crate benchdx_core;

pub mod awaits;
pub mod error;
pub mod instrument;
pub mod platform;

#[cfg(test)]
mod mock;

pub use error::{Component, InitError};
pub use instrument::{Instrument, Subsystems, ThermalChannel};
pub use platform::Platform;
