//! Board-agnostic core logic for the benchtop diagnostic instrument
//!
//! This crate contains everything that does not depend on a specific
//! board or on the concrete drivers:
//!
//! - Capability traits for the collaborating subsystems (thermal control,
//!   motion control, user interface, door, debounced switches)
//! - The optical result encoding
//! - Wraparound-safe timeout arithmetic
//! - Configuration type definitions and factory defaults

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
pub mod fmt;

pub mod config;
pub mod time;
pub mod traits;
