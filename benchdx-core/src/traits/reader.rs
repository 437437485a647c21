//! Optical result encoding
//!
//! The optical reader reports its result on two digital lines:
//!
//! | line 1 | line 2 | result     |
//! |--------|--------|------------|
//! | low    | low    | `Off`      |
//! | low    | high   | `Positive` |
//! | high   | low    | `Negative` |
//! | high   | high   | `Invalid`  |
//!
//! `Invalid` doubles as the reader's idle pattern right after power-up.

/// Result reported by the optical reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OpticalResult {
    /// Reader off
    Off = 0,
    /// Reader on, positive result
    Positive = 1,
    /// Reader on, negative result
    Negative = 2,
    /// Reader on with an indeterminate result, or not yet ready
    Invalid = 3,
}

impl OpticalResult {
    /// Decode the two result lines
    pub const fn decode(input_1: bool, input_2: bool) -> Self {
        match (input_1, input_2) {
            (true, true) => OpticalResult::Invalid,
            (true, false) => OpticalResult::Negative,
            (false, true) => OpticalResult::Positive,
            (false, false) => OpticalResult::Off,
        }
    }

    /// Wire encoding, line 1 in bit 1 and line 2 in bit 0
    pub const fn bits(self) -> u8 {
        self as u8
    }
}
