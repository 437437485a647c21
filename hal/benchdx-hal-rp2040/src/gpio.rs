//! GPIO allocation
//!
//! Tracks which GPIO pins have been claimed by the board so a pin map
//! with a duplicate assignment is rejected at startup instead of two
//! drivers fighting over one line.

use heapless::FnvIndexSet;

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when claiming a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AllocError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already claimed
    AlreadyTaken,
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create a new GPIO allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), AllocError> {
        if pin as usize >= GPIO_COUNT {
            return Err(AllocError::InvalidPin);
        }
        match self.allocated.insert(pin) {
            Ok(true) => Ok(()),
            Ok(false) => Err(AllocError::AlreadyTaken),
            Err(_) => Err(AllocError::InvalidPin),
        }
    }
}
