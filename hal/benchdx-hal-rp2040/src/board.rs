//! Pin and analog bank for the RP2040
//!
//! The board is built once at startup and then shared by reference:
//! `&'static Rp2040Board` is the `Copy` handle every driver keeps. All
//! access happens from the single control thread, so a `RefCell` is
//! enough.
//!
//! Access to a pin or channel that was never claimed does nothing (reads
//! give `Low` or 0) and is reported under the `defmt` feature.

use core::cell::RefCell;
use core::convert::Infallible;

use benchdx_hal::{AnalogBank, AnalogChannel, Level, Pin, PinBank, PinMode};
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{AnyPin, Flex, Pull};
use embassy_rp::Peri;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::adc::{AdcChannel, ANALOG_CHANNEL_COUNT};
use crate::gpio::{AllocError, GpioAllocator, GPIO_COUNT};

/// Error when assembling the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// GPIO could not be claimed
    Gpio(AllocError),
    /// Analog channel index out of range
    InvalidChannel,
}

impl From<AllocError> for BoardError {
    fn from(e: AllocError) -> Self {
        BoardError::Gpio(e)
    }
}

struct BoardInner<'d> {
    allocator: GpioAllocator,
    pins: [Option<Flex<'d>>; GPIO_COUNT],
    adc: Adc<'d, Blocking>,
    channels: [Option<Channel<'d>>; ANALOG_CHANNEL_COUNT],
}

/// RP2040 implementation of [`PinBank`] and [`AnalogBank`]
pub struct Rp2040Board<'d> {
    inner: RefCell<BoardInner<'d>>,
}

impl<'d> Rp2040Board<'d> {
    /// Create a board around a blocking ADC with no pins claimed
    pub fn new(adc: Adc<'d, Blocking>) -> Self {
        Self {
            inner: RefCell::new(BoardInner {
                allocator: GpioAllocator::new(),
                pins: [const { None }; GPIO_COUNT],
                adc,
                channels: [const { None }; ANALOG_CHANNEL_COUNT],
            }),
        }
    }

    /// Claim a GPIO for digital use under its GPIO number
    pub fn claim_pin(&self, number: u8, pin: Peri<'d, AnyPin>) -> Result<(), BoardError> {
        let mut inner = self.inner.borrow_mut();
        inner.allocator.allocate(number)?;
        inner.pins[number as usize] = Some(Flex::new(pin));
        Ok(())
    }

    /// Claim an analog channel under its channel index
    pub fn claim_analog(&self, index: u8, channel: Channel<'d>) -> Result<(), BoardError> {
        let adc_channel = AdcChannel::from_index(index).ok_or(BoardError::InvalidChannel)?;
        let mut inner = self.inner.borrow_mut();
        inner.allocator.allocate(adc_channel.gpio())?;
        inner.channels[adc_channel.index()] = Some(channel);
        Ok(())
    }
}

fn never<T>(e: Infallible) -> T {
    match e {}
}

impl PinBank for &Rp2040Board<'_> {
    fn set_mode(&mut self, pin: Pin, mode: PinMode) {
        let mut inner = self.inner.borrow_mut();
        let Some(flex) = inner.pins.get_mut(pin as usize).and_then(Option::as_mut) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("set_mode on unclaimed gpio{}", pin);
            return;
        };
        match mode {
            PinMode::Output => flex.set_as_output(),
            PinMode::Input => {
                flex.set_pull(Pull::None);
                flex.set_as_input();
            }
            PinMode::InputPullUp => {
                flex.set_pull(Pull::Up);
                flex.set_as_input();
            }
        }
    }

    fn write(&mut self, pin: Pin, level: Level) {
        let mut inner = self.inner.borrow_mut();
        let Some(flex) = inner.pins.get_mut(pin as usize).and_then(Option::as_mut) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("write on unclaimed gpio{}", pin);
            return;
        };
        let state = PinState::from(level.is_high());
        flex.set_state(state).unwrap_or_else(never);
    }

    fn read(&mut self, pin: Pin) -> Level {
        let mut inner = self.inner.borrow_mut();
        let Some(flex) = inner.pins.get_mut(pin as usize).and_then(Option::as_mut) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("read on unclaimed gpio{}", pin);
            return Level::Low;
        };
        Level::from_high(InputPin::is_high(flex).unwrap_or_else(never))
    }
}

impl AnalogBank for &Rp2040Board<'_> {
    fn set_resolution(&mut self, bits: u8) {
        // The RP2040 converter is fixed at 12 bits
        #[cfg(feature = "defmt")]
        if bits != benchdx_hal::ADC_RESOLUTION_BITS {
            defmt::warn!("ADC resolution {} requested, hardware is 12-bit", bits);
        }
        let _ = bits;
    }

    fn read_analog(&mut self, channel: AnalogChannel) -> u16 {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let Some(ch) = AdcChannel::from_index(channel)
            .and_then(|c| inner.channels[c.index()].as_mut())
        else {
            #[cfg(feature = "defmt")]
            defmt::warn!("read_analog on unclaimed channel {}", channel);
            return 0;
        };
        match inner.adc.blocking_read(ch) {
            Ok(value) => value,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC conversion failed on channel {}", channel);
                0
            }
        }
    }
}
