//! Deterministic simulated board
//!
//! [`SimBoard`] and [`SimClock`] implement the HAL traits on top of
//! `core::cell`, so a shared reference is a `Copy` handle that any number
//! of drivers can hold while the test keeps poking at the same state.
//!
//! Input pins read whatever the test applied with [`SimBoard::apply`];
//! an input with the pull-up enabled and nothing applied reads high.

use core::cell::{Cell, RefCell};

use crate::adc::{AnalogBank, AnalogChannel};
use crate::clock::{Micros, Millis, Monotonic};
use crate::gpio::{Level, Pin, PinBank, PinMode};

/// Number of pin (and analog channel) slots on the simulated board
pub const SIM_PIN_COUNT: usize = 80;

#[derive(Debug, Clone)]
struct SimState {
    modes: [Option<PinMode>; SIM_PIN_COUNT],
    driven: [Level; SIM_PIN_COUNT],
    applied: [Option<Level>; SIM_PIN_COUNT],
    transitions: [u32; SIM_PIN_COUNT],
    analog: [u16; SIM_PIN_COUNT],
    analog_reads: u32,
    resolution_bits: Option<u8>,
}

/// Simulated pin and analog bank
#[derive(Debug)]
pub struct SimBoard {
    state: RefCell<SimState>,
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBoard {
    /// Create a board with every pin unconfigured and low
    pub fn new() -> Self {
        Self {
            state: RefCell::new(SimState {
                modes: [None; SIM_PIN_COUNT],
                driven: [Level::Low; SIM_PIN_COUNT],
                applied: [None; SIM_PIN_COUNT],
                transitions: [0; SIM_PIN_COUNT],
                analog: [0; SIM_PIN_COUNT],
                analog_reads: 0,
                resolution_bits: None,
            }),
        }
    }

    /// Apply an external level to an input pin
    pub fn apply(&self, pin: Pin, level: Level) {
        self.state.borrow_mut().applied[pin as usize] = Some(level);
    }

    /// Remove the external level, letting the pin float to its bias
    pub fn release(&self, pin: Pin) {
        self.state.borrow_mut().applied[pin as usize] = None;
    }

    /// Set the raw value an analog channel converts to
    pub fn set_analog(&self, channel: AnalogChannel, value: u16) {
        self.state.borrow_mut().analog[channel as usize] = value;
    }

    /// Mode last configured on a pin
    pub fn mode(&self, pin: Pin) -> Option<PinMode> {
        self.state.borrow().modes[pin as usize]
    }

    /// Level last driven on a pin by an output write
    pub fn driven(&self, pin: Pin) -> Level {
        self.state.borrow().driven[pin as usize]
    }

    /// Number of times a write changed the driven level of a pin
    pub fn transitions(&self, pin: Pin) -> u32 {
        self.state.borrow().transitions[pin as usize]
    }

    /// Number of analog conversions taken so far
    pub fn analog_reads(&self) -> u32 {
        self.state.borrow().analog_reads
    }

    /// Resolution last requested for analog conversions
    pub fn resolution_bits(&self) -> Option<u8> {
        self.state.borrow().resolution_bits
    }
}

impl PinBank for &SimBoard {
    fn set_mode(&mut self, pin: Pin, mode: PinMode) {
        self.state.borrow_mut().modes[pin as usize] = Some(mode);
    }

    fn write(&mut self, pin: Pin, level: Level) {
        let mut state = self.state.borrow_mut();
        let idx = pin as usize;
        if state.driven[idx] != level {
            state.transitions[idx] += 1;
        }
        state.driven[idx] = level;
    }

    fn read(&mut self, pin: Pin) -> Level {
        let state = self.state.borrow();
        let idx = pin as usize;
        match state.modes[idx] {
            Some(PinMode::Output) => state.driven[idx],
            Some(PinMode::InputPullUp) => state.applied[idx].unwrap_or(Level::High),
            Some(PinMode::Input) | None => state.applied[idx].unwrap_or(Level::Low),
        }
    }
}

impl AnalogBank for &SimBoard {
    fn set_resolution(&mut self, bits: u8) {
        self.state.borrow_mut().resolution_bits = Some(bits);
    }

    fn read_analog(&mut self, channel: AnalogChannel) -> u16 {
        let mut state = self.state.borrow_mut();
        state.analog_reads += 1;
        state.analog[channel as usize]
    }
}

/// Simulated monotonic clock
///
/// Time only moves when the test advances it, or by `step_us` on every
/// read when auto-advance is configured. Both counters are derived from
/// one 64-bit microsecond count, so each wraps exactly like hardware.
#[derive(Debug, Default)]
pub struct SimClock {
    now_us: Cell<u64>,
    step_us: Cell<u64>,
}

impl SimClock {
    /// Create a stopped clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock that advances by `step_us` every time it is read
    pub fn auto_advance(step_us: u32) -> Self {
        let clock = Self::new();
        clock.step_us.set(step_us as u64);
        clock
    }

    /// Jump to an absolute millisecond reading
    pub fn set_ms(&self, ms: u64) {
        self.now_us.set(ms * 1000);
    }

    /// Move time forward
    pub fn advance_ms(&self, ms: u32) {
        self.advance_us(ms as u64 * 1000);
    }

    /// Move time forward in microseconds
    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get() + us);
    }

    /// Current time without advancing
    pub fn peek_us(&self) -> u64 {
        self.now_us.get()
    }

    fn tick(&self) -> u64 {
        let now = self.now_us.get();
        self.now_us.set(now + self.step_us.get());
        now
    }
}

impl Monotonic for SimClock {
    fn now_ms(&self) -> Millis {
        (self.tick() / 1000) as Millis
    }

    fn now_us(&self) -> Micros {
        self.tick() as Micros
    }
}
