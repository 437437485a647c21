//! Glue between `accel_stepper::Driver` and the board
//!
//! The driver owns the acceleration math and asks a [`Device`] to take each
//! step when its [`SystemClock`] says one is due. Here the device is the
//! step/direction line pair on a [`PinBank`], and the clock is the wrapping
//! [`Monotonic`] microsecond counter widened to a [`Duration`].

use core::cell::Cell;
use core::convert::Infallible;
use core::time::Duration;

use accel_stepper::{Device, StepContext, SystemClock};
use benchdx_hal::{Level, Micros, Monotonic, Pin, PinBank, PinMode};

/// Step and direction outputs
pub(crate) struct StepLines<P> {
    bank: P,
    dir: Pin,
    step: Pin,
    /// Level the step line rests at between pulses
    idle: Level,
    /// Position after the last pulse, to tell which way the next one goes
    position: i64,
}

impl<P: PinBank> StepLines<P> {
    pub(crate) fn new(bank: P, dir: Pin, step: Pin) -> Self {
        Self {
            bank,
            dir,
            step,
            idle: Level::Low,
            position: 0,
        }
    }

    /// Configure both outputs with the step line inverted (idle high)
    pub(crate) fn setup(&mut self) {
        self.bank.set_mode(self.dir, PinMode::Output);
        self.bank.set_mode(self.step, PinMode::Output);
        self.idle = Level::High;
        self.bank.write(self.dir, Level::Low);
        self.bank.write(self.step, self.idle);
    }
}

impl<P: PinBank> Device for StepLines<P> {
    type Error = Infallible;

    fn step(&mut self, ctx: &StepContext) -> Result<(), Self::Error> {
        // The driver reports the position after the step
        let forward = ctx.position > self.position;
        self.position = ctx.position;

        self.bank.write(self.dir, Level::from_high(forward));
        self.bank.write(self.step, self.idle.inverted());
        self.bank.write(self.step, self.idle);
        Ok(())
    }
}

/// Time since the first reading, accumulated across `u32` rollover
pub(crate) struct StepClock<C> {
    clock: C,
    last_us: Cell<Option<Micros>>,
    elapsed_us: Cell<u64>,
}

impl<C: Monotonic> StepClock<C> {
    pub(crate) fn new(clock: C) -> Self {
        Self {
            clock,
            last_us: Cell::new(None),
            elapsed_us: Cell::new(0),
        }
    }
}

impl<C: Monotonic> SystemClock for StepClock<C> {
    fn elapsed(&self) -> Duration {
        let now = self.clock.now_us();
        if let Some(last) = self.last_us.get() {
            let delta = u64::from(now.wrapping_sub(last));
            self.elapsed_us.set(self.elapsed_us.get() + delta);
        }
        self.last_us.set(Some(now));
        Duration::from_micros(self.elapsed_us.get())
    }
}
