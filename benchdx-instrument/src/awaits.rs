//! Await combinators
//!
//! Every blocking operation has the same shape: one start action, then a
//! loop that ticks exactly once, checks the completion predicate, then
//! checks the timeout. The tick always runs at least once, even for a
//! zero timeout, and a predicate that becomes true on the same iteration
//! as the timeout wins.
//!
//! Timeouts are measured on the wrapping millisecond clock as
//! `now - start >= budget`, which stays correct across rollover. None of
//! these operations fail with an error: a timeout is reported as `false`.

use benchdx_core::time::Timeout;
use benchdx_core::traits::{
    Button, DebouncedSwitch, DoorControl, LimitSwitch, MotionControl, SwitchId, SwitchState,
    ThermalControl, UserInterface,
};
use benchdx_hal::{Millis, Monotonic};

use crate::instrument::{Instrument, ThermalChannel};
use crate::platform::Platform;

impl<B: Platform> Instrument<B> {
    /// Tick until `poll` produces a value, with no time limit
    pub fn wait_for<T>(&mut self, mut poll: impl FnMut(&mut Self) -> Option<T>) -> T {
        loop {
            self.tick();
            if let Some(value) = poll(self) {
                return value;
            }
        }
    }

    /// Tick until `poll` produces a value or `timeout_ms` has elapsed
    ///
    /// The budget starts when this is called. Returns `None` on timeout.
    pub fn race<T>(
        &mut self,
        timeout_ms: Millis,
        mut poll: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let timeout = Timeout::new(self.clock.now_ms(), timeout_ms);
        loop {
            self.tick();
            if let Some(value) = poll(self) {
                return Some(value);
            }
            if timeout.is_expired(self.clock.now_ms()) {
                return None;
            }
        }
    }

    /// Keep ticking for `timeout_ms`
    pub fn await_sleep(&mut self, timeout_ms: Millis) {
        self.race(timeout_ms, |_| None::<()>);
    }

    /// Wait for a fresh press of one switch, a button or a limit
    ///
    /// Any edge already pending on the switch is discarded first, so a
    /// switch held down on entry has to be released and pressed again.
    pub fn await_press(&mut self, which: impl Into<SwitchId>) {
        let which = which.into();
        self.switch(which).read();
        self.wait_for(|instrument| {
            let state = instrument.switch(which).read();
            (state == SwitchState::Activated).then_some(())
        });
        diag!("Instrument.await_press(pin {}): pressed", self.switch(which).pin());
    }

    /// Wait for a fresh press of either button
    ///
    /// If both are pressed on the same tick the primary button wins, and
    /// the secondary button's edge is left pending.
    pub fn await_press_any(&mut self) -> Button {
        self.user_interface.primary().read();
        self.user_interface.secondary().read();
        let button = self.wait_for(|instrument| {
            let ui = &mut instrument.user_interface;
            if ui.primary().read() == SwitchState::Activated {
                Some(Button::Primary)
            } else if ui.secondary().read() == SwitchState::Activated {
                Some(Button::Secondary)
            } else {
                None
            }
        });
        diag!("Instrument.await_press_any: {} pressed", button);
        button
    }

    /// Regulate a heater toward `threshold_c` and wait until it is above it
    ///
    /// Regulation keeps going after this returns, whatever the result.
    pub fn await_thermal_warmup(
        &mut self,
        channel: ThermalChannel,
        threshold_c: f32,
        timeout_ms: Millis,
    ) -> bool {
        self.thermal_controller(channel).start_control(threshold_c);
        let warm = self
            .race(timeout_ms, |instrument| {
                (instrument.temperature(channel) > threshold_c).then_some(())
            })
            .is_some();
        if !warm {
            diag_warn!("Instrument.await_thermal_warmup({}): timed out", channel);
        }
        warm
    }

    /// Stop both heaters and wait until both are below `threshold_c`
    pub fn await_thermal_cooldown(&mut self, threshold_c: f32, timeout_ms: Millis) -> bool {
        self.thermal_controller_1.stop_control();
        self.thermal_controller_2.stop_control();
        let cool = self
            .race(timeout_ms, |instrument| {
                let cool_1 = instrument.temperature(ThermalChannel::One) < threshold_c;
                (cool_1 && instrument.temperature(ThermalChannel::Two) < threshold_c).then_some(())
            })
            .is_some();
        if !cool {
            diag_warn!("Instrument.await_thermal_cooldown: timed out");
        }
        cool
    }

    /// Release the door lock and give it `timeout_ms` to actuate
    ///
    /// The door is assumed unlocked afterwards; nothing is checked.
    pub fn await_unlock(&mut self, timeout_ms: Millis) {
        self.door.start_unlock();
        self.await_sleep(timeout_ms);
    }

    /// Engage the door lock, give it `timeout_ms` to actuate, then check
    /// that the door is closed
    ///
    /// The wait is fixed: it covers solenoid travel and sensor bounce,
    /// and assumes the door was already shut.
    pub fn await_lock(&mut self, timeout_ms: Millis) -> bool {
        self.door.start_lock();
        self.await_sleep(timeout_ms);
        let locked = !self.door.is_open();
        if !locked {
            diag_warn!("Instrument.await_lock: door open");
        }
        locked
    }

    /// Move by `displacement` at up to `speed` and wait for the move to end
    ///
    /// Returns `false` if the move ran into either limit switch or did not
    /// finish within `timeout_ms`.
    pub fn await_move(&mut self, displacement: f32, speed: f32, timeout_ms: Millis) -> bool {
        self.motion_controller.start_move(displacement, speed);
        let done = self.race(timeout_ms, |instrument| {
            let motion = &instrument.motion_controller;
            if motion.moved_into_top_limit() || motion.moved_into_bottom_limit() {
                Some(false)
            } else if !motion.moving() {
                Some(true)
            } else {
                None
            }
        });
        match done {
            Some(true) => true,
            Some(false) => {
                diag_warn!("Instrument.await_move: stopped by a limit switch");
                false
            }
            None => {
                diag_warn!("Instrument.await_move: timed out");
                false
            }
        }
    }

    /// Jog at a signed `velocity` until the limit switch ahead trips
    ///
    /// The wait runs on a detached copy of the motion controller's limit
    /// switch, taken before the jog starts (see
    /// [`await_limit_press`](Self::await_limit_press)).
    pub fn await_jog(&mut self, velocity: f32, timeout_ms: Millis) -> bool {
        let limit = self.motion_controller.limit(LimitSwitch::toward(velocity)).clone();
        self.motion_controller.start_jog(velocity);
        self.await_limit_press(limit, timeout_ms)
    }

    /// Wait for a switch to read pressed, on a switch the caller owns
    ///
    /// The switch is moved in, so its edge history lives and dies with this
    /// call. When it is a clone of a subsystem's switch, the subsystem's own
    /// instance is not read and keeps any edge pending on it.
    pub fn await_limit_press(&mut self, mut switch: B::Switch, timeout_ms: Millis) -> bool {
        let pressed = self
            .race(timeout_ms, |_| switch.read().is_pressed().then_some(()))
            .is_some();
        if !pressed {
            diag_warn!("Instrument.await_limit_press({}): timed out", switch.pin());
        }
        pressed
    }

    /// Wait for one of the motion controller's own limit switches to read
    /// pressed
    ///
    /// Unlike [`await_limit_press`](Self::await_limit_press) this reads the
    /// persistent switch, consuming its pending edge.
    pub fn await_limit_press_on(&mut self, which: LimitSwitch, timeout_ms: Millis) -> bool {
        self.race(timeout_ms, |instrument| {
            instrument
                .motion_controller
                .limit(which)
                .read()
                .is_pressed()
                .then_some(())
        })
        .is_some()
    }
}
