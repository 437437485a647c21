//! Step/direction stepper motor
//!
//! The motor is driven through a generic step/direction driver board with
//! an active-low enable input. Step timing comes from `accel_stepper`'s
//! trapezoidal profile; position is dead-reckoned from commanded steps
//! only, there is no feedback sensor.
//!
//! # Timing
//!
//! [`StepperMotor::update`] produces at most one step per call and never
//! catches up on missed steps. It must be called more often than the
//! shortest step interval of the fastest move (about 7 µs at the default
//! maximum speed), otherwise the move runs slower than commanded.

mod pulse;

use accel_stepper::Driver;
use benchdx_core::config::{StepperConfig, StepperPins};
use benchdx_core::traits::SetupError;
use benchdx_hal::{Monotonic, PinBank};

use crate::gpio::DigitalOutput;
use pulse::{StepClock, StepLines};

/// Stepper motor with an enable gate and a dead-reckoned target
pub struct StepperMotor<P, C> {
    lines: StepLines<P>,
    clock: StepClock<C>,
    enable: DigitalOutput<P>,
    driver: Driver,
    config: StepperConfig,
    /// Speed limit of the current move (steps/s)
    max_speed: f32,
    /// Absolute target register, accumulated across moves (steps)
    target: i32,
    moving: bool,
}

impl<P: PinBank + Clone, C: Monotonic> StepperMotor<P, C> {
    /// Create a motor with the factory motion parameters
    pub fn new(bank: P, clock: C, pins: StepperPins) -> Self {
        Self::with_config(bank, clock, pins, StepperConfig::default())
    }

    /// Create a motor with specific motion parameters
    pub fn with_config(bank: P, clock: C, pins: StepperPins, config: StepperConfig) -> Self {
        Self {
            enable: DigitalOutput::new(bank.clone(), pins.enable, true),
            lines: StepLines::new(bank, pins.dir, pins.step),
            clock: StepClock::new(clock),
            driver: Driver::new(),
            max_speed: config.to_steps(config.max_speed_mm_s),
            config,
            target: 0,
            moving: false,
        }
    }
}

impl<P: PinBank, C: Monotonic> StepperMotor<P, C> {
    /// Configure the outputs and load the default profile
    ///
    /// The enable gate is left inactive and the step line is inverted
    /// (idle high, pulse low). Never fails.
    pub fn setup(&mut self) -> Result<(), SetupError> {
        self.lines.setup();
        self.enable.setup();
        self.enable.deactivate();

        self.max_speed = self.config.to_steps(self.config.max_speed_mm_s);
        self.load_profile();
        Ok(())
    }

    /// Start a relative move of `displacement` steps at up to `speed` mm/s
    ///
    /// The sign of `speed` is ignored; direction comes from the sign of
    /// `displacement`. The new target is the previous target plus
    /// `displacement`, not the current position plus `displacement`, so a
    /// move cut short by [`stop_move`](Self::stop_move) is made up by the
    /// next one.
    pub fn start_move(&mut self, displacement: i32, speed: f32) {
        self.max_speed = self.config.to_steps(libm::fabsf(speed));
        self.load_profile();

        self.target = self.target.saturating_add(displacement);
        self.driver.move_to(i64::from(self.target));

        if self.remaining_displacement() != 0 {
            self.moving = true;
            self.enable.activate();
        }
    }

    /// Stop driving the motor
    ///
    /// The motor comes to rest at its current position: the next move
    /// ramps up from standstill. The target register is kept as is. A
    /// pulse already on the wire still completes.
    pub fn stop_move(&mut self) {
        self.moving = false;
        self.enable.deactivate();
        self.come_to_rest();
    }

    /// Take the next step if one is due
    ///
    /// Does nothing unless a move is in progress. Clears `moving` and
    /// disables the driver on the tick the target is reached.
    pub fn update(&mut self) {
        if !self.moving {
            return;
        }

        if let Err(never) = self.driver.poll(&mut self.lines, &self.clock) {
            match never {}
        }

        if self.remaining_displacement() == 0 {
            self.stop_move();
        }
    }

    /// Signed steps still to go, by dead reckoning
    pub fn remaining_displacement(&self) -> i32 {
        self.target.saturating_sub(self.position())
    }

    /// Check if a move is in progress
    pub fn moving(&self) -> bool {
        self.moving
    }

    /// Dead-reckoned position (steps)
    pub fn position(&self) -> i32 {
        // Never further out than the i32 target register
        self.driver.current_position() as i32
    }

    /// Absolute target register (steps)
    pub fn target(&self) -> i32 {
        self.target
    }

    /// Distance resolution (steps/mm)
    pub fn steps_per_mm(&self) -> u32 {
        self.config.steps_per_mm()
    }

    fn load_profile(&mut self) {
        self.driver.set_max_speed(self.max_speed);
        self.driver
            .set_acceleration(self.config.to_steps(self.config.acceleration_mm_s2));
    }

    /// Drop the ramp state (speed, step counter, interval), keeping position
    fn come_to_rest(&mut self) {
        let position = self.driver.current_position();
        self.driver = Driver::new();
        self.driver.set_current_position(position);
        self.load_profile();
    }
}
