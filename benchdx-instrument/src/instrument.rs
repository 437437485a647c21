//! The instrument: ownership, initialization and the tick

use benchdx_core::config::InstrumentPins;
use benchdx_core::traits::{
    MotionControl, SetupError, Subsystem, SwitchId, ThermalControl, UserInterface,
};
use benchdx_drivers::{DigitalOutput, Esp32Camera};

use crate::error::{Component, InitError};
use crate::platform::Platform;

/// Heater channel selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThermalChannel {
    /// Cartridge base heater (95 °C stage)
    One,
    /// Cartridge top heater (65 °C stage)
    Two,
}

/// Externally implemented subsystems handed to the instrument
pub struct Subsystems<B: Platform> {
    pub user_interface: B::Ui,
    pub thermal_controller_1: B::Thermal,
    pub thermal_controller_2: B::Thermal,
    pub motion_controller: B::Motion,
    pub door: B::Door,
}

/// Composition root
///
/// Owns one instance of every subsystem for the lifetime of the firmware.
/// All mutation happens from [`tick`](Self::tick) or from the await
/// combinators that drive it.
pub struct Instrument<B: Platform> {
    pub(crate) user_interface: B::Ui,
    pub(crate) camera: Esp32Camera<B::Pins>,
    pub(crate) thermal_controller_1: B::Thermal,
    pub(crate) thermal_controller_2: B::Thermal,
    /// Always on once initialized, for airflow
    pub(crate) fan: DigitalOutput<B::Pins>,
    pub(crate) motion_controller: B::Motion,
    pub(crate) tickler: DigitalOutput<B::Pins>,
    pub(crate) door: B::Door,
    pub(crate) clock: B::Clock,
    ticks: u32,
}

impl<B: Platform> Instrument<B> {
    /// Assemble the instrument
    ///
    /// The camera, fan and tickler are built here from the pin map; the
    /// rest come in ready-made. Nothing touches hardware until
    /// [`initialize`](Self::initialize).
    pub fn new(
        pins: B::Pins,
        clock: B::Clock,
        map: &InstrumentPins,
        subsystems: Subsystems<B>,
    ) -> Self {
        Self {
            user_interface: subsystems.user_interface,
            camera: Esp32Camera::new(pins.clone(), map.camera_input_1, map.camera_input_2),
            thermal_controller_1: subsystems.thermal_controller_1,
            thermal_controller_2: subsystems.thermal_controller_2,
            fan: DigitalOutput::from_config(pins.clone(), map.fan),
            motion_controller: subsystems.motion_controller,
            tickler: DigitalOutput::from_config(pins, map.tickler),
            door: subsystems.door,
            clock,
            ticks: 0,
        }
    }

    /// Set up every subsystem, in order, stopping at the first failure
    ///
    /// Order: user interface, camera, thermal controllers 1 and 2, fan
    /// (switched on), motion controller, tickler, door. Nothing is retried.
    pub fn initialize(&mut self) -> Result<(), InitError> {
        self.user_interface
            .setup()
            .map_err(|e| fail(Component::UserInterface, e))?;
        self.user_interface.print_message("Initializing...");
        self.user_interface.label_buttons();

        self.camera.setup().map_err(|e| fail(Component::Camera, e))?;
        self.thermal_controller_1
            .setup()
            .map_err(|e| fail(Component::ThermalController1, e))?;
        self.thermal_controller_2
            .setup()
            .map_err(|e| fail(Component::ThermalController2, e))?;

        self.fan.setup();
        self.fan.activate();

        self.motion_controller
            .setup()
            .map_err(|e| fail(Component::MotionController, e))?;
        self.tickler.setup();
        self.door.setup().map_err(|e| fail(Component::Door, e))?;

        diag!("Instrument.initialize: ready");
        Ok(())
    }

    /// Update every owned subsystem exactly once
    ///
    /// The order is fixed: thermal controller 1, thermal controller 2,
    /// user interface, motion controller, door.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        self.thermal_controller_1.update();
        self.thermal_controller_2.update();
        self.user_interface.update();
        self.motion_controller.update();
        self.door.update();
    }

    /// Number of ticks so far (wrapping)
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn user_interface(&mut self) -> &mut B::Ui {
        &mut self.user_interface
    }

    pub fn camera(&mut self) -> &mut Esp32Camera<B::Pins> {
        &mut self.camera
    }

    /// Heater controller by channel
    pub fn thermal_controller(&mut self, channel: ThermalChannel) -> &mut B::Thermal {
        match channel {
            ThermalChannel::One => &mut self.thermal_controller_1,
            ThermalChannel::Two => &mut self.thermal_controller_2,
        }
    }

    pub fn fan(&mut self) -> &mut DigitalOutput<B::Pins> {
        &mut self.fan
    }

    pub fn motion_controller(&mut self) -> &mut B::Motion {
        &mut self.motion_controller
    }

    pub fn tickler(&mut self) -> &mut DigitalOutput<B::Pins> {
        &mut self.tickler
    }

    pub fn door(&mut self) -> &mut B::Door {
        &mut self.door
    }

    pub fn clock(&self) -> &B::Clock {
        &self.clock
    }

    /// Any button or limit switch by selector
    pub fn switch(&mut self, which: SwitchId) -> &mut B::Switch {
        match which {
            SwitchId::Button(button) => self.user_interface.button(button),
            SwitchId::Limit(limit) => self.motion_controller.limit(limit),
        }
    }

    /// Live temperature of one heater
    pub(crate) fn temperature(&mut self, channel: ThermalChannel) -> f32 {
        self.thermal_controller(channel).temperature()
    }
}

fn fail(component: Component, cause: SetupError) -> InitError {
    diag_warn!("Instrument.initialize: {} failed: {}", component, cause);
    InitError::new(component, cause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockInstrument, World, TICK_ORDER};
    use benchdx_core::traits::OpticalResult;
    use benchdx_hal::{Level, PinMode};

    #[test]
    fn test_tick_order() {
        let world = World::new();
        let mut instrument = MockInstrument::build(&world);

        instrument.tick();
        assert_eq!(&world.trace()[..], &TICK_ORDER[..]);
        assert_eq!(instrument.ticks(), 1);

        instrument.tick();
        assert_eq!(world.trace().len(), 10);
        assert_eq!(&world.trace()[5..], &TICK_ORDER[..]);
    }

    #[test]
    fn test_initialize_sets_up_everything_in_order() {
        let world = World::new();
        world.camera_idle();
        let mut instrument = MockInstrument::build(&world);

        assert_eq!(instrument.initialize(), Ok(()));
        assert_eq!(
            &world.setups()[..],
            &[
                Component::UserInterface,
                Component::ThermalController1,
                Component::ThermalController2,
                Component::MotionController,
                Component::Door,
            ][..]
        );
        assert_eq!(world.message().as_str(), "Initializing...");
        assert!(world.buttons_labeled());

        let pins = InstrumentPins::default();
        assert_eq!(world.board.mode(pins.camera_input_1), Some(PinMode::Input));
        // Fan is active-low and left on, tickler is active-low and left off
        assert_eq!(world.board.driven(pins.fan.pin), Level::Low);
        assert!(instrument.fan().is_active());
        assert_eq!(world.board.mode(pins.tickler.pin), Some(PinMode::Output));
        assert_eq!(world.board.driven(pins.tickler.pin), Level::High);
        assert!(!instrument.tickler().is_active());
        // Initialization does not tick
        assert_eq!(instrument.ticks(), 0);
    }

    #[test]
    fn test_initialize_stops_at_first_failure() {
        let world = World::new();
        world.camera_idle();
        world.fail_setup(Component::ThermalController2);
        let mut instrument = MockInstrument::build(&world);

        assert_eq!(
            instrument.initialize(),
            Err(InitError {
                component: Component::ThermalController2,
                cause: SetupError::Unavailable,
            })
        );
        assert_eq!(
            &world.setups()[..],
            &[
                Component::UserInterface,
                Component::ThermalController1,
                Component::ThermalController2,
            ][..]
        );
        // Later subsystems untouched
        let pins = InstrumentPins::default();
        assert_eq!(world.board.mode(pins.fan.pin), None);
        assert_eq!(world.board.mode(pins.tickler.pin), None);
    }

    #[test]
    fn test_initialize_requires_camera_idle_pattern() {
        let world = World::new();
        let mut instrument = MockInstrument::build(&world);

        assert_eq!(
            instrument.initialize(),
            Err(InitError {
                component: Component::Camera,
                cause: SetupError::CameraNotReady(OpticalResult::Off),
            })
        );
        assert_eq!(&world.setups()[..], &[Component::UserInterface][..]);
    }

    #[test]
    fn test_user_interface_failure_prints_nothing() {
        let world = World::new();
        world.fail_setup(Component::UserInterface);
        let mut instrument = MockInstrument::build(&world);

        assert!(instrument.initialize().is_err());
        assert_eq!(world.message().as_str(), "");
        assert!(!world.buttons_labeled());
    }
}
