//! Scripted subsystems for exercising the instrument on the host
//!
//! Everything observable lives in a [`World`] that the mocks and the test
//! share by reference. Time comes from a [`SimClock`] that advances 1 ms
//! every time it is read, so a `race` with budget `n` runs exactly `n`
//! ticks.

use core::cell::{Cell, RefCell};
use core::marker::PhantomData;

use benchdx_core::config::InstrumentPins;
use benchdx_core::traits::{
    DebouncedSwitch, DoorControl, MotionControl, SetupError, Subsystem, SwitchState,
    ThermalControl, UserInterface,
};
use benchdx_hal::sim::{SimBoard, SimClock};
use benchdx_hal::{Level, Pin, PinBank};
use heapless::{String, Vec};

use crate::error::Component;
use crate::instrument::{Instrument, Subsystems};
use crate::platform::Platform;

/// Update order of one tick
pub const TICK_ORDER: [Component; 5] = [
    Component::ThermalController1,
    Component::ThermalController2,
    Component::UserInterface,
    Component::MotionController,
    Component::Door,
];

/// Temperature the mock heaters drift back to
const AMBIENT_C: f32 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Press(Pin),
    Release(Pin),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorRequest {
    Unlock,
    Lock,
}

pub struct World {
    pub board: SimBoard,
    pub clock: SimClock,
    tick: Cell<u32>,
    trace: RefCell<Vec<Component, 64>>,
    setups: RefCell<Vec<Component, 8>>,
    failing: Cell<Option<Component>>,
    message: RefCell<String<32>>,
    labeled: Cell<bool>,
    temperatures: [Cell<f32>; 2],
    targets: [Cell<Option<f32>>; 2],
    door_open: Cell<bool>,
    door_request: Cell<Option<DoorRequest>>,
    events: RefCell<Vec<(u32, Event), 16>>,
}

impl World {
    pub fn new() -> Self {
        Self {
            board: SimBoard::new(),
            clock: SimClock::auto_advance(1000),
            tick: Cell::new(0),
            trace: RefCell::new(Vec::new()),
            setups: RefCell::new(Vec::new()),
            failing: Cell::new(None),
            message: RefCell::new(String::new()),
            labeled: Cell::new(false),
            temperatures: [Cell::new(AMBIENT_C), Cell::new(AMBIENT_C)],
            targets: [Cell::new(None), Cell::new(None)],
            door_open: Cell::new(false),
            door_request: Cell::new(None),
            events: RefCell::new(Vec::new()),
        }
    }

    /// Hold both reader lines high
    pub fn camera_idle(&self) {
        let pins = InstrumentPins::default();
        self.board.apply(pins.camera_input_1, Level::High);
        self.board.apply(pins.camera_input_2, Level::High);
    }

    pub fn fail_setup(&self, component: Component) {
        self.failing.set(Some(component));
    }

    /// Schedule an event for the start of tick `tick` (1-based)
    pub fn at(&self, tick: u32, event: Event) {
        let _ = self.events.borrow_mut().push((tick, event));
    }

    pub fn hold(&self, pin: Pin) {
        self.board.apply(pin, Level::High);
    }

    pub fn set_temperature(&self, channel: usize, celsius: f32) {
        self.temperatures[channel].set(celsius);
    }

    pub fn target(&self, channel: usize) -> Option<f32> {
        self.targets[channel].get()
    }

    pub fn set_door_open(&self, open: bool) {
        self.door_open.set(open);
    }

    pub fn door_request(&self) -> Option<DoorRequest> {
        self.door_request.get()
    }

    pub fn trace(&self) -> Vec<Component, 64> {
        self.trace.borrow().clone()
    }

    pub fn setups(&self) -> Vec<Component, 8> {
        self.setups.borrow().clone()
    }

    pub fn message(&self) -> String<32> {
        self.message.borrow().clone()
    }

    pub fn buttons_labeled(&self) -> bool {
        self.labeled.get()
    }

    fn is_high(&self, pin: Pin) -> bool {
        let mut bank = &self.board;
        bank.read(pin).is_high()
    }

    fn begin_tick(&self) {
        let tick = self.tick.get() + 1;
        self.tick.set(tick);
        for (at, event) in self.events.borrow().iter() {
            if *at != tick {
                continue;
            }
            match *event {
                Event::Press(pin) => self.board.apply(pin, Level::High),
                Event::Release(pin) => self.board.apply(pin, Level::Low),
            }
        }
    }

    fn record(&self, component: Component) {
        let _ = self.trace.borrow_mut().push(component);
    }

    fn setup(&self, component: Component) -> Result<(), SetupError> {
        let _ = self.setups.borrow_mut().push(component);
        if self.failing.get() == Some(component) {
            Err(SetupError::Unavailable)
        } else {
            Ok(())
        }
    }
}

/// Edge detector on a sim board pin, high = pressed
#[derive(Clone)]
pub struct MockSwitch<'a> {
    world: &'a World,
    pin: Pin,
    pressed: bool,
}

impl<'a> MockSwitch<'a> {
    fn new(world: &'a World, pin: Pin) -> Self {
        Self {
            world,
            pin,
            pressed: false,
        }
    }
}

impl DebouncedSwitch for MockSwitch<'_> {
    fn read(&mut self) -> SwitchState {
        let now = self.world.is_high(self.pin);
        let state = match (self.pressed, now) {
            (false, false) => SwitchState::Inactive,
            (false, true) => SwitchState::Activated,
            (true, true) => SwitchState::Active,
            (true, false) => SwitchState::Deactivated,
        };
        self.pressed = now;
        state
    }

    fn pin(&self) -> Pin {
        self.pin
    }
}

/// Heater that warms 1 °C per tick while regulating and cools 1 °C per
/// tick toward ambient otherwise
pub struct MockThermal<'a> {
    world: &'a World,
    channel: usize,
}

impl MockThermal<'_> {
    fn component(&self) -> Component {
        if self.channel == 0 {
            Component::ThermalController1
        } else {
            Component::ThermalController2
        }
    }
}

impl Subsystem for MockThermal<'_> {
    fn setup(&mut self) -> Result<(), SetupError> {
        self.world.setup(self.component())
    }

    fn update(&mut self) {
        // First in the tick order
        if self.channel == 0 {
            self.world.begin_tick();
        }
        self.world.record(self.component());

        let temperature = &self.world.temperatures[self.channel];
        if self.world.targets[self.channel].get().is_some() {
            temperature.set(temperature.get() + 1.0);
        } else if temperature.get() > AMBIENT_C {
            temperature.set(temperature.get() - 1.0);
        }
    }
}

impl ThermalControl for MockThermal<'_> {
    fn start_control(&mut self, target_c: f32) {
        self.world.targets[self.channel].set(Some(target_c));
    }

    fn stop_control(&mut self) {
        self.world.targets[self.channel].set(None);
    }

    fn temperature(&mut self) -> f32 {
        self.world.temperatures[self.channel].get()
    }
}

/// Actuator that travels one unit per tick and stops at the limit ahead
pub struct MockMotion<'a> {
    world: &'a World,
    top: MockSwitch<'a>,
    bottom: MockSwitch<'a>,
    moving: bool,
    upward: bool,
    remaining: u32,
    into_top: bool,
    into_bottom: bool,
}

impl Subsystem for MockMotion<'_> {
    fn setup(&mut self) -> Result<(), SetupError> {
        self.world.setup(Component::MotionController)
    }

    fn update(&mut self) {
        self.world.record(Component::MotionController);
        if !self.moving {
            return;
        }

        let ahead = if self.upward {
            self.top.pin
        } else {
            self.bottom.pin
        };
        if self.world.is_high(ahead) {
            self.moving = false;
            self.into_top = self.upward;
            self.into_bottom = !self.upward;
            return;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.moving = false;
        }
    }
}

impl<'a> MotionControl for MockMotion<'a> {
    type Switch = MockSwitch<'a>;

    fn start_move(&mut self, displacement: f32, _speed: f32) {
        let distance = if displacement < 0.0 {
            -displacement
        } else {
            displacement
        };
        self.upward = displacement >= 0.0;
        self.remaining = distance as u32;
        self.moving = self.remaining > 0;
        self.into_top = false;
        self.into_bottom = false;
    }

    fn start_jog(&mut self, velocity: f32) {
        self.upward = velocity >= 0.0;
        self.remaining = u32::MAX;
        self.moving = true;
        self.into_top = false;
        self.into_bottom = false;
    }

    fn moving(&self) -> bool {
        self.moving
    }

    fn moved_into_top_limit(&self) -> bool {
        self.into_top
    }

    fn moved_into_bottom_limit(&self) -> bool {
        self.into_bottom
    }

    fn switch_top(&mut self) -> &mut MockSwitch<'a> {
        &mut self.top
    }

    fn switch_bottom(&mut self) -> &mut MockSwitch<'a> {
        &mut self.bottom
    }
}

pub struct MockUi<'a> {
    world: &'a World,
    primary: MockSwitch<'a>,
    secondary: MockSwitch<'a>,
}

impl Subsystem for MockUi<'_> {
    fn setup(&mut self) -> Result<(), SetupError> {
        self.world.setup(Component::UserInterface)
    }

    fn update(&mut self) {
        self.world.record(Component::UserInterface);
    }
}

impl<'a> UserInterface for MockUi<'a> {
    type Switch = MockSwitch<'a>;

    fn print_message(&mut self, message: &str) {
        let mut stored = self.world.message.borrow_mut();
        stored.clear();
        let _ = stored.push_str(message);
    }

    fn label_buttons(&mut self) {
        self.world.labeled.set(true);
    }

    fn primary(&mut self) -> &mut MockSwitch<'a> {
        &mut self.primary
    }

    fn secondary(&mut self) -> &mut MockSwitch<'a> {
        &mut self.secondary
    }
}

pub struct MockDoor<'a> {
    world: &'a World,
}

impl Subsystem for MockDoor<'_> {
    fn setup(&mut self) -> Result<(), SetupError> {
        self.world.setup(Component::Door)
    }

    fn update(&mut self) {
        self.world.record(Component::Door);
    }
}

impl DoorControl for MockDoor<'_> {
    fn start_unlock(&mut self) {
        self.world.door_request.set(Some(DoorRequest::Unlock));
    }

    fn start_lock(&mut self) {
        self.world.door_request.set(Some(DoorRequest::Lock));
    }

    fn is_open(&mut self) -> bool {
        self.world.door_open.get()
    }
}

pub struct MockPlatform<'a>(PhantomData<&'a ()>);

impl<'a> Platform for MockPlatform<'a> {
    type Pins = &'a SimBoard;
    type Clock = &'a SimClock;
    type Switch = MockSwitch<'a>;
    type Thermal = MockThermal<'a>;
    type Motion = MockMotion<'a>;
    type Ui = MockUi<'a>;
    type Door = MockDoor<'a>;
}

pub type MockInstrument<'a> = Instrument<MockPlatform<'a>>;

impl<'a> Instrument<MockPlatform<'a>> {
    /// Instrument on the default pin map, wired to `world`
    pub fn build(world: &'a World) -> Self {
        let pins = InstrumentPins::default();
        let subsystems = Subsystems {
            user_interface: MockUi {
                world,
                primary: MockSwitch::new(world, pins.button_primary),
                secondary: MockSwitch::new(world, pins.button_secondary),
            },
            thermal_controller_1: MockThermal { world, channel: 0 },
            thermal_controller_2: MockThermal { world, channel: 1 },
            motion_controller: MockMotion {
                world,
                top: MockSwitch::new(world, pins.motion.limit_top),
                bottom: MockSwitch::new(world, pins.motion.limit_bottom),
                moving: false,
                upward: true,
                remaining: 0,
                into_top: false,
                into_bottom: false,
            },
            door: MockDoor { world },
        };
        Instrument::new(&world.board, &world.clock, &pins, subsystems)
    }
}
