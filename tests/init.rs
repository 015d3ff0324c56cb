mod common;

use common::{Access, RecordingDelay, SimulatedPanel};
use ili9341_fsmc::{color, Config, DisplaySize240x320, Error, Ili9341, Orientation};

const POWER_CONTROL_B: u8 = 0xcf;
const READ_ID4: u8 = 0xd3;

fn init(panel: &SimulatedPanel) -> Result<Ili9341<SimulatedPanel>, Error> {
    Ili9341::new(
        panel.clone(),
        &mut RecordingDelay::default(),
        DisplaySize240x320,
        Config::default(),
    )
}

#[test]
fn identity_through_read_id4() {
    let panel = SimulatedPanel::ili9341();
    let display = init(&panel).unwrap();
    assert_eq!(display.id(), 0x9341);

    let state = panel.state.borrow();
    assert_eq!(
        state.log[..9],
        [
            Access::Command(0x01),
            Access::Command(0x00),
            Access::Read,
            Access::Command(READ_ID4),
            Access::Read,
            Access::Read,
            Access::Read,
            Access::Read,
            Access::Command(POWER_CONTROL_B),
        ]
    );
}

#[test]
fn identity_through_the_device_code_register() {
    let panel = SimulatedPanel::new(&[0x9341]);
    let display = init(&panel).unwrap();
    assert_eq!(display.id(), 0x9341);

    let commands = panel.state.borrow().commands();
    assert!(!commands.contains(&READ_ID4));
    assert!(commands.contains(&POWER_CONTROL_B));
}

#[test]
fn controller_still_in_reset_falls_back_to_read_id4() {
    let panel = SimulatedPanel::new(&[0x9300, 0x00, 0x00, 0x93, 0x41]);
    assert!(init(&panel).is_ok());
    assert!(panel.state.borrow().commands().contains(&READ_ID4));
}

#[test]
fn only_the_low_byte_of_id_reads_counts() {
    let panel = SimulatedPanel::new(&[0xffff, 0xff00, 0xff00, 0xff93, 0xff41]);
    assert_eq!(init(&panel).unwrap().id(), 0x9341);
}

#[test]
fn unknown_controller_is_rejected_before_configuration() {
    let panel = SimulatedPanel::new(&[0x0000, 0x00, 0x00, 0x93, 0x25]);
    let result = init(&panel);
    assert!(matches!(
        result,
        Err(Error::UnsupportedController { id: 0x9325 })
    ));

    let commands = panel.state.borrow().commands();
    assert_eq!(commands, [0x01, 0x00, READ_ID4]);
}

#[test]
fn wrong_device_code_is_trusted() {
    let panel = SimulatedPanel::new(&[0x9325]);
    let result = init(&panel);
    assert!(matches!(
        result,
        Err(Error::UnsupportedController { id: 0x9325 })
    ));
    assert_eq!(panel.state.borrow().commands(), [0x01, 0x00]);
}

#[test]
fn silent_bus_is_rejected() {
    let panel = SimulatedPanel::new(&[]);
    assert!(matches!(
        init(&panel),
        Err(Error::UnsupportedController { id: 0x0000 })
    ));
}

#[test]
fn configuration_is_written_in_order() {
    let panel = SimulatedPanel::ili9341();
    init(&panel).unwrap();

    let commands = panel.state.borrow().commands();
    let start = commands
        .iter()
        .position(|&cmd| cmd == POWER_CONTROL_B)
        .unwrap();
    assert_eq!(
        commands[start..start + 23],
        [
            0xcf, 0xed, 0xe8, 0xcb, 0xf7, 0xea, 0xc0, 0xc1, 0xc5, 0xc7, 0x36, 0x3a, 0xb1, 0xb6,
            0xf2, 0x26, 0xe0, 0xe1, 0x2b, 0x2a, 0x11, 0x29, 0x36,
        ]
    );

    let state = panel.state.borrow();
    assert_eq!(state.last_params(0xcb), [0x39, 0x2c, 0x00, 0x34, 0x02]);
    assert_eq!(state.last_params(0x3a), [0x55]);
    assert_eq!(
        state.last_params(0xe1),
        [0x00, 0x15, 0x17, 0x07, 0x11, 0x06, 0x2b, 0x56, 0x3c, 0x05, 0x10, 0x0f, 0x3f, 0x3f, 0x0f]
    );
}

#[test]
fn waits_follow_the_configured_timing() {
    let panel = SimulatedPanel::ili9341();
    let mut delay = RecordingDelay::default();
    Ili9341::new(panel.clone(), &mut delay, DisplaySize240x320, Config::default()).unwrap();
    assert_eq!(delay.0, [50, 50, 120, 20]);

    let panel = SimulatedPanel::ili9341();
    let mut delay = RecordingDelay::default();
    let config = Config::default().with_timing(5, 6, 7);
    Ili9341::new(panel, &mut delay, DisplaySize240x320, config).unwrap();
    assert_eq!(delay.0, [5, 5, 6, 7]);
}

#[test]
fn comes_up_in_landscape_cleared_to_green() {
    let panel = SimulatedPanel::ili9341();
    let display = init(&panel).unwrap();

    assert_eq!(display.orientation(), Orientation::Landscape);
    assert_eq!((display.width(), display.height()), (320, 240));
    assert_eq!((display.foreground(), display.background()), (color::BLACK, color::WHITE));

    let state = panel.state.borrow();
    assert_eq!(state.writes.len(), 320 * 240);
    assert!(state.writes.iter().all(|&(_, _, c)| c == color::GREEN));
    assert_eq!(state.pixel(0, 0), color::GREEN);
    assert_eq!(state.pixel(319, 239), color::GREEN);
    assert_eq!(state.pixel(0, 240), 0);
}

#[test]
fn configured_orientation_and_clear_color() {
    let panel = SimulatedPanel::ili9341();
    let config = Config::default()
        .with_orientation(Orientation::Portrait)
        .with_clear_color(color::BLUE);
    let mut delay = RecordingDelay::default();
    let display = Ili9341::new(panel.clone(), &mut delay, DisplaySize240x320, config).unwrap();

    assert_eq!((display.width(), display.height()), (240, 320));
    let state = panel.state.borrow();
    assert_eq!(state.last_params(0x36), [0x08]);
    assert_eq!(state.pixel(239, 319), color::BLUE);
    assert_eq!(state.pixel(240, 0), 0);
}

#[test]
fn release_hands_the_bus_back() {
    let panel = SimulatedPanel::ili9341();
    let display = init(&panel).unwrap();
    let bus = display.release();
    assert!(std::rc::Rc::ptr_eq(&bus.state, &panel.state));
}
