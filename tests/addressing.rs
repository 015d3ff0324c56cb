mod common;

use common::{portrait_display, ready_display};
use ili9341_fsmc::{Config, Orientation, ScanDirection};

#[test]
fn cursor_writes_only_the_start_addresses() {
    let (mut display, state) = portrait_display();
    display.set_cursor(0x0123, 0x0045).unwrap();

    let state = state.borrow();
    assert_eq!(state.commands(), [0x2a, 0x2b]);
    assert_eq!(state.last_params(0x2a), [0x01, 0x23]);
    assert_eq!(state.last_params(0x2b), [0x00, 0x45]);
}

#[test]
fn window_writes_both_corners() {
    let (mut display, state) = portrait_display();
    display.set_window(10, 0x0102, 0x00ef, 0x013f).unwrap();

    let state = state.borrow();
    assert_eq!(state.last_params(0x2a), [0x00, 0x0a, 0x00, 0xef]);
    assert_eq!(state.last_params(0x2b), [0x01, 0x02, 0x01, 0x3f]);
    assert_eq!(state.window(), (10, 0xef, 0x102, 0x13f));
}

#[test]
fn orientation_sets_canonical_size_and_full_window() {
    let (mut display, state) = ready_display(Config::default());

    for orientation in [
        Orientation::Portrait,
        Orientation::Landscape,
        Orientation::Portrait,
    ] {
        display.set_orientation(orientation).unwrap();
        let expected = match orientation {
            Orientation::Portrait => (240, 320),
            Orientation::Landscape => (320, 240),
        };
        assert_eq!((display.width(), display.height()), expected);
        assert_eq!(display.orientation(), orientation);
        assert_eq!(
            state.borrow().window(),
            (0, expected.0 as u16 - 1, 0, expected.1 as u16 - 1)
        );
    }
}

#[test]
fn memory_access_control_values() {
    let (mut display, state) = portrait_display();

    display.set_orientation(Orientation::Portrait).unwrap();
    assert_eq!(state.borrow().last_params(0x36), [0x08]);

    display.set_orientation(Orientation::Landscape).unwrap();
    assert_eq!(state.borrow().last_params(0x36), [0xa8]);
}

#[test]
fn exchanging_rows_and_columns_swaps_the_dimensions() {
    let (mut display, state) = portrait_display();

    display
        .set_scan_direction(ScanDirection::TopToBottomLeftToRight)
        .unwrap();
    assert_eq!(state.borrow().last_params(0x36), [0x28]);
    assert_eq!((display.width(), display.height()), (320, 240));
    assert_eq!(state.borrow().window(), (0, 319, 0, 239));

    display
        .set_scan_direction(ScanDirection::RightToLeftBottomToTop)
        .unwrap();
    assert_eq!(state.borrow().last_params(0x36), [0xc8]);
    assert_eq!((display.width(), display.height()), (240, 320));
}

#[test]
fn landscape_scan_directions_are_remapped() {
    let (mut display, state) = ready_display(Config::default());

    display
        .set_scan_direction(ScanDirection::TopToBottomRightToLeft)
        .unwrap();
    // Remapped to left to right, top to bottom: no flag but BGR
    assert_eq!(state.borrow().last_params(0x36), [0x08]);
    // Landscape keeps the wide dimensions
    assert_eq!((display.width(), display.height()), (320, 240));
}
