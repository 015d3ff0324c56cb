#![cfg(feature = "graphics")]

mod common;

use common::portrait_display;
use embedded_graphics::{
    pixelcolor::{IntoStorage, Rgb565},
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};
use ili9341_fsmc::color;

#[test]
fn reports_the_current_size() {
    let (display, _) = portrait_display();
    assert_eq!(display.size(), Size::new(240, 320));
}

#[test]
fn filled_rectangle_streams_into_one_window() {
    let (mut display, state) = portrait_display();
    Rectangle::new(Point::new(10, 20), Size::new(4, 3))
        .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
        .draw(&mut display)
        .unwrap();

    let state = state.borrow();
    assert_eq!(state.last_params(0x2a), [0, 0, 0, 239]);
    assert_eq!(state.writes.len(), 12);
    assert!(state
        .writes
        .iter()
        .all(|&(x, y, _)| (10..=13).contains(&x) && (20..=22).contains(&y)));
    assert!(state.writes.iter().all(|&(_, _, c)| c == color::RED));
    assert_eq!(state.pixel(13, 22), color::RED);
}

#[test]
fn contiguous_fill_is_clipped() {
    let (mut display, state) = portrait_display();
    let area = Rectangle::new(Point::new(-2, 318), Size::new(4, 4));
    let colors = (0..16u16).map(|i| Rgb565::new(i as u8, 0, 0));
    display.fill_contiguous(&area, colors).unwrap();

    let state = state.borrow();
    assert_eq!(state.window(), (0, 239, 0, 319));
    assert_eq!(state.written_points(), [(0, 318), (1, 318), (0, 319), (1, 319)]);
    // Row 0 of the area holds colors 0..4, the visible part starts at column 2
    assert_eq!(state.pixel(0, 318), Rgb565::new(2, 0, 0).into_storage());
    assert_eq!(state.pixel(1, 318), Rgb565::new(3, 0, 0).into_storage());
    assert_eq!(state.pixel(0, 319), Rgb565::new(6, 0, 0).into_storage());
    assert_eq!(state.pixel(1, 319), Rgb565::new(7, 0, 0).into_storage());
}

#[test]
fn pixels_off_the_screen_are_ignored() {
    let (mut display, state) = portrait_display();
    let pixels = [
        Pixel(Point::new(-1, 0), Rgb565::WHITE),
        Pixel(Point::new(240, 0), Rgb565::WHITE),
        Pixel(Point::new(0, 320), Rgb565::WHITE),
        Pixel(Point::new(5, 6), Rgb565::WHITE),
    ];
    display.draw_iter(pixels).unwrap();
    assert_eq!(state.borrow().writes, [(5, 6, color::WHITE)]);
}

#[test]
fn line_primitive_reaches_the_panel() {
    let (mut display, state) = portrait_display();
    Line::new(Point::new(0, 0), Point::new(9, 0))
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 1))
        .draw(&mut display)
        .unwrap();
    assert_eq!(state.borrow().writes.len(), 10);
    assert_eq!(state.borrow().pixel(9, 0), color::GREEN);
}

#[test]
fn clear_uses_the_native_color() {
    let (mut display, state) = portrait_display();
    DrawTarget::clear(&mut display, Rgb565::BLUE).unwrap();
    assert_eq!(state.borrow().writes.len(), 240 * 320);
    assert_eq!(state.borrow().pixel(239, 319), color::BLUE);
}
