mod common;

use std::collections::HashSet;

use common::{portrait_display, ready_display};
use display_interface::DisplayError;
use ili9341_fsmc::{color, Config, DrawMode};

#[test]
fn point_uses_the_foreground_color() {
    let (mut display, state) = portrait_display();
    display.set_foreground(color::RED);
    display.draw_point(12, 34).unwrap();

    let state = state.borrow();
    assert_eq!(state.commands(), [0x2a, 0x2b, 0x2c]);
    assert_eq!(state.writes, [(12, 34, color::RED)]);
}

#[test]
fn point_off_the_screen_is_skipped() {
    let (mut display, state) = portrait_display();
    display.draw_point(240, 10).unwrap();
    display.draw_point(10, 320).unwrap();
    assert!(state.borrow().log.is_empty());
}

#[test]
fn fast_point_takes_an_explicit_color() {
    let (mut display, state) = portrait_display();
    display.fast_draw_point(1, 2, color::GBLUE).unwrap();
    assert_eq!(state.borrow().writes, [(1, 2, color::GBLUE)]);
}

#[test]
fn single_point_line() {
    let (mut display, state) = portrait_display();
    display.draw_line(50, 60, 50, 60).unwrap();
    assert_eq!(state.borrow().written_points(), [(50, 60)]);
}

#[test]
fn line_reaches_both_ends() {
    let (mut display, state) = portrait_display();
    display.draw_line(200, 10, 3, 150).unwrap();

    let points = state.borrow().written_points();
    assert_eq!(points.first(), Some(&(200, 10)));
    assert_eq!(points.last(), Some(&(3, 150)));
    assert_eq!(points.len(), 198);
    for pair in points.windows(2) {
        assert!((i32::from(pair[0].0) - i32::from(pair[1].0)).abs() <= 1);
        assert!((i32::from(pair[0].1) - i32::from(pair[1].1)).abs() <= 1);
    }
}

#[test]
fn line_is_clipped_at_the_screen_edge() {
    let (mut display, state) = portrait_display();
    display.draw_line(230, 5, 250, 5).unwrap();

    let points = state.borrow().written_points();
    assert_eq!(points.len(), 10);
    assert!(points.iter().all(|&(x, _)| x < 240));
}

#[test]
fn rectangle_outline() {
    let (mut display, state) = portrait_display();
    display.draw_rectangle(10, 20, 14, 23).unwrap();

    let state = state.borrow();
    let drawn: HashSet<_> = state.written_points().into_iter().collect();
    let mut expected = HashSet::new();
    for x in 10..=14 {
        expected.insert((x, 20));
        expected.insert((x, 23));
    }
    for y in 20..=23 {
        expected.insert((10, y));
        expected.insert((14, y));
    }
    assert_eq!(drawn, expected);
    // Four lines of 5, 4, 5 and 4 points, corners drawn twice
    assert_eq!(state.writes.len(), 18);
}

#[test]
fn circle_is_symmetric() {
    let (mut display, state) = portrait_display();
    let (x0, y0) = (100i32, 120i32);
    display.draw_circle(100, 120, 30).unwrap();

    let drawn: HashSet<(i32, i32)> = state
        .borrow()
        .written_points()
        .into_iter()
        .map(|(x, y)| (i32::from(x) - x0, i32::from(y) - y0))
        .collect();
    for &(dx, dy) in &drawn {
        for reflected in [(-dx, dy), (dx, -dy), (-dx, -dy), (dy, dx), (-dy, -dx)] {
            assert!(drawn.contains(&reflected), "{:?} missing", reflected);
        }
    }
    assert!(drawn.contains(&(0, -30)));
    assert!(drawn.contains(&(30, 0)));
}

#[test]
fn zero_radius_circle_plots_the_center_eight_times() {
    let (mut display, state) = portrait_display();
    display.draw_circle(7, 9, 0).unwrap();
    assert_eq!(state.borrow().written_points(), [(7, 9); 8]);
}

#[test]
fn circle_near_the_corner_is_clipped() {
    let (mut display, state) = portrait_display();
    display.draw_circle(2, 2, 5).unwrap();
    let points = state.borrow().written_points();
    assert!(!points.is_empty());
    assert!(points.iter().all(|&(x, y)| x < 240 && y < 320));
}

#[test]
fn fill_writes_one_pixel_per_cell() {
    for (sx, sy, ex, ey) in [(5, 6, 9, 10), (5, 10, 9, 6), (9, 6, 5, 10)] {
        let (mut display, state) = portrait_display();
        display.fill(sx, sy, ex, ey, color::BROWN).unwrap();

        let state = state.borrow();
        assert_eq!(state.writes.len(), 5 * 5);
        assert!(state.writes.iter().all(|&(_, _, c)| c == color::BROWN));
        assert!(state
            .writes
            .iter()
            .all(|&(x, y, _)| (5..=9).contains(&x) && (6..=10).contains(&y)));
        assert_eq!(state.window(), (0, 239, 0, 319));
        assert_eq!(state.pixel(5, 6), color::BROWN);
        assert_eq!(state.pixel(9, 10), color::BROWN);
    }
}

#[test]
fn fill_is_clipped_to_the_screen() {
    let (mut display, state) = portrait_display();
    display.fill(230, 310, 300, 400, color::RED).unwrap();
    assert_eq!(state.borrow().writes.len(), 10 * 10);
    assert_eq!(state.borrow().pixel(239, 319), color::RED);
    assert_ne!(state.borrow().pixel(229, 319), color::RED);
    assert_eq!(state.borrow().window(), (0, 239, 0, 319));

    state.borrow_mut().reset_log();
    display.fill(240, 0, 250, 10, color::RED).unwrap();
    assert!(state.borrow().log.is_empty());
}

#[test]
fn clear_covers_the_whole_screen() {
    let (mut display, state) = ready_display(Config::default());
    display.clear(color::GRAY).unwrap();

    let state = state.borrow();
    assert_eq!(state.writes.len(), 320 * 240);
    assert_eq!(state.pixel(0, 0), color::GRAY);
    assert_eq!(state.pixel(319, 239), color::GRAY);
}

#[test]
fn bitmap_rows_land_in_place() {
    let (mut display, state) = portrait_display();
    // Rows are addressed by cursor after a fill elsewhere
    display.fill(0, 0, 1, 1, color::BLACK).unwrap();

    let pixels: Vec<u16> = (0..12).collect();
    display.draw_bitmap(20, 30, 23, 32, &pixels).unwrap();

    let state = state.borrow();
    for (i, &expected) in pixels.iter().enumerate() {
        assert_eq!(state.pixel(20 + i % 4, 30 + i / 4), expected);
    }
}

#[test]
fn bitmap_rejects_bad_input_before_writing() {
    let (mut display, state) = portrait_display();

    let result = display.draw_bitmap(0, 0, 3, 3, &[0; 15]);
    assert!(matches!(result, Err(DisplayError::InvalidFormatError)));

    let result = display.draw_bitmap(238, 0, 241, 0, &[0; 4]);
    assert!(matches!(result, Err(DisplayError::OutOfBoundsError)));

    let result = display.draw_bitmap(5, 0, 4, 0, &[]);
    assert!(matches!(result, Err(DisplayError::OutOfBoundsError)));

    assert!(state.borrow().log.is_empty());
}

#[test]
fn raw_slice_streams_into_one_window() {
    let (mut display, state) = portrait_display();
    let data = [color::RED, color::GREEN, color::BLUE, color::WHITE];
    display.draw_raw_slice(100, 100, 101, 101, &data).unwrap();

    let state = state.borrow();
    assert_eq!(state.commands(), [0x2a, 0x2b, 0x2c, 0x2a, 0x2b]);
    assert_eq!(state.window(), (0, 239, 0, 319));
    assert_eq!(state.pixel(100, 100), color::RED);
    assert_eq!(state.pixel(101, 100), color::GREEN);
    assert_eq!(state.pixel(100, 101), color::BLUE);
    assert_eq!(state.pixel(101, 101), color::WHITE);
}

#[test]
fn points_and_glyphs_land_after_a_fill() {
    let (mut display, state) = portrait_display();
    display.fill(0, 0, 1, 1, color::BLACK).unwrap();
    assert_eq!(state.borrow().window(), (0, 239, 0, 319));
    state.borrow_mut().reset_log();

    display.set_foreground(color::RED);
    display.draw_point(30, 40).unwrap();
    assert_eq!(state.borrow().writes, [(30, 40, color::RED)]);

    display.show_char(100, 100, b'A', 16, DrawMode::Opaque).unwrap();
    let state = state.borrow();
    assert_eq!(state.writes.len(), 1 + 8 * 16);
    assert_eq!(state.pixel(30, 40), color::RED);
    assert!(state.writes[1..]
        .iter()
        .all(|&(x, y, _)| (100..108).contains(&x) && (100..116).contains(&y)));
}

#[test]
fn bitmap_and_stream_restore_the_full_window() {
    let (mut display, state) = portrait_display();
    display.draw_bitmap(20, 30, 21, 30, &[color::RED, color::GREEN]).unwrap();
    assert_eq!(state.borrow().window(), (0, 239, 0, 319));

    display.draw_raw_iter(50, 60, 51, 61, [color::BLUE; 4]).unwrap();
    assert_eq!(state.borrow().window(), (0, 239, 0, 319));

    display.fast_draw_point(200, 300, color::WHITE).unwrap();
    assert_eq!(state.borrow().pixel(200, 300), color::WHITE);
}
