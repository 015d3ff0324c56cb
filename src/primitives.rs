use core::iter::{once, repeat};

use display_interface::{DisplayError, WriteOnlyDataCommand};

use crate::{Ili9341, Result};

/// Points of a straight line, both endpoints included.
///
/// Integer Bresenham stepping: the axis with the larger delta advances every
/// step, the other one whenever its accumulated error reaches the distance.
#[derive(Clone, Debug)]
pub struct LinePoints {
    x: i32,
    y: i32,
    step_x: i32,
    step_y: i32,
    delta_x: i32,
    delta_y: i32,
    distance: i32,
    x_err: i32,
    y_err: i32,
    remaining: u32,
}

impl LinePoints {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let delta_x = (x2 - x1).abs();
        let delta_y = (y2 - y1).abs();
        let distance = delta_x.max(delta_y);
        Self {
            x: x1,
            y: y1,
            step_x: (x2 - x1).signum(),
            step_y: (y2 - y1).signum(),
            delta_x,
            delta_y,
            distance,
            // Seeding at half the distance centers the minor axis steps
            x_err: distance / 2,
            y_err: distance / 2,
            remaining: distance as u32 + 1,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let point = (self.x, self.y);

        self.x_err += self.delta_x;
        self.y_err += self.delta_y;
        if self.x_err >= self.distance {
            self.x_err -= self.distance;
            self.x += self.step_x;
        }
        if self.y_err >= self.distance {
            self.y_err -= self.distance;
            self.y += self.step_y;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

/// Points of a circle outline, eight octant reflections per step.
///
/// Points on an octant boundary are produced more than once.
#[derive(Clone, Debug)]
pub struct CirclePoints {
    x0: i32,
    y0: i32,
    a: i32,
    b: i32,
    di: i32,
    octant: u8,
}

impl CirclePoints {
    pub fn new(x0: i32, y0: i32, r: u16) -> Self {
        let r = i32::from(r);
        Self {
            x0,
            y0,
            a: 0,
            b: r,
            di: 3 - (r << 1),
            octant: 0,
        }
    }
}

impl Iterator for CirclePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.a > self.b {
            return None;
        }
        let (x0, y0, a, b) = (self.x0, self.y0, self.a, self.b);
        let point = match self.octant {
            0 => (x0 + a, y0 - b),
            1 => (x0 + b, y0 - a),
            2 => (x0 + b, y0 + a),
            3 => (x0 + a, y0 + b),
            4 => (x0 - a, y0 + b),
            5 => (x0 - b, y0 + a),
            6 => (x0 - a, y0 - b),
            _ => (x0 - b, y0 - a),
        };

        self.octant += 1;
        if self.octant == 8 {
            self.octant = 0;
            self.a += 1;
            if self.di < 0 {
                self.di += 4 * self.a + 6;
            } else {
                self.di += 10 + 4 * (self.a - self.b);
                self.b -= 1;
            }
        }

        Some(point)
    }
}

impl<IFACE> Ili9341<IFACE>
where
    IFACE: WriteOnlyDataCommand,
{
    /// Draw one pixel in the foreground color. Points off the screen are
    /// skipped.
    pub fn draw_point(&mut self, x: u16, y: u16) -> Result {
        self.plot(i32::from(x), i32::from(y))
    }

    /// Draw one pixel in `color` without checking the screen bounds
    pub fn fast_draw_point(&mut self, x: u16, y: u16, color: u16) -> Result {
        self.set_cursor(x, y)?;
        self.write_iter(once(color))
    }

    fn plot(&mut self, x: i32, y: i32) -> Result {
        if !self.contains(x, y) {
            return Ok(());
        }
        self.fast_draw_point(x as u16, y as u16, self.foreground)
    }

    /// Fill the whole screen with `color`
    pub fn clear(&mut self, color: u16) -> Result {
        self.reset_window()?;
        self.write_iter(repeat(color).take(self.width * self.height))
    }

    /// Fill the rectangle with corners (sx, sy) and (ex, ey), border
    /// included.
    ///
    /// Corners may be given in any order. The part of the rectangle outside
    /// the screen is dropped.
    pub fn fill(&mut self, sx: u16, sy: u16, ex: u16, ey: u16, color: u16) -> Result {
        let (sx, ex) = (sx.min(ex), sx.max(ex));
        let (sy, ey) = (sy.min(ey), sy.max(ey));
        if usize::from(sx) >= self.width || usize::from(sy) >= self.height {
            return Ok(());
        }
        let ex = ex.min(self.width as u16 - 1);
        let ey = ey.min(self.height as u16 - 1);

        let count = usize::from(ex - sx + 1) * usize::from(ey - sy + 1);
        self.set_window(sx, sy, ex, ey)?;
        self.write_iter(repeat(color).take(count))?;
        self.reset_window()
    }

    /// Copy a row-major rgb565 image into the rectangle with corners
    /// (sx, sy) and (ex, ey), border included.
    ///
    /// The cursor is moved to the start of every row, so `pixels` must hold
    /// exactly `(ex - sx + 1) * (ey - sy + 1)` entries.
    pub fn draw_bitmap(&mut self, sx: u16, sy: u16, ex: u16, ey: u16, pixels: &[u16]) -> Result {
        if sx > ex || sy > ey {
            return Err(DisplayError::OutOfBoundsError);
        }
        if usize::from(ex) >= self.width || usize::from(ey) >= self.height {
            return Err(DisplayError::OutOfBoundsError);
        }
        let width = usize::from(ex - sx + 1);
        if pixels.len() != width * usize::from(ey - sy + 1) {
            return Err(DisplayError::InvalidFormatError);
        }

        for (y, row) in (sy..=ey).zip(pixels.chunks_exact(width)) {
            self.set_cursor(sx, y)?;
            self.write_iter(row.iter().copied())?;
        }
        Ok(())
    }

    /// Stream rgb565 pixels into the window with corners (x0, y0) and
    /// (x1, y1), border included, row by row.
    ///
    /// Pixels are pulled from `data` as they are written, so no frame
    /// buffer is needed. Extra pixels wrap around inside the window. The
    /// window is reset to the full screen afterwards.
    pub fn draw_raw_iter<I: IntoIterator<Item = u16>>(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        data: I,
    ) -> Result {
        self.set_window(x0, y0, x1, y1)?;
        self.write_iter(data)?;
        self.reset_window()
    }

    /// Copy a row-major rgb565 buffer into the window with corners (x0, y0)
    /// and (x1, y1) in one GRAM write
    pub fn draw_raw_slice(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, data: &[u16]) -> Result {
        self.draw_raw_iter(x0, y0, x1, y1, data.iter().copied())
    }

    /// Draw a line from (x1, y1) to (x2, y2) in the foreground color
    pub fn draw_line(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) -> Result {
        let points = LinePoints::new(i32::from(x1), i32::from(y1), i32::from(x2), i32::from(y2));
        for (x, y) in points {
            self.plot(x, y)?;
        }
        Ok(())
    }

    /// Outline the rectangle with corners (x1, y1) and (x2, y2)
    pub fn draw_rectangle(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) -> Result {
        self.draw_line(x1, y1, x2, y1)?;
        self.draw_line(x1, y1, x1, y2)?;
        self.draw_line(x1, y2, x2, y2)?;
        self.draw_line(x2, y1, x2, y2)
    }

    /// Outline a circle of radius `r` around (x0, y0)
    pub fn draw_circle(&mut self, x0: u16, y0: u16, r: u16) -> Result {
        for (x, y) in CirclePoints::new(i32::from(x0), i32::from(y0), r) {
            self.plot(x, y)?;
        }
        Ok(())
    }
}
