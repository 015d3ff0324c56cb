use display_interface::WriteOnlyDataCommand;

use crate::font::{is_printable, Font};
use crate::{Ili9341, Result};

/// [Ili9341::show_xnum] mode bit: pad suppressed leading digits with `'0'`
/// instead of blanks
pub const XNUM_ZERO_PAD: u8 = 0x80;
/// [Ili9341::show_xnum] mode bit: draw every digit in [DrawMode::Overlay]
pub const XNUM_OVERLAY: u8 = 0x01;

/// What happens to the clear pixels of a glyph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawMode {
    /// Clear pixels are painted in the background color
    Opaque,
    /// Clear pixels are left untouched, composing the glyph over whatever
    /// is already on screen
    Overlay,
}

impl DrawMode {
    /// Decode bit 0 of a mode byte
    pub fn from_bits(mode: u8) -> Self {
        if mode & XNUM_OVERLAY != 0 {
            DrawMode::Overlay
        } else {
            DrawMode::Opaque
        }
    }
}

/// How much of a glyph, or of a run of glyphs, reached the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Render {
    Complete,
    /// Drawing stopped at the edge of the screen
    Clipped,
    /// Nothing drawn: the font size or the character is not supported
    Skipped,
}

impl Render {
    fn and(self, other: Render) -> Render {
        match (self, other) {
            (Render::Clipped, _) | (_, Render::Clipped) => Render::Clipped,
            (Render::Complete, _) | (_, Render::Complete) => Render::Complete,
            _ => Render::Skipped,
        }
    }
}

/// Decimal digit of `num` at `place`, counted from the least significant
fn digit_at(num: u32, place: u8) -> u8 {
    match 10u32.checked_pow(u32::from(place)) {
        Some(power) => (num / power % 10) as u8,
        None => 0,
    }
}

impl<IFACE> Ili9341<IFACE>
where
    IFACE: WriteOnlyDataCommand,
{
    /// Draw the character `ch` with its top-left corner at (x, y).
    ///
    /// `size` is the glyph height in pixels: 12, 16 or 24. Set glyph pixels
    /// use the foreground color, clear ones depend on `mode`.
    pub fn show_char(
        &mut self,
        x: u16,
        y: u16,
        ch: u8,
        size: u8,
        mode: DrawMode,
    ) -> Result<Render> {
        let Some(font) = Font::for_size(size) else {
            return Ok(Render::Skipped);
        };
        let Some(glyph) = font.glyph(ch) else {
            return Ok(Render::Skipped);
        };

        for (column, bits) in glyph.chunks(font.bytes_per_column()).enumerate() {
            let px = usize::from(x) + column;
            if px >= self.width {
                return Ok(Render::Clipped);
            }
            for row in 0..usize::from(size) {
                let py = usize::from(y) + row;
                if py >= self.height {
                    return Ok(Render::Clipped);
                }
                if bits[row / 8] & (0x80 >> (row % 8)) != 0 {
                    self.fast_draw_point(px as u16, py as u16, self.foreground)?;
                } else if mode == DrawMode::Opaque {
                    self.fast_draw_point(px as u16, py as u16, self.background)?;
                }
            }
        }

        Ok(Render::Complete)
    }

    /// Draw `num` right-aligned in `len` digit cells, leading zeros as
    /// blanks. The last digit is always drawn.
    pub fn show_num(&mut self, x: u16, y: u16, num: u32, len: u8, size: u8) -> Result<Render> {
        self.show_digits(x, y, num, len, size, b' ', DrawMode::Opaque)
    }

    /// Draw `num` right-aligned in `len` digit cells.
    ///
    /// With [XNUM_ZERO_PAD] set in `mode` the leading zeros are drawn as
    /// `'0'`, otherwise as blanks. [XNUM_OVERLAY] selects the draw mode of
    /// every digit.
    pub fn show_xnum(
        &mut self,
        x: u16,
        y: u16,
        num: u32,
        len: u8,
        size: u8,
        mode: u8,
    ) -> Result<Render> {
        let pad = if mode & XNUM_ZERO_PAD != 0 { b'0' } else { b' ' };
        self.show_digits(x, y, num, len, size, pad, DrawMode::from_bits(mode))
    }

    #[allow(clippy::too_many_arguments)]
    fn show_digits(
        &mut self,
        x: u16,
        y: u16,
        num: u32,
        len: u8,
        size: u8,
        pad: u8,
        mode: DrawMode,
    ) -> Result<Render> {
        let advance = u16::from(size / 2);
        let mut leading = true;
        let mut render = Render::Skipped;

        for t in 0..len {
            let digit = digit_at(num, len - 1 - t);
            let ch = if leading && digit == 0 && t + 1 < len {
                pad
            } else {
                leading = false;
                b'0' + digit
            };
            let cx = x.saturating_add(advance * u16::from(t));
            render = render.and(self.show_char(cx, y, ch, size, mode)?);
        }

        Ok(render)
    }

    /// Lay out `text` inside the box of `width` x `height` pixels whose
    /// top-left corner is (x, y).
    ///
    /// Glyphs run left to right and wrap to the next line of `size` pixels
    /// when the next one would cross the right edge of the box. Layout stops
    /// at the first glyph that would cross the bottom edge or that the screen
    /// edge cuts. It also stops at the first byte outside `' '..='~'`.
    ///
    /// Returns the number of glyphs drawn in full. A glyph cut by the screen
    /// edge is partly drawn but not counted.
    pub fn show_string<T: AsRef<[u8]>>(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        size: u8,
        text: T,
        mode: DrawMode,
    ) -> Result<usize> {
        let Some(font) = Font::for_size(size) else {
            return Ok(0);
        };
        let advance = u32::from(font.advance());
        let right = u32::from(x) + u32::from(width);
        let bottom = u32::from(y) + u32::from(height);

        let (mut cx, mut cy) = (u32::from(x), u32::from(y));
        let mut placed = 0;
        for &ch in text.as_ref() {
            if !is_printable(ch) {
                break;
            }
            if cx != u32::from(x) && cx + advance > right {
                cx = u32::from(x);
                cy += u32::from(size);
            }
            if cy + u32::from(size) > bottom || cy > u32::from(u16::MAX) {
                break;
            }
            let px = cx.min(u32::from(u16::MAX)) as u16;
            if self.show_char(px, cy as u16, ch, size, mode)? == Render::Clipped {
                break;
            }
            placed += 1;
            cx += advance;
        }

        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(digit_at(42, 0), 2);
        assert_eq!(digit_at(42, 1), 4);
        assert_eq!(digit_at(42, 2), 0);
        assert_eq!(digit_at(u32::MAX, 9), 4);
        assert_eq!(digit_at(u32::MAX, 10), 0);
    }

    #[test]
    fn mode_bits() {
        assert_eq!(DrawMode::from_bits(0x00), DrawMode::Opaque);
        assert_eq!(DrawMode::from_bits(0x80), DrawMode::Opaque);
        assert_eq!(DrawMode::from_bits(0x01), DrawMode::Overlay);
        assert_eq!(DrawMode::from_bits(0x81), DrawMode::Overlay);
    }

    #[test]
    fn clipping_wins_over_complete() {
        assert_eq!(Render::Skipped.and(Render::Complete), Render::Complete);
        assert_eq!(Render::Complete.and(Render::Clipped), Render::Clipped);
        assert_eq!(Render::Clipped.and(Render::Skipped), Render::Clipped);
        assert_eq!(Render::Skipped.and(Render::Skipped), Render::Skipped);
    }
}
