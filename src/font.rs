//! Fixed-size ASCII bitmap fonts.
//!
//! Glyphs cover `' '..='~'` (95 characters). Each glyph is `size / 2` columns
//! wide and `size` rows tall, stored column by column: every column takes
//! `ceil(size / 8)` bytes, most significant bit on top. Rows past `size` in
//! the last byte of a column are padding.

/// Supported glyph heights in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    Px12 = 12,
    Px16 = 16,
    Px24 = 24,
}

impl FontSize {
    /// Every size a [Font] table exists for
    pub const ALL: [FontSize; 3] = [FontSize::Px12, FontSize::Px16, FontSize::Px24];

    pub fn from_px(px: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|size| size.px() == px)
    }

    /// Glyph height in pixels
    pub const fn px(self) -> u8 {
        self as u8
    }
}

/// A bitmap font of one [FontSize]
pub struct Font {
    size: FontSize,
    bitmap: &'static [u8],
}

const FIRST_CHAR: u8 = b' ';
const LAST_CHAR: u8 = b'~';
const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR + 1) as usize;

static FONTS: [Font; 3] = [
    Font { size: FontSize::Px12, bitmap: &ASCII_1206 },
    Font { size: FontSize::Px16, bitmap: &ASCII_1608 },
    Font { size: FontSize::Px24, bitmap: &ASCII_2412 },
];

impl Font {
    /// Look up the font for a glyph height in pixels.
    ///
    /// Returns `None` for any height other than 12, 16 or 24.
    pub fn for_size(px: u8) -> Option<&'static Font> {
        FONTS.iter().find(|font| font.size.px() == px)
    }

    pub fn size(&self) -> FontSize {
        self.size
    }

    /// Horizontal advance, which is also the glyph width
    pub fn advance(&self) -> u16 {
        u16::from(self.size.px() / 2)
    }

    pub fn bytes_per_column(&self) -> usize {
        (usize::from(self.size.px()) + 7) / 8
    }

    /// Number of bytes making up one glyph
    pub fn glyph_len(&self) -> usize {
        self.bytes_per_column() * usize::from(self.advance())
    }

    /// Packed bitmap of `ch`, or `None` outside the printable ASCII range
    pub fn glyph(&self, ch: u8) -> Option<&'static [u8]> {
        if !is_printable(ch) {
            return None;
        }
        let len = self.glyph_len();
        let start = usize::from(ch - FIRST_CHAR) * len;
        self.bitmap.get(start..start + len)
    }
}

/// Whether a font table has a glyph for `ch`
pub fn is_printable(ch: u8) -> bool {
    (FIRST_CHAR..=LAST_CHAR).contains(&ch)
}


#[rustfmt::skip]
static ASCII_1206: [u8; 95 * 12] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x70, 0x00, 0xFE, 0xC0, 0xFE, 0xC0, 0x70, 0x00, 0x00, 0x00, // '!'
    0xC0, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, // '"'
    0x7F, 0xC0, 0x7F, 0xC0, 0x11, 0x00, 0x7F, 0xC0, 0x7F, 0xC0, 0x00, 0x00, // '#'
    0xF9, 0xC0, 0x88, 0x40, 0x88, 0x70, 0x88, 0x70, 0xEF, 0xC0, 0x00, 0x00, // '$'
    0x31, 0xC0, 0x03, 0x00, 0x06, 0x00, 0x0C, 0x00, 0x38, 0xC0, 0x00, 0x00, // '%'
    0x6F, 0xC0, 0xF8, 0x40, 0x9C, 0x40, 0xF7, 0x80, 0x6F, 0xC0, 0x00, 0x00, // '&'
    0x20, 0x00, 0xE0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
    0x00, 0x00, 0x3F, 0x00, 0x7F, 0x80, 0xC0, 0xC0, 0x80, 0x40, 0x00, 0x00, // '('
    0x00, 0x00, 0x80, 0x40, 0xC0, 0xC0, 0x7F, 0x80, 0x3F, 0x00, 0x00, 0x00, // ')'
    0x15, 0x00, 0x1F, 0x00, 0x0E, 0x00, 0x0E, 0x00, 0x1F, 0x00, 0x04, 0x00, // '*'
    0x04, 0x00, 0x04, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x04, 0x00, 0x00, 0x00, // '+'
    0x00, 0x00, 0x00, 0x20, 0x01, 0xE0, 0x01, 0xC0, 0x00, 0x00, 0x00, 0x00, // ','
    0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, // '.'
    0x01, 0xC0, 0x03, 0x00, 0x06, 0x00, 0x0C, 0x00, 0x38, 0x00, 0x00, 0x00, // '/'
    0x7F, 0x80, 0xC0, 0xC0, 0x8C, 0x40, 0xC0, 0xC0, 0x7F, 0x80, 0x00, 0x00, // '0'
    0x20, 0x40, 0x60, 0x40, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x40, 0x00, 0x00, // '1'
    0xC3, 0xC0, 0x86, 0x40, 0x8C, 0x40, 0x98, 0x40, 0xF0, 0xC0, 0x00, 0x00, // '2'
    0xC0, 0xC0, 0x88, 0x40, 0x88, 0x40, 0x88, 0x40, 0xFF, 0xC0, 0x00, 0x00, // '3'
    0x1C, 0x00, 0x34, 0x00, 0x64, 0x40, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, // '4'
    0xF8, 0xC0, 0x88, 0x40, 0x88, 0x40, 0x88, 0x40, 0x8F, 0xC0, 0x00, 0x00, // '5'
    0x7F, 0xC0, 0xC8, 0x40, 0x88, 0x40, 0x88, 0x40, 0x0F, 0xC0, 0x00, 0x00, // '6'
    0xC0, 0x00, 0x83, 0xC0, 0x87, 0xC0, 0x8C, 0x00, 0xF8, 0x00, 0x00, 0x00, // '7'
    0xFF, 0xC0, 0x88, 0x40, 0x88, 0x40, 0x88, 0x40, 0xFF, 0xC0, 0x00, 0x00, // '8'
    0xF8, 0x40, 0x88, 0x40, 0x88, 0x40, 0x88, 0xC0, 0xFF, 0x80, 0x00, 0x00, // '9'
    0x00, 0x00, 0x00, 0x00, 0x31, 0x80, 0x31, 0x80, 0x00, 0x00, 0x00, 0x00, // ':'
    0x00, 0x00, 0x00, 0x40, 0x31, 0xC0, 0x31, 0x80, 0x00, 0x00, 0x00, 0x00, // ';'
    0x04, 0x00, 0x0E, 0x00, 0x1B, 0x00, 0x31, 0x80, 0x60, 0xC0, 0x00, 0x00, // '<'
    0x12, 0x00, 0x12, 0x00, 0x12, 0x00, 0x12, 0x00, 0x12, 0x00, 0x00, 0x00, // '='
    0x40, 0x40, 0x60, 0xC0, 0x31, 0x80, 0x1B, 0x00, 0x0E, 0x00, 0x00, 0x00, // '>'
    0xE0, 0x00, 0x80, 0x00, 0x8E, 0xC0, 0x9E, 0xC0, 0xF0, 0x00, 0x00, 0x00, // '?'
    0x7F, 0xC0, 0x40, 0x40, 0x4F, 0x40, 0x4F, 0x40, 0x7F, 0x40, 0x00, 0x00, // '@'
    0x3F, 0xC0, 0x64, 0x00, 0xC4, 0x00, 0x64, 0x00, 0x3F, 0xC0, 0x00, 0x00, // 'A'
    0xFF, 0xC0, 0xFF, 0xC0, 0x88, 0x40, 0x88, 0x40, 0xFF, 0xC0, 0x00, 0x00, // 'B'
    0x7F, 0x80, 0xC0, 0xC0, 0x80, 0x40, 0x80, 0x40, 0xE1, 0xC0, 0x00, 0x00, // 'C'
    0xFF, 0xC0, 0xFF, 0xC0, 0x80, 0x40, 0xC0, 0xC0, 0x7F, 0x80, 0x00, 0x00, // 'D'
    0xFF, 0xC0, 0xFF, 0xC0, 0x88, 0x40, 0x9C, 0x40, 0xE1, 0xC0, 0x00, 0x00, // 'E'
    0xFF, 0xC0, 0xFF, 0xC0, 0x88, 0x40, 0x9C, 0x00, 0xE0, 0x00, 0x00, 0x00, // 'F'
    0x7F, 0x80, 0xC0, 0xC0, 0x84, 0x40, 0x84, 0x40, 0xE7, 0xC0, 0x00, 0x00, // 'G'
    0xFF, 0xC0, 0x08, 0x00, 0x08, 0x00, 0x08, 0x00, 0xFF, 0xC0, 0x00, 0x00, // 'H'
    0x00, 0x00, 0x80, 0x40, 0xFF, 0xC0, 0xFF, 0xC0, 0x80, 0x40, 0x00, 0x00, // 'I'
    0x03, 0xC0, 0x00, 0x40, 0x80, 0x40, 0xFF, 0xC0, 0xFF, 0x80, 0x00, 0x00, // 'J'
    0xFF, 0xC0, 0xFF, 0xC0, 0x0C, 0x00, 0x1E, 0x00, 0xF3, 0xC0, 0x00, 0x00, // 'K'
    0xFF, 0xC0, 0xFF, 0xC0, 0x80, 0x40, 0x00, 0x40, 0x01, 0xC0, 0x00, 0x00, // 'L'
    0xFF, 0xC0, 0x70, 0x00, 0x38, 0x00, 0x70, 0x00, 0xFF, 0xC0, 0x00, 0x00, // 'M'
    0xFF, 0xC0, 0x70, 0x00, 0x38, 0x00, 0x1C, 0x00, 0xFF, 0xC0, 0x00, 0x00, // 'N'
    0xFF, 0xC0, 0x80, 0x40, 0x80, 0x40, 0x80, 0x40, 0xFF, 0xC0, 0x00, 0x00, // 'O'
    0xFF, 0xC0, 0xFF, 0xC0, 0x88, 0x40, 0x88, 0x00, 0xF8, 0x00, 0x00, 0x00, // 'P'
    0xFF, 0xC0, 0x80, 0x40, 0x81, 0xC0, 0x80, 0xF0, 0xFF, 0xF0, 0x00, 0x00, // 'Q'
    0xFF, 0xC0, 0xFF, 0xC0, 0x88, 0x00, 0x8C, 0x00, 0xFF, 0xC0, 0x00, 0x00, // 'R'
    0xF1, 0xC0, 0x98, 0x40, 0x88, 0x40, 0x8C, 0x40, 0xE7, 0xC0, 0x00, 0x00, // 'S'
    0xE0, 0x00, 0xC0, 0x40, 0xFF, 0xC0, 0xFF, 0xC0, 0xE0, 0x40, 0x00, 0x00, // 'T'
    0xFF, 0xC0, 0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0xFF, 0xC0, 0x00, 0x00, // 'U'
    0xFF, 0x00, 0x01, 0x80, 0x00, 0xC0, 0x01, 0x80, 0xFF, 0x00, 0x00, 0x00, // 'V'
    0xFF, 0xC0, 0x01, 0xC0, 0x0F, 0x00, 0x01, 0xC0, 0xFF, 0xC0, 0x00, 0x00, // 'W'
    0xF3, 0xC0, 0x3F, 0x00, 0x1E, 0x00, 0x3F, 0x00, 0xF3, 0xC0, 0x00, 0x00, // 'X'
    0xF0, 0x00, 0xF8, 0x40, 0x0F, 0xC0, 0x0F, 0xC0, 0xF8, 0x40, 0x00, 0x00, // 'Y'
    0xE3, 0xC0, 0x86, 0x40, 0x8C, 0x40, 0x98, 0x40, 0xF1, 0xC0, 0x00, 0x00, // 'Z'
    0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x80, 0x40, 0x80, 0x40, 0x00, 0x00, // '['
    0x70, 0x00, 0x18, 0x00, 0x0C, 0x00, 0x06, 0x00, 0x03, 0x80, 0x00, 0x00, // '\\'
    0x00, 0x00, 0x80, 0x40, 0x80, 0x40, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, // ']'
    0xC0, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80, 0x00, 0xC0, 0x00, 0x00, 0x00, // '^'
    0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, // '_'
    0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0xC0, 0x00, 0x40, 0x00, 0x00, 0x00, // '`'
    0x17, 0xC0, 0x14, 0x40, 0x14, 0x40, 0x1F, 0x80, 0x0F, 0xC0, 0x00, 0x00, // 'a'
    0xFF, 0xC0, 0xFF, 0xC0, 0x10, 0x40, 0x18, 0x40, 0x0F, 0xC0, 0x00, 0x00, // 'b'
    0x1F, 0xC0, 0x10, 0x40, 0x10, 0x40, 0x10, 0x40, 0x18, 0xC0, 0x00, 0x00, // 'c'
    0x0F, 0xC0, 0x18, 0x40, 0x90, 0x40, 0xFF, 0x80, 0xFF, 0xC0, 0x00, 0x00, // 'd'
    0x1F, 0xC0, 0x14, 0x40, 0x14, 0x40, 0x14, 0x40, 0x1C, 0xC0, 0x00, 0x00, // 'e'
    0x08, 0x40, 0x7F, 0xC0, 0xFF, 0xC0, 0x88, 0x40, 0xE0, 0x00, 0x00, 0x00, // 'f'
    0x1F, 0xD0, 0x10, 0x40, 0x10, 0x40, 0x0F, 0xF0, 0x1F, 0xF0, 0x00, 0x00, // 'g'
    0xFF, 0xC0, 0xFF, 0xC0, 0x08, 0x00, 0x10, 0x00, 0x1F, 0xC0, 0x00, 0x00, // 'h'
    0x00, 0x00, 0x10, 0x40, 0xDF, 0xC0, 0xDF, 0xC0, 0x00, 0x40, 0x00, 0x00, // 'i'
    0x00, 0x30, 0x00, 0x30, 0x00, 0x00, 0x10, 0x00, 0xDF, 0xF0, 0x00, 0x00, // 'j'
    0xFF, 0xC0, 0xFF, 0xC0, 0x06, 0x00, 0x0F, 0x00, 0x19, 0xC0, 0x00, 0x00, // 'k'
    0x00, 0x00, 0x80, 0x40, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x40, 0x00, 0x00, // 'l'
    0x1F, 0xC0, 0x18, 0x00, 0x0F, 0x80, 0x18, 0x00, 0x1F, 0xC0, 0x00, 0x00, // 'm'
    0x1F, 0xC0, 0x0F, 0xC0, 0x10, 0x00, 0x10, 0x00, 0x1F, 0xC0, 0x00, 0x00, // 'n'
    0x1F, 0xC0, 0x10, 0x40, 0x10, 0x40, 0x10, 0x40, 0x1F, 0xC0, 0x00, 0x00, // 'o'
    0x1F, 0xF0, 0x0F, 0xF0, 0x10, 0x40, 0x10, 0x40, 0x1F, 0xC0, 0x00, 0x00, // 'p'
    0x1F, 0xC0, 0x10, 0x40, 0x10, 0x40, 0x0F, 0xF0, 0x1F, 0xF0, 0x00, 0x00, // 'q'
    0x1F, 0xC0, 0x0F, 0xC0, 0x18, 0x40, 0x10, 0x00, 0x1C, 0x00, 0x00, 0x00, // 'r'
    0x1C, 0xC0, 0x16, 0x40, 0x12, 0x40, 0x13, 0x40, 0x19, 0xC0, 0x00, 0x00, // 's'
    0x10, 0x00, 0x7F, 0x80, 0xFF, 0xC0, 0x10, 0x40, 0x10, 0xC0, 0x00, 0x00, // 't'
    0x1F, 0xC0, 0x00, 0x40, 0x00, 0x40, 0x1F, 0x80, 0x1F, 0xC0, 0x00, 0x00, // 'u'
    0x1F, 0x00, 0x1F, 0x80, 0x00, 0xC0, 0x00, 0xC0, 0x1F, 0x80, 0x00, 0x00, // 'v'
    0x1F, 0xC0, 0x00, 0xC0, 0x07, 0x80, 0x00, 0xC0, 0x1F, 0xC0, 0x00, 0x00, // 'w'
    0x18, 0xC0, 0x0F, 0x80, 0x07, 0x00, 0x0F, 0x80, 0x18, 0xC0, 0x00, 0x00, // 'x'
    0x1F, 0xC0, 0x00, 0x40, 0x00, 0x40, 0x00, 0x50, 0x1F, 0xF0, 0x00, 0x00, // 'y'
    0x19, 0xC0, 0x13, 0x40, 0x16, 0x40, 0x1C, 0x40, 0x18, 0xC0, 0x00, 0x00, // 'z'
    0x08, 0x00, 0x08, 0x00, 0x7F, 0x80, 0xF7, 0xC0, 0x80, 0x40, 0x00, 0x00, // '{'
    0x00, 0x00, 0x00, 0x00, 0xF7, 0xC0, 0xF7, 0xC0, 0x00, 0x00, 0x00, 0x00, // '|'
    0x80, 0x40, 0x80, 0x40, 0xF7, 0xC0, 0x7F, 0x80, 0x08, 0x00, 0x00, 0x00, // '}'
    0xC0, 0x00, 0x80, 0x00, 0xC0, 0x00, 0x40, 0x00, 0xC0, 0x00, 0x00, 0x00, // '~'
];

#[rustfmt::skip]
static ASCII_1608: [u8; 95 * 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x00, 0x00, 0x1C, 0x00, 0x3F, 0xB0, 0x3F, 0xB0, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00, // '!'
    0x00, 0x00, 0x70, 0x00, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x00, 0x70, 0x00, 0x00, 0x00, // '"'
    0x04, 0x40, 0x1F, 0xF0, 0x1F, 0xF0, 0x04, 0x40, 0x1F, 0xF0, 0x1F, 0xF0, 0x04, 0x40, 0x00, 0x00, // '#'
    0x1C, 0x60, 0x3E, 0x30, 0x22, 0x10, 0xE2, 0x1C, 0xE2, 0x1C, 0x33, 0xF0, 0x19, 0xE0, 0x00, 0x00, // '$'
    0x0C, 0x30, 0x0C, 0x60, 0x00, 0xC0, 0x01, 0x80, 0x03, 0x00, 0x06, 0x30, 0x0C, 0x30, 0x00, 0x00, // '%'
    0x01, 0xE0, 0x1B, 0xF0, 0x3E, 0x10, 0x27, 0x10, 0x3D, 0xE0, 0x1B, 0xF0, 0x02, 0x10, 0x00, 0x00, // '&'
    0x00, 0x00, 0x08, 0x00, 0x78, 0x00, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
    0x00, 0x00, 0x00, 0x00, 0x0F, 0xC0, 0x1F, 0xE0, 0x30, 0x30, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, // '('
    0x00, 0x00, 0x00, 0x00, 0x20, 0x10, 0x30, 0x30, 0x1F, 0xE0, 0x0F, 0xC0, 0x00, 0x00, 0x00, 0x00, // ')'
    0x01, 0x00, 0x05, 0x40, 0x07, 0xC0, 0x03, 0x80, 0x03, 0x80, 0x07, 0xC0, 0x05, 0x40, 0x01, 0x00, // '*'
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x07, 0xC0, 0x07, 0xC0, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x78, 0x00, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ','
    0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '.'
    0x00, 0x30, 0x00, 0x60, 0x00, 0xC0, 0x01, 0x80, 0x03, 0x00, 0x06, 0x00, 0x0C, 0x00, 0x00, 0x00, // '/'
    0x0F, 0xC0, 0x1F, 0xE0, 0x30, 0x30, 0x23, 0x10, 0x30, 0x30, 0x1F, 0xE0, 0x0F, 0xC0, 0x00, 0x00, // '0'
    0x00, 0x00, 0x08, 0x10, 0x18, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00, // '1'
    0x10, 0x70, 0x30, 0xF0, 0x21, 0x90, 0x23, 0x10, 0x26, 0x10, 0x3C, 0x30, 0x18, 0x30, 0x00, 0x00, // '2'
    0x10, 0x20, 0x30, 0x30, 0x22, 0x10, 0x22, 0x10, 0x22, 0x10, 0x3F, 0xF0, 0x1D, 0xE0, 0x00, 0x00, // '3'
    0x03, 0x00, 0x07, 0x00, 0x0D, 0x00, 0x19, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x01, 0x10, 0x00, 0x00, // '4'
    0x3E, 0x20, 0x3E, 0x30, 0x22, 0x10, 0x22, 0x10, 0x22, 0x10, 0x23, 0xF0, 0x21, 0xE0, 0x00, 0x00, // '5'
    0x0F, 0xE0, 0x1F, 0xF0, 0x32, 0x10, 0x22, 0x10, 0x22, 0x10, 0x03, 0xF0, 0x01, 0xE0, 0x00, 0x00, // '6'
    0x30, 0x00, 0x30, 0x00, 0x20, 0xF0, 0x21, 0xF0, 0x23, 0x00, 0x3E, 0x00, 0x3C, 0x00, 0x00, 0x00, // '7'
    0x1D, 0xE0, 0x3F, 0xF0, 0x22, 0x10, 0x22, 0x10, 0x22, 0x10, 0x3F, 0xF0, 0x1D, 0xE0, 0x00, 0x00, // '8'
    0x1C, 0x00, 0x3E, 0x10, 0x22, 0x10, 0x22, 0x10, 0x22, 0x30, 0x3F, 0xE0, 0x1F, 0xC0, 0x00, 0x00, // '9'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x60, 0x0C, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ':'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x0C, 0x70, 0x0C, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ';'
    0x00, 0x00, 0x01, 0x00, 0x03, 0x80, 0x06, 0xC0, 0x0C, 0x60, 0x18, 0x30, 0x10, 0x10, 0x00, 0x00, // '<'
    0x00, 0x00, 0x04, 0x80, 0x04, 0x80, 0x04, 0x80, 0x04, 0x80, 0x04, 0x80, 0x04, 0x80, 0x00, 0x00, // '='
    0x00, 0x00, 0x10, 0x10, 0x18, 0x30, 0x0C, 0x60, 0x06, 0xC0, 0x03, 0x80, 0x01, 0x00, 0x00, 0x00, // '>'
    0x18, 0x00, 0x38, 0x00, 0x20, 0x00, 0x23, 0xB0, 0x27, 0xB0, 0x3C, 0x00, 0x18, 0x00, 0x00, 0x00, // '?'
    0x0F, 0xE0, 0x1F, 0xF0, 0x10, 0x10, 0x13, 0xD0, 0x13, 0xD0, 0x1F, 0xD0, 0x0F, 0x80, 0x00, 0x00, // '@'
    0x07, 0xF0, 0x0F, 0xF0, 0x19, 0x00, 0x31, 0x00, 0x19, 0x00, 0x0F, 0xF0, 0x07, 0xF0, 0x00, 0x00, // 'A'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x22, 0x10, 0x3F, 0xF0, 0x1D, 0xE0, 0x00, 0x00, // 'B'
    0x0F, 0xC0, 0x1F, 0xE0, 0x30, 0x30, 0x20, 0x10, 0x20, 0x10, 0x30, 0x30, 0x18, 0x60, 0x00, 0x00, // 'C'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x20, 0x10, 0x30, 0x30, 0x1F, 0xE0, 0x0F, 0xC0, 0x00, 0x00, // 'D'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x27, 0x10, 0x30, 0x30, 0x38, 0x70, 0x00, 0x00, // 'E'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x27, 0x00, 0x30, 0x00, 0x38, 0x00, 0x00, 0x00, // 'F'
    0x0F, 0xC0, 0x1F, 0xE0, 0x30, 0x30, 0x21, 0x10, 0x21, 0x10, 0x31, 0xE0, 0x19, 0xF0, 0x00, 0x00, // 'G'
    0x3F, 0xF0, 0x3F, 0xF0, 0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, // 'H'
    0x00, 0x00, 0x00, 0x00, 0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, // 'I'
    0x00, 0xE0, 0x00, 0xF0, 0x00, 0x10, 0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xE0, 0x20, 0x00, 0x00, 0x00, // 'J'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x03, 0x00, 0x07, 0x80, 0x3C, 0xF0, 0x38, 0x70, 0x00, 0x00, // 'K'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x20, 0x10, 0x00, 0x10, 0x00, 0x30, 0x00, 0x70, 0x00, 0x00, // 'L'
    0x3F, 0xF0, 0x3F, 0xF0, 0x1C, 0x00, 0x0E, 0x00, 0x1C, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, // 'M'
    0x3F, 0xF0, 0x3F, 0xF0, 0x1C, 0x00, 0x0E, 0x00, 0x07, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, // 'N'
    0x1F, 0xE0, 0x3F, 0xF0, 0x20, 0x10, 0x20, 0x10, 0x20, 0x10, 0x3F, 0xF0, 0x1F, 0xE0, 0x00, 0x00, // 'O'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x22, 0x00, 0x3E, 0x00, 0x1C, 0x00, 0x00, 0x00, // 'P'
    0x1F, 0xE0, 0x3F, 0xF0, 0x20, 0x10, 0x20, 0x70, 0x20, 0x3C, 0x3F, 0xFC, 0x1F, 0xE4, 0x00, 0x00, // 'Q'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x00, 0x23, 0x00, 0x3F, 0xF0, 0x1C, 0xF0, 0x00, 0x00, // 'R'
    0x18, 0x60, 0x3C, 0x70, 0x26, 0x10, 0x22, 0x10, 0x23, 0x10, 0x39, 0xF0, 0x18, 0xE0, 0x00, 0x00, // 'S'
    0x00, 0x00, 0x38, 0x00, 0x30, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x30, 0x10, 0x38, 0x00, 0x00, 0x00, // 'T'
    0x3F, 0xE0, 0x3F, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x3F, 0xF0, 0x3F, 0xE0, 0x00, 0x00, // 'U'
    0x3F, 0x80, 0x3F, 0xC0, 0x00, 0x60, 0x00, 0x30, 0x00, 0x60, 0x3F, 0xC0, 0x3F, 0x80, 0x00, 0x00, // 'V'
    0x3F, 0xE0, 0x3F, 0xF0, 0x00, 0x70, 0x03, 0xC0, 0x00, 0x70, 0x3F, 0xF0, 0x3F, 0xE0, 0x00, 0x00, // 'W'
    0x30, 0x30, 0x3C, 0xF0, 0x0F, 0xC0, 0x07, 0x80, 0x0F, 0xC0, 0x3C, 0xF0, 0x30, 0x30, 0x00, 0x00, // 'X'
    0x00, 0x00, 0x3C, 0x00, 0x3E, 0x10, 0x03, 0xF0, 0x03, 0xF0, 0x3E, 0x10, 0x3C, 0x00, 0x00, 0x00, // 'Y'
    0x38, 0x70, 0x30, 0xF0, 0x21, 0x90, 0x23, 0x10, 0x26, 0x10, 0x3C, 0x30, 0x38, 0x70, 0x00, 0x00, // 'Z'
    0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x20, 0x10, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, // '['
    0x18, 0x00, 0x0C, 0x00, 0x06, 0x00, 0x03, 0x00, 0x01, 0x80, 0x00, 0xC0, 0x00, 0x60, 0x00, 0x00, // '\\'
    0x00, 0x00, 0x00, 0x00, 0x20, 0x10, 0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, // ']'
    0x10, 0x00, 0x30, 0x00, 0x60, 0x00, 0xC0, 0x00, 0x60, 0x00, 0x30, 0x00, 0x10, 0x00, 0x00, 0x00, // '^'
    0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, // '_'
    0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x60, 0x00, 0x30, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, // '`'
    0x00, 0xE0, 0x05, 0xF0, 0x05, 0x10, 0x05, 0x10, 0x07, 0xE0, 0x03, 0xF0, 0x00, 0x10, 0x00, 0x00, // 'a'
    0x20, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x04, 0x10, 0x06, 0x10, 0x03, 0xF0, 0x01, 0xE0, 0x00, 0x00, // 'b'
    0x03, 0xE0, 0x07, 0xF0, 0x04, 0x10, 0x04, 0x10, 0x04, 0x10, 0x06, 0x30, 0x02, 0x20, 0x00, 0x00, // 'c'
    0x01, 0xE0, 0x03, 0xF0, 0x06, 0x10, 0x24, 0x10, 0x3F, 0xE0, 0x3F, 0xF0, 0x00, 0x10, 0x00, 0x00, // 'd'
    0x03, 0xE0, 0x07, 0xF0, 0x05, 0x10, 0x05, 0x10, 0x05, 0x10, 0x07, 0x30, 0x03, 0x20, 0x00, 0x00, // 'e'
    0x00, 0x00, 0x02, 0x10, 0x1F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x30, 0x00, 0x18, 0x00, 0x00, 0x00, // 'f'
    0x03, 0xE4, 0x07, 0xF6, 0x04, 0x12, 0x04, 0x12, 0x03, 0xFE, 0x07, 0xFC, 0x04, 0x00, 0x00, 0x00, // 'g'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x02, 0x00, 0x04, 0x00, 0x07, 0xF0, 0x03, 0xF0, 0x00, 0x00, // 'h'
    0x00, 0x00, 0x00, 0x00, 0x04, 0x10, 0x37, 0xF0, 0x37, 0xF0, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, // 'i'
    0x00, 0x00, 0x00, 0x0C, 0x00, 0x0E, 0x00, 0x02, 0x04, 0x02, 0x37, 0xFE, 0x37, 0xFC, 0x00, 0x00, // 'j'
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x01, 0x80, 0x03, 0xC0, 0x06, 0x70, 0x04, 0x30, 0x00, 0x00, // 'k'
    0x00, 0x00, 0x00, 0x00, 0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, // 'l'
    0x07, 0xF0, 0x07, 0xF0, 0x06, 0x00, 0x03, 0xE0, 0x06, 0x00, 0x07, 0xF0, 0x03, 0xF0, 0x00, 0x00, // 'm'
    0x04, 0x00, 0x07, 0xF0, 0x03, 0xF0, 0x04, 0x00, 0x04, 0x00, 0x07, 0xF0, 0x03, 0xF0, 0x00, 0x00, // 'n'
    0x03, 0xE0, 0x07, 0xF0, 0x04, 0x10, 0x04, 0x10, 0x04, 0x10, 0x07, 0xF0, 0x03, 0xE0, 0x00, 0x00, // 'o'
    0x04, 0x02, 0x07, 0xFE, 0x03, 0xFE, 0x04, 0x12, 0x04, 0x10, 0x07, 0xF0, 0x03, 0xE0, 0x00, 0x00, // 'p'
    0x03, 0xE0, 0x07, 0xF0, 0x04, 0x10, 0x04, 0x12, 0x03, 0xFE, 0x07, 0xFE, 0x04, 0x02, 0x00, 0x00, // 'q'
    0x04, 0x10, 0x07, 0xF0, 0x03, 0xF0, 0x06, 0x10, 0x04, 0x00, 0x07, 0x00, 0x03, 0x00, 0x00, 0x00, // 'r'
    0x02, 0x20, 0x07, 0x30, 0x05, 0x90, 0x04, 0x90, 0x04, 0xD0, 0x06, 0x70, 0x02, 0x20, 0x00, 0x00, // 's'
    0x04, 0x00, 0x04, 0x00, 0x1F, 0xE0, 0x3F, 0xF0, 0x04, 0x10, 0x04, 0x30, 0x00, 0x20, 0x00, 0x00, // 't'
    0x07, 0xE0, 0x07, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x07, 0xE0, 0x07, 0xF0, 0x00, 0x10, 0x00, 0x00, // 'u'
    0x00, 0x00, 0x07, 0xC0, 0x07, 0xE0, 0x00, 0x30, 0x00, 0x30, 0x07, 0xE0, 0x07, 0xC0, 0x00, 0x00, // 'v'
    0x07, 0xE0, 0x07, 0xF0, 0x00, 0x30, 0x01, 0xE0, 0x00, 0x30, 0x07, 0xF0, 0x07, 0xE0, 0x00, 0x00, // 'w'
    0x04, 0x10, 0x06, 0x30, 0x03, 0xE0, 0x01, 0xC0, 0x03, 0xE0, 0x06, 0x30, 0x04, 0x10, 0x00, 0x00, // 'x'
    0x07, 0xE2, 0x07, 0xF2, 0x00, 0x12, 0x00, 0x12, 0x00, 0x16, 0x07, 0xFC, 0x07, 0xF8, 0x00, 0x00, // 'y'
    0x06, 0x30, 0x06, 0x70, 0x04, 0xD0, 0x05, 0x90, 0x07, 0x10, 0x06, 0x30, 0x04, 0x30, 0x00, 0x00, // 'z'
    0x00, 0x00, 0x02, 0x00, 0x02, 0x00, 0x1F, 0xE0, 0x3D, 0xF0, 0x20, 0x10, 0x20, 0x10, 0x00, 0x00, // '{'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3D, 0xF0, 0x3D, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '|'
    0x00, 0x00, 0x20, 0x10, 0x20, 0x10, 0x3D, 0xF0, 0x1F, 0xE0, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00, // '}'
    0x10, 0x00, 0x30, 0x00, 0x20, 0x00, 0x30, 0x00, 0x10, 0x00, 0x30, 0x00, 0x20, 0x00, 0x00, 0x00, // '~'
];

#[rustfmt::skip]
static ASCII_2412: [u8; 95 * 36] = [
    // ' '
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '!'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x80, 0x00, 0x07, 0x80, 0x00, 0x1F, 0xFD, 0xC0,
    0x1F, 0xFD, 0xC0, 0x1F, 0xFD, 0xC0, 0x07, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '"'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '#'
    0x00, 0x82, 0x00, 0x00, 0x82, 0x00, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x82, 0x00,
    0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x00, 0x82, 0x00, 0x00, 0x82, 0x00, 0x00, 0x00, 0x00,
    // '$'
    0x07, 0x83, 0x80, 0x07, 0x83, 0x80, 0x1F, 0xE1, 0xC0, 0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0xF8, 0x60, 0x78,
    0xF8, 0x60, 0x78, 0xF8, 0x60, 0x78, 0x1C, 0x7F, 0xC0, 0x07, 0x1F, 0x80, 0x07, 0x1F, 0x80, 0x00, 0x00, 0x00,
    // '%'
    0x03, 0x81, 0xC0, 0x03, 0x81, 0xC0, 0x03, 0x83, 0x80, 0x00, 0x0E, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x1C, 0x00,
    0x00, 0x70, 0x00, 0x00, 0x70, 0x00, 0x00, 0xE1, 0xC0, 0x03, 0x81, 0xC0, 0x03, 0x81, 0xC0, 0x00, 0x00, 0x00,
    // '&'
    0x00, 0x1F, 0x80, 0x00, 0x1F, 0x80, 0x07, 0x7F, 0xC0, 0x1F, 0xE0, 0x40, 0x1F, 0xE0, 0x40, 0x18, 0xF0, 0x40,
    0x1F, 0x9F, 0x80, 0x1F, 0x9F, 0x80, 0x07, 0x7F, 0xC0, 0x00, 0x60, 0x40, 0x00, 0x60, 0x40, 0x00, 0x00, 0x00,
    // '\''
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x3C, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '('
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFE, 0x00, 0x03, 0xFE, 0x00, 0x07, 0xFF, 0x80,
    0x1C, 0x01, 0xC0, 0x1C, 0x01, 0xC0, 0x18, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ')'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1C, 0x01, 0xC0,
    0x07, 0xFF, 0x80, 0x07, 0xFF, 0x80, 0x03, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '*'
    0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x92, 0x00, 0x00, 0xFE, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x7C, 0x00,
    0x00, 0x7C, 0x00, 0x00, 0x7C, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x92, 0x00, 0x00, 0x92, 0x00, 0x00, 0x10, 0x00,
    // '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0xFE, 0x00,
    0x00, 0xFE, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00,
    // ','
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x30, 0x00, 0x03, 0xF0,
    0x00, 0x03, 0xC0, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '-'
    0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00,
    0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00,
    // '.'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xC0,
    0x00, 0x01, 0xC0, 0x00, 0x01, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '/'
    0x00, 0x01, 0xC0, 0x00, 0x01, 0xC0, 0x00, 0x03, 0x80, 0x00, 0x0E, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x1C, 0x00,
    0x00, 0x70, 0x00, 0x00, 0x70, 0x00, 0x00, 0xE0, 0x00, 0x03, 0x80, 0x00, 0x03, 0x80, 0x00, 0x00, 0x00, 0x00,
    // '0'
    0x03, 0xFE, 0x00, 0x03, 0xFE, 0x00, 0x07, 0xFF, 0x80, 0x1C, 0x01, 0xC0, 0x1C, 0x01, 0xC0, 0x18, 0x70, 0x40,
    0x1C, 0x01, 0xC0, 0x1C, 0x01, 0xC0, 0x07, 0xFF, 0x80, 0x03, 0xFE, 0x00, 0x03, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // '1'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x40, 0x07, 0x00, 0x40, 0x07, 0x00, 0x40, 0x1F, 0xFF, 0xC0,
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00,
    // '2'
    0x04, 0x03, 0xC0, 0x04, 0x03, 0xC0, 0x1C, 0x0F, 0xC0, 0x18, 0x1C, 0x40, 0x18, 0x1C, 0x40, 0x18, 0x70, 0x40,
    0x18, 0xE0, 0x40, 0x18, 0xE0, 0x40, 0x1F, 0x81, 0xC0, 0x07, 0x01, 0xC0, 0x07, 0x01, 0xC0, 0x00, 0x00, 0x00,
    // '3'
    0x04, 0x01, 0x80, 0x04, 0x01, 0x80, 0x1C, 0x01, 0xC0, 0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x18, 0x60, 0x40,
    0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x1F, 0xFF, 0xC0, 0x07, 0x9F, 0x80, 0x07, 0x9F, 0x80, 0x00, 0x00, 0x00,
    // '4'
    0x00, 0x70, 0x00, 0x00, 0x70, 0x00, 0x00, 0xF0, 0x00, 0x03, 0x90, 0x00, 0x03, 0x90, 0x00, 0x07, 0x10, 0x40,
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x10, 0x40, 0x00, 0x10, 0x40, 0x00, 0x00, 0x00,
    // '5'
    0x1F, 0xE1, 0x80, 0x1F, 0xE1, 0x80, 0x1F, 0xE1, 0xC0, 0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x18, 0x60, 0x40,
    0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x18, 0x7F, 0xC0, 0x18, 0x1F, 0x80, 0x18, 0x1F, 0x80, 0x00, 0x00, 0x00,
    // '6'
    0x03, 0xFF, 0x80, 0x03, 0xFF, 0x80, 0x07, 0xFF, 0xC0, 0x1C, 0x60, 0x40, 0x1C, 0x60, 0x40, 0x18, 0x60, 0x40,
    0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x00, 0x7F, 0xC0, 0x00, 0x1F, 0x80, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00,
    // '7'
    0x1C, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x18, 0x0F, 0xC0, 0x18, 0x0F, 0xC0, 0x18, 0x1F, 0xC0,
    0x18, 0x70, 0x00, 0x18, 0x70, 0x00, 0x1F, 0xE0, 0x00, 0x1F, 0x80, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    // '8'
    0x07, 0x9F, 0x80, 0x07, 0x9F, 0x80, 0x1F, 0xFF, 0xC0, 0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x18, 0x60, 0x40,
    0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x1F, 0xFF, 0xC0, 0x07, 0x9F, 0x80, 0x07, 0x9F, 0x80, 0x00, 0x00, 0x00,
    // '9'
    0x07, 0x80, 0x00, 0x07, 0x80, 0x00, 0x1F, 0xE0, 0x40, 0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x18, 0x60, 0x40,
    0x18, 0x61, 0xC0, 0x18, 0x61, 0xC0, 0x1F, 0xFF, 0x80, 0x07, 0xFE, 0x00, 0x07, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // ':'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x83, 0x80,
    0x03, 0x83, 0x80, 0x03, 0x83, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ';'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x03, 0x83, 0xC0,
    0x03, 0x83, 0x80, 0x03, 0x83, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '<'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x7C, 0x00, 0x00, 0xEE, 0x00,
    0x03, 0x83, 0x80, 0x03, 0x83, 0x80, 0x07, 0x01, 0xC0, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x00, 0x00, 0x00,
    // '='
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8C, 0x00, 0x00, 0x8C, 0x00, 0x00, 0x8C, 0x00, 0x00, 0x8C, 0x00,
    0x00, 0x8C, 0x00, 0x00, 0x8C, 0x00, 0x00, 0x8C, 0x00, 0x00, 0x8C, 0x00, 0x00, 0x8C, 0x00, 0x00, 0x00, 0x00,
    // '>'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x40, 0x07, 0x01, 0xC0, 0x07, 0x01, 0xC0, 0x03, 0x83, 0x80,
    0x00, 0xEE, 0x00, 0x00, 0xEE, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00,
    // '?'
    0x07, 0x00, 0x00, 0x07, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x18, 0x00, 0x00, 0x18, 0x00, 0x00, 0x18, 0x7D, 0xC0,
    0x18, 0xFD, 0xC0, 0x18, 0xFD, 0xC0, 0x1F, 0x80, 0x00, 0x07, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '@'
    0x03, 0xFF, 0x80, 0x03, 0xFF, 0x80, 0x07, 0xFF, 0xC0, 0x04, 0x00, 0x40, 0x04, 0x00, 0x40, 0x04, 0x7E, 0x40,
    0x04, 0x7E, 0x40, 0x04, 0x7E, 0x40, 0x07, 0xFE, 0x40, 0x03, 0xFC, 0x00, 0x03, 0xFC, 0x00, 0x00, 0x00, 0x00,
    // 'A'
    0x00, 0xFF, 0xC0, 0x00, 0xFF, 0xC0, 0x03, 0xFF, 0xC0, 0x07, 0x10, 0x00, 0x07, 0x10, 0x00, 0x1C, 0x10, 0x00,
    0x07, 0x10, 0x00, 0x07, 0x10, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0xFF, 0xC0, 0x00, 0xFF, 0xC0, 0x00, 0x00, 0x00,
    // 'B'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x18, 0x60, 0x40,
    0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x1F, 0xFF, 0xC0, 0x07, 0x9F, 0x80, 0x07, 0x9F, 0x80, 0x00, 0x00, 0x00,
    // 'C'
    0x03, 0xFE, 0x00, 0x03, 0xFE, 0x00, 0x07, 0xFF, 0x80, 0x1C, 0x01, 0xC0, 0x1C, 0x01, 0xC0, 0x18, 0x00, 0x40,
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1C, 0x01, 0xC0, 0x07, 0x03, 0x80, 0x07, 0x03, 0x80, 0x00, 0x00, 0x00,
    // 'D'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x18, 0x00, 0x40,
    0x1C, 0x01, 0xC0, 0x1C, 0x01, 0xC0, 0x07, 0xFF, 0x80, 0x03, 0xFE, 0x00, 0x03, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 'E'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x18, 0x60, 0x40,
    0x18, 0xF0, 0x40, 0x18, 0xF0, 0x40, 0x1C, 0x01, 0xC0, 0x1F, 0x03, 0xC0, 0x1F, 0x03, 0xC0, 0x00, 0x00, 0x00,
    // 'F'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x18, 0x60, 0x40,
    0x18, 0xF0, 0x00, 0x18, 0xF0, 0x00, 0x1C, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'G'
    0x03, 0xFE, 0x00, 0x03, 0xFE, 0x00, 0x07, 0xFF, 0x80, 0x1C, 0x01, 0xC0, 0x1C, 0x01, 0xC0, 0x18, 0x10, 0x40,
    0x18, 0x10, 0x40, 0x18, 0x10, 0x40, 0x1C, 0x1F, 0x80, 0x07, 0x1F, 0xC0, 0x07, 0x1F, 0xC0, 0x00, 0x00, 0x00,
    // 'H'
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x60, 0x00, 0x00, 0x60, 0x00, 0x00, 0x60, 0x00,
    0x00, 0x60, 0x00, 0x00, 0x60, 0x00, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x00, 0x00,
    // 'I'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0,
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x18, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'J'
    0x00, 0x0F, 0x80, 0x00, 0x0F, 0x80, 0x00, 0x0F, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x18, 0x00, 0x40,
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0x80, 0x18, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'K'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x70, 0x00,
    0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x1F, 0x8F, 0xC0, 0x1F, 0x03, 0xC0, 0x1F, 0x03, 0xC0, 0x00, 0x00, 0x00,
    // 'L'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x18, 0x00, 0x40,
    0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x01, 0xC0, 0x00, 0x03, 0xC0, 0x00, 0x03, 0xC0, 0x00, 0x00, 0x00,
    // 'M'
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x07, 0x80, 0x00, 0x07, 0x80, 0x00, 0x03, 0xE0, 0x00,
    0x07, 0x80, 0x00, 0x07, 0x80, 0x00, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x00, 0x00,
    // 'N'
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x07, 0x80, 0x00, 0x07, 0x80, 0x00, 0x03, 0xE0, 0x00,
    0x00, 0xF0, 0x00, 0x00, 0xF0, 0x00, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x00, 0x00,
    // 'O'
    0x07, 0xFF, 0x80, 0x07, 0xFF, 0x80, 0x1F, 0xFF, 0xC0, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40,
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x07, 0xFF, 0x80, 0x07, 0xFF, 0x80, 0x00, 0x00, 0x00,
    // 'P'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x18, 0x60, 0x40,
    0x18, 0x60, 0x00, 0x18, 0x60, 0x00, 0x1F, 0xE0, 0x00, 0x07, 0x80, 0x00, 0x07, 0x80, 0x00, 0x00, 0x00, 0x00,
    // 'Q'
    0x07, 0xFF, 0x80, 0x07, 0xFF, 0x80, 0x1F, 0xFF, 0xC0, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x18, 0x03, 0xC0,
    0x18, 0x01, 0xF8, 0x18, 0x01, 0xF8, 0x1F, 0xFF, 0xF8, 0x07, 0xFF, 0x88, 0x07, 0xFF, 0x88, 0x00, 0x00, 0x00,
    // 'R'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x18, 0x60, 0x00,
    0x18, 0x70, 0x00, 0x18, 0x70, 0x00, 0x1F, 0xFF, 0xC0, 0x07, 0x8F, 0xC0, 0x07, 0x8F, 0xC0, 0x00, 0x00, 0x00,
    // 'S'
    0x07, 0x03, 0x80, 0x07, 0x03, 0x80, 0x1F, 0x83, 0xC0, 0x18, 0xE0, 0x40, 0x18, 0xE0, 0x40, 0x18, 0x60, 0x40,
    0x18, 0x70, 0x40, 0x18, 0x70, 0x40, 0x1F, 0x1F, 0xC0, 0x07, 0x0F, 0x80, 0x07, 0x0F, 0x80, 0x00, 0x00, 0x00,
    // 'T'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x1C, 0x00, 0x40, 0x1C, 0x00, 0x40, 0x1F, 0xFF, 0xC0,
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1C, 0x00, 0x40, 0x1F, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'U'
    0x1F, 0xFF, 0x80, 0x1F, 0xFF, 0x80, 0x1F, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40,
    0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0x80, 0x1F, 0xFF, 0x80, 0x00, 0x00, 0x00,
    // 'V'
    0x1F, 0xFC, 0x00, 0x1F, 0xFC, 0x00, 0x1F, 0xFE, 0x00, 0x00, 0x03, 0x80, 0x00, 0x03, 0x80, 0x00, 0x01, 0xC0,
    0x00, 0x03, 0x80, 0x00, 0x03, 0x80, 0x1F, 0xFE, 0x00, 0x1F, 0xFC, 0x00, 0x1F, 0xFC, 0x00, 0x00, 0x00, 0x00,
    // 'W'
    0x1F, 0xFF, 0x80, 0x1F, 0xFF, 0x80, 0x1F, 0xFF, 0xC0, 0x00, 0x03, 0xC0, 0x00, 0x03, 0xC0, 0x00, 0x7E, 0x00,
    0x00, 0x03, 0xC0, 0x00, 0x03, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0x80, 0x1F, 0xFF, 0x80, 0x00, 0x00, 0x00,
    // 'X'
    0x1C, 0x01, 0xC0, 0x1C, 0x01, 0xC0, 0x1F, 0x8F, 0xC0, 0x03, 0xFE, 0x00, 0x03, 0xFE, 0x00, 0x00, 0xFC, 0x00,
    0x03, 0xFE, 0x00, 0x03, 0xFE, 0x00, 0x1F, 0x8F, 0xC0, 0x1C, 0x01, 0xC0, 0x1C, 0x01, 0xC0, 0x00, 0x00, 0x00,
    // 'Y'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x80, 0x00, 0x1F, 0xE0, 0x40, 0x1F, 0xE0, 0x40, 0x00, 0x7F, 0xC0,
    0x00, 0x7F, 0xC0, 0x00, 0x7F, 0xC0, 0x1F, 0xE0, 0x40, 0x1F, 0x80, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    // 'Z'
    0x1F, 0x03, 0xC0, 0x1F, 0x03, 0xC0, 0x1C, 0x0F, 0xC0, 0x18, 0x1C, 0x40, 0x18, 0x1C, 0x40, 0x18, 0x70, 0x40,
    0x18, 0xE0, 0x40, 0x18, 0xE0, 0x40, 0x1F, 0x81, 0xC0, 0x1F, 0x03, 0xC0, 0x1F, 0x03, 0xC0, 0x00, 0x00, 0x00,
    // '['
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0,
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '\\'
    0x07, 0x00, 0x00, 0x07, 0x00, 0x00, 0x03, 0x80, 0x00, 0x00, 0xE0, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x70, 0x00,
    0x00, 0x1C, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x03, 0x80, 0x00, 0x03, 0x80, 0x00, 0x00, 0x00,
    // ']'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40,
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '^'
    0x04, 0x00, 0x00, 0x04, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x38, 0x00, 0x00, 0x38, 0x00, 0x00, 0xE0, 0x00, 0x00,
    0x38, 0x00, 0x00, 0x38, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '_'
    0x00, 0x00, 0x08, 0x00, 0x00, 0x08, 0x00, 0x00, 0x08, 0x00, 0x00, 0x08, 0x00, 0x00, 0x08, 0x00, 0x00, 0x08,
    0x00, 0x00, 0x08, 0x00, 0x00, 0x08, 0x00, 0x00, 0x08, 0x00, 0x00, 0x08, 0x00, 0x00, 0x08, 0x00, 0x00, 0x08,
    // '`'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x20, 0x00, 0x00, 0x38, 0x00, 0x00,
    0x1C, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'a'
    0x00, 0x0F, 0x80, 0x00, 0x0F, 0x80, 0x00, 0x9F, 0xC0, 0x00, 0x90, 0x40, 0x00, 0x90, 0x40, 0x00, 0x90, 0x40,
    0x00, 0xFF, 0x80, 0x00, 0xFF, 0x80, 0x00, 0x7F, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00,
    // 'b'
    0x18, 0x00, 0x00, 0x18, 0x00, 0x00, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x80, 0x40,
    0x00, 0xE0, 0x40, 0x00, 0xE0, 0x40, 0x00, 0x7F, 0xC0, 0x00, 0x1F, 0x80, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00,
    // 'c'
    0x00, 0x7F, 0x80, 0x00, 0x7F, 0x80, 0x00, 0xFF, 0xC0, 0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0x80, 0x40,
    0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0xE1, 0xC0, 0x00, 0x61, 0x80, 0x00, 0x61, 0x80, 0x00, 0x00, 0x00,
    // 'd'
    0x00, 0x1F, 0x80, 0x00, 0x1F, 0x80, 0x00, 0x7F, 0xC0, 0x00, 0xE0, 0x40, 0x00, 0xE0, 0x40, 0x18, 0x80, 0x40,
    0x1F, 0xFF, 0x80, 0x1F, 0xFF, 0x80, 0x1F, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00,
    // 'e'
    0x00, 0x7F, 0x80, 0x00, 0x7F, 0x80, 0x00, 0xFF, 0xC0, 0x00, 0x90, 0x40, 0x00, 0x90, 0x40, 0x00, 0x90, 0x40,
    0x00, 0x90, 0x40, 0x00, 0x90, 0x40, 0x00, 0xF1, 0xC0, 0x00, 0x71, 0x80, 0x00, 0x71, 0x80, 0x00, 0x00, 0x00,
    // 'f'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x40, 0x07, 0xFF, 0xC0, 0x07, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0,
    0x18, 0x60, 0x40, 0x18, 0x60, 0x40, 0x1C, 0x00, 0x00, 0x07, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'g'
    0x00, 0x7F, 0x88, 0x00, 0x7F, 0x88, 0x00, 0xFF, 0xCE, 0x00, 0x80, 0x46, 0x00, 0x80, 0x46, 0x00, 0x80, 0x46,
    0x00, 0x7F, 0xFE, 0x00, 0x7F, 0xFE, 0x00, 0xFF, 0xF8, 0x00, 0x80, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00,
    // 'h'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x60, 0x00,
    0x00, 0x80, 0x00, 0x00, 0x80, 0x00, 0x00, 0xFF, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x00, 0x00,
    // 'i'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x1C, 0xFF, 0xC0,
    0x1C, 0xFF, 0xC0, 0x1C, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'j'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x06,
    0x00, 0x80, 0x06, 0x00, 0x80, 0x06, 0x1C, 0xFF, 0xFE, 0x1C, 0xFF, 0xF8, 0x1C, 0xFF, 0xF8, 0x00, 0x00, 0x00,
    // 'k'
    0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x1C, 0x00,
    0x00, 0x7E, 0x00, 0x00, 0x7E, 0x00, 0x00, 0xE3, 0xC0, 0x00, 0x81, 0xC0, 0x00, 0x81, 0xC0, 0x00, 0x00, 0x00,
    // 'l'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0xFF, 0xC0,
    0x1F, 0xFF, 0xC0, 0x1F, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'm'
    0x00, 0xFF, 0xC0, 0x00, 0xFF, 0xC0, 0x00, 0xFF, 0xC0, 0x00, 0xE0, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x7F, 0x80,
    0x00, 0xE0, 0x00, 0x00, 0xE0, 0x00, 0x00, 0xFF, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x00, 0x00,
    // 'n'
    0x00, 0x80, 0x00, 0x00, 0x80, 0x00, 0x00, 0xFF, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x80, 0x00,
    0x00, 0x80, 0x00, 0x00, 0x80, 0x00, 0x00, 0xFF, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x00, 0x00,
    // 'o'
    0x00, 0x7F, 0x80, 0x00, 0x7F, 0x80, 0x00, 0xFF, 0xC0, 0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0x80, 0x40,
    0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0xFF, 0xC0, 0x00, 0x7F, 0x80, 0x00, 0x7F, 0x80, 0x00, 0x00, 0x00,
    // 'p'
    0x00, 0x80, 0x06, 0x00, 0x80, 0x06, 0x00, 0xFF, 0xFE, 0x00, 0x7F, 0xFE, 0x00, 0x7F, 0xFE, 0x00, 0x80, 0x46,
    0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0xFF, 0xC0, 0x00, 0x7F, 0x80, 0x00, 0x7F, 0x80, 0x00, 0x00, 0x00,
    // 'q'
    0x00, 0x7F, 0x80, 0x00, 0x7F, 0x80, 0x00, 0xFF, 0xC0, 0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0x80, 0x46,
    0x00, 0x7F, 0xFE, 0x00, 0x7F, 0xFE, 0x00, 0xFF, 0xFE, 0x00, 0x80, 0x06, 0x00, 0x80, 0x06, 0x00, 0x00, 0x00,
    // 'r'
    0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0xFF, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0x7F, 0xC0, 0x00, 0xE0, 0x40,
    0x00, 0x80, 0x00, 0x00, 0x80, 0x00, 0x00, 0xF0, 0x00, 0x00, 0x70, 0x00, 0x00, 0x70, 0x00, 0x00, 0x00, 0x00,
    // 's'
    0x00, 0x61, 0x80, 0x00, 0x61, 0x80, 0x00, 0xF1, 0xC0, 0x00, 0x9C, 0x40, 0x00, 0x9C, 0x40, 0x00, 0x8C, 0x40,
    0x00, 0x8E, 0x40, 0x00, 0x8E, 0x40, 0x00, 0xE3, 0xC0, 0x00, 0x61, 0x80, 0x00, 0x61, 0x80, 0x00, 0x00, 0x00,
    // 't'
    0x00, 0x80, 0x00, 0x00, 0x80, 0x00, 0x00, 0x80, 0x00, 0x07, 0xFF, 0x80, 0x07, 0xFF, 0x80, 0x1F, 0xFF, 0xC0,
    0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0x81, 0xC0, 0x00, 0x01, 0x80, 0x00, 0x01, 0x80, 0x00, 0x00, 0x00,
    // 'u'
    0x00, 0xFF, 0x80, 0x00, 0xFF, 0x80, 0x00, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40,
    0x00, 0xFF, 0x80, 0x00, 0xFF, 0x80, 0x00, 0xFF, 0xC0, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00,
    // 'v'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0xFF, 0x80, 0x00, 0xFF, 0x80, 0x00, 0x01, 0xC0,
    0x00, 0x01, 0xC0, 0x00, 0x01, 0xC0, 0x00, 0xFF, 0x80, 0x00, 0xFE, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 'w'
    0x00, 0xFF, 0x80, 0x00, 0xFF, 0x80, 0x00, 0xFF, 0xC0, 0x00, 0x01, 0xC0, 0x00, 0x01, 0xC0, 0x00, 0x1F, 0x80,
    0x00, 0x01, 0xC0, 0x00, 0x01, 0xC0, 0x00, 0xFF, 0xC0, 0x00, 0xFF, 0x80, 0x00, 0xFF, 0x80, 0x00, 0x00, 0x00,
    // 'x'
    0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0xE1, 0xC0, 0x00, 0x7F, 0x80, 0x00, 0x7F, 0x80, 0x00, 0x1E, 0x00,
    0x00, 0x7F, 0x80, 0x00, 0x7F, 0x80, 0x00, 0xE1, 0xC0, 0x00, 0x80, 0x40, 0x00, 0x80, 0x40, 0x00, 0x00, 0x00,
    // 'y'
    0x00, 0xFF, 0x86, 0x00, 0xFF, 0x86, 0x00, 0xFF, 0xC6, 0x00, 0x00, 0x46, 0x00, 0x00, 0x46, 0x00, 0x00, 0x46,
    0x00, 0x00, 0x4E, 0x00, 0x00, 0x4E, 0x00, 0xFF, 0xF8, 0x00, 0xFF, 0xF0, 0x00, 0xFF, 0xF0, 0x00, 0x00, 0x00,
    // 'z'
    0x00, 0xE1, 0xC0, 0x00, 0xE1, 0xC0, 0x00, 0xE3, 0xC0, 0x00, 0x8E, 0x40, 0x00, 0x8E, 0x40, 0x00, 0x9C, 0x40,
    0x00, 0xF0, 0x40, 0x00, 0xF0, 0x40, 0x00, 0xE1, 0xC0, 0x00, 0x81, 0xC0, 0x00, 0x81, 0xC0, 0x00, 0x00, 0x00,
    // '{'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x00, 0x00, 0x60, 0x00, 0x00, 0x60, 0x00, 0x07, 0xFF, 0x80,
    0x1F, 0x9F, 0xC0, 0x1F, 0x9F, 0xC0, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x00, 0x00, 0x00,
    // '|'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x9F, 0xC0,
    0x1F, 0x9F, 0xC0, 0x1F, 0x9F, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '}'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x18, 0x00, 0x40, 0x1F, 0x9F, 0xC0,
    0x07, 0xFF, 0x80, 0x07, 0xFF, 0x80, 0x00, 0x60, 0x00, 0x00, 0x60, 0x00, 0x00, 0x60, 0x00, 0x00, 0x00, 0x00,
    // '~'
    0x04, 0x00, 0x00, 0x04, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x18, 0x00, 0x00, 0x18, 0x00, 0x00, 0x1C, 0x00, 0x00,
    0x04, 0x00, 0x00, 0x04, 0x00, 0x00, 0x1C, 0x00, 0x00, 0x18, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
];
