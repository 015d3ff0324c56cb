use display_interface::{DisplayError, WriteOnlyDataCommand};

use crate::{Command, Ili9341, Result};

/// Physical orientation of the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// 240x320 on the reference panel
    Portrait = 0,
    /// 320x240 on the reference panel
    Landscape = 1,
}

impl TryFrom<u8> for Orientation {
    type Error = DisplayError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Orientation::Portrait),
            1 => Ok(Orientation::Landscape),
            _ => Err(DisplayError::InvalidFormatError),
        }
    }
}

/// Order in which the controller advances through GRAM within a window.
///
/// The first half of the name is the direction inside a line, the second
/// the direction from line to line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ScanDirection {
    LeftToRightTopToBottom = 0,
    LeftToRightBottomToTop = 1,
    RightToLeftTopToBottom = 2,
    RightToLeftBottomToTop = 3,
    TopToBottomLeftToRight = 4,
    TopToBottomRightToLeft = 5,
    BottomToTopLeftToRight = 6,
    BottomToTopRightToLeft = 7,
}

use ScanDirection::*;

/// Row/column exchange bit of memory access control
const MV: u8 = 0x20;
/// BGR panel order, always set
const BGR: u8 = 0x08;

/// Landscape panels scan in the direction rotated by 90 degrees, so the same
/// drawing code is correct in both orientations.
static REMAP: [[ScanDirection; 8]; 2] = [
    ScanDirection::ALL,
    [
        BottomToTopLeftToRight,
        BottomToTopRightToLeft,
        TopToBottomLeftToRight,
        TopToBottomRightToLeft,
        LeftToRightBottomToTop,
        LeftToRightTopToBottom,
        RightToLeftBottomToTop,
        RightToLeftTopToBottom,
    ],
];

impl ScanDirection {
    pub const ALL: [ScanDirection; 8] = [
        LeftToRightTopToBottom,
        LeftToRightBottomToTop,
        RightToLeftTopToBottom,
        RightToLeftBottomToTop,
        TopToBottomLeftToRight,
        TopToBottomRightToLeft,
        BottomToTopLeftToRight,
        BottomToTopRightToLeft,
    ];

    /// Direction applied by [Ili9341::set_orientation]
    pub const DEFAULT: ScanDirection = LeftToRightTopToBottom;

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The direction actually programmed for `self` under `orientation`
    pub fn remap(self, orientation: Orientation) -> Self {
        REMAP[orientation as usize][self as usize]
    }

    /// MY, MX and MV bits of the memory access control register
    pub const fn flags(self) -> u8 {
        match self {
            LeftToRightTopToBottom => 0,
            LeftToRightBottomToTop => 0x80,
            RightToLeftTopToBottom => 0x40,
            RightToLeftBottomToTop => 0x80 | 0x40,
            TopToBottomLeftToRight => MV,
            TopToBottomRightToLeft => 0x40 | MV,
            BottomToTopLeftToRight => 0x80 | MV,
            BottomToTopRightToLeft => 0x80 | 0x40 | MV,
        }
    }
}

impl<IFACE> Ili9341<IFACE>
where
    IFACE: WriteOnlyDataCommand,
{
    /// Move the GRAM write position to (x, y).
    ///
    /// Only the start of the column and page ranges is written; the end
    /// stays where the last window put it. Every drawing operation that
    /// narrows the window widens it back to the full screen afterwards.
    pub fn set_cursor(&mut self, x: u16, y: u16) -> Result {
        self.command(Command::ColumnAddressSet, &[(x >> 8) as u8, (x & 0xff) as u8])?;
        self.command(Command::PageAddressSet, &[(y >> 8) as u8, (y & 0xff) as u8])
    }

    /// Restrict GRAM writes to the rectangle with corners (sx, sy) and
    /// (ex, ey), both included, and move the write position to (sx, sy).
    ///
    /// Point and glyph drawing expect the full-screen window, so restore it
    /// after writing through a narrower one.
    pub fn set_window(&mut self, sx: u16, sy: u16, ex: u16, ey: u16) -> Result {
        self.command(
            Command::ColumnAddressSet,
            &[
                (sx >> 8) as u8,
                (sx & 0xff) as u8,
                (ex >> 8) as u8,
                (ex & 0xff) as u8,
            ],
        )?;
        self.command(
            Command::PageAddressSet,
            &[
                (sy >> 8) as u8,
                (sy & 0xff) as u8,
                (ey >> 8) as u8,
                (ey & 0xff) as u8,
            ],
        )
    }

    /// Program the GRAM scan direction and reset the window to the full
    /// screen.
    ///
    /// Width and height are swapped when the new direction exchanges rows
    /// and columns relative to the current dimensions.
    pub fn set_scan_direction(&mut self, dir: ScanDirection) -> Result {
        let value = dir.remap(self.orientation).flags() | BGR;
        self.command(Command::MemoryAccessControl, &[value])?;

        let wide = value & MV != 0 || self.orientation == Orientation::Landscape;
        if wide == (self.width < self.height) {
            core::mem::swap(&mut self.width, &mut self.height);
        }

        self.reset_window()
    }

    /// Open the window over the whole screen
    pub(crate) fn reset_window(&mut self) -> Result {
        self.set_window(0, 0, self.width as u16 - 1, self.height as u16 - 1)
    }

    /// Change the orientation of the screen and apply the default scan
    /// direction
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result {
        let (width, height) = self.size;
        (self.width, self.height) = match orientation {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        };
        self.orientation = orientation;
        self.set_scan_direction(ScanDirection::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_table_is_complete() {
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            let mut seen = [false; 8];
            for dir in ScanDirection::ALL {
                seen[dir.remap(orientation) as usize] = true;
            }
            assert!(seen.iter().all(|&s| s), "{:?} is not a permutation", orientation);
        }
    }

    #[test]
    fn portrait_keeps_the_requested_direction() {
        for dir in ScanDirection::ALL {
            assert_eq!(dir.remap(Orientation::Portrait), dir);
        }
    }

    #[test]
    fn landscape_rotates_by_a_quarter_turn() {
        let expected = [6u8, 7, 4, 5, 1, 0, 3, 2];
        for (dir, want) in ScanDirection::ALL.into_iter().zip(expected) {
            assert_eq!(dir.remap(Orientation::Landscape) as u8, want);
        }
    }

    #[test]
    fn flags() {
        let expected = [0x00, 0x80, 0x40, 0xc0, 0x20, 0x60, 0xa0, 0xe0];
        for (dir, want) in ScanDirection::ALL.into_iter().zip(expected) {
            assert_eq!(dir.flags(), want);
        }
    }

    #[test]
    fn index_round_trip() {
        for index in 0..8 {
            assert_eq!(ScanDirection::from_index(index).unwrap() as u8, index);
        }
        assert!(ScanDirection::from_index(8).is_none());
    }

    #[test]
    fn orientation_from_u8() {
        assert_eq!(Orientation::try_from(0).unwrap(), Orientation::Portrait);
        assert_eq!(Orientation::try_from(1).unwrap(), Orientation::Landscape);
        assert!(Orientation::try_from(2).is_err());
    }
}
