#![cfg_attr(not(test), no_std)]

//! ILI9341 TFT LCD driver for panels wired to a parallel 8080-style bus,
//! typically through the external memory controller (FSMC/FMC) of an STM32.
//!
//! ### Usage
//!
//! ```ignore
//! let bus = unsafe { Fsmc::new(BANK1_A18, SpinSettle::default()) };
//!
//! let mut lcd = Ili9341::new(bus, &mut delay, DisplaySize240x320, Config::default())
//!     .unwrap();
//!
//! lcd.set_foreground(color::WHITE);
//! lcd.draw_circle(160, 120, 40)?;
//! lcd.show_string(10, 10, 200, 24, 16, "Hello", DrawMode::Opaque)?;
//! ```

use core::iter::once;
use display_interface::DataFormat::{U16BEIter, U8Iter, U8};
use display_interface::WriteOnlyDataCommand;

mod addressing;
pub mod color;
mod error;
mod font;
#[cfg(feature = "graphics")]
mod graphics_core;
mod init;
pub mod interface;
mod primitives;
mod text;

pub use addressing::{Orientation, ScanDirection};
pub use display_interface::DisplayError;
pub use error::Error;
pub use font::{is_printable, Font, FontSize};
pub use init::{Config, InitState, ILI9341_ID};
pub use interface::{Fsmc, NoSettle, ReadData, Settle, SpinSettle, BANK1_A18};
pub use primitives::{CirclePoints, LinePoints};
pub use text::{DrawMode, Render, XNUM_OVERLAY, XNUM_ZERO_PAD};

type Result<T = (), E = DisplayError> = core::result::Result<T, E>;

/// Native resolution of the panel, in portrait
pub trait DisplaySize {
    /// Width in pixels
    const WIDTH: usize;
    /// Height in pixels
    const HEIGHT: usize;
}

/// The common 2.4" and 2.8" ILI9341 modules
pub struct DisplaySize240x320;

impl DisplaySize for DisplaySize240x320 {
    const WIDTH: usize = 240;
    const HEIGHT: usize = 320;
}

/// An initialized ILI9341 panel.
///
/// The value only exists once the controller identity was verified and the
/// power-on sequence completed, see [Ili9341::new].
///
/// Drawing goes through one of two paths:
///
/// - Area operations ([Ili9341::clear], [Ili9341::fill], [Ili9341::draw_raw_iter])
///   prepare a window with the 2 opposite corner coordinates and stream pixels
///   into it; the controller advances to the adjacent pixel on the right, or
///   the first of the next row when the row ended.
/// - Point operations move the cursor before every single pixel write.
///
/// In both cases the pixel format is rgb565.
pub struct Ili9341<IFACE> {
    interface: IFACE,
    id: u16,
    orientation: Orientation,
    /// Portrait dimensions of the panel
    size: (usize, usize),
    width: usize,
    height: usize,
    foreground: u16,
    background: u16,
}

impl<IFACE> Ili9341<IFACE>
where
    IFACE: WriteOnlyDataCommand,
{
    fn command(&mut self, cmd: Command, args: &[u8]) -> Result {
        self.interface.send_commands(U8Iter(&mut once(cmd as u8)))?;
        self.interface.send_data(U8(args))
    }

    fn write_iter<I: IntoIterator<Item = u16>>(&mut self, data: I) -> Result {
        self.interface
            .send_commands(U8Iter(&mut once(Command::MemoryWrite as u8)))?;
        self.interface.send_data(U16BEIter(&mut data.into_iter()))
    }
}

impl<IFACE> Ili9341<IFACE> {
    /// Width in pixels in the current orientation and scan direction
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Controller identity read back during initialization
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Pen color used by [Ili9341::draw_point], lines, circles and glyph pixels
    pub fn foreground(&self) -> u16 {
        self.foreground
    }

    pub fn set_foreground(&mut self, color: u16) {
        self.foreground = color;
    }

    /// Color of clear glyph pixels in [DrawMode::Opaque]
    pub fn background(&self) -> u16 {
        self.background
    }

    pub fn set_background(&mut self, color: u16) {
        self.background = color;
    }

    /// Consume the driver and return the bus
    pub fn release(self) -> IFACE {
        self.interface
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

#[derive(Clone, Copy)]
enum Command {
    /// ILI93xx device code register, NOP on the 9341
    DeviceCode = 0x00,
    SoftwareReset = 0x01,
    SleepOut = 0x11,
    GammaSet = 0x26,
    DisplayOn = 0x29,
    ColumnAddressSet = 0x2a,
    PageAddressSet = 0x2b,
    MemoryWrite = 0x2c,
    MemoryAccessControl = 0x36,
    PixelFormatSet = 0x3a,
    FrameRateControl = 0xb1,
    DisplayFunctionControl = 0xb6,
    PowerControl1 = 0xc0,
    PowerControl2 = 0xc1,
    VcomControl1 = 0xc5,
    VcomControl2 = 0xc7,
    PowerControlA = 0xcb,
    PowerControlB = 0xcf,
    ReadId4 = 0xd3,
    PositiveGammaCorrection = 0xe0,
    NegativeGammaCorrection = 0xe1,
    DriverTimingControlA = 0xe8,
    DriverTimingControlB = 0xea,
    PowerOnSequenceControl = 0xed,
    Enable3Gamma = 0xf2,
    PumpRatioControl = 0xf7,
}
