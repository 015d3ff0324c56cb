use embedded_hal::blocking::delay::DelayMs;

use crate::addressing::Orientation;
use crate::color;
use crate::error::Error;
use crate::interface::ReadData;
use crate::{Command, DisplaySize, Ili9341};

/// Identity reported by the only controller this driver supports
pub const ILI9341_ID: u16 = 0x9341;

/// Power-on register values, in the order they are written
static INIT_SEQUENCE: &[(Command, &[u8])] = &[
    (Command::PowerControlB, &[0x00, 0xc1, 0x30]),
    (Command::PowerOnSequenceControl, &[0x64, 0x03, 0x12, 0x81]),
    (Command::DriverTimingControlA, &[0x85, 0x10, 0x7a]),
    (Command::PowerControlA, &[0x39, 0x2c, 0x00, 0x34, 0x02]),
    (Command::PumpRatioControl, &[0x20]),
    (Command::DriverTimingControlB, &[0x00, 0x00]),
    (Command::PowerControl1, &[0x1b]),
    (Command::PowerControl2, &[0x01]),
    (Command::VcomControl1, &[0x30, 0x30]),
    (Command::VcomControl2, &[0xb7]),
    (Command::MemoryAccessControl, &[0x48]),
    (Command::PixelFormatSet, &[0x55]),
    (Command::FrameRateControl, &[0x00, 0x1a]),
    (Command::DisplayFunctionControl, &[0x0a, 0xa2]),
    (Command::Enable3Gamma, &[0x00]),
    (Command::GammaSet, &[0x01]),
    (
        Command::PositiveGammaCorrection,
        &[
            0x0f, 0x2a, 0x28, 0x08, 0x0e, 0x08, 0x54, 0xa9, 0x43, 0x0a, 0x0f, 0x00, 0x00, 0x00,
            0x00,
        ],
    ),
    (
        Command::NegativeGammaCorrection,
        &[
            0x00, 0x15, 0x17, 0x07, 0x11, 0x06, 0x2b, 0x56, 0x3c, 0x05, 0x10, 0x0f, 0x3f, 0x3f,
            0x0f,
        ],
    ),
    (Command::PageAddressSet, &[0x00, 0x00, 0x01, 0x3f]),
    (Command::ColumnAddressSet, &[0x00, 0x00, 0x00, 0xef]),
];

/// Steps of [Ili9341::new]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitState {
    Reset,
    IdentityCheck,
    Configure,
    SleepExit,
    DisplayOn,
    Ready,
    /// The panel is not an ILI9341; nothing past the identity probe was
    /// written
    Fatal,
}

/// Settings applied while bringing the panel up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub orientation: Orientation,
    /// Color the screen is cleared to once the panel is on
    pub clear_color: u16,
    pub reset_delay_ms: u16,
    pub sleep_out_delay_ms: u16,
    pub display_on_delay_ms: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::Landscape,
            clear_color: color::GREEN,
            reset_delay_ms: 50,
            sleep_out_delay_ms: 120,
            display_on_delay_ms: 20,
        }
    }
}

impl Config {
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_clear_color(mut self, color: u16) -> Self {
        self.clear_color = color;
        self
    }

    /// Delays in milliseconds after reset, after sleep out and after
    /// display on
    pub fn with_timing(mut self, reset: u16, sleep_out: u16, display_on: u16) -> Self {
        self.reset_delay_ms = reset;
        self.sleep_out_delay_ms = sleep_out;
        self.display_on_delay_ms = display_on;
        self
    }
}

/// The device code register of older ILI93xx parts. A 9341 does not
/// implement it and answers with bus noise, or with 0x9300 while it is still
/// coming out of reset.
fn is_reliable_coarse_id(id: u16) -> bool {
    !(id < 0x00ff || id == 0xffff || id == 0x9300)
}

impl<IFACE> Ili9341<IFACE>
where
    IFACE: ReadData,
{
    /// Reset the panel, verify it is an ILI9341 and bring it up as
    /// described by `config`.
    ///
    /// The screen is on and cleared to [Config::clear_color] when this
    /// returns. Foreground and background start as black and white.
    pub fn new<DELAY, SIZE>(
        interface: IFACE,
        delay: &mut DELAY,
        _display_size: SIZE,
        config: Config,
    ) -> Result<Self, Error>
    where
        DELAY: DelayMs<u16>,
        SIZE: DisplaySize,
    {
        let mut ili9341 = Ili9341 {
            interface,
            id: 0,
            orientation: Orientation::Portrait,
            size: (SIZE::WIDTH, SIZE::HEIGHT),
            width: SIZE::WIDTH,
            height: SIZE::HEIGHT,
            foreground: color::BLACK,
            background: color::WHITE,
        };

        let mut state = InitState::Reset;
        loop {
            #[cfg(feature = "defmt")]
            defmt::debug!("ili9341 init: {}", state);

            state = match state {
                InitState::Reset => {
                    delay.delay_ms(config.reset_delay_ms);
                    ili9341.command(Command::SoftwareReset, &[])?;
                    delay.delay_ms(config.reset_delay_ms);
                    InitState::IdentityCheck
                }
                InitState::IdentityCheck => {
                    ili9341.id = ili9341.probe_id()?;
                    if ili9341.id == ILI9341_ID {
                        #[cfg(feature = "defmt")]
                        defmt::info!("ili9341 found, id {=u16:#x}", ili9341.id);
                        InitState::Configure
                    } else {
                        InitState::Fatal
                    }
                }
                InitState::Configure => {
                    for (cmd, args) in INIT_SEQUENCE {
                        ili9341.command(*cmd, args)?;
                    }
                    InitState::SleepExit
                }
                InitState::SleepExit => {
                    ili9341.command(Command::SleepOut, &[])?;
                    delay.delay_ms(config.sleep_out_delay_ms);
                    InitState::DisplayOn
                }
                InitState::DisplayOn => {
                    ili9341.command(Command::DisplayOn, &[])?;
                    delay.delay_ms(config.display_on_delay_ms);
                    InitState::Ready
                }
                InitState::Ready => {
                    ili9341.set_orientation(config.orientation)?;
                    ili9341.clear(config.clear_color)?;
                    return Ok(ili9341);
                }
                InitState::Fatal => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("unsupported controller, id {=u16:#x}", ili9341.id);
                    return Err(Error::UnsupportedController { id: ili9341.id });
                }
            };
        }
    }

    /// Read the controller identity, trying the cheap device code register
    /// first and falling back to Read ID4.
    fn probe_id(&mut self) -> Result<u16, Error> {
        self.command(Command::DeviceCode, &[])?;
        let coarse = self.interface.read_data()?;
        if is_reliable_coarse_id(coarse) {
            return Ok(coarse);
        }

        self.command(Command::ReadId4, &[])?;
        // Dummy read, then the IC version
        self.interface.read_data()?;
        self.interface.read_data()?;
        let high = self.interface.read_data()? as u8;
        let low = self.interface.read_data()? as u8;
        Ok(u16::from_be_bytes([high, low]))
    }
}
