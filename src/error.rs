use core::fmt;

use display_interface::DisplayError;

/// Initialization failure
#[derive(Clone, Debug)]
pub enum Error {
    /// The bus refused a command or data write
    Interface(DisplayError),
    /// The panel answered with an identity other than 0x9341
    UnsupportedController { id: u16 },
}

impl From<DisplayError> for Error {
    fn from(error: DisplayError) -> Self {
        Error::Interface(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Interface(error) => write!(f, "display interface error: {:?}", error),
            Error::UnsupportedController { id } => {
                write!(f, "unsupported controller id {:#06x}", id)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Interface(error) => {
                defmt::write!(f, "Interface({})", defmt::Debug2Format(error))
            }
            Error::UnsupportedController { id } => {
                defmt::write!(f, "UnsupportedController {{ id: {=u16:#x} }}", *id)
            }
        }
    }
}
