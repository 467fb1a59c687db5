//! OLED driver errors.

use core::fmt;

use display_interface::DisplayError;

/// Errors from [`OledDriver`](crate::OledDriver).
///
/// `ssd1306` folds every I2C bus error into [`DisplayError`], so this enum
/// is not generic over the bus.
#[derive(Debug)]
pub enum OledError {
    /// Display interface error (I2C and other bus-level failures).
    Display(DisplayError),
    /// The controller did not accept the initialisation sequence.
    InitializationFailed,
    /// Operation attempted before [`OledDriver::init()`](crate::OledDriver::init).
    NotInitialized,
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OledError::Display(e) => write!(f, "display interface error: {:?}", e),
            OledError::InitializationFailed => f.write_str("display initialisation failed"),
            OledError::NotInitialized => f.write_str("display not initialised"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_) => defmt::write!(f, "display interface error"),
            OledError::InitializationFailed => defmt::write!(f, "initialisation failed"),
            OledError::NotInitialized => defmt::write!(f, "not initialised"),
        }
    }
}
