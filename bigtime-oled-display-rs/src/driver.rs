//! SSD1306 driver in async buffered-graphics mode.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async};

use crate::error::OledError;

/// Concrete display type wrapped by [`OledDriver`].
pub type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Async driver for an SSD1306 128×64 OLED over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] builds the driver without bus traffic.
/// 2. [`OledDriver::init()`] sends the controller initialisation sequence.
/// 3. Draw into the frame buffer through [`OledDriver::display_mut()`]
///    (see [`render_face`](crate::render_face)).
/// 4. [`OledDriver::flush()`] transfers the frame buffer (about 20 ms at
///    400 kHz).
///
/// # Example
///
/// ```no_run
/// use bigtime_oled_display_rs::OledDriver;
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, 0x3C);
/// oled.init().await.unwrap();
/// oled.clear_buffer();
/// oled.flush().await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver for the device at 7-bit `address`
    /// (usually `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Send the initialisation sequence. Calling it again re-initialises
    /// the controller.
    ///
    /// # Errors
    ///
    /// [`OledError::InitializationFailed`] if the controller does not
    /// respond.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.initialized = false;
        self.display
            .init()
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Clear the in-memory frame buffer. No bus traffic.
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Transfer the frame buffer to the display.
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before [`init()`](Self::init),
    /// [`OledError::Display`] on a bus failure.
    pub async fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush().await?;
        Ok(())
    }

    /// The underlying display as an `embedded-graphics` draw target, or
    /// `None` before [`init()`](Self::init).
    pub fn display_mut(&mut self) -> Option<&mut Display<I2C>> {
        if self.initialized {
            Some(&mut self.display)
        } else {
            None
        }
    }
}
