//! Clock update task: the render trigger for the OLED face.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};
use embedded_hal_async::i2c::I2c;

use bigtime::clock_face::{FaceSettings, WallClock};

use crate::driver::OledDriver;
use crate::layout::{render_face, DisplayConfig};
use crate::OledFace;

/// Periodic clock update loop.
///
/// This is a regular `async fn`, not an Embassy `#[task]`; Embassy tasks
/// cannot be generic, so callers wrap it in a concrete task:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn clock_task(
///     driver: OledDriver<MyConcreteI2cType>,
///     face: OledFace,
///     settings: &'static Mutex<CriticalSectionRawMutex, FaceSettings>,
///     clock: UptimeClock,
///     config: DisplayConfig,
/// ) {
///     clock_update_task(driver, face, settings, clock, config).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the display. On failure the face is torn down and the
///    task returns.
/// 2. Every `config.update_period_ms()`:
///    - Snapshot the settings (mutex held only for the copy) and read the
///      clock.
///    - Hand both to
///      [`ClockFace::on_poll`](bigtime::clock_face::ClockFace::on_poll), which decides between a
///      forced tick, an hour-format re-render, an incremental tick or
///      nothing.
///    - If the surface is dirty, redraw the frame buffer and flush it. A
///      failed flush keeps the surface dirty so the next pass retries.
pub async fn clock_update_task<I2C, C, const P: usize>(
    mut driver: OledDriver<I2C>,
    mut face: OledFace<P>,
    settings: &'static Mutex<CriticalSectionRawMutex, FaceSettings>,
    mut clock: C,
    config: DisplayConfig,
) where
    I2C: I2c,
    C: WallClock,
{
    if let Err(_e) = driver.init().await {
        #[cfg(feature = "defmt")]
        defmt::error!("OLED init failed: {}", _e);
        face.teardown();
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("OLED initialised, polling every {} ms", config.update_period_ms());

    let period = Duration::from_millis(config.update_period_ms());
    let mut applied: Option<FaceSettings> = None;

    loop {
        let current = *settings.lock().await;
        let now = clock.now();

        let rendered = face.on_poll(now, applied.as_ref(), &current);
        applied = Some(current);

        if let Err(_e) = rendered {
            #[cfg(feature = "defmt")]
            defmt::error!("Face render failed: {}", _e);
        }

        if face.cache_mut().surface_mut().take_dirty() {
            if let Some(display) = driver.display_mut() {
                if render_face(display, &face).is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::error!("Frame draw failed");
                }
            }
            if let Err(_e) = driver.flush().await {
                #[cfg(feature = "defmt")]
                defmt::error!("Flush failed: {}", _e);
                face.cache_mut().surface_mut().mark_dirty();
            }
        }

        Timer::after(period).await;
    }
}
