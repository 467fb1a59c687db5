//! bigtime-hw-interface
//!
//! Big Time clock face firmware for the Raspberry Pi Pico 2 with an SSD1306
//! OLED:
//!
//! 1. The clock task polls an uptime clock and the shared [`FaceSettings`].
//! 2. On a new minute (or a settings change) it drives the slot cache,
//!    which loads and releases digit glyphs one slot at a time.
//! 3. When any slot changed, the frame is redrawn and flushed over I2C.
//!
//! Two buttons edit the settings: GP18 toggles 12/24-hour mode, GP19 toggles
//! the zero prefix.
//!
//! There is no RTC; the time of day counts up from [`START_TIME`] at boot.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Instant, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use bigtime::clock_face::{
    ClockFace, ClockTime, FaceSettings, Refresh, SettingChange, SlotCache, WallClock,
};
use bigtime_oled_display_rs::{
    clock_update_task, DisplayConfig, FrameSurface, GlyphPool, OledDriver, OledFace,
};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Display settings, written by the button tasks and read by the clock task.
static SETTINGS: StaticCell<Mutex<CriticalSectionRawMutex, FaceSettings>> = StaticCell::new();

/// Time of day shown at boot.
const START_TIME: ClockTime = ClockTime::from_minutes(12 * 60);

/// Button debounce interval.
const DEBOUNCE: Duration = Duration::from_millis(30);

type OledI2c = I2c<'static, I2C0, i2c::Async>;

// ---------------------------------------------------------------------------
// Wall clock
// ---------------------------------------------------------------------------

/// Time of day derived from the Embassy uptime counter.
struct UptimeClock {
    start: ClockTime,
}

impl WallClock for UptimeClock {
    fn now(&mut self) -> ClockTime {
        let elapsed = (Instant::now().as_secs() / 60) as u32;
        ClockTime::from_minutes(self.start.minutes_since_midnight().wrapping_add(elapsed))
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Concrete wrapper around the generic `clock_update_task`.
#[embassy_executor::task]
async fn clock_task(
    driver: OledDriver<OledI2c>,
    face: OledFace,
    settings: &'static Mutex<CriticalSectionRawMutex, FaceSettings>,
    clock: UptimeClock,
    config: DisplayConfig,
) {
    clock_update_task(driver, face, settings, clock, config).await;
}

/// Which setting a button flips.
#[derive(Clone, Copy, Format)]
enum Toggle {
    HourFormat,
    ZeroPrefix,
}

impl Toggle {
    fn change(self, current: &FaceSettings) -> SettingChange {
        match self {
            Toggle::HourFormat => SettingChange::TwentyFourHour(!current.is_24h),
            Toggle::ZeroPrefix => SettingChange::ZeroPrefix(!current.zero_prefix),
        }
    }
}

/// Active-low push button. Each debounced press flips one setting; the
/// clock task picks the change up on its next poll.
#[embassy_executor::task(pool_size = 2)]
async fn button_task(
    mut btn: Input<'static>,
    toggle: Toggle,
    settings: &'static Mutex<CriticalSectionRawMutex, FaceSettings>,
) {
    info!("Button task started: {}", toggle);

    loop {
        btn.wait_for_falling_edge().await;
        Timer::after(DEBOUNCE).await;
        if btn.is_high() {
            continue;
        }

        let refresh = {
            let mut s = settings.lock().await;
            let change = toggle.change(&s);
            debug!("Button: {}", change);
            s.apply(change)
        };
        if refresh != Refresh::None {
            info!("Settings changed, refresh: {}", refresh);
        }

        btn.wait_for_rising_edge().await;
        Timer::after(DEBOUNCE).await;
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("bigtime-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // I2C_SDA  → GP20  (p.PIN_20)
    // I2C_SCL  → GP21  (p.PIN_21)
    // BTN_24H  → GP18  (p.PIN_18)  active-low, pull-up enabled
    // BTN_ZERO → GP19  (p.PIN_19)  active-low, pull-up enabled
    // ———————————————————————————————————————————————————————————————————————

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );
    let oled_driver = OledDriver::new(i2c, 0x3C);

    let btn_24h = Input::new(p.PIN_18, Pull::Up);
    let btn_zero = Input::new(p.PIN_19, Pull::Up);

    let settings = SETTINGS.init(Mutex::new(FaceSettings::default()));

    let config = DisplayConfig::default();
    let face = ClockFace::new(SlotCache::new(
        GlyphPool::new(),
        FrameSurface::new(),
        config.grid_geometry(),
    ));
    let clock = UptimeClock { start: START_TIME };

    spawner.spawn(clock_task(oled_driver, face, settings, clock, config)).unwrap();
    spawner.spawn(button_task(btn_24h, Toggle::HourFormat, settings)).unwrap();
    spawner.spawn(button_task(btn_zero, Toggle::ZeroPrefix, settings)).unwrap();

    info!("All tasks spawned");
}
