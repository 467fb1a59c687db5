//! SSD1306 (128×64) backend for the Big Time clock face, using Embassy.
//!
//! This crate supplies the concrete collaborators the
//! [`bigtime::clock_face`] slot cache needs on an OLED:
//!
//! - [`GlyphPool`]: an [`AssetStore`] with a fixed pool of 1-bpp glyph
//!   buffers, rasterising seven-segment digits on demand.
//! - [`FrameSurface`]: a [`DisplaySurface`] that remembers where each glyph
//!   is attached and draws them onto any `embedded-graphics` target.
//! - [`OledDriver`]: async buffered-graphics SSD1306 driver.
//! - [`clock_update_task`]: the periodic render trigger (feature `task`).
//!
//! # Quick Start
//!
//! ```ignore
//! use bigtime::clock_face::{ClockFace, SlotCache};
//! use bigtime_oled_display_rs::{clock_update_task, DisplayConfig, FrameSurface, GlyphPool, OledDriver};
//!
//! let config = DisplayConfig::default();
//! let face = ClockFace::new(SlotCache::new(
//!     GlyphPool::new(),
//!     FrameSurface::new(),
//!     config.grid_geometry(),
//! ));
//! let oled = OledDriver::new(i2c_oled, 0x3C);
//! spawner.spawn(clock_task(oled, face, settings, clock, config)).unwrap();
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`].
//! - **`task`**: the Embassy update task.
//!
//! [`AssetStore`]: bigtime::clock_face::AssetStore
//! [`DisplaySurface`]: bigtime::clock_face::DisplaySurface

#![no_std]

#[cfg(feature = "task")]
pub mod clock_task;
pub mod driver;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod surface;

// ── Re-exports for convenience ───────────────────────────────────────────

#[cfg(feature = "task")]
pub use clock_task::clock_update_task;
pub use driver::OledDriver;
pub use error::OledError;
pub use glyph::{GlyphHandle, GlyphPool, GLYPH_POOL_SIZE};
pub use layout::{render_face, DisplayConfig};
pub use surface::{FrameSurface, Placement};

/// Clock face wired to the OLED glyph pool and frame surface.
pub type OledFace<const P: usize = GLYPH_POOL_SIZE> =
    bigtime::clock_face::ClockFace<GlyphPool<P>, FrameSurface<P>>;
