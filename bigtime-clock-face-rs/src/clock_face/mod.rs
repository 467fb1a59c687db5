//! Digit-image slot cache and the clock face built on it.
//!
//! # Architecture
//!
//! Only a handful of digit glyphs fit in memory at once, so each of the
//! four on-screen positions loads its own glyph on demand and releases it as
//! soon as the digit changes:
//!
//! ```text
//! ClockFace::on_tick ──► render_row ──► SlotCache ──► AssetStore
//!                         (per row)     (per slot)    └► DisplaySurface
//! ```
//!
//! - [`SlotCache`] owns a fixed arena of [`Slot`]s. A slot is either empty
//!   or holds one loaded glyph plus the digit it shows. Replacing or
//!   clearing a slot always releases its glyph; dropping the cache releases
//!   everything.
//! - [`render_row`] splits a 0–99 value over two slots, updates only the
//!   columns whose digit changed (unless forced) and blanks the leading zero
//!   of the very first slot when the zero prefix is off.
//! - [`ClockFace`] maps a [`ClockTime`] onto the hour and minute rows and
//!   exposes the render-trigger entry points.
//!
//! # Failure handling
//!
//! A glyph that cannot be loaded leaves its slot blank and is reported in
//! the [`RenderReport`]; the rest of the pass still runs and the next tick
//! retries it. A blank digit is always preferred over a stale one.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation: slots live in a fixed-size array sized by the
//! `N` const parameter (default [`GRID_SLOTS`]).

mod asset;
mod cache;
mod digit;
mod error;
mod face;
mod hour;
mod row;
mod settings;
mod slot;
mod time;

#[cfg(test)]
mod mock;

pub use asset::{AssetStore, DisplaySurface, GridGeometry};
pub use cache::SlotCache;
pub use digit::Digit;
pub use error::{AssetUnavailable, FaceError};
pub use face::{ClockFace, HOUR_ROW, MINUTE_ROW};
pub use hour::display_hour;
pub use row::{is_blanked, render_row, RenderReport, COLUMNS_PER_ROW, MAX_SLOTS};
pub use settings::{FaceSettings, Refresh, SettingChange};
pub use slot::Slot;
pub use time::{ClockTime, WallClock, MINUTES_PER_DAY};

/// Number of digit positions on screen (two rows of two).
pub const GRID_SLOTS: usize = 4;
