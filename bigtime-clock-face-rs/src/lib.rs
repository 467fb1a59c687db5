//! Clock face core for the Big Time display.
//!
//! The [`clock_face`] module owns the digit-image slot cache and the
//! renderer that maps a time of day onto a 2×2 grid of digit glyphs. It
//! knows nothing about the display hardware: glyphs come from an
//! [`AssetStore`](clock_face::AssetStore) and are placed through a
//! [`DisplaySurface`](clock_face::DisplaySurface), both supplied by the
//! caller.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging and [`defmt::Format`] derives.

#![no_std]

pub mod clock_face;
