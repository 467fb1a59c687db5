//! Digit glyph pool: the [`AssetStore`] behind the OLED face.
//!
//! The pool owns a fixed number of one-bit frame buffers, one per loaded
//! glyph. Loading a digit claims a free buffer and rasterises a
//! seven-segment figure into it; releasing hands the buffer back. With fewer
//! buffers than distinct digits on screen, loads fail with
//! [`AssetUnavailable::Exhausted`] instead of evicting anything.

use core::convert::Infallible;

use embedded_graphics::{
    image::ImageRaw,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use bigtime::clock_face::{AssetStore, AssetUnavailable, Digit};

/// Glyph width in pixels (one grid cell on a 128×64 panel).
pub const GLYPH_WIDTH: u32 = 64;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 32;

const ROW_BYTES: usize = (GLYPH_WIDTH as usize + 7) / 8;

/// Size of one glyph buffer in bytes (1 bit per pixel, rows byte-aligned).
pub const GLYPH_BYTES: usize = ROW_BYTES * GLYPH_HEIGHT as usize;

/// Default number of glyph buffers: one per grid slot.
pub const GLYPH_POOL_SIZE: usize = 4;

/// Mask enabling every digit in [`GlyphPool::with_digits`].
pub const ALL_DIGITS: u16 = 0x03FF;

// ── Seven-segment geometry ───────────────────────────────────────────────

const STROKE: u32 = 4;
const FIGURE_WIDTH: u32 = 20;
const FIGURE_HEIGHT: u32 = 28;
const FIGURE_X: i32 = ((GLYPH_WIDTH - FIGURE_WIDTH) / 2) as i32;
const FIGURE_Y: i32 = ((GLYPH_HEIGHT - FIGURE_HEIGHT) / 2) as i32;
const HALF: u32 = (FIGURE_HEIGHT - 3 * STROKE) / 2;

/// Lit segments per digit. Bit 0 is segment `a` (top), bit 6 is `g`
/// (middle):
///
/// ```text
///  aaa
/// f   b
///  ggg
/// e   c
///  ddd
/// ```
const SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

fn segment_rect(segment: usize) -> Rectangle {
    let s = STROKE as i32;
    let h = HALF as i32;
    let w = FIGURE_WIDTH as i32;
    let bar = Size::new(FIGURE_WIDTH - 2 * STROKE, STROKE);
    let post = Size::new(STROKE, HALF);
    let (x, y, size) = match segment {
        0 => (s, 0, bar),
        1 => (w - s, s, post),
        2 => (w - s, 2 * s + h, post),
        3 => (s, FIGURE_HEIGHT as i32 - s, bar),
        4 => (0, 2 * s + h, post),
        5 => (0, s, post),
        _ => (s, s + h, bar),
    };
    Rectangle::new(Point::new(FIGURE_X + x, FIGURE_Y + y), size)
}

// ── GlyphCanvas ──────────────────────────────────────────────────────────

/// `DrawTarget` over one glyph buffer, in the layout [`ImageRaw`] reads.
struct GlyphCanvas<'a> {
    buf: &'a mut [u8; GLYPH_BYTES],
}

impl OriginDimensions for GlyphCanvas<'_> {
    fn size(&self) -> Size {
        Size::new(GLYPH_WIDTH, GLYPH_HEIGHT)
    }
}

impl DrawTarget for GlyphCanvas<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= GLYPH_WIDTH as i32
                || point.y >= GLYPH_HEIGHT as i32
            {
                continue;
            }
            let x = point.x as usize;
            let idx = point.y as usize * ROW_BYTES + x / 8;
            let bit = 0x80 >> (x % 8);
            match color {
                BinaryColor::On => self.buf[idx] |= bit,
                BinaryColor::Off => self.buf[idx] &= !bit,
            }
        }
        Ok(())
    }
}

fn rasterize(digit: Digit, buf: &mut [u8; GLYPH_BYTES]) {
    buf.fill(0);
    let mut canvas = GlyphCanvas { buf };
    let lit = SEGMENTS[digit.index()];
    let style = PrimitiveStyle::with_fill(BinaryColor::On);
    for segment in 0..7 {
        if lit & (1 << segment) != 0 {
            segment_rect(segment).into_styled(style).draw(&mut canvas).ok();
        }
    }
}

// ── GlyphPool ────────────────────────────────────────────────────────────

/// A loaded glyph: which pool buffer holds it and which digit it shows.
///
/// Not `Clone`; it is moved back into [`GlyphPool::release`].
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphHandle {
    index: usize,
    digit: Digit,
}

impl GlyphHandle {
    /// Pool buffer holding the glyph.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn digit(&self) -> Digit {
        self.digit
    }
}

/// Fixed pool of `N` glyph buffers.
///
/// # Example
///
/// ```
/// use bigtime::clock_face::{AssetStore, Digit};
/// use bigtime_oled_display_rs::GlyphPool;
///
/// let mut pool: GlyphPool<2> = GlyphPool::new();
/// let seven = pool.acquire(Digit::new(7).unwrap()).unwrap();
/// assert_eq!(pool.loaded(), 1);
/// pool.release(seven);
/// assert_eq!(pool.loaded(), 0);
/// ```
pub struct GlyphPool<const N: usize = GLYPH_POOL_SIZE> {
    buffers: [[u8; GLYPH_BYTES]; N],
    resident: [Option<Digit>; N],
    /// Bit `d` set if digit `d` can be loaded.
    digits: u16,
}

impl<const N: usize> Default for GlyphPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> GlyphPool<N> {
    /// Pool able to load every digit.
    pub const fn new() -> Self {
        Self::with_digits(ALL_DIGITS)
    }

    /// Pool that only has glyphs for the digits set in `mask` (bit `d` for
    /// digit `d`). Requests for other digits fail with
    /// [`AssetUnavailable::Missing`].
    pub const fn with_digits(mask: u16) -> Self {
        Self {
            buffers: [[0; GLYPH_BYTES]; N],
            resident: [None; N],
            digits: mask & ALL_DIGITS,
        }
    }

    /// Number of buffers in the pool.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of buffers holding a glyph.
    pub fn loaded(&self) -> usize {
        self.resident.iter().filter(|r| r.is_some()).count()
    }

    /// Digit held by buffer `index`, if loaded.
    pub fn resident(&self, index: usize) -> Option<Digit> {
        self.resident.get(index).copied().flatten()
    }

    /// Image view of buffer `index`, or `None` if it holds no glyph.
    pub fn image(&self, index: usize) -> Option<ImageRaw<'_, BinaryColor>> {
        self.resident(index)?;
        Some(ImageRaw::new(&self.buffers[index], GLYPH_WIDTH))
    }
}

impl<const N: usize> AssetStore for GlyphPool<N> {
    type Handle = GlyphHandle;

    fn acquire(&mut self, digit: Digit) -> Result<GlyphHandle, AssetUnavailable> {
        if self.digits & (1 << digit.value()) == 0 {
            return Err(AssetUnavailable::Missing);
        }
        let index = self
            .resident
            .iter()
            .position(Option::is_none)
            .ok_or(AssetUnavailable::Exhausted)?;

        rasterize(digit, &mut self.buffers[index]);
        self.resident[index] = Some(digit);
        Ok(GlyphHandle { index, digit })
    }

    fn release(&mut self, handle: GlyphHandle) {
        self.resident[handle.index] = None;
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
