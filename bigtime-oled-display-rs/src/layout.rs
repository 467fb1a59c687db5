//! Display configuration and face rendering.
//!
//! [`DisplayConfig`] holds the OLED geometry and the update-task poll rate;
//! [`render_face`] draws the current face into any `embedded-graphics`
//! draw target.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use bigtime::clock_face::{ClockFace, GridGeometry, COLUMNS_PER_ROW, GRID_SLOTS};

use crate::glyph::{GlyphPool, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::surface::FrameSurface;

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for the display layout and update task.
///
/// All layout geometry lives here. [`DisplayConfig::default()`] fits the
/// 128×64 SSD1306 with four 64×32 cells and polls at 10 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// How often the update task polls the clock and settings, in Hz.
    /// Default: 10.
    pub update_frequency_hz: u32,
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Width of each digit cell in pixels. Default: 64.
    pub cell_width: u32,
    /// Height of each digit cell in pixels. Default: 32.
    pub cell_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            update_frequency_hz: 10,
            display_width: 128,
            display_height: 64,
            cell_width: GLYPH_WIDTH,
            cell_height: GLYPH_HEIGHT,
        }
    }
}

impl DisplayConfig {
    /// Poll period in milliseconds: `1000 / update_frequency_hz`.
    ///
    /// A frequency of zero is treated as 1 Hz.
    pub fn update_period_ms(&self) -> u64 {
        1000 / self.update_frequency_hz.max(1) as u64
    }

    /// Slot grid for the clock face, centred on the display.
    pub fn grid_geometry(&self) -> GridGeometry {
        let rows = (GRID_SLOTS / COLUMNS_PER_ROW) as u32;
        let grid_width = self.cell_width * COLUMNS_PER_ROW as u32;
        let grid_height = self.cell_height * rows;
        GridGeometry {
            origin: Point::new(
                (self.display_width.saturating_sub(grid_width) / 2) as i32,
                (self.display_height.saturating_sub(grid_height) / 2) as i32,
            ),
            ..GridGeometry::new(self.cell_width, self.cell_height)
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Clear `display` and draw every glyph currently shown by `face`.
///
/// # Layout
///
/// ```text
/// ┌────────────────┬────────────────┐
/// │   hour tens    │   hour ones    │  ← row 0
/// ├────────────────┼────────────────┤
/// │  minute tens   │  minute ones   │  ← row 1
/// └────────────────┴────────────────┘
/// ```
///
/// A blanked or failed slot is simply left dark.
pub fn render_face<D, const P: usize>(
    display: &mut D,
    face: &ClockFace<GlyphPool<P>, FrameSurface<P>>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off)?;
    let cache = face.cache();
    cache.surface().draw(cache.store(), display)
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bigtime::clock_face::{ClockTime, FaceSettings, SlotCache};
    use core::convert::Infallible;

    const W: usize = 128;
    const H: usize = 64;

    /// In-memory 128×64 frame buffer.
    struct Frame {
        pixels: [[bool; W]; H],
    }

    impl Frame {
        fn new() -> Self {
            Self {
                pixels: [[true; W]; H],
            }
        }

        fn lit_in(&self, x0: usize, y0: usize, w: usize, h: usize) -> usize {
            self.pixels[y0..y0 + h]
                .iter()
                .map(|row| row[x0..x0 + w].iter().filter(|&&p| p).count())
                .sum()
        }
    }

    impl OriginDimensions for Frame {
        fn size(&self) -> Size {
            Size::new(W as u32, H as u32)
        }
    }

    impl DrawTarget for Frame {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if (0..W as i32).contains(&p.x) && (0..H as i32).contains(&p.y) {
                    self.pixels[p.y as usize][p.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn oled_face() -> ClockFace<GlyphPool, FrameSurface> {
        let config = DisplayConfig::default();
        ClockFace::new(SlotCache::new(
            GlyphPool::new(),
            FrameSurface::new(),
            config.grid_geometry(),
        ))
    }

    #[test]
    fn default_config_values() {
        let c = DisplayConfig::default();
        assert_eq!(c.update_frequency_hz, 10);
        assert_eq!((c.display_width, c.display_height), (128, 64));
        assert_eq!((c.cell_width, c.cell_height), (64, 32));
        assert_eq!(c.update_period_ms(), 100);
    }

    #[test]
    fn zero_frequency_polls_once_per_second() {
        let c = DisplayConfig {
            update_frequency_hz: 0,
            ..DisplayConfig::default()
        };
        assert_eq!(c.update_period_ms(), 1000);
    }

    #[test]
    fn default_grid_fills_display() {
        let g = DisplayConfig::default().grid_geometry();
        assert_eq!(g.origin, Point::new(0, 0));
        assert_eq!(g.cell_rect(3).top_left, Point::new(64, 32));
    }

    #[test]
    fn smaller_cells_are_centred() {
        let c = DisplayConfig {
            cell_width: 48,
            cell_height: 24,
            ..DisplayConfig::default()
        };
        assert_eq!(c.grid_geometry().origin, Point::new(16, 8));
    }

    #[test]
    fn render_blanks_leading_hour_digit() {
        let mut face = oled_face();
        face.on_tick(ClockTime::new(14, 5).unwrap(), true, &FaceSettings::default())
            .unwrap();

        let mut frame = Frame::new();
        render_face(&mut frame, &face).unwrap();

        // Slot 0 is blank, the other three show a digit.
        assert_eq!(frame.lit_in(0, 0, 64, 32), 0);
        assert!(frame.lit_in(64, 0, 64, 32) > 0);
        assert!(frame.lit_in(0, 32, 64, 32) > 0);
        assert!(frame.lit_in(64, 32, 64, 32) > 0);
        // Top segment of the "2" in slot 1.
        assert!(frame.pixels[4][96]);
    }

    #[test]
    fn render_after_teardown_is_dark() {
        let mut face = oled_face();
        face.on_tick(ClockTime::new(23, 59).unwrap(), true, &FaceSettings::default())
            .unwrap();
        face.teardown();

        let mut frame = Frame::new();
        render_face(&mut frame, &face).unwrap();
        assert_eq!(frame.lit_in(0, 0, W, H), 0);
    }
}
