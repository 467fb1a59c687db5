//! Collaborator interfaces: where glyphs come from and where they go.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use super::digit::Digit;
use super::error::AssetUnavailable;
use super::row::COLUMNS_PER_ROW;

/// Source of loadable digit glyphs.
///
/// A handle is a loaded asset. Handles are moved into
/// [`release()`](Self::release), so releasing the same handle twice does not
/// compile. Implementations do not need to be `Clone`-safe and should not
/// make their handles `Clone`.
pub trait AssetStore {
    /// Opaque loaded asset.
    type Handle;

    /// Load the glyph for `digit`.
    ///
    /// # Errors
    ///
    /// [`AssetUnavailable::Exhausted`] if no memory is left for another
    /// asset, [`AssetUnavailable::Missing`] if the store has no glyph for
    /// `digit`.
    fn acquire(&mut self, digit: Digit) -> Result<Self::Handle, AssetUnavailable>;

    /// Unload an asset and reclaim its memory.
    fn release(&mut self, handle: Self::Handle);
}

/// Places loaded glyphs on screen.
///
/// A handle is attached to at most one rectangle at a time; the slot cache
/// always detaches a handle before it is released.
pub trait DisplaySurface<H> {
    /// Show `handle` in `area`.
    fn attach(&mut self, handle: &H, area: Rectangle);

    /// Remove `handle` from the screen.
    fn detach(&mut self, handle: &H);
}

/// Screen geometry of the slot grid.
///
/// Slots are numbered row-major, [`COLUMNS_PER_ROW`] to a row, matching
/// the positions [`render_row`](super::render_row) writes:
///
/// ```text
/// ┌───────┬───────┐
/// │   0   │   1   │
/// ├───────┼───────┤
/// │   2   │   3   │
/// └───────┴───────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridGeometry {
    /// Top-left corner of slot 0.
    pub origin: Point,
    /// Cell width in pixels. Default: 72.
    pub cell_width: u32,
    /// Cell height in pixels. Default: 74.
    pub cell_height: u32,
}

impl Default for GridGeometry {
    /// Reference watch layout: four 72×74 quarters of a 144×168 screen.
    fn default() -> Self {
        Self {
            origin: Point::zero(),
            cell_width: 72,
            cell_height: 74,
        }
    }
}

impl GridGeometry {
    /// Grid of `cell_width × cell_height` cells at the origin.
    pub const fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            origin: Point::new(0, 0),
            cell_width,
            cell_height,
        }
    }

    /// Screen rectangle of the slot at `position`.
    ///
    /// `origin + ((position % COLUMNS_PER_ROW) * cell_width, (position / COLUMNS_PER_ROW) * cell_height)`.
    pub fn cell_rect(&self, position: usize) -> Rectangle {
        let column = (position % COLUMNS_PER_ROW) as u32;
        let row = (position / COLUMNS_PER_ROW) as u32;
        let top_left = self.origin
            + Point::new(
                (column * self.cell_width) as i32,
                (row * self.cell_height) as i32,
            );
        Rectangle::new(top_left, Size::new(self.cell_width, self.cell_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_matches_reference_layout() {
        let g = GridGeometry::default();
        assert_eq!(g.cell_rect(0).top_left, Point::new(0, 0));
        assert_eq!(g.cell_rect(1).top_left, Point::new(72, 0));
        assert_eq!(g.cell_rect(2).top_left, Point::new(0, 74));
        assert_eq!(g.cell_rect(3).top_left, Point::new(72, 74));
        assert_eq!(g.cell_rect(3).size, Size::new(72, 74));
    }

    #[test]
    fn origin_offsets_every_cell() {
        let g = GridGeometry {
            origin: Point::new(4, 10),
            ..GridGeometry::new(64, 32)
        };
        assert_eq!(g.cell_rect(0).top_left, Point::new(4, 10));
        assert_eq!(g.cell_rect(3).top_left, Point::new(68, 42));
    }

    #[test]
    fn cells_follow_row_layout() {
        let g = GridGeometry::new(10, 20);
        for row in 0..3usize {
            for column in 0..COLUMNS_PER_ROW {
                let rect = g.cell_rect(row * COLUMNS_PER_ROW + column);
                assert_eq!(
                    rect.top_left,
                    Point::new(column as i32 * 10, row as i32 * 20)
                );
            }
        }
    }
}
