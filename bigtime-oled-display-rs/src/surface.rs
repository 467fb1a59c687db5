//! Frame surface: where loaded glyphs sit on the OLED.

use embedded_graphics::{image::Image, pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};
use heapless::Vec;

use bigtime::clock_face::DisplaySurface;

use crate::glyph::{GlyphHandle, GlyphPool, GLYPH_HEIGHT, GLYPH_POOL_SIZE, GLYPH_WIDTH};

/// One attached glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Pool buffer index of the glyph.
    pub glyph: usize,
    /// Grid cell the glyph was attached to.
    pub area: Rectangle,
}

impl Placement {
    /// Top-left corner of the glyph, centred in its cell. Glyphs larger
    /// than the cell are pinned to the cell's top-left corner.
    pub fn glyph_origin(&self) -> Point {
        let dx = self.area.size.width.saturating_sub(GLYPH_WIDTH) / 2;
        let dy = self.area.size.height.saturating_sub(GLYPH_HEIGHT) / 2;
        self.area.top_left + Point::new(dx as i32, dy as i32)
    }
}

/// Records attached glyphs and draws them on demand.
///
/// The surface only remembers *where* each glyph goes; pixel data stays in
/// the [`GlyphPool`]. Attach and detach set a dirty flag that the update
/// task uses to skip redundant I2C flushes.
pub struct FrameSurface<const N: usize = GLYPH_POOL_SIZE> {
    placements: Vec<Placement, N>,
    dirty: bool,
}

impl<const N: usize> Default for FrameSurface<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameSurface<N> {
    /// Empty surface. Starts dirty so the first frame is always drawn.
    pub const fn new() -> Self {
        Self {
            placements: Vec::new(),
            dirty: true,
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Return the dirty flag and clear it.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    /// Draw every attached glyph from `pool` onto `target`.
    ///
    /// Does not clear `target` first; see
    /// [`render_face`](crate::layout::render_face).
    pub fn draw<D>(&self, pool: &GlyphPool<N>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        for placement in &self.placements {
            if let Some(raw) = pool.image(placement.glyph) {
                Image::new(&raw, placement.glyph_origin()).draw(target)?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> DisplaySurface<GlyphHandle> for FrameSurface<N> {
    fn attach(&mut self, handle: &GlyphHandle, area: Rectangle) {
        let placement = Placement {
            glyph: handle.index(),
            area,
        };
        if let Some(existing) = self
            .placements
            .iter_mut()
            .find(|p| p.glyph == handle.index())
        {
            *existing = placement;
        } else if self.placements.push(placement).is_err() {
            // More handles than pool buffers; cannot happen with a pool of
            // the same size.
            #[cfg(feature = "defmt")]
            defmt::error!("surface full, glyph {} not attached", handle.index());
            return;
        }
        self.dirty = true;
    }

    fn detach(&mut self, handle: &GlyphHandle) {
        let before = self.placements.len();
        self.placements.retain(|p| p.glyph != handle.index());
        if self.placements.len() != before {
            self.dirty = true;
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bigtime::clock_face::{AssetStore, Digit};

    fn cell(x: i32, y: i32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(GLYPH_WIDTH, GLYPH_HEIGHT))
    }

    #[test]
    fn new_surface_is_dirty_and_empty() {
        let mut surface: FrameSurface<2> = FrameSurface::new();
        assert!(surface.placements().is_empty());
        assert!(surface.take_dirty());
        assert!(!surface.is_dirty());
    }

    #[test]
    fn attach_and_detach_track_placements() {
        let mut pool: GlyphPool<2> = GlyphPool::new();
        let mut surface: FrameSurface<2> = FrameSurface::new();
        surface.take_dirty();

        let h = pool.acquire(Digit::new(4).unwrap()).unwrap();
        surface.attach(&h, cell(64, 32));
        assert_eq!(
            surface.placements(),
            &[Placement {
                glyph: h.index(),
                area: cell(64, 32)
            }]
        );
        assert!(surface.take_dirty());

        surface.detach(&h);
        assert!(surface.placements().is_empty());
        assert!(surface.take_dirty());
    }

    #[test]
    fn detach_unknown_handle_keeps_clean() {
        let mut pool: GlyphPool<2> = GlyphPool::new();
        let mut surface: FrameSurface<2> = FrameSurface::new();
        surface.take_dirty();

        let h = pool.acquire(Digit::ZERO).unwrap();
        surface.detach(&h);
        assert!(!surface.is_dirty());
    }

    #[test]
    fn reattach_moves_glyph() {
        let mut pool: GlyphPool<2> = GlyphPool::new();
        let mut surface: FrameSurface<2> = FrameSurface::new();
        let h = pool.acquire(Digit::ZERO).unwrap();
        surface.attach(&h, cell(0, 0));
        surface.attach(&h, cell(0, 32));
        assert_eq!(surface.placements().len(), 1);
        assert_eq!(surface.placements()[0].area, cell(0, 32));
    }

    #[test]
    fn glyph_centred_in_larger_cell() {
        let p = Placement {
            glyph: 0,
            area: Rectangle::new(Point::new(72, 74), Size::new(72, 74)),
        };
        assert_eq!(p.glyph_origin(), Point::new(76, 95));
    }

    #[test]
    fn glyph_pinned_in_smaller_cell() {
        let p = Placement {
            glyph: 0,
            area: Rectangle::new(Point::new(10, 10), Size::new(32, 16)),
        };
        assert_eq!(p.glyph_origin(), Point::new(10, 10));
    }
}
