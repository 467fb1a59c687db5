use super::asset::{AssetStore, DisplaySurface, GridGeometry};
use super::digit::Digit;
use super::error::FaceError;
use super::row::MAX_SLOTS;
use super::slot::Slot;
use super::GRID_SLOTS;

/// Fixed arena of digit slots backed by an [`AssetStore`].
///
/// Each screen position owns at most one loaded glyph. Assets are never
/// shared between positions: two slots showing the same digit each hold
/// their own copy, because a placed glyph can only live at one position on
/// the surface.
///
/// # Guaranteed release
///
/// Every successful load is matched by exactly one release, either when the
/// slot is cleared or replaced, or at [`teardown()`](Self::teardown). The
/// cache also tears itself down when dropped, so handles cannot leak.
///
/// Replacing a digit releases the old glyph **before** loading the new one,
/// which keeps peak memory at one asset per slot at the cost of a briefly
/// blank position.
pub struct SlotCache<S, D, const N: usize = GRID_SLOTS>
where
    S: AssetStore,
    D: DisplaySurface<S::Handle>,
{
    slots: [Slot<S::Handle>; N],
    store: S,
    surface: D,
    geometry: GridGeometry,
}

impl<S, D, const N: usize> SlotCache<S, D, N>
where
    S: AssetStore,
    D: DisplaySurface<S::Handle>,
{
    const FITS_RENDER_REPORT: () = assert!(
        N <= MAX_SLOTS,
        "slot cache capacity exceeds what a RenderReport can track"
    );

    /// Create a cache with every slot empty. Nothing is loaded.
    ///
    /// `N` must not exceed [`MAX_SLOTS`]; larger caches fail to compile.
    pub fn new(store: S, surface: D, geometry: GridGeometry) -> Self {
        let () = Self::FITS_RENDER_REPORT;
        Self {
            slots: core::array::from_fn(|_| Slot::Empty),
            store,
            surface,
            geometry,
        }
    }

    /// Number of slots in the grid.
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn slot(&self, position: usize) -> Option<&Slot<S::Handle>> {
        self.slots.get(position)
    }

    pub fn slots(&self) -> &[Slot<S::Handle>; N] {
        &self.slots
    }

    /// Digit shown at `position`, `None` if the slot is blank.
    ///
    /// Returns [`FaceError::InvalidPosition`] if `position >= N`.
    pub fn digit_at(&self, position: usize) -> Result<Option<Digit>, FaceError> {
        self.slots
            .get(position)
            .map(Slot::digit)
            .ok_or(FaceError::InvalidPosition)
    }

    /// Number of slots currently holding a loaded glyph.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the store, e.g. to adjust its budget. Loaded
    /// handles stay owned by the cache.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    /// Show `digit` at `position`.
    ///
    /// A no-op if the slot already shows `digit`. Otherwise the current
    /// glyph (if any) is detached and released, then a new one is loaded
    /// and attached at the slot's cell.
    ///
    /// # Errors
    ///
    /// * [`FaceError::InvalidPosition`] if `position >= N`.
    /// * [`FaceError::AssetUnavailable`] if the store cannot load the glyph.
    ///   The slot is left empty.
    pub fn display_digit(&mut self, position: usize, digit: Digit) -> Result<(), FaceError> {
        if self.digit_at(position)? == Some(digit) {
            return Ok(());
        }

        self.clear(position)?;

        let handle = match self.store.acquire(digit) {
            Ok(handle) => handle,
            Err(reason) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "slot {}: glyph {} unavailable ({})",
                    position,
                    digit.value(),
                    reason
                );
                return Err(FaceError::AssetUnavailable(reason));
            }
        };

        self.surface
            .attach(&handle, self.geometry.cell_rect(position));
        self.slots[position] = Slot::Occupied { digit, handle };

        #[cfg(feature = "defmt")]
        defmt::trace!("slot {}: showing {}", position, digit.value());
        Ok(())
    }

    /// Blank `position`, releasing its glyph. Safe on an empty slot.
    ///
    /// Returns [`FaceError::InvalidPosition`] if `position >= N`.
    pub fn clear(&mut self, position: usize) -> Result<(), FaceError> {
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(FaceError::InvalidPosition)?;

        if let Some((_digit, handle)) = slot.take() {
            self.surface.detach(&handle);
            self.store.release(handle);
            #[cfg(feature = "defmt")]
            defmt::trace!("slot {}: released {}", position, _digit.value());
        }
        Ok(())
    }

    /// Blank every slot and release every loaded glyph.
    ///
    /// Idempotent; also run automatically when the cache is dropped.
    pub fn teardown(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some((_, handle)) = slot.take() {
                self.surface.detach(&handle);
                self.store.release(handle);
            }
        }
    }
}

impl<S, D, const N: usize> Drop for SlotCache<S, D, N>
where
    S: AssetStore,
    D: DisplaySurface<S::Handle>,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
