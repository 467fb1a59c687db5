//! Two-digit rows: one 0–99 value spread over a pair of slots.

use super::asset::{AssetStore, DisplaySurface};
use super::cache::SlotCache;
use super::digit::Digit;
use super::error::FaceError;

/// Number of digit columns in each row.
pub const COLUMNS_PER_ROW: usize = 2;

/// Largest slot count a [`RenderReport`] can track (one bit per position).
pub const MAX_SLOTS: usize = u32::BITS as usize;

/// Mask bit for `position`; zero for positions a report cannot hold.
fn bit(position: usize) -> u32 {
    u32::try_from(position)
        .ok()
        .and_then(|shift| 1u32.checked_shl(shift))
        .unwrap_or(0)
}

/// Outcome of a render pass over one or more rows.
///
/// Asset failures do not abort a pass; they are collected here so the
/// caller can log them. Bit `n` of each mask refers to slot position `n`,
/// so a report covers at most [`MAX_SLOTS`] positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderReport {
    updated: u32,
    unavailable: u32,
}

impl RenderReport {
    /// Positions whose glyph was (re)loaded.
    pub fn updated(&self) -> u32 {
        self.updated
    }

    /// Positions left blank because the glyph could not be loaded.
    pub fn unavailable(&self) -> u32 {
        self.unavailable
    }

    pub fn was_updated(&self, position: usize) -> bool {
        self.updated & bit(position) != 0
    }

    pub fn is_unavailable(&self, position: usize) -> bool {
        self.unavailable & bit(position) != 0
    }

    /// `true` if no glyph failed to load.
    pub fn is_complete(&self) -> bool {
        self.unavailable == 0
    }

    /// `true` if any glyph was loaded or failed to load.
    pub fn any_changed(&self) -> bool {
        self.updated != 0 || self.unavailable != 0
    }

    /// Combine the results of two passes.
    pub fn merge(self, other: RenderReport) -> RenderReport {
        RenderReport {
            updated: self.updated | other.updated,
            unavailable: self.unavailable | other.unavailable,
        }
    }

    fn mark_updated(&mut self, position: usize) {
        self.updated |= bit(position);
        self.unavailable &= !bit(position);
    }

    fn mark_unavailable(&mut self, position: usize) {
        self.unavailable |= bit(position);
        self.updated &= !bit(position);
    }
}

/// `true` when the digit at `position` should be left blank: the very first
/// slot of the grid showing a leading zero with the zero prefix disabled.
/// Leading zeros on any other row are always shown.
pub fn is_blanked(position: usize, digit: Digit, zero_prefix: bool) -> bool {
    position == 0 && digit.is_zero() && !zero_prefix
}

/// Show `value` (0–99) on row `row` of the grid.
///
/// Columns are processed ones first. A column is rewritten when `force` is
/// set or its digit differs from what the slot shows; rewriting clears the
/// slot and loads the new glyph, unless [`is_blanked`] says the slot stays
/// empty. Values above 99 are reduced modulo 100.
///
/// # Errors
///
/// [`FaceError::InvalidPosition`] if the row does not fit in the cache.
/// Glyphs that fail to load are reported in the returned
/// [`RenderReport`] rather than as an error, and do not stop the other
/// column from updating.
pub fn render_row<S, D, const N: usize>(
    cache: &mut SlotCache<S, D, N>,
    value: u8,
    row: usize,
    force: bool,
    zero_prefix: bool,
) -> Result<RenderReport, FaceError>
where
    S: AssetStore,
    D: DisplaySurface<S::Handle>,
{
    let (tens, ones) = Digit::split_pair(value);
    let digits = [tens, ones];
    let mut report = RenderReport::default();

    for column in (0..COLUMNS_PER_ROW).rev() {
        let position = row * COLUMNS_PER_ROW + column;
        let digit = digits[column];

        if !force && cache.digit_at(position)? == Some(digit) {
            continue;
        }

        cache.clear(position)?;
        if is_blanked(position, digit, zero_prefix) {
            continue;
        }

        match cache.display_digit(position, digit) {
            Ok(()) => report.mark_updated(position),
            Err(FaceError::AssetUnavailable(_)) => report.mark_unavailable(position),
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

// ── Unit Tests ───────────────────────────────────────────────────────
