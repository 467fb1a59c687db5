use core::fmt;

/// Reason an [`AssetStore`](super::AssetStore) could not produce a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetUnavailable {
    /// Every asset buffer the store owns is already loaded.
    Exhausted,
    /// The store has no asset for the requested digit.
    Missing,
}

/// Errors raised by the slot cache and the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    /// Slot position is outside the grid (must be < the cache capacity).
    InvalidPosition,
    /// Digit value is outside 0–9.
    InvalidDigit,
    /// Hour or minute is out of range (must be < 24 and < 60).
    InvalidTime,
    /// The asset store could not load the glyph. The slot is left blank.
    AssetUnavailable(AssetUnavailable),
}

impl From<AssetUnavailable> for FaceError {
    fn from(reason: AssetUnavailable) -> Self {
        FaceError::AssetUnavailable(reason)
    }
}

impl fmt::Display for AssetUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetUnavailable::Exhausted => write!(f, "asset store exhausted"),
            AssetUnavailable::Missing => write!(f, "asset missing"),
        }
    }
}

impl fmt::Display for FaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FaceError::InvalidPosition => write!(f, "Invalid slot position"),
            FaceError::InvalidDigit => write!(f, "Invalid digit (must be 0-9)"),
            FaceError::InvalidTime => write!(f, "Invalid time of day"),
            FaceError::AssetUnavailable(reason) => write!(f, "Asset unavailable: {}", reason),
        }
    }
}
