use super::digit::Digit;

/// One screen position of the digit grid.
///
/// A slot is either empty or holds a loaded glyph together with the digit it
/// shows; a digit without a handle (or the reverse) cannot be represented.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot<H> {
    /// Nothing loaded; the position is blank.
    Empty,
    /// A glyph for `digit` is loaded and attached to the surface.
    Occupied {
        /// Digit currently shown.
        digit: Digit,
        /// Loaded asset owned by the slot cache.
        handle: H,
    },
}

impl<H> Default for Slot<H> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<H> Slot<H> {
    /// Returns `true` if a glyph is loaded.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }

    /// Digit shown in this slot, or `None` if blank.
    pub fn digit(&self) -> Option<Digit> {
        match self {
            Slot::Occupied { digit, .. } => Some(*digit),
            Slot::Empty => None,
        }
    }

    /// Loaded asset, or `None` if blank.
    pub fn handle(&self) -> Option<&H> {
        match self {
            Slot::Occupied { handle, .. } => Some(handle),
            Slot::Empty => None,
        }
    }

    /// Empty the slot, handing back whatever it held.
    pub(crate) fn take(&mut self) -> Option<(Digit, H)> {
        match core::mem::replace(self, Slot::Empty) {
            Slot::Occupied { digit, handle } => Some((digit, handle)),
            Slot::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let slot: Slot<u32> = Slot::default();
        assert!(!slot.is_occupied());
        assert!(slot.digit().is_none());
        assert!(slot.handle().is_none());
    }

    #[test]
    fn take_empties_occupied_slot() {
        let mut slot = Slot::Occupied {
            digit: Digit::ALL[4],
            handle: 17u32,
        };
        assert_eq!(slot.take(), Some((Digit::ALL[4], 17)));
        assert!(!slot.is_occupied());
        assert_eq!(slot.take(), None);
    }
}
