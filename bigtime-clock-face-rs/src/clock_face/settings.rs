/// Display options supplied by the settings provider.
///
/// The face never stores these; a copy is passed into every render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceSettings {
    /// Show a leading zero on the first digit ("09" instead of " 9").
    /// Default: `false`.
    pub zero_prefix: bool,
    /// 24-hour clock. Default: `false`.
    pub is_24h: bool,
}

/// A single setting update from the settings provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingChange {
    ZeroPrefix(bool),
    TwentyFourHour(bool),
}

/// How the face has to react to a settings update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Refresh {
    /// Nothing visible changed.
    None,
    /// Re-render the current time with change detection bypassed.
    Forced,
    /// The clock mode flipped; call
    /// [`ClockFace::on_hour_format_changed()`](super::ClockFace::on_hour_format_changed).
    HourFormat,
}

impl FaceSettings {
    /// Apply `change` and report the refresh it requires.
    ///
    /// Re-applying the current value returns [`Refresh::None`].
    pub fn apply(&mut self, change: SettingChange) -> Refresh {
        let before = *self;
        match change {
            SettingChange::ZeroPrefix(on) => self.zero_prefix = on,
            SettingChange::TwentyFourHour(on) => self.is_24h = on,
        }
        Self::refresh_between(&before, self)
    }

    /// Refresh needed to go from `old` to `new`. An hour-format change
    /// takes precedence since it forces a full refresh anyway.
    pub fn refresh_between(old: &FaceSettings, new: &FaceSettings) -> Refresh {
        if old.is_24h != new.is_24h {
            Refresh::HourFormat
        } else if old.zero_prefix != new.zero_prefix {
            Refresh::Forced
        } else {
            Refresh::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = FaceSettings::default();
        assert!(!s.zero_prefix);
        assert!(!s.is_24h);
    }

    #[test]
    fn zero_prefix_change_forces_refresh() {
        let mut s = FaceSettings::default();
        assert_eq!(s.apply(SettingChange::ZeroPrefix(true)), Refresh::Forced);
        assert!(s.zero_prefix);
    }

    #[test]
    fn hour_format_change() {
        let mut s = FaceSettings::default();
        assert_eq!(s.apply(SettingChange::TwentyFourHour(true)), Refresh::HourFormat);
        assert!(s.is_24h);
    }

    #[test]
    fn same_value_needs_no_refresh() {
        let mut s = FaceSettings::default();
        assert_eq!(s.apply(SettingChange::ZeroPrefix(false)), Refresh::None);
        assert_eq!(s.apply(SettingChange::TwentyFourHour(false)), Refresh::None);
    }

    #[test]
    fn hour_format_takes_precedence() {
        let old = FaceSettings::default();
        let new = FaceSettings {
            zero_prefix: true,
            is_24h: true,
        };
        assert_eq!(FaceSettings::refresh_between(&old, &new), Refresh::HourFormat);
    }
}
