use super::error::FaceError;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Time of day at minute resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Returns [`FaceError::InvalidTime`] unless `hour < 24` and `minute < 60`.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, FaceError> {
        if hour < 24 && minute < 60 {
            Ok(Self { hour, minute })
        } else {
            Err(FaceError::InvalidTime)
        }
    }

    /// Time `minutes` after midnight, wrapping at 24 hours.
    pub const fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    /// Hour in 24-hour form (0–23).
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn minutes_since_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

/// Source of the current time of day.
pub trait WallClock {
    fn now(&mut self) -> ClockTime;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_range() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert_eq!(ClockTime::new(24, 0), Err(FaceError::InvalidTime));
        assert_eq!(ClockTime::new(0, 60), Err(FaceError::InvalidTime));
    }

    #[test]
    fn from_minutes_wraps_at_midnight() {
        let t = ClockTime::from_minutes(MINUTES_PER_DAY + 65);
        assert_eq!((t.hour(), t.minute()), (1, 5));
    }

    #[test]
    fn minutes_since_midnight_round_trip() {
        let t = ClockTime::new(14, 5).unwrap();
        assert_eq!(t.minutes_since_midnight(), 845);
        assert_eq!(ClockTime::from_minutes(845), t);
    }
}
