/// Hour as shown on the face.
///
/// In 24-hour mode the hour is returned unchanged. In 12-hour mode it is
/// reduced modulo 12 and `0` becomes `12`, so midnight and noon both read
/// "12".
pub const fn display_hour(hour: u8, is_24h: bool) -> u8 {
    if is_24h {
        return hour;
    }
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_is_always_1_to_12() {
        for hour in 0..24u8 {
            let shown = display_hour(hour, false);
            assert!((1..=12).contains(&shown), "hour {} -> {}", hour, shown);
        }
    }

    #[test]
    fn midnight_and_noon_read_twelve() {
        assert_eq!(display_hour(0, false), 12);
        assert_eq!(display_hour(12, false), 12);
    }

    #[test]
    fn afternoon_wraps() {
        assert_eq!(display_hour(13, false), 1);
        assert_eq!(display_hour(23, false), 11);
    }

    #[test]
    fn twenty_four_hour_is_identity() {
        for hour in 0..24u8 {
            assert_eq!(display_hour(hour, true), hour);
        }
    }
}
