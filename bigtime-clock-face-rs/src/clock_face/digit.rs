use super::error::FaceError;

/// A single decimal digit, always in `0..=9`.
///
/// Constructing a `Digit` is the only place a digit value is range-checked;
/// everything downstream of it (the slot cache, the asset store) can rely on
/// the value being valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// The digit `0`.
    pub const ZERO: Digit = Digit(0);

    /// Every digit in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Returns [`FaceError::InvalidDigit`] if `value > 9`.
    pub const fn new(value: u8) -> Result<Self, FaceError> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(FaceError::InvalidDigit)
        }
    }

    /// Numeric value of the digit.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into a ten-entry per-digit table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Split a value into its `(tens, ones)` digits.
    ///
    /// Only two digits fit on a row, so values above 99 are reduced modulo
    /// 100 first.
    pub const fn split_pair(value: u8) -> (Digit, Digit) {
        let value = value % 100;
        (Digit(value / 10), Digit(value % 10))
    }
}

impl TryFrom<u8> for Digit {
    type Error = FaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_through_nine() {
        for v in 0..=9u8 {
            assert_eq!(Digit::new(v).map(Digit::value), Ok(v));
        }
    }

    #[test]
    fn rejects_ten_and_above() {
        assert_eq!(Digit::new(10), Err(FaceError::InvalidDigit));
        assert_eq!(Digit::try_from(255), Err(FaceError::InvalidDigit));
    }

    #[test]
    fn split_pair_single_digit() {
        assert_eq!(Digit::split_pair(7), (Digit::ZERO, Digit::ALL[7]));
    }

    #[test]
    fn split_pair_two_digits() {
        assert_eq!(Digit::split_pair(59), (Digit::ALL[5], Digit::ALL[9]));
    }

    #[test]
    fn split_pair_wraps_above_99() {
        assert_eq!(Digit::split_pair(123), (Digit::ALL[2], Digit::ALL[3]));
    }
}
