//! Four-band resistor colour code
//!
//! A four-band resistor carries two significant digits, a power-of-ten
//! multiplier and a tolerance band. Only the first three are derived here;
//! the meter assumes 5% parts.

/// Lowest resistance the meter reports a code for
pub const MIN_OHMS: f32 = 510.0;

/// Highest resistance the meter reports a code for
pub const MAX_OHMS: f32 = 100_000.0;

/// Colour-code errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandError {
    /// Resistance outside [`MIN_OHMS`]..=[`MAX_OHMS`]
    OutOfRange,
}

/// Colour of one band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandColor {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Violet = 7,
    Grey = 8,
    White = 9,
}

impl BandColor {
    /// Colour for a digit (0-9)
    pub const fn from_digit(digit: u8) -> Option<Self> {
        Some(match digit {
            0 => Self::Black,
            1 => Self::Brown,
            2 => Self::Red,
            3 => Self::Orange,
            4 => Self::Yellow,
            5 => Self::Green,
            6 => Self::Blue,
            7 => Self::Violet,
            8 => Self::Grey,
            9 => Self::White,
            _ => return None,
        })
    }

    /// Digit this colour stands for
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Brown => "Brown",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Violet => "Violet",
            Self::Grey => "Grey",
            Self::White => "White",
        }
    }

    /// Normalized (r, g, b) for showing the band on an RGB LED
    pub const fn rgb(self) -> (f32, f32, f32) {
        match self {
            Self::Black => (0.0, 0.0, 0.0),
            Self::Brown => (0.6, 0.25, 0.0),
            Self::Red => (1.0, 0.0, 0.0),
            Self::Orange => (1.0, 0.4, 0.0),
            Self::Yellow => (1.0, 1.0, 0.0),
            Self::Green => (0.0, 1.0, 0.0),
            Self::Blue => (0.0, 0.0, 1.0),
            Self::Violet => (0.5, 0.0, 1.0),
            Self::Grey => (0.4, 0.4, 0.4),
            Self::White => (1.0, 1.0, 1.0),
        }
    }
}

/// Digits and multiplier of a four-band code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BandCode {
    /// First significant digit
    pub digit1: u8,
    /// Second significant digit
    pub digit2: u8,
    /// Power of ten
    pub multiplier: u8,
}

impl BandCode {
    /// Band colours in reading order
    pub fn colors(&self) -> [BandColor; 3] {
        [self.digit1, self.digit2, self.multiplier].map(|d| {
            // Digits come from `four_band` and are always 0-9
            BandColor::from_digit(d).unwrap_or(BandColor::Black)
        })
    }

    /// Resistance the code stands for, in ohms
    pub fn nominal_ohms(&self) -> u32 {
        let significant = u32::from(self.digit1) * 10 + u32::from(self.digit2);
        significant * 10u32.pow(u32::from(self.multiplier))
    }
}

/// Code for a measured resistance
///
/// Divides by ten until two digits remain; the digits are truncated, not
/// rounded, and the number of divisions is the multiplier.
pub fn four_band(ohms: f32) -> Result<BandCode, BandError> {
    if !(MIN_OHMS..=MAX_OHMS).contains(&ohms) {
        return Err(BandError::OutOfRange);
    }

    let mut value = ohms;
    let mut multiplier = 0;
    while value >= 100.0 {
        value /= 10.0;
        multiplier += 1;
    }

    let significant = value as u8;
    Ok(BandCode {
        digit1: significant / 10,
        digit2: significant % 10,
        multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_common_values() {
        let code = four_band(4700.0).unwrap();
        assert_eq!(
            code,
            BandCode {
                digit1: 4,
                digit2: 7,
                multiplier: 2
            }
        );
        assert_eq!(
            code.colors(),
            [BandColor::Yellow, BandColor::Violet, BandColor::Red]
        );

        assert_eq!(four_band(10_000.0).unwrap().nominal_ohms(), 10_000);
        assert_eq!(
            four_band(510.0).unwrap().colors()[..2],
            [BandColor::Green, BandColor::Brown]
        );
    }

    #[test]
    fn test_range_limits() {
        assert!(four_band(MIN_OHMS).is_ok());
        assert_eq!(
            four_band(MAX_OHMS).unwrap(),
            BandCode {
                digit1: 1,
                digit2: 0,
                multiplier: 4
            }
        );
        assert_eq!(four_band(509.9), Err(BandError::OutOfRange));
        assert_eq!(four_band(100_001.0), Err(BandError::OutOfRange));
        assert_eq!(four_band(f32::NAN), Err(BandError::OutOfRange));
    }

    #[test]
    fn test_truncates_digits() {
        assert_eq!(four_band(4_799.0).unwrap().nominal_ohms(), 4_700);
    }

    #[test]
    fn test_digit_round_trip() {
        for d in 0..10 {
            let color = BandColor::from_digit(d).unwrap();
            assert_eq!(color.digit(), d);
            assert!(!color.name().is_empty());
        }
        assert_eq!(BandColor::from_digit(10), None);
    }

    proptest! {
        #[test]
        fn prop_nominal_brackets_value(ohms in MIN_OHMS..=MAX_OHMS) {
            let code = four_band(ohms).unwrap();
            let nominal = code.nominal_ohms() as f32;
            let step = 10u32.pow(u32::from(code.multiplier)) as f32;

            prop_assert!(code.digit1 >= 1 && code.digit1 <= 9);
            prop_assert!(code.digit2 <= 9);
            prop_assert!(nominal <= ohms * 1.0001);
            prop_assert!(ohms < (nominal + step) * 1.0001);
        }
    }
}
