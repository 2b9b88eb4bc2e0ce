use std::str::FromStr;

use thiserror::Error;

use super::Color;
use crate::palette;

/// An error returned when parsing a [`Color`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input was empty or only whitespace.
    #[error("empty color string")]
    Empty,
    /// A hex color did not have 3, 4, 6 or 8 digits.
    #[error("invalid hex color length {0}, expected 3, 4, 6 or 8 digits")]
    InvalidLength(usize),
    /// A hex color contained a character that is not a hex digit.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
    /// The input was not a hex color and did not name a palette entry.
    #[error("unknown color name {0:?}")]
    UnknownName(String),
}

/// Parses a color from either a hex literal or a palette name.
///
/// Hex literals start with `#` or `0x` and come in the `RGB`, `RGBA`,
/// `RRGGBB` and `RRGGBBAA` forms. Anything else is looked up in the
/// [`palette`](crate::palette).
///
/// ```
/// # use pufferfish_color::Color;
/// assert_eq!("#6495ed".parse::<Color>(), Ok(Color::CORNFLOWER_BLUE));
/// assert_eq!("Cornflower Blue".parse::<Color>(), Ok(Color::CORNFLOWER_BLUE));
/// ```
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }

        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"));
        match hex {
            Some(digits) => parse_hex(digits),
            None => palette::lookup(s)
                .map(|named| named.color)
                .ok_or_else(|| ParseColorError::UnknownName(s.to_owned())),
        }
    }
}

fn parse_hex(digits: &str) -> Result<Color, ParseColorError> {
    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ParseColorError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let [r, g, b, a] = match *nibbles.as_slice() {
        [r, g, b] => [r * 17, g * 17, b * 17, 255],
        [r, g, b, a] => [r * 17, g * 17, b * 17, a * 17],
        [r1, r0, g1, g0, b1, b0] => [r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, 255],
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            [r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, a1 << 4 | a0]
        }
        _ => return Err(ParseColorError::InvalidLength(nibbles.len())),
    };
    Ok(Color::from_bytes(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!("#FF0000".parse::<Color>(), Ok(Color::RED));
        assert_eq!("#ff0000ff".parse::<Color>(), Ok(Color::RED));
        assert_eq!("0x6495EDFF".parse::<Color>(), Ok(Color::CORNFLOWER_BLUE));
        assert_eq!("#f00".parse::<Color>(), Ok(Color::RED));
        assert_eq!("#0000".parse::<Color>(), Ok(Color::TRANSPARENT));
        assert_eq!(
            "#12345678".parse::<Color>(),
            Ok(Color::from_packed(0x12345678))
        );
    }

    #[test]
    fn names() {
        assert_eq!("  rebecca_purple ".parse::<Color>(), Ok(Color::REBECCA_PURPLE));
        assert_eq!("WebGray".parse::<Color>(), Ok(Color::WEB_GRAY));
        assert_eq!(
            "octarine".parse::<Color>(),
            Err(ParseColorError::UnknownName("octarine".to_owned()))
        );
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Color>(), Err(ParseColorError::Empty));
        assert_eq!("   ".parse::<Color>(), Err(ParseColorError::Empty));
        assert_eq!("#12345".parse::<Color>(), Err(ParseColorError::InvalidLength(5)));
        assert_eq!("#".parse::<Color>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!("#12g456".parse::<Color>(), Err(ParseColorError::InvalidDigit('g')));
        assert_eq!(
            ParseColorError::InvalidDigit('z').to_string(),
            "invalid hex digit 'z'"
        );
    }
}
