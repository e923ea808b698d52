// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use crate::{PastelError, RgbColor, pastel_error::Result};

/// Parse `[#]RRGGBB` or `[#]RGB`. Digits are case-insensitive and the leading `#` is
/// optional.
///
/// - Long form: each digit pair is one channel, `0..=255`.
/// - Short form: each digit is one channel scaled by 16, `0..=240`. So `#abc` is
///   `(160, 176, 192)`.
///
/// # Errors
///
/// Returns [`PastelError::InvalidColorFormat`] when the length without `#` is not 3
/// or 6, or when any character is not a hex digit.
///
/// ```rust
/// use r3bl_pastel::{parse_hex_color, RgbColor};
///
/// assert_eq!(parse_hex_color("#C2985D").unwrap(), RgbColor::new(194, 152, 93));
/// assert_eq!(parse_hex_color("c2985d").unwrap(), RgbColor::new(194, 152, 93));
/// assert!(parse_hex_color("12345").is_err());
/// ```
pub fn parse_hex_color(input: &str) -> Result<RgbColor> {
    let invalid = || PastelError::InvalidColorFormat {
        input: input.to_string(),
    };

    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();

    match *digits {
        [r1, r2, g1, g2, b1, b2] => Ok(RgbColor {
            red: pair(r1, r2).ok_or_else(invalid)?,
            green: pair(g1, g2).ok_or_else(invalid)?,
            blue: pair(b1, b2).ok_or_else(invalid)?,
        }),
        [r, g, b] => Ok(RgbColor {
            red: single(r).ok_or_else(invalid)?,
            green: single(g).ok_or_else(invalid)?,
            blue: single(b).ok_or_else(invalid)?,
        }),
        _ => Err(invalid()),
    }
}

const fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn pair(high: u8, low: u8) -> Option<u8> { Some((nibble(high)? << 4) | nibble(low)?) }

fn single(digit: u8) -> Option<u8> { Some(nibble(digit)? << 4) }

impl FromStr for RgbColor {
    type Err = PastelError;

    fn from_str(it: &str) -> Result<Self> { parse_hex_color(it) }
}

impl TryFrom<&str> for RgbColor {
    type Error = PastelError;

    fn try_from(it: &str) -> Result<Self> { parse_hex_color(it) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("#0328ff", (3, 40, 255))]
    #[test_case("#010101", (1, 1, 1))]
    #[test_case("#DDDDDD", (221, 221, 221))]
    #[test_case("#dDdDdD", (221, 221, 221))]
    #[test_case("#C2985D", (194, 152, 93))]
    #[test_case("#aaaaaa", (170, 170, 170))]
    #[test_case("0328ff", (3, 40, 255))]
    #[test_case("C2985D", (194, 152, 93))]
    #[test_case("000000", (0, 0, 0))]
    #[test_case("FFFFFF", (255, 255, 255))]
    fn parses_long_form(input: &str, expected: (u8, u8, u8)) {
        assert_eq!(parse_hex_color(input), Ok(RgbColor::from(expected)));
    }

    #[test_case("#abc", (160, 176, 192))]
    #[test_case("ABC", (160, 176, 192))]
    #[test_case("000", (0, 0, 0))]
    #[test_case("#fff", (240, 240, 240))]
    fn parses_short_form(input: &str, expected: (u8, u8, u8)) {
        assert_eq!(parse_hex_color(input), Ok(RgbColor::from(expected)));
    }

    #[test_case("ababab")]
    #[test_case("ABaBaB")]
    #[test_case("aBaBaB")]
    #[test_case("aBaBAB")]
    #[test_case("ABAbab")]
    #[test_case("abaBAB")]
    #[test_case("ABABAB")]
    fn case_does_not_matter(input: &str) {
        assert_eq!(parse_hex_color(input), Ok(RgbColor::new(171, 171, 171)));
    }

    #[test_case("12345")]
    #[test_case("")]
    #[test_case("#")]
    #[test_case("#1234567")]
    #[test_case("##abc")]
    #[test_case("12")]
    #[test_case("gggggg")]
    #[test_case("#12345z")]
    #[test_case("xyz")]
    #[test_case("#ab c")]
    #[test_case("ééé")]
    fn rejects_invalid_input(input: &str) {
        assert_eq!(
            parse_hex_color(input),
            Err(PastelError::InvalidColorFormat {
                input: input.to_string()
            })
        );
    }

    #[test]
    fn from_str_and_try_from_agree() {
        let parsed: RgbColor = "#010101".parse().unwrap();
        assert_eq!(parsed, RgbColor::try_from("010101").unwrap());
    }
}
