// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR escape sequence generation.
//!
//! Every colored string produced by this crate is built from the tokens in this
//! module. Channel values are written using the [`U8_STRINGS`] lookup table instead of
//! going through the `fmt` machinery, since [`SgrCode::write_to_buf`] runs once per
//! nested scope for every colorize call. The length of each table entry doubles as
//! the digit count, so [`SgrCode::encoded_len`] can size output buffers exactly
//! without rendering anything.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::ColorPlane;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Overline,
    SlowBlink,
    RapidBlink,
    Invert,
    Hidden,
    Strikethrough,
    /// One of the 16 color palette codes, eg: `31` (red foreground) or `104` (bright
    /// blue background). The plane is encoded in the code itself.
    Palette(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// The reset sequence. Always exactly 4 bytes long.
pub const RESET: &str = "\x1b[0m";

/// Stack storage for one rendered [`SgrCode`], sized for the longest possible
/// sequence, `\x1b[38;2;255;255;255m`.
pub type InlineSgrString = SmallString<[u8; sizing::MAX_SGR_CODE_LEN]>;

pub mod sizing {
    pub const MAX_SGR_CODE_LEN: usize = 19;
}

/// Append-only text buffer that [`SgrCode::write_to_buf`] can render into. Implemented
/// for [`String`] (output buffers) and [`InlineSgrString`] (cached start sequences).
pub trait SgrBuf {
    fn push_str(&mut self, it: &str);
    fn push(&mut self, it: char);
}

impl SgrBuf for String {
    fn push_str(&mut self, it: &str) { String::push_str(self, it); }
    fn push(&mut self, it: char) { String::push(self, it); }
}

impl SgrBuf for InlineSgrString {
    fn push_str(&mut self, it: &str) { SmallString::push_str(self, it); }
    fn push(&mut self, it: char) { SmallString::push(self, it); }
}

/// Lookup table for u8 to string conversion to avoid runtime formatting overhead.
/// Pre-computed at compile time for all possible u8 values (0-255).
const U8_STRINGS: [&str; 256] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29",
    "30", "31", "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43",
    "44", "45", "46", "47", "48", "49", "50", "51", "52", "53", "54", "55", "56", "57",
    "58", "59", "60", "61", "62", "63", "64", "65", "66", "67", "68", "69", "70", "71",
    "72", "73", "74", "75", "76", "77", "78", "79", "80", "81", "82", "83", "84", "85",
    "86", "87", "88", "89", "90", "91", "92", "93", "94", "95", "96", "97", "98", "99",
    "100", "101", "102", "103", "104", "105", "106", "107", "108", "109", "110", "111",
    "112", "113", "114", "115", "116", "117", "118", "119", "120", "121", "122", "123",
    "124", "125", "126", "127", "128", "129", "130", "131", "132", "133", "134", "135",
    "136", "137", "138", "139", "140", "141", "142", "143", "144", "145", "146", "147",
    "148", "149", "150", "151", "152", "153", "154", "155", "156", "157", "158", "159",
    "160", "161", "162", "163", "164", "165", "166", "167", "168", "169", "170", "171",
    "172", "173", "174", "175", "176", "177", "178", "179", "180", "181", "182", "183",
    "184", "185", "186", "187", "188", "189", "190", "191", "192", "193", "194", "195",
    "196", "197", "198", "199", "200", "201", "202", "203", "204", "205", "206", "207",
    "208", "209", "210", "211", "212", "213", "214", "215", "216", "217", "218", "219",
    "220", "221", "222", "223", "224", "225", "226", "227", "228", "229", "230", "231",
    "232", "233", "234", "235", "236", "237", "238", "239", "240", "241", "242", "243",
    "244", "245", "246", "247", "248", "249", "250", "251", "252", "253", "254", "255",
];

impl SgrCode {
    /// Build the 24-bit color start code for the given plane.
    #[must_use]
    pub fn rgb(plane: ColorPlane, red: u8, green: u8, blue: u8) -> Self {
        match plane {
            ColorPlane::Foreground => SgrCode::ForegroundRGB(red, green, blue),
            ColorPlane::Background => SgrCode::BackgroundRGB(red, green, blue),
        }
    }

    /// The parameter part of the sequence, ie: everything between [`CSI`] and [`SGR`]
    /// for codes that have no numeric payload.
    #[rustfmt::skip]
    fn fixed_param(self) -> Option<&'static str> {
        match self {
            SgrCode::Reset         => Some("0"),
            SgrCode::Bold          => Some("1"),
            SgrCode::Dim           => Some("2"),
            SgrCode::Italic        => Some("3"),
            SgrCode::Underline     => Some("4"),
            SgrCode::SlowBlink     => Some("5"),
            SgrCode::RapidBlink    => Some("6"),
            SgrCode::Invert        => Some("7"),
            SgrCode::Hidden        => Some("8"),
            SgrCode::Strikethrough => Some("9"),
            SgrCode::Overline      => Some("53"),
            SgrCode::Palette(_)
            | SgrCode::ForegroundRGB(..)
            | SgrCode::BackgroundRGB(..) => None,
        }
    }

    /// Exact number of bytes [`Self::write_to_buf`] appends.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        let param_len = match *self {
            SgrCode::Palette(code) => U8_STRINGS[code as usize].len(),
            SgrCode::ForegroundRGB(r, g, b) | SgrCode::BackgroundRGB(r, g, b) => {
                // "38;2;" + r + ";" + g + ";" + b
                5 + U8_STRINGS[r as usize].len()
                    + 1
                    + U8_STRINGS[g as usize].len()
                    + 1
                    + U8_STRINGS[b as usize].len()
            }
            _ => self.fixed_param().map_or(0, str::len),
        };
        CSI.len() + param_len + SGR.len()
    }

    /// Append the escape sequence to `acc` using direct string concatenation and the
    /// [`U8_STRINGS`] lookup table.
    pub fn write_to_buf(&self, acc: &mut impl SgrBuf) {
        acc.push_str(CSI);
        match *self {
            SgrCode::Palette(code) => acc.push_str(U8_STRINGS[code as usize]),
            SgrCode::ForegroundRGB(r, g, b) => {
                acc.push_str("38;2;");
                push_rgb(acc, r, g, b);
            }
            SgrCode::BackgroundRGB(r, g, b) => {
                acc.push_str("48;2;");
                push_rgb(acc, r, g, b);
            }
            _ => acc.push_str(self.fixed_param().unwrap_or_default()),
        }
        acc.push_str(SGR);
    }

    /// Render into a stack allocated string. Used when the same sequence is spliced
    /// into the output several times.
    #[must_use]
    pub fn to_inline_string(&self) -> InlineSgrString {
        let mut acc = InlineSgrString::new();
        self.write_to_buf(&mut acc);
        acc
    }
}

fn push_rgb(acc: &mut impl SgrBuf, r: u8, g: u8, b: u8) {
    acc.push_str(U8_STRINGS[r as usize]);
    acc.push(';');
    acc.push_str(U8_STRINGS[g as usize]);
    acc.push(';');
    acc.push_str(U8_STRINGS[b as usize]);
}

impl Display for SgrCode {
    /// SGR: set graphics mode command.
    /// More info:
    /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
    /// - <https://www.asciitable.com/>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = String::with_capacity(self.encoded_len());
        self.write_to_buf(&mut acc);
        f.write_str(&acc)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(SgrCode::Reset, "\x1b[0m")]
    #[test_case(SgrCode::Bold, "\x1b[1m")]
    #[test_case(SgrCode::Dim, "\x1b[2m")]
    #[test_case(SgrCode::Italic, "\x1b[3m")]
    #[test_case(SgrCode::Underline, "\x1b[4m")]
    #[test_case(SgrCode::SlowBlink, "\x1b[5m")]
    #[test_case(SgrCode::RapidBlink, "\x1b[6m")]
    #[test_case(SgrCode::Invert, "\x1b[7m")]
    #[test_case(SgrCode::Hidden, "\x1b[8m")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m")]
    #[test_case(SgrCode::Overline, "\x1b[53m")]
    #[test_case(SgrCode::Palette(31), "\x1b[31m")]
    #[test_case(SgrCode::Palette(107), "\x1b[107m")]
    #[test_case(SgrCode::ForegroundRGB(175, 215, 135), "\x1b[38;2;175;215;135m")]
    #[test_case(SgrCode::BackgroundRGB(175, 215, 135), "\x1b[48;2;175;215;135m")]
    #[test_case(SgrCode::ForegroundRGB(0, 0, 0), "\x1b[38;2;0;0;0m")]
    #[test_case(SgrCode::BackgroundRGB(255, 255, 255), "\x1b[48;2;255;255;255m")]
    fn renders_sgr_code(sgr_code: SgrCode, expected: &str) {
        assert_eq!(sgr_code.to_string(), expected);
        assert_eq!(sgr_code.encoded_len(), expected.len());
        assert_eq!(sgr_code.to_inline_string().as_str(), expected);
    }

    #[test]
    fn reset_is_four_bytes() {
        assert_eq!(RESET.len(), 4);
        assert_eq!(SgrCode::Reset.to_string(), RESET);
    }

    #[test]
    fn encoded_len_tracks_digit_count_of_every_channel_value() {
        for value in 0..=u8::MAX {
            let code = SgrCode::ForegroundRGB(value, value, value);
            assert_eq!(code.encoded_len(), code.to_string().len());
        }
    }

    #[test]
    fn longest_sequence_stays_inline() {
        for code in [
            SgrCode::ForegroundRGB(255, 255, 255),
            SgrCode::BackgroundRGB(255, 255, 255),
        ] {
            assert_eq!(code.encoded_len(), sizing::MAX_SGR_CODE_LEN);
            assert!(!code.to_inline_string().spilled());
        }
        assert!(SgrCode::Palette(107).encoded_len() < sizing::MAX_SGR_CODE_LEN);
    }

    #[test]
    fn fixed_param_only_for_codes_without_payload() {
        assert_eq!(SgrCode::Overline.fixed_param(), Some("53"));
        assert_eq!(SgrCode::Palette(31).fixed_param(), None);
        assert_eq!(SgrCode::ForegroundRGB(1, 2, 3).fixed_param(), None);
    }

    #[test]
    fn rgb_picks_plane() {
        assert_eq!(
            SgrCode::rgb(ColorPlane::Foreground, 1, 2, 3),
            SgrCode::ForegroundRGB(1, 2, 3)
        );
        assert_eq!(
            SgrCode::rgb(ColorPlane::Background, 1, 2, 3),
            SgrCode::BackgroundRGB(1, 2, 3)
        );
    }
}
