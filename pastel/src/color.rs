// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color types accepted by the colorize functions.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://learn.microsoft.com/en-us/dotnet/api/system.consolecolor>

use strum_macros::{EnumCount, EnumIter};

use crate::{ConsoleColorMode, SgrCode};

/// A 24-bit color. Channel bounds are enforced by the `u8` width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Which rendition a color scope applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorPlane {
    Foreground,
    Background,
}

/// The 16 named console colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

/// Anything a string can be colored with. Hex strings are parsed into [`RgbColor`]
/// first since that can fail, see [`crate::parse_hex_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PastelColor {
    Rgb(RgbColor),
    Console(ConsoleColor),
}

mod rgb_color_impl {
    use super::RgbColor;

    impl RgbColor {
        #[must_use]
        pub const fn new(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

        /// Build from a packed `0xRRGGBB` value. The top byte is ignored.
        #[must_use]
        #[allow(clippy::cast_possible_truncation)]
        pub const fn from_u32(packed: u32) -> Self {
            Self {
                red: (packed >> 16) as u8,
                green: (packed >> 8) as u8,
                blue: packed as u8,
            }
        }
    }

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self { Self { red, green, blue } }
    }

    impl From<u32> for RgbColor {
        fn from(packed: u32) -> Self { Self::from_u32(packed) }
    }
}

mod console_color_impl {
    use super::{ColorPlane, ConsoleColor, RgbColor};

    impl ConsoleColor {
        /// The fixed RGB value used in [`crate::ConsoleColorMode::TrueColor`].
        #[rustfmt::skip]
        #[must_use]
        pub const fn as_rgb(&self) -> RgbColor {
            match self {
                ConsoleColor::Black       => RgbColor::from_u32(0x00_00_00),
                ConsoleColor::DarkBlue    => RgbColor::from_u32(0x00_00_8B),
                ConsoleColor::DarkGreen   => RgbColor::from_u32(0x00_64_00),
                ConsoleColor::DarkCyan    => RgbColor::from_u32(0x00_8B_8B),
                ConsoleColor::DarkRed     => RgbColor::from_u32(0x8B_00_00),
                ConsoleColor::DarkMagenta => RgbColor::from_u32(0x8B_00_8B),
                ConsoleColor::DarkYellow  => RgbColor::from_u32(0x80_80_00),
                ConsoleColor::Gray        => RgbColor::from_u32(0x80_80_80),
                ConsoleColor::DarkGray    => RgbColor::from_u32(0xA9_A9_A9),
                ConsoleColor::Blue        => RgbColor::from_u32(0x00_00_FF),
                ConsoleColor::Green       => RgbColor::from_u32(0x00_80_00),
                ConsoleColor::Cyan        => RgbColor::from_u32(0x00_FF_FF),
                ConsoleColor::Red         => RgbColor::from_u32(0xFF_00_00),
                ConsoleColor::Magenta     => RgbColor::from_u32(0xFF_00_FF),
                ConsoleColor::Yellow      => RgbColor::from_u32(0xFF_FF_00),
                ConsoleColor::White       => RgbColor::from_u32(0xFF_FF_FF),
            }
        }

        /// The native 16 color SGR code used in [`crate::ConsoleColorMode::Legacy`].
        /// Foreground codes are `30..=37` and `90..=97`, background codes are the same
        /// plus 10.
        #[rustfmt::skip]
        #[must_use]
        pub const fn palette_code(&self, plane: ColorPlane) -> u8 {
            let foreground = match self {
                ConsoleColor::Black       => 30,
                ConsoleColor::DarkRed     => 31,
                ConsoleColor::DarkGreen   => 32,
                ConsoleColor::DarkYellow  => 33,
                ConsoleColor::DarkBlue    => 34,
                ConsoleColor::DarkMagenta => 35,
                ConsoleColor::DarkCyan    => 36,
                ConsoleColor::Gray        => 37,
                ConsoleColor::DarkGray    => 90,
                ConsoleColor::Red         => 91,
                ConsoleColor::Green       => 92,
                ConsoleColor::Yellow      => 93,
                ConsoleColor::Blue        => 94,
                ConsoleColor::Magenta     => 95,
                ConsoleColor::Cyan        => 96,
                ConsoleColor::White       => 97,
            };
            match plane {
                ColorPlane::Foreground => foreground,
                ColorPlane::Background => foreground + 10,
            }
        }
    }
}

mod pastel_color_impl {
    use super::{ColorPlane, ConsoleColor, ConsoleColorMode, PastelColor, RgbColor, SgrCode};

    impl PastelColor {
        /// The start sequence for this color. Console colors depend on `mode`.
        #[must_use]
        pub fn start_code(&self, plane: ColorPlane, mode: ConsoleColorMode) -> SgrCode {
            match (self, mode) {
                (PastelColor::Rgb(rgb), _) => SgrCode::rgb(plane, rgb.red, rgb.green, rgb.blue),
                (PastelColor::Console(it), ConsoleColorMode::TrueColor) => {
                    let rgb = it.as_rgb();
                    SgrCode::rgb(plane, rgb.red, rgb.green, rgb.blue)
                }
                (PastelColor::Console(it), ConsoleColorMode::Legacy) => {
                    SgrCode::Palette(it.palette_code(plane))
                }
            }
        }
    }

    impl From<RgbColor> for PastelColor {
        fn from(it: RgbColor) -> Self { PastelColor::Rgb(it) }
    }

    impl From<(u8, u8, u8)> for PastelColor {
        fn from(it: (u8, u8, u8)) -> Self { PastelColor::Rgb(it.into()) }
    }

    impl From<ConsoleColor> for PastelColor {
        fn from(it: ConsoleColor) -> Self { PastelColor::Console(it) }
    }
}
