// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use crate::{ColorPlane, Decoration, PastelColor, RgbColor, colorize, colorize_hex,
            gradient, pastel_error::Result};

/// Method syntax for the colorize functions, available on strings and on the
/// primitive types that have a [`std::fmt::Display`] impl.
///
/// Primitives are colored using their plain `Display` output. For any other number
/// format, format first and color the string, eg: `format!("{v:.4e}").pastel(..)`.
///
/// ```rust
/// use r3bl_pastel::{enable, ConsoleColor, Pastel};
///
/// enable();
/// let it = "[TEST1]".pastel((255, 255, 0)).pastel_bg((220, 20, 60));
/// assert_eq!(
///     it,
///     "\x1b[48;2;220;20;60m\x1b[38;2;255;255;0m[TEST1]\x1b[0m"
/// );
///
/// let answer = 42_u32.pastel(ConsoleColor::Green);
/// assert!(answer.contains("42"));
/// ```
pub trait Pastel {
    /// The text that gets colored.
    fn pastel_text(&self) -> Cow<'_, str>;

    fn pastel(&self, color: impl Into<PastelColor>) -> String {
        colorize(&self.pastel_text(), color, ColorPlane::Foreground)
    }

    fn pastel_bg(&self, color: impl Into<PastelColor>) -> String {
        colorize(&self.pastel_text(), color, ColorPlane::Background)
    }

    /// # Errors
    ///
    /// See [`crate::colorize_hex`].
    fn pastel_hex(&self, hex: &str) -> Result<String> {
        colorize_hex(&self.pastel_text(), hex, ColorPlane::Foreground)
    }

    /// # Errors
    ///
    /// See [`crate::colorize_hex`].
    fn pastel_bg_hex(&self, hex: &str) -> Result<String> {
        colorize_hex(&self.pastel_text(), hex, ColorPlane::Background)
    }

    fn decorate(&self, decoration: Decoration) -> String {
        crate::decorate(&self.pastel_text(), decoration)
    }

    /// # Errors
    ///
    /// See [`crate::gradient`].
    fn pastel_gradient(&self, stops: &[RgbColor]) -> Result<String> {
        gradient(&self.pastel_text(), stops, ColorPlane::Foreground)
    }

    /// # Errors
    ///
    /// See [`crate::gradient`].
    fn pastel_bg_gradient(&self, stops: &[RgbColor]) -> Result<String> {
        gradient(&self.pastel_text(), stops, ColorPlane::Background)
    }
}

impl Pastel for str {
    fn pastel_text(&self) -> Cow<'_, str> { Cow::Borrowed(self) }
}

impl Pastel for String {
    fn pastel_text(&self) -> Cow<'_, str> { Cow::Borrowed(self.as_str()) }
}

impl Pastel for Cow<'_, str> {
    fn pastel_text(&self) -> Cow<'_, str> { Cow::Borrowed(self.as_ref()) }
}

macro_rules! impl_pastel_for_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Pastel for $ty {
                fn pastel_text(&self) -> Cow<'_, str> { Cow::Owned(self.to_string()) }
            }
        )*
    };
}

impl_pastel_for_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{ConsoleColor, ConsoleColorMode, PastelError, global_color_output};

    const YELLOW: (u8, u8, u8) = (255, 255, 0);
    const CRIMSON: (u8, u8, u8) = (220, 20, 60);
    const DEEP_PINK: (u8, u8, u8) = (255, 20, 147);

    #[test]
    #[serial]
    fn fg_inside_bg_shares_one_reset() {
        global_color_output::enable();
        assert_eq!(
            "[TEST1]".pastel(YELLOW).pastel_bg(CRIMSON),
            "\x1b[48;2;220;20;60m\x1b[38;2;255;255;0m[TEST1]\x1b[0m"
        );
    }

    #[test]
    #[serial]
    fn labelled_fragment_inside_outer_background() {
        global_color_output::enable();
        let label = "[TEST1]".pastel(YELLOW).pastel_bg(CRIMSON);
        let line = format!("{label} message").pastel_bg(DEEP_PINK);
        assert_eq!(
            line,
            "\x1b[48;2;255;20;147m\
             \x1b[48;2;220;20;60m\x1b[38;2;255;255;0m[TEST1]\x1b[0m\
             \x1b[48;2;255;20;147m message\x1b[0m"
        );
    }

    #[test]
    #[serial]
    fn primitives_are_formatted_with_display() {
        global_color_output::enable();
        global_color_output::set_console_color_mode(ConsoleColorMode::Legacy);
        assert_eq!(42_i32.pastel(ConsoleColor::Green), "\x1b[92m42\x1b[0m");
        assert_eq!(true.pastel(ConsoleColor::Red), "\x1b[91mtrue\x1b[0m");
        assert_eq!('x'.pastel_bg(ConsoleColor::Black), "\x1b[40mx\x1b[0m");
        assert_eq!(1.5_f64.pastel(ConsoleColor::Cyan), "\x1b[96m1.5\x1b[0m");
        assert_eq!((-7_i64).pastel(ConsoleColor::White), "\x1b[97m-7\x1b[0m");
        global_color_output::set_console_color_mode(ConsoleColorMode::TrueColor);
    }

    #[test]
    #[serial]
    fn custom_number_format_goes_through_format() {
        global_color_output::enable();
        let value = 1234.5_f64;
        assert_eq!(
            format!("{value:.4e}").pastel(YELLOW),
            "\x1b[38;2;255;255;0m1.2345e3\x1b[0m"
        );
        assert_eq!(
            format!("{value:08.2}").pastel_bg(CRIMSON),
            "\x1b[48;2;220;20;60m01234.50\x1b[0m"
        );
    }

    #[test]
    #[serial]
    fn string_and_cow_match_str() {
        global_color_output::enable();
        let expected = "abc".pastel(YELLOW);
        assert_eq!(String::from("abc").pastel(YELLOW), expected);
        assert_eq!(Cow::Borrowed("abc").pastel(YELLOW), expected);
    }

    #[test]
    #[serial]
    fn hex_methods() {
        global_color_output::enable();
        assert_eq!("a".pastel_hex("#FFFF00"), Ok("a".pastel(YELLOW)));
        assert_eq!("a".pastel_bg_hex("f00"), Ok("\x1b[48;2;240;0;0ma\x1b[0m".to_string()));
        assert_eq!(
            "a".pastel_hex("#GG0000"),
            Err(PastelError::InvalidColorFormat {
                input: "#GG0000".into()
            })
        );
    }

    #[test]
    #[serial]
    fn decorate_and_gradient_methods() {
        global_color_output::enable();
        assert_eq!("a".decorate(Decoration::Bold), "\x1b[1ma\x1b[0m");
        assert_eq!(
            "ab".pastel_gradient(&[RgbColor::new(1, 1, 1)]),
            Ok("\x1b[38;2;1;1;1ma\x1b[38;2;1;1;1mb\x1b[0m".to_string())
        );
        assert_eq!("ab".pastel_bg_gradient(&[]), Err(PastelError::EmptyGradient));
    }

    #[test]
    #[serial]
    fn disabled_methods_return_plain_text() {
        global_color_output::disable();
        assert_eq!("x".pastel(YELLOW), "x");
        assert_eq!(7_u8.pastel_bg(CRIMSON), "7");
        assert_eq!("x".decorate(Decoration::Underline), "x");
        global_color_output::enable();
    }
}
