// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Wrap text in a start sequence and a reset, keeping nested colored fragments
//! correctly scoped.
//!
//! The output of [`paint_scoped`] is:
//!
//! ```text
//! start + text (with start spliced in after every solitary reset) + reset
//! ```
//!
//! where the trailing reset is left out if `text` already ends with one. The exact
//! output length is known before anything is written, so the output is allocated
//! once and never grows.

use crate::{ColorPlane, ConsoleColor, Decoration, PastelColor, RESET, RgbColor, SgrCode,
            global_color_output, parse_hex_color, pastel_error::Result,
            scan_reopen_offsets};

/// Color `text` on the given plane. Returns `text` unchanged when color output is
/// disabled (see [`global_color_output`]).
///
/// ```rust
/// use r3bl_pastel::{colorize, enable, ColorPlane, RgbColor};
///
/// enable();
/// let inner = colorize("b", RgbColor::new(2, 2, 2), ColorPlane::Foreground);
/// let outer = colorize(&format!("a{inner}c"), RgbColor::new(1, 1, 1), ColorPlane::Foreground);
/// assert_eq!(
///     outer,
///     "\x1b[38;2;1;1;1ma\x1b[38;2;2;2;2mb\x1b[0m\x1b[38;2;1;1;1mc\x1b[0m"
/// );
/// ```
#[must_use]
pub fn colorize(text: &str, color: impl Into<PastelColor>, plane: ColorPlane) -> String {
    if !global_color_output::is_enabled() {
        return text.to_owned();
    }
    let mode = global_color_output::console_color_mode();
    paint_scoped(text, color.into().start_code(plane, mode))
}

/// Color `text` with one of the 16 named console colors. Depending on
/// [`global_color_output::console_color_mode`] this emits a fixed RGB sequence or the
/// native palette code.
#[must_use]
pub fn colorize_console(text: &str, color: ConsoleColor, plane: ColorPlane) -> String {
    colorize(text, color, plane)
}

/// Color `text` with a `[#]RRGGBB` or `[#]RGB` hex color.
///
/// # Errors
///
/// Returns [`crate::PastelError::InvalidColorFormat`] if `hex` can't be parsed. The
/// color is validated even when color output is disabled.
pub fn colorize_hex(text: &str, hex: &str, plane: ColorPlane) -> Result<String> {
    let color: RgbColor = parse_hex_color(hex)?;
    Ok(colorize(text, color, plane))
}

/// Apply a text decoration (bold, underline, etc). Nested resets re-open the
/// decoration the same way they re-open colors.
#[must_use]
pub fn decorate(text: &str, decoration: Decoration) -> String {
    if !global_color_output::is_enabled() {
        return text.to_owned();
    }
    paint_scoped(text, decoration.start_code())
}

/// Build the scoped string without consulting the output switch.
#[must_use]
pub fn paint_scoped(text: &str, start_code: SgrCode) -> String {
    let reopen_offsets = scan_reopen_offsets(text);
    let start = start_code.to_inline_string();
    let needs_trailing_reset = !text.ends_with(RESET);

    let capacity = start.len() * (1 + reopen_offsets.len())
        + text.len()
        + if needs_trailing_reset { RESET.len() } else { 0 };

    let mut acc = String::with_capacity(capacity);
    acc.push_str(&start);

    let mut cursor = 0;
    for offset in reopen_offsets {
        acc.push_str(&text[cursor..offset]);
        acc.push_str(&start);
        cursor = offset;
    }
    acc.push_str(&text[cursor..]);

    if needs_trailing_reset {
        acc.push_str(RESET);
    }

    debug_assert_eq!(acc.len(), capacity);
    acc
}
