// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Spread a linear color gradient across the grapheme clusters of a string.
//!
//! ```text
//! stops:  red ──────────── green ──────────── blue
//! text:   H   e   l   l   o   ,       w   o   r   l   d
//!         ▲                                           ▲
//!         t = 0.0                                     t = 1.0
//! ```
//!
//! Each grapheme gets its own start sequence and a single [`RESET`] closes the whole
//! run. The input is treated as plain text: escape sequences already in it are not
//! scanned.

use colorgrad::Gradient;
use unicode_segmentation::UnicodeSegmentation;

use crate::{ColorPlane, PastelError, RESET, RgbColor, SgrCode, global_color_output,
            pastel_error::Result};

/// Color every grapheme in `text` with a color sampled from a linear gradient through
/// `stops`. The first grapheme gets the first stop and the last grapheme gets the
/// last stop. A single stop colors every grapheme the same.
///
/// Returns `text` unchanged when color output is disabled. The stops are validated
/// either way.
///
/// # Errors
///
/// - [`PastelError::EmptyGradient`] if `stops` is empty.
/// - [`PastelError::GradientBuild`] if the gradient can't be constructed.
pub fn gradient(text: &str, stops: &[RgbColor], plane: ColorPlane) -> Result<String> {
    let sampler = GradientSampler::try_new(stops)?;

    if !global_color_output::is_enabled() || text.is_empty() {
        return Ok(text.to_owned());
    }

    let graphemes: Vec<&str> = text.graphemes(true).collect();
    let last_index = graphemes.len().saturating_sub(1);

    let painted: Vec<(SgrCode, &str)> = graphemes
        .iter()
        .enumerate()
        .map(|(index, grapheme)| {
            let color = sampler.sample(index, last_index);
            (SgrCode::rgb(plane, color.red, color.green, color.blue), *grapheme)
        })
        .collect();

    let capacity = painted
        .iter()
        .map(|(code, grapheme)| code.encoded_len() + grapheme.len())
        .sum::<usize>()
        + RESET.len();

    let mut acc = String::with_capacity(capacity);
    for (code, grapheme) in painted {
        code.write_to_buf(&mut acc);
        acc.push_str(grapheme);
    }
    acc.push_str(RESET);

    debug_assert_eq!(acc.len(), capacity);
    Ok(acc)
}

enum GradientSampler {
    Constant(RgbColor),
    Linear(colorgrad::LinearGradient),
}

impl GradientSampler {
    fn try_new(stops: &[RgbColor]) -> Result<Self> {
        match stops {
            [] => Err(PastelError::EmptyGradient),
            [single] => Ok(GradientSampler::Constant(*single)),
            _ => {
                let colors: Vec<colorgrad::Color> = stops
                    .iter()
                    .map(|it| colorgrad::Color::from_rgba8(it.red, it.green, it.blue, 255))
                    .collect();
                colorgrad::GradientBuilder::new()
                    .colors(&colors)
                    .build::<colorgrad::LinearGradient>()
                    .map(GradientSampler::Linear)
                    .map_err(|err| {
                        tracing::warn!(%err, "failed to build gradient");
                        PastelError::GradientBuild {
                            reason: err.to_string(),
                        }
                    })
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample(&self, index: usize, last_index: usize) -> RgbColor {
        match self {
            GradientSampler::Constant(it) => *it,
            GradientSampler::Linear(gradient) => {
                let t = if last_index == 0 {
                    0.0
                } else {
                    index as f32 / last_index as f32
                };
                let [red, green, blue, _] = gradient.at(t).to_rgba8();
                RgbColor::new(red, green, blue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::nested_reset_scanner::starts_with_color_start;

    const RED: RgbColor = RgbColor::new(255, 0, 0);
    const BLUE: RgbColor = RgbColor::new(0, 0, 255);

    #[test]
    #[serial]
    fn empty_stops_is_an_error_even_when_disabled() {
        global_color_output::disable();
        assert_eq!(
            gradient("abc", &[], ColorPlane::Foreground),
            Err(PastelError::EmptyGradient)
        );
        global_color_output::enable();
        assert_eq!(
            gradient("abc", &[], ColorPlane::Foreground),
            Err(PastelError::EmptyGradient)
        );
    }

    #[test]
    #[serial]
    fn disabled_returns_text_unchanged() {
        global_color_output::disable();
        assert_eq!(
            gradient("abc", &[RED, BLUE], ColorPlane::Foreground),
            Ok("abc".to_string())
        );
        global_color_output::enable();
    }

    #[test]
    #[serial]
    fn empty_text_stays_empty() {
        global_color_output::enable();
        assert_eq!(gradient("", &[RED, BLUE], ColorPlane::Foreground), Ok(String::new()));
    }

    #[test]
    #[serial]
    fn single_stop_is_constant_color() {
        global_color_output::enable();
        assert_eq!(
            gradient("ab", &[RED], ColorPlane::Background).unwrap(),
            "\x1b[48;2;255;0;0ma\x1b[48;2;255;0;0mb\x1b[0m"
        );
    }

    #[test]
    #[serial]
    fn endpoints_match_first_and_last_stop() {
        global_color_output::enable();
        let out = gradient("abc", &[RED, BLUE], ColorPlane::Foreground).unwrap();
        assert!(out.starts_with("\x1b[38;2;255;0;0ma"));
        assert!(out.ends_with("\x1b[38;2;0;0;255mc\x1b[0m"));
        assert_eq!(out.matches(RESET).count(), 1);
        assert_eq!(out.len(), out.capacity());
    }

    #[test]
    #[serial]
    fn one_start_sequence_per_grapheme() {
        global_color_output::enable();
        // "e" + combining acute accent is one grapheme, as is the flag.
        let text = "e\u{301}🇩🇪x";
        let out = gradient(text, &[RED, BLUE], ColorPlane::Foreground).unwrap();
        let starts = out
            .match_indices("\x1b[")
            .filter(|(index, _)| starts_with_color_start(&out[*index..]))
            .count();
        assert_eq!(starts, 3);
    }
}
