// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Finds the places in already colored text where an enclosing color scope has to be
//! re-opened.
//!
//! When a colored string is embedded in a bigger string that is then colored again,
//! the inner string's trailing [`RESET`] would end the outer color too:
//!
//! ```text
//! outer( "a" + inner("b") + "c" )
//!
//! ESC[38;2;1;1;1m a ESC[38;2;2;2;2m b ESC[0m c ESC[0m
//!                                      ▲
//!                                      └─ "c" is rendered in the terminal default
//! ```
//!
//! [`scan_reopen_offsets`] returns the byte offset right after every such reset so the
//! caller can splice the outer start sequence back in. A reset does not need a
//! re-open when:
//! 1. It is at the very end of the text (it terminates the whole string).
//! 2. It is followed by a color start sequence of either plane (the text re-opens a
//!    scope on its own).
//!
//! Consecutive resets count as one. The run is left untouched and only the position
//! after its last reset is considered.

use smallvec::SmallVec;

use crate::{CSI, RESET};

/// Offsets into the scanned text, in strictly increasing order. Most strings embed
/// only a handful of colored fragments, so these stay on the stack.
pub type ReopenOffsets = SmallVec<[usize; INLINE_REOPEN_OFFSETS]>;

pub const INLINE_REOPEN_OFFSETS: usize = 8;

/// Single pass over `text` collecting the byte offsets right after every solitary
/// reset run. All offsets are on `char` boundaries since [`RESET`] is ASCII.
#[must_use]
pub fn scan_reopen_offsets(text: &str) -> ReopenOffsets {
    let mut acc = ReopenOffsets::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(RESET) {
        let mut run_end = cursor + found + RESET.len();
        while text[run_end..].starts_with(RESET) {
            run_end += RESET.len();
        }
        cursor = run_end;

        let rest = &text[run_end..];
        if rest.is_empty() || starts_with_color_start(rest) {
            continue;
        }
        acc.push(run_end);
    }

    acc
}

/// Does `text` begin with a color start sequence of either plane?
///
/// - 24-bit and 256 color: the `ESC[38` / `ESC[48` prefix is enough, the rest of the
///   sequence is not validated.
/// - 16 color palette: the complete `ESC[3Nm`, `ESC[4Nm`, `ESC[9Nm` or `ESC[10Nm`
///   with `N` in `0..=7`.
///
/// Anything else, including truncated prefixes like `ESC[` or `ESC[3x`, is plain text.
#[must_use]
pub fn starts_with_color_start(text: &str) -> bool {
    let Some(params) = text.strip_prefix(CSI) else {
        return false;
    };
    let params = params.as_bytes();

    if params.starts_with(b"38") || params.starts_with(b"48") {
        return true;
    }

    matches!(
        params,
        [b'3' | b'4' | b'9', b'0'..=b'7', b'm', ..] | [b'1', b'0', b'0'..=b'7', b'm', ..]
    )
}
