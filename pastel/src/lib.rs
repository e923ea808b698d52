// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_pastel`
//!
//! Color strings for the terminal with ANSI SGR escape sequences, and keep nested
//! colors correct when colored strings are embedded in other colored strings.
//!
//! ```text
//! let inner = colorize("b", (2, 2, 2), Foreground);
//! let outer = colorize(&format!("a{inner}c"), (1, 1, 1), Foreground);
//!
//!   ESC[38;2;1;1;1m a ESC[38;2;2;2;2m b ESC[0m ESC[38;2;1;1;1m c ESC[0m
//!   └── outer ──────┘ └── inner ─────────────┘ └── outer re-opened ───┘
//! ```
//!
//! A naive implementation would render `c` in the terminal's default color because
//! the inner reset ends every active rendition. This crate scans the text for such
//! resets and splices the outer start sequence back in after each one. The output is
//! built in a single allocation sized up front.
//!
//! # Usage
//!
//! Free functions:
//! - [`colorize`], [`colorize_hex`], [`colorize_console`] for colors.
//! - [`decorate`] for bold, underline, etc.
//! - [`gradient`] to spread a linear gradient across the graphemes of a string.
//!
//! The same operations are available as methods via the [`Pastel`] trait, which is
//! implemented for `str`, `String` and the primitive types:
//!
//! ```rust
//! use r3bl_pastel::{enable, ConsoleColor, Decoration, Pastel};
//!
//! enable();
//! let warning = "warning".pastel(ConsoleColor::Yellow).decorate(Decoration::Bold);
//! let line = format!("{warning}: disk almost full").pastel_bg((40, 40, 40));
//! println!("{line}");
//! ```
//!
//! # Turning color output off
//!
//! Colors are disabled automatically when the process runs on a CI server or when
//! `NO_COLOR` is set. See [`colors_enabled_by_env_vars`] for the exact rules and
//! [`DISABLE_ENVIRONMENT_DETECTION_ENV_VAR`] to opt out of detection. You can also
//! override the decision at any time with [`enable`] and [`disable`]. While disabled,
//! every function returns its input text unchanged.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events when it probes the environment and when the
//! output switch changes. It never installs a subscriber.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach.
mod ansi_escape_codes;
mod color;
mod color_output_switch;
mod decoration;
mod environment_detector;
mod gradient;
mod hex_color;
mod nested_reset_scanner;
mod pastel_error;
mod pastel_ext;
mod scoped_colorizer;
mod windows_console;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use color_output_switch::*;
pub use color_output_switch::global_color_output::{disable, enable, is_enabled};
pub use decoration::*;
pub use environment_detector::*;
pub use gradient::*;
pub use hex_color::*;
pub use nested_reset_scanner::*;
pub use pastel_error::*;
pub use pastel_ext::*;
pub use scoped_colorizer::*;
pub use windows_console::*;
