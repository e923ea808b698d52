// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::atomic::{AtomicI8, Ordering};

use crate::{colors_enabled_by_environment, enable_virtual_terminal_processing};

/// Process-wide switches read by every colorize call.
///
/// 1. Whether color output is on at all ([`ColorOutput`]). When it is off, every
///    colorize function returns its input unchanged.
/// 2. How [`crate::ConsoleColor`] values are rendered ([`ConsoleColorMode`]).
///
/// # Initialization
///
/// The output switch starts out "not set". It gets a value from one of:
/// - An explicit [`enable()`] or [`disable()`] call.
/// - [`init()`], which runs the environment probe ([`colors_enabled_by_environment`])
///   after enabling virtual terminal processing on Windows.
/// - The first [`is_enabled()`] call, which runs [`init()`] if nothing else has set a
///   value yet.
///
/// # Thread safety
///
/// Plain atomic loads and stores with `Release`/`Acquire` ordering. A colorize call
/// racing with [`enable()`] or [`disable()`] on another thread sees either value.
///
/// # Testing support
///
/// The [serial_test](https://crates.io/crates/serial_test) crate is used to test code
/// that calls [`enable()`], [`disable()`] or [`set_console_color_mode()`]. Annotate
/// those tests with `#[serial]`, otherwise they race with each other (tests are run in
/// parallel using many threads).
///
/// [`enable()`]: global_color_output::enable
/// [`disable()`]: global_color_output::disable
/// [`init()`]: global_color_output::init
/// [`is_enabled()`]: global_color_output::is_enabled
/// [`set_console_color_mode()`]: global_color_output::set_console_color_mode
pub mod global_color_output {
    use super::{AtomicI8, ColorOutput, ConsoleColorMode, Ordering,
                colors_enabled_by_environment, enable_virtual_terminal_processing};

    static COLOR_OUTPUT_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    static CONSOLE_COLOR_MODE_GLOBAL: AtomicI8 =
        AtomicI8::new(ConsoleColorMode::TrueColor as i8);

    const NOT_SET_VALUE: i8 = -1;

    /// Enables any future color output.
    pub fn enable() {
        tracing::trace!("color output enabled");
        store(ColorOutput::Enabled);
    }

    /// Disables any future color output. Colorize functions return their input as is.
    pub fn disable() {
        tracing::trace!("color output disabled");
        store(ColorOutput::Disabled);
    }

    /// Is color output on? Runs the environment probe if neither [`enable()`],
    /// [`disable()`] nor [`init()`] has been called yet. The probe result only fills
    /// in an unset switch, so an [`enable()`] or [`disable()`] that lands while the
    /// probe runs is kept.
    #[must_use]
    pub fn is_enabled() -> bool {
        match try_get() {
            Ok(it) => it == ColorOutput::Enabled,
            Err(()) => store_if_not_set(probe()) == ColorOutput::Enabled,
        }
    }

    /// Prepare the console and set the output switch from the environment probe.
    /// Overwrites any previous [`enable()`] or [`disable()`].
    pub fn init() -> ColorOutput {
        let it = probe();
        store(it);
        it
    }

    fn probe() -> ColorOutput {
        if !enable_virtual_terminal_processing() {
            tracing::debug!("console does not report escape sequence support");
        }
        let it = if colors_enabled_by_environment() {
            ColorOutput::Enabled
        } else {
            ColorOutput::Disabled
        };
        tracing::debug!(color_output = ?it, "color output detected from environment");
        it
    }

    /// Publish `probed` unless a value was stored in the meantime. Returns the value
    /// that ends up in the switch.
    pub(super) fn store_if_not_set(probed: ColorOutput) -> ColorOutput {
        match COLOR_OUTPUT_GLOBAL.compare_exchange(
            NOT_SET_VALUE,
            i8::from(probed),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => probed,
            Err(current) => ColorOutput::try_from(current).unwrap_or(probed),
        }
    }

    /// Forget the current value so the next [`is_enabled()`] call runs the probe
    /// again. Useful in tests or when the environment has changed.
    pub fn reset_to_detected() { COLOR_OUTPUT_GLOBAL.store(NOT_SET_VALUE, Ordering::Release); }

    /// Get the current value of the output switch.
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if no value has been set yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get() -> Result<ColorOutput, ()> {
        let it = COLOR_OUTPUT_GLOBAL.load(Ordering::Acquire);
        ColorOutput::try_from(it)
    }

    /// Choose how [`crate::ConsoleColor`] values are rendered from now on.
    pub fn set_console_color_mode(mode: ConsoleColorMode) {
        tracing::trace!(?mode, "console color mode changed");
        CONSOLE_COLOR_MODE_GLOBAL.store(mode as i8, Ordering::Release);
    }

    #[must_use]
    pub fn console_color_mode() -> ConsoleColorMode {
        let it = CONSOLE_COLOR_MODE_GLOBAL.load(Ordering::Acquire);
        ConsoleColorMode::try_from(it).unwrap_or(ConsoleColorMode::TrueColor)
    }

    fn store(value: ColorOutput) {
        COLOR_OUTPUT_GLOBAL.store(i8::from(value), Ordering::Release);
    }
}

/// Value of the process-wide output switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOutput {
    Enabled,
    Disabled,
}

/// How [`crate::ConsoleColor`] values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleColorMode {
    /// Each console color is emitted as a fixed 24-bit RGB sequence, eg:
    /// `ESC[38;2;255;0;0m` for red.
    #[default]
    TrueColor = 0,
    /// Each console color is emitted as the native 16 color palette code, eg: `ESC[91m`
    /// for red. The terminal's own palette decides the exact shade.
    Legacy = 1,
}

/// These trait implementations allow us to use [`ColorOutput`] and [`ConsoleColorMode`]
/// and `i8` interchangeably.
mod convert_between_switches_and_i8 {
    use super::{ColorOutput, ConsoleColorMode};

    impl TryFrom<i8> for ColorOutput {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                0 => Ok(ColorOutput::Disabled),
                1 => Ok(ColorOutput::Enabled),
                _ => Err(()),
            }
        }
    }

    impl From<ColorOutput> for i8 {
        #[rustfmt::skip]
        fn from(value: ColorOutput) -> Self {
            match value {
                ColorOutput::Disabled => 0,
                ColorOutput::Enabled  => 1,
            }
        }
    }

    impl TryFrom<i8> for ConsoleColorMode {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                0 => Ok(ConsoleColorMode::TrueColor),
                1 => Ok(ConsoleColorMode::Legacy),
                _ => Err(()),
            }
        }
    }
}
