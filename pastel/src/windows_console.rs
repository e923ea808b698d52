// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Legacy Windows consoles print escape sequences literally unless virtual terminal
//! processing is turned on for the output handle.

/// Turn on `ENABLE_VIRTUAL_TERMINAL_PROCESSING` for stdout.
///
/// Delegates to [`crossterm::ansi_support::supports_ansi()`] which calls
/// `SetConsoleMode()` once per process and remembers the outcome. Returns whether the
/// console understands escape sequences afterwards.
#[cfg(windows)]
#[must_use]
pub fn enable_virtual_terminal_processing() -> bool {
    let it = crossterm::ansi_support::supports_ansi();
    tracing::debug!(supports_ansi = it, "windows virtual terminal processing");
    it
}

/// Terminals on other platforms understand escape sequences already.
#[cfg(not(windows))]
#[must_use]
#[allow(clippy::missing_const_for_fn)]
pub fn enable_virtual_terminal_processing() -> bool { true }
