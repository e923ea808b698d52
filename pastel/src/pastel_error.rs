// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors returned by the fallible colorize functions.
///
/// | Variant                | Returned by                                    |
/// |:-----------------------|:-----------------------------------------------|
/// | [`InvalidColorFormat`] | [`crate::parse_hex_color`], [`crate::colorize_hex`] |
/// | [`EmptyGradient`]      | [`crate::gradient`]                            |
/// | [`GradientBuild`]      | [`crate::gradient`]                            |
///
/// [`InvalidColorFormat`]: Self::InvalidColorFormat
/// [`EmptyGradient`]: Self::EmptyGradient
/// [`GradientBuild`]: Self::GradientBuild
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum PastelError {
    #[error("Invalid hex color: '{input}'")]
    #[diagnostic(
        code(r3bl_pastel::invalid_color_format),
        help("Use [#]RRGGBB or [#]RGB, eg: '#C2985D', 'c2985d' or '#abc'")
    )]
    InvalidColorFormat { input: String },

    #[error("A gradient needs at least one color stop")]
    #[diagnostic(code(r3bl_pastel::empty_gradient))]
    EmptyGradient,

    #[error("Could not build gradient: {reason}")]
    #[diagnostic(code(r3bl_pastel::gradient_build))]
    GradientBuild { reason: String },
}

pub type Result<T> = core::result::Result<T, PastelError>;
