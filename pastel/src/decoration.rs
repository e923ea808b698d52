// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{EnumCount, EnumIter};

use crate::SgrCode;

/// Text attributes that aren't colors. Applied with [`crate::decorate`], which scopes
/// them across nested resets exactly like a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum Decoration {
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
}

impl Decoration {
    #[rustfmt::skip]
    #[must_use]
    pub const fn start_code(&self) -> SgrCode {
        match self {
            Decoration::Bold          => SgrCode::Bold,
            Decoration::Dim           => SgrCode::Dim,
            Decoration::Italic        => SgrCode::Italic,
            Decoration::Underline     => SgrCode::Underline,
            Decoration::Overline      => SgrCode::Overline,
            Decoration::SlowBlink     => SgrCode::SlowBlink,
            Decoration::RapidBlink    => SgrCode::RapidBlink,
            Decoration::Invert        => SgrCode::Invert,
            Decoration::Hidden        => SgrCode::Hidden,
            Decoration::Strikethrough => SgrCode::Strikethrough,
        }
    }
}
