// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_pastel::{ColorPlane, ConsoleColor, ConsoleColorMode, Decoration, Pastel,
                  RgbColor, colorize_hex, global_color_output};

fn main() -> miette::Result<()> {
    // Respect NO_COLOR and CI detection, but say what was decided.
    {
        let it = global_color_output::init();
        println!("> Color output from environment: {it:?}");
        if !global_color_output::is_enabled() {
            println!("> Forcing color output on for this demo");
            global_color_output::enable();
        }
    }

    // Nested colors stay scoped.
    {
        let label = "[TEST1]"
            .pastel((255, 255, 0))
            .pastel_bg((220, 20, 60));
        let line = format!("START_{label}____{label}_END").pastel((255, 20, 147));
        println!("{line}");
        println!("{line:?}");
    }

    // Hex colors, including the short form.
    {
        println!("{}", colorize_hex("#C2985D", "#C2985D", ColorPlane::Foreground)?);
        println!("{}", "#abc".pastel_bg_hex("#abc")?);
    }

    // Decorations nest like colors.
    {
        let bold = "bold".decorate(Decoration::Bold);
        println!("{}", format!("underlined {bold} underlined").decorate(Decoration::Underline));
    }

    // Console colors in both modes.
    for mode in [ConsoleColorMode::TrueColor, ConsoleColorMode::Legacy] {
        global_color_output::set_console_color_mode(mode);
        let swatches = [
            ConsoleColor::Red,
            ConsoleColor::Green,
            ConsoleColor::Blue,
            ConsoleColor::DarkYellow,
            ConsoleColor::Gray,
        ]
        .map(|it| format!("{it:?}").pastel(it))
        .join(" ");
        println!("{mode:?}: {swatches}");
    }

    // Gradients.
    {
        let stops = [
            RgbColor::from_u32(0xFF_00_00),
            RgbColor::from_u32(0x00_FF_00),
            RgbColor::from_u32(0x00_00_FF),
        ];
        println!("{}", "Hello, gradient world! 🌈".pastel_gradient(&stops)?);
        println!("{}", "   background gradient   ".pastel_bg_gradient(&stops[1..])?);
    }

    // Turning output off returns the input unchanged.
    {
        global_color_output::disable();
        println!("{}", "plain text".pastel((255, 0, 0)));
        global_color_output::enable();
    }

    Ok(())
}
