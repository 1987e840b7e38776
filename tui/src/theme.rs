//! Color theme and glyphs for the contact book TUI.
//!
//! Kanagawa Wave by default; `high_contrast` swaps in terminal base colors.

use ratatui::style::{Color, Modifier, Style};

use contacts_engine::UiOptions;

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub peach: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: Color::Rgb(22, 22, 29),        // sumiInk0
            bg_panel: Color::Rgb(31, 31, 40),       // sumiInk3
            bg_highlight: Color::Rgb(42, 42, 55),   // sumiInk4
            bg_border: Color::Rgb(84, 84, 109),     // sumiInk6
            text_primary: Color::Rgb(220, 215, 186), // fujiWhite
            text_secondary: Color::Rgb(200, 192, 147), // oldWhite
            text_muted: Color::Rgb(114, 113, 105),  // fujiGray
            primary: Color::Rgb(149, 127, 184),     // oniViolet
            accent: Color::Rgb(127, 180, 202),      // springBlue
            success: Color::Rgb(152, 187, 108),     // springGreen
            error: Color::Rgb(255, 93, 98),         // peachRed
            peach: Color::Rgb(255, 160, 102),       // surimiOrange
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            peach: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub contact: &'static str,
    pub selected: &'static str,
    pub empty_value: &'static str,
    pub alert: &'static str,
    pub back: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            contact: "@",
            selected: ">",
            empty_value: "-",
            alert: "!",
            back: "<",
        }
    } else {
        Glyphs {
            contact: "◉",
            selected: "▸",
            empty_value: "—",
            alert: "⚠",
            back: "←",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn label(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn focused_border(palette: &Palette) -> Style {
        Style::default().fg(palette.primary)
    }

    #[must_use]
    pub fn idle_border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
