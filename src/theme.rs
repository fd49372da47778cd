// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).
// Category classes (`is-cat-N`) map onto the theme's category palette.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Names accepted by `Theme::by_name`
pub const THEME_NAMES: &[&str] = &["auto", "dracula", "nord", "gruvbox"];

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // UI element colors
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub muted: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub border_type: BorderType,

    // Log levels
    pub error: Color,
    pub warn: Color,
    pub info: Color,
    pub debug: Color,

    /// Colors for `is-cat-0` .. `is-cat-7`; index 0 is uncategorized
    pub categories: [Color; 8],
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Color for a term's class list: the last `is-cat-N` class wins
    pub fn category_color(&self, classes: &[String]) -> Color {
        classes
            .iter()
            .rev()
            .find_map(|c| c.strip_prefix("is-cat-"))
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| self.categories.get(n).copied())
            .unwrap_or(self.categories[0])
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            muted: Color::DarkGray,
            selection: Color::Blue,
            selection_fg: Color::White,
            border_type: BorderType::Rounded,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::LightBlue,
            debug: Color::Gray,
            categories: [
                Color::DarkGray,
                Color::Red,
                Color::Green,
                Color::Blue,
                Color::Yellow,
                Color::Magenta,
                Color::Cyan,
                Color::LightRed,
            ],
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),      // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),  // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            muted: Color::Rgb(0x62, 0x72, 0xa4),
            selection: Color::Rgb(0x44, 0x47, 0x5a),
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            border_type: BorderType::Rounded,
            error: Color::Rgb(0xff, 0x55, 0x55),
            warn: Color::Rgb(0xf1, 0xfa, 0x8c),
            info: Color::Rgb(0x8b, 0xe9, 0xfd),
            debug: Color::Rgb(0x62, 0x72, 0xa4),
            categories: [
                Color::Rgb(0x62, 0x72, 0xa4), // comment
                Color::Rgb(0xff, 0x55, 0x55), // red
                Color::Rgb(0x50, 0xfa, 0x7b), // green
                Color::Rgb(0xbd, 0x93, 0xf9), // purple
                Color::Rgb(0xff, 0xb8, 0x6c), // orange
                Color::Rgb(0xff, 0x79, 0xc6), // pink
                Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
                Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            ],
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            title: Color::Rgb(0x88, 0xc0, 0xd0),      // frost cyan
            border: Color::Rgb(0x4c, 0x56, 0x6a),     // polar night
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),  // aurora yellow
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
            selection: Color::Rgb(0x43, 0x4c, 0x5e),
            selection_fg: Color::Rgb(0xec, 0xef, 0xf4),
            border_type: BorderType::Plain,
            error: Color::Rgb(0xbf, 0x61, 0x6a),
            warn: Color::Rgb(0xeb, 0xcb, 0x8b),
            info: Color::Rgb(0x8f, 0xbc, 0xbb),
            debug: Color::Rgb(0x4c, 0x56, 0x6a),
            categories: [
                Color::Rgb(0x4c, 0x56, 0x6a), // polar night
                Color::Rgb(0xbf, 0x61, 0x6a), // aurora red
                Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
                Color::Rgb(0x81, 0xa1, 0xc1), // frost blue
                Color::Rgb(0xd0, 0x87, 0x70), // aurora orange
                Color::Rgb(0xb4, 0x8e, 0xad), // aurora purple
                Color::Rgb(0x88, 0xc0, 0xd0), // frost cyan
                Color::Rgb(0xeb, 0xcb, 0x8b), // aurora yellow
            ],
        }
    }

    /// Gruvbox dark - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            title: Color::Rgb(0x83, 0xa5, 0x98),      // blue
            border: Color::Rgb(0x66, 0x5c, 0x54),     // gray
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),  // yellow
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            muted: Color::Rgb(0x92, 0x83, 0x74),
            selection: Color::Rgb(0x50, 0x49, 0x45),
            selection_fg: Color::Rgb(0xfb, 0xf1, 0xc7),
            border_type: BorderType::Plain,
            error: Color::Rgb(0xfb, 0x49, 0x34),
            warn: Color::Rgb(0xfa, 0xbd, 0x2f),
            info: Color::Rgb(0x83, 0xa5, 0x98),
            debug: Color::Rgb(0x92, 0x83, 0x74),
            categories: [
                Color::Rgb(0x92, 0x83, 0x74), // gray
                Color::Rgb(0xfb, 0x49, 0x34), // red
                Color::Rgb(0xb8, 0xbb, 0x26), // green
                Color::Rgb(0x83, 0xa5, 0x98), // blue
                Color::Rgb(0xfe, 0x80, 0x19), // orange
                Color::Rgb(0xd3, 0x86, 0x9b), // purple
                Color::Rgb(0x8e, 0xc0, 0x7c), // aqua
                Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            ],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
