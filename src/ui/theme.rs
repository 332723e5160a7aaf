use ratatui::style::Color;
use serde::Deserialize;

/// Available UI themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// White background, indigo and magenta accents
    #[default]
    Light,
    /// Near-black background, brightened accents
    Dark,
}

impl Theme {
    /// Get the color palette for this theme
    pub fn palette(&self) -> ColorPalette {
        match self {
            Theme::Light => ColorPalette::light(),
            Theme::Dark => ColorPalette::dark(),
        }
    }

    /// Parse theme from string (for config)
    #[allow(dead_code)]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Color palette for theming
#[derive(Clone)]
pub struct ColorPalette {
    /// Primary accent color (titles, primary buttons)
    pub primary: Color,
    /// Highlight accent color (call-to-action buttons, links)
    pub accent: Color,
    /// Success indicator color
    pub success: Color,
    /// Warning indicator color
    pub warning: Color,
    /// Error indicator color
    pub error: Color,
    /// Muted/placeholder text color
    pub muted: Color,
    /// Background color
    pub background: Color,
    /// Input field background color
    pub surface: Color,
    /// Border color (unfocused)
    pub border: Color,
    /// Normal text color
    pub text: Color,
    /// Form label color
    pub label: Color,
    /// Selection background color
    pub selection_bg: Color,
}

impl ColorPalette {
    /// Light theme, matching the product palette on white
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(47, 60, 143),      // Indigo
            accent: Color::Rgb(232, 15, 149),      // Magenta
            success: Color::Rgb(46, 125, 50),      // Green
            warning: Color::Rgb(178, 106, 0),      // Amber
            error: Color::Rgb(198, 40, 40),        // Red
            muted: Color::Rgb(176, 176, 176),      // Light gray
            background: Color::Rgb(255, 255, 255), // White
            surface: Color::Rgb(243, 243, 243),    // Input gray
            border: Color::Rgb(209, 213, 219),     // Border gray
            text: Color::Rgb(26, 26, 26),          // Near black
            label: Color::Rgb(154, 154, 154),      // Label gray
            selection_bg: Color::Rgb(232, 234, 246), // Pale indigo
        }
    }

    /// Dark theme, same accents lifted for contrast
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(232, 234, 246),   // Pale indigo
            accent: Color::Rgb(240, 74, 172),     // Bright magenta
            success: Color::Rgb(129, 199, 132),   // Soft green
            warning: Color::Rgb(255, 183, 77),    // Soft amber
            error: Color::Rgb(229, 115, 115),     // Soft red
            muted: Color::Rgb(102, 102, 102),     // Dim gray
            background: Color::Rgb(18, 18, 18),   // Near black
            surface: Color::Rgb(38, 38, 38),      // Input charcoal
            border: Color::Rgb(64, 64, 64),       // Border charcoal
            text: Color::Rgb(236, 236, 236),      // Off white
            label: Color::Rgb(154, 154, 154),     // Label gray
            selection_bg: Color::Rgb(42, 47, 82), // Deep indigo
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn test_palettes_differ() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
    }
}
