use ratatui::style::Color;

/// Unified color theme for the application chrome
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Locked slot indicator
    pub fn locked() -> Color {
        Color::Yellow
    }

    /// Selection/highlight
    pub fn highlight() -> Color {
        Color::Cyan
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for titles
    pub fn accent() -> Color {
        Color::LightBlue
    }

    /// Label text drawn on top of a swatch
    pub fn on_swatch() -> Color {
        Color::Black
    }
}
