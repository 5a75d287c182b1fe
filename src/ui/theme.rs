use ratatui::style::Color;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Cyan
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Blue
    }

    /// Selection/highlight
    pub fn highlight() -> Color {
        Color::Yellow
    }

    /// Selection marker/arrow
    pub fn selection_marker() -> Color {
        Color::Green
    }

    /// Editing indicator
    pub fn editing() -> Color {
        Color::LightYellow
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for values and counts
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
