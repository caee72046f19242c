//! Theme configuration for TUI and CLI
//!
//! Colors come from the Wisp design tokens. Provides both ratatui styles
//! (for the TUI) and ANSI escape codes (for CLI output).

use ratatui::style::{Color, Modifier, Style};

use crate::sim::monitor::Tone;

/// Theme configuration for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Headings and typed text
    pub text_primary: Color,
    /// Descriptions, labels, hints
    pub text_secondary: Color,
    /// Gold accent: banner, selection, badges
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Gains, prompt glyph, connection dot
    pub success: Color,
    /// Informational values
    pub info: Color,
    /// Page background
    pub background: Color,
    /// Terminal window body
    pub terminal_bg: Color,
    /// Terminal title bar
    pub title_bar_bg: Color,
    /// Borders inside the terminal
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::wisp()
    }
}

impl Theme {
    /// Wisp landing page palette.
    pub fn wisp() -> Self {
        Self {
            text_primary: Color::Rgb(0xff, 0xff, 0xff),
            text_secondary: Color::Rgb(0xa1, 0xa1, 0xaa),
            accent: Color::Rgb(0xd4, 0xaf, 0x37),
            error: Color::Rgb(0xff, 0x44, 0x44),
            success: Color::Rgb(0x4a, 0xde, 0x80),
            info: Color::Rgb(0x60, 0xa5, 0xfa),
            background: Color::Rgb(0x05, 0x05, 0x05),
            terminal_bg: Color::Rgb(0x1a, 0x23, 0x32),
            title_bar_bg: Color::Rgb(0x1a, 0x1a, 0x1a),
            border: Color::Rgb(0x4b, 0x55, 0x63),
        }
    }

    /// Plain ANSI palette for terminals without truecolor.
    pub fn ansi() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            info: Color::Blue,
            background: Color::Reset,
            terminal_bg: Color::Reset,
            title_bar_bg: Color::Reset,
            border: Color::DarkGray,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (banner, badges).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a badge: dark text on the accent color.
    pub fn badge_style(&self) -> Style {
        Style::default()
            .fg(self.terminal_bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a monitor tile value.
    pub fn tone_style(&self, tone: Tone) -> Style {
        let color = match tone {
            Tone::Gain => self.success,
            Tone::Loss => self.error,
            Tone::Neutral => self.text_primary,
            Tone::Accent => self.accent,
            Tone::Info => self.info,
        };
        Style::default().fg(color)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    match color_to_ansi(color) {
        Some(code) => format!("{}{}{}", code, text, ANSI_RESET),
        None => text.to_string(),
    }
}

/// Honor the NO_COLOR convention (https://no-color.org).
fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> Option<String> {
    let code = match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        Color::Reset => ANSI_RESET,
        Color::Rgb(r, g, b) => return Some(format!("\x1b[38;2;{};{};{}m", r, g, b)),
        Color::Indexed(i) => return Some(format!("\x1b[38;5;{}m", i)),
        _ => return None,
    };
    Some(code.to_string())
}

/// Theme used by the TUI and CLI output.
///
/// Falls back to the plain ANSI palette when `COLORTERM` does not advertise
/// truecolor support.
pub fn current_theme() -> Theme {
    match std::env::var("COLORTERM") {
        Ok(value) if value == "truecolor" || value == "24bit" => Theme::wisp(),
        _ => Theme::ansi(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_wisp() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(0xd4, 0xaf, 0x37));
        assert_eq!(theme.terminal_bg, Color::Rgb(0x1a, 0x23, 0x32));
    }

    #[test]
    fn ansi_theme_uses_named_colors() {
        let theme = Theme::ansi();
        assert_eq!(theme.accent, Color::Yellow);
        assert_eq!(theme.text_primary, Color::White);
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::ansi();
        assert_eq!(theme.text_style().fg, Some(Color::White));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(Color::Yellow));
    }

    #[test]
    fn badge_inverts_accent() {
        let theme = Theme::wisp();
        let style = theme.badge_style();
        assert_eq!(style.bg, Some(theme.accent));
        assert_eq!(style.fg, Some(theme.terminal_bg));
    }

    #[test]
    fn tone_styles_map_to_palette() {
        let theme = Theme::wisp();
        assert_eq!(theme.tone_style(Tone::Gain).fg, Some(theme.success));
        assert_eq!(theme.tone_style(Tone::Loss).fg, Some(theme.error));
        assert_eq!(theme.tone_style(Tone::Info).fg, Some(theme.info));
    }

    #[test]
    fn color_to_ansi_maps_standard_and_rgb_colors() {
        assert_eq!(color_to_ansi(Color::Green).as_deref(), Some("\x1b[32m"));
        assert_eq!(color_to_ansi(Color::Reset).as_deref(), Some("\x1b[0m"));
        assert_eq!(
            color_to_ansi(Color::Rgb(1, 2, 3)).as_deref(),
            Some("\x1b[38;2;1;2;3m")
        );
        assert_eq!(color_to_ansi(Color::LightRed), None);
    }
}
