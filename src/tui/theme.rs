//! Centralized theme and color scheme for TUI.
//!
//! This module provides consistent styling across the report and editor views.

use crate::model::CefrLevel;
use crate::quality::{TestOutcome, Verdict};
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // CEFR band colors
    pub level_basic: Color,
    pub level_independent: Color,
    pub level_proficient: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub placeholder: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            level_basic: Color::Green,
            level_independent: Color::Yellow,
            level_proficient: Color::Magenta,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,
            placeholder: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            level_basic: Color::Rgb(0, 128, 0),
            level_independent: Color::Rgb(180, 140, 0),
            level_proficient: Color::Rgb(128, 0, 128),

            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),
            placeholder: Color::Rgb(160, 160, 160),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            level_basic: Color::LightGreen,
            level_independent: Color::LightYellow,
            level_proficient: Color::LightMagenta,

            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::White,
            placeholder: Color::Gray,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Badge background for an acceptance verdict
    #[must_use]
    pub const fn verdict_color(&self, verdict: Verdict) -> Color {
        match verdict {
            Verdict::Accepted => self.success,
            Verdict::Rejected => self.error,
        }
    }

    /// Foreground color for a test outcome
    #[must_use]
    pub const fn outcome_color(&self, outcome: TestOutcome) -> Color {
        match outcome {
            TestOutcome::Passed => self.success,
            TestOutcome::Failed => self.error,
        }
    }

    /// Color for a CEFR level label; unknown labels get a neutral color
    #[must_use]
    pub fn level_color(&self, label: &str) -> Color {
        match CefrLevel::from_label(label).map(CefrLevel::band) {
            Some("basic") => self.level_basic,
            Some("independent") => self.level_independent,
            Some(_) => self.level_proficient,
            None => self.muted,
        }
    }

    /// Foreground for text drawn on a level badge
    #[must_use]
    pub fn level_badge_fg(&self, label: &str) -> Color {
        match CefrLevel::from_label(label).map(CefrLevel::band) {
            Some("proficient") | None => self.badge_fg_light,
            Some(_) => self.badge_fg_dark,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    /// Look up a theme by name; unknown names fall back to dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Placeholder text in an empty editor
    pub fn placeholder() -> Style {
        Style::default().fg(colors().placeholder).italic()
    }

    /// Selection style (for selected items)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Border style (focused)
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Warning style
    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Context-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints while the report list has focus
    pub fn for_report() -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();
        hints.insert(0, ("↑↓/jk", "select test"));
        hints.insert(1, ("Enter", "failure detail"));
        hints
    }

    /// Hints while the editable pane has focus
    pub fn for_editor() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "switch"),
            ("←→↑↓", "move"),
            ("Home/End", "line start/end"),
            ("Ctrl+T", "theme"),
            ("F1", "help"),
            ("Esc", "leave editor"),
            ("Ctrl+C", "quit"),
        ]
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![("Tab", "switch"), ("T", "theme"), ("?", "help"), ("q", "quit")]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("solarized").name, "dark");
    }

    #[test]
    fn test_theme_rotation_cycles() {
        let start = Theme::dark();
        let cycled = start.next().next().next();
        assert_eq!(cycled, start);
    }

    #[test]
    fn test_level_colors_follow_band() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.level_color("a2"), scheme.level_basic);
        assert_eq!(scheme.level_color("B1"), scheme.level_independent);
        assert_eq!(scheme.level_color("C2"), scheme.level_proficient);
        assert_eq!(scheme.level_color("native"), scheme.muted);
    }

    #[test]
    fn test_verdict_colors_differ() {
        let scheme = ColorScheme::light();
        assert_ne!(
            scheme.verdict_color(Verdict::Accepted),
            scheme.verdict_color(Verdict::Rejected)
        );
    }

    #[test]
    fn test_footer_hints_render_keys_in_brackets() {
        let spans = render_footer_hints(&[("q", "quit"), ("?", "help")]);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[q]quit [?]help");
    }
}
