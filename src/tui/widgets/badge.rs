//! Badge widgets for verdict, grading mode and CEFR level.

use crate::quality::{GradingMode, Verdict};
use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

/// Write `text` into the first row of `area`, clipped to its width.
fn render_badge_text(text: &str, style: Style, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    buf.set_stringn(area.x, area.y, text, area.width as usize, style);
}

/// Acceptance badge: "Accepted" or "Rejected".
#[derive(Debug, Clone, Copy)]
pub struct VerdictBadge {
    verdict: Verdict,
}

impl VerdictBadge {
    #[must_use]
    pub const fn new(verdict: Verdict) -> Self {
        Self { verdict }
    }

    /// Style of the badge (uses theme colors).
    #[must_use]
    pub fn style_for(verdict: Verdict) -> Style {
        let scheme = colors();
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.verdict_color(verdict))
            .bold()
    }

    #[must_use]
    pub fn text(&self) -> String {
        format!(" {} {} ", self.verdict.symbol(), self.verdict.label())
    }

    /// Convert to a Span for inline use.
    #[must_use]
    pub fn to_span(&self) -> Span<'static> {
        Span::styled(self.text(), Self::style_for(self.verdict))
    }
}

impl Widget for VerdictBadge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_badge_text(&self.text(), Self::style_for(self.verdict), area, buf);
    }
}

/// Grading mode badge: "Strict" or "Relaxed".
#[derive(Debug, Clone, Copy)]
pub struct ModeBadge {
    mode: GradingMode,
}

impl ModeBadge {
    #[must_use]
    pub const fn new(mode: GradingMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn style_for(mode: GradingMode) -> Style {
        let scheme = colors();
        let bg = match mode {
            GradingMode::Strict => scheme.primary,
            GradingMode::Relaxed => scheme.warning,
        };
        Style::default().fg(scheme.badge_fg_dark).bg(bg)
    }

    #[must_use]
    pub fn to_span(&self) -> Span<'static> {
        Span::styled(format!(" {} ", self.mode.label()), Self::style_for(self.mode))
    }
}

impl Widget for ModeBadge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = format!(" {} ", self.mode.label());
        render_badge_text(&text, Self::style_for(self.mode), area, buf);
    }
}

/// Estimated CEFR level badge.
///
/// Any label is shown verbatim; recognised levels are colored by band.
#[derive(Debug, Clone)]
pub struct LevelBadge {
    label: String,
}

impl LevelBadge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    #[must_use]
    pub fn style_for(label: &str) -> Style {
        let scheme = colors();
        Style::default()
            .fg(scheme.level_badge_fg(label))
            .bg(scheme.level_color(label))
            .bold()
    }

    #[must_use]
    pub fn to_span(&self) -> Span<'static> {
        Span::styled(format!(" {} ", self.label), Self::style_for(&self.label))
    }
}

impl Widget for LevelBadge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = format!(" {} ", self.label);
        render_badge_text(&text, Self::style_for(&self.label), area, buf);
    }
}
