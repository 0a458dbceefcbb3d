//! Quality-control report panel.
//!
//! Renders a [`QcReport`]: verdict and mode badges, the optional semantic
//! alert, then the hard and soft test sections with itemized tests.
//! Rendering is a pure function of the report and the selection.

use crate::model::GradeResult;
use crate::quality::{QcReport, QcSection, ALERT_ICON};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{ModeBadge, VerdictBadge};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Report panel widget.
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    report: &'a QcReport,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> ResultView<'a> {
    #[must_use]
    pub const fn new(report: &'a QcReport) -> Self {
        Self {
            report,
            selected: None,
            focused: false,
        }
    }

    /// Highlight the test at `index` in [`QcReport::items`] order.
    #[must_use]
    pub const fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ResultView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Styles::border_focused()
        } else {
            Styles::border()
        };
        let block = Block::default()
            .title(" Quality Control ")
            .title_style(Styles::header_title())
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let (lines, selected_line) = report_lines(self.report, self.selected);
        let (rows, first_rows) = wrap_lines(lines, inner.width as usize);

        // Keep the selected test on screen
        let height = inner.height as usize;
        let scroll = match selected_line.and_then(|line| first_rows.get(line)) {
            Some(&row) if row >= height => row + 1 - height,
            _ => 0,
        };

        Paragraph::new(rows)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(inner, buf);
    }
}

/// Render a grading result into `area`.
pub fn render_result_view(frame: &mut Frame, area: Rect, result: &GradeResult) {
    let report = QcReport::from_result(result);
    frame.render_widget(ResultView::new(&report), area);
}

/// Build the panel's lines.
///
/// Returns the lines and the line index of the selected test, if any.
#[must_use]
pub fn report_lines(report: &QcReport, selected: Option<usize>) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = vec![header_line(report), Line::from("")];

    if let Some(alert) = &report.semantic_alert {
        lines.push(Line::styled(
            format!("{ALERT_ICON} Semantic alert"),
            Styles::warning().bold(),
        ));
        lines.extend(alert.lines().map(|l| Line::styled(l.to_string(), Styles::text())));
        lines.push(Line::from(""));
    }

    let mut item_index = 0;
    let mut selected_line = None;
    for (n, section) in report.sections().into_iter().enumerate() {
        if n > 0 {
            lines.push(Line::from(""));
        }
        lines.push(section_title_line(section));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(section.metric.clone(), Styles::text_muted()),
        ]));

        for item in &section.items {
            let is_selected = selected == Some(item_index);
            if is_selected {
                selected_line = Some(lines.len());
            }
            let marker = Span::styled(
                item.outcome.marker(),
                Style::default().fg(colors().outcome_color(item.outcome)),
            );
            let mut line = Line::from(vec![
                Span::raw("  "),
                marker,
                Span::raw(" "),
                Span::styled(item.label.clone(), Styles::text()),
            ]);
            if is_selected {
                line = line.style(Styles::selected());
            }
            lines.push(line);
            item_index += 1;
        }
    }

    (lines, selected_line)
}

/// Break lines into rows no wider than `width` columns.
///
/// Returns the rows and, per input line, the index of its first row. Styles
/// carry over to every row a line is split into.
fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> (Vec<Line<'static>>, Vec<usize>) {
    let width = width.max(1);
    let mut rows = Vec::with_capacity(lines.len());
    let mut first_rows = Vec::with_capacity(lines.len());

    for line in lines {
        first_rows.push(rows.len());
        if line.width() <= width {
            rows.push(line);
            continue;
        }

        let line_style = line.style;
        let mut row_spans: Vec<Span<'static>> = Vec::new();
        let mut row_width = 0;
        for span in line.spans {
            let mut chunk = String::new();
            for c in span.content.chars() {
                let w = c.width().unwrap_or(0);
                if row_width + w > width && row_width > 0 {
                    if !chunk.is_empty() {
                        row_spans.push(Span::styled(std::mem::take(&mut chunk), span.style));
                    }
                    rows.push(Line::from(std::mem::take(&mut row_spans)).style(line_style));
                    row_width = 0;
                }
                chunk.push(c);
                row_width += w;
            }
            if !chunk.is_empty() {
                row_spans.push(Span::styled(chunk, span.style));
            }
        }
        if !row_spans.is_empty() {
            rows.push(Line::from(row_spans).style(line_style));
        }
    }

    (rows, first_rows)
}

fn header_line(report: &QcReport) -> Line<'static> {
    let mut spans = vec![
        VerdictBadge::new(report.verdict).to_span(),
        Span::raw(" "),
        ModeBadge::new(report.mode).to_span(),
    ];
    if let Some(transition) = &report.level_transition {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(transition.clone(), Styles::text()));
    }
    if let Some(strategy) = &report.strategy {
        spans.push(Span::styled("  strategy: ", Styles::label()));
        spans.push(Span::styled(strategy.clone(), Styles::text_muted()));
    }
    Line::from(spans)
}

fn section_title_line(section: &QcSection) -> Line<'static> {
    let status_style = section.status.map_or_else(Styles::text_muted, |outcome| {
        Style::default().fg(colors().outcome_color(outcome)).bold()
    });
    Line::from(vec![
        Span::styled(section.kind.title(), Styles::section_title()),
        Span::raw("  "),
        Span::styled(section.status_label(), status_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn report(value: serde_json::Value) -> QcReport {
        let result: GradeResult = serde_json::from_value(value).expect("deserialize");
        QcReport::from_result(&result)
    }

    #[test]
    fn test_lines_without_alert() {
        let report = report(json!({
            "accepted": false,
            "soft_relaxed": true,
            "final_hard_tests": {"accepted": false, "passed_tests": [], "failed_tests": {"oov": {}}, "total_tests": 1},
            "final_soft_tests": {"accepted": true, "passed_tests": ["clause_count"], "pass_ratio": 1.0, "min_required": 0.6}
        }));
        let (lines, selected) = report_lines(&report, None);
        let text = plain(&lines);

        assert_eq!(text[0], " ✘ Rejected   Relaxed ");
        assert!(!text.iter().any(|l| l.contains("Semantic alert")));
        assert!(text.contains(&"Hard Tests  Failed".to_string()));
        assert!(text.contains(&"  0 / 1 tests passed".to_string()));
        assert!(text.contains(&"  ✘ oov".to_string()));
        assert!(text.contains(&"  Pass ratio: 1.00 (min 0.6)".to_string()));
        assert!(text.contains(&"  ✔ clause count".to_string()));
        assert_eq!(selected, None);
    }

    #[test]
    fn test_multiline_alert_keeps_text() {
        let report = report(json!({
            "accepted": true,
            "semantic_alert": "First concern.\nSecond concern."
        }));
        let text = plain(&report_lines(&report, None).0);
        assert_eq!(text[2], "⚠ Semantic alert");
        assert_eq!(text[3], "First concern.");
        assert_eq!(text[4], "Second concern.");
    }

    #[test]
    fn test_selected_line_points_at_item() {
        let report = report(json!({
            "accepted": true,
            "final_hard_tests": {"accepted": true, "passed_tests": ["oov", "cefr_validity"], "total_tests": 2},
            "final_soft_tests": {"accepted": false, "passed_tests": [], "failed_tests": {"fluency": {}}}
        }));
        let (lines, selected) = report_lines(&report, Some(2));
        let line = selected.expect("selected line");
        assert_eq!(plain(&lines)[line], "  ✘ fluency");
    }

    #[test]
    fn test_wrap_lines_splits_long_lines() {
        let lines = vec![
            Line::from("short"),
            Line::styled("abcdefghij", Styles::text()),
            Line::from(vec![Span::raw("ab"), Span::raw("cdef")]),
        ];
        let (rows, first_rows) = wrap_lines(lines, 4);
        assert_eq!(
            plain(&rows),
            vec!["short", "abcd", "efgh", "ij", "abcd", "ef"]
        );
        assert_eq!(first_rows, vec![0, 1, 4]);
    }

    #[test]
    fn test_selected_item_visible_below_long_alert() {
        let report = report(json!({
            "accepted": false,
            "semantic_alert": "The simplification drops the causal link. ".repeat(8),
            "final_hard_tests": {"accepted": false, "passed_tests": ["oov", "cefr_validity"], "failed_tests": {"grammar": {}}, "total_tests": 3},
            "final_soft_tests": {"accepted": false, "passed_tests": ["fluency"], "failed_tests": {"last_item": {}}}
        }));
        let area = Rect::new(0, 0, 30, 16);
        let mut buf = Buffer::empty(area);
        ResultView::new(&report).selected(Some(4)).render(area, &mut buf);

        let screen: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("✘ last item"), "{screen}");
    }

    #[test]
    fn test_header_shows_transition_and_strategy() {
        let report = report(json!({
            "accepted": true,
            "strategy": "not_necessary",
            "original_cefr": "A2",
            "target_cefr": "B1"
        }));
        let text = plain(&report_lines(&report, None).0);
        assert_eq!(text[0], " ✔ Accepted   Strict   A2 → B1  strategy: not_necessary");
        assert!(text.contains(&"Soft Tests  Not run".to_string()));
        assert!(text.contains(&"  Not evaluated".to_string()));
    }
}
