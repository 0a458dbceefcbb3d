//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable quality-control summary for terminal
//! usage and CI logs.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::GradeResult;
use crate::quality::{QcReport, QcSection, TestOutcome, ALERT_ICON};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn outcome_color(outcome: TestOutcome) -> &'static str {
        match outcome {
            TestOutcome::Passed => "green",
            TestOutcome::Failed => "red",
        }
    }

    /// Render the report lines for a derived view model.
    #[must_use]
    pub fn render(&self, report: &QcReport) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(self.color("Quality Control", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let badge_color = if report.verdict.is_accepted() {
            "green"
        } else {
            "red"
        };
        let mut header = vec![
            self.color(
                &format!("{} {}", report.verdict.symbol(), report.verdict.label()),
                badge_color,
            ),
            self.color(report.mode.label(), "cyan"),
        ];
        if let Some(transition) = &report.level_transition {
            header.push(transition.clone());
        }
        if let Some(strategy) = &report.strategy {
            header.push(self.color(&format!("strategy: {strategy}"), "dim"));
        }
        lines.push(header.join("  ·  "));

        if let Some(alert) = &report.semantic_alert {
            lines.push(String::new());
            lines.push(self.color(&format!("{ALERT_ICON} Semantic alert"), "yellow"));
            lines.extend(alert.lines().map(|line| format!("  {line}")));
        }

        for section in report.sections() {
            lines.push(String::new());
            lines.extend(self.render_section(section));
        }

        lines
    }

    fn render_section(&self, section: &QcSection) -> Vec<String> {
        let status = match section.status {
            Some(outcome) => self.color(outcome.label(), Self::outcome_color(outcome)),
            None => self.color(section.status_label(), "dim"),
        };

        let mut lines = vec![
            format!("{}: {}", self.color(section.kind.title(), "bold"), status),
            format!("  {}", self.color(&section.metric, "dim")),
        ];
        lines.extend(section.items.iter().map(|item| {
            format!(
                "  {} {}",
                self.color(item.outcome.marker(), Self::outcome_color(item.outcome)),
                item.label
            )
        }));
        lines
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(&self, result: &GradeResult) -> Result<String, ReportError> {
        let report = QcReport::from_result(result);
        Ok(self.render(&report).join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejected_with_alert() -> GradeResult {
        serde_json::from_value(json!({
            "accepted": false,
            "soft_relaxed": true,
            "semantic_alert": "Second sentence changes the meaning.",
            "original_cefr": "C1",
            "target_cefr": "A2",
            "final_hard_tests": {
                "accepted": false,
                "passed_tests": ["oov"],
                "failed_tests": {"cefr_validity": {"status": "fail"}},
                "total_tests": 2
            },
            "final_soft_tests": {
                "accepted": true,
                "passed_tests": ["clause_count", "average_word_length"],
                "failed_tests": {"lexical_rarity": {}},
                "pass_ratio": 0.6666666666666666,
                "min_required": 0.6
            }
        }))
        .expect("deserialize")
    }

    #[test]
    fn test_plain_summary_layout() {
        let text = SummaryReporter::new()
            .no_color()
            .generate_report(&rejected_with_alert())
            .expect("report");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Quality Control");
        assert_eq!(lines[2], "✘ Rejected  ·  Relaxed  ·  C1 → A2");
        assert!(text.contains("⚠ Semantic alert\n  Second sentence changes the meaning."));
        assert!(text.contains("Hard Tests: Failed\n  1 / 2 tests passed\n  ✔ oov\n  ✘ cefr validity"));
        assert!(text.contains("Soft Tests: Passed\n  Pass ratio: 0.67 (min 0.6)"));
        assert!(text.contains("  ✘ lexical rarity"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_no_alert_block_without_alert() {
        let mut result = rejected_with_alert();
        result.semantic_alert = Some(String::new());
        let text = SummaryReporter::new()
            .no_color()
            .generate_report(&result)
            .expect("report");
        assert!(!text.contains("Semantic alert"));
        assert!(!text.contains(ALERT_ICON));
    }

    #[test]
    fn test_multiline_alert_indents_every_line() {
        let mut result = rejected_with_alert();
        result.semantic_alert = Some("First concern.\nSecond concern.".to_string());
        let text = SummaryReporter::new()
            .no_color()
            .generate_report(&result)
            .expect("report");
        assert!(text.contains("⚠ Semantic alert\n  First concern.\n  Second concern.\n"));
    }

    #[test]
    fn test_colored_output_uses_ansi() {
        let text = SummaryReporter::new()
            .generate_report(&rejected_with_alert())
            .expect("report");
        assert!(text.contains("\x1b[31m✘ Rejected\x1b[0m"));
    }

    #[test]
    fn test_write_report_to_buffer() {
        let mut buffer = Vec::new();
        SummaryReporter::new()
            .no_color()
            .write_report(&rejected_with_alert(), &mut buffer)
            .expect("write");
        let text = String::from_utf8(buffer).expect("utf8");
        assert!(text.starts_with("Quality Control"));
    }
}
