//! Quality-control view model.
//!
//! Derives everything the report shows (badge, mode, alert, per-section
//! status, metric line and itemized tests) from a [`GradeResult`]. Both the
//! TUI and the plain-text reporter render from a [`QcReport`], so the display
//! rules live here and nowhere else.
//!
//! Derivation is total: no input shape makes it fail. Counts and ratios are
//! shown verbatim, missing numbers render as `?`.

use crate::model::{display_test_name, GradeResult, TestReport};

/// Marker in front of a passing test.
pub const PASS_MARKER: &str = "✔";
/// Marker in front of a failing test.
pub const FAIL_MARKER: &str = "✘";
/// Icon of the semantic alert block.
pub const ALERT_ICON: &str = "⚠";
/// Placeholder for a number the grader did not send.
pub const MISSING_VALUE: &str = "?";

/// Overall acceptance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    #[must_use]
    pub const fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Self::Accepted
        } else {
            Self::Rejected
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Accepted => PASS_MARKER,
            Self::Rejected => FAIL_MARKER,
        }
    }

    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Whether soft thresholds were relaxed for this grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingMode {
    Strict,
    Relaxed,
}

impl GradingMode {
    #[must_use]
    pub const fn from_relaxed(relaxed: bool) -> Self {
        if relaxed {
            Self::Relaxed
        } else {
            Self::Strict
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Relaxed => "Relaxed",
        }
    }
}

/// Which family of tests a section reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hard,
    Soft,
}

impl SectionKind {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hard => "Hard Tests",
            Self::Soft => "Soft Tests",
        }
    }
}

/// Pass/fail outcome of a section or a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed,
}

impl TestOutcome {
    #[must_use]
    pub const fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
        }
    }

    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Passed => PASS_MARKER,
            Self::Failed => FAIL_MARKER,
        }
    }
}

/// One listed test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QcItem {
    /// Raw test name, used as the item's identity
    pub key: String,
    /// Display name
    pub label: String,
    pub outcome: TestOutcome,
}

impl QcItem {
    fn new(key: &str, outcome: TestOutcome) -> Self {
        Self {
            key: key.to_string(),
            label: display_test_name(key),
            outcome,
        }
    }
}

/// Rendered contents of one test report card.
#[derive(Debug, Clone, PartialEq)]
pub struct QcSection {
    pub kind: SectionKind,
    /// `None` when the grader sent no report for this family
    pub status: Option<TestOutcome>,
    pub metric: String,
    /// Passed tests first, then failed tests
    pub items: Vec<QcItem>,
}

impl QcSection {
    /// Build a section from a test report.
    #[must_use]
    pub fn from_report(kind: SectionKind, report: &TestReport) -> Self {
        let metric = match kind {
            SectionKind::Hard => hard_metric(report),
            SectionKind::Soft => soft_metric(report),
        };

        let items = report
            .passed_tests
            .iter()
            .map(|name| QcItem::new(name, TestOutcome::Passed))
            .chain(
                report
                    .failed_test_names()
                    .into_iter()
                    .map(|name| QcItem::new(name, TestOutcome::Failed)),
            )
            .collect();

        Self {
            kind,
            status: Some(TestOutcome::from_accepted(report.accepted)),
            metric,
            items,
        }
    }

    /// Placeholder for a report the grader skipped.
    #[must_use]
    pub fn not_evaluated(kind: SectionKind) -> Self {
        Self {
            kind,
            status: None,
            metric: "Not evaluated".to_string(),
            items: Vec::new(),
        }
    }

    fn from_optional(kind: SectionKind, report: Option<&TestReport>) -> Self {
        report.map_or_else(
            || Self::not_evaluated(kind),
            |report| Self::from_report(kind, report),
        )
    }

    /// Status label: "Passed", "Failed" or "Not run".
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        self.status.map_or("Not run", TestOutcome::label)
    }

    pub fn passed_items(&self) -> impl Iterator<Item = &QcItem> {
        self.items
            .iter()
            .filter(|item| item.outcome == TestOutcome::Passed)
    }

    pub fn failed_items(&self) -> impl Iterator<Item = &QcItem> {
        self.items
            .iter()
            .filter(|item| item.outcome == TestOutcome::Failed)
    }
}

/// Everything the quality-control panel shows for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct QcReport {
    pub verdict: Verdict,
    pub mode: GradingMode,
    /// Present only for a non-empty alert
    pub semantic_alert: Option<String>,
    pub hard: QcSection,
    pub soft: QcSection,
    /// e.g. "C1 → B1"
    pub level_transition: Option<String>,
    pub strategy: Option<String>,
}

impl QcReport {
    /// Derive the view model from a grading result.
    #[must_use]
    pub fn from_result(result: &GradeResult) -> Self {
        Self {
            verdict: Verdict::from_accepted(result.accepted),
            mode: GradingMode::from_relaxed(result.soft_relaxed),
            semantic_alert: result.semantic_alert().map(str::to_string),
            hard: QcSection::from_optional(SectionKind::Hard, result.final_hard_tests.as_ref()),
            soft: QcSection::from_optional(SectionKind::Soft, result.final_soft_tests.as_ref()),
            level_transition: level_transition(
                result.original_cefr.as_deref(),
                result.target_cefr.as_deref(),
            ),
            strategy: result.strategy.clone().filter(|s| !s.is_empty()),
        }
    }

    /// Both sections in display order.
    #[must_use]
    pub fn sections(&self) -> [&QcSection; 2] {
        [&self.hard, &self.soft]
    }

    /// All listed tests, hard section first.
    pub fn items(&self) -> impl Iterator<Item = (SectionKind, &QcItem)> {
        self.sections()
            .into_iter()
            .flat_map(|section| section.items.iter().map(move |item| (section.kind, item)))
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.hard.items.len() + self.soft.items.len()
    }
}

impl From<&GradeResult> for QcReport {
    fn from(result: &GradeResult) -> Self {
        Self::from_result(result)
    }
}

/// `"{passed} / {total} tests passed"`.
#[must_use]
pub fn hard_metric(report: &TestReport) -> String {
    let total = report
        .total_tests
        .map_or_else(|| MISSING_VALUE.to_string(), |total| total.to_string());
    format!("{} / {} tests passed", report.passed_count(), total)
}

/// `"Pass ratio: {ratio} (min {min_required})"`.
///
/// The ratio is fixed to two decimals, the minimum is shown as sent.
#[must_use]
pub fn soft_metric(report: &TestReport) -> String {
    let ratio = report
        .pass_ratio
        .map_or_else(|| MISSING_VALUE.to_string(), format_ratio);
    let min = report
        .min_required
        .map_or_else(|| MISSING_VALUE.to_string(), |min| min.to_string());
    format!("Pass ratio: {ratio} (min {min})")
}

/// Format a pass ratio with exactly two decimals.
///
/// Exact ties round away from zero (`0.125` gives `0.13`) and negative zero
/// prints as `0.00`, matching the grader's web client.
#[must_use]
pub fn format_ratio(ratio: f64) -> String {
    let ratio = if ratio == 0.0 { 0.0 } else { ratio };
    // A binary value ends in exactly 5 at the third decimal only when it is
    // an odd number of eighths.
    let eighths = ratio.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (ratio.abs() * 100.0).ceil().copysign(ratio);
        format!("{:.2}", cents / 100.0)
    } else {
        format!("{ratio:.2}")
    }
}

fn level_transition(original: Option<&str>, target: Option<&str>) -> Option<String> {
    let original = original.filter(|s| !s.is_empty());
    let target = target.filter(|s| !s.is_empty());
    match (original, target) {
        (Some(from), Some(to)) => Some(format!("{from} → {to}")),
        (Some(from), None) => Some(from.to_string()),
        (None, Some(to)) => Some(format!("→ {to}")),
        (None, None) => None,
    }
}
