//! Quality-control report derivation.
//!
//! Turns a [`GradeResult`](crate::model::GradeResult) into the display model
//! shared by every renderer.
//!
//! # Usage
//!
//! ```no_run
//! use lexigrade::parsers::parse_grade_result;
//! use lexigrade::quality::QcReport;
//! use std::path::Path;
//!
//! let result = parse_grade_result(Path::new("result.json")).unwrap();
//! let report = QcReport::from_result(&result);
//!
//! println!("{} ({})", report.verdict.label(), report.mode.label());
//! for section in report.sections() {
//!     println!("{}: {} - {}", section.kind.title(), section.status_label(), section.metric);
//! }
//! ```

mod report;

pub use report::{
    format_ratio, hard_metric, soft_metric, GradingMode, QcItem, QcReport, QcSection,
    SectionKind, TestOutcome, Verdict, ALERT_ICON, FAIL_MARKER, MISSING_VALUE, PASS_MARKER,
};
