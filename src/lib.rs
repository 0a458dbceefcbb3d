//! **Terminal quality-control report and editor for graded text simplifications.**
//!
//! A grading service judges whether a simplified text is an acceptable
//! rewrite of an original at a target CEFR level. `lexigrade` loads the
//! service's JSON response and presents it: as an interactive report, as a
//! compact summary for shells and CI, or as normalized JSON. It also offers a
//! two-pane workbench where the original text is edited next to its
//! simplification.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`GradeResult`] and [`TestReport`], the grading response as
//!   received, plus [`CefrLevel`].
//! - **[`parsers`]**: loading results from files, strings and readers.
//! - **[`quality`]**: [`QcReport`], the display model every renderer shares
//!   (verdict, grading mode, level transition, test sections).
//! - **[`reports`]**: non-interactive renderers (summary, JSON).
//! - **[`tui`]**: the ratatui views [`ResultView`](tui::ResultView) and
//!   [`EditorView`](tui::EditorView), and the terminal app driving them.
//! - **[`pipeline`]**: the load, format and write stages used by the CLI.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use lexigrade::{parse_grade_result, QcReport};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = parse_grade_result(Path::new("result.json"))?;
//!     let report = QcReport::from_result(&result);
//!
//!     println!("{} in {} mode", report.verdict.label(), report.mode.label());
//!     for section in report.sections() {
//!         println!("{}: {}", section.kind.title(), section.metric);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Rendering into a buffer
//!
//! The views are plain ratatui widgets, so they render into any buffer:
//!
//! ```no_run
//! use lexigrade::{parse_grade_result_str, tui::ResultView, QcReport};
//! use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
//!
//! let result = parse_grade_result_str(r#"{"accepted": true}"#).unwrap();
//! let report = QcReport::from_result(&result);
//! let area = Rect::new(0, 0, 60, 20);
//! let mut buf = Buffer::empty(area);
//! ResultView::new(&report).render(area, &mut buf);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // usize/u16 casts are pervasive in TUI layout math and bounded by the terminal size
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod quality;
pub mod reports;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, EditorConfig, OutputConfig, TuiConfig};
pub use config::{ConfigError, Validatable};
pub use config::{EditConfig, ReportConfig};
pub use error::{ErrorContext, LexiGradeError, Result};
pub use model::{CefrLevel, GradeResult, TestReport};
pub use parsers::{parse_grade_result, parse_grade_result_reader, parse_grade_result_str};
pub use quality::{GradingMode, QcItem, QcReport, QcSection, TestOutcome, Verdict};
pub use reports::{ReportFormat, ReportGenerator};
