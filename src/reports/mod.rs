//! Non-interactive report generation for grading results.
//!
//! - Summary: compact shell-friendly text, optionally colored
//! - JSON: the result re-emitted as normalized JSON
//!
//! The interactive format (`tui`) is handled by [`crate::tui`].

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use crate::model::GradeResult;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Brief summary output
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format not supported by this reporter: {0}")]
    UnsupportedFormat(ReportFormat),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for one grading result
    fn generate_report(&self, result: &GradeResult) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(&self, result: &GradeResult, writer: &mut dyn Write) -> Result<(), ReportError> {
        let report = self.generate_report(result)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create the reporter for a non-interactive format.
pub fn create_reporter(
    format: ReportFormat,
    colored: bool,
) -> Result<Box<dyn ReportGenerator>, ReportError> {
    match format {
        ReportFormat::Summary => {
            let reporter = if colored {
                SummaryReporter::new()
            } else {
                SummaryReporter::new().no_color()
            };
            Ok(Box::new(reporter))
        }
        ReportFormat::Json => Ok(Box::new(JsonReporter::new())),
        ReportFormat::Auto | ReportFormat::Tui => Err(ReportError::UnsupportedFormat(format)),
    }
}
