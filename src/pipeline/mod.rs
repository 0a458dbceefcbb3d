//! Pipeline orchestration for grading results.
//!
//! Shared load → render → write steps, so the CLI command handlers stay
//! small.

mod load;
mod report_stage;

pub use load::load_result;
pub use report_stage::{output_report, OutputTarget};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a grading result
    #[error("Load failed for {source_name}: {source}")]
    LoadFailed {
        source_name: String,
        #[source]
        source: crate::error::LexiGradeError,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success (or rejection without `--fail-on-reject`)
    pub const SUCCESS: i32 = 0;
    /// The grading result was rejected and `--fail-on-reject` was set
    pub const REJECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
