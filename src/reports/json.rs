//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::GradeResult;

/// JSON reporter
///
/// Re-emits the grading result in normalized form: `soft_relaxed: null`
/// becomes `false` and absent optional fields are omitted.
pub struct JsonReporter {
    /// Whether to pretty-print
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact single-line JSON
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_report(&self, result: &GradeResult) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
