//! Grading result loading.
//!
//! Results arrive as the grading service's JSON response. Everything except
//! JSON syntax and the documented field types is tolerated here; in
//! particular a non-mapping `failed_tests` value loads fine and is treated
//! as "no failed tests" later on.
//!
//! ## Usage
//!
//! ```no_run
//! use lexigrade::parsers::{parse_grade_result, parse_grade_result_str};
//! use std::path::Path;
//!
//! let from_file = parse_grade_result(Path::new("result.json")).unwrap();
//! let inline = parse_grade_result_str(r#"{"accepted": false}"#).unwrap();
//! assert!(!inline.accepted);
//! ```

use crate::error::{ErrorContext, LexiGradeError, ParseErrorKind, Result};
use crate::model::GradeResult;
use std::io::Read;
use std::path::Path;

/// Parse a grading result from a JSON string.
pub fn parse_grade_result_str(content: &str) -> Result<GradeResult> {
    if content.trim().is_empty() {
        return Err(LexiGradeError::parse(
            "no JSON content",
            ParseErrorKind::EmptyInput,
        ));
    }
    let result: GradeResult = serde_json::from_str(content)?;
    tracing::debug!(
        accepted = result.accepted,
        has_hard = result.final_hard_tests.is_some(),
        has_soft = result.final_soft_tests.is_some(),
        "parsed grading result"
    );
    Ok(result)
}

/// Parse a grading result from a file.
pub fn parse_grade_result(path: &Path) -> Result<GradeResult> {
    let content = std::fs::read_to_string(path).map_err(|e| LexiGradeError::io(path, e))?;
    parse_grade_result_str(&content).with_context(|| format!("at {}", path.display()))
}

/// Parse a grading result from any reader (stdin, sockets, buffers).
pub fn parse_grade_result_reader(mut reader: impl Read) -> Result<GradeResult> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_grade_result_str(&content).context("from stream")
}
