//! Grading result loading stage.

use super::PipelineError;
use crate::config::ResultSource;
use crate::model::GradeResult;
use crate::parsers::{parse_grade_result, parse_grade_result_reader};

/// Load a grading result from a file or stdin.
pub fn load_result(source: &ResultSource, quiet: bool) -> Result<GradeResult, PipelineError> {
    let (loaded, source_name) = match source {
        ResultSource::File(path) => {
            if !quiet {
                tracing::info!("Loading grading result: {}", path.display());
            }
            (parse_grade_result(path), path.display().to_string())
        }
        ResultSource::Stdin => {
            if !quiet {
                tracing::info!("Reading grading result from stdin");
            }
            (
                parse_grade_result_reader(std::io::stdin().lock()),
                "stdin".to_string(),
            )
        }
    };

    let result = loaded.map_err(|source| PipelineError::LoadFailed {
        source_name,
        source,
    })?;

    if !quiet {
        tracing::info!(
            accepted = result.accepted,
            soft_relaxed = result.soft_relaxed,
            "Loaded grading result"
        );
    }
    Ok(result)
}
