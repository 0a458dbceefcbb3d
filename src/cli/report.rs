//! Report command handler.
//!
//! Implements the `report` subcommand for showing one grading result.

use crate::config::ReportConfig;
use crate::model::GradeResult;
use crate::pipeline::{exit_codes, load_result, output_report, OutputTarget};
use crate::reports::ReportFormat;
use crate::tui::run_report_tui;
use anyhow::Result;

/// Run the report command
#[allow(clippy::needless_pass_by_value)]
pub fn run_report(config: ReportConfig) -> Result<i32> {
    let result = load_result(&config.source, config.quiet)?;

    let exit_code = exit_code_for(&result, config.fail_on_reject);

    let target = OutputTarget::from_option(config.output_file.clone());
    let format = target.resolve_format(config.output.format);

    if format == ReportFormat::Tui {
        if config.output_file.is_some() {
            tracing::warn!("--output-file is ignored for the interactive report");
        }
        run_report_tui(result, &config.tui)?;
    } else {
        output_report(&config, &result, format)?;
    }

    Ok(exit_code)
}

/// Exit code for a loaded result.
#[must_use]
pub const fn exit_code_for(result: &GradeResult, fail_on_reject: bool) -> i32 {
    if fail_on_reject && !result.accepted {
        exit_codes::REJECTED
    } else {
        exit_codes::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(accepted: bool) -> GradeResult {
        serde_json::from_value(serde_json::json!({ "accepted": accepted })).expect("deserialize")
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&result(false), true), exit_codes::REJECTED);
        assert_eq!(exit_code_for(&result(false), false), exit_codes::SUCCESS);
        assert_eq!(exit_code_for(&result(true), true), exit_codes::SUCCESS);
    }
}
