//! Report output stage.
//!
//! Decides where a report goes and in which format, renders a grading result
//! with a non-interactive reporter and writes it out.

use crate::config::ReportConfig;
use crate::model::GradeResult;
use crate::reports::{create_reporter, ReportFormat};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Destination of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `--output-file` if given, stdout otherwise.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Resolve `auto`: the interactive report on a terminal, the summary
    /// anywhere else. Explicit formats pass through.
    #[must_use]
    pub fn resolve_format(&self, format: ReportFormat) -> ReportFormat {
        match format {
            ReportFormat::Auto if self.is_terminal() => ReportFormat::Tui,
            ReportFormat::Auto => ReportFormat::Summary,
            other => other,
        }
    }

    /// Whether the summary may carry ANSI colors.
    ///
    /// Files never get escape codes; stdout honors `--no-color` and `NO_COLOR`.
    #[must_use]
    pub fn wants_color(&self, no_color: bool) -> bool {
        matches!(self, Self::Stdout) && !no_color && std::env::var_os("NO_COLOR").is_none()
    }

    /// Write a rendered report. Files always end with a newline.
    pub fn write(&self, content: &str, quiet: bool) -> Result<()> {
        match self {
            Self::Stdout => {
                println!("{}", content.trim_end_matches('\n'));
                Ok(())
            }
            Self::File(path) => {
                let mut body = content.to_string();
                if !body.ends_with('\n') {
                    body.push('\n');
                }
                std::fs::write(path, body)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                if !quiet {
                    tracing::info!("Report written to {}", path.display());
                }
                Ok(())
            }
        }
    }
}

/// Output a non-interactive report for `result`.
///
/// `format` must already be resolved (not `Auto` or `Tui`).
pub fn output_report(config: &ReportConfig, result: &GradeResult, format: ReportFormat) -> Result<()> {
    let target = OutputTarget::from_option(config.output_file.clone());
    let reporter = create_reporter(format, target.wants_color(config.output.no_color))?;
    let report = reporter.generate_report(result)?;
    target.write(&report, config.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, ResultSource, TuiConfig};

    fn config_for(path: PathBuf) -> ReportConfig {
        ReportConfig {
            source: ResultSource::Stdin,
            output: OutputConfig::default(),
            output_file: Some(path),
            fail_on_reject: false,
            tui: TuiConfig::default(),
            quiet: true,
        }
    }

    #[test]
    fn test_file_target_resolves_auto_to_summary() {
        let target = OutputTarget::from_option(Some(PathBuf::from("qc.txt")));
        assert_eq!(target.resolve_format(ReportFormat::Auto), ReportFormat::Summary);
        assert_eq!(target.resolve_format(ReportFormat::Json), ReportFormat::Json);
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
    }

    #[test]
    fn test_files_and_no_color_flag_disable_color() {
        assert!(!OutputTarget::File(PathBuf::from("qc.txt")).wants_color(false));
        assert!(!OutputTarget::Stdout.wants_color(true));
    }

    #[test]
    fn test_file_output_ends_with_newline() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("qc.txt");
        OutputTarget::File(path.clone())
            .write("Quality Control", true)
            .expect("write");
        assert_eq!(
            std::fs::read_to_string(path).expect("read back"),
            "Quality Control\n"
        );
    }

    #[test]
    fn test_summary_to_file_has_no_ansi() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("summary.txt");
        let result: GradeResult =
            serde_json::from_str(r#"{"accepted": false}"#).expect("deserialize");

        output_report(&config_for(path.clone()), &result, ReportFormat::Summary).expect("output");

        let text = std::fs::read_to_string(path).expect("read back");
        assert!(text.contains("✘ Rejected"));
        assert!(text.contains("Hard Tests: Not run"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_tui_format_is_rejected_here() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result: GradeResult =
            serde_json::from_str(r#"{"accepted": true}"#).expect("deserialize");
        let outcome = output_report(
            &config_for(dir.path().join("x")),
            &result,
            ReportFormat::Tui,
        );
        assert!(outcome.is_err());
    }
}
