//! Edit command handler.
//!
//! Implements the `edit` subcommand: the interactive workbench with the
//! original text, the simplified text and, optionally, its grading result.

use crate::config::EditConfig;
use crate::parsers::parse_grade_result;
use crate::pipeline::exit_codes;
use crate::tui::{run_workbench_tui, WorkbenchApp};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::Path;

/// Run the edit command
#[allow(clippy::needless_pass_by_value)]
pub fn run_edit(config: EditConfig) -> Result<i32> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("the edit command needs an interactive terminal");
    }

    let mut app = prepare_workbench(&config)?;
    run_workbench_tui(&mut app, &config.tui)?;

    if let Some(path) = &config.save {
        std::fs::write(path, app.original_text())
            .with_context(|| format!("Failed to save original text to {}", path.display()))?;
        tracing::info!(
            edits = app.edit_count(),
            "Original text saved to {}",
            path.display()
        );
    }

    Ok(exit_codes::SUCCESS)
}

/// Load the inputs and build the workbench state.
///
/// The simplified text falls back to the result's `text` field and the
/// level label to its `original_cefr`.
pub fn prepare_workbench(config: &EditConfig) -> Result<WorkbenchApp> {
    let original = read_optional(config.original.as_deref())?.unwrap_or_default();

    let result = config
        .result
        .as_deref()
        .map(parse_grade_result)
        .transpose()?;

    let simplified = match read_optional(config.simplified.as_deref())? {
        Some(text) => text,
        None => result
            .as_ref()
            .and_then(|r| r.text.clone())
            .unwrap_or_default(),
    };

    let cefr = config
        .cefr
        .clone()
        .or_else(|| result.as_ref().and_then(|r| r.original_cefr.clone()));

    tracing::debug!(
        original_chars = original.chars().count(),
        has_result = result.is_some(),
        "Prepared workbench"
    );

    Ok(WorkbenchApp::for_editor(
        original,
        simplified,
        cefr,
        result,
        config.editor.clone(),
    ))
}

fn read_optional(path: Option<&Path>) -> Result<Option<String>> {
    path.map(|p| {
        std::fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display()))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::Focus;

    #[test]
    fn test_fallbacks_come_from_result() {
        let dir = tempfile::tempdir().expect("temp dir");
        let original = dir.path().join("original.txt");
        let result = dir.path().join("result.json");
        std::fs::write(&original, "The ubiquitous cat.").expect("write");
        std::fs::write(
            &result,
            r#"{"accepted": true, "original_cefr": "C1", "text": "The common cat."}"#,
        )
        .expect("write");

        let config = EditConfig {
            original: Some(original),
            result: Some(result),
            ..EditConfig::default()
        };
        let app = prepare_workbench(&config).expect("prepare");
        assert_eq!(app.original_text(), "The ubiquitous cat.");
        assert_eq!(app.simplified_text, "The common cat.");
        assert_eq!(app.estimated_cefr.as_deref(), Some("C1"));
        assert_eq!(app.focus(), Focus::Editor);
    }

    #[test]
    fn test_explicit_values_win() {
        let dir = tempfile::tempdir().expect("temp dir");
        let simplified = dir.path().join("simplified.txt");
        let result = dir.path().join("result.json");
        std::fs::write(&simplified, "Mine.").expect("write");
        std::fs::write(&result, r#"{"accepted": true, "original_cefr": "C1", "text": "Theirs."}"#)
            .expect("write");

        let config = EditConfig {
            simplified: Some(simplified),
            result: Some(result),
            cefr: Some("B2".to_string()),
            ..EditConfig::default()
        };
        let app = prepare_workbench(&config).expect("prepare");
        assert_eq!(app.original_text(), "");
        assert_eq!(app.simplified_text, "Mine.");
        assert_eq!(app.estimated_cefr.as_deref(), Some("B2"));
    }

    #[test]
    fn test_missing_original_file_is_an_error() {
        let config = EditConfig {
            original: Some("/nonexistent/original.txt".into()),
            ..EditConfig::default()
        };
        let err = prepare_workbench(&config).err().expect("should fail");
        assert!(err.to_string().contains("/nonexistent/original.txt"));
    }
}
