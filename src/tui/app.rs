//! `WorkbenchApp` - state of the interactive report and editor.
//!
//! The app is the parent the editor view reports to: it owns the original
//! text, the caret and the grading result, and receives every edit through
//! [`WorkbenchApp::on_original_text_change`].

use crate::config::EditorConfig;
use crate::model::GradeResult;
use crate::quality::{QcReport, SectionKind, TestOutcome};
use crate::tui::editor_view::EditorCursor;

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Report,
}

/// Opaque failure detail opened from the report list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPopup {
    pub title: String,
    pub body: String,
}

/// Main application state.
pub struct WorkbenchApp {
    /// Editable source text
    pub(crate) original_text: String,
    /// Read-only simplified text
    pub(crate) simplified_text: String,
    pub(crate) estimated_cefr: Option<String>,
    /// `None` when the editor runs without a grading result
    pub(crate) result: Option<GradeResult>,
    pub(crate) report: Option<QcReport>,
    /// `false` for the report-only screen
    pub(crate) editor_enabled: bool,
    pub(crate) editor_config: EditorConfig,

    pub(crate) focus: Focus,
    pub(crate) cursor: EditorCursor,
    /// Selected test in [`QcReport::items`] order
    pub(crate) selected: usize,
    pub(crate) detail: Option<DetailPopup>,
    pub(crate) show_help: bool,
    /// Status message to display temporarily
    pub(crate) status_message: Option<String>,
    /// Number of edits made to the original text
    pub(crate) edit_count: usize,
    pub(crate) should_quit: bool,
}

impl WorkbenchApp {
    /// Report-only screen for one grading result.
    #[must_use]
    pub fn for_report(result: GradeResult) -> Self {
        let report = QcReport::from_result(&result);
        Self {
            original_text: String::new(),
            simplified_text: String::new(),
            estimated_cefr: None,
            result: Some(result),
            report: Some(report),
            editor_enabled: false,
            editor_config: EditorConfig::default(),
            focus: Focus::Report,
            cursor: EditorCursor::default(),
            selected: 0,
            detail: None,
            show_help: false,
            status_message: None,
            edit_count: 0,
            should_quit: false,
        }
    }

    /// Editor workbench, optionally with the result shown below it.
    #[must_use]
    pub fn for_editor(
        original_text: String,
        simplified_text: String,
        estimated_cefr: Option<String>,
        result: Option<GradeResult>,
        editor_config: EditorConfig,
    ) -> Self {
        let report = result.as_ref().map(QcReport::from_result);
        let cursor = EditorCursor::at_end(&original_text);
        Self {
            original_text,
            simplified_text,
            estimated_cefr,
            result,
            report,
            editor_enabled: true,
            editor_config,
            focus: Focus::Editor,
            cursor,
            selected: 0,
            detail: None,
            show_help: false,
            status_message: None,
            edit_count: 0,
            should_quit: false,
        }
    }

    /// The edited original text.
    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    #[must_use]
    pub const fn edit_count(&self) -> usize {
        self.edit_count
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Change notification from the editor view: the complete new text.
    pub fn on_original_text_change(&mut self, text: String) {
        self.original_text = text;
        self.edit_count += 1;
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn has_overlay(&self) -> bool {
        self.show_help || self.detail.is_some()
    }

    pub fn close_overlays(&mut self) {
        self.show_help = false;
        self.detail = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Switch between editor and report, when both exist.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Editor if self.report.is_some() => Focus::Report,
            Focus::Report if self.editor_enabled => Focus::Editor,
            other => other,
        };
    }

    fn item_count(&self) -> usize {
        self.report.as_ref().map_or(0, QcReport::item_count)
    }

    pub fn select_next(&mut self) {
        let count = self.item_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.item_count().saturating_sub(1);
    }

    /// Selection index to draw, if the list has any items.
    #[must_use]
    pub fn selected_item(&self) -> Option<usize> {
        (self.item_count() > 0).then_some(self.selected)
    }

    /// Open the failure detail of the selected test.
    pub fn open_selected_detail(&mut self) {
        let (Some(report), Some(result)) = (self.report.as_ref(), self.result.as_ref()) else {
            return;
        };
        let Some((kind, item)) = report.items().nth(self.selected) else {
            return;
        };

        if item.outcome == TestOutcome::Passed {
            let msg = format!("{} passed; no failure detail", item.label);
            self.set_status_message(msg);
            return;
        }

        let test_report = match kind {
            SectionKind::Hard => result.final_hard_tests.as_ref(),
            SectionKind::Soft => result.final_soft_tests.as_ref(),
        };
        let body = test_report
            .and_then(|r| r.failure_detail(&item.key))
            .map_or_else(
                || "No detail provided".to_string(),
                |detail| {
                    serde_json::to_string_pretty(detail).unwrap_or_else(|_| detail.to_string())
                },
            );

        self.detail = Some(DetailPopup {
            title: format!("{} · {}", kind.title(), item.label),
            body,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result() -> GradeResult {
        serde_json::from_value(json!({
            "accepted": false,
            "final_hard_tests": {"accepted": true, "passed_tests": ["oov"], "total_tests": 1},
            "final_soft_tests": {
                "accepted": false,
                "passed_tests": [],
                "failed_tests": {"lexical_rarity": {"status": "fail", "details": {"rare": ["ubiquitous"]}}},
                "pass_ratio": 0.0,
                "min_required": 0.6
            }
        }))
        .expect("deserialize")
    }

    #[test]
    fn test_selection_is_bounded() {
        let mut app = WorkbenchApp::for_report(result());
        app.select_prev();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
        app.select_first();
        app.select_last();
        assert_eq!(app.selected_item(), Some(1));
    }

    #[test]
    fn test_detail_uses_raw_key() {
        let mut app = WorkbenchApp::for_report(result());
        app.select_last();
        app.open_selected_detail();
        let detail = app.detail.expect("popup");
        assert_eq!(detail.title, "Soft Tests · lexical rarity");
        assert!(detail.body.contains("ubiquitous"));
    }

    #[test]
    fn test_passed_item_has_no_popup() {
        let mut app = WorkbenchApp::for_report(result());
        app.open_selected_detail();
        assert!(app.detail.is_none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_focus_toggle_needs_both_parts() {
        let mut report_only = WorkbenchApp::for_report(result());
        report_only.toggle_focus();
        assert_eq!(report_only.focus(), Focus::Report);

        let mut editor_only = WorkbenchApp::for_editor(
            "text".into(),
            String::new(),
            None,
            None,
            EditorConfig::default(),
        );
        editor_only.toggle_focus();
        assert_eq!(editor_only.focus(), Focus::Editor);

        let mut both = WorkbenchApp::for_editor(
            "text".into(),
            String::new(),
            None,
            Some(result()),
            EditorConfig::default(),
        );
        both.toggle_focus();
        assert_eq!(both.focus(), Focus::Report);
        both.toggle_focus();
        assert_eq!(both.focus(), Focus::Editor);
    }

    #[test]
    fn test_change_notification_replaces_text() {
        let mut app = WorkbenchApp::for_editor(
            "cat".into(),
            String::new(),
            None,
            None,
            EditorConfig::default(),
        );
        app.on_original_text_change("cats".into());
        assert_eq!(app.original_text(), "cats");
        assert_eq!(app.edit_count(), 1);
    }
}
