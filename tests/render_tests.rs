//! Rendering tests for the report and editor views.
//!
//! Views are drawn into a ratatui `TestBackend` and the buffer is flattened
//! to text, so assertions read like what a user sees on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lexigrade::parse_grade_result_str;
use lexigrade::tui::{handle_key, render_result_view, EditorCursor, EditorView, ResultView};
use lexigrade::QcReport;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

// ============================================================================
// Helpers
// ============================================================================

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

fn draw_result(json: &str) -> String {
    let result = parse_grade_result_str(json).expect("valid result");
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
    terminal
        .draw(|frame| render_result_view(frame, frame.area(), &result))
        .expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn draw_editor(view: EditorView<'_>) -> String {
    let area = Rect::new(0, 0, 80, 12);
    let mut buf = Buffer::empty(area);
    view.render(area, &mut buf);
    buffer_text(&buf)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const MIXED_RESULT: &str = r#"{
    "accepted": true,
    "soft_relaxed": false,
    "semantic_alert": null,
    "final_hard_tests": {
        "accepted": true,
        "passed_tests": ["grammar_check"],
        "failed_tests": {},
        "total_tests": 1
    },
    "final_soft_tests": {
        "accepted": false,
        "passed_tests": [],
        "failed_tests": {"fluency": {"score": 0.2}},
        "pass_ratio": 0.0,
        "min_required": 0.5
    }
}"#;

// ============================================================================
// Result view
// ============================================================================

mod result_view {
    use super::*;

    #[test]
    fn accepted_strict_result_with_failed_soft_test() {
        let screen = draw_result(MIXED_RESULT);

        assert!(screen.contains("Accepted"), "{screen}");
        assert!(screen.contains("Strict"));
        assert!(!screen.contains("Semantic alert"));
        assert!(screen.contains("Hard Tests"));
        assert!(screen.contains("1 / 1 tests passed"));
        assert!(screen.contains("grammar check"));
        assert!(screen.contains("Soft Tests"));
        assert!(screen.contains("Failed"));
        assert!(screen.contains("Pass ratio: 0.00 (min 0.5)"));
        assert!(screen.contains("fluency"));
    }

    #[test]
    fn rendering_twice_is_identical() {
        assert_eq!(draw_result(MIXED_RESULT), draw_result(MIXED_RESULT));
    }

    #[test]
    fn alert_block_appears_only_for_non_empty_alert() {
        let with_alert = draw_result(
            r#"{"accepted": false, "soft_relaxed": true, "semantic_alert": "Meaning drifted in sentence 2"}"#,
        );
        assert!(with_alert.contains("Semantic alert"));
        assert!(with_alert.contains("Meaning drifted in sentence 2"));
        assert!(with_alert.contains("Rejected"));
        assert!(with_alert.contains("Relaxed"));

        let empty_alert = draw_result(r#"{"accepted": false, "semantic_alert": ""}"#);
        assert!(!empty_alert.contains("Semantic alert"));
    }

    #[test]
    fn missing_reports_render_as_not_evaluated() {
        let screen = draw_result(r#"{"accepted": true, "strategy": "not_necessary"}"#);
        assert!(screen.contains("Not run"));
        assert!(screen.contains("Not evaluated"));
        assert!(screen.contains("strategy: not_necessary"));
    }

    #[test]
    fn malformed_failed_tests_lists_no_failures() {
        let screen = draw_result(
            r#"{"accepted": false, "final_hard_tests": {"accepted": false, "passed_tests": ["oov"], "failed_tests": [1, 2], "total_tests": 3}}"#,
        );
        assert!(screen.contains("1 / 3 tests passed"));
        assert!(screen.contains("oov"));
    }

    #[test]
    fn widget_renders_into_small_buffer_without_panicking() {
        let result = parse_grade_result_str(MIXED_RESULT).expect("valid result");
        let report = QcReport::from_result(&result);
        for (w, h) in [(0, 0), (1, 1), (10, 3), (30, 5)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            ResultView::new(&report).selected(Some(1)).render(area, &mut buf);
        }
    }
}

// ============================================================================
// Editor view
// ============================================================================

mod editor_view {
    use super::*;

    #[test]
    fn level_badge_shown_for_label() {
        let screen = draw_editor(EditorView::new("The cat sat.", "Cat sat.", Some("B1")));
        assert!(screen.contains("Estimated level:"), "{screen}");
        assert!(screen.contains("B1"));
    }

    #[test]
    fn no_badge_without_label() {
        for label in [None, Some("")] {
            let screen = draw_editor(EditorView::new("The cat sat.", "Cat sat.", label));
            assert!(!screen.contains("Estimated level:"), "{label:?}");
        }
    }

    #[test]
    fn whitespace_label_still_shows_badge() {
        let screen = draw_editor(EditorView::new("The cat sat.", "Cat sat.", Some("  ")));
        assert!(screen.contains("Estimated level:"), "{screen}");
    }

    #[test]
    fn placeholder_shown_for_empty_original() {
        let screen = draw_editor(EditorView::new("", "Cat sat.", None).placeholder("Type here"));
        assert!(screen.contains("Type here"));

        let filled = draw_editor(EditorView::new("x", "Cat sat.", None).placeholder("Type here"));
        assert!(!filled.contains("Type here"));
    }

    #[test]
    fn both_panes_show_their_text() {
        let screen = draw_editor(EditorView::new("The cat sat.", "Cat sat.", None));
        assert!(screen.contains("Original"));
        assert!(screen.contains("The cat sat."));
        assert!(screen.contains("Simplified (read-only)"));
        assert!(screen.contains("Cat sat."));
    }

    #[test]
    fn char_count_in_title() {
        let screen = draw_editor(EditorView::new("héllo", "", None).show_char_count(true));
        assert!(screen.contains("Original · 5 chars"));
    }
}

// ============================================================================
// Change notifications
// ============================================================================

mod notifications {
    use super::*;

    #[test]
    fn typing_one_char_notifies_once_with_full_text() {
        let text = "cat".to_string();
        let mut cursor = EditorCursor::at_end(&text);
        let mut calls = Vec::new();

        handle_key(&text, &mut cursor, key(KeyCode::Char('s')), &mut |t| {
            calls.push(t);
        });

        assert_eq!(calls, vec!["cats".to_string()]);
    }

    #[test]
    fn sequential_edits_arrive_in_order() {
        let mut text = String::new();
        let mut cursor = EditorCursor::at_end(&text);
        let mut calls = Vec::new();

        for c in "dog".chars() {
            handle_key(&text, &mut cursor, key(KeyCode::Char(c)), &mut |t| {
                calls.push(t);
            });
            text.clone_from(calls.last().expect("notified"));
        }

        assert_eq!(calls, vec!["d", "do", "dog"]);
    }

    #[test]
    fn the_simplified_pane_is_not_editable() {
        // Keys only ever produce a new original text; the simplified text
        // passed to the view is untouched.
        let simplified = "Cat sat.";
        let original = "The cat".to_string();
        let mut cursor = EditorCursor::at_end(&original);
        let mut calls = Vec::new();
        handle_key(&original, &mut cursor, key(KeyCode::Backspace), &mut |t| {
            calls.push(t);
        });
        assert_eq!(calls, vec!["The ca".to_string()]);

        let screen = draw_editor(EditorView::new(&calls[0], simplified, None));
        assert!(screen.contains("Cat sat."));
    }
}
