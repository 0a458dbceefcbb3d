//! Rich TUI interface using ratatui.
//!
//! Two stateless views render into any ratatui buffer:
//! - [`ResultView`] - the quality-control report for one grading result
//! - [`EditorView`] - original text (editable) next to the simplified text
//!
//! [`WorkbenchApp`] is the parent that owns the editor state and receives
//! change notifications. [`run_report_tui`] and [`run_workbench_tui`] drive
//! it in a real terminal.

mod app;
pub mod editor_view;
mod events;
pub mod result_view;
pub mod theme;
mod ui;
pub mod widgets;

// Theme exports
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};

pub use app::{DetailPopup, Focus, WorkbenchApp};
pub use editor_view::{apply_key, handle_key, EditOutcome, EditorCursor, EditorView};
pub use events::{handle_key_event, Event, EventHandler};
pub use result_view::{render_result_view, ResultView};
pub use ui::{render, run_report_tui, run_workbench_tui};
