//! Terminal setup, main loop and screen layout.

use super::app::{Focus, WorkbenchApp};
use super::editor_view::EditorView;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::result_view::ResultView;
use super::theme::{colors, render_footer_hints, set_theme, FooterHints, Styles, Theme};
use super::widgets::{check_terminal_size, render_popup, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::config::{TuiConfig, TuiPreferences};
use crate::model::GradeResult;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::Paragraph};
use std::io::{self, stdout};
use std::time::Duration;

/// Show a grading result in the interactive report screen.
pub fn run_report_tui(result: GradeResult, config: &TuiConfig) -> io::Result<()> {
    let mut app = WorkbenchApp::for_report(result);
    run_app(&mut app, config)
}

/// Run the editor workbench until the user quits.
///
/// The edited text stays in `app` for the caller to save.
pub fn run_workbench_tui(app: &mut WorkbenchApp, config: &TuiConfig) -> io::Result<()> {
    run_app(app, config)
}

fn run_app(app: &mut WorkbenchApp, config: &TuiConfig) -> io::Result<()> {
    // A theme toggled in a previous session wins over the config file
    let theme_name = TuiPreferences::load_saved().map_or_else(|| config.theme.clone(), |p| p.theme);
    set_theme(Theme::from_name(&theme_name));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    if config.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(config.tick_rate_ms));
    let outcome = main_loop(&mut terminal, app, &events);

    // Restore terminal
    disable_raw_mode()?;
    if config.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    outcome
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut WorkbenchApp,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &WorkbenchApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(8),    // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    if app.show_help {
        render_help_overlay(frame, area, app);
    }
    if let Some(detail) = &app.detail {
        let lines = detail
            .body
            .lines()
            .map(|l| Line::styled(l.to_string(), Styles::text()))
            .collect();
        render_popup(frame, area, &detail.title, lines, 70, 60, colors().error);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &WorkbenchApp) {
    let mode = if app.editor_enabled {
        "workbench"
    } else {
        "report"
    };
    let mut spans = vec![
        Span::styled(" lexigrade ", Styles::header_title()),
        Span::styled(format!("· {mode}"), Styles::text_muted()),
    ];
    if app.editor_enabled && app.edit_count > 0 {
        let edits = if app.edit_count == 1 { "edit" } else { "edits" };
        spans.push(Span::styled(
            format!(" · {} {edits}", app.edit_count),
            Styles::warning(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &WorkbenchApp) {
    let editing = app.focus == Focus::Editor && !app.has_overlay();

    let (editor_area, report_area) = match (app.editor_enabled, app.report.is_some()) {
        (true, true) => {
            let [top, bottom] =
                Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .areas(area);
            (Some(top), Some(bottom))
        }
        (true, false) => (Some(area), None),
        (false, _) => (None, Some(area)),
    };

    if let Some(editor_area) = editor_area {
        let view = EditorView::new(
            &app.original_text,
            &app.simplified_text,
            app.estimated_cefr.as_deref(),
        )
        .placeholder(&app.editor_config.placeholder)
        .show_char_count(app.editor_config.show_char_count)
        .cursor(editing.then_some(app.cursor));
        frame.render_widget(view, editor_area);
    }

    if let (Some(report_area), Some(report)) = (report_area, app.report.as_ref()) {
        let view = ResultView::new(report)
            .selected(app.selected_item())
            .focused(app.focus == Focus::Report);
        frame.render_widget(view, report_area);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &WorkbenchApp) {
    let text = app.status_message.clone().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {text}"), Styles::text())).style(Styles::status_bar()),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &WorkbenchApp) {
    let hints = match app.focus {
        Focus::Editor => FooterHints::for_editor(),
        Focus::Report => FooterHints::for_report(),
    };
    frame.render_widget(Paragraph::new(Line::from(render_footer_hints(&hints))), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, app: &WorkbenchApp) {
    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {k:<12}"), Styles::shortcut_key()),
            Span::styled(desc.to_string(), Styles::shortcut_desc()),
        ])
    };

    let mut lines = vec![
        Line::styled("Report", Styles::section_title()),
        key("↑↓ / j k", "select test"),
        key("g / G", "first / last test"),
        key("Enter", "show failure detail"),
        key("T", "cycle theme"),
        key("q / Esc", "quit"),
    ];
    if app.editor_enabled {
        lines.extend([
            Line::from(""),
            Line::styled("Editor", Styles::section_title()),
            key("Tab", "switch between editor and report"),
            key("←→↑↓", "move the caret"),
            key("Home / End", "start / end of line"),
            key("Ctrl+T", "cycle theme"),
            key("Esc", "leave the editor"),
        ]);
    }
    lines.extend([
        Line::from(""),
        key("Ctrl+C", "quit from anywhere"),
        key("? / F1", "toggle this help"),
    ]);

    render_popup(frame, area, "Help", lines, 60, 70, colors().primary);
}
