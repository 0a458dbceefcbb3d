//! Event handling for the `WorkbenchApp`.

use super::app::{Focus, WorkbenchApp};
use super::editor_view;
use super::theme::toggle_theme;
use crate::config::TuiPreferences;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(event::MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Event handler.
///
/// A background thread polls the terminal and forwards events; a `Tick` is
/// sent whenever a poll interval passes without input.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_TICK_RATE_MS))
    }
}

impl EventHandler {
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                    Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                    Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                    _ => None,
                };
                if let Some(ev) = forwarded {
                    if event_tx.send(ev).is_err() {
                        break;
                    }
                }
            } else if event_tx.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle key events for `WorkbenchApp`.
pub fn handle_key_event(app: &mut WorkbenchApp, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    app.clear_status_message();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.has_overlay() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('q' | '?')
        ) {
            app.close_overlays();
        }
        return;
    }

    match app.focus {
        Focus::Editor => handle_editor_key(app, key),
        Focus::Report => handle_report_key(app, key),
    }
}

fn handle_editor_key(app: &mut WorkbenchApp, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Esc => {
            if app.report.is_some() {
                app.focus = Focus::Report;
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Char('t') if ctrl => cycle_theme(app),
        KeyCode::F(1) => app.toggle_help(),
        _ => {
            let mut changed = None;
            editor_view::handle_key(&app.original_text, &mut app.cursor, key, &mut |text| {
                changed = Some(text);
            });
            if let Some(text) = changed {
                app.on_original_text_change(text);
            }
        }
    }
}

fn handle_report_key(app: &mut WorkbenchApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter => app.open_selected_detail(),
        KeyCode::Char('?') | KeyCode::F(1) => app.toggle_help(),
        KeyCode::Char('T') => cycle_theme(app),
        _ => {}
    }
}

/// Toggle theme (dark -> light -> high-contrast) and save the preference.
fn cycle_theme(app: &mut WorkbenchApp) {
    let theme_name = toggle_theme();
    let mut prefs = TuiPreferences::load();
    prefs.theme = theme_name.to_string();
    match prefs.save() {
        Ok(()) => app.set_status_message(format!("Theme: {theme_name}")),
        Err(e) => {
            tracing::warn!("Failed to save theme preference: {}", e);
            app.set_status_message(format!("Theme: {theme_name} (not saved)"));
        }
    }
}

/// Handle mouse events for `WorkbenchApp`.
pub fn handle_mouse_event(app: &mut WorkbenchApp, mouse: event::MouseEvent) {
    if app.has_overlay() {
        if let MouseEventKind::Down(_) = mouse.kind {
            app.close_overlays();
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown if app.focus == Focus::Report => app.select_next(),
        MouseEventKind::ScrollUp if app.focus == Focus::Report => app.select_prev(),
        _ => {}
    }
}
