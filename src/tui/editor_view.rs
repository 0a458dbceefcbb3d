//! Dual-pane text editor.
//!
//! The left pane edits the original text, the right pane mirrors the
//! simplified text read-only. The view holds no state: the parent owns the
//! text, the caret ([`EditorCursor`]) and the change callback.
//!
//! Key handling is split from rendering. [`handle_key`] turns one key press
//! into at most one call of the change callback with the complete new text.

use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::LevelBadge;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

/// Caret position in the editable pane, as a char index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorCursor {
    position: usize,
}

impl EditorCursor {
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self { position }
    }

    /// Caret after the last character of `text`.
    #[must_use]
    pub fn at_end(text: &str) -> Self {
        Self::new(text.chars().count())
    }

    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    /// Pull the caret back inside `text` (after an external text change).
    pub fn clamp_to(&mut self, text: &str) {
        self.position = self.position.min(text.chars().count());
    }
}

/// What a key press did to the editable pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text changed; carries the complete new value
    Edited(String),
    /// Only the caret moved
    Moved,
    /// The key is not an editor key, or changed nothing
    Ignored,
}

/// Apply one key press to `text`.
///
/// Printable characters, Enter, Backspace and Delete edit. Arrows, Home and
/// End move the caret. Tab and control chords are left to the caller.
#[must_use]
pub fn apply_key(text: &str, cursor: &mut EditorCursor, key: KeyEvent) -> EditOutcome {
    cursor.clamp_to(text);
    let pos = cursor.position;
    let len = text.chars().count();

    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return EditOutcome::Ignored;
    }

    match key.code {
        KeyCode::Char(c) => {
            cursor.position = pos + 1;
            EditOutcome::Edited(insert_at(text, pos, c))
        }
        KeyCode::Enter => {
            cursor.position = pos + 1;
            EditOutcome::Edited(insert_at(text, pos, '\n'))
        }
        KeyCode::Backspace if pos > 0 => {
            cursor.position = pos - 1;
            EditOutcome::Edited(remove_at(text, pos - 1))
        }
        KeyCode::Delete if pos < len => EditOutcome::Edited(remove_at(text, pos)),
        KeyCode::Left if pos > 0 => {
            cursor.position = pos - 1;
            EditOutcome::Moved
        }
        KeyCode::Right if pos < len => {
            cursor.position = pos + 1;
            EditOutcome::Moved
        }
        KeyCode::Home => move_to(cursor, line_start(text, pos)),
        KeyCode::End => move_to(cursor, line_end(text, pos)),
        KeyCode::Up => move_to(cursor, vertical_target(text, pos, false)),
        KeyCode::Down => move_to(cursor, vertical_target(text, pos, true)),
        _ => EditOutcome::Ignored,
    }
}

/// Handle one key press for the editable pane.
///
/// Calls `on_change` exactly once with the complete new text when the key
/// edits, and not at all otherwise. Returns whether the key was consumed.
pub fn handle_key(
    text: &str,
    cursor: &mut EditorCursor,
    key: KeyEvent,
    on_change: &mut dyn FnMut(String),
) -> bool {
    match apply_key(text, cursor, key) {
        EditOutcome::Edited(new_text) => {
            on_change(new_text);
            true
        }
        EditOutcome::Moved => true,
        EditOutcome::Ignored => false,
    }
}

fn move_to(cursor: &mut EditorCursor, target: usize) -> EditOutcome {
    if cursor.position == target {
        EditOutcome::Ignored
    } else {
        cursor.position = target;
        EditOutcome::Moved
    }
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(i, _)| i)
}

fn insert_at(text: &str, char_index: usize, c: char) -> String {
    let mut out = text.to_string();
    out.insert(byte_index(text, char_index), c);
    out
}

fn remove_at(text: &str, char_index: usize) -> String {
    let mut out = text.to_string();
    out.remove(byte_index(text, char_index));
    out
}

/// Char index of the start of the logical line containing `pos`.
fn line_start(text: &str, pos: usize) -> usize {
    text.chars()
        .take(pos)
        .enumerate()
        .filter(|(_, c)| *c == '\n')
        .last()
        .map_or(0, |(i, _)| i + 1)
}

/// Char index of the end of the logical line containing `pos`.
fn line_end(text: &str, pos: usize) -> usize {
    text.chars()
        .enumerate()
        .skip(pos)
        .find(|(_, c)| *c == '\n')
        .map_or_else(|| text.chars().count(), |(i, _)| i)
}

/// Same column on the previous or next logical line, clamped to its length.
fn vertical_target(text: &str, pos: usize, down: bool) -> usize {
    let start = line_start(text, pos);
    let column = pos - start;
    if down {
        let end = line_end(text, pos);
        if end >= text.chars().count() {
            return pos;
        }
        let next_start = end + 1;
        let next_end = line_end(text, next_start);
        (next_start + column).min(next_end)
    } else {
        if start == 0 {
            return pos;
        }
        let prev_start = line_start(text, start - 1);
        (prev_start + column).min(start - 1)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// One visual row of wrapped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedRow {
    /// Char index of the row's first character
    pub start: usize,
    pub text: String,
}

/// Wrap `text` into rows no wider than `width` display columns.
///
/// Hard line breaks always start a new row; an empty line yields an empty
/// row.
#[must_use]
pub fn wrap_rows(text: &str, width: usize) -> Vec<WrappedRow> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = WrappedRow {
        start: 0,
        text: String::new(),
    };
    let mut current_width = 0;

    for (i, c) in text.chars().enumerate() {
        if c == '\n' {
            let next = WrappedRow {
                start: i + 1,
                text: String::new(),
            };
            rows.push(std::mem::replace(&mut current, next));
            current_width = 0;
            continue;
        }
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.text.is_empty() {
            let next = WrappedRow {
                start: i,
                text: String::new(),
            };
            rows.push(std::mem::replace(&mut current, next));
            current_width = 0;
        }
        current.text.push(c);
        current_width += w;
    }
    rows.push(current);
    rows
}

/// Row and display column of the caret within wrapped rows.
#[must_use]
pub fn caret_row_col(rows: &[WrappedRow], position: usize) -> (usize, usize) {
    let row = rows
        .iter()
        .rposition(|r| r.start <= position)
        .unwrap_or(0);
    let col = rows.get(row).map_or(0, |r| {
        r.text
            .chars()
            .take(position - r.start)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    });
    (row, col)
}

/// Two-pane editor widget.
#[derive(Debug, Clone, Copy)]
pub struct EditorView<'a> {
    original_text: &'a str,
    simplified_text: &'a str,
    estimated_cefr: Option<&'a str>,
    placeholder: &'a str,
    cursor: Option<EditorCursor>,
    show_char_count: bool,
}

impl<'a> EditorView<'a> {
    #[must_use]
    pub const fn new(
        original_text: &'a str,
        simplified_text: &'a str,
        estimated_cefr: Option<&'a str>,
    ) -> Self {
        Self {
            original_text,
            simplified_text,
            estimated_cefr,
            placeholder: crate::config::DEFAULT_PLACEHOLDER,
            cursor: None,
            show_char_count: false,
        }
    }

    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Show the caret; the editable pane is drawn as focused.
    #[must_use]
    pub const fn cursor(mut self, cursor: Option<EditorCursor>) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    pub const fn show_char_count(mut self, show: bool) -> Self {
        self.show_char_count = show;
        self
    }

    fn level_label(&self) -> Option<&'a str> {
        self.estimated_cefr.filter(|label| !label.is_empty())
    }

    fn render_original(&self, area: Rect, buf: &mut Buffer) {
        let mut title = " Original ".to_string();
        if self.show_char_count {
            title = format!(" Original · {} chars ", self.original_text.chars().count());
        }
        let focused = self.cursor.is_some();
        let block = Block::default()
            .title(title)
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(if focused {
                Styles::border_focused()
            } else {
                Styles::border()
            });
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.original_text.is_empty() {
            Paragraph::new(Line::styled(self.placeholder, Styles::placeholder()))
                .render(inner, buf);
            if focused {
                set_caret(buf, inner.x, inner.y);
            }
            return;
        }

        let rows = wrap_rows(self.original_text, inner.width as usize);
        let height = inner.height as usize;
        let caret = self
            .cursor
            .map(|c| caret_row_col(&rows, c.position().min(self.original_text.chars().count())));
        let offset = match caret {
            Some((row, _)) if row >= height => row + 1 - height,
            _ => 0,
        };

        for (i, row) in rows.iter().skip(offset).take(height).enumerate() {
            let y = inner.y + i as u16;
            buf.set_stringn(inner.x, y, &row.text, inner.width as usize, Styles::text());
        }

        if let Some((row, col)) = caret {
            let col = col.min(inner.width as usize - 1);
            set_caret(buf, inner.x + col as u16, inner.y + (row - offset) as u16);
        }
    }

    fn render_simplified(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Simplified (read-only) ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border());
        Paragraph::new(self.simplified_text)
            .style(Styles::text_muted())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

fn set_caret(buf: &mut Buffer, x: u16, y: u16) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
    }
}

impl Widget for EditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let original_area = match self.level_label() {
            Some(label) => {
                let [badge_row, rest] =
                    Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(panes[0]);
                let caption = "Estimated level: ";
                buf.set_stringn(
                    badge_row.x,
                    badge_row.y,
                    caption,
                    badge_row.width as usize,
                    Style::default().fg(colors().text_muted),
                );
                let caption_width = (caption.len() as u16).min(badge_row.width);
                let badge_area = Rect {
                    x: badge_row.x + caption_width,
                    width: badge_row.width - caption_width,
                    ..badge_row
                };
                LevelBadge::new(label).render(badge_area, buf);
                rest
            }
            None => panes[0],
        };

        self.render_original(original_area, buf);
        self.render_simplified(panes[1], buf);
    }
}
