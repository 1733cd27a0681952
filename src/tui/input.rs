use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::edit::LineBuffer;
use crate::model::filter::Filter;

use super::app::{App, Mode};

/// Top-level key dispatch, by interaction mode.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.status_message = None;
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

// ---------------------------------------------------------------------------
// NAVIGATE mode
// ---------------------------------------------------------------------------

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,

        // Cursor movement
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            let len = app.visible_ids().len();
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => app.cursor = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.visible_ids().len().saturating_sub(1);
        }

        // Mutations
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.input = LineBuffer::new();
            app.mode = Mode::Insert;
        }
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => toggle_cursor_todo(app),
        (KeyModifiers::NONE, KeyCode::Char('d')) => delete_cursor_todo(app),
        (KeyModifiers::NONE, KeyCode::Char('e')) | (_, KeyCode::Enter) => enter_title_edit(app),

        // Filters
        (KeyModifiers::NONE, KeyCode::Char('1')) => app.set_filter(Filter::All),
        (KeyModifiers::NONE, KeyCode::Char('2')) => app.set_filter(Filter::Active),
        (KeyModifiers::NONE, KeyCode::Char('3')) => app.set_filter(Filter::Completed),
        (_, KeyCode::Tab) => app.set_filter(app.filter.cycled()),

        // Theme
        (KeyModifiers::NONE, KeyCode::Char('t')) => app.toggle_theme(),

        _ => {}
    }
}

fn toggle_cursor_todo(app: &mut App) {
    let Some(id) = app.cursor_todo_id() else {
        return;
    };
    app.store.toggle(id);
    // Under active/completed the row may have just left the view
    app.clamp_cursor();
}

fn delete_cursor_todo(app: &mut App) {
    let Some(id) = app.cursor_todo_id() else {
        return;
    };
    let title = app.store.get(id).map(|t| t.title.clone());
    if app.store.delete(id)
        && let Some(title) = title
    {
        app.status_message = Some(format!("deleted \"{}\"", title));
    }
    app.clamp_cursor();
}

/// Enter EDIT mode for the title of the todo under the cursor.
fn enter_title_edit(app: &mut App) {
    let Some(id) = app.cursor_todo_id() else {
        return;
    };
    let Some(todo) = app.store.get(id) else {
        return;
    };
    app.edit.begin(todo);
    app.mode = Mode::Edit;
}

// ---------------------------------------------------------------------------
// INSERT mode (add prompt)
// ---------------------------------------------------------------------------

fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Add the typed todo; the prompt stays open for the next one
        (_, KeyCode::Enter) => {
            let created = app.store.create(app.input.text()).map(|t| t.id);
            if let Some(id) = created {
                app.input.clear();
                if let Some(pos) = app.visible_ids().iter().position(|&i| i == id) {
                    app.cursor = pos;
                }
            }
            // Blank input: keep the prompt as-is, nothing to add
        }
        (_, KeyCode::Esc) => {
            app.input.clear();
            app.mode = Mode::Navigate;
        }
        _ => {
            buffer_key(&mut app.input, key);
        }
    }
}

// ---------------------------------------------------------------------------
// EDIT mode (inline title edit)
// ---------------------------------------------------------------------------

fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm edit
        (_, KeyCode::Enter) => {
            app.edit.commit(&mut app.store);
            app.mode = Mode::Navigate;
        }
        // Cancel edit
        (_, KeyCode::Esc) => {
            app.edit.cancel();
            app.mode = Mode::Navigate;
        }
        _ => {
            if let Some(draft) = app.edit.draft_mut() {
                buffer_key(draft, key);
            } else {
                // Session vanished out from under the mode
                app.mode = Mode::Navigate;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Shared single-line buffer keys
// ---------------------------------------------------------------------------

/// Apply an editing key to a line buffer. Returns false when the key is
/// not a buffer operation.
fn buffer_key(buf: &mut LineBuffer, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        // Word backspace (Alt or Ctrl)
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            buf.delete_word_back();
        }
        (_, KeyCode::Backspace) => {
            buf.backspace();
        }
        // Kill to start of line (Ctrl+U, macOS Cmd+Backspace sends ^U)
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => buf.kill_to_start(),
        // Ctrl+A / Ctrl+E: start / end of line
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => buf.move_home(),
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => buf.move_end(),
        // Word movement: Alt+arrow, or readline Alt+B / Alt+F
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => buf.move_word_left(),
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => buf.move_word_right(),
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => buf.move_word_left(),
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => buf.move_word_right(),
        (_, KeyCode::Left) => buf.move_left(),
        (_, KeyCode::Right) => buf.move_right(),
        (_, KeyCode::Home) => buf.move_home(),
        (_, KeyCode::End) => buf.move_end(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => buf.insert(c),
        _ => return false,
    }
    true
}
