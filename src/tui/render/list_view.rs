use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::text;

use super::cursor_spans;

/// Render the projected todo list: one row per visible todo, checkbox
/// first, the row under the cursor highlighted, and the in-place draft
/// shown while an edit session is open.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let ids = app.visible_ids();

    // Clamp the cursor and keep it inside the viewport
    let visible_height = area.height as usize;
    app.cursor = app.cursor.min(ids.len().saturating_sub(1));
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll + visible_height {
        app.scroll = app.cursor + 1 - visible_height;
    }

    if ids.is_empty() {
        let placeholder = Paragraph::new(format!("No tasks ({})", app.filter.label()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(placeholder, area);
        return;
    }

    let title_width = (area.width as usize).saturating_sub(6);
    let mut lines: Vec<Line> = Vec::new();

    for (row, id) in ids.iter().enumerate().skip(app.scroll).take(visible_height) {
        let Some(todo) = app.store.get(*id) else {
            continue;
        };
        let is_cursor = row == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let is_editing = app.edit.editing_id() == Some(*id);

        let mut spans: Vec<Span> = Vec::new();
        spans.push(if is_cursor {
            Span::styled(
                "\u{25B8} ",
                Style::default().fg(app.theme.highlight).bg(row_bg),
            )
        } else {
            Span::styled("  ", Style::default().bg(row_bg))
        });

        let checkbox_style = if todo.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        spans.push(Span::styled(
            if todo.completed { "[x]" } else { "[ ]" },
            checkbox_style,
        ));
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        if is_editing && let Some(draft) = app.edit.draft() {
            spans.extend(cursor_spans(
                draft.text(),
                draft.cursor(),
                Style::default().fg(app.theme.text_bright).bg(row_bg),
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ));
        } else {
            let mut style = if todo.completed {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_cursor {
                Style::default().fg(app.theme.text_bright).bg(row_bg)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            if is_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(
                text::truncate_to_width(&todo.title, title_width),
                style,
            ));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
