pub mod list_view;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use super::app::{App, Mode};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let prompt_rows = if app.mode == Mode::Insert { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // tab bar + separator
            Constraint::Length(prompt_rows), // add prompt (Insert mode only)
            Constraint::Min(1),              // list
            Constraint::Length(1),           // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);
    if prompt_rows > 0 {
        render_add_prompt(frame, app, chunks[1]);
    }
    list_view::render_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
}

/// The add prompt shown under the tab bar while typing a new todo.
fn render_add_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        " add \u{25B8} ",
        Style::default().fg(app.theme.highlight).bg(bg),
    )];
    spans.extend(cursor_spans(
        app.input.text(),
        app.input.cursor(),
        Style::default().fg(app.theme.text_bright).bg(bg),
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    let paragraph = Paragraph::new(ratatui::text::Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Split `text` around the cursor and wedge a `▌` block between the two
/// halves, so the cursor is visible wherever the terminal's own cursor
/// is hidden.
pub(super) fn cursor_spans<'a>(
    text: &'a str,
    cursor: usize,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'a>> {
    let cursor = cursor.min(text.len());
    vec![
        Span::styled(&text[..cursor], text_style),
        Span::styled("\u{258C}", cursor_style),
        Span::styled(&text[cursor..], text_style),
    ]
}
