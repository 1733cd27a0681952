use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): transient feedback on the
/// left, key hints for the current mode on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match app.mode {
        Mode::Navigate => "a add  e edit  space toggle  d delete  tab filter  t theme  q quit",
        Mode::Insert => "Enter add  Esc done",
        Mode::Edit => "Enter save  Esc cancel",
    };

    let mut spans: Vec<Span> = Vec::new();
    if app.mode == Mode::Navigate
        && let Some(ref message) = app.status_message
    {
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{TERM_W, app_with, render_to_string};
    use super::*;

    #[test]
    fn navigate_hints_and_message() {
        let mut app = app_with(&["a"]);
        app.status_message = Some("deleted \"a\"".into());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with("deleted \"a\""));
        assert!(output.contains("q quit"));
    }

    #[test]
    fn edit_mode_hints() {
        let mut app = app_with(&["a"]);
        app.mode = Mode::Edit;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("Enter save  Esc cancel"));
        assert!(!output.contains("q quit"));
    }
}
