use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::filter::Filter;
use crate::tui::app::App;

/// Render the tab bar: the three filter tabs plus a remaining-count on
/// the right, with a separator line below.
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn tab_title(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "All",
        Filter::Active => "Active",
        Filter::Completed => "Completed",
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    let mut spans: Vec<Span> = Vec::new();

    // Leading icon
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{2713}",
        Style::default().fg(app.theme.green).bg(bg),
    ));
    spans.push(Span::styled(" ", bg_style));

    for (i, filter) in [Filter::All, Filter::Active, Filter::Completed]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(sep.clone());
        }
        let is_current = app.filter == filter;
        let style = if is_current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", tab_title(filter)), style));
    }

    // Right-aligned remaining count
    let count = format!("{} left", app.store.remaining());
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let count_width = count.chars().count() + 1;
    let width = area.width as usize;
    if content_width + count_width < width {
        let padding = width - content_width - count_width;
        spans.push(Span::styled(" ".repeat(padding), bg_style));
        spans.push(Span::styled(
            count,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(" ", bg_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default()
            .fg(app.theme.dim)
            .bg(app.theme.background),
    );
    let paragraph = Paragraph::new(Line::from(line));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{TERM_W, app_with, render_to_string};
    use super::*;

    #[test]
    fn tabs_show_all_filters_and_remaining_count() {
        let mut app = app_with(&["a", "b", "c"]);
        let b = app.store.todos()[1].id;
        app.store.toggle(b);

        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_tab_bar(frame, &app, area);
        });

        assert!(output.contains("All"));
        assert!(output.contains("Active"));
        assert!(output.contains("Completed"));
        assert!(output.contains("2 left"));
        assert!(output.contains("\u{2500}"));
    }
}
