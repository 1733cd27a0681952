use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::storage::testing::MemoryStorage;
use crate::model::config::ColorOverrides;
use crate::store::TodoStore;
use crate::tui::app::App;
use crate::tui::theme::ThemeMode;

pub const TERM_W: u16 = 80;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over an in-memory store seeded with the given titles.
pub fn app_with(titles: &[&str]) -> App {
    let storage = MemoryStorage::shared();
    let mut store = TodoStore::load(storage.clone());
    for title in titles {
        store.create(title);
    }
    App::new(store, storage, ThemeMode::Dark, ColorOverrides::default())
}
