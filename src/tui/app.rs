use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::edit::{EditSession, LineBuffer};
use crate::io::config_io;
use crate::io::storage::{FileStorage, Storage};
use crate::model::config::ColorOverrides;
use crate::model::filter::{Filter, project};
use crate::model::todo::TodoId;
use crate::store::TodoStore;

use super::input;
use super::render;
use super::theme::{Theme, ThemeMode};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving around the list
    Navigate,
    /// Typing a new todo into the add prompt
    Insert,
    /// Editing an existing todo's title in place
    Edit,
}

/// Main application state: the composition root owning the store, the
/// active filter, the edit session, and the view bookkeeping.
pub struct App {
    pub store: TodoStore,
    pub filter: Filter,
    pub edit: EditSession,
    pub mode: Mode,
    /// Buffer behind the add prompt (Insert mode)
    pub input: LineBuffer,
    /// Cursor index into the projected (visible) list
    pub cursor: usize,
    /// First visible row of the list viewport
    pub scroll: usize,
    pub theme: Theme,
    pub theme_mode: ThemeMode,
    pub should_quit: bool,
    /// Transient one-line feedback shown in the status row
    pub status_message: Option<String>,
    color_overrides: ColorOverrides,
    storage: Rc<dyn Storage>,
}

impl App {
    pub fn new(
        store: TodoStore,
        storage: Rc<dyn Storage>,
        theme_mode: ThemeMode,
        color_overrides: ColorOverrides,
    ) -> Self {
        let theme = Theme::for_mode(theme_mode, &color_overrides);
        App {
            store,
            filter: Filter::default(),
            edit: EditSession::new(),
            mode: Mode::Navigate,
            input: LineBuffer::new(),
            cursor: 0,
            scroll: 0,
            theme,
            theme_mode,
            should_quit: false,
            status_message: None,
            color_overrides,
            storage,
        }
    }

    /// Ids of the todos the active filter lets through, in order.
    pub fn visible_ids(&self) -> Vec<TodoId> {
        project(self.store.todos(), self.filter)
            .iter()
            .map(|t| t.id)
            .collect()
    }

    /// Id of the todo under the cursor, if the visible list is non-empty.
    pub fn cursor_todo_id(&self) -> Option<TodoId> {
        self.visible_ids().get(self.cursor).copied()
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_ids().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Switch filters, keeping the cursor on the same todo when it is
    /// still visible under the new filter.
    pub fn set_filter(&mut self, filter: Filter) {
        let prev = self.cursor_todo_id();
        self.filter = filter;
        let ids = self.visible_ids();
        self.cursor = prev
            .and_then(|id| ids.iter().position(|&i| i == id))
            .unwrap_or(0);
        self.clamp_cursor();
    }

    /// Flip light/dark, rebuild the palette, persist the preference.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::for_mode(self.theme_mode, &self.color_overrides);
        self.theme_mode.save(self.storage.as_ref());
        self.status_message = Some(format!("theme \u{2192} {}", self.theme_mode.as_str()));
    }
}

/// Launch the TUI against the given data directory.
pub fn run(data_dir: &Path, theme_override: Option<ThemeMode>) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(data_dir);
    let storage: Rc<dyn Storage> = Rc::new(FileStorage::new(data_dir));
    let store = TodoStore::load(storage.clone());

    let theme_mode = theme_override
        .or_else(|| ThemeMode::load(storage.as_ref()))
        .unwrap_or_else(ThemeMode::ambient);

    let mut app = App::new(store, storage, theme_mode, config.ui.colors);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
