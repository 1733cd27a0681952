use crate::model::todo::{Todo, TodoId};
use crate::store::TodoStore;
use crate::util::text;

// ---------------------------------------------------------------------------
// Line buffer
// ---------------------------------------------------------------------------

/// Single-line edit buffer with a byte-offset cursor that only ever
/// rests on grapheme boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        LineBuffer::default()
    }

    /// Buffer holding `text` with the cursor at the end.
    pub fn from_text(text: &str) -> Self {
        LineBuffer {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the grapheme before the cursor. Returns false at start.
    pub fn backspace(&mut self) -> bool {
        match text::prev_boundary(&self.text, self.cursor) {
            Some(prev) => {
                self.text.drain(prev..self.cursor);
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    /// Delete from the start of the previous word to the cursor.
    pub fn delete_word_back(&mut self) {
        let start = text::word_left(&self.text, self.cursor);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Delete everything before the cursor.
    pub fn kill_to_start(&mut self) {
        self.text.drain(..self.cursor);
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = text::prev_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = text::next_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_word_left(&mut self) {
        self.cursor = text::word_left(&self.text, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = text::word_right(&self.text, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

// ---------------------------------------------------------------------------
// Edit session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
enum EditState {
    #[default]
    Idle,
    Editing {
        id: TodoId,
        draft: LineBuffer,
    },
}

/// The inline-edit state machine: Idle → Editing(id, draft) → Idle via
/// commit or cancel. At most one todo is being edited at a time;
/// beginning an edit while another todo's session is open discards that
/// draft without committing it.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        EditSession::default()
    }

    /// Start editing `todo`, seeding the draft with its current title.
    /// Re-entering the edit of the todo already being edited keeps the
    /// in-progress draft.
    pub fn begin(&mut self, todo: &Todo) {
        if let EditState::Editing { id, .. } = &self.state
            && *id == todo.id
        {
            return;
        }
        self.state = EditState::Editing {
            id: todo.id,
            draft: LineBuffer::from_text(&todo.title),
        };
    }

    /// Apply the draft through `TodoStore::edit` (which no-ops on an
    /// empty trim) and return to Idle. Returns whether the store
    /// changed. A no-op when Idle.
    pub fn commit(&mut self, store: &mut TodoStore) -> bool {
        match std::mem::take(&mut self.state) {
            EditState::Editing { id, draft } => store.edit(id, draft.text()),
            EditState::Idle => false,
        }
    }

    /// Discard the draft and return to Idle without touching the store.
    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// Id of the todo being edited, if any.
    pub fn editing_id(&self) -> Option<TodoId> {
        match &self.state {
            EditState::Editing { id, .. } => Some(*id),
            EditState::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&LineBuffer> {
        match &self.state {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut LineBuffer> {
        match &mut self.state {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::io::storage::testing::MemoryStorage;

    fn store_with(titles: &[&str]) -> TodoStore {
        let mut store = TodoStore::load(MemoryStorage::shared());
        for title in titles {
            store.create(title);
        }
        store
    }

    // ── LineBuffer ─────────────────────────────────────────────────

    #[test]
    fn insert_and_backspace_ascii() {
        let mut buf = LineBuffer::new();
        for c in "milk".chars() {
            buf.insert(c);
        }
        assert_eq!(buf.text(), "milk");
        assert!(buf.backspace());
        assert_eq!(buf.text(), "mil");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut buf = LineBuffer::from_text("a");
        buf.move_home();
        assert!(!buf.backspace());
        assert_eq!(buf.text(), "a");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut buf = LineBuffer::from_text("cafe\u{0301}");
        assert!(buf.backspace());
        assert_eq!(buf.text(), "caf");
    }

    #[test]
    fn insert_mid_buffer() {
        let mut buf = LineBuffer::from_text("bd");
        buf.move_left();
        buf.insert('c');
        assert_eq!(buf.text(), "bcd");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn cursor_moves_over_wide_graphemes() {
        let mut buf = LineBuffer::from_text("a你b");
        buf.move_home();
        buf.move_right();
        assert_eq!(buf.cursor(), 1);
        buf.move_right();
        assert_eq!(buf.cursor(), 4); // past the 3-byte 你
        buf.move_left();
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn word_operations() {
        let mut buf = LineBuffer::from_text("buy oat milk");
        buf.delete_word_back();
        assert_eq!(buf.text(), "buy oat ");
        buf.move_word_left();
        assert_eq!(buf.cursor(), 4);
        buf.move_word_right();
        assert_eq!(buf.cursor(), 8);
        buf.kill_to_start();
        assert_eq!(buf.text(), "");
    }

    // ── EditSession ────────────────────────────────────────────────

    #[test]
    fn begin_seeds_draft_with_current_title() {
        let store = store_with(&["Buy milk"]);
        let todo = &store.todos()[0];
        let mut session = EditSession::new();
        session.begin(todo);

        assert!(session.is_editing());
        assert_eq!(session.editing_id(), Some(todo.id));
        assert_eq!(session.draft().unwrap().text(), "Buy milk");
        assert_eq!(session.draft().unwrap().cursor(), "Buy milk".len());
    }

    #[test]
    fn cancel_leaves_store_untouched() {
        let mut store = store_with(&["Buy milk"]);
        let before = store.todos().to_vec();
        let id = before[0].id;

        let mut session = EditSession::new();
        session.begin(store.get(id).unwrap());
        session.draft_mut().unwrap().insert('!');
        session.cancel();

        assert!(!session.is_editing());
        assert_eq!(store.todos(), &before[..]);

        // commit after cancel is a no-op too
        assert!(!session.commit(&mut store));
        assert_eq!(store.todos(), &before[..]);
    }

    #[test]
    fn commit_applies_draft_and_returns_to_idle() {
        let mut store = store_with(&["Old title"]);
        let id = store.todos()[0].id;

        let mut session = EditSession::new();
        session.begin(store.get(id).unwrap());
        let draft = session.draft_mut().unwrap();
        draft.clear();
        for c in "New title".chars() {
            draft.insert(c);
        }
        assert!(session.commit(&mut store));

        assert!(!session.is_editing());
        assert_eq!(store.get(id).unwrap().title, "New title");
    }

    #[test]
    fn commit_of_blank_draft_discards_the_edit() {
        let mut store = store_with(&["Keep me"]);
        let id = store.todos()[0].id;

        let mut session = EditSession::new();
        session.begin(store.get(id).unwrap());
        session.draft_mut().unwrap().clear();
        assert!(!session.commit(&mut store));

        assert!(!session.is_editing());
        assert_eq!(store.get(id).unwrap().title, "Keep me");
    }

    #[test]
    fn begin_on_another_todo_discards_prior_draft() {
        let mut store = store_with(&["first", "second"]);
        let (a, b) = (store.todos()[0].id, store.todos()[1].id);

        let mut session = EditSession::new();
        session.begin(store.get(a).unwrap());
        session.draft_mut().unwrap().insert('X');

        session.begin(store.get(b).unwrap());
        assert_eq!(session.editing_id(), Some(b));
        assert_eq!(session.draft().unwrap().text(), "second");

        // the abandoned draft never reached the store
        session.commit(&mut store);
        assert_eq!(store.get(a).unwrap().title, "first");
    }

    #[test]
    fn begin_on_same_todo_keeps_in_progress_draft() {
        let store = store_with(&["title"]);
        let todo = &store.todos()[0];

        let mut session = EditSession::new();
        session.begin(todo);
        session.draft_mut().unwrap().insert('!');
        session.begin(todo);
        assert_eq!(session.draft().unwrap().text(), "title!");
    }
}
