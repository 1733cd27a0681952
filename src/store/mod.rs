use std::rc::Rc;

use log::warn;

use crate::io::storage::{Storage, TODOS_KEY};
use crate::model::todo::{Todo, TodoId};

/// Owner and sole mutator of the todo collection.
///
/// Every successful mutation writes the whole collection through to
/// storage. A failed write is logged and otherwise ignored: the
/// in-memory list stays authoritative and the next mutation writes
/// again.
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
    storage: Rc<dyn Storage>,
}

impl TodoStore {
    /// Load the collection from storage. Absent or malformed data
    /// starts an empty collection; this never fails.
    pub fn load(storage: Rc<dyn Storage>) -> Self {
        let todos: Vec<Todo> = storage
            .read(TODOS_KEY)
            .and_then(|text| match serde_json::from_str(&text) {
                Ok(todos) => Some(todos),
                Err(e) => {
                    warn!("discarding malformed stored todos: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        // Seed the counter past every loaded id so ids stay unique
        // across sessions.
        let next_id = todos.iter().map(|t| t.id.0).max().map_or(1, |max| max + 1);

        TodoStore {
            todos,
            next_id,
            storage,
        }
    }

    /// Append a new todo. The title is trimmed; an empty result is a
    /// no-op returning None, with no write.
    pub fn create(&mut self, raw_title: &str) -> Option<&Todo> {
        let title = raw_title.trim();
        if title.is_empty() {
            return None;
        }
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.todos.push(Todo::new(id, title.to_string()));
        self.persist();
        self.todos.last()
    }

    /// Flip `completed`. Unknown ids are silently ignored.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Replace a todo's title. Empty-after-trim input and unknown ids
    /// are silently ignored, leaving the previous title in place.
    pub fn edit(&mut self, id: TodoId, raw_title: &str) -> bool {
        let title = raw_title.trim();
        if title.is_empty() {
            return false;
        }
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.title = title.to_string();
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Remove a todo, preserving the order of the rest.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Read-only snapshot for projection and rendering.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Count of not-yet-completed todos (the "N left" in the tab bar).
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.todos) {
            Ok(json) => json,
            Err(e) => {
                warn!("cannot serialize todos: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.write(TODOS_KEY, &json) {
            warn!("persistence unavailable this cycle: {}", e);
        }
    }
}
