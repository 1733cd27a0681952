use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a todo. Assigned by the store at creation, never reused
/// within a collection's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Non-empty, trimmed. The store enforces this on every mutation.
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: String) -> Self {
        Todo {
            id,
            title,
            completed: false,
        }
    }
}
