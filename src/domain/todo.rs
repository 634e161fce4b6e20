use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TodoId(pub String);

impl TodoId {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

/// Validated body of a create or update request. `text` is already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoInput {
    pub text: String,
    pub completed: Option<bool>,
}

/// Fields overwritten by an update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl From<TodoInput> for TodoChanges {
    fn from(input: TodoInput) -> Self {
        Self { text: Some(input.text), completed: input.completed }
    }
}

impl Todo {
    pub fn apply(&mut self, changes: TodoChanges) {
        if let Some(text) = changes.text { self.text = text; }
        if let Some(completed) = changes.completed { self.completed = completed; }
    }
}
