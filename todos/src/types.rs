//! Domain types for the todo list.
//!
//! A todo is a text record with a resolved flag; the text itself is the
//! identity. There is no separate id field: lookup, removal, and duplicate
//! detection all use exact text equality.

use serde::{Deserialize, Serialize};
use tasklist_core::environment::Collation;

/// A single todo record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// The todo text; doubles as its identity
    pub text: String,
    /// Whether the todo has been resolved
    pub resolved: bool,
}

impl Todo {
    /// Creates a todo record
    #[must_use]
    pub fn new(text: impl Into<String>, resolved: bool) -> Self {
        Self {
            text: text.into(),
            resolved,
        }
    }

    /// Creates an unresolved todo, the shape produced by `Add`
    #[must_use]
    pub fn pending(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }
}

/// Sorts todos per the ordering invariant: unresolved records first, then
/// locale base-insensitive ascending text within each partition
///
/// The sort is stable, so records whose texts compare base-equal keep their
/// relative order.
pub fn sort_todos(todos: &mut [Todo], collation: &dyn Collation) {
    todos.sort_by(|a, b| {
        a.resolved
            .cmp(&b.resolved)
            .then_with(|| collation.compare(&a.text, &b.text))
    });
}

/// State of the todo list
///
/// Holds the current ordered sequence plus the seed sequence captured at
/// construction, which `Reset` restores.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListState {
    /// Current ordered sequence of todos
    pub todos: Vec<Todo>,
    /// Seed sequence, sorted once at construction
    seed: Vec<Todo>,
}

impl TodoListState {
    /// Builds state from caller-supplied seed records
    ///
    /// The seed is sorted per the ordering invariant, and that sorted
    /// sequence is what `Reset` later restores. The seed path does not
    /// de-duplicate: records sharing a text are kept as supplied.
    #[must_use]
    pub fn seeded(mut seed: Vec<Todo>, collation: &dyn Collation) -> Self {
        sort_todos(&mut seed, collation);
        Self {
            todos: seed.clone(),
            seed,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the list is empty (the view shows its reset affordance here)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of unresolved todos
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.resolved).count()
    }

    /// Returns the first todo whose text matches exactly
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.text == text)
    }

    /// Whether a todo with exactly this text exists
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Replaces the current sequence with the seed captured at construction
    pub(crate) fn restore_seed(&mut self) {
        self.todos = self.seed.clone();
    }
}
