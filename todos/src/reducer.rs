//! Reducer logic for the todo list.
//!
//! Five transitions govern the list: add, remove, resolve, unresolve, and
//! reset. Every transition is total - actions referencing a text with no
//! matching record are no-ops, never failures. The exhaustive `match` over
//! [`TodoAction`] is the compile-time replacement for a runtime
//! unknown-action fault.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tasklist_core::environment::Collation;
use tasklist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

use crate::types::{Todo, TodoListState, sort_todos};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Collation used to order todos
    pub collation: Arc<dyn Collation>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(collation: Arc<dyn Collation>) -> Self {
        Self { collation }
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Actions the view dispatches against the todo list
///
/// Each text-carrying action identifies its target by exact, case-sensitive
/// text equality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Insert an unresolved todo unless one with this exact text exists
    Add {
        /// Text of the new todo
        text: String,
    },

    /// Remove the todo with this exact text
    Remove {
        /// Text of the todo to remove
        text: String,
    },

    /// Mark the todo with this exact text as resolved
    Resolve {
        /// Text of the todo to resolve
        text: String,
    },

    /// Mark the todo with this exact text as unresolved
    Unresolve {
        /// Text of the todo to unresolve
        text: String,
    },

    /// Restore the seed sequence supplied at initialization
    Reset,
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Moves the record matching `text` into the given resolved partition
    ///
    /// Mirrors the remove-then-reinsert shape of the other mutations: the
    /// matching record is filtered out, a replacement with the flag applied
    /// is appended, and the list is re-sorted. Absent text is a no-op.
    fn toggle(state: &mut TodoListState, text: &str, resolved: bool, collation: &dyn Collation) {
        let Some(found) = state.get(text).cloned() else {
            return;
        };

        state.todos.retain(|t| t.text != text);
        state.todos.push(Todo::new(found.text, resolved));
        sort_todos(&mut state.todos, collation);
    }
}

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { text } => {
                // Exact-text duplicate: leave the sequence unchanged
                if !state.contains(&text) {
                    state.todos.push(Todo::pending(text));
                    sort_todos(&mut state.todos, env.collation.as_ref());
                }
            },

            TodoAction::Remove { text } => {
                // Filtering preserves order; no re-sort needed
                state.todos.retain(|t| t.text != text);
            },

            TodoAction::Resolve { text } => {
                Self::toggle(state, &text, true, env.collation.as_ref());
            },

            TodoAction::Unresolve { text } => {
                Self::toggle(state, &text, false, env.collation.as_ref());
            },

            TodoAction::Reset => {
                state.restore_seed();
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}
