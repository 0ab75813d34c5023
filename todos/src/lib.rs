//! # Tasklist
//!
//! The todo-list state engine: an ordered sequence of `{text, resolved}`
//! records governed by five transitions - add, remove, resolve, unresolve,
//! and reset.
//!
//! The engine is a pure reducer over `(TodoListState, TodoAction)`. After
//! every mutating transition the sequence satisfies the ordering invariant:
//! unresolved records precede resolved records, and within each partition
//! records are ordered by locale-aware, case-insensitive text comparison.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tasklist::{Todo, TodoAction, TodoEnvironment, TodoListState, TodoReducer};
//! use tasklist_core::environment::LocaleCollation;
//! use tasklist_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collation = Arc::new(LocaleCollation::new("en")?);
//! let env = TodoEnvironment::new(collation.clone());
//! let seed = vec![Todo::new("B second todo", false), Todo::new("C Third todo", false)];
//! let store = Store::new(
//!     TodoListState::seeded(seed, collation.as_ref()),
//!     TodoReducer::new(),
//!     env,
//! );
//!
//! store.send(TodoAction::Add { text: "A first todo".into() }).await?;
//! let first = store.state(|s| s.todos[0].text.clone()).await;
//! assert_eq!(first, "A first todo");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;

pub use reducer::{TodoAction, TodoEnvironment, TodoReducer};
pub use types::{Todo, TodoListState, sort_todos};
