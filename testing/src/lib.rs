//! # Tasklist Testing
//!
//! Testing utilities and helpers for the tasklist reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{ReducerTest, test_collation};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(test_collation()))
//!     .given_state(TodoListState::default())
//!     .when_action(TodoAction::Add { text: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .run();
//! ```

pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use std::sync::Arc;

    use tasklist_core::environment::{AsciiCollation, Collation};

    /// Create a deterministic collation for tests
    ///
    /// Uses the ASCII case-insensitive fallback so tests do not depend on
    /// locale data. For ASCII input this orders identically to the
    /// locale-aware collation.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use tasklist_core::environment::Collation;
    /// use tasklist_testing::mocks::test_collation;
    ///
    /// let collation = test_collation();
    /// assert_eq!(collation.compare("a first", "B second"), Ordering::Less);
    /// ```
    #[must_use]
    pub fn test_collation() -> Arc<dyn Collation> {
        Arc::new(AsciiCollation)
    }
}

// Re-export commonly used items
pub use mocks::test_collation;
pub use reducer_test::{ReducerTest, assertions};
