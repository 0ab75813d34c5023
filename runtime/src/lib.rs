//! # Tasklist Runtime
//!
//! The Store runtime for the tasklist reducer architecture.
//!
//! A [`Store`] owns a state value behind a lock, a [`Reducer`], and an
//! Environment. Actions sent to the store are serialized at the reducer:
//! each dispatch acquires the write lock, runs the reducer synchronously,
//! and only then executes the returned effect descriptions asynchronously.
//! Effects that produce actions feed them back into the same store.
//!
//! ## Example
//!
//! ```ignore
//! let store = Store::new(TodoListState::default(), TodoReducer::new(), env);
//! store.send(TodoAction::Add { text: "Buy milk".into() }).await?;
//! let count = store.state(|s| s.len()).await;
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use tasklist_core::effect::Effect;
use tasklist_core::reducer::Reducer;
use thiserror::Error;
use tokio::sync::{RwLock, broadcast};

/// Errors surfaced by the store runtime
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store is shutting down and rejects new actions
    #[error("store is shutting down")]
    ShutdownInProgress,

    /// Shutdown timed out with effects still running
    #[error("shutdown timed out with {0} effects still running")]
    ShutdownTimeout(usize),
}

/// Decrements the pending-effect counter when an effect task finishes,
/// including on panic.
struct PendingGuard(Arc<AtomicUsize>);

impl PendingGuard {
    fn acquire(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with action feedback loop)
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
    pending_effects: Arc<AtomicUsize>,
    /// Actions produced by effects are broadcast to observers. This is how
    /// an out-of-process view layer watches the store without polling.
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// The action broadcast channel buffers 16 actions; use
    /// [`Store::with_broadcast_capacity`] for slow observers.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Create a new store with a custom action broadcast capacity
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
            action_broadcast,
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Executes returned effects asynchronously
    ///
    /// The reducer runs synchronously while holding the write lock, so
    /// concurrent `send` calls serialize at the reducer: each dispatch is an
    /// atomic state transition. `send` returns after starting effect
    /// execution, not after effect completion.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<(), StoreError> {
        if self.shutdown.load(Ordering::Acquire) {
            tracing::warn!("rejected action: store is shutting down");
            return Err(StoreError::ShutdownInProgress);
        }

        tracing::debug!("processing action");

        let effects = {
            let mut state = self.state.write().await;
            tracing::trace!("acquired write lock on state");
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        tracing::trace!(count = effects.len(), "executing effects");
        for effect in effects {
            self.execute_effect(effect);
        }

        Ok(())
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure so the read lock is released promptly:
    ///
    /// ```ignore
    /// let todo_count = store.state(|s| s.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribe to all actions produced by effects of this store
    ///
    /// Only feedback actions are broadcast, not the initial actions passed to
    /// [`Store::send`]. A lagging receiver skips old actions.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Initiate graceful shutdown of the store
    ///
    /// Sets the shutdown flag (rejecting new actions) and waits for pending
    /// effects to complete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before
    /// all pending effects complete.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("initiating graceful shutdown");
        self.shutdown.store(true, Ordering::Release);

        let start = std::time::Instant::now();
        let poll_interval = Duration::from_millis(10);

        loop {
            let pending = self.pending_effects.load(Ordering::Acquire);

            if pending == 0 {
                tracing::info!("all effects completed, shutdown successful");
                return Ok(());
            }

            if start.elapsed() >= timeout {
                tracing::error!(pending_effects = pending, "shutdown timeout");
                return Err(StoreError::ShutdownTimeout(pending));
            }

            tracing::debug!(pending_effects = pending, "waiting for effects");
            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Spawn a task that drives one effect to completion
    fn execute_effect(&self, effect: Effect<A>) {
        if effect.is_none() {
            return;
        }

        let store = self.clone();
        let guard = PendingGuard::acquire(Arc::clone(&self.pending_effects));
        tokio::spawn(async move {
            let _guard = guard;
            store.run_effect(effect).await;
        });
    }

    /// Run one effect, dispatching any produced actions back into the store
    ///
    /// Boxed because `Sequential` recurses through arbitrarily nested effects.
    fn run_effect(&self, effect: Effect<A>) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            match effect {
                Effect::None => {},
                Effect::Parallel(effects) => {
                    // Sub-effects get their own tasks
                    for effect in effects {
                        self.execute_effect(effect);
                    }
                },
                Effect::Sequential(effects) => {
                    for effect in effects {
                        self.run_effect(effect).await;
                    }
                },
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    self.feedback(*action).await;
                },
                Effect::Future(future) => {
                    if let Some(action) = future.await {
                        self.feedback(action).await;
                    }
                },
            }
        })
    }

    /// Dispatch an effect-produced action: broadcast it to observers, run the
    /// reducer, and execute any further effects
    ///
    /// Feedback actions bypass the shutdown check so in-flight effects can
    /// finish their work during a graceful shutdown.
    async fn feedback(&self, action: A) {
        tracing::debug!("processing feedback action");

        // Observers may be absent; a failed broadcast is not an error.
        let _ = self.action_broadcast.send(action.clone());

        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        for effect in effects {
            self.execute_effect(effect);
        }
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            shutdown: Arc::clone(&self.shutdown),
            pending_effects: Arc::clone(&self.pending_effects),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}
