//! View instance lifetime and the stale-update guard.
//!
//! Every view instance owns a [`ViewCell`] holding its state and a
//! [`ViewScope`] liveness token. Async continuations (a fetch resolving, a
//! delete completing) write through [`ViewCell::update`], which refuses the
//! write once the view has been torn down.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

/// Liveness token shared by a view and its in-flight continuations
#[derive(Debug, Clone)]
pub struct ViewScope {
    alive: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the view as destroyed. Idempotent.
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one view instance, guarded by its scope
#[derive(Debug)]
pub struct ViewCell<S> {
    state: Arc<Mutex<S>>,
    scope: ViewScope,
}

impl<S> Clone for ViewCell<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            scope: self.scope.clone(),
        }
    }
}

impl<S> ViewCell<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial)),
            scope: ViewScope::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn is_alive(&self) -> bool {
        self.scope.is_alive()
    }

    /// Read the current state. Reads stay valid after teardown.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.lock())
    }

    /// Apply a mutation unless the view has been torn down.
    ///
    /// Returns `false` when the write was dropped. The lock is never held
    /// across an await point: callers pass a synchronous closure.
    pub fn update(&self, f: impl FnOnce(&mut S)) -> bool {
        let mut state = self.state.lock();
        if !self.scope.is_alive() {
            tracing::warn!("dropping state update for a view that was torn down");
            return false;
        }
        f(&mut state);
        true
    }

    pub fn teardown(&self) {
        self.scope.teardown();
    }
}

impl<S: Clone> ViewCell<S> {
    pub fn snapshot(&self) -> S {
        self.state.lock().clone()
    }
}
