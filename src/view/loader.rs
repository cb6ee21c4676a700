//! One-shot loading of a view's collection.
//!
//! A [`Loader`] invokes its fetch at most once per view instance and moves
//! the view through `Loading -> Ready | Error`. Failures are logged with
//! their raw detail and replaced by a fixed message before they reach the
//! view state.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::error::Result;

use super::lifecycle::ViewCell;

/// Loading status plus the collection it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl<T> LoadState<T> {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the collection wholesale
    fn succeed(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    fn fail(&mut self, message: &str) {
        self.items.clear();
        self.error = Some(message.to_string());
        self.loading = false;
    }

    pub fn phase(&self) -> ViewPhase {
        if self.loading {
            ViewPhase::Loading
        } else if self.error.is_some() {
            ViewPhase::Error
        } else if self.items.is_empty() {
            ViewPhase::Empty
        } else {
            ViewPhase::Populated
        }
    }
}

/// Where a view is in its lifecycle. `Empty` and `Populated` both refine
/// `Ready` and only change what gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    Loading,
    Error,
    Empty,
    Populated,
}

/// Render-ready output of a projector
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Screen<T> {
    Loading,
    Error { message: String },
    Empty,
    Populated { items: Vec<T> },
}

impl<T> Screen<T> {
    /// Build a screen from load status and an already-derived item list
    pub fn from_parts(loading: bool, error: Option<&str>, items: Vec<T>) -> Self {
        if loading {
            Screen::Loading
        } else if let Some(message) = error {
            Screen::Error {
                message: message.to_string(),
            }
        } else if items.is_empty() {
            Screen::Empty
        } else {
            Screen::Populated { items }
        }
    }

    pub fn phase(&self) -> ViewPhase {
        match self {
            Screen::Loading => ViewPhase::Loading,
            Screen::Error { .. } => ViewPhase::Error,
            Screen::Empty => ViewPhase::Empty,
            Screen::Populated { .. } => ViewPhase::Populated,
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Screen::Populated { items } => items,
            _ => &[],
        }
    }
}

/// View state that embeds a [`LoadState`]
pub trait Loadable {
    type Item;

    fn load_state(&self) -> &LoadState<Self::Item>;
    fn load_state_mut(&mut self) -> &mut LoadState<Self::Item>;
}

/// What happened when a loader was asked to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetch resolved and the store now holds this many items
    Loaded(usize),
    /// The fetch failed; the view shows the fixed failure message
    Failed,
    /// This view instance already ran its fetch
    AlreadyStarted,
    /// The view was torn down before the result could be applied
    Detached,
}

/// Runs a view's initial fetch exactly once
#[derive(Debug)]
pub struct Loader {
    view: &'static str,
    failure_message: &'static str,
    started: AtomicBool,
}

impl Loader {
    pub fn new(view: &'static str, failure_message: &'static str) -> Self {
        Self {
            view,
            failure_message,
            started: AtomicBool::new(false),
        }
    }

    /// Run the fetch and apply its result to the view.
    ///
    /// `fetch` is only invoked on the first call for a live view.
    pub async fn run<S, F, Fut>(&self, cell: &ViewCell<S>, fetch: F) -> LoadOutcome
    where
        S: Loadable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<S::Item>>>,
    {
        if self.started.swap(true, Ordering::AcqRel) {
            tracing::debug!(view = self.view, "load already started, skipping fetch");
            return LoadOutcome::AlreadyStarted;
        }

        if !cell.update(|s| s.load_state_mut().begin()) {
            return LoadOutcome::Detached;
        }

        tracing::debug!(view = self.view, "loading");
        match fetch().await {
            Ok(items) => {
                let count = items.len();
                if cell.update(|s| s.load_state_mut().succeed(items)) {
                    tracing::debug!(view = self.view, count, "loaded");
                    LoadOutcome::Loaded(count)
                } else {
                    LoadOutcome::Detached
                }
            }
            Err(e) => {
                tracing::error!(view = self.view, error = %e, "{}", self.failure_message);
                let message = self.failure_message;
                if cell.update(|s| s.load_state_mut().fail(message)) {
                    LoadOutcome::Failed
                } else {
                    LoadOutcome::Detached
                }
            }
        }
    }
}
