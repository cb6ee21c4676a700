//! The "My Ideas" board: the member's own submissions with a per-card
//! context menu and confirmed deletion.

use std::sync::Arc;

use serde::Serialize;

use crate::remote::IdeaService;
use crate::types::{Idea, IdeaId};

use super::category::{TagColor, tag_color};
use super::confirm::{ConfirmDialogState, Confirmer};
use super::lifecycle::ViewCell;
use super::loader::{LoadOutcome, LoadState, Loadable, Loader, Screen};
use super::routes;
use super::toast::{Notifier, Toast};

pub const LOAD_FAILURE: &str = "Failed to load ideas";
pub const EMPTY_NOTICE: &str = "No ideas found.";

const DELETED_TITLE: &str = "Deleted!";
const DELETED_MESSAGE: &str = "Idea has been deleted.";
const DELETE_FAILED_TITLE: &str = "Error";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete idea.";

/// Per-instance state of the ideas board
#[derive(Debug, Clone, Default)]
pub struct IdeasState {
    pub load: LoadState<Idea>,
    /// Card whose context menu is open. At most one at a time.
    pub active_menu: Option<IdeaId>,
}

impl Loadable for IdeasState {
    type Item = Idea;

    fn load_state(&self) -> &LoadState<Idea> {
        &self.load
    }

    fn load_state_mut(&mut self) -> &mut LoadState<Idea> {
        &mut self.load
    }
}

impl IdeasState {
    pub fn ideas(&self) -> &[Idea] {
        &self.load.items
    }

    /// Open the menu for `id`, or close it if it is already the open one
    pub fn toggle_menu(&mut self, id: &IdeaId) {
        if self.active_menu.as_ref() == Some(id) {
            self.active_menu = None;
        } else {
            self.active_menu = Some(id.clone());
        }
    }

    /// Drop every idea with this id. Returns how many were removed.
    fn remove_idea(&mut self, id: &IdeaId) -> usize {
        let before = self.load.items.len();
        self.load.items.retain(|idea| &idea.id != id);
        if self.active_menu.as_ref() == Some(id) {
            self.active_menu = None;
        }
        before - self.load.items.len()
    }
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The member declined or dismissed the prompt
    Cancelled,
    /// The platform deleted the idea and it left the board
    Deleted,
    /// The platform call failed; the board is unchanged
    Failed,
    /// The board was torn down before the outcome could be applied
    Detached,
    /// The board failed to load, so it has no cards to delete from
    Unavailable,
}

/// One rendered idea card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdeaCard {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub tag_color: Option<TagColor>,
    pub total_upvotes: i64,
    pub menu_open: bool,
    pub detail_link: String,
    pub analysis_link: String,
}

impl IdeaCard {
    fn from_idea(idea: &Idea, active_menu: Option<&IdeaId>) -> Self {
        Self {
            id: idea.id.clone(),
            title: idea.title.clone(),
            description: idea.description.clone(),
            category: idea.category.clone(),
            tag_color: idea.category.as_deref().map(tag_color),
            total_upvotes: idea.total_upvotes,
            menu_open: active_menu == Some(&idea.id),
            detail_link: routes::idea_detail(&idea.id),
            analysis_link: routes::idea_analysis(&idea.id),
        }
    }
}

pub type IdeasScreen = Screen<IdeaCard>;

/// Derive the rendered board from its state. Cards keep store order.
pub fn project_ideas(state: &IdeasState) -> IdeasScreen {
    let active = state.active_menu.as_ref();
    let cards = state
        .ideas()
        .iter()
        .map(|idea| IdeaCard::from_idea(idea, active))
        .collect();
    Screen::from_parts(state.load.loading, state.load.error.as_deref(), cards)
}

/// Controller for one instance of the ideas board
pub struct MyIdeasView<S, C, N> {
    cell: ViewCell<IdeasState>,
    loader: Loader,
    service: Arc<S>,
    confirmer: Arc<C>,
    notifier: Arc<N>,
}

impl<S, C, N> MyIdeasView<S, C, N>
where
    S: IdeaService,
    C: Confirmer,
    N: Notifier,
{
    pub fn new(service: Arc<S>, confirmer: Arc<C>, notifier: Arc<N>) -> Self {
        Self {
            cell: ViewCell::new(IdeasState::default()),
            loader: Loader::new("my_ideas", LOAD_FAILURE),
            service,
            confirmer,
            notifier,
        }
    }

    /// Load the member's ideas. Only the first call fetches.
    pub async fn activate(&self) -> LoadOutcome {
        let service = Arc::clone(&self.service);
        self.loader
            .run(&self.cell, || async move { service.fetch_my_ideas().await })
            .await
    }

    /// Ask for confirmation, then delete the idea on the platform and drop
    /// it from the board.
    pub async fn request_delete(&self, id: &IdeaId) -> DeleteOutcome {
        if self.cell.read(|s| s.load.error.is_some()) {
            tracing::debug!(%id, "board failed to load, delete unavailable");
            return DeleteOutcome::Unavailable;
        }

        let dialog = ConfirmDialogState::for_delete_idea(id.clone());
        if !self.confirmer.confirm(&dialog).await {
            tracing::debug!(%id, "delete cancelled");
            return DeleteOutcome::Cancelled;
        }

        if !self.cell.is_alive() {
            return DeleteOutcome::Detached;
        }

        match self.service.delete_idea(id).await {
            Ok(()) => {
                let mut removed = 0;
                if !self.cell.update(|s| removed = s.remove_idea(id)) {
                    return DeleteOutcome::Detached;
                }
                if removed == 0 {
                    tracing::debug!(%id, "deleted idea was not on the board");
                }
                self.notifier
                    .notify(Toast::success(DELETED_TITLE, DELETED_MESSAGE));
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "Delete failed");
                if !self.cell.is_alive() {
                    return DeleteOutcome::Detached;
                }
                self.notifier
                    .notify(Toast::error(DELETE_FAILED_TITLE, DELETE_FAILED_MESSAGE));
                DeleteOutcome::Failed
            }
        }
    }

    /// Toggle the context menu of a card. Returns the menu now open, if any.
    pub fn toggle_menu(&self, id: &IdeaId) -> Option<IdeaId> {
        let mut active = None;
        self.cell.update(|s| {
            s.toggle_menu(id);
            active = s.active_menu.clone();
        });
        active
    }

    pub fn project(&self) -> IdeasScreen {
        self.cell.read(project_ideas)
    }

    pub fn state(&self) -> IdeasState {
        self.cell.snapshot()
    }

    pub fn ideas(&self) -> Vec<Idea> {
        self.cell.read(|s| s.ideas().to_vec())
    }

    pub fn active_menu(&self) -> Option<IdeaId> {
        self.cell.read(|s| s.active_menu.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.cell.read(|s| s.load.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.cell.read(|s| s.load.error.clone())
    }

    /// Destroy the view. Pending continuations stop writing to it.
    pub fn teardown(&self) {
        tracing::debug!("my_ideas torn down");
        self.cell.teardown();
    }
}

impl<S, C, N> Drop for MyIdeasView<S, C, N> {
    fn drop(&mut self) {
        self.cell.teardown();
    }
}
