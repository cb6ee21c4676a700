//! The "Watch Meetings" gallery: recorded meetings narrowed by a search box.

use std::sync::Arc;

use jiff::Timestamp;
use serde::Serialize;

use crate::remote::MeetingService;
use crate::types::Meeting;

use super::filter::filter_meetings;
use super::lifecycle::ViewCell;
use super::loader::{LoadOutcome, LoadState, Loadable, Loader, Screen};

pub const LOAD_FAILURE: &str = "Failed to load meetings.";
pub const END_NOTICE: &str = "You\u{2019}ve reached the end. Stay tuned for more!";

/// Per-instance state of the meeting gallery
#[derive(Debug, Clone, Default)]
pub struct MeetingsState {
    pub load: LoadState<Meeting>,
    /// Raw search box contents
    pub search_term: String,
}

impl Loadable for MeetingsState {
    type Item = Meeting;

    fn load_state(&self) -> &LoadState<Meeting> {
        &self.load
    }

    fn load_state_mut(&mut self) -> &mut LoadState<Meeting> {
        &mut self.load
    }
}

impl MeetingsState {
    pub fn meetings(&self) -> &[Meeting] {
        &self.load.items
    }
}

/// One rendered meeting card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingCard {
    /// Index in the unfiltered collection. Meetings have no stable id.
    pub position: usize,
    pub topic: String,
    /// Start time as sent by the platform
    pub start_time: String,
    #[serde(skip)]
    pub started_at: Option<Timestamp>,
    pub share_url: String,
}

pub type MeetingsScreen = Screen<MeetingCard>;

/// Derive the rendered gallery from its state
pub fn project_meetings(state: &MeetingsState) -> MeetingsScreen {
    let cards = filter_meetings(state.meetings(), &state.search_term)
        .into_iter()
        .map(|(position, meeting)| MeetingCard {
            position,
            topic: meeting.topic.clone(),
            start_time: meeting.start_time.clone(),
            started_at: meeting.started_at(),
            share_url: meeting.share_url.clone(),
        })
        .collect();
    Screen::from_parts(state.load.loading, state.load.error.as_deref(), cards)
}

/// Controller for one instance of the meeting gallery
pub struct WatchMeetingsView<S> {
    cell: ViewCell<MeetingsState>,
    loader: Loader,
    service: Arc<S>,
}

impl<S: MeetingService> WatchMeetingsView<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            cell: ViewCell::new(MeetingsState::default()),
            loader: Loader::new("watch_meetings", LOAD_FAILURE),
            service,
        }
    }

    /// Load the recordings. Only the first call fetches.
    pub async fn activate(&self) -> LoadOutcome {
        let service = Arc::clone(&self.service);
        self.loader
            .run(&self.cell, || async move { service.zoom_recordings().await })
            .await
    }

    /// Store the search box contents verbatim
    pub fn set_search_term(&self, text: impl Into<String>) {
        let text = text.into();
        self.cell.update(|s| s.search_term = text);
    }

    pub fn search_term(&self) -> String {
        self.cell.read(|s| s.search_term.clone())
    }

    pub fn project(&self) -> MeetingsScreen {
        self.cell.read(project_meetings)
    }

    pub fn state(&self) -> MeetingsState {
        self.cell.snapshot()
    }

    pub fn meetings(&self) -> Vec<Meeting> {
        self.cell.read(|s| s.meetings().to_vec())
    }

    pub fn is_loading(&self) -> bool {
        self.cell.read(|s| s.load.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.cell.read(|s| s.load.error.clone())
    }

    pub fn teardown(&self) {
        tracing::debug!("watch_meetings torn down");
        self.cell.teardown();
    }
}

impl<S> Drop for WatchMeetingsView<S> {
    fn drop(&mut self) {
        self.cell.teardown();
    }
}
