#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::Notify;

use ideahub::error::{IdeaHubError, Result};
use ideahub::remote::{IdeaService, MeetingService};
use ideahub::types::{Idea, IdeaId, Meeting};
use ideahub::view::{ConfirmDialogState, Confirmer};

/// In-memory idea service with call counters and optional gates
#[derive(Default)]
pub struct MockIdeaService {
    ideas: Mutex<Vec<Idea>>,
    fetch_error: Option<String>,
    delete_error: Option<String>,
    fetch_gate: Option<Arc<Notify>>,
    delete_gate: Option<Arc<Notify>>,
    fetch_calls: AtomicUsize,
    delete_calls: Mutex<Vec<IdeaId>>,
}

impl MockIdeaService {
    pub fn new(ideas: Vec<Idea>) -> Self {
        Self {
            ideas: Mutex::new(ideas),
            ..Default::default()
        }
    }

    /// Every fetch fails with this raw detail
    pub fn failing(detail: &str) -> Self {
        Self {
            fetch_error: Some(detail.to_string()),
            ..Default::default()
        }
    }

    pub fn with_delete_failure(mut self, detail: &str) -> Self {
        self.delete_error = Some(detail.to_string());
        self
    }

    /// Fetches wait for one `notify_one` on the gate before resolving
    pub fn with_fetch_gate(mut self, gate: Arc<Notify>) -> Self {
        self.fetch_gate = Some(gate);
        self
    }

    /// Deletes wait for one `notify_one` on the gate before resolving
    pub fn with_delete_gate(mut self, gate: Arc<Notify>) -> Self {
        self.delete_gate = Some(gate);
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> Vec<IdeaId> {
        self.delete_calls.lock().clone()
    }

    /// Ideas still held by the platform
    pub fn remote_ideas(&self) -> Vec<Idea> {
        self.ideas.lock().clone()
    }
}

impl IdeaService for MockIdeaService {
    async fn fetch_my_ideas(&self) -> Result<Vec<Idea>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.fetch_gate {
            gate.notified().await;
        }
        match &self.fetch_error {
            Some(detail) => Err(IdeaHubError::Api(detail.clone())),
            None => Ok(self.ideas.lock().clone()),
        }
    }

    async fn delete_idea(&self, id: &IdeaId) -> Result<()> {
        self.delete_calls.lock().push(id.clone());
        if let Some(gate) = &self.delete_gate {
            gate.notified().await;
        }
        if let Some(detail) = &self.delete_error {
            return Err(IdeaHubError::Api(detail.clone()));
        }
        self.ideas.lock().retain(|idea| &idea.id != id);
        Ok(())
    }
}

/// In-memory meeting service
#[derive(Default)]
pub struct MockMeetingService {
    meetings: Vec<Meeting>,
    fetch_error: Option<String>,
    fetch_gate: Option<Arc<Notify>>,
    fetch_calls: AtomicUsize,
}

impl MockMeetingService {
    pub fn new(meetings: Vec<Meeting>) -> Self {
        Self {
            meetings,
            ..Default::default()
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            fetch_error: Some(detail.to_string()),
            ..Default::default()
        }
    }

    pub fn with_fetch_gate(mut self, gate: Arc<Notify>) -> Self {
        self.fetch_gate = Some(gate);
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

impl MeetingService for MockMeetingService {
    async fn zoom_recordings(&self) -> Result<Vec<Meeting>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.fetch_gate {
            gate.notified().await;
        }
        match &self.fetch_error {
            Some(detail) => Err(IdeaHubError::Api(detail.clone())),
            None => Ok(self.meetings.clone()),
        }
    }
}

/// Answers prompts from a script. Declines once the script runs out.
#[derive(Default)]
pub struct ScriptedConfirmer {
    answers: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<ConfirmDialogState>>,
}

impl ScriptedConfirmer {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(std::iter::repeat_n(true, 16))
    }

    pub fn declining() -> Self {
        Self::new([false])
    }

    pub fn prompts(&self) -> Vec<ConfirmDialogState> {
        self.prompts.lock().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, dialog: &ConfirmDialogState) -> bool {
        self.prompts.lock().push(dialog.clone());
        self.answers.lock().pop_front().unwrap_or(false)
    }
}

pub fn sample_ideas() -> Vec<Idea> {
    vec![
        Idea::new(1u64, "Campus compost")
            .with_description("Turn cafeteria waste into soil")
            .with_category("Environment")
            .with_upvotes(4),
        Idea::new(2u64, "Tutor match")
            .with_description("Pair students with peer tutors")
            .with_category("Education")
            .with_upvotes(9),
        Idea::new(3u64, "Pocket ledger").with_upvotes(1),
    ]
}

pub fn sample_meetings() -> Vec<Meeting> {
    vec![
        Meeting::new("Weekly sync", "2024-03-01T09:00:00Z", "https://zoom.us/rec/share/a"),
        Meeting::new("Pitch Day", "2024-03-05T14:30:00Z", "https://zoom.us/rec/share/b"),
        Meeting::new("Investor Q&A", "2024-03-09T17:00:00Z", "https://zoom.us/rec/share/c"),
    ]
}
