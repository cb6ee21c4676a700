//! Platform services consumed by the views.
//!
//! The idea board and the meeting gallery only ever talk to the platform
//! through the traits in this module. [`HttpBackend`] is the production
//! implementation; tests substitute in-memory services.

pub mod error;
pub mod http;

use std::future::Future;

use crate::error::Result;
use crate::types::{Idea, IdeaId, Meeting};

pub use error::ApiError;
pub use http::HttpBackend;

/// Ideas owned by the signed-in member
pub trait IdeaService: Send + Sync {
    /// Fetch every idea submitted by the current member
    fn fetch_my_ideas(&self) -> impl Future<Output = Result<Vec<Idea>>> + Send;

    /// Permanently delete an idea on the platform
    fn delete_idea(&self, id: &IdeaId) -> impl Future<Output = Result<()>> + Send;
}

/// Recorded video meetings
pub trait MeetingService: Send + Sync {
    /// Fetch the cloud recordings visible to the current member
    fn zoom_recordings(&self) -> impl Future<Output = Result<Vec<Meeting>>> + Send;
}
