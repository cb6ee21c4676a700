pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod paths;
pub mod remote;
pub mod types;
pub mod utils;
pub mod view;

pub use config::Config;
pub use error::{IdeaHubError, Result};
pub use remote::{ApiError, HttpBackend, IdeaService, MeetingService};
pub use types::{Idea, IdeaId, Meeting};
pub use view::{
    ConfirmDialogState, Confirmer, DeleteOutcome, LoadOutcome, MyIdeasView, Notifier, Screen,
    Toast, ToastLog, ViewPhase, WatchMeetingsView,
};
