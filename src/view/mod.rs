//! View controllers for the idea board and the meeting gallery.
//!
//! Each view instance owns its state (the loaded collection plus ephemeral
//! UI state such as the open menu or the search term), loads once on
//! activation, and exposes a pure projection of that state for rendering.
//! Rendering itself lives with the host (see `commands`).

mod category;
mod confirm;
mod filter;
mod ideas;
mod lifecycle;
mod loader;
mod meetings;
pub mod routes;
mod toast;

pub use category::{DEFAULT_TAG_COLOR, TAG_COLORS, TagColor, tag_color};
pub use confirm::{ConfirmAction, ConfirmDialogState, Confirmer};
pub use filter::{filter_meetings, topic_matches};
pub use ideas::{
    DeleteOutcome, IdeaCard, IdeasScreen, IdeasState, MyIdeasView, project_ideas,
    EMPTY_NOTICE as IDEAS_EMPTY_NOTICE, LOAD_FAILURE as IDEAS_LOAD_FAILURE,
};
pub use lifecycle::{ViewCell, ViewScope};
pub use loader::{LoadOutcome, LoadState, Loadable, Loader, Screen, ViewPhase};
pub use meetings::{
    END_NOTICE as MEETINGS_END_NOTICE, LOAD_FAILURE as MEETINGS_LOAD_FAILURE, MeetingCard,
    MeetingsScreen, MeetingsState, WatchMeetingsView, project_meetings,
};
pub use toast::{Notifier, Toast, ToastLevel, ToastLog};
