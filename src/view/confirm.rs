//! Confirmation prompts for destructive actions

use std::future::Future;

use crate::types::IdeaId;

/// The action to perform when confirmation is accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Permanently delete the idea
    DeleteIdea(IdeaId),
}

/// Contents of a confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    /// Message to display to the user
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Render the confirm button as destructive
    pub destructive: bool,
    /// The action to perform if confirmed
    pub action: ConfirmAction,
}

impl ConfirmDialogState {
    /// Create a confirmation for deleting an idea
    pub fn for_delete_idea(id: IdeaId) -> Self {
        Self {
            title: "Are you sure?".to_string(),
            message: "This idea will be permanently deleted!".to_string(),
            confirm_label: "Yes, delete it!".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: true,
            action: ConfirmAction::DeleteIdea(id),
        }
    }
}

/// Presents a blocking yes/no prompt.
///
/// Resolves to `true` only on an explicit confirmation; declining and
/// dismissing both resolve to `false`.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, dialog: &ConfirmDialogState) -> impl Future<Output = bool> + Send;
}
