//! Idea board commands.
//!
//! - `ideas`: list the member's ideas
//! - `ideas delete`: confirm and delete one idea
//! - `ideas menu`: show the context menu of one idea

use std::sync::Arc;

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use super::interactive::TerminalConfirmer;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::{IdeaHubError, Result};
use crate::remote::HttpBackend;
use crate::types::IdeaId;
use crate::utils::{first_line, is_stdin_tty};
use crate::view::{
    DeleteOutcome, IDEAS_EMPTY_NOTICE, IdeaCard, IdeasScreen, MyIdeasView, Screen, Toast,
    ToastLog, routes,
};

const DESCRIPTION_WIDTH: usize = 80;

type IdeasView = MyIdeasView<HttpBackend, TerminalConfirmer, ToastLog>;

fn open_view(assume_yes: bool) -> Result<(IdeasView, Arc<ToastLog>)> {
    let config = Config::load()?;
    let backend = Arc::new(HttpBackend::from_config(&config)?);
    let toasts = Arc::new(ToastLog::new());
    let view = MyIdeasView::new(
        backend,
        Arc::new(TerminalConfirmer::new(assume_yes)),
        Arc::clone(&toasts),
    );
    Ok((view, toasts))
}

/// List the member's ideas
pub async fn cmd_ideas_list(output: OutputOptions) -> Result<()> {
    let (view, _toasts) = open_view(false)?;
    view.activate().await;

    let screen = view.project();
    CommandOutput::new(serde_json::to_value(&screen)?)
        .with_text(render_ideas(&screen))
        .print(output)
}

/// Confirm and delete an idea, then show the updated board
pub async fn cmd_ideas_delete(id: &str, force: bool, output: OutputOptions) -> Result<()> {
    let id: IdeaId = id.parse()?;

    if !force && !is_stdin_tty() {
        return Err(IdeaHubError::ConfirmationRequired(
            "refusing to delete without confirmation on non-interactive input. Use --force"
                .to_string(),
        ));
    }

    let (view, toasts) = open_view(force)?;
    view.activate().await;

    if let Some(message) = view.error() {
        return Err(IdeaHubError::Api(message));
    }

    let outcome = view.request_delete(&id).await;
    let shown = toasts.drain();
    let screen = view.project();

    let json_output = json!({
        "action": "idea_delete",
        "id": id.as_str(),
        "outcome": outcome_label(outcome),
        "toasts": shown.iter().map(|t| json!({"title": t.title, "message": t.message})).collect::<Vec<_>>(),
        "board": serde_json::to_value(&screen)?,
    });

    let mut text_output = String::new();
    if outcome == DeleteOutcome::Cancelled {
        text_output.push_str(&format!("{}\n\n", "Cancelled".dimmed()));
    }
    text_output.push_str(&render_toasts(&shown));
    text_output.push_str(&render_ideas(&screen));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)?;

    if outcome == DeleteOutcome::Failed {
        return Err(IdeaHubError::Api(format!("could not delete idea '{id}'")));
    }
    Ok(())
}

/// Open the context menu of an idea and show the board
pub async fn cmd_ideas_menu(id: &str, output: OutputOptions) -> Result<()> {
    let id: IdeaId = id.parse()?;

    let (view, _toasts) = open_view(false)?;
    view.activate().await;

    if let Some(message) = view.error() {
        return Err(IdeaHubError::Api(message));
    }
    if !view.ideas().iter().any(|idea| idea.id == id) {
        return Err(IdeaHubError::IdeaNotFound(id.to_string()));
    }

    view.toggle_menu(&id);
    let screen = view.project();
    CommandOutput::new(serde_json::to_value(&screen)?)
        .with_text(render_ideas(&screen))
        .print(output)
}

fn outcome_label(outcome: DeleteOutcome) -> &'static str {
    match outcome {
        DeleteOutcome::Cancelled => "cancelled",
        DeleteOutcome::Deleted => "deleted",
        DeleteOutcome::Failed => "failed",
        DeleteOutcome::Detached => "detached",
        DeleteOutcome::Unavailable => "unavailable",
    }
}

/// Render toasts as one line each, followed by a blank line
pub fn render_toasts(toasts: &[Toast]) -> String {
    let mut out = String::new();
    for toast in toasts {
        out.push_str(&format!(
            "{} {}\n",
            toast.title.color(toast.color()).bold(),
            toast.message
        ));
    }
    if !toasts.is_empty() {
        out.push('\n');
    }
    out
}

/// Render the board under its header. Newest submissions come first.
pub fn render_ideas(screen: &IdeasScreen) -> String {
    let body = match screen {
        Screen::Loading => "Loading...".dimmed().to_string(),
        Screen::Error { message } => message.red().to_string(),
        Screen::Empty => IDEAS_EMPTY_NOTICE.to_string(),
        Screen::Populated { items } => items
            .iter()
            .rev()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    format!("{}\n\n{body}", render_header())
}

fn render_header() -> String {
    format!(
        "{}  {} {}",
        "My Ideas".bold(),
        "Add Idea +".green(),
        routes::SUBMIT_IDEA.cyan()
    )
}

fn render_card(card: &IdeaCard) -> String {
    let mut out = format!("{}", card.title.bold());
    if let (Some(category), Some(color)) = (&card.category, card.tag_color) {
        out.push_str(&format!("  {}", format!("[{category}]").color(color.ansi())));
    }
    out.push('\n');

    let description = first_line(&card.description, DESCRIPTION_WIDTH);
    if !description.is_empty() {
        out.push_str(&format!("  {description}\n"));
    }
    out.push_str(&format!(
        "  {} {}  {}\n",
        "\u{25b2}".green(),
        card.total_upvotes,
        card.id.as_str().dimmed()
    ));

    if card.menu_open {
        out.push_str(&format!("  \u{251c} View Detail  {}\n", card.detail_link.cyan()));
        out.push_str(&format!("  \u{251c} Analysis     {}\n", card.analysis_link.cyan()));
        out.push_str(&format!(
            "  \u{2514} {}       ideahub ideas delete {}\n",
            "Delete".red(),
            card.id
        ));
    }
    out
}
