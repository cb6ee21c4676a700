use std::sync::Arc;

use owo_colors::OwoColorize;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::remote::HttpBackend;
use crate::utils::format_local_instant;
use crate::view::{MEETINGS_END_NOTICE, MeetingCard, MeetingsScreen, Screen, WatchMeetingsView};

/// Browse recorded meetings, optionally narrowed by topic
pub async fn cmd_meetings(search: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let backend = Arc::new(HttpBackend::from_config(&config)?);

    let view = WatchMeetingsView::new(backend);
    view.activate().await;
    view.set_search_term(search);

    let screen = view.project();
    CommandOutput::new(serde_json::to_value(&screen)?)
        .with_text(render_meetings(&screen))
        .print(output)
}

/// Render the gallery followed by the end notice
pub fn render_meetings(screen: &MeetingsScreen) -> String {
    match screen {
        Screen::Loading => "Loading...".dimmed().to_string(),
        Screen::Error { message } => message.red().to_string(),
        Screen::Empty => MEETINGS_END_NOTICE.dimmed().to_string(),
        Screen::Populated { items } => {
            let mut out = items
                .iter()
                .map(render_card)
                .collect::<Vec<_>>()
                .join("\n");
            out.push('\n');
            out.push_str(&MEETINGS_END_NOTICE.dimmed().to_string());
            out
        }
    }
}

fn render_card(card: &MeetingCard) -> String {
    let start = match card.started_at {
        Some(ts) => format_local_instant(ts),
        None => card.start_time.clone(),
    };
    format!(
        "{}\n  {}\n  {}\n",
        card.topic.bold(),
        start,
        card.share_url.cyan()
    )
}
