use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ideahub::cli::{Cli, Commands, ConfigAction, IdeasAction};
use ideahub::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_ideas_delete, cmd_ideas_list,
    cmd_ideas_menu, cmd_meetings,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("IDEAHUB_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ideas { action, output } => match action {
            None => cmd_ideas_list(output).await,
            Some(IdeasAction::Delete { id, force }) => cmd_ideas_delete(&id, force, output).await,
            Some(IdeasAction::Menu { id }) => cmd_ideas_menu(&id, output).await,
        },

        Commands::Meetings { search, output } => cmd_meetings(&search, output).await,

        Commands::Config { action, output } => match action {
            ConfigAction::Show => cmd_config_show(output),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value, output),
            ConfigAction::Get { key } => cmd_config_get(&key, output),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
