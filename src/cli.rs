use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ideahub")]
#[command(about = "Manage your ideas and browse recorded meetings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output flags shared by every command
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show your submitted ideas
    #[command(visible_alias = "i")]
    Ideas {
        #[command(subcommand)]
        action: Option<IdeasAction>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Browse recorded meetings
    #[command(visible_alias = "m")]
    Meetings {
        /// Only show meetings whose topic contains this text (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,

        #[command(flatten)]
        output: OutputOptions,
    },
}

#[derive(Subcommand)]
pub enum IdeasAction {
    /// Delete one of your ideas after confirmation
    Delete {
        /// Idea ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show the context menu of an idea
    Menu {
        /// Idea ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (api.base_url, auth.token, remote_timeout)
        key: String,
        /// Value to set
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
}
