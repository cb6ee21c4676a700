use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdeaHubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid configuration key '{0}'")]
    InvalidConfigKey(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote operation timed out after {seconds} seconds")]
    RemoteTimeout { seconds: u64 },

    #[error("idea '{0}' not found")]
    IdeaNotFound(String),

    #[error("{0}")]
    ConfirmationRequired(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, IdeaHubError>;
