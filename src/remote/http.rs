//! HTTP implementation of the platform services using reqwest.
//!
//! # Security Note
//!
//! The bearer token is held in a [`SecretBox`] and only exposed while the
//! request is being built, so it never shows up in `Debug` output or logs.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use secrecy::{ExposeSecret, SecretBox};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{IdeaHubError, Result};
use crate::types::{Idea, IdeaId, Meeting};

use super::error::{ApiError, build_status_message};
use super::{IdeaService, MeetingService};

const IDEAS_SERVICE: &str = "ideas";
const ZOOM_SERVICE: &str = "zoom";

/// Platform backend reached over HTTP
pub struct HttpBackend {
    client: Client,
    base_url: Url,
    token: Option<SecretBox<String>>,
    timeout: Duration,
}

impl fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpBackend")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Recording listings come back either bare or wrapped the way Zoom's own
/// API returns them.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordingsPayload {
    List(Vec<Meeting>),
    Wrapped { meetings: Vec<Meeting> },
}

impl HttpBackend {
    /// Create a backend from the loaded configuration
    ///
    /// Configures the HTTP client with a 10s connect timeout; the overall
    /// deadline of each call comes from `remote_timeout`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.base_url();
        let timeout = config.remote_timeout();
        let token = config.token();
        Self::new(&base_url, token, timeout)
    }

    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            IdeaHubError::Config(format!("invalid API base URL '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(IdeaHubError::Config(format!(
                "API base URL '{base_url}' cannot carry a path"
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: token.map(|t| SecretBox::new(Box::new(t))),
            timeout,
        })
    }

    /// Join path segments onto the base URL, percent-encoding each one
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// Bound a remote operation by the configured timeout
    async fn bounded<T>(&self, operation: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.timeout, operation).await {
            Ok(result) => result,
            Err(_) => Err(IdeaHubError::RemoteTimeout {
                seconds: self.timeout.as_secs(),
            }),
        }
    }
}

/// Turn a non-success response into an error carrying its status
async fn check_status(response: Response, service: &'static str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::with_status(build_status_message(status, &body), service, status).into())
}

pub(crate) fn decode_recordings(body: &str) -> Result<Vec<Meeting>> {
    let payload: RecordingsPayload = serde_json::from_str(body)?;
    Ok(match payload {
        RecordingsPayload::List(meetings) => meetings,
        RecordingsPayload::Wrapped { meetings } => meetings,
    })
}

impl IdeaService for HttpBackend {
    async fn fetch_my_ideas(&self) -> Result<Vec<Idea>> {
        let url = self.endpoint(&["ideas", "my-ideas"]);
        self.bounded(async {
            let response = self.request(Method::GET, url).send().await?;
            let response = check_status(response, IDEAS_SERVICE).await?;
            let body = response.text().await?;
            let ideas: Vec<Idea> = serde_json::from_str(&body)?;
            tracing::debug!(count = ideas.len(), "fetched ideas");
            Ok(ideas)
        })
        .await
    }

    async fn delete_idea(&self, id: &IdeaId) -> Result<()> {
        let url = self.endpoint(&["ideas", id.as_str()]);
        self.bounded(async {
            let response = self.request(Method::DELETE, url).send().await?;
            let status = response.status();
            if status.as_u16() == 404 {
                return Err(IdeaHubError::IdeaNotFound(id.to_string()));
            }
            check_status(response, IDEAS_SERVICE).await?;
            tracing::debug!(%id, "deleted idea");
            Ok(())
        })
        .await
    }
}

impl MeetingService for HttpBackend {
    async fn zoom_recordings(&self) -> Result<Vec<Meeting>> {
        let url = self.endpoint(&["zoom", "recordings"]);
        self.bounded(async {
            let response = self.request(Method::GET, url).send().await?;
            let response = check_status(response, ZOOM_SERVICE).await?;
            let body = response.text().await?;
            let meetings = decode_recordings(&body)?;
            tracing::debug!(count = meetings.len(), "fetched recordings");
            Ok(meetings)
        })
        .await
    }
}
