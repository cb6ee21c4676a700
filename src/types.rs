use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdeaHubError;
use crate::utils::parse_instant_in;

/// Opaque identifier of an idea as issued by the platform.
///
/// The backend hands out document ids as strings, but numeric ids are
/// accepted on input and kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IdeaId(String);

impl IdeaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IdeaId {
    type Err = IdeaHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdeaHubError::Other("idea id cannot be empty".to_string()));
        }
        Ok(IdeaId(s.to_string()))
    }
}

impl From<&str> for IdeaId {
    fn from(s: &str) -> Self {
        IdeaId(s.to_string())
    }
}

impl From<u64> for IdeaId {
    fn from(n: u64) -> Self {
        IdeaId(n.to_string())
    }
}

impl<'de> Deserialize<'de> for IdeaId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => IdeaId(s),
            RawId::Unsigned(n) => IdeaId(n.to_string()),
            RawId::Signed(n) => IdeaId(n.to_string()),
        })
    }
}

/// An idea submitted by the current member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    #[serde(rename = "_id")]
    pub id: IdeaId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_upvotes: i64,
}

impl Idea {
    pub fn new(id: impl Into<IdeaId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: None,
            total_upvotes: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_upvotes(mut self, upvotes: i64) -> Self {
        self.total_upvotes = upvotes;
        self
    }
}

/// A recorded video meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub topic: String,
    /// ISO 8601 start time, kept verbatim
    pub start_time: String,
    pub share_url: String,
}

impl Meeting {
    pub fn new(
        topic: impl Into<String>,
        start_time: impl Into<String>,
        share_url: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            start_time: start_time.into(),
            share_url: share_url.into(),
        }
    }

    /// Start instant, reading offset-less times as local time
    pub fn started_at(&self) -> Option<jiff::Timestamp> {
        self.started_at_in(&jiff::tz::TimeZone::system())
    }

    pub fn started_at_in(&self, tz: &jiff::tz::TimeZone) -> Option<jiff::Timestamp> {
        parse_instant_in(&self.start_time, tz)
    }
}
