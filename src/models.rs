// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: Uuid,
    pub title: String,
    pub choices: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A poll that passed validation but has no identifier yet
#[derive(Debug, Clone)]
pub struct NewPoll {
    pub title: String,
    pub choices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub poll_id: Uuid,
    pub choice: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceCount {
    pub choice: String,
    pub count: u64,
}

/// Per-choice tally in poll order, plus the number of votes seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub results: Vec<ChoiceCount>,
    pub total: u64,
}

impl AggregateResult {
    pub fn count_for(&self, choice: &str) -> Option<u64> {
        self.results
            .iter()
            .find(|c| c.choice == choice)
            .map(|c| c.count)
    }
}

/// Everything a poll page needs: the definition, raw votes and the tally
#[derive(Debug, Clone, Serialize)]
pub struct PollDetails {
    #[serde(flatten)]
    pub poll: Poll,
    pub votes: Vec<Vote>,
    #[serde(flatten)]
    pub aggregate: AggregateResult,
}

// Request bodies. Every field is optional so an absent one can be reported
// as "Missing parameters" instead of a deserializer rejection.

#[derive(Debug, Default, Deserialize)]
pub struct CreatePollRequest {
    pub title: Option<String>,
    pub choices: Option<Vec<String>>,
    /// Older clients send `options`; `choices` wins when both are present
    pub options: Option<Vec<String>>,
}

impl CreatePollRequest {
    pub fn into_parts(self) -> Result<(String, Vec<String>), Error> {
        match (self.title, self.choices.or(self.options)) {
            (Some(title), Some(choices)) if !title.is_empty() => Ok((title, choices)),
            _ => Err(Error::MissingParameters),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GetPollRequest {
    pub id: Option<String>,
}

impl GetPollRequest {
    pub fn into_id(self) -> Result<String, Error> {
        self.id
            .filter(|id| !id.is_empty())
            .ok_or(Error::MissingParameters)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CastVoteRequest {
    pub id: Option<String>,
    pub option: Option<String>,
}

impl CastVoteRequest {
    pub fn into_parts(self) -> Result<(String, String), Error> {
        match (self.id, self.option) {
            (Some(id), Some(option)) if !id.is_empty() && !option.is_empty() => Ok((id, option)),
            _ => Err(Error::MissingParameters),
        }
    }
}

/// Envelope shared by every endpoint; callers branch on `error`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            error: false,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: true,
            data: None,
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: false,
            data: None,
        }
    }
}
