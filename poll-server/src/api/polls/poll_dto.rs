use poll_core::{Poll, PollOption};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Poll JSON as served to clients (camelCase wire fields, RFC3339 times).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollDto {
    pub id: String,
    pub title: String,
    pub options: Vec<PollOptionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PollOptionDto {
    pub text: String,
    pub votes: i64,
}

impl From<Poll> for PollDto {
    fn from(poll: Poll) -> Self {
        Self {
            id: poll.id.to_string(),
            title: poll.title,
            options: poll.options.into_iter().map(PollOptionDto::from).collect(),
            created_at: poll.created_at,
            updated_at: poll.updated_at,
        }
    }
}

impl From<PollOption> for PollOptionDto {
    fn from(option: PollOption) -> Self {
        Self {
            text: option.text,
            votes: option.votes,
        }
    }
}
