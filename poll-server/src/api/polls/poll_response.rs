use crate::PollDto;

use serde::Serialize;

/// Success envelope wrapping a single poll.
#[derive(Debug, Serialize)]
pub struct PollResponse {
    pub success: bool,
    pub message: String,
    pub poll: PollDto,
}

impl PollResponse {
    pub fn new(message: impl Into<String>, poll: PollDto) -> Self {
        Self {
            success: true,
            message: message.into(),
            poll,
        }
    }
}
