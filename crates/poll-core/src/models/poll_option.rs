use serde::{Deserialize, Serialize};

/// One selectable answer within a poll, carrying its vote counter.
/// Not independently addressable; identified by position within the poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    pub votes: i64,
}

impl PollOption {
    pub fn new(text: String) -> Self {
        Self { text, votes: 0 }
    }
}
