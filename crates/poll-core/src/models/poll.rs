//! Poll entity - a titled question with a fixed, ordered set of options.

use crate::validation::{self, sanitize_text};
use crate::{CoreError, PollOption, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A poll owns its options; options are addressed by positional index and
/// never reordered after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: Uuid,
    pub title: String,
    pub options: Vec<PollOption>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Poll {
    /// Build a new poll from raw user input, with every option's counter
    /// starting at zero.
    ///
    /// Text fields are trimmed and HTML-escaped before they land on the
    /// record; length limits apply to the trimmed, pre-escape text. All
    /// violated fields are reported at once, not just the first.
    #[track_caller]
    pub fn try_new(title: &str, options: &[String]) -> Result<Self> {
        let violations = validation::validate_poll_input(title, options);
        if !violations.is_empty() {
            return Err(CoreError::validation(violations));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: sanitize_text(title),
            options: options
                .iter()
                .map(|text| PollOption::new(sanitize_text(text)))
                .collect(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Total votes across all options.
    pub fn total_votes(&self) -> i64 {
        self.options.iter().map(|o| o.votes).sum()
    }
}
