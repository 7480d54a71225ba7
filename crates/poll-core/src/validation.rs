//! Pure input validation, kept separate from storage so constraints can be
//! unit-tested without a live database.

use crate::Poll;

use serde::Serialize;

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 200;
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 10;
pub const OPTION_MIN_CHARS: usize = 1;
pub const OPTION_MAX_CHARS: usize = 100;

/// A single violated constraint, reported per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Check raw create-poll input against the documented constraints.
///
/// Returns one violation per failing field; an empty vector means the input
/// is acceptable. Lengths are counted on the trimmed text, before escaping.
pub fn validate_poll_input(title: &str, options: &[String]) -> Vec<Violation> {
    let mut violations = Vec::new();

    let title_chars = title.trim().chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_chars) {
        violations.push(Violation::new(
            "title",
            format!(
                "Title must be between {} and {} characters",
                TITLE_MIN_CHARS, TITLE_MAX_CHARS
            ),
        ));
    }

    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
        violations.push(Violation::new(
            "options",
            format!(
                "Must provide between {} and {} options",
                MIN_OPTIONS, MAX_OPTIONS
            ),
        ));
    }

    for (index, option) in options.iter().enumerate() {
        let option_chars = option.trim().chars().count();
        if !(OPTION_MIN_CHARS..=OPTION_MAX_CHARS).contains(&option_chars) {
            violations.push(Violation::new(
                format!("options[{}]", index),
                format!(
                    "Each option must be between {} and {} characters",
                    OPTION_MIN_CHARS, OPTION_MAX_CHARS
                ),
            ));
        }
    }

    violations
}

/// Structural checks applied by the store before any write.
///
/// Length caps are deliberately not re-checked here: escaping may
/// legitimately lengthen stored text past the input limits. What must hold
/// for every stored record: a non-empty title, 2-10 options, non-empty
/// option text, and counters that never go negative.
pub fn validate_record(poll: &Poll) -> Vec<Violation> {
    let mut violations = Vec::new();

    if poll.title.trim().is_empty() {
        violations.push(Violation::new("title", "Title must not be empty"));
    }

    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&poll.options.len()) {
        violations.push(Violation::new(
            "options",
            format!(
                "Must have between {} and {} options",
                MIN_OPTIONS, MAX_OPTIONS
            ),
        ));
    }

    for (index, option) in poll.options.iter().enumerate() {
        if option.text.trim().is_empty() {
            violations.push(Violation::new(
                format!("options[{}]", index),
                "Option text must not be empty",
            ));
        }
        if option.votes < 0 {
            violations.push(Violation::new(
                format!("options[{}]", index),
                "Vote count must not be negative",
            ));
        }
    }

    violations
}

/// Trim a text field and HTML-escape it so stored values are inert when
/// rendered later.
pub fn sanitize_text(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut escaped = String::with_capacity(trimmed.len());

    for ch in trimmed.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
