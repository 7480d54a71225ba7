//! Owned view-model for the poll board.
//!
//! The board is only ever updated from server-returned state: a refresh
//! replaces the whole list, a successful vote swaps in the single poll the
//! server returned. Nothing increments counters locally, so the view and
//! the server cannot disagree about a count.

use crate::client::PollSnapshot;

use std::fmt::Write;

#[derive(Debug, Default)]
pub struct PollBoard {
    polls: Vec<PollSnapshot>,
}

impl PollBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polls(&self) -> &[PollSnapshot] {
        &self.polls
    }

    /// Adopt a fresh listing wholesale.
    pub fn replace_all(&mut self, polls: Vec<PollSnapshot>) {
        self.polls = polls;
    }

    /// Swap in the server's authoritative copy of one poll.
    /// Polls the board does not hold are ignored.
    pub fn apply_update(&mut self, poll: PollSnapshot) {
        if let Some(slot) = self.polls.iter_mut().find(|p| p.id == poll.id) {
            *slot = poll;
        }
    }

    pub fn render(&self) -> String {
        if self.polls.is_empty() {
            return String::from("No polls yet.\n");
        }

        let mut out = String::new();
        for poll in &self.polls {
            let _ = writeln!(out, "[{}]", poll.id);
            out.push_str(&render_poll(poll));
            out.push('\n');
        }
        out
    }
}

/// One poll with per-option tallies and percentage bars.
pub fn render_poll(poll: &PollSnapshot) -> String {
    let total = poll.total_votes();
    let mut out = String::new();

    let _ = writeln!(out, "{} ({} votes)", poll.title, total);
    for (index, option) in poll.options.iter().enumerate() {
        let pct = percentage(option.votes, total);
        let _ = writeln!(
            out,
            "  {}. {:<30} {:>5} {:>3}% {}",
            index,
            option.text,
            option.votes,
            pct,
            bar(pct)
        );
    }

    out
}

/// Share of the total, rounded to whole percent; 0 when there are no votes.
pub fn percentage(votes: i64, total: i64) -> u32 {
    if total <= 0 || votes <= 0 {
        return 0;
    }
    ((votes as f64 / total as f64) * 100.0).round() as u32
}

fn bar(pct: u32) -> String {
    "#".repeat((pct as usize) / 5)
}
