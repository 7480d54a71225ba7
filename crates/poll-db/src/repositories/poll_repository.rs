//! Poll repository: create, fetch, recency listing, deletion, and the
//! atomic vote counter.
//!
//! The vote counter moves via a single mutating UPDATE inside a
//! transaction, never read-modify-write, so concurrent votes on the same
//! option all land. A failed step before commit rolls the transaction back
//! and leaves both the counters and `updated_at` untouched.

use crate::{DbError, Result as DbResult};

use poll_core::{Poll, PollOption, validation};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Cap applied by the API when listing recent polls.
pub const RECENT_POLL_LIMIT: i64 = 50;

#[derive(sqlx::FromRow)]
struct PollRow {
    id: String,
    title: String,
    created_at: i64,
    updated_at: i64,
}

#[derive(sqlx::FromRow)]
struct OptionRow {
    text: String,
    votes: i64,
}

pub struct PollRepository {
    pool: SqlitePool,
}

impl PollRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a poll and its options in one transaction.
    ///
    /// Validation happens upstream, but structurally malformed records are
    /// still rejected here before anything is written.
    pub async fn create(&self, poll: &Poll) -> DbResult<()> {
        let violations = validation::validate_record(poll);
        if !violations.is_empty() {
            return Err(DbError::malformed(violations));
        }

        let id = poll.id.to_string();
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO polls (id, title, created_at, updated_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&poll.title)
            .bind(poll.created_at.timestamp_millis())
            .bind(poll.updated_at.timestamp_millis())
            .execute(&mut *tx)
            .await?;

        for (index, option) in poll.options.iter().enumerate() {
            sqlx::query(
                "INSERT INTO poll_options (poll_id, option_index, text, votes) VALUES (?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(index as i64)
            .bind(&option.text)
            .bind(option.votes)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<Poll>> {
        let row: Option<PollRow> =
            sqlx::query_as("SELECT id, title, created_at, updated_at FROM polls WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let options = self.load_options(&row.id).await?;
        assemble_poll(row, options).map(Some)
    }

    /// Most recently created polls, newest first, truncated to `limit`.
    ///
    /// `rowid` breaks ties between same-millisecond creations so the order
    /// still reflects insertion order. A fresh call re-reads current state;
    /// there is no cursor.
    pub async fn list_recent(&self, limit: i64) -> DbResult<Vec<Poll>> {
        let rows: Vec<PollRow> = sqlx::query_as(
            "SELECT id, title, created_at, updated_at FROM polls \
             ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut polls = Vec::with_capacity(rows.len());
        for row in rows {
            let options = self.load_options(&row.id).await?;
            polls.push(assemble_poll(row, options)?);
        }
        Ok(polls)
    }

    /// Record one vote against `options[option_index]` and touch the poll's
    /// `updated_at`, returning the updated record.
    pub async fn increment_vote(&self, id: Uuid, option_index: i64) -> DbResult<Poll> {
        let id_str = id.to_string();
        let now = Utc::now().timestamp_millis();

        let mut tx = self.pool.begin().await?;

        let touched = sqlx::query("UPDATE polls SET updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;
        if touched.rows_affected() == 0 {
            return Err(DbError::poll_not_found(id));
        }

        let incremented = sqlx::query(
            "UPDATE poll_options SET votes = votes + 1 WHERE poll_id = ? AND option_index = ?",
        )
        .bind(&id_str)
        .bind(option_index)
        .execute(&mut *tx)
        .await?;
        if incremented.rows_affected() == 0 {
            return Err(DbError::option_out_of_range(id, option_index));
        }

        let row: PollRow =
            sqlx::query_as("SELECT id, title, created_at, updated_at FROM polls WHERE id = ?")
                .bind(&id_str)
                .fetch_one(&mut *tx)
                .await?;
        let options: Vec<OptionRow> = sqlx::query_as(
            "SELECT text, votes FROM poll_options WHERE poll_id = ? ORDER BY option_index",
        )
        .bind(&id_str)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        assemble_poll(row, options)
    }

    /// Hard delete; options go with the poll. No soft-delete, no audit trail.
    pub async fn delete(&self, id: Uuid) -> DbResult<()> {
        let id_str = id.to_string();
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM poll_options WHERE poll_id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        let removed = sqlx::query("DELETE FROM polls WHERE id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;
        if removed.rows_affected() == 0 {
            return Err(DbError::poll_not_found(id));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn load_options(&self, poll_id: &str) -> DbResult<Vec<OptionRow>> {
        let options = sqlx::query_as(
            "SELECT text, votes FROM poll_options WHERE poll_id = ? ORDER BY option_index",
        )
        .bind(poll_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(options)
    }
}

fn assemble_poll(row: PollRow, options: Vec<OptionRow>) -> DbResult<Poll> {
    let id = Uuid::parse_str(&row.id)
        .map_err(|e| DbError::corrupt_row(format!("invalid UUID in polls.id: {}", e)))?;

    Ok(Poll {
        id,
        title: row.title,
        options: options
            .into_iter()
            .map(|o| PollOption {
                text: o.text,
                votes: o.votes,
            })
            .collect(),
        created_at: millis_to_datetime(row.created_at, "polls.created_at")?,
        updated_at: millis_to_datetime(row.updated_at, "polls.updated_at")?,
    })
}

fn millis_to_datetime(millis: i64, column: &str) -> DbResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::corrupt_row(format!("invalid timestamp in {}", column)))
}
