#![allow(dead_code)]

//! Test infrastructure for poll-db repository tests

use poll_core::Poll;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory SQLite with the embedded migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory
/// database for the lifetime of the test.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    poll_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn sample_poll() -> Poll {
    sample_poll_titled("Favorite color?")
}

pub fn sample_poll_titled(title: &str) -> Poll {
    let options = vec![
        String::from("Red"),
        String::from("Blue"),
        String::from("Green"),
    ];
    Poll::try_new(title, &options).expect("sample poll input is valid")
}
