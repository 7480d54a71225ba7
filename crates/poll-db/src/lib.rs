pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::poll_repository::{PollRepository, RECENT_POLL_LIMIT};

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

/// Embedded migrations, shared by the server binary and every test that
/// opens an in-memory database.
pub static MIGRATOR: Migrator = sqlx::migrate!();

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
