use sqlx::{Pool, Postgres};

use crate::domain::error::{DomainError, EntityKind};

pub type PgPool = Pool<Postgres>;

pub async fn connect_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

impl From<sqlx::Error> for DomainError {
    fn from(e: sqlx::Error) -> Self {
        DomainError::storage(e)
    }
}

/// Unique-constraint violations are how the store serializes concurrent
/// check-then-insert races; everything else is a storage failure.
pub(crate) fn unique_or_storage(e: sqlx::Error, kind: EntityKind) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return DomainError::Duplicate(kind);
        }
    }
    DomainError::storage(e)
}

pub mod repositories;
