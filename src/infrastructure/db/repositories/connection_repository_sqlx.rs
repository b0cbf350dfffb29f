use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::connection_repository::ConnectionRepository;
use crate::domain::catalogue::connection::Connection;
use crate::domain::error::{DomainResult, EntityKind};
use crate::infrastructure::db::{PgPool, unique_or_storage};

pub struct SqlxConnectionRepository {
    pub pool: PgPool,
}

impl SqlxConnectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionRepository for SqlxConnectionRepository {
    async fn exists(
        &self,
        parent_id: i64,
        child_id: i64,
        connection_type: &str,
    ) -> DomainResult<bool> {
        let found: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM connections
               WHERE parent_id = $1 AND child_id = $2 AND connection_type = $3)"#,
        )
        .bind(parent_id)
        .bind(child_id)
        .bind(connection_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(found)
    }

    async fn insert(&self, edge: &Connection) -> DomainResult<()> {
        // The composite primary key turns a lost check-then-insert race into
        // a Duplicate instead of a second row.
        sqlx::query(
            "INSERT INTO connections (parent_id, child_id, connection_type) VALUES ($1, $2, $3)",
        )
        .bind(edge.parent_id)
        .bind(edge.child_id)
        .bind(&edge.connection_type)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or_storage(e, EntityKind::Connection))?;
        Ok(())
    }

    async fn list_for_document(&self, document_id: i64) -> DomainResult<Vec<Connection>> {
        let rows = sqlx::query(
            r#"SELECT parent_id, child_id, connection_type FROM connections
               WHERE parent_id = $1 OR child_id = $1"#,
        )
        .bind(document_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| Connection {
                parent_id: r.get("parent_id"),
                child_id: r.get("child_id"),
                connection_type: r.get("connection_type"),
            })
            .collect())
    }

    async fn delete(
        &self,
        parent_id: i64,
        child_id: i64,
        connection_type: &str,
    ) -> DomainResult<()> {
        sqlx::query(
            r#"DELETE FROM connections
               WHERE parent_id = $1 AND child_id = $2 AND connection_type = $3"#,
        )
        .bind(parent_id)
        .bind(child_id)
        .bind(connection_type)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
