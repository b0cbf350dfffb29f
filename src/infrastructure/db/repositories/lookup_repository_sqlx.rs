use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::lookup_repository::LookupRepository;
use crate::domain::catalogue::document::{DocumentType, Stakeholder};
use crate::domain::error::{DomainResult, EntityKind};
use crate::infrastructure::db::{PgPool, unique_or_storage};

pub struct SqlxLookupRepository {
    pub pool: PgPool,
}

impl SqlxLookupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LookupRepository for SqlxLookupRepository {
    async fn list_document_types(&self) -> DomainResult<Vec<DocumentType>> {
        let rows = sqlx::query("SELECT id, name FROM document_types ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| DocumentType {
                id: r.get("id"),
                name: r.get("name"),
            })
            .collect())
    }

    async fn find_document_type(&self, name: &str) -> DomainResult<Option<DocumentType>> {
        let row = sqlx::query("SELECT id, name FROM document_types WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| DocumentType {
            id: r.get("id"),
            name: r.get("name"),
        }))
    }

    async fn insert_document_type(&self, name: &str) -> DomainResult<DocumentType> {
        let row = sqlx::query("INSERT INTO document_types (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| unique_or_storage(e, EntityKind::DocumentType))?;
        Ok(DocumentType {
            id: row.get("id"),
            name: row.get("name"),
        })
    }

    async fn list_stakeholders(&self) -> DomainResult<Vec<Stakeholder>> {
        let rows = sqlx::query("SELECT id, name FROM stakeholders ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| Stakeholder {
                id: r.get("id"),
                name: r.get("name"),
            })
            .collect())
    }
}
