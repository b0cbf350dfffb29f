use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::document_repository::{
    DocumentRepository, DocumentStakeholderRow, GeoRow, PositionRow,
};
use crate::domain::catalogue::area::{Area, CoordinateRow, Placement};
use crate::domain::catalogue::document::{Document, NewDocument};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::infrastructure::db::repositories::{allocate_point_area, map_document, parse_area_kind};
use crate::infrastructure::db::{PgPool, unique_or_storage};

pub struct SqlxDocumentRepository {
    pub pool: PgPool,
}

impl SqlxDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const DOCUMENT_COLUMNS: &str = "d.id, d.title, d.scale, d.issuance_date, d.language, d.pages, \
                                d.doc_type, d.description, d.created_at, d.updated_at";

#[async_trait]
impl DocumentRepository for SqlxDocumentRepository {
    async fn exists(&self, id: i64) -> DomainResult<bool> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM documents WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn find_id_by_title(&self, title: &str) -> DomainResult<Option<i64>> {
        let row = sqlx::query("SELECT id FROM documents WHERE title = $1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("id")))
    }

    async fn create_with_placement(&self, new: &NewDocument) -> DomainResult<Document> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"INSERT INTO documents (title, scale, issuance_date, language, pages, doc_type, description)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, title, scale, issuance_date, language, pages, doc_type, description,
                         created_at, updated_at"#,
        )
        .bind(&new.title)
        .bind(&new.scale)
        .bind(&new.issuance_date)
        .bind(&new.language)
        .bind(new.pages)
        .bind(&new.doc_type)
        .bind(&new.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| unique_or_storage(e, EntityKind::Document))?;
        let document = map_document(&row);

        for name in &new.stakeholders {
            let stakeholder_id: i64 = sqlx::query_scalar(
                r#"INSERT INTO stakeholders (name) VALUES ($1)
                   ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                   RETURNING id"#,
            )
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;
            sqlx::query(
                r#"INSERT INTO document_stakeholders (document_id, stakeholder_id)
                   VALUES ($1, $2) ON CONFLICT DO NOTHING"#,
            )
            .bind(document.id)
            .bind(stakeholder_id)
            .execute(&mut *tx)
            .await?;
        }

        match &new.placement {
            Placement::Unplaced => {
                sqlx::query("INSERT INTO document_areas (document_id, area_id) VALUES ($1, NULL)")
                    .bind(document.id)
                    .execute(&mut *tx)
                    .await?;
            }
            Placement::Point(coordinate) => {
                allocate_point_area(&mut tx, document.id, *coordinate).await?;
            }
            Placement::NamedArea(name) => {
                let area_id: Option<i64> = sqlx::query_scalar(
                    "SELECT id FROM areas WHERE kind = 'polygon' AND name = $1",
                )
                .bind(name)
                .fetch_optional(&mut *tx)
                .await?;
                let area_id = area_id.ok_or(DomainError::NotFound(EntityKind::Area))?;
                sqlx::query("INSERT INTO document_areas (document_id, area_id) VALUES ($1, $2)")
                    .bind(document.id)
                    .bind(area_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(document)
    }

    async fn document_stakeholder_rows(&self) -> DomainResult<Vec<DocumentStakeholderRow>> {
        let rows = sqlx::query(&format!(
            r#"SELECT {DOCUMENT_COLUMNS}, s.name AS stakeholder
               FROM documents d
               LEFT JOIN document_stakeholders ds ON ds.document_id = d.id
               LEFT JOIN stakeholders s ON s.id = ds.stakeholder_id
               ORDER BY d.id, s.id"#,
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| DocumentStakeholderRow {
                document: map_document(&r),
                stakeholder: r.try_get("stakeholder").ok(),
            })
            .collect())
    }

    async fn document_stakeholder_rows_by_title(
        &self,
        title: &str,
    ) -> DomainResult<Vec<DocumentStakeholderRow>> {
        let rows = sqlx::query(&format!(
            r#"SELECT {DOCUMENT_COLUMNS}, s.name AS stakeholder
               FROM documents d
               LEFT JOIN document_stakeholders ds ON ds.document_id = d.id
               LEFT JOIN stakeholders s ON s.id = ds.stakeholder_id
               WHERE d.title = $1
               ORDER BY s.id"#,
        ))
        .bind(title)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| DocumentStakeholderRow {
                document: map_document(&r),
                stakeholder: r.try_get("stakeholder").ok(),
            })
            .collect())
    }

    async fn geo_rows(&self) -> DomainResult<Vec<GeoRow>> {
        let rows = sqlx::query(&format!(
            r#"SELECT {DOCUMENT_COLUMNS}, s.name AS stakeholder,
                      a.id AS area_id, a.kind AS area_kind, a.name AS area_name,
                      c.sub_area_id, c.n_order, c.long, c.lat
               FROM documents d
               JOIN document_areas da ON da.document_id = d.id
               JOIN areas a ON a.id = da.area_id
               JOIN area_coordinates c ON c.area_id = a.id
               LEFT JOIN document_stakeholders ds ON ds.document_id = d.id
               LEFT JOIN stakeholders s ON s.id = ds.stakeholder_id
               ORDER BY d.id, s.id, c.sub_area_id, c.n_order"#,
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|r| -> DomainResult<GeoRow> {
                let kind = parse_area_kind(r.get("area_kind"))?;
                Ok(GeoRow {
                    document: map_document(&r),
                    stakeholder: r.try_get("stakeholder").ok(),
                    area: Area {
                        id: r.get("area_id"),
                        kind,
                        name: r.try_get("area_name").ok(),
                    },
                    coordinate: CoordinateRow {
                        sub_area_id: r.try_get("sub_area_id").ok(),
                        n_order: r.try_get("n_order").ok(),
                        long: r.get("long"),
                        lat: r.get("lat"),
                    },
                })
            })
            .collect()
    }

    async fn position_rows(&self, document_id: i64) -> DomainResult<Vec<PositionRow>> {
        let rows = sqlx::query(&format!(
            r#"SELECT {DOCUMENT_COLUMNS}, c.sub_area_id, c.n_order, c.long, c.lat
               FROM documents d
               JOIN document_areas da ON da.document_id = d.id
               JOIN area_coordinates c ON c.area_id = da.area_id
               WHERE d.id = $1"#,
        ))
        .bind(document_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| PositionRow {
                document: map_document(&r),
                coordinate: CoordinateRow {
                    sub_area_id: r.try_get("sub_area_id").ok(),
                    n_order: r.try_get("n_order").ok(),
                    long: r.get("long"),
                    lat: r.get("lat"),
                },
            })
            .collect())
    }
}
