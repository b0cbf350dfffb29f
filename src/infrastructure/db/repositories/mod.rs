use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::domain::catalogue::area::{AreaKind, Coordinate};
use crate::domain::catalogue::document::Document;
use crate::domain::error::{DomainError, DomainResult};

pub mod area_repository_sqlx;
pub mod connection_repository_sqlx;
pub mod document_repository_sqlx;
pub mod lookup_repository_sqlx;

pub(crate) fn map_document(r: &PgRow) -> Document {
    Document {
        id: r.get("id"),
        title: r.get("title"),
        scale: r.try_get("scale").ok(),
        issuance_date: r.try_get("issuance_date").ok(),
        language: r.try_get("language").ok(),
        pages: r.try_get("pages").ok(),
        doc_type: r.get("doc_type"),
        description: r.try_get("description").ok(),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

pub(crate) fn parse_area_kind(raw: &str) -> DomainResult<AreaKind> {
    AreaKind::parse(raw)
        .ok_or_else(|| DomainError::storage(anyhow::anyhow!("unrecognized area kind: {raw}")))
}

/// Allocates a fresh point area (id = max existing + 1), inserts its single
/// coordinate row and re-points the document's assignment, all inside the
/// caller's transaction.
pub(crate) async fn allocate_point_area(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    document_id: i64,
    coordinate: Coordinate,
) -> DomainResult<i64> {
    let area_id: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(id), 0) + 1 FROM areas")
        .fetch_one(&mut **tx)
        .await?;
    sqlx::query("INSERT INTO areas (id, kind, name) VALUES ($1, 'point', NULL)")
        .bind(area_id)
        .execute(&mut **tx)
        .await?;
    sqlx::query(
        r#"INSERT INTO area_coordinates (area_id, sub_area_id, n_order, long, lat)
           VALUES ($1, NULL, 1, $2, $3)"#,
    )
    .bind(area_id)
    .bind(coordinate.long)
    .bind(coordinate.lat)
    .execute(&mut **tx)
    .await?;
    sqlx::query(
        r#"INSERT INTO document_areas (document_id, area_id) VALUES ($1, $2)
           ON CONFLICT (document_id) DO UPDATE SET area_id = EXCLUDED.area_id"#,
    )
    .bind(document_id)
    .bind(area_id)
    .execute(&mut **tx)
    .await?;
    Ok(area_id)
}
