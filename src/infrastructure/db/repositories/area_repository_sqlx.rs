use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::area_repository::AreaRepository;
use crate::domain::catalogue::area::{Area, Coordinate, CoordinateRow};
use crate::domain::error::DomainResult;
use crate::infrastructure::db::PgPool;
use crate::infrastructure::db::repositories::{allocate_point_area, parse_area_kind};

pub struct SqlxAreaRepository {
    pub pool: PgPool,
}

impl SqlxAreaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AreaRepository for SqlxAreaRepository {
    async fn assignment_for_document(&self, document_id: i64) -> DomainResult<Option<Option<i64>>> {
        let row = sqlx::query("SELECT area_id FROM document_areas WHERE document_id = $1")
            .bind(document_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get::<Option<i64>, _>("area_id")))
    }

    async fn area(&self, area_id: i64) -> DomainResult<Option<Area>> {
        let row = sqlx::query("SELECT id, kind, name FROM areas WHERE id = $1")
            .bind(area_id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| -> DomainResult<Area> {
            Ok(Area {
                id: r.get("id"),
                kind: parse_area_kind(r.get("kind"))?,
                name: r.try_get("name").ok(),
            })
        })
        .transpose()
    }

    async fn coordinate_rows(&self, area_id: i64) -> DomainResult<Vec<CoordinateRow>> {
        let rows = sqlx::query(
            "SELECT sub_area_id, n_order, long, lat FROM area_coordinates WHERE area_id = $1",
        )
        .bind(area_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| CoordinateRow {
                sub_area_id: r.try_get("sub_area_id").ok(),
                n_order: r.try_get("n_order").ok(),
                long: r.get("long"),
                lat: r.get("lat"),
            })
            .collect())
    }

    async fn create_point_for_document(
        &self,
        document_id: i64,
        coordinate: Coordinate,
    ) -> DomainResult<i64> {
        let mut tx = self.pool.begin().await?;
        let area_id = allocate_point_area(&mut tx, document_id, coordinate).await?;
        tx.commit().await?;
        Ok(area_id)
    }

    async fn update_point_coordinates(
        &self,
        area_id: i64,
        coordinate: Coordinate,
    ) -> DomainResult<()> {
        sqlx::query("UPDATE area_coordinates SET long = $2, lat = $3 WHERE area_id = $1")
            .bind(area_id)
            .bind(coordinate.long)
            .bind(coordinate.lat)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn reassign_document(
        &self,
        document_id: i64,
        new_area_id: i64,
        orphaned_point_area: Option<i64>,
    ) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"INSERT INTO document_areas (document_id, area_id) VALUES ($1, $2)
               ON CONFLICT (document_id) DO UPDATE SET area_id = EXCLUDED.area_id"#,
        )
        .bind(document_id)
        .bind(new_area_id)
        .execute(&mut *tx)
        .await?;
        if let Some(orphan_id) = orphaned_point_area {
            // Coordinate rows go with the area via ON DELETE CASCADE.
            sqlx::query("DELETE FROM areas WHERE id = $1")
                .bind(orphan_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
