use async_trait::async_trait;

use crate::domain::catalogue::area::{Area, Coordinate, CoordinateRow};
use crate::domain::error::DomainResult;

#[async_trait]
pub trait AreaRepository: Send + Sync {
    /// Outer `None`: the document has no assignment row at all.
    /// `Some(None)`: assigned but not yet placed (NULL area).
    /// `Some(Some(id))`: assigned to area `id`.
    async fn assignment_for_document(&self, document_id: i64) -> DomainResult<Option<Option<i64>>>;

    async fn area(&self, area_id: i64) -> DomainResult<Option<Area>>;

    async fn coordinate_rows(&self, area_id: i64) -> DomainResult<Vec<CoordinateRow>>;

    /// Allocates a fresh point area (id = max existing + 1), inserts its
    /// single coordinate row and re-points the document's assignment to it,
    /// all in one transaction. Returns the new area id.
    async fn create_point_for_document(
        &self,
        document_id: i64,
        coordinate: Coordinate,
    ) -> DomainResult<i64>;

    /// Updates the single coordinate row of an existing point area in place.
    async fn update_point_coordinates(
        &self,
        area_id: i64,
        coordinate: Coordinate,
    ) -> DomainResult<()>;

    /// Re-points the document's assignment to `new_area_id` and, when
    /// `orphaned_point_area` is set, deletes that area and its rows in the
    /// same transaction.
    async fn reassign_document(
        &self,
        document_id: i64,
        new_area_id: i64,
        orphaned_point_area: Option<i64>,
    ) -> DomainResult<()>;
}
