use async_trait::async_trait;

use crate::domain::catalogue::area::{Area, CoordinateRow};
use crate::domain::catalogue::document::{Document, NewDocument};
use crate::domain::error::DomainResult;

/// Flat row from the documents ⋈ stakeholders join. One row per
/// (document, stakeholder) pairing; `stakeholder` is None for documents
/// without any.
#[derive(Debug, Clone)]
pub struct DocumentStakeholderRow {
    pub document: Document,
    pub stakeholder: Option<String>,
}

/// Flat row from the documents × geolocation × stakeholders join. Each
/// coordinate row repeats once per stakeholder, so folding has to
/// deduplicate both sides.
#[derive(Debug, Clone)]
pub struct GeoRow {
    pub document: Document,
    pub stakeholder: Option<String>,
    pub area: Area,
    pub coordinate: CoordinateRow,
}

/// Flat row scoped to one document's area.
#[derive(Debug, Clone)]
pub struct PositionRow {
    pub document: Document,
    pub coordinate: CoordinateRow,
}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn exists(&self, id: i64) -> DomainResult<bool>;

    async fn find_id_by_title(&self, title: &str) -> DomainResult<Option<i64>>;

    /// Inserts the document, its stakeholder links and its placement as one
    /// transaction. Title collisions surface as `Duplicate(Document)`, an
    /// unknown named area as `NotFound(Area)`.
    async fn create_with_placement(&self, new: &NewDocument) -> DomainResult<Document>;

    async fn document_stakeholder_rows(&self) -> DomainResult<Vec<DocumentStakeholderRow>>;

    async fn document_stakeholder_rows_by_title(
        &self,
        title: &str,
    ) -> DomainResult<Vec<DocumentStakeholderRow>>;

    async fn geo_rows(&self) -> DomainResult<Vec<GeoRow>>;

    async fn position_rows(&self, document_id: i64) -> DomainResult<Vec<PositionRow>>;
}
