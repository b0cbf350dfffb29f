use crate::application::ports::area_repository::AreaRepository;
use crate::domain::catalogue::area::{AreaAssignment, AreaKind};
use crate::domain::error::{DomainError, DomainResult, EntityKind};

pub struct ReassignDocumentArea<'a, A: AreaRepository + ?Sized> {
    pub areas: &'a A,
}

impl<'a, A: AreaRepository + ?Sized> ReassignDocumentArea<'a, A> {
    /// Re-points the document's assignment. A point area left behind is
    /// orphaned (point areas have exactly one owner) and is dropped in the
    /// same transaction; shared polygons are never deleted here.
    pub async fn execute(
        &self,
        document_id: i64,
        new_area_id: i64,
    ) -> DomainResult<AreaAssignment> {
        self.areas
            .area(new_area_id)
            .await?
            .ok_or(DomainError::NotFound(EntityKind::Area))?;
        let previous = self
            .areas
            .assignment_for_document(document_id)
            .await?
            .ok_or(DomainError::NotFound(EntityKind::Document))?;

        let orphaned_point_area = match previous {
            Some(old_id) if old_id != new_area_id => self
                .areas
                .area(old_id)
                .await?
                .filter(|a| a.kind == AreaKind::Point)
                .map(|a| a.id),
            _ => None,
        };

        self.areas
            .reassign_document(document_id, new_area_id, orphaned_point_area)
            .await?;
        Ok(AreaAssignment {
            document_id,
            area_id: new_area_id,
        })
    }
}
