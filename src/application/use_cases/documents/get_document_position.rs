use crate::application::ports::document_repository::DocumentRepository;
use crate::application::services::aggregation;
use crate::domain::catalogue::document::DocumentPosition;
use crate::domain::error::DomainResult;

pub struct GetDocumentPosition<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> GetDocumentPosition<'a, R> {
    /// `None` when the document has no geolocation rows.
    pub async fn execute(&self, document_id: i64) -> DomainResult<Option<DocumentPosition>> {
        let rows = self.repo.position_rows(document_id).await?;
        Ok(aggregation::fold_position(rows))
    }
}
