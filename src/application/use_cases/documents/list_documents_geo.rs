use crate::application::ports::document_repository::DocumentRepository;
use crate::application::services::aggregation;
use crate::domain::catalogue::document::GeoDocumentView;
use crate::domain::error::DomainResult;

pub struct ListDocumentsGeo<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> ListDocumentsGeo<'a, R> {
    pub async fn execute(&self) -> DomainResult<Vec<GeoDocumentView>> {
        let rows = self.repo.geo_rows().await?;
        Ok(aggregation::fold_documents_geo(rows))
    }
}
