use crate::application::ports::document_repository::DocumentRepository;
use crate::application::services::aggregation;
use crate::domain::catalogue::document::DocumentView;
use crate::domain::error::DomainResult;

pub struct ListDocuments<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> ListDocuments<'a, R> {
    pub async fn execute(&self) -> DomainResult<Vec<DocumentView>> {
        let rows = self.repo.document_stakeholder_rows().await?;
        Ok(aggregation::fold_documents(rows))
    }
}
