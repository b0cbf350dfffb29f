use crate::application::ports::document_repository::DocumentRepository;
use crate::application::services::aggregation;
use crate::domain::catalogue::document::DocumentView;
use crate::domain::error::DomainResult;

pub struct GetDocumentByTitle<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> GetDocumentByTitle<'a, R> {
    pub async fn execute(&self, title: &str) -> DomainResult<Option<DocumentView>> {
        let rows = self.repo.document_stakeholder_rows_by_title(title).await?;
        Ok(aggregation::fold_documents(rows).into_iter().next())
    }
}
