use crate::application::ports::lookup_repository::LookupRepository;
use crate::domain::catalogue::document::DocumentType;
use crate::domain::error::DomainResult;

pub struct ListDocumentTypes<'a, R: LookupRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LookupRepository + ?Sized> ListDocumentTypes<'a, R> {
    pub async fn execute(&self) -> DomainResult<Vec<DocumentType>> {
        self.repo.list_document_types().await
    }
}
