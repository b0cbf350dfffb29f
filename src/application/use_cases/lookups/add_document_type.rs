use crate::application::ports::lookup_repository::LookupRepository;
use crate::domain::catalogue::document::DocumentType;
use crate::domain::error::{DomainError, DomainResult, EntityKind};

pub struct AddDocumentType<'a, R: LookupRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LookupRepository + ?Sized> AddDocumentType<'a, R> {
    /// Exact-match collision is a duplicate; there is no update-in-place.
    pub async fn execute(&self, name: &str) -> DomainResult<DocumentType> {
        if self.repo.find_document_type(name).await?.is_some() {
            return Err(DomainError::Duplicate(EntityKind::DocumentType));
        }
        self.repo.insert_document_type(name).await
    }
}
