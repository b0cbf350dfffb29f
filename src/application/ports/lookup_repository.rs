use async_trait::async_trait;

use crate::domain::catalogue::document::{DocumentType, Stakeholder};
use crate::domain::error::DomainResult;

#[async_trait]
pub trait LookupRepository: Send + Sync {
    async fn list_document_types(&self) -> DomainResult<Vec<DocumentType>>;

    async fn find_document_type(&self, name: &str) -> DomainResult<Option<DocumentType>>;

    /// Duplicate names (exact match) surface as `Duplicate(DocumentType)`.
    async fn insert_document_type(&self, name: &str) -> DomainResult<DocumentType>;

    async fn list_stakeholders(&self) -> DomainResult<Vec<Stakeholder>>;
}
