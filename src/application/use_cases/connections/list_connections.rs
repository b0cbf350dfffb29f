use crate::application::ports::connection_repository::ConnectionRepository;
use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::catalogue::connection::Connection;
use crate::domain::error::{DomainError, DomainResult, EntityKind};

pub struct ListConnections<'a, D: DocumentRepository + ?Sized, C: ConnectionRepository + ?Sized> {
    pub documents: &'a D,
    pub connections: &'a C,
}

impl<'a, D: DocumentRepository + ?Sized, C: ConnectionRepository + ?Sized>
    ListConnections<'a, D, C>
{
    /// Resolves the title first; an unknown title is an error, a document
    /// without edges is an empty list.
    pub async fn execute(&self, title: &str) -> DomainResult<Vec<Connection>> {
        let document_id = self
            .documents
            .find_id_by_title(title)
            .await?
            .ok_or(DomainError::NotFound(EntityKind::Document))?;
        self.connections.list_for_document(document_id).await
    }
}
