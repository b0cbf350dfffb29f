use crate::application::ports::connection_repository::ConnectionRepository;
use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::catalogue::connection::Connection;
use crate::domain::error::{DomainError, DomainResult, EntityKind};

pub struct LinkDocuments<'a, D: DocumentRepository + ?Sized, C: ConnectionRepository + ?Sized> {
    pub documents: &'a D,
    pub connections: &'a C,
}

impl<'a, D: DocumentRepository + ?Sized, C: ConnectionRepository + ?Sized> LinkDocuments<'a, D, C> {
    /// Validates both endpoints and the duplicate rules, then inserts exactly
    /// one edge row. The reverse pairing (child, parent) counts as a
    /// duplicate only for the exact same type; the check-then-insert race on
    /// the same triple is resolved by the store's own uniqueness enforcement.
    pub async fn execute(
        &self,
        parent_id: i64,
        child_id: i64,
        connection_type: &str,
    ) -> DomainResult<Connection> {
        if !self.documents.exists(parent_id).await? {
            return Err(DomainError::NotFound(EntityKind::Document));
        }
        if !self.documents.exists(child_id).await? {
            return Err(DomainError::NotFound(EntityKind::Document));
        }
        if self
            .connections
            .exists(parent_id, child_id, connection_type)
            .await?
            || self
                .connections
                .exists(child_id, parent_id, connection_type)
                .await?
        {
            return Err(DomainError::Duplicate(EntityKind::Connection));
        }

        let edge = Connection {
            parent_id,
            child_id,
            connection_type: connection_type.to_string(),
        };
        self.connections.insert(&edge).await?;
        Ok(edge)
    }
}
