use async_trait::async_trait;

use crate::domain::catalogue::connection::Connection;
use crate::domain::error::DomainResult;

#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    async fn exists(
        &self,
        parent_id: i64,
        child_id: i64,
        connection_type: &str,
    ) -> DomainResult<bool>;

    /// Inserts exactly one edge row. Concurrent inserts of the same triple
    /// are serialized by the store; the loser surfaces as
    /// `Duplicate(Connection)`.
    async fn insert(&self, edge: &Connection) -> DomainResult<()>;

    /// Every edge where the document is parent or child, in storage order.
    async fn list_for_document(&self, document_id: i64) -> DomainResult<Vec<Connection>>;

    /// Idempotent: deleting a missing edge is not an error.
    async fn delete(&self, parent_id: i64, child_id: i64, connection_type: &str)
        -> DomainResult<()>;
}
