use crate::application::ports::connection_repository::ConnectionRepository;
use crate::domain::error::DomainResult;

pub struct DeleteConnection<'a, C: ConnectionRepository + ?Sized> {
    pub connections: &'a C,
}

impl<'a, C: ConnectionRepository + ?Sized> DeleteConnection<'a, C> {
    pub async fn execute(
        &self,
        parent_id: i64,
        child_id: i64,
        connection_type: &str,
    ) -> DomainResult<()> {
        self.connections
            .delete(parent_id, child_id, connection_type)
            .await
    }
}
