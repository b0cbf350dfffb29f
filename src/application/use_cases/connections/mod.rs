pub mod delete_connection;
pub mod link_documents;
pub mod list_connections;
