pub mod create_document;
pub mod get_document_by_title;
pub mod get_document_position;
pub mod list_documents;
pub mod list_documents_geo;
