pub mod add_document_type;
pub mod list_document_types;
pub mod list_stakeholders;
