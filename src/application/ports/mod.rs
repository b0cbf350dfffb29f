pub mod area_repository;
pub mod connection_repository;
pub mod document_repository;
pub mod lookup_repository;
