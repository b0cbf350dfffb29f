//! Error taxonomy shared by every core operation.
//!
//! Errors carry structured data (kind + context); human-facing formatting
//! happens only at the HTTP boundary.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Document,
    Area,
    Connection,
    DocumentType,
    Stakeholder,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Document => "document",
            EntityKind::Area => "area",
            EntityKind::Connection => "connection",
            EntityKind::DocumentType => "document type",
            EntityKind::Stakeholder => "stakeholder",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("duplicate {0}")]
    Duplicate(EntityKind),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("storage failure: {0}")]
    Storage(#[source] anyhow::Error),
}

impl DomainError {
    pub fn storage(cause: impl Into<anyhow::Error>) -> Self {
        DomainError::Storage(cause.into())
    }
}

pub type DomainResult<T, E = DomainError> = std::result::Result<T, E>;
