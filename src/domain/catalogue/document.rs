use crate::domain::catalogue::area::{Coordinate, Placement};

#[derive(Debug, Clone)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub scale: Option<String>,
    pub issuance_date: Option<String>,
    pub language: Option<String>,
    pub pages: Option<i32>,
    pub doc_type: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Payload for document creation. `placement` has already passed request
/// validation by the time a repository sees it.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub scale: Option<String>,
    pub issuance_date: Option<String>,
    pub language: Option<String>,
    pub pages: Option<i32>,
    pub doc_type: String,
    pub description: Option<String>,
    pub stakeholders: Vec<String>,
    pub placement: Placement,
}

/// A document folded together with its stakeholder names.
#[derive(Debug, Clone)]
pub struct DocumentView {
    pub document: Document,
    pub stakeholders: Vec<String>,
}

/// One named location of a document with its flattened coordinate list.
#[derive(Debug, Clone, PartialEq)]
pub struct GeolocationGroup {
    pub area_name: String,
    pub coordinates: Vec<Coordinate>,
}

#[derive(Debug, Clone)]
pub struct GeoDocumentView {
    pub document: Document,
    pub stakeholders: Vec<String>,
    pub geolocations: Vec<GeolocationGroup>,
}

/// A document merged with the rings of its assigned area.
#[derive(Debug, Clone)]
pub struct DocumentPosition {
    pub document: Document,
    pub coordinates: Vec<Vec<Coordinate>>,
}

#[derive(Debug, Clone)]
pub struct DocumentType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Stakeholder {
    pub id: i64,
    pub name: String,
}
