use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::catalogue::area::{Coordinate, Placement};
use crate::domain::catalogue::document::{Document, NewDocument};
use crate::domain::error::{DomainError, DomainResult, EntityKind};

/// Raw creation request, before placement validation.
#[derive(Debug, Clone)]
pub struct CreateDocumentCommand {
    pub title: String,
    pub scale: Option<String>,
    pub issuance_date: Option<String>,
    pub language: Option<String>,
    pub pages: Option<i32>,
    pub doc_type: String,
    pub description: Option<String>,
    pub stakeholders: Vec<String>,
    pub coordinates: Option<Vec<Coordinate>>,
    pub area_name: Option<String>,
}

pub struct CreateDocument<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> CreateDocument<'a, R> {
    pub async fn execute(&self, cmd: CreateDocumentCommand) -> DomainResult<Document> {
        let placement = match (cmd.coordinates, cmd.area_name) {
            (Some(_), Some(_)) => {
                return Err(DomainError::Validation(
                    "coordinates and area name are mutually exclusive".to_string(),
                ));
            }
            (Some(coords), None) => {
                // A point submission carries exactly one pair; both the empty
                // list and longer lists are rejected.
                if coords.len() != 1 {
                    return Err(DomainError::Validation(format!(
                        "a point needs exactly one coordinate pair, got {}",
                        coords.len()
                    )));
                }
                Placement::Point(coords[0])
            }
            (None, Some(name)) => Placement::NamedArea(name),
            (None, None) => Placement::Unplaced,
        };

        if self.repo.find_id_by_title(&cmd.title).await?.is_some() {
            return Err(DomainError::Duplicate(EntityKind::Document));
        }

        let new = NewDocument {
            title: cmd.title,
            scale: cmd.scale,
            issuance_date: cmd.issuance_date,
            language: cmd.language,
            pages: cmd.pages,
            doc_type: cmd.doc_type,
            description: cmd.description,
            stakeholders: cmd.stakeholders,
            placement,
        };
        self.repo.create_with_placement(&new).await
    }
}
