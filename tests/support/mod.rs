//! In-memory implementation of the storage ports. A single mutex stands in
//! for the store's transaction isolation: every logical operation runs under
//! one lock acquisition, so concurrent check-then-insert sequences are
//! serialized exactly like they are by the database constraints.

// Each integration suite compiles this module separately and uses a
// different slice of it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use docatlas::application::ports::area_repository::AreaRepository;
use docatlas::application::ports::connection_repository::ConnectionRepository;
use docatlas::application::ports::document_repository::{
    DocumentRepository, DocumentStakeholderRow, GeoRow, PositionRow,
};
use docatlas::application::ports::lookup_repository::LookupRepository;
use docatlas::domain::catalogue::area::{Area, AreaKind, Coordinate, CoordinateRow, Placement};
use docatlas::domain::catalogue::connection::Connection;
use docatlas::domain::catalogue::document::{Document, DocumentType, NewDocument, Stakeholder};
use docatlas::domain::error::{DomainError, DomainResult, EntityKind};

#[derive(Default)]
struct State {
    documents: Vec<Document>,
    stakeholders: Vec<Stakeholder>,
    document_stakeholders: Vec<(i64, i64)>,
    document_types: Vec<DocumentType>,
    areas: Vec<Area>,
    coordinates: Vec<(i64, CoordinateRow)>,
    assignments: HashMap<i64, Option<i64>>,
    connections: Vec<Connection>,
}

impl State {
    fn next_document_id(&self) -> i64 {
        self.documents.iter().map(|d| d.id).max().unwrap_or(0) + 1
    }

    fn next_area_id(&self) -> i64 {
        self.areas.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    fn allocate_point_area(&mut self, document_id: i64, coordinate: Coordinate) -> i64 {
        let area_id = self.next_area_id();
        self.areas.push(Area {
            id: area_id,
            kind: AreaKind::Point,
            name: None,
        });
        self.coordinates.push((
            area_id,
            CoordinateRow {
                sub_area_id: None,
                n_order: Some(1),
                long: coordinate.long,
                lat: coordinate.lat,
            },
        ));
        self.assignments.insert(document_id, Some(area_id));
        area_id
    }

    fn stakeholder_names_for(&self, document_id: i64) -> Vec<String> {
        self.document_stakeholders
            .iter()
            .filter(|(d, _)| *d == document_id)
            .filter_map(|(_, s)| {
                self.stakeholders
                    .iter()
                    .find(|st| st.id == *s)
                    .map(|st| st.name.clone())
            })
            .collect()
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a shared named polygon and returns its id.
    pub fn add_polygon(&self, name: &str, rows: &[CoordinateRow]) -> i64 {
        let mut state = self.state.lock().unwrap();
        let area_id = state.next_area_id();
        state.areas.push(Area {
            id: area_id,
            kind: AreaKind::Polygon,
            name: Some(name.to_string()),
        });
        for row in rows {
            state.coordinates.push((area_id, *row));
        }
        area_id
    }

    pub fn connection_count(&self) -> usize {
        self.state.lock().unwrap().connections.len()
    }

    pub fn area_exists(&self, area_id: i64) -> bool {
        self.state.lock().unwrap().areas.iter().any(|a| a.id == area_id)
    }

    pub fn coordinate_count(&self, area_id: i64) -> usize {
        self.state
            .lock()
            .unwrap()
            .coordinates
            .iter()
            .filter(|(id, _)| *id == area_id)
            .count()
    }

    pub fn max_area_id(&self) -> i64 {
        self.state.lock().unwrap().next_area_id() - 1
    }

    pub fn assigned_area(&self, document_id: i64) -> Option<Option<i64>> {
        self.state
            .lock()
            .unwrap()
            .assignments
            .get(&document_id)
            .copied()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryStore {
    async fn exists(&self, id: i64) -> DomainResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .documents
            .iter()
            .any(|d| d.id == id))
    }

    async fn find_id_by_title(&self, title: &str) -> DomainResult<Option<i64>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .documents
            .iter()
            .find(|d| d.title == title)
            .map(|d| d.id))
    }

    async fn create_with_placement(&self, new: &NewDocument) -> DomainResult<Document> {
        let mut state = self.state.lock().unwrap();
        if state.documents.iter().any(|d| d.title == new.title) {
            return Err(DomainError::Duplicate(EntityKind::Document));
        }
        let now = chrono::Utc::now();
        let document = Document {
            id: state.next_document_id(),
            title: new.title.clone(),
            scale: new.scale.clone(),
            issuance_date: new.issuance_date.clone(),
            language: new.language.clone(),
            pages: new.pages,
            doc_type: new.doc_type.clone(),
            description: new.description.clone(),
            created_at: now,
            updated_at: now,
        };
        state.documents.push(document.clone());

        for name in &new.stakeholders {
            let stakeholder_id = match state.stakeholders.iter().find(|s| &s.name == name) {
                Some(s) => s.id,
                None => {
                    let id = state.stakeholders.iter().map(|s| s.id).max().unwrap_or(0) + 1;
                    state.stakeholders.push(Stakeholder {
                        id,
                        name: name.clone(),
                    });
                    id
                }
            };
            if !state
                .document_stakeholders
                .contains(&(document.id, stakeholder_id))
            {
                state
                    .document_stakeholders
                    .push((document.id, stakeholder_id));
            }
        }

        match &new.placement {
            Placement::Unplaced => {
                state.assignments.insert(document.id, None);
            }
            Placement::Point(coordinate) => {
                state.allocate_point_area(document.id, *coordinate);
            }
            Placement::NamedArea(name) => {
                let area_id = state
                    .areas
                    .iter()
                    .find(|a| a.kind == AreaKind::Polygon && a.name.as_deref() == Some(name))
                    .map(|a| a.id)
                    .ok_or(DomainError::NotFound(EntityKind::Area))?;
                state.assignments.insert(document.id, Some(area_id));
            }
        }
        Ok(document)
    }

    async fn document_stakeholder_rows(&self) -> DomainResult<Vec<DocumentStakeholderRow>> {
        let state = self.state.lock().unwrap();
        let mut rows = Vec::new();
        for document in &state.documents {
            let names = state.stakeholder_names_for(document.id);
            if names.is_empty() {
                rows.push(DocumentStakeholderRow {
                    document: document.clone(),
                    stakeholder: None,
                });
            } else {
                for name in names {
                    rows.push(DocumentStakeholderRow {
                        document: document.clone(),
                        stakeholder: Some(name),
                    });
                }
            }
        }
        Ok(rows)
    }

    async fn document_stakeholder_rows_by_title(
        &self,
        title: &str,
    ) -> DomainResult<Vec<DocumentStakeholderRow>> {
        Ok(self
            .document_stakeholder_rows()
            .await?
            .into_iter()
            .filter(|r| r.document.title == title)
            .collect())
    }

    async fn geo_rows(&self) -> DomainResult<Vec<GeoRow>> {
        let state = self.state.lock().unwrap();
        let mut rows = Vec::new();
        for document in &state.documents {
            let Some(Some(area_id)) = state.assignments.get(&document.id).copied() else {
                continue;
            };
            let Some(area) = state.areas.iter().find(|a| a.id == area_id) else {
                continue;
            };
            let names = state.stakeholder_names_for(document.id);
            // One row per coordinate x stakeholder, like the SQL cross join.
            for (_, coordinate) in state.coordinates.iter().filter(|(id, _)| *id == area_id) {
                if names.is_empty() {
                    rows.push(GeoRow {
                        document: document.clone(),
                        stakeholder: None,
                        area: area.clone(),
                        coordinate: *coordinate,
                    });
                } else {
                    for name in &names {
                        rows.push(GeoRow {
                            document: document.clone(),
                            stakeholder: Some(name.clone()),
                            area: area.clone(),
                            coordinate: *coordinate,
                        });
                    }
                }
            }
        }
        Ok(rows)
    }

    async fn position_rows(&self, document_id: i64) -> DomainResult<Vec<PositionRow>> {
        let state = self.state.lock().unwrap();
        let Some(document) = state.documents.iter().find(|d| d.id == document_id) else {
            return Ok(Vec::new());
        };
        let Some(Some(area_id)) = state.assignments.get(&document_id).copied() else {
            return Ok(Vec::new());
        };
        Ok(state
            .coordinates
            .iter()
            .filter(|(id, _)| *id == area_id)
            .map(|(_, coordinate)| PositionRow {
                document: document.clone(),
                coordinate: *coordinate,
            })
            .collect())
    }
}

#[async_trait]
impl ConnectionRepository for InMemoryStore {
    async fn exists(
        &self,
        parent_id: i64,
        child_id: i64,
        connection_type: &str,
    ) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().connections.iter().any(|c| {
            c.parent_id == parent_id
                && c.child_id == child_id
                && c.connection_type == connection_type
        }))
    }

    async fn insert(&self, edge: &Connection) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.connections.contains(edge) {
            return Err(DomainError::Duplicate(EntityKind::Connection));
        }
        state.connections.push(edge.clone());
        Ok(())
    }

    async fn list_for_document(&self, document_id: i64) -> DomainResult<Vec<Connection>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .connections
            .iter()
            .filter(|c| c.parent_id == document_id || c.child_id == document_id)
            .cloned()
            .collect())
    }

    async fn delete(
        &self,
        parent_id: i64,
        child_id: i64,
        connection_type: &str,
    ) -> DomainResult<()> {
        self.state.lock().unwrap().connections.retain(|c| {
            !(c.parent_id == parent_id
                && c.child_id == child_id
                && c.connection_type == connection_type)
        });
        Ok(())
    }
}

#[async_trait]
impl AreaRepository for InMemoryStore {
    async fn assignment_for_document(&self, document_id: i64) -> DomainResult<Option<Option<i64>>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .assignments
            .get(&document_id)
            .copied())
    }

    async fn area(&self, area_id: i64) -> DomainResult<Option<Area>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .areas
            .iter()
            .find(|a| a.id == area_id)
            .cloned())
    }

    async fn coordinate_rows(&self, area_id: i64) -> DomainResult<Vec<CoordinateRow>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .coordinates
            .iter()
            .filter(|(id, _)| *id == area_id)
            .map(|(_, row)| *row)
            .collect())
    }

    async fn create_point_for_document(
        &self,
        document_id: i64,
        coordinate: Coordinate,
    ) -> DomainResult<i64> {
        let mut state = self.state.lock().unwrap();
        Ok(state.allocate_point_area(document_id, coordinate))
    }

    async fn update_point_coordinates(
        &self,
        area_id: i64,
        coordinate: Coordinate,
    ) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        for (id, row) in state.coordinates.iter_mut() {
            if *id == area_id {
                row.long = coordinate.long;
                row.lat = coordinate.lat;
            }
        }
        Ok(())
    }

    async fn reassign_document(
        &self,
        document_id: i64,
        new_area_id: i64,
        orphaned_point_area: Option<i64>,
    ) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.assignments.insert(document_id, Some(new_area_id));
        if let Some(orphan_id) = orphaned_point_area {
            state.areas.retain(|a| a.id != orphan_id);
            state.coordinates.retain(|(id, _)| *id != orphan_id);
        }
        Ok(())
    }
}

#[async_trait]
impl LookupRepository for InMemoryStore {
    async fn list_document_types(&self) -> DomainResult<Vec<DocumentType>> {
        Ok(self.state.lock().unwrap().document_types.clone())
    }

    async fn find_document_type(&self, name: &str) -> DomainResult<Option<DocumentType>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .document_types
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn insert_document_type(&self, name: &str) -> DomainResult<DocumentType> {
        let mut state = self.state.lock().unwrap();
        if state.document_types.iter().any(|t| t.name == name) {
            return Err(DomainError::Duplicate(EntityKind::DocumentType));
        }
        let stored = DocumentType {
            id: state.document_types.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            name: name.to_string(),
        };
        state.document_types.push(stored.clone());
        Ok(stored)
    }

    async fn list_stakeholders(&self) -> DomainResult<Vec<Stakeholder>> {
        Ok(self.state.lock().unwrap().stakeholders.clone())
    }
}

/// Creates an unplaced document through the creation use case.
pub async fn seed_document(store: &InMemoryStore, title: &str) -> i64 {
    seed_document_with(store, title, Vec::new(), None).await
}

pub async fn seed_document_with(
    store: &InMemoryStore,
    title: &str,
    stakeholders: Vec<String>,
    coordinates: Option<Vec<Coordinate>>,
) -> i64 {
    use docatlas::application::use_cases::documents::create_document::{
        CreateDocument, CreateDocumentCommand,
    };
    let uc = CreateDocument { repo: store };
    uc.execute(CreateDocumentCommand {
        title: title.to_string(),
        scale: None,
        issuance_date: None,
        language: None,
        pages: None,
        doc_type: "Report".to_string(),
        description: None,
        stakeholders,
        coordinates,
        area_name: None,
    })
    .await
    .expect("seed document")
    .id
}
