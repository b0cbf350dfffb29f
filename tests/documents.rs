//! Document creation and the aggregation reads, driven end-to-end through
//! the use cases.

mod support;

use docatlas::application::use_cases::documents::create_document::{
    CreateDocument, CreateDocumentCommand,
};
use docatlas::application::use_cases::documents::get_document_by_title::GetDocumentByTitle;
use docatlas::application::use_cases::documents::get_document_position::GetDocumentPosition;
use docatlas::application::use_cases::documents::list_documents::ListDocuments;
use docatlas::application::use_cases::documents::list_documents_geo::ListDocumentsGeo;
use docatlas::application::use_cases::lookups::add_document_type::AddDocumentType;
use docatlas::application::use_cases::lookups::list_document_types::ListDocumentTypes;
use docatlas::application::use_cases::lookups::list_stakeholders::ListStakeholders;
use docatlas::domain::catalogue::area::Coordinate;
use docatlas::domain::catalogue::document::GeolocationGroup;
use docatlas::domain::error::{DomainError, EntityKind};

use support::{InMemoryStore, seed_document_with};

fn command(title: &str) -> CreateDocumentCommand {
    CreateDocumentCommand {
        title: title.to_string(),
        scale: None,
        issuance_date: None,
        language: None,
        pages: None,
        doc_type: "Report".to_string(),
        description: None,
        stakeholders: Vec::new(),
        coordinates: None,
        area_name: None,
    }
}

#[tokio::test]
async fn point_document_shows_up_in_the_geo_listing() {
    let store = InMemoryStore::new();
    seed_document_with(
        &store,
        "Deformation forecast",
        vec!["Municipality".to_string()],
        Some(vec![Coordinate {
            long: 20.22,
            lat: 67.85,
        }]),
    )
    .await;

    let views = ListDocumentsGeo { repo: &store }.execute().await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].stakeholders, vec!["Municipality"]);
    assert_eq!(
        views[0].geolocations,
        vec![GeolocationGroup {
            area_name: "Point".to_string(),
            coordinates: vec![Coordinate {
                long: 20.22,
                lat: 67.85
            }],
        }]
    );
}

#[tokio::test]
async fn point_submission_rejects_zero_and_multiple_pairs() {
    let store = InMemoryStore::new();
    let uc = CreateDocument { repo: &store };

    let mut cmd = command("a");
    cmd.coordinates = Some(Vec::new());
    assert!(matches!(
        uc.execute(cmd).await.unwrap_err(),
        DomainError::Validation(_)
    ));

    let mut cmd = command("a");
    cmd.coordinates = Some(vec![
        Coordinate { long: 1.0, lat: 1.0 },
        Coordinate { long: 2.0, lat: 2.0 },
    ]);
    assert!(matches!(
        uc.execute(cmd).await.unwrap_err(),
        DomainError::Validation(_)
    ));

    let views = ListDocuments { repo: &store }.execute().await.unwrap();
    assert!(views.is_empty());
}

#[tokio::test]
async fn duplicate_title_is_rejected() {
    let store = InMemoryStore::new();
    let uc = CreateDocument { repo: &store };
    uc.execute(command("a")).await.unwrap();
    assert!(matches!(
        uc.execute(command("a")).await.unwrap_err(),
        DomainError::Duplicate(EntityKind::Document)
    ));
}

#[tokio::test]
async fn named_area_placement_resolves_an_existing_polygon() {
    let store = InMemoryStore::new();
    let polygon = store.add_polygon(
        "Harbour district",
        &[docatlas::domain::catalogue::area::CoordinateRow {
            sub_area_id: Some(1),
            n_order: Some(1),
            long: 1.0,
            lat: 1.0,
        }],
    );

    let uc = CreateDocument { repo: &store };
    let mut cmd = command("a");
    cmd.area_name = Some("Harbour district".to_string());
    let doc = uc.execute(cmd).await.unwrap();
    assert_eq!(store.assigned_area(doc.id), Some(Some(polygon)));

    let mut cmd = command("b");
    cmd.area_name = Some("Atlantis".to_string());
    assert!(matches!(
        uc.execute(cmd).await.unwrap_err(),
        DomainError::NotFound(EntityKind::Area)
    ));
}

#[tokio::test]
async fn coordinates_and_area_name_are_mutually_exclusive() {
    let store = InMemoryStore::new();
    store.add_polygon("Harbour district", &[]);
    let mut cmd = command("a");
    cmd.coordinates = Some(vec![Coordinate { long: 1.0, lat: 1.0 }]);
    cmd.area_name = Some("Harbour district".to_string());
    assert!(matches!(
        CreateDocument { repo: &store }.execute(cmd).await.unwrap_err(),
        DomainError::Validation(_)
    ));
}

#[tokio::test]
async fn listing_folds_stakeholders_per_document() {
    let store = InMemoryStore::new();
    seed_document_with(
        &store,
        "a",
        vec!["Municipality".to_string(), "Residents".to_string()],
        None,
    )
    .await;
    seed_document_with(&store, "b", Vec::new(), None).await;

    let views = ListDocuments { repo: &store }.execute().await.unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].stakeholders, vec!["Municipality", "Residents"]);
    assert!(views[1].stakeholders.is_empty());
}

#[tokio::test]
async fn fetch_by_title_returns_the_folded_view_or_none() {
    let store = InMemoryStore::new();
    seed_document_with(&store, "a", vec!["Municipality".to_string()], None).await;

    let uc = GetDocumentByTitle { repo: &store };
    let view = uc.execute("a").await.unwrap().unwrap();
    assert_eq!(view.document.title, "a");
    assert_eq!(view.stakeholders, vec!["Municipality"]);
    assert!(uc.execute("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn position_merges_scalars_with_rings_or_is_none() {
    let store = InMemoryStore::new();
    let placed =
        seed_document_with(&store, "placed", Vec::new(), Some(vec![Coordinate {
            long: 20.22,
            lat: 67.85,
        }]))
        .await;
    let unplaced = seed_document_with(&store, "unplaced", Vec::new(), None).await;

    let uc = GetDocumentPosition { repo: &store };
    let position = uc.execute(placed).await.unwrap().unwrap();
    assert_eq!(position.document.title, "placed");
    assert_eq!(
        position.coordinates,
        vec![vec![Coordinate {
            long: 20.22,
            lat: 67.85
        }]]
    );
    assert!(uc.execute(unplaced).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_document_type_is_rejected_and_list_stays_stable() {
    let store = InMemoryStore::new();
    let add = AddDocumentType { repo: &store };
    add.execute("Invoice").await.unwrap();
    assert!(matches!(
        add.execute("Invoice").await.unwrap_err(),
        DomainError::Duplicate(EntityKind::DocumentType)
    ));

    let types = ListDocumentTypes { repo: &store }.execute().await.unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name, "Invoice");
}

#[tokio::test]
async fn stakeholders_created_with_documents_are_listed_once() {
    let store = InMemoryStore::new();
    seed_document_with(&store, "a", vec!["Municipality".to_string()], None).await;
    seed_document_with(&store, "b", vec!["Municipality".to_string()], None).await;

    let stakeholders = ListStakeholders { repo: &store }.execute().await.unwrap();
    assert_eq!(stakeholders.len(), 1);
    assert_eq!(stakeholders[0].name, "Municipality");
}
