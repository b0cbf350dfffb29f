use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::documents::create_document::{
    CreateDocument, CreateDocumentCommand,
};
use crate::application::use_cases::documents::get_document_by_title::GetDocumentByTitle;
use crate::application::use_cases::documents::get_document_position::GetDocumentPosition;
use crate::application::use_cases::documents::list_documents::ListDocuments;
use crate::application::use_cases::documents::list_documents_geo::ListDocumentsGeo;
use crate::bootstrap::app_context::AppContext;
use crate::domain::catalogue::area::Coordinate;
use crate::domain::catalogue::document as domain;
use crate::domain::error::{DomainError, EntityKind};
use crate::presentation::http::error::{ApiError, error_response};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CoordinatePair {
    pub long: f64,
    pub lat: f64,
}

impl From<Coordinate> for CoordinatePair {
    fn from(c: Coordinate) -> Self {
        CoordinatePair {
            long: c.long,
            lat: c.lat,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentResponse {
    pub id: i64,
    pub title: String,
    pub scale: Option<String>,
    pub issuance_date: Option<String>,
    pub language: Option<String>,
    pub pages: Option<i32>,
    pub r#type: String,
    pub description: Option<String>,
    pub stakeholders: Vec<String>,
}

impl DocumentResponse {
    fn new(d: domain::Document, stakeholders: Vec<String>) -> Self {
        DocumentResponse {
            id: d.id,
            title: d.title,
            scale: d.scale,
            issuance_date: d.issuance_date,
            language: d.language,
            pages: d.pages,
            r#type: d.doc_type,
            description: d.description,
            stakeholders,
        }
    }
}

impl From<domain::DocumentView> for DocumentResponse {
    fn from(v: domain::DocumentView) -> Self {
        DocumentResponse::new(v.document, v.stakeholders)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GeolocationDto {
    pub area_name: String,
    pub coordinates: Vec<CoordinatePair>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GeoDocumentResponse {
    #[serde(flatten)]
    pub document: DocumentResponse,
    pub geolocations: Vec<GeolocationDto>,
}

impl From<domain::GeoDocumentView> for GeoDocumentResponse {
    fn from(v: domain::GeoDocumentView) -> Self {
        GeoDocumentResponse {
            document: DocumentResponse::new(v.document, v.stakeholders),
            geolocations: v
                .geolocations
                .into_iter()
                .map(|g| GeolocationDto {
                    area_name: g.area_name,
                    coordinates: g.coordinates.into_iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PositionResponse {
    #[serde(flatten)]
    pub document: DocumentResponse,
    pub coordinates: Vec<Vec<CoordinatePair>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub scale: Option<String>,
    pub issuance_date: Option<String>,
    pub language: Option<String>,
    pub pages: Option<i32>,
    pub r#type: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stakeholders: Vec<String>,
    pub coordinates: Option<Vec<CoordinatePair>>,
    pub area_name: Option<String>,
}

#[utoipa::path(get, path = "/api/documents", tag = "Documents",
    responses((status = 200, body = [DocumentResponse])))]
pub async fn list_documents(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let repo = ctx.document_repo();
    let uc = ListDocuments {
        repo: repo.as_ref(),
    };
    let views = uc.execute().await.map_err(error_response)?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/documents", tag = "Documents",
    request_body = CreateDocumentRequest,
    responses((status = 200, body = DocumentResponse)))]
pub async fn create_document(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let repo = ctx.document_repo();
    let uc = CreateDocument {
        repo: repo.as_ref(),
    };
    let stakeholders = req.stakeholders.clone();
    let cmd = CreateDocumentCommand {
        title: req.title,
        scale: req.scale,
        issuance_date: req.issuance_date,
        language: req.language,
        pages: req.pages,
        doc_type: req.r#type,
        description: req.description,
        stakeholders: req.stakeholders,
        coordinates: req.coordinates.map(|list| {
            list.into_iter()
                .map(|c| Coordinate {
                    long: c.long,
                    lat: c.lat,
                })
                .collect()
        }),
        area_name: req.area_name,
    };
    let document = uc.execute(cmd).await.map_err(error_response)?;
    Ok(Json(DocumentResponse::new(document, stakeholders)))
}

#[utoipa::path(get, path = "/api/documents/geo", tag = "Documents",
    responses((status = 200, body = [GeoDocumentResponse])))]
pub async fn list_documents_geo(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<GeoDocumentResponse>>, ApiError> {
    let repo = ctx.document_repo();
    let uc = ListDocumentsGeo {
        repo: repo.as_ref(),
    };
    let views = uc.execute().await.map_err(error_response)?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/documents/title/{title}", tag = "Documents",
    params(("title" = String, Path, description = "Document title")),
    responses((status = 200, body = DocumentResponse), (status = 404, body = super::error::ErrorBody)))]
pub async fn get_document_by_title(
    State(ctx): State<AppContext>,
    Path(title): Path<String>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let repo = ctx.document_repo();
    let uc = GetDocumentByTitle {
        repo: repo.as_ref(),
    };
    let view = uc
        .execute(&title)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::NotFound(EntityKind::Document)))?;
    Ok(Json(view.into()))
}

#[utoipa::path(get, path = "/api/documents/{id}/position", tag = "Documents",
    params(("id" = i64, Path, description = "Document id")),
    responses((status = 200, body = PositionResponse), (status = 404, body = super::error::ErrorBody)))]
pub async fn get_document_position(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<PositionResponse>, ApiError> {
    let repo = ctx.document_repo();
    let uc = GetDocumentPosition {
        repo: repo.as_ref(),
    };
    let position = uc
        .execute(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::NotFound(EntityKind::Document)))?;
    Ok(Json(PositionResponse {
        document: DocumentResponse::new(position.document, Vec::new()),
        coordinates: position
            .coordinates
            .into_iter()
            .map(|ring| ring.into_iter().map(Into::into).collect())
            .collect(),
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/documents", get(list_documents).post(create_document))
        .route("/documents/geo", get(list_documents_geo))
        .route("/documents/title/:title", get(get_document_by_title))
        .route("/documents/:id/position", get(get_document_position))
        .with_state(ctx)
}
