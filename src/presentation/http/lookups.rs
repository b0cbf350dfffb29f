use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::lookups::add_document_type::AddDocumentType;
use crate::application::use_cases::lookups::list_document_types::ListDocumentTypes;
use crate::application::use_cases::lookups::list_stakeholders::ListStakeholders;
use crate::bootstrap::app_context::AppContext;
use crate::domain::catalogue::document::{DocumentType, Stakeholder};
use crate::presentation::http::error::{ApiError, error_response};

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentTypeItem {
    pub id: i64,
    pub name: String,
}

impl From<DocumentType> for DocumentTypeItem {
    fn from(t: DocumentType) -> Self {
        DocumentTypeItem {
            id: t.id,
            name: t.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StakeholderItem {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddDocumentTypeRequest {
    pub name: String,
}

#[utoipa::path(get, path = "/api/document-types", tag = "Lookups",
    responses((status = 200, body = [DocumentTypeItem])))]
pub async fn list_document_types(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<DocumentTypeItem>>, ApiError> {
    let repo = ctx.lookup_repo();
    let uc = ListDocumentTypes {
        repo: repo.as_ref(),
    };
    let types = uc.execute().await.map_err(error_response)?;
    Ok(Json(types.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/document-types", tag = "Lookups",
    request_body = AddDocumentTypeRequest,
    responses((status = 200, body = DocumentTypeItem),
              (status = 409, body = super::error::ErrorBody)))]
pub async fn add_document_type(
    State(ctx): State<AppContext>,
    Json(req): Json<AddDocumentTypeRequest>,
) -> Result<Json<DocumentTypeItem>, ApiError> {
    let repo = ctx.lookup_repo();
    let uc = AddDocumentType {
        repo: repo.as_ref(),
    };
    let stored = uc.execute(&req.name).await.map_err(error_response)?;
    Ok(Json(stored.into()))
}

#[utoipa::path(get, path = "/api/stakeholders", tag = "Lookups",
    responses((status = 200, body = [StakeholderItem])))]
pub async fn list_stakeholders(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<StakeholderItem>>, ApiError> {
    let repo = ctx.lookup_repo();
    let uc = ListStakeholders {
        repo: repo.as_ref(),
    };
    let stakeholders = uc.execute().await.map_err(error_response)?;
    Ok(Json(
        stakeholders
            .into_iter()
            .map(|s: Stakeholder| StakeholderItem {
                id: s.id,
                name: s.name,
            })
            .collect(),
    ))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/document-types",
            get(list_document_types).post(add_document_type),
        )
        .route("/stakeholders", get(list_stakeholders))
        .with_state(ctx)
}
