use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::areas::get_area_coordinates::GetAreaCoordinates;
use crate::application::use_cases::areas::reassign_document_area::ReassignDocumentArea;
use crate::application::use_cases::areas::update_point_coordinates::UpdatePointCoordinates;
use crate::bootstrap::app_context::AppContext;
use crate::domain::catalogue::area::{Coordinate, PointUpdate};
use crate::presentation::http::documents::CoordinatePair;
use crate::presentation::http::error::{ApiError, error_response};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCoordinatesRequest {
    pub long: f64,
    pub lat: f64,
}

/// Mirrors the two write paths: a freshly created point area carries its
/// coordinates, an in-place update carries the untouched area id.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum PointUpdateResponse {
    Created { area_id: i64, long: f64, lat: f64 },
    Updated { area_id: i64, document_id: i64 },
}

impl From<PointUpdate> for PointUpdateResponse {
    fn from(u: PointUpdate) -> Self {
        match u {
            PointUpdate::Created { area_id, long, lat } => PointUpdateResponse::Created {
                area_id,
                long,
                lat,
            },
            PointUpdate::Updated {
                area_id,
                document_id,
            } => PointUpdateResponse::Updated {
                area_id,
                document_id,
            },
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReassignAreaRequest {
    pub area_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentResponse {
    pub document_id: i64,
    pub area_id: i64,
}

#[utoipa::path(patch, path = "/api/documents/{id}/coordinates", tag = "Areas",
    params(("id" = i64, Path, description = "Document id")),
    request_body = UpdateCoordinatesRequest,
    responses((status = 200, body = PointUpdateResponse),
              (status = 404, body = super::error::ErrorBody)))]
pub async fn update_point_coordinates(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCoordinatesRequest>,
) -> Result<Json<PointUpdateResponse>, ApiError> {
    let areas = ctx.area_repo();
    let uc = UpdatePointCoordinates {
        areas: areas.as_ref(),
    };
    let update = uc
        .execute(
            id,
            Coordinate {
                long: req.long,
                lat: req.lat,
            },
        )
        .await
        .map_err(error_response)?;
    Ok(Json(update.into()))
}

#[utoipa::path(patch, path = "/api/documents/{id}/area", tag = "Areas",
    params(("id" = i64, Path, description = "Document id")),
    request_body = ReassignAreaRequest,
    responses((status = 200, body = AssignmentResponse),
              (status = 404, body = super::error::ErrorBody)))]
pub async fn reassign_document_area(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    Json(req): Json<ReassignAreaRequest>,
) -> Result<Json<AssignmentResponse>, ApiError> {
    let areas = ctx.area_repo();
    let uc = ReassignDocumentArea {
        areas: areas.as_ref(),
    };
    let assignment = uc.execute(id, req.area_id).await.map_err(error_response)?;
    Ok(Json(AssignmentResponse {
        document_id: assignment.document_id,
        area_id: assignment.area_id,
    }))
}

#[utoipa::path(get, path = "/api/areas/{id}/coordinates", tag = "Areas",
    params(("id" = i64, Path, description = "Area id")),
    responses((status = 200, body = Option<Vec<Vec<CoordinatePair>>>)))]
pub async fn get_area_coordinates(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Vec<Vec<CoordinatePair>>>>, ApiError> {
    let areas = ctx.area_repo();
    let uc = GetAreaCoordinates {
        areas: areas.as_ref(),
    };
    // An area with no rows serializes as null, never as [].
    let rings = uc.execute(id).await.map_err(error_response)?;
    Ok(Json(rings.map(|rings| {
        rings
            .into_iter()
            .map(|ring| ring.into_iter().map(Into::into).collect())
            .collect()
    })))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/documents/:id/coordinates",
            patch(update_point_coordinates),
        )
        .route("/documents/:id/area", patch(reassign_document_area))
        .route("/areas/:id/coordinates", get(get_area_coordinates))
        .with_state(ctx)
}
