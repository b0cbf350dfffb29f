use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::connections::delete_connection::DeleteConnection;
use crate::application::use_cases::connections::link_documents::LinkDocuments;
use crate::application::use_cases::connections::list_connections::ListConnections;
use crate::bootstrap::app_context::AppContext;
use crate::domain::catalogue::connection::Connection;
use crate::presentation::http::error::{ApiError, error_response};

#[derive(Debug, Serialize, ToSchema)]
pub struct ConnectionResponse {
    pub parent_id: i64,
    pub child_id: i64,
    pub connection_type: String,
}

impl From<Connection> for ConnectionResponse {
    fn from(c: Connection) -> Self {
        ConnectionResponse {
            parent_id: c.parent_id,
            child_id: c.child_id,
            connection_type: c.connection_type,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConnectionRequest {
    pub parent_id: i64,
    pub child_id: i64,
    pub connection_type: String,
}

#[utoipa::path(post, path = "/api/connections", tag = "Connections",
    request_body = ConnectionRequest,
    responses((status = 200, body = ConnectionResponse),
              (status = 404, body = super::error::ErrorBody),
              (status = 409, body = super::error::ErrorBody)))]
pub async fn create_connection(
    State(ctx): State<AppContext>,
    Json(req): Json<ConnectionRequest>,
) -> Result<Json<ConnectionResponse>, ApiError> {
    let documents = ctx.document_repo();
    let connections = ctx.connection_repo();
    let uc = LinkDocuments {
        documents: documents.as_ref(),
        connections: connections.as_ref(),
    };
    let edge = uc
        .execute(req.parent_id, req.child_id, &req.connection_type)
        .await
        .map_err(error_response)?;
    Ok(Json(edge.into()))
}

#[utoipa::path(get, path = "/api/connections/{title}", tag = "Connections",
    params(("title" = String, Path, description = "Document title")),
    responses((status = 200, body = [ConnectionResponse]),
              (status = 404, body = super::error::ErrorBody)))]
pub async fn list_connections(
    State(ctx): State<AppContext>,
    Path(title): Path<String>,
) -> Result<Json<Vec<ConnectionResponse>>, ApiError> {
    let documents = ctx.document_repo();
    let connections = ctx.connection_repo();
    let uc = ListConnections {
        documents: documents.as_ref(),
        connections: connections.as_ref(),
    };
    let edges = uc.execute(&title).await.map_err(error_response)?;
    Ok(Json(edges.into_iter().map(Into::into).collect()))
}

#[utoipa::path(delete, path = "/api/connections", tag = "Connections",
    request_body = ConnectionRequest,
    responses((status = 204)))]
pub async fn delete_connection(
    State(ctx): State<AppContext>,
    Json(req): Json<ConnectionRequest>,
) -> Result<StatusCode, ApiError> {
    let connections = ctx.connection_repo();
    let uc = DeleteConnection {
        connections: connections.as_ref(),
    };
    uc.execute(req.parent_id, req.child_id, &req.connection_type)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/connections",
            post(create_connection).delete(delete_connection),
        )
        .route("/connections/:title", get(list_connections))
        .with_state(ctx)
}
