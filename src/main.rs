use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use docatlas::bootstrap::app_context::{AppContext, AppServices};
use docatlas::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            docatlas::presentation::http::documents::list_documents,
            docatlas::presentation::http::documents::create_document,
            docatlas::presentation::http::documents::list_documents_geo,
            docatlas::presentation::http::documents::get_document_by_title,
            docatlas::presentation::http::documents::get_document_position,
            docatlas::presentation::http::connections::create_connection,
            docatlas::presentation::http::connections::list_connections,
            docatlas::presentation::http::connections::delete_connection,
            docatlas::presentation::http::areas::update_point_coordinates,
            docatlas::presentation::http::areas::reassign_document_area,
            docatlas::presentation::http::areas::get_area_coordinates,
            docatlas::presentation::http::lookups::list_document_types,
            docatlas::presentation::http::lookups::add_document_type,
            docatlas::presentation::http::lookups::list_stakeholders,
            docatlas::presentation::http::health::health,
        ),
        components(schemas(
            docatlas::presentation::http::documents::CoordinatePair,
            docatlas::presentation::http::documents::DocumentResponse,
            docatlas::presentation::http::documents::GeolocationDto,
            docatlas::presentation::http::documents::GeoDocumentResponse,
            docatlas::presentation::http::documents::PositionResponse,
            docatlas::presentation::http::documents::CreateDocumentRequest,
            docatlas::presentation::http::connections::ConnectionRequest,
            docatlas::presentation::http::connections::ConnectionResponse,
            docatlas::presentation::http::areas::UpdateCoordinatesRequest,
            docatlas::presentation::http::areas::PointUpdateResponse,
            docatlas::presentation::http::areas::ReassignAreaRequest,
            docatlas::presentation::http::areas::AssignmentResponse,
            docatlas::presentation::http::lookups::DocumentTypeItem,
            docatlas::presentation::http::lookups::StakeholderItem,
            docatlas::presentation::http::lookups::AddDocumentTypeRequest,
            docatlas::presentation::http::error::ErrorBody,
            docatlas::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Documents", description = "Document catalogue"),
            (name = "Connections", description = "Document relationship graph"),
            (name = "Areas", description = "Spatial assignment"),
            (name = "Lookups", description = "Types and stakeholders"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "docatlas=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting docatlas backend");

    // Database
    let pool = docatlas::infrastructure::db::connect_pool(&cfg.database_url).await?;
    docatlas::infrastructure::db::migrate(&pool).await?;

    let document_repo = Arc::new(
        docatlas::infrastructure::db::repositories::document_repository_sqlx::SqlxDocumentRepository::new(
            pool.clone(),
        ),
    );
    let connection_repo = Arc::new(
        docatlas::infrastructure::db::repositories::connection_repository_sqlx::SqlxConnectionRepository::new(
            pool.clone(),
        ),
    );
    let area_repo = Arc::new(
        docatlas::infrastructure::db::repositories::area_repository_sqlx::SqlxAreaRepository::new(
            pool.clone(),
        ),
    );
    let lookup_repo = Arc::new(
        docatlas::infrastructure::db::repositories::lookup_repository_sqlx::SqlxLookupRepository::new(
            pool.clone(),
        ),
    );

    let services = AppServices::new(document_repo, connection_repo, area_repo, lookup_repo);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => cors_layer(AllowOrigin::exact(v)),
            Err(_) => cors_layer(AllowOrigin::mirror_request()),
        }
    } else if cfg.is_production {
        // FRONTEND_URL is mandatory in production (enforced earlier); deny all
        cors_layer(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
    } else {
        // Development convenience
        cors_layer(AllowOrigin::mirror_request())
    };

    let app = Router::new()
        .nest(
            "/api",
            docatlas::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api",
            docatlas::presentation::http::documents::routes(ctx.clone()),
        )
        .nest(
            "/api",
            docatlas::presentation::http::connections::routes(ctx.clone()),
        )
        .nest(
            "/api",
            docatlas::presentation::http::areas::routes(ctx.clone()),
        )
        .nest(
            "/api",
            docatlas::presentation::http::lookups::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

fn cors_layer(origin: AllowOrigin) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::PATCH,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
}
