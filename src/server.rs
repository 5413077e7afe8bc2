//! HTTP server for the start page.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Dashboard; with `?q=` redirects when the query resolves |
//! | `GET`  | `/api/config` | Catalog as JSON |
//! | `GET`  | `/api/config/raw` | Catalog as stored text |
//! | `POST` | `/api/config/raw` | Replace the catalog text (validated first) |
//! | `GET`  | `/api/resolve?q=` | Resolution result as JSON, without redirecting |
//! | `GET`  | `/health` | Health check (returns version) |
//! | `GET`  | `/static/*` | Dashboard assets |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "invalid_yaml", "message": "Invalid YAML: ..." } }
//! ```
//!
//! Error codes: `invalid_yaml` (400), `not_found` (404), `invalid_config` (500),
//! `internal` (500).
//!
//! The redirect path never fails: a catalog that cannot be loaded or a
//! destination that is not a valid `Location` value falls back to the
//! dashboard.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use crossroads_core::Resolution;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::store::{CatalogStore, FileCatalogStore, StoreError};

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn CatalogStore>,
    assets_dir: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            assets_dir: assets_dir.into(),
        }
    }
}

/// Starts the HTTP server.
///
/// Binds to `[server].bind`, serves the catalog at `[catalog].path`, and
/// runs until the process receives Ctrl-C.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let store = Arc::new(FileCatalogStore::new(&config.catalog.path));
    let app = router(AppState::new(store, config.assets.dir.clone()));

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;

    info!(
        bind = %config.server.bind,
        catalog = %config.catalog.path.display(),
        assets = %config.assets.dir.display(),
        "crossroads listening"
    );
    println!("Crossroads listening on http://{}", config.server.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}

/// Build the router with all routes and layers.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.assets_dir);

    Router::new()
        .route("/", get(handle_index))
        .route("/api/config", get(handle_get_config))
        .route(
            "/api/config/raw",
            get(handle_get_config_raw).post(handle_save_config_raw),
        )
        .route("/api/resolve", get(handle_resolve))
        .route("/health", get(handle_health))
        .nest_service("/static", assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn app_error(status: StatusCode, code: &str, message: impl Into<String>) -> AppError {
    AppError {
        status,
        code: code.to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    app_error(StatusCode::NOT_FOUND, "not_found", message)
}

fn internal(message: impl Into<String>) -> AppError {
    app_error(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
}

/// Map a failed catalog read. A document that does not parse is a server
/// error here: the stored catalog is broken, not the request.
fn load_error(err: StoreError) -> AppError {
    match err {
        StoreError::Parse(msg) => app_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "invalid_config",
            format!("Invalid config: {}", msg),
        ),
        StoreError::Io(e) => internal(e.to_string()),
    }
}

// ============ GET / ============

#[derive(Debug, Deserialize)]
struct QueryParams {
    q: Option<String>,
}

/// Handler for `GET /`.
///
/// With a `q` parameter that resolves, answers `307 Temporary Redirect`.
/// Every other case serves the dashboard, including a query string that
/// does not parse (e.g. a repeated `q`).
async fn handle_index(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let query = match params {
        Ok(Query(params)) => params.q,
        Err(e) => {
            debug!(error = %e, "unreadable query string, showing dashboard");
            None
        }
    };
    if let Some(query) = query.as_deref() {
        if let Some(location) = redirect_target(&state, query).await {
            let redirect = (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]);
            return Ok(redirect.into_response());
        }
    }
    serve_index(&state).await
}

async fn redirect_target(state: &AppState, query: &str) -> Option<HeaderValue> {
    let document = match state.store.load().await {
        Ok(document) => document,
        Err(e) => {
            warn!(error = %e, "catalog unavailable, showing dashboard");
            return None;
        }
    };

    let resolution = crossroads_core::resolve_document(&document, query);
    debug!(query, ?resolution, "resolved query");

    let url = resolution.url()?;
    match HeaderValue::from_str(url) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(url, "destination is not a valid Location header, showing dashboard");
            None
        }
    }
}

async fn serve_index(state: &AppState) -> Result<Response, AppError> {
    let path = state.assets_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(not_found(format!("dashboard not found: {}", path.display())))
        }
        Err(e) => Err(internal(e.to_string())),
    }
}

// ============ /api/config ============

/// Handler for `GET /api/config`.
async fn handle_get_config(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let document = state.store.load().await.map_err(load_error)?;
    Ok(Json(document))
}

/// Handler for `GET /api/config/raw`.
async fn handle_get_config_raw(State(state): State<AppState>) -> Result<Response, AppError> {
    let raw = state.store.load_raw().await.map_err(load_error)?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], raw).into_response())
}

#[derive(Serialize)]
struct SavedResponse {
    ok: bool,
}

/// Handler for `POST /api/config/raw`.
///
/// The body is the complete catalog text. It is rejected with `400` when it
/// does not parse, in which case the stored catalog is unchanged.
async fn handle_save_config_raw(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<SavedResponse>, AppError> {
    match state.store.save(&body).await {
        Ok(()) => {
            info!(bytes = body.len(), "catalog saved");
            Ok(Json(SavedResponse { ok: true }))
        }
        Err(StoreError::Parse(msg)) => {
            warn!(error = %msg, "rejected catalog update");
            Err(app_error(
                StatusCode::BAD_REQUEST,
                "invalid_yaml",
                format!("Invalid YAML: {}", msg),
            ))
        }
        Err(StoreError::Io(e)) => Err(internal(e.to_string())),
    }
}

// ============ GET /api/resolve ============

/// Handler for `GET /api/resolve`.
///
/// Runs the same resolution as `GET /?q=` but reports the outcome instead
/// of redirecting. A missing `q` is unresolved.
async fn handle_resolve(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Resolution>, AppError> {
    let query = params.q.unwrap_or_default();
    let document = state.store.load().await.map_err(load_error)?;
    Ok(Json(crossroads_core::resolve_document(&document, &query)))
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
