use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::catalogue::Catalogue;
use crate::error::GenerationFailure;
use crate::pipeline::RenderResult;
use crate::TARGET_WEB_REQUEST;

/// The only failure text a client ever sees.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate video content";

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalogue: Arc<Catalogue>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            started_at: Utc::now(),
        }
    }
}

/// Body returned with every 500 response.
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    version: &'static str,
    topics: usize,
    started_at: DateTime<Utc>,
}

/// Maps a pipeline failure onto the HTTP response. The reason is logged, not
/// returned.
pub struct ApiError(GenerationFailure);

impl From<GenerationFailure> for ApiError {
    fn from(failure: GenerationFailure) -> Self {
        Self(failure)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(target: TARGET_WEB_REQUEST, "Error generating video: {}", self.0);
        failure_response()
    }
}

fn failure_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: GENERATION_FAILED_MESSAGE,
        }),
    )
        .into_response()
}

/// Converts a panic inside a handler into the same generic failure response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(target: TARGET_WEB_REQUEST, "Handler panicked: {}", detail);
    failure_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Builds the HTTP routes.
///
/// # Arguments
/// - `state`: catalogue and start time shared across requests.
/// - `cors_origins`: allowed browser origins; empty allows any.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    let routes = Router::new()
        .route("/api/generate", post(generate_video))
        .route("/status", get(status_check))
        .with_state(state);
    with_layers(routes, cors_origins)
}

fn with_layers(routes: Router, cors_origins: &[String]) -> Router {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Draws a topic and returns every rendered artifact for it.
async fn generate_video(State(state): State<AppState>) -> Result<Json<RenderResult>, ApiError> {
    let result = state.catalogue.generate()?;
    info!(
        target: TARGET_WEB_REQUEST,
        "Generated video content for {:?}", result.primary_keyword
    );
    Ok(Json(result))
}

async fn status_check(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        topics: state.catalogue.len(),
        started_at: state.started_at,
    })
}
