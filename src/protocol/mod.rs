use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::model::content::{TranslateRequest, TranslationContent};
use crate::services::{normalize, upstream};

pub struct AppState {
    pub client: reqwest::Client,
    pub config: Config,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/translate", post(translate))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn translate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslationContent>, (StatusCode, Json<Value>)> {
    info!(
        language = %request.language,
        resources = request.content.resources.len(),
        "translate request"
    );

    let raw = upstream::request_translation(
        &state.client,
        &state.config.upstream_endpoint,
        &request,
    )
    .await
    .map_err(upstream_error_response)?;

    // A cascata de normalização nunca falha: no pior caso a resposta é o
    // conteúdo original ecoado de volta.
    Ok(Json(normalize::normalize(&request.content, &raw)))
}

fn upstream_error_response(err: upstream::UpstreamError) -> (StatusCode, Json<Value>) {
    warn!(error = %err, "upstream translation failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": err.to_string() })),
    )
}
