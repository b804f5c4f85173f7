use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use catalog::starter_inventory;
use chrono::Utc;
use shared::{
    domain::Substance,
    error::ApiError,
    protocol::{ReactionSummary, SynthesisResponse, SynthesizeRequest},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

const MAX_BODY_BYTES: usize = 64 * 1024;
const MAX_SYNTHESIS_INPUTS: usize = 16;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState::from_settings(&settings)?;
    info!(reactions = state.resolver.table().len(), "reaction table ready");
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/reactions", get(list_reactions))
        .route("/inventory/starter", get(list_starter_inventory))
        .route("/synthesize", post(synthesize))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_reactions(State(state): State<Arc<AppState>>) -> Json<Vec<ReactionSummary>> {
    Json(state.resolver.table().summaries())
}

async fn list_starter_inventory() -> Json<Vec<Substance>> {
    Json(starter_inventory(Utc::now()))
}

async fn synthesize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SynthesizeRequest>,
) -> Result<Json<SynthesisResponse>, (StatusCode, Json<ApiError>)> {
    if req.substances.len() > MAX_SYNTHESIS_INPUTS {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::validation(format!(
                "at most {MAX_SYNTHESIS_INPUTS} substances per synthesis"
            ))),
        ));
    }

    let resolution = state.resolver.resolve_traced(&req.substances).await;
    info!(
        key = resolution.key.as_deref().unwrap_or("-"),
        source = resolution.source.as_str(),
        success = resolution.outcome.success,
        "synthesis resolved"
    );

    Ok(Json(SynthesisResponse {
        key: resolution.key,
        source: resolution.source,
        outcome: resolution.outcome,
    }))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
