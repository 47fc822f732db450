use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use humanizer::Humanizer;
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{HealthResponse, HumanizeRequest, HumanizeResponse, HEALTH_ROUTE, HUMANIZE_ROUTE},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

mod api;
mod app_state;
mod config;

use api::ApiContext;
use app_state::AppState;
use config::load_settings;

type HumanizeRejection = (StatusCode, Json<HumanizeResponse>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let humanizer = match settings.humanizer_seed {
        Some(seed) => {
            info!(seed, "humanizer running with a fixed seed");
            Humanizer::with_seed(seed)?
        }
        None => Humanizer::new()?,
    };
    let state = AppState {
        api: ApiContext::new(humanizer),
        max_body_bytes: settings.max_body_bytes,
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, max_body_bytes = settings.max_body_bytes, "humanize server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.max_body_bytes;
    Router::new()
        .route(HEALTH_ROUTE, get(health))
        .route(HUMANIZE_ROUTE, post(http_humanize))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

async fn http_humanize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HumanizeRequest>, JsonRejection>,
) -> Result<Json<HumanizeResponse>, HumanizeRejection> {
    let Json(req) = payload.map_err(|rejection| {
        let code = ErrorCode::from_rejection_status(rejection.status().as_u16());
        reject(ApiError::new(code, rejection.body_text()))
    })?;

    let response = api::humanize(&state.api, &req.text)
        .await
        .map_err(reject)?;
    Ok(Json(response))
}

fn reject(err: ApiError) -> HumanizeRejection {
    let status =
        StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    warn!(%status, message = %err.message, "humanize request failed");
    (status, Json(err.into()))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
