//! Webhook ingress
//!
//! Telegram POSTs each update to the configured URL. The handler parses the
//! body into a teloxide `Update`, converts it into the typed model and runs
//! the router before answering, so a failed conversion shows up as a 500 in
//! Telegram's webhook info.
//!
//! Routes:
//! - `POST <webhook path>` - update delivery
//! - `GET /` - liveness banner
//! - `GET /health` - health check

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use teloxide::prelude::*;
use teloxide::types::Update;
use tokio::net::TcpListener;
use url::Url;

use super::router::{route, ConverterDeps};
use super::types::InboundUpdate;

/// Path used when the public URL has no path of its own
const DEFAULT_WEBHOOK_PATH: &str = "/webhook";

/// Shared state for the webhook server.
#[derive(Clone)]
pub struct AppState {
    pub deps: ConverterDeps,
    pub bot_username: Arc<str>,
}

impl AppState {
    /// Failure notices are turned off here: a failed update is answered with
    /// a 500, Telegram redelivers it, and every redelivery would send the
    /// chat another notice.
    pub fn new(deps: ConverterDeps, bot_username: impl Into<Arc<str>>) -> Self {
        Self {
            deps: deps.with_notify_on_failure(false),
            bot_username: bot_username.into(),
        }
    }
}

/// Builds the axum router serving updates on `path`.
pub fn create_webhook_router(state: AppState, path: &str) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route(path, post(update_handler))
        .with_state(state)
}

/// Local route for a public webhook URL: its path, or `/webhook` for a bare host.
pub fn webhook_path(url: &Url) -> String {
    match url.path() {
        "" | "/" => DEFAULT_WEBHOOK_PATH.to_string(),
        path => path.to_string(),
    }
}

/// Registers the webhook and serves updates until Ctrl-C.
///
/// Any previously registered webhook is removed first. On shutdown the
/// webhook is deleted again so a later polling run is not rejected.
pub async fn run_webhook(bot: Bot, state: AppState, url: Url, addr: &str) -> anyhow::Result<()> {
    if let Err(e) = bot.delete_webhook().await {
        log::warn!("Failed to delete old webhook: {}", e);
    }
    bot.set_webhook(url.clone()).await?;
    log::info!("Webhook set to {}", url);

    let path = webhook_path(&url);
    let app = create_webhook_router(state, &path);

    let listener = TcpListener::bind(addr).await?;
    log::info!("Starting webhook server on http://{}", addr);
    log::info!("  POST {}  - Telegram updates", path);
    log::info!("  GET  /health   - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Webhook server stopped, deleting webhook");
    if let Err(e) = bot.delete_webhook().await {
        log::warn!("Failed to delete webhook on shutdown: {}", e);
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
    }
}

/// POST <webhook path> - runs the router for one update.
async fn update_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            log::warn!("Rejected webhook body: {}", e);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": format!("Invalid update: {}", e) })),
            )
                .into_response();
        }
    };

    let inbound = InboundUpdate::from_telegram(&update, &state.bot_username);
    match route(&state.deps, &inbound).await {
        Ok(outcome) => {
            log::debug!("Update {} handled: {:?}", inbound.update_id, outcome);
            Json(json!({ "message": "ok" })).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": format!("Error processing update: {}", e) })),
        )
            .into_response(),
    }
}

/// GET / - liveness banner.
async fn root_handler() -> impl IntoResponse {
    Json(json!({ "message": "hello world" }))
}

/// GET /health - simple health check.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
