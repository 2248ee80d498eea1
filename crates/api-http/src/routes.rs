// Route Handlers

use crate::types::GetBlockRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ethgate_core::domain::GatewayResult;
use ethgate_core::Gateway;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the REST router in front of a gateway.
///
/// CORS is wide open (any origin/method/header), matching what browser
/// clients of this API have always been served.
pub fn router(gateway: Arc<Gateway>) -> Router {
    Router::new()
        .route("/get_block", post(get_block))
        .route("/latest_block", get(latest_block))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

/// POST /get_block - one block with all of its transactions (and their data)
async fn get_block(
    State(gateway): State<Arc<Gateway>>,
    Json(request): Json<GetBlockRequest>,
) -> (StatusCode, Json<Value>) {
    render(gateway.get_block(request.block_num.as_ref()).await)
}

/// GET /latest_block - highest block number known to the upstream node.
/// Answered from the node's syncing status; a fully synced node reports a
/// shape mismatch (500). Documented limitation of this endpoint.
async fn latest_block(State(gateway): State<Arc<Gateway>>) -> (StatusCode, Json<Value>) {
    render(gateway.latest_block().await)
}

/// GET /health - liveness probe, no upstream call
async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

fn render(result: GatewayResult) -> (StatusCode, Json<Value>) {
    let status =
        StatusCode::from_u16(result.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(result.body))
}
