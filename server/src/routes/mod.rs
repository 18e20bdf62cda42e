//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The relay exposes a deliberately small surface: one websocket endpoint
//! carrying the realtime drawing protocol, one REST endpoint serving a
//! room's shape snapshot to late joiners, and a health probe.

pub mod rooms;
pub mod ws;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/rooms/{id}/shapes", get(rooms::room_snapshot))
        .route("/api/ws", get(ws::handle_ws))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
