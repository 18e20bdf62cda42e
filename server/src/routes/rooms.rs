//! Room snapshot endpoint.
//!
//! A client joining mid-session fetches the room's surviving shapes here,
//! then applies live websocket traffic on top. The snapshot is creation
//! ordered and excludes erased shapes, so replaying it reproduces the
//! canvas as every current member sees it.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use shapes::model::ShapeRecord;
use shapes::wire::RoomId;
use tracing::error;

use crate::services::store::StoreError;
use crate::state::AppState;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// GET `/api/rooms/{id}/shapes` — all non-erased shapes, oldest first.
pub async fn room_snapshot(
    State(state): State<AppState>,
    Path(room_id): Path<RoomId>,
    headers: HeaderMap,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return (StatusCode::UNAUTHORIZED, "bearer token required").into_response();
    };

    let Ok(user_id) = state.verifier.verify(token).await else {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    };

    match state.store.room_access(room_id, user_id).await {
        Ok(true) => {}
        Ok(false) => return (StatusCode::FORBIDDEN, "no access to room").into_response(),
        Err(StoreError::RoomNotFound(_)) => {
            return (StatusCode::NOT_FOUND, "room not found").into_response();
        }
        Err(e) => {
            error!(error = %e, %room_id, "room access check failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    match state.store.load_snapshot(room_id).await {
        Ok(shapes) => Json::<Vec<ShapeRecord>>(shapes).into_response(),
        Err(e) => {
            error!(error = %e, %room_id, "snapshot load failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
