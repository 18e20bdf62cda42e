//! WebSocket handler — the realtime drawing relay.
//!
//! DESIGN
//! ======
//! One socket per client. On upgrade the token from the query string is
//! verified, a client id is generated, and the connection enters a
//! `select!` loop:
//! - Incoming client text → decode + dispatch by message type
//! - Broadcasts from room peers → encode + forward to the socket
//!
//! Dispatch is factored into `handle_text`, which takes `AppState` plus the
//! session identities and never touches the socket directly, so the full
//! protocol is testable without a network.
//!
//! ERROR POLICY
//! ============
//! Malformed or invalid messages are logged and dropped; the connection
//! stays up. A persistence failure suppresses the broadcast for that one
//! message (fail-closed) and nothing else.

#[cfg(test)]
#[path = "ws_test.rs"]
mod ws_test;

use std::collections::HashMap;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shapes::model::{Shape, ShapeRecord};
use shapes::wire::{ClientMessage, ServerMessage, decode_client, encode_server};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::state::AppState;

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    ws: WebSocketUpgrade,
) -> Response {
    let Some(token) = params.get("token") else {
        return (StatusCode::UNAUTHORIZED, "token required").into_response();
    };

    let Ok(user_id) = state.verifier.verify(token).await else {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    };

    ws.on_upgrade(move |socket| run_ws(socket, state, user_id))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState, user_id: Uuid) {
    let client_id = Uuid::new_v4();

    // Per-connection channel carrying broadcasts from room peers.
    let (client_tx, mut client_rx) =
        mpsc::channel::<ServerMessage>(state.config.client_queue_capacity);

    state.registry.write().await.connect(client_id, user_id, client_tx);
    info!(%client_id, %user_id, "ws: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        handle_text(&state, client_id, user_id, &text).await;
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(message) = client_rx.recv() => {
                let text = encode_server(&message);
                if socket.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
        }
    }

    state.registry.write().await.disconnect(client_id);
    info!(%client_id, "ws: client disconnected");
}

// =============================================================================
// DISPATCH
// =============================================================================

pub(crate) async fn handle_text(state: &AppState, client_id: Uuid, user_id: Uuid, text: &str) {
    let message = match decode_client(text) {
        Ok(message) => message,
        Err(e) => {
            warn!(%client_id, error = %e, "ws: dropping malformed message");
            return;
        }
    };

    match message {
        ClientMessage::JoinRoom { room_id } => {
            if state.config.join_requires_access {
                match state.store.room_access(room_id, user_id).await {
                    Ok(true) => {}
                    Ok(false) => {
                        warn!(%client_id, %room_id, "ws: join rejected, no access");
                        return;
                    }
                    Err(e) => {
                        warn!(%client_id, %room_id, error = %e, "ws: join rejected");
                        return;
                    }
                }
            }
            state.registry.write().await.join(client_id, room_id);
        }
        ClientMessage::LeaveRoom { room_id } => {
            state.registry.write().await.leave(client_id, room_id);
        }
        ClientMessage::Draw { room_id, shape_type, shape_data } => {
            if shape_data.kind() != shape_type {
                warn!(%client_id, %room_id, "ws: dropping draw, kind mismatch");
                return;
            }
            if let Shape::Freehand { points } = &shape_data {
                if points.len() < 2 {
                    warn!(%client_id, %room_id, "ws: dropping degenerate freehand");
                    return;
                }
            }

            let registry = state.registry.read().await;
            if !registry.is_member(client_id, room_id) {
                warn!(%client_id, %room_id, "ws: dropping draw from non-member");
                return;
            }
            drop(registry);

            let id = match state.store.record_shape(room_id, user_id, &shape_data).await {
                Ok(id) => id,
                Err(e) => {
                    warn!(%client_id, %room_id, error = %e, "ws: draw not persisted, not broadcast");
                    return;
                }
            };

            let outbound = ServerMessage::Draw {
                room_id,
                shape: ShapeRecord { id, shape: shape_data },
            };
            state.registry.read().await.broadcast(room_id, &outbound, None);
        }
        ClientMessage::Erase { room_id, erased_shape_ids } => {
            if erased_shape_ids.is_empty() {
                return;
            }
            if !state.registry.read().await.is_member(client_id, room_id) {
                warn!(%client_id, %room_id, "ws: dropping erase from non-member");
                return;
            }

            if let Err(e) = state.store.soft_delete_shapes(room_id, &erased_shape_ids).await {
                warn!(%client_id, %room_id, error = %e, "ws: erase not persisted, not broadcast");
                return;
            }

            let outbound = ServerMessage::Erase { room_id, erased_shape_ids };
            state.registry.read().await.broadcast(room_id, &outbound, None);
        }
    }
}
