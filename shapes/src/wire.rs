//! Wire protocol: the JSON messages exchanged over one WebSocket per client.
//!
//! Every message carries a `type` discriminator and a `roomId`. Outbound
//! draws carry raw geometry (`shapeType` + `shapeData`); the server assigns
//! the identity and echoes the committed record back to every room member,
//! author included.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::model::{Shape, ShapeId, ShapeKind, ShapeRecord};

/// Identifier of a collaboration room.
pub type RoomId = i64;

/// Error returned by the decode helpers.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The text was not valid JSON for any known message shape.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Messages sent from a client to the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Join a room; idempotent, and a session may join several rooms.
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_id: RoomId },
    /// Leave a room previously joined.
    #[serde(rename_all = "camelCase")]
    LeaveRoom { room_id: RoomId },
    /// A finalized local shape. Carries no identity; the server assigns one.
    #[serde(rename_all = "camelCase")]
    Draw { room_id: RoomId, shape_type: ShapeKind, shape_data: Shape },
    /// Identities collected by local hit-testing at the erase point.
    #[serde(rename_all = "camelCase")]
    Erase { room_id: RoomId, erased_shape_ids: Vec<ShapeId> },
}

/// Messages broadcast from the relay to room members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A shape committed to the room, with its server-assigned identity.
    #[serde(rename_all = "camelCase")]
    Draw { room_id: RoomId, shape: ShapeRecord },
    /// Shapes soft-deleted from the room.
    #[serde(rename_all = "camelCase")]
    Erase { room_id: RoomId, erased_shape_ids: Vec<ShapeId> },
}

/// Encode a client message as JSON text.
///
/// # Panics
///
/// Never panics in practice: these types serialize infallibly.
#[must_use]
pub fn encode_client(message: &ClientMessage) -> String {
    serde_json::to_string(message).unwrap_or_default()
}

/// Encode a server message as JSON text.
///
/// # Panics
///
/// Never panics in practice: these types serialize infallibly.
#[must_use]
pub fn encode_server(message: &ServerMessage) -> String {
    serde_json::to_string(message).unwrap_or_default()
}

/// Decode JSON text into a client message.
///
/// # Errors
///
/// Returns [`WireError::Malformed`] for invalid JSON, an unknown `type`
/// discriminator, or an unknown shape kind.
pub fn decode_client(text: &str) -> Result<ClientMessage, WireError> {
    Ok(serde_json::from_str(text)?)
}

/// Decode JSON text into a server message.
///
/// # Errors
///
/// Returns [`WireError::Malformed`] for invalid JSON or an unknown `type`.
pub fn decode_server(text: &str) -> Result<ServerMessage, WireError> {
    Ok(serde_json::from_str(text)?)
}
