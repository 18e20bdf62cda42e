//! Connection-session protocol state for one room view.
//!
//! A `RoomSession` pairs with one WebSocket connection owned by the host
//! layer: the host sends the text this session builds and feeds every
//! inbound message through [`RoomSession::handle_text`]. Messages for other
//! rooms and malformed text are ignored. Connection loss is terminal — the
//! host builds a fresh session and re-fetches the snapshot rather than
//! patching a broken socket back in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use shapes::model::{Shape, ShapeId};
use shapes::wire::{self, ClientMessage, RoomId, ServerMessage};

use crate::engine::EngineCore;

/// Protocol state for one joined room.
#[derive(Debug)]
pub struct RoomSession {
    room_id: RoomId,
    joined: bool,
}

impl RoomSession {
    #[must_use]
    pub fn new(room_id: RoomId) -> Self {
        Self { room_id, joined: false }
    }

    #[must_use]
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Whether the join request has been sent on this session.
    #[must_use]
    pub fn is_joined(&self) -> bool {
        self.joined
    }

    // --- Outbound ---

    /// The join request to send once the socket opens.
    pub fn join_message(&mut self) -> String {
        self.joined = true;
        wire::encode_client(&ClientMessage::JoinRoom { room_id: self.room_id })
    }

    /// The leave request for this room.
    pub fn leave_message(&mut self) -> String {
        self.joined = false;
        wire::encode_client(&ClientMessage::LeaveRoom { room_id: self.room_id })
    }

    /// A draw request for a finalized shape. Carries kind and geometry only;
    /// the relay assigns the identity.
    #[must_use]
    pub fn draw_message(&self, shape: Shape) -> String {
        wire::encode_client(&ClientMessage::Draw {
            room_id: self.room_id,
            shape_type: shape.kind(),
            shape_data: shape,
        })
    }

    /// An erase request for locally hit identities, or `None` when the list
    /// is empty and there is nothing to send.
    #[must_use]
    pub fn erase_message(&self, ids: Vec<ShapeId>) -> Option<String> {
        if ids.is_empty() {
            return None;
        }
        Some(wire::encode_client(&ClientMessage::Erase {
            room_id: self.room_id,
            erased_shape_ids: ids,
        }))
    }

    // --- Inbound ---

    /// Route one inbound socket message into the engine. Returns `true` when
    /// the scene changed and a repaint is needed. Messages for other rooms
    /// and malformed text are dropped.
    pub fn handle_text(&self, core: &mut EngineCore, text: &str) -> bool {
        let Ok(message) = wire::decode_server(text) else {
            return false;
        };

        match message {
            ServerMessage::Draw { room_id, shape } if room_id == self.room_id => {
                core.apply_draw(shape);
                true
            }
            ServerMessage::Erase { room_id, erased_shape_ids } if room_id == self.room_id => {
                core.apply_erase(&erased_shape_ids);
                true
            }
            _ => false,
        }
    }
}
