//! Room registry — live sessions and their room memberships.
//!
//! DESIGN
//! ======
//! An explicit registry object constructed at process start and injected
//! through `AppState`, rather than ambient global state. It maps each
//! connected session to its outbound channel and joined-room set, and is the
//! fan-out mechanism for broadcasts. Access is serialized by the
//! `tokio::sync::RwLock` wrapping it in `AppState`; the registry itself is
//! plain synchronous code and testable with fake channels.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::{HashMap, HashSet};

use shapes::wire::{RoomId, ServerMessage};
use tokio::sync::mpsc;
use tracing::warn;
use uuid::Uuid;

/// One live connection: the verified user, its outbound channel, and the
/// rooms it has joined.
struct Session {
    user_id: Uuid,
    tx: mpsc::Sender<ServerMessage>,
    rooms: HashSet<RoomId>,
}

/// In-memory map of connected sessions and their room memberships.
#[derive(Default)]
pub struct RoomRegistry {
    sessions: HashMap<Uuid, Session>,
}

impl RoomRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session with no memberships.
    pub fn connect(&mut self, client_id: Uuid, user_id: Uuid, tx: mpsc::Sender<ServerMessage>) {
        self.sessions.insert(client_id, Session { user_id, tx, rooms: HashSet::new() });
    }

    /// Remove a session and every membership it holds, atomically with
    /// disconnect handling.
    pub fn disconnect(&mut self, client_id: Uuid) {
        self.sessions.remove(&client_id);
    }

    /// Add a room membership. Idempotent; a session may belong to several
    /// rooms concurrently.
    pub fn join(&mut self, client_id: Uuid, room_id: RoomId) {
        if let Some(session) = self.sessions.get_mut(&client_id) {
            session.rooms.insert(room_id);
        }
    }

    /// Remove one room membership.
    pub fn leave(&mut self, client_id: Uuid, room_id: RoomId) {
        if let Some(session) = self.sessions.get_mut(&client_id) {
            session.rooms.remove(&room_id);
        }
    }

    /// Whether a session has joined a room.
    #[must_use]
    pub fn is_member(&self, client_id: Uuid, room_id: RoomId) -> bool {
        self.sessions
            .get(&client_id)
            .is_some_and(|session| session.rooms.contains(&room_id))
    }

    /// The verified user behind a session, if connected.
    #[must_use]
    pub fn user_of(&self, client_id: Uuid) -> Option<Uuid> {
        self.sessions.get(&client_id).map(|session| session.user_id)
    }

    /// Deliver a message to every session joined to `room_id`, optionally
    /// excluding one. Fire-and-forget per recipient: a full or closed
    /// channel is logged and skipped, never blocking the other members.
    pub fn broadcast(&self, room_id: RoomId, message: &ServerMessage, exclude: Option<Uuid>) {
        for (client_id, session) in &self.sessions {
            if !session.rooms.contains(&room_id) || exclude == Some(*client_id) {
                continue;
            }
            if session.tx.try_send(message.clone()).is_err() {
                warn!(%client_id, %room_id, "dropping broadcast; client queue full or closed");
            }
        }
    }

    /// Number of connected sessions.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of sessions joined to a room.
    #[must_use]
    pub fn member_count(&self, room_id: RoomId) -> usize {
        self.sessions
            .values()
            .filter(|session| session.rooms.contains(&room_id))
            .count()
    }
}
