//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the shape store and identity verifier behind trait objects so
//! tests can swap in in-memory fakes, plus the live room registry and the
//! env-derived relay configuration.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::registry::RoomRegistry;
use crate::services::identity::IdentityVerifier;
use crate::services::store::ShapeStore;

// =============================================================================
// RELAY CONFIG
// =============================================================================

/// Tunables read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// When set, `join_room` is rejected unless the user has access to the
    /// room. Off by default: joining only selects a broadcast audience.
    pub join_requires_access: bool,
    /// Capacity of each client's outgoing message queue. A client that
    /// cannot drain its queue starts losing broadcasts rather than
    /// stalling the room.
    pub client_queue_capacity: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { join_requires_access: false, client_queue_capacity: 64 }
    }
}

impl RelayConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            join_requires_access: env_parse("WS_JOIN_REQUIRES_ACCESS", defaults.join_requires_access),
            client_queue_capacity: env_parse("CLIENT_QUEUE_CAPACITY", defaults.client_queue_capacity),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ShapeStore>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub registry: Arc<RwLock<RoomRegistry>>,
    pub config: RelayConfig,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: Arc<dyn ShapeStore>,
        verifier: Arc<dyn IdentityVerifier>,
        config: RelayConfig,
    ) -> Self {
        Self {
            store,
            verifier,
            registry: Arc::new(RwLock::new(RoomRegistry::new())),
            config,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
