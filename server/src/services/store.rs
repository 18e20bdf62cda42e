//! Persistence gateway — durable shape records behind an injectable trait.
//!
//! DESIGN
//! ======
//! The relay talks to storage only through `ShapeStore`, so websocket and
//! snapshot handling can be tested against an in-memory fake. The real
//! implementation is `PgShapeStore` over the shared SQLx pool. Creates are
//! independent durable writes; a burst of erases for one pointer stroke is
//! one batched update keyed by the identity list.
//!
//! ERROR HANDLING
//! ==============
//! A failed write surfaces as `StoreError` and the caller does not
//! broadcast the triggering message (fail-closed for that one message);
//! the session itself survives.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use async_trait::async_trait;
use shapes::model::{Shape, ShapeId, ShapeRecord};
use shapes::wire::RoomId;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Durable storage consumed by the relay and the snapshot route.
#[async_trait]
pub trait ShapeStore: Send + Sync {
    /// Durably insert a new shape and return its assigned identity.
    async fn record_shape(
        &self,
        room_id: RoomId,
        user_id: Uuid,
        shape: &Shape,
    ) -> Result<ShapeId, StoreError>;

    /// Mark the listed shapes as erased, only where they belong to
    /// `room_id` and are not already deleted. Returns how many rows
    /// changed; repeating the same list is a no-op after the first call.
    async fn soft_delete_shapes(
        &self,
        room_id: RoomId,
        ids: &[ShapeId],
    ) -> Result<u64, StoreError>;

    /// All non-erased shapes of a room, in creation order.
    async fn load_snapshot(&self, room_id: RoomId) -> Result<Vec<ShapeRecord>, StoreError>;

    /// Whether `user_id` may read the room's history: the room's owner, or
    /// anyone for an unowned room.
    ///
    /// Returns `RoomNotFound` for rooms that do not exist.
    async fn room_access(&self, room_id: RoomId, user_id: Uuid) -> Result<bool, StoreError>;
}

/// `ShapeStore` over PostgreSQL.
pub struct PgShapeStore {
    pool: PgPool,
}

impl PgShapeStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShapeStore for PgShapeStore {
    async fn record_shape(
        &self,
        room_id: RoomId,
        user_id: Uuid,
        shape: &Shape,
    ) -> Result<ShapeId, StoreError> {
        let id: ShapeId = sqlx::query_scalar(
            "INSERT INTO shapes (room_id, user_id, kind, data) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(room_id)
        .bind(user_id)
        .bind(shape.kind().as_str())
        .bind(Json(shape))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn soft_delete_shapes(
        &self,
        room_id: RoomId,
        ids: &[ShapeId],
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE shapes SET deleted_at = now() \
             WHERE room_id = $1 AND id = ANY($2) AND deleted_at IS NULL",
        )
        .bind(room_id)
        .bind(ids)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn load_snapshot(&self, room_id: RoomId) -> Result<Vec<ShapeRecord>, StoreError> {
        let rows = sqlx::query_as::<_, (ShapeId, Json<Shape>)>(
            "SELECT id, data FROM shapes \
             WHERE room_id = $1 AND deleted_at IS NULL ORDER BY id",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(shape))| ShapeRecord { id, shape })
            .collect())
    }

    async fn room_access(&self, room_id: RoomId, user_id: Uuid) -> Result<bool, StoreError> {
        let row = sqlx::query_as::<_, (Option<Uuid>,)>("SELECT owner_id FROM rooms WHERE id = $1")
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            None => Err(StoreError::RoomNotFound(room_id)),
            Some((owner,)) => Ok(owner.is_none() || owner == Some(user_id)),
        }
    }
}
