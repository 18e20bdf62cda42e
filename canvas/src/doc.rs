//! Local shape set: the committed shapes mirrored from the relay plus any
//! optimistically drawn shapes still waiting for their server identity.
//!
//! A shape is *pending* (no identity, visible only locally) or *committed*
//! (server identity, visible to all room members, eligible for erase). The
//! set preserves creation order, which is also draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use shapes::model::{Shape, ShapeId, ShapeRecord};
use shapes::{Point, hit_test};

/// One shape in the local set.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalShape {
    /// Server identity; `None` while the shape is pending.
    pub id: Option<ShapeId>,
    pub shape: Shape,
}

impl LocalShape {
    /// Whether the relay has assigned this shape an identity.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.id.is_some()
    }
}

/// Ordered set of local shapes.
#[derive(Debug, Default)]
pub struct ShapeSet {
    shapes: Vec<LocalShape>,
}

impl ShapeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized local shape that has not been confirmed yet.
    pub fn push_pending(&mut self, shape: Shape) {
        self.shapes.push(LocalShape { id: None, shape });
    }

    /// Apply a committed shape from a relay broadcast.
    ///
    /// When the broadcast is the echo of this client's own draw, a pending
    /// shape with identical geometry is already in the set; it is promoted
    /// in place so the author never holds a duplicate. Other clients' shapes
    /// are appended.
    pub fn commit(&mut self, record: ShapeRecord) {
        if let Some(pending) = self
            .shapes
            .iter_mut()
            .find(|local| local.id.is_none() && local.shape == record.shape)
        {
            pending.id = Some(record.id);
            return;
        }
        self.shapes.push(LocalShape { id: Some(record.id), shape: record.shape });
    }

    /// Remove every committed shape whose identity is listed. Returns how
    /// many shapes were removed; repeated erases of the same identities are
    /// no-ops.
    pub fn remove_erased(&mut self, ids: &[ShapeId]) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|local| !local.id.is_some_and(|id| ids.contains(&id)));
        before - self.shapes.len()
    }

    /// Replace the whole set with a snapshot of committed shapes.
    pub fn load_snapshot(&mut self, records: Vec<ShapeRecord>) {
        self.shapes = records
            .into_iter()
            .map(|record| LocalShape { id: Some(record.id), shape: record.shape })
            .collect();
    }

    /// Hit-test every committed shape at `point`, remove the matches, and
    /// return their identities. Pending shapes are skipped: with no identity
    /// there is nothing to erase on the relay yet.
    pub fn take_hits(&mut self, point: Point, tolerance: f64) -> Vec<ShapeId> {
        let mut hits = Vec::new();
        self.shapes.retain(|local| {
            let Some(id) = local.id else { return true };
            if hit_test(&local.shape, point, tolerance) {
                hits.push(id);
                false
            } else {
                true
            }
        });
        hits
    }

    /// Iterate shapes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &LocalShape> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
