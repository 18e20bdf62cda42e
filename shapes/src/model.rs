//! Shape model: drawable primitives and their wire representation.
//!
//! Field names match the JSON the browser clients exchange (`centerX`,
//! `startX`, ...), so serializing a [`Shape`] produces exactly the
//! `shapeData` object of the wire protocol. The union is closed: an unknown
//! `type` tag fails deserialization instead of passing through untyped.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Server-assigned identity of a committed shape.
pub type ShapeId = i64;

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The kind tag of a shape, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Circle (an ellipse constrained to a single radius).
    Circle,
    /// Straight line segment.
    Pencil,
    /// Free-form stroke.
    Freehand,
}

impl ShapeKind {
    /// The wire tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Pencil => "pencil",
            Self::Freehand => "freehand",
        }
    }
}

/// A drawable primitive. Serializes with an inline `type` tag so the JSON
/// form is the familiar `{type: "rect", x, y, width, height}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Rectangle anchored at its drag origin. Width and height are signed;
    /// a drag up or left produces negative extents.
    Rect { x: f64, y: f64, width: f64, height: f64 },
    /// Circle by center and radius. Rendering clamps the radius to its
    /// absolute value.
    #[serde(rename_all = "camelCase")]
    Circle { center_x: f64, center_y: f64, radius: f64 },
    /// Line segment between two endpoints.
    #[serde(rename_all = "camelCase")]
    Pencil { start_x: f64, start_y: f64, end_x: f64, end_y: f64 },
    /// Free-form stroke. A committed stroke carries at least two points.
    Freehand { points: Vec<Point> },
}

impl Shape {
    /// The kind tag of this shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rect { .. } => ShapeKind::Rect,
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Pencil { .. } => ShapeKind::Pencil,
            Self::Freehand { .. } => ShapeKind::Freehand,
        }
    }
}

/// A committed shape: server identity plus geometry, flattened so the JSON
/// form is `{id, type, ...geometry}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: ShapeId,
    #[serde(flatten)]
    pub shape: Shape,
}
