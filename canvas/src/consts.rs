//! Shared numeric and styling constants for the canvas crate.

// ── Input thresholds ────────────────────────────────────────────

/// Hit-test tolerance around the eraser point, in canvas units.
pub const ERASE_RADIUS: f64 = 20.0;

/// Minimum distance from the last recorded stroke point before a new point
/// is appended. Bounds point density and network payload size.
pub const MIN_STROKE_POINT_DISTANCE: f64 = 2.0;

/// Minimum drag extent below which a drag-created shape is discarded.
/// Zero keeps every drag, degenerate shapes included.
pub const DEFAULT_MIN_DRAG_EXTENT: f64 = 0.0;

// ── Styling ─────────────────────────────────────────────────────

/// Canvas background fill.
pub const BACKGROUND_FILL: &str = "rgba(0, 0, 0)";

/// Stroke style for committed shapes.
pub const COMMITTED_STROKE: &str = "rgba(255, 255, 255, 0.8)";

/// Stroke style for the in-progress preview shape (reduced opacity).
pub const PREVIEW_STROKE: &str = "rgba(255, 255, 255, 0.6)";

/// Line width for all shape strokes, in canvas units.
pub const STROKE_WIDTH: f64 = 2.0;
