//! Input model: tool selection and the gesture state machine.
//!
//! A gesture runs from pointer-down to pointer-up. Drag tools size a shape
//! from an anchor corner, the freehand tool accumulates points, and the
//! eraser hit-tests at every position while the button is held.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use shapes::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Drag to define a rectangle.
    Rect,
    /// Drag to define a circle inscribed in the drag box.
    Circle,
    /// Drag to define a straight line segment.
    Pencil,
    /// Free-form stroke (default).
    #[default]
    Freehand,
    /// Erase shapes near the pointer.
    Eraser,
}

impl Tool {
    /// Whether this tool defines a shape by dragging from an anchor.
    #[must_use]
    pub fn is_drag_tool(self) -> bool {
        matches!(self, Self::Rect | Self::Circle | Self::Pencil)
    }
}

/// The gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Sizing a drag-defined shape from the anchor corner.
    Dragging { anchor: Point },
    /// Accumulating points for a free-form stroke.
    Stroking { points: Vec<Point> },
    /// Eraser button held; hit-testing re-runs at each position.
    Erasing,
}
