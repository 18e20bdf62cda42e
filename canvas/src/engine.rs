//! Canvas engine: pointer events in, shape mutations and actions out.
//!
//! `EngineCore` holds all state that does not depend on the browser, so the
//! full input/draw/erase lifecycle is testable on the host. `Engine` wraps
//! it together with the canvas element and is the painting entry point.
//!
//! Input handlers return [`Action`]s. The host transmits `ShapeFinalized`
//! and `EraseRequested` over the room socket (via
//! [`crate::session::RoomSession`]) and repaints on `RenderNeeded`.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use shapes::Point;
use shapes::model::{Shape, ShapeId, ShapeRecord};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{DEFAULT_MIN_DRAG_EXTENT, ERASE_RADIUS, MIN_STROKE_POINT_DISTANCE};
use crate::doc::ShapeSet;
use crate::input::{InputState, Tool};
use crate::render;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A local shape was finalized; send it to the relay.
    ShapeFinalized(Shape),
    /// Committed shapes were erased locally; send their identities.
    EraseRequested(Vec<ShapeId>),
    /// The scene changed; repaint.
    RenderNeeded,
}

/// Core engine state. Everything except the canvas element itself.
pub struct EngineCore {
    /// Committed shapes mirrored from the relay plus pending local shapes.
    pub doc: ShapeSet,
    /// Currently active tool.
    pub tool: Tool,
    /// Gesture in progress, if any.
    pub input: InputState,
    /// The in-progress shape drawn at reduced opacity, if any.
    pub preview: Option<Shape>,
    /// Drags smaller than this extent are discarded on pointer-up.
    pub min_drag_extent: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            doc: ShapeSet::new(),
            tool: Tool::default(),
            input: InputState::Idle,
            preview: None,
            min_drag_extent: DEFAULT_MIN_DRAG_EXTENT,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the local set from the room snapshot.
    pub fn load_snapshot(&mut self, records: Vec<ShapeRecord>) {
        self.doc.load_snapshot(records);
    }

    /// Apply a relay broadcast: shape committed.
    pub fn apply_draw(&mut self, record: ShapeRecord) {
        self.doc.commit(record);
    }

    /// Apply a relay broadcast: shapes erased.
    pub fn apply_erase(&mut self, ids: &[ShapeId]) {
        self.doc.remove_erased(ids);
    }

    // --- Tool ---

    /// Set the active tool. Abandons any gesture in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.input = InputState::Idle;
        self.preview = None;
    }

    // --- Pointer events ---

    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Action> {
        match self.tool {
            Tool::Rect | Tool::Circle | Tool::Pencil => {
                self.input = InputState::Dragging { anchor: point };
                Vec::new()
            }
            Tool::Freehand => {
                self.input = InputState::Stroking { points: vec![point] };
                Vec::new()
            }
            Tool::Eraser => {
                self.input = InputState::Erasing;
                self.erase_at(point)
            }
        }
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Dragging { anchor } => {
                self.preview = Some(drag_shape(self.tool, *anchor, point));
                vec![Action::RenderNeeded]
            }
            InputState::Stroking { points } => {
                let far_enough = points
                    .last()
                    .is_none_or(|last| last.distance_to(point) > MIN_STROKE_POINT_DISTANCE);
                if far_enough {
                    points.push(point);
                }
                if points.len() >= 2 {
                    self.preview = Some(Shape::Freehand { points: points.clone() });
                }
                vec![Action::RenderNeeded]
            }
            InputState::Erasing => self.erase_at(point),
        }
    }

    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        self.preview = None;

        match state {
            InputState::Idle | InputState::Erasing => Vec::new(),
            InputState::Dragging { anchor } => {
                let width = point.x - anchor.x;
                let height = point.y - anchor.y;
                if width.abs().max(height.abs()) < self.min_drag_extent {
                    return vec![Action::RenderNeeded];
                }
                self.finalize(drag_shape(self.tool, anchor, point))
            }
            InputState::Stroking { mut points } => {
                if points.last() != Some(&point) {
                    points.push(point);
                }
                // A stroke needs at least two points; otherwise the attempt
                // is discarded silently.
                if points.len() < 2 {
                    return vec![Action::RenderNeeded];
                }
                self.finalize(Shape::Freehand { points })
            }
        }
    }

    // --- Internals ---

    /// Optimistically append the finalized shape and hand it to the host for
    /// transmission. It carries no identity until the relay assigns one.
    fn finalize(&mut self, shape: Shape) -> Vec<Action> {
        self.doc.push_pending(shape.clone());
        vec![Action::ShapeFinalized(shape), Action::RenderNeeded]
    }

    fn erase_at(&mut self, point: Point) -> Vec<Action> {
        let hits = self.doc.take_hits(point, ERASE_RADIUS);
        if hits.is_empty() {
            return Vec::new();
        }
        vec![Action::EraseRequested(hits), Action::RenderNeeded]
    }
}

/// Build the in-progress or final shape for a drag tool from the anchor
/// corner and the current pointer position.
fn drag_shape(tool: Tool, anchor: Point, current: Point) -> Shape {
    let width = current.x - anchor.x;
    let height = current.y - anchor.y;

    match tool {
        Tool::Rect => Shape::Rect { x: anchor.x, y: anchor.y, width, height },
        Tool::Circle => Shape::Circle {
            center_x: anchor.x + width / 2.0,
            center_y: anchor.y + height / 2.0,
            radius: width.abs().max(height.abs()) / 2.0,
        },
        Tool::Pencil => {
            Shape::Pencil { start_x: anchor.x, start_y: anchor.y, end_x: current.x, end_y: current.y }
        }
        // Freehand and eraser never drag from an anchor.
        Tool::Freehand | Tool::Eraser => Shape::Freehand { points: vec![anchor, current] },
    }
}

/// The full canvas engine: `EngineCore` plus the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Repaint the full scene from the current shape set and preview.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a canvas call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        render::draw(&ctx, &self.core, width, height)
    }
}
