//! Rendering: full repaint of the scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. Each repaint clears the canvas,
//! fills the background, draws every shape in creation order, then the
//! preview shape at reduced opacity. There is no dirty-rectangle tracking.
//!
//! All fallible Canvas2D calls propagate errors via `Result<(), JsValue>`;
//! the caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use shapes::Point;
use shapes::model::Shape;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BACKGROUND_FILL, COMMITTED_STROKE, PREVIEW_STROKE, STROKE_WIDTH};
use crate::engine::EngineCore;

/// Draw the full scene: background, committed shapes, then the preview.
///
/// # Errors
///
/// Returns `Err` if any Canvas2D call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    core: &EngineCore,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(BACKGROUND_FILL);
    ctx.fill_rect(0.0, 0.0, width, height);

    for local in core.doc.iter() {
        draw_shape(ctx, &local.shape, COMMITTED_STROKE)?;
    }

    if let Some(preview) = &core.preview {
        draw_shape(ctx, preview, PREVIEW_STROKE)?;
    }

    Ok(())
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape, style: &str) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(style);
    ctx.set_line_width(STROKE_WIDTH);

    match shape {
        Shape::Rect { x, y, width, height } => {
            ctx.stroke_rect(*x, *y, *width, *height);
        }
        Shape::Circle { center_x, center_y, radius } => {
            ctx.begin_path();
            ctx.arc(*center_x, *center_y, radius.abs(), 0.0, TAU)?;
            ctx.stroke();
        }
        Shape::Pencil { start_x, start_y, end_x, end_y } => {
            ctx.begin_path();
            ctx.move_to(*start_x, *start_y);
            ctx.line_to(*end_x, *end_y);
            ctx.stroke();
        }
        Shape::Freehand { points } => draw_stroke(ctx, points),
    }
    Ok(())
}

/// Draw a stroke smoothed with quadratic curves through consecutive
/// midpoints, avoiding the faceting of raw straight segments.
fn draw_stroke(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    if points.len() < 2 {
        return;
    }

    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    for (control, end) in smooth_segments(points) {
        ctx.quadratic_curve_to(control.x, control.y, end.x, end.y);
    }
    if let Some(last) = points.last() {
        ctx.line_to(last.x, last.y);
    }
    ctx.stroke();
}

/// Quadratic segments for a smoothed stroke: each interior point becomes the
/// control point of a curve ending at the midpoint to its successor. The
/// final raw point is reached with a straight line by the caller.
#[must_use]
pub fn smooth_segments(points: &[Point]) -> Vec<(Point, Point)> {
    if points.len() < 3 {
        return Vec::new();
    }

    points
        .windows(2)
        .skip(1)
        .map(|pair| {
            let control = pair[0];
            let end = Point::new((pair[0].x + pair[1].x) / 2.0, (pair[0].y + pair[1].y) / 2.0);
            (control, end)
        })
        .collect()
}
