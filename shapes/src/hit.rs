//! Hit-testing: does a point lie within `tolerance` of a shape's boundary?
//!
//! This predicate is the basis for erasing. Rectangles use the distance to
//! the nearest point of the (normalized) box, circles compare the
//! center-distance minus the radius, and segments and strokes use the
//! minimum point-to-segment distance.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::model::{Point, Shape};

/// Returns `true` when `point` is within `tolerance` of `shape`'s boundary.
///
/// Points on or inside a rectangle's bounds hit at any tolerance >= 0, as do
/// points inside a circle. A stroke with fewer than two points can never be
/// hit; committed strokes always carry at least two.
#[must_use]
pub fn hit_test(shape: &Shape, point: Point, tolerance: f64) -> bool {
    match shape {
        Shape::Rect { x, y, width, height } => {
            rect_distance(point, *x, *y, *width, *height) <= tolerance
        }
        Shape::Circle { center_x, center_y, radius } => {
            let center_dist = point.distance_to(Point::new(*center_x, *center_y));
            center_dist - radius.abs() <= tolerance
        }
        Shape::Pencil { start_x, start_y, end_x, end_y } => {
            segment_distance(point, Point::new(*start_x, *start_y), Point::new(*end_x, *end_y))
                <= tolerance
        }
        Shape::Freehand { points } => points
            .windows(2)
            .any(|pair| segment_distance(point, pair[0], pair[1]) <= tolerance),
    }
}

/// Distance from `point` to the nearest point of a rectangle, zero when the
/// point lies inside. Bounds are normalized so negative extents (up/left
/// drags) behave like their positive mirror.
fn rect_distance(point: Point, x: f64, y: f64, width: f64, height: f64) -> f64 {
    let (left, right) = if width >= 0.0 { (x, x + width) } else { (x + width, x) };
    let (top, bottom) = if height >= 0.0 { (y, y + height) } else { (y + height, y) };

    let closest_x = point.x.clamp(left, right);
    let closest_y = point.y.clamp(top, bottom);
    point.distance_to(Point::new(closest_x, closest_y))
}

/// Distance from `point` to the segment `a`-`b`. A degenerate segment
/// collapses to the distance to `a`.
fn segment_distance(point: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return point.distance_to(a);
    }

    let t = (((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    point.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
}
