use super::*;

fn engine_with_tool(tool: Tool) -> EngineCore {
    let mut core = EngineCore::new();
    core.set_tool(tool);
    core
}

fn finalized_shape(actions: &[Action]) -> Option<&Shape> {
    actions.iter().find_map(|action| match action {
        Action::ShapeFinalized(shape) => Some(shape),
        _ => None,
    })
}

fn erase_request(actions: &[Action]) -> Option<&Vec<i64>> {
    actions.iter().find_map(|action| match action {
        Action::EraseRequested(ids) => Some(ids),
        _ => None,
    })
}

// =============================================================================
// DRAG TOOLS
// =============================================================================

#[test]
fn rect_drag_produces_anchor_and_extents() {
    let mut core = engine_with_tool(Tool::Rect);
    core.on_pointer_down(Point::new(10.0, 10.0));
    let actions = core.on_pointer_up(Point::new(60.0, 40.0));

    assert_eq!(
        finalized_shape(&actions),
        Some(&Shape::Rect { x: 10.0, y: 10.0, width: 50.0, height: 30.0 })
    );
    assert!(actions.contains(&Action::RenderNeeded));
    assert_eq!(core.doc.len(), 1, "optimistic apply");
}

#[test]
fn up_left_drag_produces_negative_extents() {
    let mut core = engine_with_tool(Tool::Rect);
    core.on_pointer_down(Point::new(60.0, 40.0));
    let actions = core.on_pointer_up(Point::new(10.0, 10.0));

    assert_eq!(
        finalized_shape(&actions),
        Some(&Shape::Rect { x: 60.0, y: 40.0, width: -50.0, height: -30.0 })
    );
}

#[test]
fn circle_drag_inscribes_in_drag_box() {
    let mut core = engine_with_tool(Tool::Circle);
    core.on_pointer_down(Point::new(10.0, 10.0));
    let actions = core.on_pointer_up(Point::new(50.0, 30.0));

    assert_eq!(
        finalized_shape(&actions),
        Some(&Shape::Circle { center_x: 30.0, center_y: 20.0, radius: 20.0 })
    );
}

#[test]
fn pencil_drag_produces_segment() {
    let mut core = engine_with_tool(Tool::Pencil);
    core.on_pointer_down(Point::new(0.0, 0.0));
    let actions = core.on_pointer_up(Point::new(12.0, 5.0));

    assert_eq!(
        finalized_shape(&actions),
        Some(&Shape::Pencil { start_x: 0.0, start_y: 0.0, end_x: 12.0, end_y: 5.0 })
    );
}

#[test]
fn zero_extent_drag_still_finalizes_by_default() {
    let mut core = engine_with_tool(Tool::Rect);
    core.on_pointer_down(Point::new(5.0, 5.0));
    let actions = core.on_pointer_up(Point::new(5.0, 5.0));

    assert_eq!(
        finalized_shape(&actions),
        Some(&Shape::Rect { x: 5.0, y: 5.0, width: 0.0, height: 0.0 })
    );
}

#[test]
fn min_drag_extent_discards_small_drags() {
    let mut core = engine_with_tool(Tool::Rect);
    core.min_drag_extent = 4.0;

    core.on_pointer_down(Point::new(5.0, 5.0));
    let actions = core.on_pointer_up(Point::new(7.0, 7.0));
    assert_eq!(finalized_shape(&actions), None);
    assert!(core.doc.is_empty());

    core.on_pointer_down(Point::new(5.0, 5.0));
    let actions = core.on_pointer_up(Point::new(10.0, 5.0));
    assert!(finalized_shape(&actions).is_some());
}

#[test]
fn drag_preview_follows_pointer() {
    let mut core = engine_with_tool(Tool::Rect);
    core.on_pointer_down(Point::new(10.0, 10.0));
    let actions = core.on_pointer_move(Point::new(30.0, 20.0));

    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.preview, Some(Shape::Rect { x: 10.0, y: 10.0, width: 20.0, height: 10.0 }));

    core.on_pointer_up(Point::new(30.0, 20.0));
    assert_eq!(core.preview, None);
}

// =============================================================================
// FREEHAND STROKES
// =============================================================================

#[test]
fn stroke_collects_points_beyond_distance_threshold() {
    let mut core = EngineCore::new();
    core.on_pointer_down(Point::new(0.0, 0.0));
    // Closer than the 2.0 threshold: not recorded.
    core.on_pointer_move(Point::new(1.0, 0.0));
    core.on_pointer_move(Point::new(3.0, 0.0));
    core.on_pointer_move(Point::new(6.0, 0.0));
    core.on_pointer_move(Point::new(9.0, 0.0));
    let actions = core.on_pointer_up(Point::new(12.0, 0.0));

    let Some(Shape::Freehand { points }) = finalized_shape(&actions) else {
        panic!("expected a finalized stroke");
    };
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], Point::new(0.0, 0.0));
    assert_eq!(points[4], Point::new(12.0, 0.0));
}

#[test]
fn stroke_with_single_point_is_discarded_silently() {
    let mut core = EngineCore::new();
    core.on_pointer_down(Point::new(5.0, 5.0));
    let actions = core.on_pointer_up(Point::new(5.0, 5.0));

    assert_eq!(finalized_shape(&actions), None);
    assert!(core.doc.is_empty());
    assert!(actions.contains(&Action::RenderNeeded));
}

#[test]
fn stroke_up_appends_final_point_when_distinct() {
    let mut core = EngineCore::new();
    core.on_pointer_down(Point::new(0.0, 0.0));
    let actions = core.on_pointer_up(Point::new(10.0, 10.0));

    let Some(Shape::Freehand { points }) = finalized_shape(&actions) else {
        panic!("expected a finalized stroke");
    };
    assert_eq!(points.len(), 2);
}

#[test]
fn stroke_preview_renders_during_gesture() {
    let mut core = EngineCore::new();
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.on_pointer_move(Point::new(5.0, 0.0));

    let Some(Shape::Freehand { points }) = &core.preview else {
        panic!("expected a stroke preview");
    };
    assert_eq!(points.len(), 2);
}

// =============================================================================
// ERASER
// =============================================================================

#[test]
fn erase_near_circle_collects_identity() {
    let mut core = engine_with_tool(Tool::Eraser);
    core.load_snapshot(vec![ShapeRecord {
        id: 9,
        shape: Shape::Circle { center_x: 0.0, center_y: 0.0, radius: 20.0 },
    }]);

    // 5 units from the circle with erase radius 20: a hit.
    let actions = core.on_pointer_down(Point::new(25.0, 0.0));
    assert_eq!(erase_request(&actions), Some(&vec![9]));
    assert!(core.doc.is_empty());
}

#[test]
fn second_erase_attempt_emits_nothing() {
    let mut core = engine_with_tool(Tool::Eraser);
    core.load_snapshot(vec![ShapeRecord {
        id: 9,
        shape: Shape::Circle { center_x: 0.0, center_y: 0.0, radius: 20.0 },
    }]);

    let first = core.on_pointer_down(Point::new(25.0, 0.0));
    assert!(erase_request(&first).is_some());
    core.on_pointer_up(Point::new(25.0, 0.0));

    let second = core.on_pointer_down(Point::new(25.0, 0.0));
    assert!(second.is_empty(), "already removed locally, nothing to hit-test");
}

#[test]
fn erase_continues_while_button_held() {
    let mut core = engine_with_tool(Tool::Eraser);
    core.load_snapshot(vec![
        ShapeRecord { id: 1, shape: Shape::Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 } },
        ShapeRecord {
            id: 2,
            shape: Shape::Rect { x: 200.0, y: 0.0, width: 10.0, height: 10.0 },
        },
    ]);

    let down = core.on_pointer_down(Point::new(5.0, 5.0));
    assert_eq!(erase_request(&down), Some(&vec![1]));

    let moved = core.on_pointer_move(Point::new(205.0, 5.0));
    assert_eq!(erase_request(&moved), Some(&vec![2]));
}

#[test]
fn eraser_misses_when_nothing_in_range() {
    let mut core = engine_with_tool(Tool::Eraser);
    core.load_snapshot(vec![ShapeRecord {
        id: 1,
        shape: Shape::Rect { x: 500.0, y: 500.0, width: 10.0, height: 10.0 },
    }]);

    let actions = core.on_pointer_down(Point::new(0.0, 0.0));
    assert!(actions.is_empty());
    assert_eq!(core.doc.len(), 1);
}

// =============================================================================
// REMOTE BROADCASTS AND TOOL SWITCHES
// =============================================================================

#[test]
fn apply_draw_and_erase_mutate_local_set() {
    let mut core = EngineCore::new();
    core.apply_draw(ShapeRecord {
        id: 1,
        shape: Shape::Rect { x: 0.0, y: 0.0, width: 1.0, height: 1.0 },
    });
    assert_eq!(core.doc.len(), 1);

    core.apply_erase(&[1]);
    assert!(core.doc.is_empty());
}

#[test]
fn set_tool_abandons_gesture_in_progress() {
    let mut core = engine_with_tool(Tool::Rect);
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.on_pointer_move(Point::new(10.0, 10.0));
    assert!(core.preview.is_some());

    core.set_tool(Tool::Eraser);
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(core.preview, None);

    let actions = core.on_pointer_up(Point::new(10.0, 10.0));
    assert!(actions.is_empty());
}

#[test]
fn pointer_move_while_idle_does_nothing() {
    let mut core = EngineCore::new();
    assert!(core.on_pointer_move(Point::new(5.0, 5.0)).is_empty());
}
