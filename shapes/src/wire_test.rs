use super::*;
use crate::model::Point;

// =============================================================================
// CLIENT MESSAGES
// =============================================================================

#[test]
fn join_room_wire_form() {
    let msg = ClientMessage::JoinRoom { room_id: 7 };
    let value = serde_json::to_value(&msg).expect("serialize");
    assert_eq!(value, serde_json::json!({"type": "join_room", "roomId": 7}));
}

#[test]
fn leave_room_wire_form() {
    let msg = ClientMessage::LeaveRoom { room_id: 7 };
    let value = serde_json::to_value(&msg).expect("serialize");
    assert_eq!(value["type"], "leave_room");
}

#[test]
fn draw_carries_shape_type_and_data() {
    let msg = ClientMessage::Draw {
        room_id: 1,
        shape_type: ShapeKind::Rect,
        shape_data: Shape::Rect { x: 10.0, y: 10.0, width: 50.0, height: 30.0 },
    };
    let value = serde_json::to_value(&msg).expect("serialize");
    assert_eq!(value["type"], "draw");
    assert_eq!(value["roomId"], 1);
    assert_eq!(value["shapeType"], "rect");
    assert_eq!(value["shapeData"]["type"], "rect");
    assert_eq!(value["shapeData"]["width"], 50.0);
}

#[test]
fn erase_carries_identity_list() {
    let msg = ClientMessage::Erase { room_id: 3, erased_shape_ids: vec![4, 5, 6] };
    let value = serde_json::to_value(&msg).expect("serialize");
    assert_eq!(value["type"], "erase");
    assert_eq!(value["erasedShapeIds"], serde_json::json!([4, 5, 6]));
}

#[test]
fn client_round_trip() {
    let msg = ClientMessage::Draw {
        room_id: 9,
        shape_type: ShapeKind::Freehand,
        shape_data: Shape::Freehand { points: vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)] },
    };
    let decoded = decode_client(&encode_client(&msg)).expect("decode");
    assert_eq!(decoded, msg);
}

// =============================================================================
// SERVER MESSAGES
// =============================================================================

#[test]
fn server_draw_embeds_committed_record() {
    let msg = ServerMessage::Draw {
        room_id: 1,
        shape: ShapeRecord {
            id: 1,
            shape: Shape::Rect { x: 10.0, y: 10.0, width: 50.0, height: 30.0 },
        },
    };
    let value = serde_json::to_value(&msg).expect("serialize");
    assert_eq!(value["shape"]["id"], 1);
    assert_eq!(value["shape"]["type"], "rect");
    assert_eq!(value["shape"]["x"], 10.0);
}

#[test]
fn server_round_trip() {
    let msg = ServerMessage::Erase { room_id: 2, erased_shape_ids: vec![11] };
    let decoded = decode_server(&encode_server(&msg)).expect("decode");
    assert_eq!(decoded, msg);
}

// =============================================================================
// MALFORMED INPUT
// =============================================================================

#[test]
fn decode_rejects_invalid_json() {
    assert!(decode_client("{not json").is_err());
    assert!(decode_server("").is_err());
}

#[test]
fn decode_rejects_missing_discriminator() {
    assert!(decode_client(r#"{"roomId": 1}"#).is_err());
}

#[test]
fn decode_rejects_unknown_type() {
    assert!(decode_client(r#"{"type": "chat", "roomId": 1, "message": "hi"}"#).is_err());
}

#[test]
fn decode_rejects_unknown_shape_kind_in_draw() {
    let text = r#"{"type":"draw","roomId":1,"shapeType":"rect",
                   "shapeData":{"type":"triangle","x":0,"y":0}}"#;
    assert!(decode_client(text).is_err());
}
