//! Shared shape model and JSON wire protocol for the drawing relay.
//!
//! This crate owns everything both sides of the wire must agree on: the
//! closed union of drawable primitives, their serialized field names, the
//! committed-shape record carrying a server-assigned identity, the
//! hit-testing geometry that drives erasing, and the socket message types.
//! The `canvas` engine and the `server` relay both depend on it; neither
//! defines wire types of its own.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | `Shape`, `ShapeKind`, `Point`, and `ShapeRecord` |
//! | [`hit`] | Distance-based hit-testing against shapes |
//! | [`wire`] | `ClientMessage` / `ServerMessage` and the JSON codec |

pub mod hit;
pub mod model;
pub mod wire;

pub use hit::hit_test;
pub use model::{Point, Shape, ShapeKind, ShapeRecord};
pub use wire::{ClientMessage, ServerMessage, WireError};
