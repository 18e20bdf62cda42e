//! Canvas drawing engine for the collaborative drawing surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the client side of the shape lifecycle: translating raw pointer events
//! into shape construction, keeping the local shape set in sync with relay
//! broadcasts, and repainting the canvas. The host layer is responsible only
//! for wiring DOM events into the engine, transmitting the
//! [`engine::Action`]s it emits over the room socket, and feeding inbound
//! socket text back through the [`session::RoomSession`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and host-testable [`engine::EngineCore`] |
//! | [`doc`] | Local shape set: pending and committed shapes |
//! | [`input`] | Tool selection and the gesture state machine |
//! | [`session`] | Connection-session protocol state for one room view |
//! | [`render`] | Full-repaint scene rendering to a 2D context |
//! | [`consts`] | Erase radius, stroke thresholds, styling |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod input;
pub mod render;
pub mod session;
