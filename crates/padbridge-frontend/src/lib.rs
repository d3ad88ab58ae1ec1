//! padbridge-frontend library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does padbridge-frontend do?
//!
//! The front-end is a minimal touch surface with two on-screen buttons,
//! "Up" and "Down", that drives a native game engine loaded into the same
//! process. It owns everything between the UI toolkit's gesture recognizers
//! and the engine's registered entry points:
//!
//! 1. Receives begin/end/cancel notices from the per-button gesture
//!    recognizers.
//! 2. Translates each notice into a press or release transition of a
//!    logical input code, guaranteeing exactly one release per press even
//!    when the gesture is cancelled.
//! 3. Relays each transition, synchronously and in call order, through the
//!    [`application::forward_input::InputBridge`] into the native engine.
//!
//! What the engine does with a transition (paddle movement, physics, any of
//! it) is entirely its own concern; the front-end never inspects a result.

/// Application layer: the input bridge and its boundary trait.
pub mod application;

/// Infrastructure layer: engine adapters, gesture tracking, and config.
pub mod infrastructure;
