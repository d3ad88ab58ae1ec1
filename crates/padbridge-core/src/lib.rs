//! # padbridge-core
//!
//! Shared leaf crate for PadBridge containing the signal codec: the closed
//! vocabulary of logical input codes and the press/release transition kinds.
//!
//! This crate is used by both the front-end glue and the native boundary
//! adapters. It has zero dependencies on OS APIs, UI frameworks, or the
//! engine library itself.
//!
//! # Why a separate crate?
//!
//! The front-end (gesture recognition, dispatch loop) and the boundary
//! adapters (the registered engine entry points) must agree on exactly one
//! thing: which logical inputs exist and what their stable boundary ids are.
//! Keeping that vocabulary in a leaf crate means neither side can drift —
//! an unrecognized code is unrepresentable because no such value can be
//! constructed.

pub mod signal;

// Re-export the codec types at the crate root so callers can write
// `padbridge_core::InputCode` instead of `padbridge_core::signal::InputCode`.
pub use signal::{InputCode, InputEvent, Transition};
