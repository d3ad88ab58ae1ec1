//! Application layer: use cases for the front-end.
//!
//! Depends only on `padbridge-core` types and the traits declared here;
//! infrastructure implementations are injected at construction time.

pub mod forward_input;
