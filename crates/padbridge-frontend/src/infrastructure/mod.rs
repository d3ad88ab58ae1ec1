//! Infrastructure layer: concrete boundary adapters and front-end glue.
//!
//! Only this layer knows how the engine is actually reached (registered
//! entry points in the shipping build, an in-memory recorder in tests) and
//! how gestures arrive from the UI toolkit.

pub mod config;
pub mod gesture;
pub mod native_engine;
