//! Boundary adapters implementing [`NativeEngine`].
//!
//! `embedded` is the shipping adapter over the loaded library's registered
//! entry points; `mock` records calls in memory for tests.
//!
//! [`NativeEngine`]: crate::application::forward_input::NativeEngine

pub mod embedded;
pub mod mock;
