//! Boundary adapter over the loaded engine library's entry points.
//!
//! The process bootstrap (out of scope here) loads the engine as a shared
//! library and hands this adapter the three extern "C" entry points the
//! engine exported. From then on every boundary call is a direct function
//! call into the library: synchronous, order-preserving per call site, and
//! one-directional — the engine never reports a per-event result back.
//!
//! # The entry-point table
//!
//! [`EngineEntryPoints`] is `#[repr(C)]` so its layout matches the table the
//! loader fills in from the library's exported symbols:
//!
//! ```text
//! loader                        engine library
//! ──────────────────────────────────────────────
//! dlsym("engine_init")     ──>  fn engine_init()
//! dlsym("engine_key_down") ──>  fn engine_key_down(code: u16)
//! dlsym("engine_key_up")   ──>  fn engine_key_up(code: u16)
//! ```
//!
//! Codes cross the boundary as the raw `u16` ids from
//! [`InputCode::id`](padbridge_core::InputCode::id). The engine never sees an
//! id it does not know: the vocabulary is a closed enumeration, so an
//! unrecognized code cannot be constructed on this side of the boundary.
//!
//! # Duplicate transitions at the boundary
//!
//! The engine treats a repeated key-down with no intervening key-up as a
//! no-op rather than an error. The gesture layer never produces one, but the
//! contract is recorded here because it is a property of the boundary, not
//! of this front-end.

use padbridge_core::InputCode;
use tracing::info;

use crate::application::forward_input::{BridgeError, NativeEngine};

/// The extern "C" entry points registered by the loader at startup.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct EngineEntryPoints {
    /// One-time handshake; must be called before either key entry point.
    pub init: extern "C" fn(),
    /// Press notification, taking the boundary id of the code.
    pub key_down: extern "C" fn(u16),
    /// Release notification, taking the boundary id of the code.
    pub key_up: extern "C" fn(u16),
}

/// Shipping adapter: forwards transitions straight into the engine library.
pub struct EmbeddedEngine {
    entry: EngineEntryPoints,
}

impl EmbeddedEngine {
    /// Wraps the entry points the loader resolved from the engine library.
    pub fn new(entry: EngineEntryPoints) -> Self {
        Self { entry }
    }
}

impl NativeEngine for EmbeddedEngine {
    fn initialize(&self) -> Result<(), BridgeError> {
        (self.entry.init)();
        info!("engine library initialized");
        Ok(())
    }

    fn key_down(&self, code: InputCode) {
        (self.entry.key_down)(code.id());
    }

    fn key_up(&self, code: InputCode) {
        (self.entry.key_up)(code.id());
    }
}
