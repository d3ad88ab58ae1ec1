//! The input bridge: relays press/release transitions into the native engine.
//!
//! This use case sits at the application layer and delegates to a
//! [`NativeEngine`] trait object for the actual boundary call. The concrete
//! boundary mechanisms (the registered entry-point table, the recording mock)
//! live in the infrastructure layer.
//!
//! # A stateless conduit
//!
//! The bridge carries no state machine beyond the one-time initialization
//! flag. Each `press`/`release` call is a pure forward with no buffering,
//! batching, reordering, or branching on history; any "currently held"
//! tracking belongs to the native side. Per-code program order is therefore
//! intact: the engine observes transitions for a given code in exactly the
//! order the gesture task issued them.
//!
//! # Concurrency
//!
//! The two tracked buttons each run on their own gesture-tracking task, so
//! `press`/`release` calls for *distinct* codes may arrive concurrently. The
//! bridge tolerates that without a lock — the readiness flag is an atomic and
//! every forward is independent. No ordering is promised *between* codes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use padbridge_core::{InputCode, InputEvent, Transition};
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A forwarding call was made before [`InputBridge::initialize`].
    ///
    /// This is a caller-lifecycle bug, not a runtime condition: the bridge
    /// does not recover from it and callers are expected to treat it as
    /// fatal. It is surfaced as an error variant only so the bug is caught
    /// loudly at integration time instead of corrupting engine state.
    #[error("input bridge used before initialization")]
    NotInitialized,

    /// The engine handshake failed.
    #[error("engine handshake failed: {0}")]
    Handshake(String),
}

/// The one-way boundary call surface implemented by the native consumer side.
///
/// Adapters in the infrastructure layer implement this for the registered
/// engine entry points; tests implement it with an in-memory recorder. All
/// three calls are synchronous from the caller's perspective — when they
/// return, the engine has been notified — and none of them reports a result
/// for the event itself: native-side processing is out of scope here.
pub trait NativeEngine: Send + Sync {
    /// One-time handshake making the engine ready to accept events.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Handshake`] if the engine cannot be readied.
    fn initialize(&self) -> Result<(), BridgeError>;

    /// Notifies the engine that `code` was pressed.
    fn key_down(&self, code: InputCode);

    /// Notifies the engine that `code` was released.
    fn key_up(&self, code: InputCode);
}

/// The input bridge.
///
/// Owns the one-time initialization handshake and the two forwarding entry
/// points. Construct it once at startup, call [`initialize`](Self::initialize)
/// before wiring up any gesture handling, then share it (it is `Sync`) with
/// the per-button gesture tasks.
pub struct InputBridge {
    engine: Arc<dyn NativeEngine>,
    /// Process-wide readiness flag. Set exactly once, during startup, before
    /// any gesture handling is wired up; never torn down while forwarding
    /// calls may still occur.
    ready: AtomicBool,
}

impl InputBridge {
    /// Creates a bridge over the given engine. The bridge is not usable for
    /// forwarding until [`initialize`](Self::initialize) has succeeded.
    pub fn new(engine: Arc<dyn NativeEngine>) -> Self {
        Self {
            engine,
            ready: AtomicBool::new(false),
        }
    }

    /// Performs the one-time engine handshake.
    ///
    /// Idempotent: the handshake reaches the engine exactly once, and any
    /// later call returns `Ok` without a boundary call. Initialization is
    /// performed during application startup before gesture handling exists,
    /// so there is no concurrent-first-call race to defend against.
    ///
    /// # Errors
    ///
    /// Propagates [`BridgeError::Handshake`] from the engine; the bridge
    /// stays uninitialized in that case.
    pub fn initialize(&self) -> Result<(), BridgeError> {
        if self.ready.load(Ordering::Acquire) {
            return Ok(());
        }
        self.engine.initialize()?;
        self.ready.store(true, Ordering::Release);
        debug!("native engine handshake complete");
        Ok(())
    }

    /// Returns `true` once the handshake has completed.
    pub fn is_initialized(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Delivers a press transition for `code` to the engine.
    ///
    /// Synchronous and order-preserving; performs no I/O and no allocation,
    /// since it runs on the thread handling the gesture callback.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::NotInitialized`] if called before
    /// [`initialize`](Self::initialize) — a fatal caller-lifecycle bug.
    pub fn press(&self, code: InputCode) -> Result<(), BridgeError> {
        self.forward(InputEvent::press(code))
    }

    /// Delivers a release transition for `code`; same contract as
    /// [`press`](Self::press).
    pub fn release(&self, code: InputCode) -> Result<(), BridgeError> {
        self.forward(InputEvent::release(code))
    }

    fn forward(&self, event: InputEvent) -> Result<(), BridgeError> {
        if !self.ready.load(Ordering::Acquire) {
            return Err(BridgeError::NotInitialized);
        }
        trace!(code = event.code.name(), transition = ?event.transition, "forwarding");
        match event.transition {
            Transition::Press => self.engine.key_down(event.code),
            Transition::Release => self.engine.key_up(event.code),
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
