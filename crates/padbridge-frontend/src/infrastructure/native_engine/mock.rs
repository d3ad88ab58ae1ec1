//! Mock native engine for unit and integration testing.
//!
//! # Why a mock engine?
//!
//! The real engine lives in a shared library loaded by the process bootstrap
//! and acts on transitions by moving things on screen — nothing a test can
//! observe from Rust. `MockNativeEngine` replaces the boundary call with
//! in-memory recording: every transition is pushed onto a `Mutex<Vec<...>>`
//! so assertions can inspect exactly what crossed the boundary and in what
//! order, per code.
//!
//! # Usage in tests
//!
//! ```ignore
//! let engine = Arc::new(MockNativeEngine::new());
//! let bridge = InputBridge::new(Arc::clone(&engine) as Arc<dyn NativeEngine>);
//! bridge.initialize().unwrap();
//!
//! bridge.press(InputCode::Up).unwrap();
//!
//! assert_eq!(engine.transitions_for(InputCode::Up), vec![Transition::Press]);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use padbridge_core::{InputCode, InputEvent, Transition};

use crate::application::forward_input::{BridgeError, NativeEngine};

/// An engine that records every boundary call without acting on it.
///
/// The event log is behind a `Mutex` so tests can share the engine across
/// threads (e.g., when exercising concurrent gesture tasks through an `Arc`).
#[derive(Default)]
pub struct MockNativeEngine {
    /// Number of times the handshake was invoked.
    pub handshakes: AtomicUsize,
    /// Every transition received, in arrival order.
    pub events: Mutex<Vec<InputEvent>>,
    /// When `true`, the handshake fails with [`BridgeError::Handshake`].
    /// Use this to test startup error paths without a broken engine build.
    pub fail_handshake: bool,
}

impl MockNativeEngine {
    /// Creates a mock with an empty log and a working handshake.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every recorded event, in arrival order.
    pub fn recorded(&self) -> Vec<InputEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the transitions recorded for a single code, in arrival order.
    ///
    /// This is the per-code view the ordering guarantee is stated over:
    /// events for other codes may interleave in the full log, but the
    /// sequence returned here must match the issuing task's program order.
    pub fn transitions_for(&self, code: InputCode) -> Vec<Transition> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.code == code)
            .map(|e| e.transition)
            .collect()
    }
}

impl NativeEngine for MockNativeEngine {
    fn initialize(&self) -> Result<(), BridgeError> {
        if self.fail_handshake {
            return Err(BridgeError::Handshake("mock failure".into()));
        }
        self.handshakes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn key_down(&self, code: InputCode) {
        self.events.lock().unwrap().push(InputEvent::press(code));
    }

    fn key_up(&self, code: InputCode) {
        self.events.lock().unwrap().push(InputEvent::release(code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_for_filters_by_code() {
        // Arrange
        let engine = MockNativeEngine::new();

        // Act – interleave two codes
        engine.key_down(InputCode::Up);
        engine.key_down(InputCode::Down);
        engine.key_up(InputCode::Up);
        engine.key_up(InputCode::Down);

        // Assert – each per-code view is a clean press/release pair
        assert_eq!(
            engine.transitions_for(InputCode::Up),
            vec![Transition::Press, Transition::Release]
        );
        assert_eq!(
            engine.transitions_for(InputCode::Down),
            vec![Transition::Press, Transition::Release]
        );
    }

    #[test]
    fn test_failing_handshake_records_nothing() {
        // Arrange
        let engine = MockNativeEngine {
            fail_handshake: true,
            ..Default::default()
        };

        // Act
        let result = engine.initialize();

        // Assert
        assert!(result.is_err());
        assert_eq!(engine.handshakes.load(Ordering::SeqCst), 0);
    }
}
