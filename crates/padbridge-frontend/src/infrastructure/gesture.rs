//! Two-phase gesture tracking for the on-screen buttons.
//!
//! The UI toolkit reports a gesture's lifecycle as explicit phases: *begin*
//! fires the moment the pointer lands on a button, *end* fires when the
//! pointer is lifted, and *cancel* fires when the toolkit takes the gesture
//! away (an incoming call, a system overlay, the pointer dragged off the
//! surface). Nothing here relies on implicit suspension or resume semantics.
//!
//! The contract this module enforces for the bridge:
//!
//! - every press is followed by exactly one later release for the same code,
//!   including on cancellation;
//! - a second begin with no intervening end is dropped, so presses of the
//!   same code never nest;
//! - a stray end or cancel with no active gesture forwards nothing.
//!
//! Each button is tracked by its own [`ButtonGesture`], driven from its own
//! gesture task; the two buttons' transitions interleave freely and
//! independently at the bridge.

use std::collections::HashMap;

use padbridge_core::InputCode;
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::application::forward_input::{BridgeError, InputBridge};

/// A gesture lifecycle phase as reported by the UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// The pointer landed on the element.
    Began,
    /// The pointer was lifted.
    Ended,
    /// The toolkit cancelled the gesture; treated like an end.
    Cancelled,
}

/// A phase notice for one interactive element, as delivered by the toolkit's
/// recognizers into the dispatch loop.
#[derive(Debug, Clone)]
pub struct GestureNotice {
    /// Toolkit-side id of the element the gesture happened on.
    pub element: String,
    /// Which lifecycle phase was reached.
    pub phase: GesturePhase,
}

/// Tracks the gesture lifecycle of a single button.
///
/// `held` is the only state: it exists to pair phases, not to mirror the
/// input level — the bridge and the engine never see it.
pub struct ButtonGesture {
    code: InputCode,
    held: bool,
}

impl ButtonGesture {
    /// Creates a tracker forwarding to `code`.
    pub fn new(code: InputCode) -> Self {
        Self { code, held: false }
    }

    /// The code this button forwards to.
    pub fn code(&self) -> InputCode {
        self.code
    }

    /// Returns `true` while a begin is awaiting its end.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Feeds one phase into the tracker, forwarding at most one transition.
    ///
    /// Redundant phases (a second begin while held, an end while not held)
    /// are dropped here so the bridge stays a pure conduit.
    ///
    /// # Errors
    ///
    /// Propagates [`BridgeError`] from the bridge. The tracker state is
    /// updated before forwarding, so a fatal bridge error does not leave a
    /// phase half-applied.
    pub fn on_phase(&mut self, phase: GesturePhase, bridge: &InputBridge) -> Result<(), BridgeError> {
        match phase {
            GesturePhase::Began => {
                if self.held {
                    warn!(code = self.code.name(), "redundant begin dropped");
                    return Ok(());
                }
                self.held = true;
                bridge.press(self.code)
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                if !self.held {
                    return Ok(());
                }
                self.held = false;
                bridge.release(self.code)
            }
        }
    }
}

/// Routes element-level gesture notices to the right [`ButtonGesture`].
///
/// Bindings come from the front-end config; an element with no binding is
/// logged and ignored so a mislabelled widget cannot reach the engine.
pub struct GestureRouter {
    bindings: HashMap<String, ButtonGesture>,
}

impl GestureRouter {
    /// Creates a router with no bindings.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds an element id to a code. Rebinding an element replaces the old
    /// tracker, releasing nothing — do it before gestures are live.
    pub fn bind(&mut self, element: impl Into<String>, code: InputCode) {
        self.bindings.insert(element.into(), ButtonGesture::new(code));
    }

    /// Dispatches one notice. Returns `Ok(false)` for an unbound element.
    ///
    /// # Errors
    ///
    /// Propagates [`BridgeError`] from the tracker.
    pub fn dispatch(
        &mut self,
        notice: &GestureNotice,
        bridge: &InputBridge,
    ) -> Result<bool, BridgeError> {
        match self.bindings.get_mut(&notice.element) {
            Some(gesture) => {
                gesture.on_phase(notice.phase, bridge)?;
                Ok(true)
            }
            None => {
                warn!(element = %notice.element, "gesture on unbound element ignored");
                Ok(false)
            }
        }
    }
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains gesture notices from the toolkit channel into the bridge.
///
/// This is the front-end's dispatch loop: one notice at a time, forwarded
/// immediately, until every sender is dropped. A [`BridgeError`] is a
/// lifecycle bug (see [`BridgeError::NotInitialized`]); the loop logs it and
/// stops rather than keep feeding a broken boundary.
pub async fn run_gesture_loop(
    mut rx: mpsc::Receiver<GestureNotice>,
    mut router: GestureRouter,
    bridge: &InputBridge,
) {
    while let Some(notice) = rx.recv().await {
        if let Err(e) = router.dispatch(&notice, bridge) {
            error!("gesture dispatch failed: {e}; stopping input forwarding");
            break;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::forward_input::NativeEngine;
    use crate::infrastructure::native_engine::mock::MockNativeEngine;
    use padbridge_core::{InputEvent, Transition};
    use std::sync::Arc;

    fn make_bridge() -> (InputBridge, Arc<MockNativeEngine>) {
        let engine = Arc::new(MockNativeEngine::new());
        let bridge = InputBridge::new(Arc::clone(&engine) as Arc<dyn NativeEngine>);
        bridge.initialize().unwrap();
        (bridge, engine)
    }

    // ── ButtonGesture ─────────────────────────────────────────────────────────

    #[test]
    fn test_begin_then_end_forwards_one_press_one_release() {
        // Arrange
        let (bridge, engine) = make_bridge();
        let mut gesture = ButtonGesture::new(InputCode::Up);

        // Act
        gesture.on_phase(GesturePhase::Began, &bridge).unwrap();
        gesture.on_phase(GesturePhase::Ended, &bridge).unwrap();

        // Assert
        assert_eq!(
            engine.transitions_for(InputCode::Up),
            vec![Transition::Press, Transition::Release]
        );
        assert!(!gesture.is_held());
    }

    #[test]
    fn test_cancel_releases_like_an_end() {
        // Arrange
        let (bridge, engine) = make_bridge();
        let mut gesture = ButtonGesture::new(InputCode::Down);

        // Act
        gesture.on_phase(GesturePhase::Began, &bridge).unwrap();
        gesture.on_phase(GesturePhase::Cancelled, &bridge).unwrap();

        // Assert – cancellation still emits exactly one release
        assert_eq!(
            engine.transitions_for(InputCode::Down),
            vec![Transition::Press, Transition::Release]
        );
    }

    #[test]
    fn test_redundant_begin_is_dropped() {
        // Arrange
        let (bridge, engine) = make_bridge();
        let mut gesture = ButtonGesture::new(InputCode::Up);

        // Act – a second begin with no intervening end
        gesture.on_phase(GesturePhase::Began, &bridge).unwrap();
        gesture.on_phase(GesturePhase::Began, &bridge).unwrap();
        gesture.on_phase(GesturePhase::Ended, &bridge).unwrap();

        // Assert – no nested press reaches the boundary
        assert_eq!(
            engine.transitions_for(InputCode::Up),
            vec![Transition::Press, Transition::Release]
        );
    }

    #[test]
    fn test_end_after_cancel_forwards_nothing_extra() {
        // Arrange
        let (bridge, engine) = make_bridge();
        let mut gesture = ButtonGesture::new(InputCode::Up);
        gesture.on_phase(GesturePhase::Began, &bridge).unwrap();
        gesture.on_phase(GesturePhase::Cancelled, &bridge).unwrap();

        // Act – the toolkit may still report the lift after a cancel
        gesture.on_phase(GesturePhase::Ended, &bridge).unwrap();

        // Assert – exactly one release total
        assert_eq!(
            engine.transitions_for(InputCode::Up),
            vec![Transition::Press, Transition::Release]
        );
    }

    #[test]
    fn test_stray_end_without_begin_forwards_nothing() {
        // Arrange
        let (bridge, engine) = make_bridge();
        let mut gesture = ButtonGesture::new(InputCode::Down);

        // Act
        gesture.on_phase(GesturePhase::Ended, &bridge).unwrap();

        // Assert
        assert!(engine.recorded().is_empty());
    }

    // ── GestureRouter ─────────────────────────────────────────────────────────

    #[test]
    fn test_router_dispatches_to_the_bound_code() {
        // Arrange
        let (bridge, engine) = make_bridge();
        let mut router = GestureRouter::new();
        router.bind("btn-up", InputCode::Up);
        router.bind("btn-down", InputCode::Down);

        // Act
        let handled = router
            .dispatch(
                &GestureNotice {
                    element: "btn-down".to_string(),
                    phase: GesturePhase::Began,
                },
                &bridge,
            )
            .unwrap();

        // Assert
        assert!(handled);
        assert_eq!(engine.recorded(), vec![InputEvent::press(InputCode::Down)]);
        assert!(engine.transitions_for(InputCode::Up).is_empty());
    }

    #[test]
    fn test_router_ignores_unbound_elements() {
        // Arrange
        let (bridge, engine) = make_bridge();
        let mut router = GestureRouter::new();
        router.bind("btn-up", InputCode::Up);

        // Act
        let handled = router
            .dispatch(
                &GestureNotice {
                    element: "volume-slider".to_string(),
                    phase: GesturePhase::Began,
                },
                &bridge,
            )
            .unwrap();

        // Assert
        assert!(!handled);
        assert!(engine.recorded().is_empty());
    }

    // ── Dispatch loop ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_gesture_loop_drains_notices_in_order() {
        // Arrange
        let (bridge, engine) = make_bridge();
        let mut router = GestureRouter::new();
        router.bind("btn-up", InputCode::Up);
        let (tx, rx) = mpsc::channel(16);

        // Act – queue a full tap, then drop the sender so the loop exits
        for phase in [GesturePhase::Began, GesturePhase::Ended] {
            tx.send(GestureNotice {
                element: "btn-up".to_string(),
                phase,
            })
            .await
            .unwrap();
        }
        drop(tx);
        run_gesture_loop(rx, router, &bridge).await;

        // Assert
        assert_eq!(
            engine.transitions_for(InputCode::Up),
            vec![Transition::Press, Transition::Release]
        );
    }
}
