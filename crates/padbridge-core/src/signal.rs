//! The signal codec: logical input codes and press/release transitions.
//!
//! This is the canonical input representation used throughout PadBridge.
//! The front-end's gesture layer produces these values and the boundary
//! adapters consume them; nothing else ever crosses the native boundary.
//!
//! # Closed vocabulary
//!
//! [`InputCode`] is a closed enumeration: adding a new logical input is a
//! build-time edit here, not a runtime registration. The native consumer
//! therefore never has to defensively validate an incoming id — every value
//! that can reach it was constructed from one of the variants below.
//!
//! # Edges, not levels
//!
//! [`Transition`] describes a momentary edge (a press or a release), never a
//! "currently held" level. Held/released bookkeeping, if any is needed, is
//! the responsibility of the native consumer; this codec carries no state.

use serde::{Deserialize, Serialize};

/// A logical input the player can control.
///
/// The numeric value of each variant is its stable boundary id — the raw
/// `u16` handed to the native engine's entry points. Ids are part of the
/// boundary contract and must never be reused or renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum InputCode {
    /// Move the paddle up.
    Up = 0x01,
    /// Move the paddle down.
    Down = 0x02,
}

impl InputCode {
    /// Every code in the vocabulary, in declaration order.
    ///
    /// Useful for exhaustive tests and for building default button bindings.
    pub const ALL: [InputCode; 2] = [InputCode::Up, InputCode::Down];

    /// Returns the stable id transmitted across the native boundary.
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Returns the symbolic name of this code.
    pub fn name(self) -> &'static str {
        match self {
            InputCode::Up => "Up",
            InputCode::Down => "Down",
        }
    }
}

/// The kind of edge an input event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Transition {
    /// The input became active.
    Press = 0x01,
    /// The input stopped being active.
    Release = 0x02,
}

/// A single `(code, transition)` pair crossing the native boundary.
///
/// Ephemeral by design: an `InputEvent` exists for the duration of one
/// boundary call and is never stored. For any single gesture lifecycle a
/// `Press` for a given code is delivered before its matching `Release`, and
/// presses of the same code never nest; transitions for *distinct* codes are
/// independent and may interleave freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    /// Which logical input changed.
    pub code: InputCode,
    /// Whether it was pressed or released.
    pub transition: Transition,
}

impl InputEvent {
    /// Constructs a press edge for `code`.
    pub fn press(code: InputCode) -> Self {
        Self {
            code,
            transition: Transition::Press,
        }
    }

    /// Constructs a release edge for `code`.
    pub fn release(code: InputCode) -> Self {
        Self {
            code,
            transition: Transition::Release,
        }
    }

    /// Returns `true` if this event is a press edge.
    pub fn is_press(&self) -> bool {
        self.transition == Transition::Press
    }
}
