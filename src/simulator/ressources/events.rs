//! Events for communicating with the simulator from the outside.

use std::fmt;

use glam::Vec2;

/// Identifies one press of the pointer on a node.
///
/// A long press only fires for the gesture that armed it, so a late timer
/// callback from an earlier press is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GestureId(pub u64);

impl fmt::Display for GestureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Describes an event received by a [`Simulator`](crate::simulator::Simulator).
///
/// Pointer coordinates are in the same space as node positions.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulatorEvent {
    /// The pointer was pressed.
    PointerDown(Vec2),

    /// The pointer moved.
    PointerMove(Vec2),

    /// The pointer was released.
    PointerUp,

    /// A long-press timer run by the host fired.
    LongPressElapsed(GestureId),

    /// Add an unconnected node at a random position.
    AddNode,

    /// The containment rectangle changed.
    Resized { width: f32, height: f32 },
}
