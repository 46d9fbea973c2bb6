//! Components which make up a node

use std::fmt;

use glam::Vec2;
use serde::Serialize;

/// Identity of a node.
///
/// Ids are handed out in creation order and are never reused, even after
/// the node they named has been removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labeled circular bubble taking part in the simulation.
#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Fixed at creation.
    pub radius: f32,
    pub label: String,
    /// Set while the pointer owns this node. A dragged node is moved by the
    /// pointer only and its velocity stays pinned at zero.
    pub dragging: bool,
}

impl Node {
    pub fn new(id: NodeId, position: Vec2, radius: f32, label: impl Into<String>) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            radius,
            label: label.into(),
            dragging: false,
        }
    }

    /// Whether `point` lies strictly inside the node's circle.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) < self.radius
    }

    /// Adds `delta` to the velocity unless the pointer owns the node.
    #[inline]
    pub fn push(&mut self, delta: Vec2) {
        if !self.dragging {
            self.velocity += delta;
        }
    }
}

/// Default label for the `n`th node created, counting from one.
pub fn default_label(n: u64) -> String {
    format!("Bubble {n}")
}
