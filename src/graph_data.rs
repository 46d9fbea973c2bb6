use glam::Vec2;
use serde::Serialize;

use crate::simulator::{components::nodes::NodeId, ressources::simulator_vars::WorldSize};

/// A node as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeDisplay {
    pub id: NodeId,
    pub position: Vec2,
    pub radius: f32,
    pub label: String,
    pub dragging: bool,
}

/// An edge as seen by a renderer, with its endpoint positions resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeDisplay {
    pub from: NodeId,
    pub to: NodeId,
    pub from_position: Vec2,
    pub to_position: Vec2,
}

/// Struct containing everything needed to draw one frame.
///
/// Taken after a tick with [`Simulator::snapshot`](crate::simulator::Simulator::snapshot).
/// Nodes are in creation order, so later nodes are drawn on top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphDisplayData {
    pub nodes: Vec<NodeDisplay>,
    pub edges: Vec<EdgeDisplay>,
    pub world_size: WorldSize,
}

impl GraphDisplayData {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
