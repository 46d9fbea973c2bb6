use thiserror::Error;

use crate::simulator::components::nodes::NodeId;

/// Errors returned when building or mutating a [`Simulator`](crate::simulator::Simulator).
///
/// Everything here is rejected up front. Degenerate situations inside a
/// tick (coincident nodes, zero-length edges) are handled silently.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("node radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("world size must be positive, got {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },

    #[error("invalid simulator variable: {0}")]
    InvalidConfig(String),

    #[error("failed to parse simulator variables: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("edge from {0} to itself is not allowed")]
    SelfLoop(NodeId),
}
