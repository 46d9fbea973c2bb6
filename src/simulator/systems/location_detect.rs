use glam::Vec2;
use log::debug;
use petgraph::stable_graph::NodeIndex;

use crate::simulator::NodeGraph;

/// Finds the node under `point`.
///
/// Nodes are tested in the order given and the first one containing the
/// point wins, even if a later node's center is closer.
// TODO: Use a spatial index once diagrams grow past a few hundred nodes.
pub fn point_intersect<I>(graph: &NodeGraph, order: I, point: Vec2) -> Option<NodeIndex>
where
    I: IntoIterator<Item = NodeIndex>,
{
    let found = order
        .into_iter()
        .find(|&idx| graph.node_weight(idx).is_some_and(|node| node.contains(point)));
    if let Some(idx) = found {
        debug!("Point {0} intersect [{1}]", point, graph[idx].id);
    }
    found
}
