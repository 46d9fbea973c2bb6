use glam::Vec2;
use log::trace;
use petgraph::stable_graph::NodeIndex;

use crate::simulator::NodeGraph;

/// Velocity correction separating two overlapping circles.
///
/// Returns the correction for the second circle, the first one receives the
/// negation. The correction points from the first center to the second and
/// grows with the penetration depth. Coincident centers are separated along
/// the x axis. Returns `None` if the circles do not overlap.
pub fn separation(
    pos1: Vec2,
    radius1: f32,
    pos2: Vec2,
    radius2: f32,
    damping: f32,
) -> Option<Vec2> {
    let dir_vec = pos2 - pos1;
    let distance = dir_vec.length();
    let min_distance = radius1 + radius2;
    if distance >= min_distance {
        return None;
    }

    let normal = if distance > 0.0 {
        dir_vec / distance
    } else {
        Vec2::X
    };
    Some(normal * (min_distance - distance) * damping)
}

/// Pushes apart every overlapping pair of nodes.
///
/// Pairs are visited as `(i, j)` with `i < j` in the order given. Overlap is
/// measured on the positions at the start of the pass and only velocities
/// change, so the visiting order does not change the outcome. Dragged nodes
/// take part in detection but receive no correction.
pub fn resolve_collisions<I>(graph: &mut NodeGraph, order: I, damping: f32)
where
    I: IntoIterator<Item = NodeIndex>,
{
    let bodies: Vec<(NodeIndex, Vec2, f32)> = order
        .into_iter()
        .filter_map(|idx| graph.node_weight(idx).map(|n| (idx, n.position, n.radius)))
        .collect();

    for (i, &(idx1, pos1, radius1)) in bodies.iter().enumerate() {
        for &(idx2, pos2, radius2) in &bodies[i + 1..] {
            let Some(correction) = separation(pos1, radius1, pos2, radius2, damping) else {
                continue;
            };
            trace!(
                "(RC) [{0}] <-> [{1}] c: {2}",
                graph[idx1].id,
                graph[idx2].id,
                correction
            );
            graph[idx1].push(-correction);
            graph[idx2].push(correction);
        }
    }
}
