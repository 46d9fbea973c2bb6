use glam::Vec2;
use log::trace;

use crate::simulator::NodeGraph;

/// Computes the spring force an edge exerts on its `from` endpoint.
///
/// The `to` endpoint receives the negation. Stretched springs pull the
/// endpoints together, compressed springs push them apart. Coincident
/// endpoints have no direction and get no force.
pub fn spring_force(from: Vec2, to: Vec2, rest_length: f32, stiffness: f32) -> Vec2 {
    let direction_vec = to - from;
    let distance = direction_vec.length();
    if distance == 0.0 {
        return Vec2::ZERO;
    }

    let force_magnitude = (distance - rest_length) * stiffness;
    direction_vec / distance * force_magnitude
}

/// Adds every edge's spring force to the velocities of its endpoints.
///
/// All forces are computed from the positions at the start of the pass.
/// Dragged endpoints receive nothing.
pub fn compute_edge_forces(graph: &mut NodeGraph, stiffness: f32) {
    let springs: Vec<_> = graph
        .edge_indices()
        .filter_map(|edge| {
            let (src, target) = graph.edge_endpoints(edge)?;
            let force = spring_force(
                graph[src].position,
                graph[target].position,
                graph[edge].rest_length,
                stiffness,
            );
            Some((src, target, force))
        })
        .collect();

    for (src, target, force) in springs {
        trace!(
            "(CEF) S[{0}] T[{1}] f: {2}",
            graph[src].id,
            graph[target].id,
            force
        );
        graph[src].push(force);
        graph[target].push(-force);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::components::{
        edges::Edge,
        nodes::{Node, NodeId},
    };
    use approx::assert_abs_diff_eq;

    fn pair(a: Vec2, b: Vec2, rest_length: f32) -> NodeGraph {
        let mut graph = NodeGraph::default();
        let n1 = graph.add_node(Node::new(NodeId(0), a, 30.0, "a"));
        let n2 = graph.add_node(Node::new(NodeId(1), b, 30.0, "b"));
        graph.add_edge(n1, n2, Edge::new(rest_length));
        graph
    }

    #[test]
    fn stretched_spring_pulls_together() {
        let force = spring_force(Vec2::ZERO, Vec2::new(200.0, 0.0), 120.0, 0.03);
        assert_abs_diff_eq!(force.x, 2.4, epsilon = 1e-5);
        assert_abs_diff_eq!(force.y, 0.0);
    }

    #[test]
    fn compressed_spring_pushes_apart() {
        let force = spring_force(Vec2::ZERO, Vec2::new(0.0, 60.0), 120.0, 0.03);
        assert!(force.y < 0.0);
    }

    #[test]
    fn coincident_endpoints_get_no_force() {
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(spring_force(p, p, 120.0, 0.03), Vec2::ZERO);
    }

    #[test]
    fn edge_force_conserves_momentum() {
        let mut graph = pair(Vec2::new(10.0, 20.0), Vec2::new(250.0, 95.0), 120.0);
        compute_edge_forces(&mut graph, 0.03);

        let velocities: Vec<Vec2> = graph.node_indices().map(|i| graph[i].velocity).collect();
        assert!(velocities[0].length() > 0.0);
        assert_abs_diff_eq!(velocities[0].x, -velocities[1].x, epsilon = 1e-6);
        assert_abs_diff_eq!(velocities[0].y, -velocities[1].y, epsilon = 1e-6);
    }

    #[test]
    fn dragged_endpoint_is_not_pushed() {
        let mut graph = pair(Vec2::ZERO, Vec2::new(300.0, 0.0), 120.0);
        let first = graph.node_indices().next().expect("node");
        graph[first].dragging = true;

        compute_edge_forces(&mut graph, 0.03);

        let velocities: Vec<Vec2> = graph.node_indices().map(|i| graph[i].velocity).collect();
        assert_eq!(velocities[0], Vec2::ZERO);
        assert!(velocities[1].x < 0.0);
    }

    #[test]
    fn duplicate_edges_each_contribute() {
        let mut single = pair(Vec2::ZERO, Vec2::new(300.0, 0.0), 120.0);
        let mut double = single.clone();
        let (a, b) = {
            let mut it = double.node_indices();
            (it.next().expect("a"), it.next().expect("b"))
        };
        double.add_edge(a, b, Edge::new(120.0));

        compute_edge_forces(&mut single, 0.03);
        compute_edge_forces(&mut double, 0.03);

        let one = single[a].velocity;
        let two = double[a].velocity;
        assert_abs_diff_eq!(two.x, 2.0 * one.x, epsilon = 1e-5);
    }
}
