use glam::Vec2;

use crate::simulator::{
    components::nodes::Node,
    ressources::simulator_vars::{SimulatorVars, WorldSize},
    systems::position_compute::contain,
    NodeGraph,
};

/// Advances one free node by one frame (explicit Euler, unit time step).
///
/// Friction is applied first, then components slower than `min_speed` are
/// zeroed so the node comes to a full stop instead of jittering forever.
pub fn integrate(node: &mut Node, friction: f32, min_speed: f32) {
    node.velocity *= friction;
    if node.velocity.x.abs() < min_speed {
        node.velocity.x = 0.0;
    }
    if node.velocity.y.abs() < min_speed {
        node.velocity.y = 0.0;
    }
    node.position += node.velocity;
}

/// Moves every node that is not being dragged and keeps it inside the world.
pub fn update_node_positions(graph: &mut NodeGraph, vars: &SimulatorVars, world_size: WorldSize) {
    for node in graph.node_weights_mut() {
        if node.dragging {
            node.velocity = Vec2::ZERO;
            continue;
        }
        integrate(node, vars.friction, vars.min_speed);
        contain(
            node,
            world_size,
            vars.boundary_margin,
            vars.boundary_damping,
        );
    }
}
