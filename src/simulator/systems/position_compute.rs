use glam::Vec2;

use crate::simulator::{components::nodes::Node, ressources::simulator_vars::WorldSize};

/// Keeps a node inside the world rectangle shrunk by `margin`.
///
/// Each axis is handled on its own. A node whose circle crosses a side is
/// placed back against it and its velocity along that axis is turned inward
/// and scaled by `damping`. Corner contact triggers both axes. On an axis
/// narrower than the node plus margins the node is held at the center with
/// no velocity along it.
pub fn contain(node: &mut Node, world_size: WorldSize, margin: f32, damping: f32) {
    let inset = node.radius + margin;
    contain_axis(
        &mut node.position.x,
        &mut node.velocity.x,
        inset,
        world_size.width,
        damping,
    );
    contain_axis(
        &mut node.position.y,
        &mut node.velocity.y,
        inset,
        world_size.height,
        damping,
    );
}

fn contain_axis(position: &mut f32, velocity: &mut f32, inset: f32, extent: f32, damping: f32) {
    let (min, max) = (inset, extent - inset);
    if max < min {
        *position = extent / 2.0;
        *velocity = 0.0;
    } else if *position < min {
        *position = min;
        *velocity = velocity.abs() * damping;
    } else if *position > max {
        *position = max;
        *velocity = -velocity.abs() * damping;
    }
}

/// Uniform random position inside the world, `padding` away from each side.
///
/// Axes too narrow for the padding fall back to the whole world extent.
pub fn random_position<R: rand::Rng + ?Sized>(
    rng: &mut R,
    world_size: WorldSize,
    padding: f32,
) -> Vec2 {
    Vec2::new(
        random_in_extent(rng, world_size.width, padding),
        random_in_extent(rng, world_size.height, padding),
    )
}

fn random_in_extent<R: rand::Rng + ?Sized>(rng: &mut R, extent: f32, padding: f32) -> f32 {
    let (low, high) = if extent > 2.0 * padding {
        (padding, extent - padding)
    } else {
        (0.0, extent)
    };
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
