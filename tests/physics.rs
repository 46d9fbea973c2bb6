use approx::assert_abs_diff_eq;
use bubbles::prelude::*;
use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn simulator() -> Simulator {
    Simulator::builder()
        .world_size(800.0, 600.0)
        .seed(5)
        .build()
        .expect("valid simulator")
}

fn overlap(sim: &Simulator) -> f32 {
    let nodes: Vec<&Node> = sim.nodes().collect();
    let mut total = 0.0;
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            total += (a.radius + b.radius - a.position.distance(b.position)).max(0.0);
        }
    }
    total
}

#[test]
fn edge_tick_conserves_momentum() {
    let mut sim = simulator();
    let a = sim.add_node_at(Vec2::new(200.0, 280.0));
    let b = sim.add_node_at(Vec2::new(520.0, 330.0));
    sim.add_edge(a, b).expect("edge");

    sim.tick();

    let va = sim.node(a).expect("a").velocity;
    let vb = sim.node(b).expect("b").velocity;
    assert!(va.length() > 0.0);
    assert_abs_diff_eq!(va.x, -vb.x, epsilon = 1e-5);
    assert_abs_diff_eq!(va.y, -vb.y, epsilon = 1e-5);
}

#[test]
fn free_node_comes_to_rest() {
    let mut sim = simulator();
    let id = sim.add_node_at(Vec2::new(400.0, 300.0));
    sim.apply_impulse(id, Vec2::new(2.0, 1.0)).expect("impulse");

    let mut last = f32::INFINITY;
    for _ in 0..2_000 {
        sim.tick();
        let speed = sim.node(id).expect("node").velocity.length();
        assert!(speed <= last);
        last = speed;
    }
    assert_eq!(sim.node(id).expect("node").velocity, Vec2::ZERO);
}

#[test]
fn nodes_stay_inside_the_world() {
    let mut sim = simulator();
    let mut rng = StdRng::seed_from_u64(99);
    let ids: Vec<NodeId> = (0..12).map(|_| sim.add_node()).collect();
    for pair in ids.windows(2) {
        sim.add_edge(pair[0], pair[1]).expect("edge");
    }

    let margin = sim.vars().boundary_margin;
    for step in 0..500 {
        if step % 25 == 0 {
            for &id in &ids {
                let kick = Vec2::new(rng.gen_range(-80.0..80.0), rng.gen_range(-80.0..80.0));
                sim.apply_impulse(id, kick).expect("impulse");
            }
        }
        sim.tick();
        let size = sim.world_size();
        for node in sim.nodes() {
            let min = node.radius + margin;
            assert!(node.position.x >= min && node.position.x <= size.width - min);
            assert!(node.position.y >= min && node.position.y <= size.height - min);
        }
    }
}

#[test]
fn overlapping_pair_separates_monotonically() {
    let mut sim = simulator();
    sim.add_node_at(Vec2::new(400.0, 300.0));
    sim.add_node_at(Vec2::new(440.0, 300.0));

    let mut last = overlap(&sim);
    assert!(last > 0.0);
    for _ in 0..20 {
        sim.tick();
        let current = overlap(&sim);
        assert!(current <= last);
        last = current;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn crowded_cluster_relaxes() {
    let mut sim = simulator();
    for i in 0..6 {
        sim.add_node_at(Vec2::new(400.0 + 4.0 * i as f32, 300.0 + 3.0 * i as f32));
    }
    let before = overlap(&sim);

    for _ in 0..300 {
        sim.tick();
    }

    assert!(overlap(&sim) < before * 0.1);
}

#[test]
fn connected_pair_settles_near_rest_length() {
    let mut sim = simulator();
    let a = sim.add_node_at(Vec2::new(320.0, 300.0));
    let b = sim.add_node_at(Vec2::new(480.0, 300.0));
    sim.add_edge(a, b).expect("edge");

    for _ in 0..3_000 {
        sim.tick();
    }

    let distance = sim
        .node(a)
        .expect("a")
        .position
        .distance(sim.node(b).expect("b").position);
    assert_abs_diff_eq!(distance, 120.0, epsilon = 5.0);
}
