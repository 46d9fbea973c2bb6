use std::{sync::Arc, time::Duration};

use bubbles::prelude::*;
use glam::Vec2;
use quanta::{Clock, Mock};

fn simulator() -> (Simulator, Arc<Mock>) {
    let (clock, mock) = Clock::mock();
    let simulator = Simulator::builder()
        .world_size(800.0, 600.0)
        .seed(11)
        .clock(clock)
        .build()
        .expect("valid simulator");
    (simulator, mock)
}

#[test]
fn release_before_long_press_creates_nothing() {
    let (mut sim, mock) = simulator();
    sim.add_node_at(Vec2::new(400.0, 300.0));
    let dispatcher = sim.dispatcher();

    dispatcher.send(SimulatorEvent::PointerDown(Vec2::new(400.0, 300.0)));
    sim.frame();
    mock.increment(Duration::from_millis(200));
    dispatcher.send(SimulatorEvent::PointerUp);
    sim.frame();

    mock.increment(Duration::from_secs(2));
    for _ in 0..10 {
        sim.frame();
    }

    assert_eq!(sim.node_count(), 1);
    assert_eq!(sim.edge_count(), 0);
    assert_eq!(sim.selected(), None);
    assert!(!sim.long_press_pending());
}

#[test]
fn holding_creates_one_connected_node() {
    let (mut sim, mock) = simulator();
    let a = sim.add_node_at(Vec2::new(400.0, 300.0));
    let dispatcher = sim.dispatcher();

    dispatcher.send(SimulatorEvent::PointerDown(Vec2::new(405.0, 300.0)));
    sim.frame();
    assert_eq!(sim.selected(), Some(a));

    mock.increment(Duration::from_millis(500));
    sim.frame();
    sim.frame();

    assert_eq!(sim.node_count(), 2);
    let edges: Vec<(NodeId, NodeId)> = sim.edges().map(|(from, to, _)| (from, to)).collect();
    let b = sim.nodes().nth(1).expect("spawned node").id;
    assert_eq!(edges, [(a, b)]);
    assert_eq!(sim.selected(), None);

    // The release closing the gesture changes nothing.
    dispatcher.send(SimulatorEvent::PointerUp);
    sim.frame();
    assert_eq!(sim.node_count(), 2);
    assert_eq!(sim.edge_count(), 1);
    assert!(!sim.node(a).expect("a").dragging);
}

#[test]
fn release_queued_in_the_same_frame_wins_over_timer() {
    let (mut sim, mock) = simulator();
    sim.add_node_at(Vec2::new(400.0, 300.0));
    let dispatcher = sim.dispatcher();

    dispatcher.send(SimulatorEvent::PointerDown(Vec2::new(400.0, 300.0)));
    sim.frame();
    mock.increment(Duration::from_millis(800));
    dispatcher.send(SimulatorEvent::PointerUp);
    sim.frame();

    assert_eq!(sim.node_count(), 1);
    assert_eq!(sim.edge_count(), 0);
}

#[test]
fn host_driven_long_press_uses_gesture_id() {
    let (mut sim, _) = simulator();
    sim.add_node_at(Vec2::new(400.0, 300.0));

    let gesture = sim.pointer_down(Vec2::new(400.0, 300.0)).expect("hit");
    sim.pointer_up();
    sim.handle_event(&SimulatorEvent::LongPressElapsed(gesture));
    assert_eq!(sim.node_count(), 1);

    let gesture = sim.pointer_down(Vec2::new(400.0, 300.0)).expect("hit");
    sim.handle_event(&SimulatorEvent::LongPressElapsed(gesture));
    assert_eq!(sim.node_count(), 2);
    assert_eq!(sim.edge_count(), 1);
}

#[test]
fn dragged_node_ignores_ticks() {
    let (mut sim, _) = simulator();
    let a = sim.add_node_at(Vec2::new(300.0, 300.0));
    let b = sim.add_node_at(Vec2::new(600.0, 300.0));
    sim.add_edge(a, b).expect("edge");
    // Overlapping neighbour, so collisions also push on the dragged node.
    sim.add_node_at(Vec2::new(320.0, 310.0));

    sim.pointer_down(Vec2::new(300.0, 300.0)).expect("hit");
    for _ in 0..30 {
        sim.tick();
        let node = sim.node(a).expect("a");
        assert_eq!(node.position, Vec2::new(300.0, 300.0));
        assert_eq!(node.velocity, Vec2::ZERO);
    }

    sim.pointer_move(Vec2::new(250.0, 250.0));
    sim.tick();
    assert_eq!(sim.node(a).expect("a").position, Vec2::new(250.0, 250.0));

    sim.pointer_up();
    sim.apply_impulse(a, Vec2::new(0.0, 40.0)).expect("impulse");
    sim.tick();
    assert!(!sim.node(a).expect("a").dragging);
    assert!(sim.node(a).expect("a").position.y > 250.0);
}

#[test]
fn add_node_and_resize_events_are_applied() {
    let (mut sim, _) = simulator();
    let dispatcher = sim.dispatcher();

    dispatcher.send(SimulatorEvent::AddNode);
    dispatcher.send(SimulatorEvent::AddNode);
    dispatcher.send(SimulatorEvent::Resized {
        width: 1024.0,
        height: 768.0,
    });
    dispatcher.send(SimulatorEvent::Resized {
        width: -1.0,
        height: 768.0,
    });
    sim.frame();

    assert_eq!(sim.node_count(), 2);
    assert_eq!(sim.world_size(), WorldSize::new(1024.0, 768.0).expect("valid"));
}
