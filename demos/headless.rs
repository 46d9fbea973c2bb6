//! Drives a simulator without a window: adds a few bubbles, drags one,
//! long-presses another and prints the final frame as JSON.

use std::{thread, time::Duration};

use bubbles::prelude::*;
use glam::Vec2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut simulator = Simulator::builder()
        .world_size(800.0, 600.0)
        .long_press_duration(Duration::from_millis(50))
        .seed(2024)
        .build()?;
    let dispatcher = simulator.dispatcher();

    let hub = simulator.add_node_at(Vec2::new(400.0, 300.0));
    for _ in 0..3 {
        let leaf = simulator.add_node();
        simulator.add_edge(hub, leaf)?;
    }

    // Drag the hub to the left.
    dispatcher.send(SimulatorEvent::PointerDown(Vec2::new(400.0, 300.0)));
    for step in 1..=20 {
        let x = 400.0 - 10.0 * step as f32;
        dispatcher.send(SimulatorEvent::PointerMove(Vec2::new(x, 300.0)));
        simulator.frame();
    }
    dispatcher.send(SimulatorEvent::PointerUp);

    for _ in 0..120 {
        simulator.frame();
    }

    // Hold the pointer on the hub until a connected bubble appears.
    let position = simulator.node(hub).ok_or("hub vanished")?.position;
    dispatcher.send(SimulatorEvent::PointerDown(position));
    simulator.frame();
    thread::sleep(Duration::from_millis(60));
    for _ in 0..240 {
        simulator.frame();
    }
    dispatcher.send(SimulatorEvent::PointerUp);
    simulator.frame();

    println!("{}", simulator.snapshot().to_json()?);
    Ok(())
}
