//! # Example
//! ```no_run
//!use bubbles::prelude::*;
//!use glam::Vec2;
//!
//!let mut simulator = Simulator::builder()
//!    .world_size(800.0, 600.0)
//!    .build()
//!    .expect("valid simulator");
//!
//!let first = simulator.add_node();
//!let second = simulator.add_node();
//!simulator.add_edge(first, second).expect("both nodes exist");
//!
//!// Feed input from anywhere, e.g. a window event loop.
//!let dispatcher = simulator.dispatcher();
//!dispatcher.send(SimulatorEvent::PointerDown(Vec2::new(400.0, 300.0)));
//!
//!// Once per animation frame.
//!loop {
//!    simulator.frame();
//!    let snapshot = simulator.snapshot();
//!    // draw `snapshot`
//!#   break;
//!}
//! ```

pub mod error;
pub mod event_dispatcher;
pub mod graph_data;
#[cfg(feature = "winit")]
pub mod input;
pub mod simulator;

/// Exports all the core types of the library.
pub mod prelude {
    pub use crate::error::SimulatorError;
    pub use crate::event_dispatcher::EventDispatcher;
    pub use crate::graph_data::{EdgeDisplay, GraphDisplayData, NodeDisplay};
    #[cfg(feature = "winit")]
    pub use crate::input::PointerTranslator;
    pub use crate::simulator::components::{
        edges::Edge,
        nodes::{Node, NodeId},
    };
    pub use crate::simulator::interaction::{InteractionState, Selection};
    pub use crate::simulator::ressources::events::{GestureId, SimulatorEvent};
    pub use crate::simulator::ressources::simulator_vars::{SimulatorVars, WorldSize};
    pub use crate::simulator::{Simulator, SimulatorBuilder};
}
