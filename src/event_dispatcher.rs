use shrev::{EventChannel, ReaderId};
use std::sync::{Arc, PoisonError, RwLock};

use crate::simulator::ressources::events::SimulatorEvent;

/// Queue of events for one [`Simulator`](crate::simulator::Simulator).
///
/// Cloning yields another handle to the same queue, so input can be fed
/// from any thread while the simulator thread drains it once per frame.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    pub sim_chan: Arc<RwLock<EventChannel<SimulatorEvent>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an event for the next frame.
    pub fn send(&self, event: SimulatorEvent) {
        self.sim_chan
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .single_write(event);
    }

    pub fn register_reader(&self) -> ReaderId<SimulatorEvent> {
        self.sim_chan
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register_reader()
    }

    /// Events sent since `reader` last read, oldest first.
    pub fn read(&self, reader: &mut ReaderId<SimulatorEvent>) -> Vec<SimulatorEvent> {
        self.sim_chan
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .read(reader)
            .cloned()
            .collect()
    }
}
