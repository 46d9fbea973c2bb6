//! Translation of winit window events into simulator events.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};

use crate::{event_dispatcher::EventDispatcher, simulator::ressources::events::SimulatorEvent};

/// Turns raw window input into pointer events.
///
/// Window coordinates are used as simulation coordinates. Mouse buttons do
/// not carry a position in winit, so the last cursor position is
/// remembered. Only the first active touch drives the pointer.
#[derive(Debug, Default)]
pub struct PointerTranslator {
    cursor: Vec2,
    touch: Option<u64>,
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &WindowEvent<'_>) -> Option<SimulatorEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(SimulatorEvent::PointerMove(self.cursor))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => SimulatorEvent::PointerDown(self.cursor),
                ElementState::Released => SimulatorEvent::PointerUp,
            }),
            WindowEvent::Touch(Touch {
                phase,
                location,
                id,
                ..
            }) => {
                match self.touch {
                    Some(active) if active != *id => return None,
                    None if *phase != TouchPhase::Started => return None,
                    _ => {}
                }
                self.cursor = Vec2::new(location.x as f32, location.y as f32);
                Some(match phase {
                    TouchPhase::Started => {
                        self.touch = Some(*id);
                        SimulatorEvent::PointerDown(self.cursor)
                    }
                    TouchPhase::Moved => SimulatorEvent::PointerMove(self.cursor),
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        self.touch = None;
                        SimulatorEvent::PointerUp
                    }
                })
            }
            WindowEvent::Resized(size) => Some(SimulatorEvent::Resized {
                width: size.width as f32,
                height: size.height as f32,
            }),
            _ => None,
        }
    }

    /// Translates `event` and queues the result, if any.
    pub fn dispatch(&mut self, event: &WindowEvent<'_>, dispatcher: &EventDispatcher) {
        if let Some(event) = self.translate(event) {
            dispatcher.send(event);
        }
    }
}
