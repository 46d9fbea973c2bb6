//! Pointer gestures: selecting, dragging and long-pressing nodes.
//!
//! A press on a node selects it, pins it to the pointer and starts the
//! long-press countdown. Releasing before the countdown ends is a plain
//! drag. Holding past it spawns a connected node next to the pressed one
//! and ends the gesture.

use glam::Vec2;
use log::{debug, info};
use rand::Rng;
use std::f32::consts::TAU;

use super::{
    components::nodes::NodeId, ressources::events::GestureId,
    systems::location_detect::point_intersect, Simulator,
};

/// A node owned by the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub node: NodeId,
    /// Pointer position minus node center at press time.
    pub offset: Vec2,
    pub gesture: GestureId,
}

/// Where the pointer protocol currently stands.
///
/// While `Dragging`, the long-press countdown of the same gesture may still
/// be running; see [`Simulator::long_press_pending`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(Selection),
}

impl Simulator {
    /// Presses the pointer at `point`.
    ///
    /// Selects the first node in creation order containing the point and
    /// starts a long-press countdown for it. Returns the new gesture, or
    /// `None` if nothing was hit. A press while another gesture is still
    /// open releases that gesture first.
    pub fn pointer_down(&mut self, point: Vec2) -> Option<GestureId> {
        if matches!(self.interaction, InteractionState::Dragging(_)) {
            self.pointer_up();
        }

        let idx = point_intersect(&self.graph, self.nodes.values().copied(), point)?;
        let gesture = GestureId(self.next_gesture_id);
        self.next_gesture_id += 1;

        let node = &mut self.graph[idx];
        node.dragging = true;
        node.velocity = Vec2::ZERO;
        let selection = Selection {
            node: node.id,
            offset: point - node.position,
            gesture,
        };
        debug!("[{0}] Drag start ({1})", selection.node, gesture);

        self.interaction = InteractionState::Dragging(selection);
        self.long_press.arm(gesture);
        Some(gesture)
    }

    /// Moves the dragged node, if any, so it keeps its offset to `point`.
    pub fn pointer_move(&mut self, point: Vec2) {
        let InteractionState::Dragging(selection) = self.interaction else {
            return;
        };
        let Some(&idx) = self.nodes.get(&selection.node) else {
            return;
        };
        let node = &mut self.graph[idx];
        if node.dragging {
            node.position = point - selection.offset;
            node.velocity = Vec2::ZERO;
        }
    }

    /// Releases the pointer.
    ///
    /// Always cancels the long-press countdown, then lets go of the
    /// selected node.
    pub fn pointer_up(&mut self) {
        self.long_press.cancel();
        let InteractionState::Dragging(selection) = std::mem::take(&mut self.interaction) else {
            return;
        };
        if let Some(&idx) = self.nodes.get(&selection.node) {
            self.graph[idx].dragging = false;
        }
        debug!("[{0}] Drag end ({1})", selection.node, selection.gesture);
    }

    /// The long-press countdown of `gesture` ran out.
    ///
    /// If `gesture` is still the open gesture, a new node is created at
    /// [`spawn_distance`](crate::prelude::SimulatorVars::spawn_distance) from
    /// the selected node in a random direction, connected to it by an edge,
    /// and the gesture ends. Returns the new node. Stale gestures are
    /// ignored.
    pub fn long_press_elapsed(&mut self, gesture: GestureId) -> Option<NodeId> {
        let InteractionState::Dragging(selection) = self.interaction else {
            debug!("Long press {0} without selection", gesture);
            return None;
        };
        if selection.gesture != gesture {
            debug!("Stale long press {0}", gesture);
            return None;
        }
        self.long_press.cancel();
        self.interaction = InteractionState::Idle;

        let src = *self.nodes.get(&selection.node)?;
        self.graph[src].dragging = false;

        let angle = self.rng.gen_range(0.0..TAU);
        let position =
            self.graph[src].position + Vec2::from_angle(angle) * self.vars.spawn_distance;
        let id = self.add_node_at(position);
        let target = *self.nodes.get(&id)?;
        self.connect(src, target);
        info!("[{0}] Long press spawned [{1}]", selection.node, id);
        Some(id)
    }

    /// Fires the long press if its countdown has run out.
    pub fn poll_long_press(&mut self) -> Option<NodeId> {
        let gesture = self.long_press.take_due()?;
        self.long_press_elapsed(gesture)
    }

    /// The node owned by the pointer.
    pub fn selected(&self) -> Option<NodeId> {
        match self.interaction {
            InteractionState::Dragging(selection) => Some(selection.node),
            InteractionState::Idle => None,
        }
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Whether a long-press countdown is running.
    pub fn long_press_pending(&self) -> bool {
        self.long_press.is_armed()
    }
}
