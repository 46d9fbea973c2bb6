pub mod components;
pub mod interaction;
pub mod ressources;
pub mod systems;

use glam::Vec2;
use indexmap::IndexMap;
use log::{debug, info, warn};
use petgraph::{
    stable_graph::{NodeIndex, StableDiGraph},
    visit::{EdgeRef, IntoEdgeReferences},
    EdgeType, Graph,
};
use quanta::Clock;
use rand::{rngs::StdRng, SeedableRng};
use shrev::ReaderId;
use std::time::Duration;

use crate::{
    error::SimulatorError,
    event_dispatcher::EventDispatcher,
    graph_data::{EdgeDisplay, GraphDisplayData, NodeDisplay},
    simulator::{
        components::{
            edges::Edge,
            nodes::{default_label, Node, NodeId},
        },
        interaction::InteractionState,
        ressources::{
            events::SimulatorEvent,
            long_press::LongPressTimer,
            simulator_vars::{SimulatorVars, WorldSize},
        },
        systems::{
            collision::resolve_collisions, force_compute::compute_edge_forces,
            position_compute::random_position, position_update::update_node_positions,
        },
    },
};

/// The graph the simulator runs on.
pub type NodeGraph = StableDiGraph<Node, Edge>;

/// Owns the bubble graph, the pointer interaction state and the tunables.
///
/// Everything runs on the thread owning the simulator. Other threads talk
/// to it through the [`EventDispatcher`] returned by
/// [`dispatcher`](Self::dispatcher); queued events are applied at the start
/// of the next [`frame`](Self::frame), never during a tick.
pub struct Simulator {
    graph: NodeGraph,
    /// Live nodes in creation order.
    nodes: IndexMap<NodeId, NodeIndex>,
    next_node_id: u64,
    next_gesture_id: u64,
    vars: SimulatorVars,
    world_size: WorldSize,
    interaction: InteractionState,
    long_press: LongPressTimer,
    rng: StdRng,
    dispatcher: EventDispatcher,
    event_reader: ReaderId<SimulatorEvent>,
}

impl Simulator {
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::default()
    }

    /// Runs one simulation step.
    ///
    /// Edge springs act first on the positions left by the previous tick,
    /// then every free node is integrated and contained, and finally all
    /// overlapping pairs receive a separating velocity for the next tick.
    pub fn tick(&mut self) {
        compute_edge_forces(&mut self.graph, self.vars.spring_stiffness);
        update_node_positions(&mut self.graph, &self.vars, self.world_size);
        resolve_collisions(
            &mut self.graph,
            self.nodes.values().copied(),
            self.vars.collision_damping,
        );
    }

    /// Runs everything belonging to one animation frame.
    ///
    /// Queued events are applied in the order they were sent, then a due
    /// long press fires, then the simulation ticks once. A release queued
    /// before the frame therefore always cancels the long press of its
    /// gesture.
    pub fn frame(&mut self) {
        let events = self.dispatcher.read(&mut self.event_reader);
        for event in &events {
            self.handle_event(event);
        }
        self.poll_long_press();
        self.tick();
    }

    /// Applies a single event immediately.
    pub fn handle_event(&mut self, event: &SimulatorEvent) {
        match *event {
            SimulatorEvent::PointerDown(point) => {
                self.pointer_down(point);
            }
            SimulatorEvent::PointerMove(point) => self.pointer_move(point),
            SimulatorEvent::PointerUp => self.pointer_up(),
            SimulatorEvent::LongPressElapsed(gesture) => {
                self.long_press_elapsed(gesture);
            }
            SimulatorEvent::AddNode => {
                self.add_node();
            }
            SimulatorEvent::Resized { width, height } => {
                if let Err(e) = self.set_world_size(width, height) {
                    warn!("Ignoring resize: {e}");
                }
            }
        }
    }

    /// A handle for sending events to this simulator from anywhere.
    pub fn dispatcher(&self) -> EventDispatcher {
        self.dispatcher.clone()
    }

    /// Adds an unconnected node at a random position away from the world
    /// boundary.
    pub fn add_node(&mut self) -> NodeId {
        let position = random_position(&mut self.rng, self.world_size, self.vars.spawn_padding);
        self.add_node_at(position)
    }

    /// Adds an unconnected node with the default radius.
    pub fn add_node_at(&mut self, position: Vec2) -> NodeId {
        let radius = self.vars.node_radius;
        self.spawn_node(position, radius)
    }

    /// Adds an unconnected node with its own radius.
    pub fn add_node_with_radius(
        &mut self,
        position: Vec2,
        radius: f32,
    ) -> Result<NodeId, SimulatorError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SimulatorError::InvalidRadius(radius));
        }
        Ok(self.spawn_node(position, radius))
    }

    pub(crate) fn spawn_node(&mut self, position: Vec2, radius: f32) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        let label = default_label(self.next_node_id);
        info!("[{0}] Created \"{1}\" at {2}", id, label, position);

        let idx = self.graph.add_node(Node::new(id, position, radius, label));
        self.nodes.insert(id, idx);
        id
    }

    /// Connects two existing nodes with a spring of the default rest length.
    ///
    /// Parallel edges are allowed and each one pulls on its own.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), SimulatorError> {
        if from == to {
            return Err(SimulatorError::SelfLoop(from));
        }
        let src = self.index_of(from)?;
        let target = self.index_of(to)?;
        self.connect(src, target);
        Ok(())
    }

    pub(crate) fn connect(&mut self, src: NodeIndex, target: NodeIndex) {
        info!(
            "Connected [{0}] -> [{1}]",
            self.graph[src].id, self.graph[target].id
        );
        let edge = Edge::new(self.vars.spring_neutral_length);
        self.graph.add_edge(src, target, edge);
    }

    /// Removes a node together with every edge touching it.
    ///
    /// Removing the selected node ends the current gesture.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, SimulatorError> {
        let idx = self
            .nodes
            .shift_remove(&id)
            .ok_or(SimulatorError::UnknownNode(id))?;
        if self.selected() == Some(id) {
            self.interaction = InteractionState::Idle;
            self.long_press.cancel();
        }
        info!("[{0}] Removed", id);
        self.graph
            .remove_node(idx)
            .ok_or(SimulatorError::UnknownNode(id))
    }

    /// Changes the containment rectangle. The next tick uses the new bounds.
    pub fn set_world_size(&mut self, width: f32, height: f32) -> Result<(), SimulatorError> {
        self.world_size = WorldSize::new(width, height)?;
        info!("World resized to {0}x{1}", width, height);
        Ok(())
    }

    /// Replaces the tunables. Existing edges keep their rest length.
    pub fn set_vars(&mut self, vars: SimulatorVars) -> Result<(), SimulatorError> {
        vars.validate()?;
        self.long_press.set_duration(vars.long_press_duration());
        self.vars = vars;
        Ok(())
    }

    /// Adds `delta` to a node's velocity. Dragged nodes ignore it.
    pub fn apply_impulse(&mut self, id: NodeId, delta: Vec2) -> Result<(), SimulatorError> {
        let idx = self.index_of(id)?;
        self.graph[idx].push(delta);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Live nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values().map(|&idx| &self.graph[idx])
    }

    /// Live edges as `(from, to, edge)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &Edge)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id,
                self.graph[edge.target()].id,
                edge.weight(),
            )
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn world_size(&self) -> WorldSize {
        self.world_size
    }

    pub fn vars(&self) -> &SimulatorVars {
        &self.vars
    }

    /// Read-only copy of everything a renderer needs for one frame.
    pub fn snapshot(&self) -> GraphDisplayData {
        let nodes = self
            .nodes()
            .map(|node| NodeDisplay {
                id: node.id,
                position: node.position,
                radius: node.radius,
                label: node.label.clone(),
                dragging: node.dragging,
            })
            .collect();
        let edges = self
            .graph
            .edge_references()
            .map(|edge| {
                let (src, target) = (&self.graph[edge.source()], &self.graph[edge.target()]);
                EdgeDisplay {
                    from: src.id,
                    to: target.id,
                    from_position: src.position,
                    to_position: target.position,
                }
            })
            .collect();
        GraphDisplayData {
            nodes,
            edges,
            world_size: self.world_size,
        }
    }

    fn index_of(&self, id: NodeId) -> Result<NodeIndex, SimulatorError> {
        self.nodes
            .get(&id)
            .copied()
            .ok_or(SimulatorError::UnknownNode(id))
    }
}

/// Builder for `Simulator`
pub struct SimulatorBuilder {
    vars: SimulatorVars,
    width: f32,
    height: f32,
    seed: Option<u64>,
    clock: Option<Clock>,
}

impl SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the rectangle nodes are kept in.
    ///
    /// Default: `1280.0 x 720.0`
    pub fn world_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Replaces all tunables at once.
    pub fn vars(mut self, vars: SimulatorVars) -> Self {
        self.vars = vars;
        self
    }

    /// How much velocity a node keeps each tick.
    ///
    /// `1.0` -> No friction
    ///
    /// Default: `0.98`
    pub fn friction(mut self, friction: f32) -> Self {
        self.vars.friction = friction;
        self
    }

    /// Velocity components below this are snapped to zero.
    ///
    /// Default: `0.01`
    pub fn min_speed(mut self, min_speed: f32) -> Self {
        self.vars.min_speed = min_speed;
        self
    }

    /// How strong the spring force should be.
    ///
    /// Default: `0.03`
    pub fn spring_stiffness(mut self, spring_stiffness: f32) -> Self {
        self.vars.spring_stiffness = spring_stiffness;
        self
    }

    /// Length of a edge in neutral position.
    ///
    /// If edge is shorter it pushes apart.
    /// If edge is longer it pulls together.
    ///
    /// Default: `120.0`
    pub fn spring_neutral_length(mut self, neutral_length: f32) -> Self {
        self.vars.spring_neutral_length = neutral_length;
        self
    }

    /// Share of velocity kept when a node bounces off the boundary.
    ///
    /// Default: `0.7`
    pub fn boundary_damping(mut self, damping: f32) -> Self {
        self.vars.boundary_damping = damping;
        self
    }

    /// Gap between nodes and the world boundary.
    ///
    /// Default: `5.0`
    pub fn boundary_margin(mut self, margin: f32) -> Self {
        self.vars.boundary_margin = margin;
        self
    }

    /// How hard overlapping nodes are pushed apart.
    ///
    /// Default: `0.8`
    pub fn collision_damping(mut self, damping: f32) -> Self {
        self.vars.collision_damping = damping;
        self
    }

    /// Radius of new nodes. Must be positive.
    ///
    /// Default: `30.0`
    pub fn node_radius(mut self, radius: f32) -> Self {
        self.vars.node_radius = radius;
        self
    }

    /// Distance from the boundary kept when placing unconnected nodes.
    ///
    /// Default: `100.0`
    pub fn spawn_padding(mut self, padding: f32) -> Self {
        self.vars.spawn_padding = padding;
        self
    }

    /// Distance between a long-pressed node and the node it creates.
    ///
    /// Default: `100.0`
    pub fn spawn_distance(mut self, distance: f32) -> Self {
        self.vars.spawn_distance = distance;
        self
    }

    /// How long the pointer must rest on a node to create a connected node.
    ///
    /// Stored with millisecond granularity, sub-millisecond parts are dropped.
    ///
    /// Default: `500ms`
    pub fn long_press_duration(mut self, duration: Duration) -> Self {
        self.vars.long_press_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Seeds node placement so runs are reproducible.
    ///
    /// Default: seeded from the operating system
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clock driving the long-press timer. Pass a mocked
    /// [`quanta::Clock`] to control time.
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Constructs a instance of `Simulator`
    pub fn build(self) -> Result<Simulator, SimulatorError> {
        self.vars.validate()?;
        let world_size = WorldSize::new(self.width, self.height)?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let clock = self.clock.unwrap_or_else(Clock::new);
        let dispatcher = EventDispatcher::new();
        let event_reader = dispatcher.register_reader();

        debug!("Simulator built with {0:?}", self.vars);
        Ok(Simulator {
            graph: NodeGraph::default(),
            nodes: IndexMap::new(),
            next_node_id: 0,
            next_gesture_id: 0,
            long_press: LongPressTimer::new(clock, self.vars.long_press_duration()),
            vars: self.vars,
            world_size,
            interaction: InteractionState::Idle,
            rng,
            dispatcher,
            event_reader,
        })
    }

    /// Constructs a `Simulator` seeded with the nodes and edges of `graph`.
    ///
    /// Nodes are placed at random and labeled in index order. Self-loops are
    /// skipped.
    pub fn build_from_graph<N, E, Ty: EdgeType>(
        self,
        graph: &Graph<N, E, Ty>,
    ) -> Result<Simulator, SimulatorError> {
        let mut simulator = self.build()?;
        let ids: Vec<NodeId> = graph.node_indices().map(|_| simulator.add_node()).collect();
        for edge in graph.edge_references() {
            let (src, target) = (ids[edge.source().index()], ids[edge.target().index()]);
            if src == target {
                debug!("[{0}] Skipping self-loop", src);
                continue;
            }
            simulator.add_edge(src, target)?;
        }
        Ok(simulator)
    }
}

impl Default for SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    fn default() -> Self {
        let world_size = WorldSize::default();
        Self {
            vars: SimulatorVars::default(),
            width: world_size.width,
            height: world_size.height,
            seed: None,
            clock: None,
        }
    }
}
