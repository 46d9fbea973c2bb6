//! Resources shared by the simulator's systems.

pub mod events;
pub mod long_press;
pub mod simulator_vars;
