//! The passes making up one simulation tick, plus pointer hit-testing.

pub mod collision;
pub mod force_compute;
pub mod location_detect;
pub mod position_compute;
pub mod position_update;
