//! The data records of the simulator. The graph stores a [`nodes::Node`]
//! per vertex and an [`edges::Edge`] per connection.

pub mod edges;
pub mod nodes;
