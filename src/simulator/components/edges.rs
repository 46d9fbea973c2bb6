//! Components which make up an edge

/// A directed spring between two nodes.
///
/// The endpoints are held by the graph the edge lives in, so an edge never
/// outlives either of its nodes.
#[derive(Clone, Debug)]
pub struct Edge {
    /// Length at which the spring exerts no force.
    ///
    /// If edge is shorter it pushes apart.
    /// If edge is longer it pulls together.
    pub rest_length: f32,
}

impl Edge {
    #[inline(always)]
    pub const fn new(rest_length: f32) -> Self {
        Self { rest_length }
    }
}
