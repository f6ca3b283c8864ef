pub mod dijkstra;
mod shortest_path;

pub use dijkstra::ShortestPathTree;
pub use shortest_path::path_weight;

use crate::graph::edge::EdgeId;


/// Per-run state for one vertex
/// Lives outside the graph so every run starts from a clean slate
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct VertexState {
    pub visited: bool,
    pub cost: Option<f64>, // None until the vertex is reached
    pub backpointer: Option<Backpointer>,
}


/// Predecessor on the best known path, with the edge that led from it
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Backpointer {
    pub vertex: usize,
    pub edge: EdgeId,
}
