use crate::graph::{Graph, edge::{Edge, EdgeWeight}};
use super::VertexState;

/// Walk backpointers from the target to the source, collecting the edges taken
/// The path comes out target side first, reverse it for source to target order
/// Unreached targets and the source itself give an empty path
/// states: per vertex state of a finished run
/// target: index of the target vertex
pub(crate) fn shortest_path<'g, V>(graph: &'g Graph<V>, states: &[VertexState], target: usize) -> Vec<&'g Edge> {

    let mut path = Vec::new();
    let mut current = target;

    // Backpointers always lead to a vertex visited earlier, so this ends at the source
    while let Some(backpointer) = states.get(current).and_then(|s| s.backpointer) {
        if let Some(edge) = graph.edge(backpointer.edge) {
            path.push(edge);
        }
        current = backpointer.vertex;
    }

    path
}

/// Total weight of a path
pub fn path_weight(path: &[&Edge], weight: EdgeWeight) -> f64 {
    path.iter().map(|edge| edge.weight(weight)).sum()
}
