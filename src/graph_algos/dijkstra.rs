use crate::errors::{GraphError, Result};
use crate::graph::{Graph, edge::{Edge, EdgeWeight}};
use super::{Backpointer, VertexState, shortest_path::shortest_path};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};


impl<V> Graph<V>
where
    V: Eq + Hash + Clone + Debug,
{

    /// Single source shortest paths by Euclidean edge distance
    /// Run `compute_all_euclidean_distances` first, uncomputed edges count as 0
    pub fn dijkstra(&self, source: &V) -> Result<ShortestPathTree<'_, V>> {
        self.dijkstra_by(source, EdgeWeight::Distance)
    }

    /// Single source shortest paths summing the chosen edge attribute
    pub fn dijkstra_by(&self, source: &V, weight: EdgeWeight) -> Result<ShortestPathTree<'_, V>> {
        let source = self.index_of(source)?;
        let states = build_dijkstra_tree(self, source, weight)?;
        Ok(ShortestPathTree { graph: self, source, weight, states })
    }

    /// Edges on the shortest path from source to target, by edge distance
    /// Edges come out target side first, reverse for source to target order
    /// An unreachable target gives an empty path
    pub fn dijkstra_path(&self, source: &V, target: &V) -> Result<Vec<&Edge>> {
        self.dijkstra_path_by(source, target, EdgeWeight::Distance)
    }

    pub fn dijkstra_path_by(&self, source: &V, target: &V, weight: EdgeWeight) -> Result<Vec<&Edge>> {
        // Resolve the target before doing any work
        self.index_of(target)?;
        self.dijkstra_by(source, weight)?.path_to(target)
    }
}


/// Result of one Dijkstra run
/// Holds cost, visited flag and backpointer for every vertex of the graph
#[derive(Clone, Debug)]
pub struct ShortestPathTree<'g, V> {
    graph: &'g Graph<V>,
    source: usize,
    weight: EdgeWeight,
    states: Vec<VertexState>,
}

impl<'g, V> ShortestPathTree<'g, V>
where
    V: Eq + Hash + Clone + Debug,
{

    pub fn source(&self) -> &'g V {
        self.name_at(self.source)
    }

    pub fn weight(&self) -> EdgeWeight {
        self.weight
    }

    /// Cost of the cheapest path from the source, None if unreached
    pub fn cost(&self, name: &V) -> Result<Option<f64>> {
        Ok(self.state(name)?.cost)
    }

    /// Predecessor on the cheapest path, None for the source and unreached vertices
    pub fn backpointer(&self, name: &V) -> Result<Option<&'g V>> {
        Ok(self.state(name)?
            .backpointer
            .map(|backpointer| self.name_at(backpointer.vertex)))
    }

    pub fn is_visited(&self, name: &V) -> Result<bool> {
        Ok(self.state(name)?.visited)
    }

    /// Every reached vertex with its cost
    pub fn reached(&self) -> impl Iterator<Item = (&'g V, f64)> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter_map(|(index, state)| Some((self.name_at(index), state.cost?)))
    }

    /// Edges from the target back to the source
    pub fn path_to(&self, target: &V) -> Result<Vec<&'g Edge>> {
        let target_index = self.graph.index_of(target)?;
        let path = shortest_path(self.graph, &self.states, target_index);

        if path.is_empty() && target_index != self.source {
            warn!(source = ?self.source(), ?target, "target is unreachable");
        }
        Ok(path)
    }

    fn state(&self, name: &V) -> Result<&VertexState> {
        let index = self.graph.index_of(name)?;
        self.states.get(index).ok_or_else(|| GraphError::unknown(name))
    }

    fn name_at(&self, index: usize) -> &'g V {
        // states are sized to the graph, so every index is a vertex
        self.graph
            .vertex_at(index)
            .map(|v| v.name())
            .unwrap_or_else(|| unreachable!("vertex index {index} out of range"))
    }
}


/// Traverses the graph from source using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Runs until every reachable vertex is visited, returns the state of every vertex
fn build_dijkstra_tree<V>(graph: &Graph<V>, source: usize, weight: EdgeWeight) -> Result<Vec<VertexState>> {

    let mut states = vec![VertexState::default(); graph.vertex_count()];
    states[source].cost = Some(0.0);

    // Binary heap sorts biggest to smallest, NodeId flips the ordering
    // Vertices are pushed again when relaxed instead of updated in place,
    // older entries are skipped once the vertex is visited
    let mut nodes_to_visit: BinaryHeap<NodeId> = BinaryHeap::new();
    nodes_to_visit.push(NodeId {
        index: source,
        cost: OrderedFloat(0.0),
    });

    let mut visited = 0;
    while let Some(NodeId { index, cost }) = nodes_to_visit.pop() {

        if states[index].visited {
            trace!(index, cost = cost.0, "skipping stale queue entry");
            continue;
        }
        states[index].visited = true;
        visited += 1;

        let Some(vertex) = graph.vertex_at(index) else {
            continue;
        };

        for edge in vertex.edges() {
            let edge_cost = edge.weight(weight);

            if edge_cost < 0.0 || edge_cost.is_nan() {
                return Err(GraphError::NegativeWeight(edge_cost));
            }

            let target = &mut states[edge.target_index()];
            if target.visited {
                continue;
            }

            let new_cost = cost.0 + edge_cost;
            let improved = match target.cost {
                None => true,
                Some(current) => new_cost < current,
            };
            if !improved {
                continue;
            }

            trace!(from = index, to = edge.target_index(), new_cost, "relaxed edge");
            target.cost = Some(new_cost);
            target.backpointer = Some(Backpointer { vertex: index, edge: edge.id() });
            nodes_to_visit.push(NodeId {
                index: edge.target_index(),
                cost: OrderedFloat(new_cost),
            });
        }
    }

    debug!(source, visited, vertices = states.len(), ?weight, "dijkstra finished");
    Ok(states)
}


/// Queue entry
/// - for ordering we only need cost and a way to identify the vertex
#[derive(Debug)]
struct NodeId {
    index: usize,
    cost: OrderedFloat<f64>,
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for NodeId {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl Eq for NodeId {}
