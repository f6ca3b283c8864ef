pub mod edge;
pub mod vertex;

use std::{fmt::{self, Debug, Display}, hash::Hash, io};

use indexmap::map::Entry::{Occupied, Vacant};
use tracing::debug;

use crate::collections::FxIndexMap;
use crate::errors::{GraphError, Result};
use crate::geometry::Point;
use edge::{Edge, EdgeId};
use vertex::Vertex;


/// Cost given to edges added without an explicit one
pub const DEFAULT_EDGE_COST: f64 = 1.0;


/// Directed weighted graph stored as adjacency lists
/// V: vertex name - unique within the graph
///
/// Vertices are never removed, so the index a vertex gets on insertion
/// stays valid for the lifetime of the graph, edges refer to their endpoints by that index
#[derive(Clone, Debug)]
pub struct Graph<V> {
    vertices: FxIndexMap<V, Vertex<V>>,
    edge_count: usize,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: FxIndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: FxIndexMap::with_capacity_and_hasher(vertices, Default::default()),
            edge_count: 0,
        }
    }

    /// Add a vertex at the origin
    /// Fails if the name is already taken
    pub fn add_vertex(&mut self, name: V) -> Result<()> {
        self.insert_vertex(Vertex::new(name))
    }

    /// Add a vertex at (x, y)
    pub fn add_vertex_at(&mut self, name: V, x: f64, y: f64) -> Result<()> {
        self.insert_vertex(Vertex::at(name, x, y)?)
    }

    /// Add a prebuilt vertex
    /// The graph is left untouched when the name already exists
    pub fn insert_vertex(&mut self, vertex: Vertex<V>) -> Result<()> {
        match self.vertices.entry(vertex.name().clone()) {
            Occupied(e) => Err(GraphError::duplicate(e.key())),
            Vacant(e) => {
                debug!(vertex = ?e.key(), index = e.index(), "added vertex");
                e.insert(vertex);
                Ok(())
            }
        }
    }

    /// Add a directed edge from u to w with the default cost
    pub fn add_edge(&mut self, u: V, w: V) -> EdgeId {
        self.add_edge_with_cost(u, w, DEFAULT_EDGE_COST)
    }

    /// Add a directed edge from u to w
    /// Missing endpoints are created at the origin, parallel edges are allowed
    pub fn add_edge_with_cost(&mut self, u: V, w: V, cost: f64) -> EdgeId {
        let source = self.ensure_vertex(u);
        let target = self.ensure_vertex(w);

        let vertex = &mut self.vertices[source];
        let id = EdgeId { source, slot: vertex.edges.len() };
        vertex.edges.push(Edge::new(id, target, cost));
        self.edge_count += 1;

        debug!(source, target, cost, "added edge");
        id
    }

    /// Add two independent directed edges, u -> v and v -> u
    pub fn add_undirected_edge(&mut self, u: V, v: V, cost: f64) -> (EdgeId, EdgeId) {
        let forward = self.add_edge_with_cost(u.clone(), v.clone(), cost);
        let backward = self.add_edge_with_cost(v, u, cost);
        (forward, backward)
    }

    /// Move a vertex
    /// Edge distances are stale until `compute_all_euclidean_distances` runs again
    pub fn set_position(&mut self, name: &V, x: f64, y: f64) -> Result<()> {
        let position = Point::new(x, y)?;
        let vertex = self.vertices
            .get_mut(name)
            .ok_or_else(|| GraphError::unknown(name))?;
        vertex.set_position(position);
        Ok(())
    }

    /// Set every edge's distance to the straight line length between its endpoints
    pub fn compute_all_euclidean_distances(&mut self) {
        let positions: Vec<Point> = self.vertices.values().map(Vertex::position).collect();

        for vertex in self.vertices.values_mut() {
            let from = vertex.position();
            for edge in vertex.edges.iter_mut() {
                edge.distance = from.distance_to(&positions[edge.target_index()]);
            }
        }
        debug!(edges = self.edge_count, "computed euclidean distances");
    }

    pub fn vertex(&self, name: &V) -> Option<&Vertex<V>> {
        self.vertices.get(name)
    }

    pub fn contains_vertex(&self, name: &V) -> bool {
        self.vertices.contains_key(name)
    }

    /// Outgoing edges of a vertex
    pub fn edges(&self, name: &V) -> Result<&[Edge]> {
        self.vertices
            .get(name)
            .map(Vertex::edges)
            .ok_or_else(|| GraphError::unknown(name))
    }

    pub(crate) fn index_of(&self, name: &V) -> Result<usize> {
        self.vertices
            .get_index_of(name)
            .ok_or_else(|| GraphError::unknown(name))
    }

    fn ensure_vertex(&mut self, name: V) -> usize {
        match self.vertices.entry(name) {
            Occupied(e) => e.index(),
            Vacant(e) => {
                debug!(vertex = ?e.key(), index = e.index(), "added edge endpoint");
                let index = e.index();
                let vertex = Vertex::new(e.key().clone());
                e.insert(vertex);
                index
            }
        }
    }
}

impl<V> Graph<V> {

    /// All vertices, in no particular order
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex<V>> {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.vertex_at(id.source)?.edges.get(id.slot)
    }

    /// Name of the vertex an edge leaves from
    pub fn source_of(&self, edge: &Edge) -> Option<&V> {
        self.vertex_at(edge.source_index()).map(Vertex::name)
    }

    /// Name of the vertex an edge points to
    pub fn target_of(&self, edge: &Edge) -> Option<&V> {
        self.vertex_at(edge.target_index()).map(Vertex::name)
    }

    pub(crate) fn vertex_at(&self, index: usize) -> Option<&Vertex<V>> {
        self.vertices.get_index(index).map(|(_, v)| v)
    }
}

impl<V: Display> Graph<V> {

    /// Write one `name -> [ successor ... ]` line per vertex
    pub fn write_adjacency_list<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }

    pub fn print_adjacency_list(&self) {
        print!("{self}");
    }
}

impl<V: Display> Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices.values() {
            write!(f, "{} -> [ ", vertex.name())?;
            for edge in vertex.edges() {
                if let Some(target) = self.vertex_at(edge.target_index()) {
                    write!(f, "{} ", target.name())?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn names<'a>(graph: &'a Graph<&'static str>, edges: &[Edge]) -> Vec<&'a str> {
        edges.iter().map(|e| *graph.target_of(e).unwrap()).collect()
    }

    #[test]
    fn test_duplicate_vertex_leaves_graph_unchanged() {
        let mut graph = Graph::new();
        graph.add_vertex_at("A", 1.0, 2.0).unwrap();

        let result = graph.add_vertex_at("A", 9.0, 9.0);
        assert_eq!(result, Err(GraphError::DuplicateVertex("\"A\"".to_string())));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.vertex(&"A").unwrap().position(), Point { x: 1.0, y: 2.0 });

        assert!(graph.insert_vertex(Vertex::new("A")).is_err());
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_creates_missing_endpoints() {
        let mut graph = Graph::new();
        let id = graph.add_edge_with_cost("A", "B", 2.5);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        for name in ["A", "B"] {
            assert_eq!(graph.vertex(&name).unwrap().position(), Point::default());
        }

        let edge = graph.edge(id).unwrap();
        assert_eq!(graph.source_of(edge), Some(&"A"));
        assert_eq!(graph.target_of(edge), Some(&"B"));
        assert_eq!(edge.cost(), 2.5);
        assert_eq!(edge.distance(), 0.0);
        assert!(graph.edges(&"B").unwrap().is_empty());
    }

    #[test]
    fn test_add_edge_default_cost_and_parallel_edges() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge_with_cost("A", "B", 4.0);

        let edges = graph.edges(&"A").unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].cost(), DEFAULT_EDGE_COST);
        assert_eq!(edges[1].cost(), 4.0);
        assert_eq!(names(&graph, edges), vec!["B", "B"]);
    }

    #[test]
    fn test_add_undirected_edge_adds_two_directed_edges() {
        let mut graph = Graph::new();
        let (forward, backward) = graph.add_undirected_edge("U", "V", 3.0);

        assert_eq!(graph.edge_count(), 2);
        let forward = graph.edge(forward).unwrap();
        let backward = graph.edge(backward).unwrap();
        assert_eq!((graph.source_of(forward), graph.target_of(forward)), (Some(&"U"), Some(&"V")));
        assert_eq!((graph.source_of(backward), graph.target_of(backward)), (Some(&"V"), Some(&"U")));
        assert_eq!(forward.cost(), 3.0);
        assert_eq!(backward.cost(), 3.0);
    }

    #[test]
    fn test_compute_all_euclidean_distances() {
        let mut graph = Graph::new();
        graph.add_vertex_at("A", 0.0, 0.0).unwrap();
        graph.add_vertex_at("B", 3.0, 4.0).unwrap();
        let ab = graph.add_edge_with_cost("A", "B", 100.0);
        let ba = graph.add_edge("B", "A");

        graph.compute_all_euclidean_distances();
        assert_relative_eq!(graph.edge(ab).unwrap().distance(), 5.0);
        assert_relative_eq!(graph.edge(ba).unwrap().distance(), 5.0);
        assert_eq!(graph.edge(ab).unwrap().cost(), 100.0);

        // distances only follow coordinates after another pass
        graph.set_position(&"B", 6.0, 8.0).unwrap();
        assert_relative_eq!(graph.edge(ab).unwrap().distance(), 5.0);
        graph.compute_all_euclidean_distances();
        assert_relative_eq!(graph.edge(ab).unwrap().distance(), 10.0);
    }

    #[test]
    fn test_unknown_vertex_lookups() {
        let mut graph: Graph<&str> = Graph::new();
        assert!(graph.vertex(&"X").is_none());
        assert!(matches!(graph.edges(&"X"), Err(GraphError::UnknownVertex(_))));
        assert!(matches!(graph.set_position(&"X", 1.0, 1.0), Err(GraphError::UnknownVertex(_))));
    }

    #[test]
    fn test_empty_graph_and_membership() {
        let mut graph: Graph<u32> = Graph::with_capacity(8);
        assert!(graph.is_empty());
        assert!(!graph.contains_vertex(&1));

        graph.add_edge(1, 2);
        assert!(!graph.is_empty());
        assert!(graph.contains_vertex(&1));
        assert!(graph.contains_vertex(&2));
        assert!(!graph.contains_vertex(&3));

        // goes to stdout, only checks it runs
        graph.print_adjacency_list();
    }

    #[test]
    fn test_adjacency_list_dump() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_vertex("D").unwrap();

        let mut out = Vec::new();
        graph.write_adjacency_list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines: Vec<_> = text.lines().collect();
        lines.sort();
        assert_eq!(lines, vec!["A -> [ B C ]", "B -> [ ]", "C -> [ ]", "D -> [ ]"]);
    }
}
