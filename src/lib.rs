//! Weighted 2D graphs with Euclidean edge distances and Dijkstra shortest paths
//!
//! ```
//! use navgraph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex_at("A", 0.0, 0.0).unwrap();
//! graph.add_vertex_at("B", 3.0, 4.0).unwrap();
//! graph.add_edge("A", "B");
//! graph.compute_all_euclidean_distances();
//!
//! let tree = graph.dijkstra(&"A").unwrap();
//! assert_eq!(tree.cost(&"B"), Ok(Some(5.0)));
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use errors::{GraphError, Result};
pub use geometry::Point;
pub use graph::{DEFAULT_EDGE_COST, Graph, edge::{Edge, EdgeId, EdgeWeight}, vertex::Vertex};
pub use graph_algos::{ShortestPathTree, path_weight};
