#![allow(dead_code)]

use navgraph::{Edge, Graph};
use tracing_subscriber::EnvFilter;

/// Show library logs with RUST_LOG=navgraph=trace
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Vertex names along a path, source first
/// Paths come back target side first
pub fn vertex_names<'g>(graph: &'g Graph<&'static str>, path: &[&Edge]) -> Vec<&'g str> {
    let mut names: Vec<&str> = path
        .iter()
        .rev()
        .map(|edge| *graph.source_of(edge).unwrap())
        .collect();
    if let Some(last) = path.first() {
        names.push(*graph.target_of(last).unwrap());
    }
    names
}
