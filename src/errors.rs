use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("vertex {0} already exists")]
    DuplicateVertex(String), // name is already in the graph

    #[error("unknown vertex {0}")]
    UnknownVertex(String), // name is not in the graph

    #[error("invalid coordinate ({x}, {y})")]
    InvalidCoordinate { x: f64, y: f64 }, // NaN or infinite

    #[error("edge weight {0} is negative or NaN")]
    NegativeWeight(f64), // Dijkstra only handles non-negative weights
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub(crate) fn duplicate<V: std::fmt::Debug>(name: &V) -> Self {
        GraphError::DuplicateVertex(format!("{name:?}"))
    }

    pub(crate) fn unknown<V: std::fmt::Debug>(name: &V) -> Self {
        GraphError::UnknownVertex(format!("{name:?}"))
    }
}
