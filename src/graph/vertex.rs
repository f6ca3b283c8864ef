use std::hash::{Hash, Hasher};

use crate::errors::Result;
use crate::geometry::Point;
use super::edge::Edge;


/// Named vertex on a 2D plane along with its outgoing edges
/// Equality and hashing only look at the name, so a vertex keeps its identity as edges are added
#[derive(Clone, Debug)]
pub struct Vertex<V> {
    name: V,
    position: Point,
    pub(crate) edges: Vec<Edge>, // outgoing edges, in insertion order
}

impl<V> Vertex<V> {

    /// Create a vertex at the origin
    pub fn new(name: V) -> Self {
        Self {
            name,
            position: Point::default(),
            edges: Vec::new(),
        }
    }

    /// Create a vertex at (x, y)
    pub fn at(name: V, x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            name,
            position: Point::new(x, y)?,
            edges: Vec::new(),
        })
    }

    pub fn name(&self) -> &V {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Outgoing edges of this vertex
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl<V: PartialEq> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl<V: Eq> Eq for Vertex<V> {}

impl<V: Hash> Hash for Vertex<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
