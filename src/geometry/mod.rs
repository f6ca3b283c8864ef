use num_traits::Float;
use crate::errors::{GraphError, Result};


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// 2D Point
/// Vertices without explicit coordinates sit at the origin
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    /// Create a new point, rejecting NaN and infinite coordinates
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GraphError::InvalidCoordinate { x, y });
        }
        Ok(Self { x, y })
    }

    /// Straight line distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}
