/// Edge identifier: index of the source vertex and position in its outgoing list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub(crate) source: usize,
    pub(crate) slot: usize,
}


/// Which edge attribute a shortest path run adds up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeWeight {
    /// Euclidean distance, filled in by `Graph::compute_all_euclidean_distances`
    #[default]
    Distance,
    /// Static cost given when the edge was added
    Cost,
}


/// Directed edge, owned by its source vertex
/// Endpoints are vertex indices into the owning graph
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub(crate) id: EdgeId,
    pub(crate) target: usize,
    pub(crate) cost: f64,
    pub(crate) distance: f64, // 0 until distances are computed
}

impl Edge {

    pub(crate) fn new(id: EdgeId, target: usize, cost: f64) -> Self {
        Self {
            id,
            target,
            cost,
            distance: 0.0,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Euclidean length between the endpoints as of the last distance pass
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn weight(&self, weight: EdgeWeight) -> f64 {
        match weight {
            EdgeWeight::Distance => self.distance,
            EdgeWeight::Cost => self.cost,
        }
    }

    pub(crate) fn source_index(&self) -> usize {
        self.id.source
    }

    pub(crate) fn target_index(&self) -> usize {
        self.target
    }
}
