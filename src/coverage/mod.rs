//! Center placement and coverage reporting module

pub mod placement;
pub mod metrics;

pub use placement::{place_centers, CoverageEngine};

use serde::{Serialize, Deserialize};
use crate::graph::NodeId;

/// Full reach of one chosen center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterCoverage {
    /// The center node
    pub center: NodeId,

    /// Every node within the radius of the center, ascending
    pub covered: Vec<NodeId>,
}

/// Outcome of one placement run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    /// Coverage radius the run used
    pub radius: u32,

    /// Number of nodes in the graph
    pub node_count: usize,

    /// Centers in selection order
    pub centers: Vec<NodeId>,

    /// Per-center reach, in selection order
    pub coverage: Vec<CenterCoverage>,

    /// Nodes not reached by any center, ascending
    pub uncovered: Vec<NodeId>,

    /// Sum of population over all nodes
    pub total_population: u64,

    /// Sum of population over covered nodes
    pub covered_population: u64,

    /// 100 * covered / total, unrounded; 0 when total population is zero
    pub coverage_percent: f64,
}

impl PlacementResult {
    /// Result for a graph with no nodes
    pub fn empty(radius: u32) -> Self {
        Self {
            radius,
            node_count: 0,
            centers: Vec::new(),
            coverage: Vec::new(),
            uncovered: Vec::new(),
            total_population: 0,
            covered_population: 0,
            coverage_percent: 0.0,
        }
    }

    /// Number of centers placed
    pub fn center_count(&self) -> usize {
        self.centers.len()
    }

    /// Nodes reached by `center`, if it was chosen
    pub fn covered_by(&self, center: NodeId) -> Option<&[NodeId]> {
        self.coverage.iter()
            .find(|c| c.center == center)
            .map(|c| c.covered.as_slice())
    }

    /// True when no node was left uncovered
    pub fn is_fully_covered(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// Population living at uncovered nodes
    pub fn uncovered_population(&self) -> u64 {
        self.total_population - self.covered_population
    }
}
