//! Greedy maximum-coverage center placement

use std::cmp::Reverse;
use std::collections::BTreeSet;
use rayon::prelude::*;
use crate::coverage::metrics::CoverageStats;
use crate::coverage::{CenterCoverage, PlacementResult};
use crate::error::CoverageError;
use crate::graph::{NodeId, Reachability};

/// Graph size at which the candidate scan runs on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Places centers on a graph so every node is within `radius` hops of one
pub struct CoverageEngine<'g, G: ?Sized> {
    graph: &'g G,
    radius: u32,
    parallel_threshold: usize,
}

impl<'g, G: Reachability + Sync + ?Sized> CoverageEngine<'g, G> {
    /// Validate the radius and bind the engine to a graph
    pub fn new(graph: &'g G, radius: i64) -> Result<Self, CoverageError> {
        if radius < 0 {
            return Err(CoverageError::InvalidRadius(radius));
        }

        // Anything past u32::MAX hops already spans every graph we can index
        let radius = u32::try_from(radius).unwrap_or(u32::MAX);

        Ok(Self {
            graph,
            radius,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    /// Override the node count at which candidate scans go parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Coverage radius in hops
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Every node within the radius of `node`
    pub fn coverage_set(&self, node: NodeId) -> Result<BTreeSet<NodeId>, CoverageError> {
        Ok(self.graph.nodes_within(node, self.radius)?)
    }

    /// Number of still-uncovered nodes `node` would cover
    pub fn gain(&self, node: NodeId, uncovered: &BTreeSet<NodeId>) -> Result<usize, CoverageError> {
        Ok(self.coverage_set(node)?.intersection(uncovered).count())
    }

    /// Highest-gain candidate; ties go to the earliest candidate
    fn best_candidate(
        &self,
        candidates: &[NodeId],
        uncovered: &BTreeSet<NodeId>,
    ) -> Result<Option<(NodeId, usize)>, CoverageError> {
        if candidates.len() < self.parallel_threshold {
            let mut best: Option<(NodeId, usize)> = None;
            for &node in candidates {
                let gain = self.gain(node, uncovered)?;
                if best.map_or(true, |(_, best_gain)| gain > best_gain) {
                    best = Some((node, gain));
                }
            }
            return Ok(best);
        }

        // Position breaks ties so the winner matches the sequential scan
        let scored = candidates.par_iter()
            .enumerate()
            .map(|(pos, &node)| self.gain(node, uncovered).map(|gain| (gain, Reverse(pos), node)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(scored.into_iter()
            .max_by_key(|&(gain, pos, _)| (gain, pos))
            .map(|(gain, _, node)| (node, gain)))
    }

    /// Run the greedy loop and return centers in selection order
    ///
    /// Every node is a candidate each round, including ones already covered
    /// and ones already chosen.
    pub fn select_centers(&self) -> Result<Vec<NodeId>, CoverageError> {
        let candidates: Vec<NodeId> = self.graph.node_ids().collect();
        let mut uncovered: BTreeSet<NodeId> = candidates.iter().copied().collect();
        let mut centers = Vec::new();

        while !uncovered.is_empty() {
            let (center, gain) = match self.best_candidate(&candidates, &uncovered)? {
                Some(best) if best.1 > 0 => best,
                _ => return Err(CoverageError::Stalled(uncovered.len())),
            };

            let newly_covered = self.coverage_set(center)?;
            for node in &newly_covered {
                uncovered.remove(node);
            }

            log::debug!(
                "Selected center {} covering {} new nodes, {} remaining",
                center,
                gain,
                uncovered.len()
            );

            centers.push(center);
        }

        Ok(centers)
    }

    /// Place centers and report their full reach and population coverage
    pub fn run(&self) -> Result<PlacementResult, CoverageError> {
        let node_count = self.graph.node_count();
        log::info!("Placing centers on {} nodes with radius {}", node_count, self.radius);

        if node_count == 0 {
            return Ok(PlacementResult::empty(self.radius));
        }

        let centers = self.select_centers()?;

        // Reporting uses each center's full reach, not its selection gain
        let mut coverage = Vec::with_capacity(centers.len());
        let mut all_covered = BTreeSet::new();
        for &center in &centers {
            let reach = self.coverage_set(center)?;
            all_covered.extend(reach.iter().copied());
            coverage.push(CenterCoverage {
                center,
                covered: reach.into_iter().collect(),
            });
        }

        let uncovered: Vec<NodeId> = self.graph.node_ids()
            .filter(|node| !all_covered.contains(node))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let stats = CoverageStats::compute(self.graph, &all_covered)?;
        let coverage_percent = match stats.percent() {
            Ok(percent) => percent,
            Err(CoverageError::DivisionUndefined) => {
                log::warn!("Total population is zero, reporting 0% coverage");
                0.0
            }
            Err(e) => return Err(e),
        };

        log::info!(
            "Placed {} centers covering {:.1}% of the population",
            centers.len(),
            coverage_percent
        );

        Ok(PlacementResult {
            radius: self.radius,
            node_count,
            centers,
            coverage,
            uncovered,
            total_population: stats.total_population,
            covered_population: stats.covered_population,
            coverage_percent,
        })
    }
}

/// Place centers on `graph` with the default engine settings
pub fn place_centers<G: Reachability + Sync + ?Sized>(
    graph: &G,
    radius: i64,
) -> Result<PlacementResult, CoverageError> {
    CoverageEngine::new(graph, radius)?.run()
}
