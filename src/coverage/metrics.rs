//! Population coverage statistics

use std::collections::BTreeSet;
use crate::error::CoverageError;
use crate::graph::{NodeId, Reachability};

/// Population totals for a set of covered nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageStats {
    pub total_population: u64,
    pub covered_population: u64,
}

impl CoverageStats {
    /// Sum populations over the whole graph and over `covered`
    pub fn compute<G: Reachability + ?Sized>(
        graph: &G,
        covered: &BTreeSet<NodeId>,
    ) -> Result<Self, CoverageError> {
        let mut total_population: u64 = 0;
        for node in graph.node_ids() {
            total_population = total_population
                .checked_add(graph.population(node)?)
                .ok_or(CoverageError::PopulationOverflow)?;
        }

        let mut covered_population: u64 = 0;
        for &node in covered {
            covered_population = covered_population
                .checked_add(graph.population(node)?)
                .ok_or(CoverageError::PopulationOverflow)?;
        }

        Ok(Self {
            total_population,
            covered_population,
        })
    }

    /// Covered share of the population as a percentage
    pub fn percent(&self) -> Result<f64, CoverageError> {
        coverage_percent(self.covered_population, self.total_population)
    }
}

/// 100 * covered / total, undefined for a zero total
pub fn coverage_percent(covered: u64, total: u64) -> Result<f64, CoverageError> {
    if total == 0 {
        return Err(CoverageError::DivisionUndefined);
    }

    Ok(covered as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::GraphBuilder;

    #[test]
    fn percent_keeps_full_precision() {
        let percent = coverage_percent(1, 3).unwrap();
        assert!((percent - 33.333_333_333).abs() < 1e-6);
        assert_eq!(coverage_percent(50, 50).unwrap(), 100.0);
    }

    #[test]
    fn zero_total_is_undefined() {
        assert_eq!(coverage_percent(0, 0), Err(CoverageError::DivisionUndefined));
    }

    #[test]
    fn stats_sum_only_covered_nodes() {
        let graph = GraphBuilder::chain(&[10, 20, 30]).unwrap().build().unwrap();
        let stats = CoverageStats::compute(&graph, &BTreeSet::from([1, 3])).unwrap();
        assert_eq!(stats.total_population, 60);
        assert_eq!(stats.covered_population, 40);
    }

    #[test]
    fn stats_reject_unknown_covered_node() {
        let graph = GraphBuilder::chain(&[10]).unwrap().build().unwrap();
        let err = CoverageStats::compute(&graph, &BTreeSet::from([2])).unwrap_err();
        assert_eq!(err, CoverageError::Graph(GraphError::UnknownNode(2)));
    }

    #[test]
    fn stats_reject_population_overflow() {
        let half = u64::MAX / 2 + 1;
        let graph = GraphBuilder::chain(&[half, half]).unwrap().build().unwrap();
        let err = CoverageStats::compute(&graph, &BTreeSet::from([1])).unwrap_err();
        assert_eq!(err, CoverageError::PopulationOverflow);
    }

    #[test]
    fn stats_accept_total_at_u64_max() {
        let graph = GraphBuilder::chain(&[u64::MAX - 1, 1]).unwrap().build().unwrap();
        let stats = CoverageStats::compute(&graph, &BTreeSet::from([1, 2])).unwrap();
        assert_eq!(stats.total_population, u64::MAX);
        assert_eq!(stats.covered_population, u64::MAX);
    }
}
