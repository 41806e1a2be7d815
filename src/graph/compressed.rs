//! Memory-efficient undirected graph representation

use std::collections::BTreeSet;
use std::mem;
use crate::error::GraphError;
use crate::graph::{algorithms, NodeId, Reachability};

/// Compressed sparse representation of an undirected location network
///
/// Every undirected edge is stored in both endpoints' adjacency ranges.
/// Internal indices follow ascending node id.
#[derive(Debug, Clone)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Offset array: index where each node's neighbors begin
    /// offsets[i] to offsets[i+1] defines the neighbor range for node i
    pub offsets: Vec<u32>,

    /// Neighbor array: concatenated, sorted lists of internal indices
    pub edges: Vec<u32>,

    /// Node ids by internal index, ascending
    pub node_ids: Vec<NodeId>,

    /// Population by internal index
    pub populations: Vec<u64>,
}

impl CompressedGraph {
    /// Create an empty graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count: 0,
            offsets: Vec::with_capacity(node_count + 1),
            edges: Vec::with_capacity(edge_count),
            node_ids: Vec::with_capacity(node_count),
            populations: Vec::with_capacity(node_count),
        }
    }

    /// Internal index of a node id
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.node_ids.binary_search(&id).ok()
    }

    /// Neighbors of the node at internal index `node`
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Check whether two node ids are adjacent
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(u_idx), Some(v_idx)) => self.neighbors(u_idx).binary_search(&(v_idx as u32)).is_ok(),
            _ => false,
        }
    }

    /// Degree of a node id
    pub fn degree(&self, id: NodeId) -> Result<usize, GraphError> {
        let idx = self.index_of(id).ok_or(GraphError::UnknownNode(id))?;
        Ok(self.neighbors(idx).len())
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Sum of all node populations, `None` if it does not fit in a u64
    pub fn total_population(&self) -> Option<u64> {
        self.populations.iter().try_fold(0u64, |acc, &p| acc.checked_add(p))
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let edges = self.edges.capacity() * mem::size_of::<u32>();
        let ids = self.node_ids.capacity() * mem::size_of::<NodeId>();
        let populations = self.populations.capacity() * mem::size_of::<u64>();

        base + offsets + edges + ids + populations
    }
}

impl Reachability for CompressedGraph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.node_ids.iter().copied())
    }

    fn nodes_within(&self, node: NodeId, hops: u32) -> Result<BTreeSet<NodeId>, GraphError> {
        algorithms::nodes_within(self, node, hops)
    }

    fn population(&self, node: NodeId) -> Result<u64, GraphError> {
        self.index_of(node)
            .map(|idx| self.populations[idx])
            .ok_or(GraphError::UnknownNode(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn triangle_with_tail() -> CompressedGraph {
        let mut builder = GraphBuilder::with_capacity(4);
        for (id, population) in [(7, 70), (3, 30), (5, 50), (9, 90)] {
            builder.add_node(id, population).unwrap();
        }
        builder.add_edge(3, 5).unwrap();
        builder.add_edge(5, 7).unwrap();
        builder.add_edge(7, 3).unwrap();
        builder.add_edge(7, 9).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn nodes_are_indexed_by_ascending_id() {
        let graph = triangle_with_tail();
        assert_eq!(graph.node_ids, vec![3, 5, 7, 9]);
        assert_eq!(graph.populations, vec![30, 50, 70, 90]);
        assert_eq!(graph.index_of(7), Some(2));
        assert_eq!(graph.index_of(4), None);
    }

    #[test]
    fn edges_are_stored_in_both_directions() {
        let graph = triangle_with_tail();
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.has_edge(9, 7));
        assert!(graph.has_edge(7, 9));
        assert!(!graph.has_edge(3, 9));
        assert_eq!(graph.degree(7).unwrap(), 3);
        assert_eq!(graph.degree(9).unwrap(), 1);
    }

    #[test]
    fn population_lookup_rejects_unknown_nodes() {
        let graph = triangle_with_tail();
        assert_eq!(graph.population(5), Ok(50));
        assert_eq!(graph.population(6), Err(GraphError::UnknownNode(6)));
        assert_eq!(graph.total_population(), Some(240));
    }

    #[test]
    fn node_ids_iteration_is_restartable() {
        let graph = triangle_with_tail();
        let first: Vec<_> = graph.node_ids().collect();
        let second: Vec<_> = graph.node_ids().collect();
        assert_eq!(first, second);
    }
}
