//! Graph construction module

use std::collections::HashMap;
use crate::error::GraphError;
use crate::graph::{CompressedGraph, NodeId};

/// Builder for incrementally constructing a CompressedGraph
pub struct GraphBuilder {
    /// Mapping from node ids to registration order
    id_to_index: HashMap<NodeId, u32>,

    /// Node ids in registration order
    node_ids: Vec<NodeId>,

    /// Population per registered node
    populations: Vec<u64>,

    /// Adjacency lists for each node, may hold duplicates until build
    adjacency_lists: Vec<Vec<u32>>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            populations: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
        }
    }

    /// Builder for the chain layout: nodes 1..=N with i adjacent to i+1
    pub fn chain(populations: &[u64]) -> Result<Self, GraphError> {
        let mut builder = Self::with_capacity(populations.len());

        for (i, &population) in populations.iter().enumerate() {
            builder.add_node(i as NodeId + 1, population)?;
        }
        for id in 1..populations.len() as NodeId {
            builder.add_edge(id, id + 1)?;
        }

        Ok(builder)
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Register a node with its population
    pub fn add_node(&mut self, id: NodeId, population: u64) -> Result<(), GraphError> {
        if self.id_to_index.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }

        let idx = self.node_ids.len() as u32;
        self.id_to_index.insert(id, idx);
        self.node_ids.push(id);
        self.populations.push(population);
        self.adjacency_lists.push(Vec::new());

        Ok(())
    }

    /// Add an undirected edge between two registered nodes
    ///
    /// Repeated edges are collapsed when the graph is built.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<(), GraphError> {
        let u_idx = *self.id_to_index.get(&u).ok_or(GraphError::UnknownNode(u))?;
        let v_idx = *self.id_to_index.get(&v).ok_or(GraphError::UnknownNode(v))?;

        // Self-loops never change hop distances
        if u_idx == v_idx {
            return Ok(());
        }

        self.adjacency_lists[u_idx as usize].push(v_idx);
        self.adjacency_lists[v_idx as usize].push(u_idx);

        Ok(())
    }

    /// Build the compressed graph, reindexing nodes by ascending id
    pub fn build(self) -> Result<CompressedGraph, GraphError> {
        let node_count = self.node_ids.len();

        // Registration order -> ascending id order
        let mut order: Vec<u32> = (0..node_count as u32).collect();
        order.sort_unstable_by_key(|&idx| self.node_ids[idx as usize]);

        let mut old_to_new = vec![0u32; node_count];
        for (new_idx, &old_idx) in order.iter().enumerate() {
            old_to_new[old_idx as usize] = new_idx as u32;
        }

        let edge_count: usize = self.adjacency_lists.iter()
            .map(|list| list.len())
            .sum();

        let mut graph = CompressedGraph::with_capacity(node_count, edge_count);
        graph.offsets.push(0);

        let mut offset = 0;
        for &old_idx in &order {
            let mut neighbors: Vec<u32> = self.adjacency_lists[old_idx as usize].iter()
                .map(|&n| old_to_new[n as usize])
                .collect();

            // Sort for binary search, dedup for idempotent edges
            neighbors.sort_unstable();
            neighbors.dedup();

            offset += neighbors.len() as u32;
            graph.edges.extend_from_slice(&neighbors);
            graph.offsets.push(offset);

            graph.node_ids.push(self.node_ids[old_idx as usize]);
            graph.populations.push(self.populations[old_idx as usize]);
        }

        graph.node_count = node_count;

        log::debug!(
            "Built graph with {} nodes and {} edges",
            graph.node_count,
            graph.edge_count()
        );

        Ok(graph)
    }
}
