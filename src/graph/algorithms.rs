//! Graph algorithms for coverage analysis

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use crate::error::GraphError;
use crate::graph::{CompressedGraph, NodeId};

/// Breadth-first expansion from internal index `start`, stopping at depth `max_hops`
///
/// Returns (index, distance) pairs in visit order. O(V + E).
fn bounded_bfs(graph: &CompressedGraph, start: usize, max_hops: u32) -> Vec<(usize, u32)> {
    let mut visited = vec![false; graph.node_count];
    let mut reached = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back((start, 0u32));

    while let Some((node, dist)) = queue.pop_front() {
        reached.push((node, dist));

        if dist == max_hops {
            continue;
        }

        for &next in graph.neighbors(node) {
            let next = next as usize;
            if !visited[next] {
                visited[next] = true;
                queue.push_back((next, dist + 1));
            }
        }
    }

    reached
}

/// Hop distance from `source` to every node within `max_hops`
pub fn hop_distances(
    graph: &CompressedGraph,
    source: NodeId,
    max_hops: u32,
) -> Result<BTreeMap<NodeId, u32>, GraphError> {
    let start = graph.index_of(source).ok_or(GraphError::UnknownNode(source))?;

    Ok(bounded_bfs(graph, start, max_hops)
        .into_iter()
        .map(|(idx, dist)| (graph.node_ids[idx], dist))
        .collect())
}

/// Nodes at most `max_hops` edges from `source`, `source` included
pub fn nodes_within(
    graph: &CompressedGraph,
    source: NodeId,
    max_hops: u32,
) -> Result<BTreeSet<NodeId>, GraphError> {
    let start = graph.index_of(source).ok_or(GraphError::UnknownNode(source))?;

    Ok(bounded_bfs(graph, start, max_hops)
        .into_iter()
        .map(|(idx, _)| graph.node_ids[idx])
        .collect())
}

/// Connected components as sorted id lists, ordered by smallest member
///
/// Seeds are scanned in index order, which is ascending id.
pub fn connected_components(graph: &CompressedGraph) -> Vec<Vec<NodeId>> {
    let mut visited = vec![false; graph.node_count];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for seed in 0..graph.node_count {
        if visited[seed] {
            continue;
        }

        visited[seed] = true;
        queue.push_back(seed);
        let mut members = Vec::new();

        while let Some(node) = queue.pop_front() {
            members.push(graph.node_ids[node]);
            for &next in graph.neighbors(node) {
                let next = next as usize;
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        members.sort_unstable();
        components.push(members);
    }

    log::debug!("Found {} connected components", components.len());

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn graph_from(ids: &[NodeId], edges: &[(NodeId, NodeId)]) -> CompressedGraph {
        let mut builder = GraphBuilder::with_capacity(ids.len());
        for &id in ids {
            builder.add_node(id, 1).unwrap();
        }
        for &(u, v) in edges {
            builder.add_edge(u, v).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn zero_hops_reaches_only_the_source() {
        let graph = GraphBuilder::chain(&[1, 1, 1]).unwrap().build().unwrap();
        assert_eq!(nodes_within(&graph, 2, 0).unwrap(), BTreeSet::from([2]));
    }

    #[test]
    fn chain_reach_is_a_window() {
        let graph = GraphBuilder::chain(&[1; 7]).unwrap().build().unwrap();
        assert_eq!(nodes_within(&graph, 4, 2).unwrap(), BTreeSet::from([2, 3, 4, 5, 6]));
        assert_eq!(nodes_within(&graph, 1, 1).unwrap(), BTreeSet::from([1, 2]));
        assert_eq!(nodes_within(&graph, 7, 10).unwrap().len(), 7);
    }

    #[test]
    fn distances_follow_shortest_path_on_a_cycle() {
        let graph = graph_from(&[1, 2, 3, 4, 5, 6], &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)]);
        let distances = hop_distances(&graph, 1, 3).unwrap();
        assert_eq!(distances[&1], 0);
        assert_eq!(distances[&2], 1);
        assert_eq!(distances[&6], 1);
        assert_eq!(distances[&4], 3);
        assert_eq!(distances[&3], 2);
    }

    #[test]
    fn unreachable_nodes_are_never_included() {
        let graph = graph_from(&[1, 2, 3, 4], &[(1, 2), (3, 4)]);
        assert_eq!(nodes_within(&graph, 1, 5).unwrap(), BTreeSet::from([1, 2]));
    }

    #[test]
    fn unknown_source_is_an_error() {
        let graph = graph_from(&[1, 2], &[(1, 2)]);
        assert_eq!(nodes_within(&graph, 9, 1), Err(GraphError::UnknownNode(9)));
        assert_eq!(hop_distances(&graph, 0, 1), Err(GraphError::UnknownNode(0)));
    }

    #[test]
    fn components_are_grouped_and_ordered() {
        let graph = graph_from(&[1, 2, 3, 4, 5], &[(5, 3), (2, 4)]);
        assert_eq!(
            connected_components(&graph),
            vec![vec![1], vec![2, 4], vec![3, 5]]
        );
    }

    #[test]
    fn cycle_with_isolated_node_splits_in_two() {
        let graph = graph_from(&[1, 2, 3, 4], &[(1, 3), (3, 4), (4, 1)]);
        assert_eq!(connected_components(&graph), vec![vec![1, 3, 4], vec![2]]);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = GraphBuilder::with_capacity(0).build().unwrap();
        assert!(connected_components(&graph).is_empty());
    }
}
