//! Graph representation and algorithms module

pub mod compressed;
pub mod builder;
pub mod algorithms;

pub use builder::GraphBuilder;
pub use compressed::CompressedGraph;

use std::collections::BTreeSet;
use crate::error::GraphError;

/// Location identifier
pub type NodeId = u32;

/// Capability the coverage engine needs from a network
///
/// Implementations must yield node ids in the same order every time
/// `node_ids` is called, since placement breaks ties by that order.
pub trait Reachability {
    /// Number of registered nodes
    fn node_count(&self) -> usize;

    /// All registered node ids in a stable order
    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Nodes at most `hops` edges away from `node`, including `node` itself
    fn nodes_within(&self, node: NodeId, hops: u32) -> Result<BTreeSet<NodeId>, GraphError>;

    /// Population weight of `node`
    fn population(&self, node: NodeId) -> Result<u64, GraphError>;
}
