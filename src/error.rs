//! Error types for graph construction, placement and input parsing

use thiserror::Error;
use crate::graph::NodeId;

/// Misuse of the graph model API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {0} is already registered")]
    DuplicateNode(NodeId),

    #[error("node {0} is not registered")]
    UnknownNode(NodeId),
}

/// Failures raised by the coverage engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    #[error("coverage radius must be non-negative, got {0}")]
    InvalidRadius(i64),

    /// Total population is zero, so a coverage percentage has no meaning
    #[error("coverage percentage is undefined when total population is zero")]
    DivisionUndefined,

    #[error("population total exceeds {}", u64::MAX)]
    PopulationOverflow,

    /// The best candidate covered nothing new, so the reachability source
    /// does not report nodes as within reach of themselves
    #[error("placement stalled with {0} nodes still uncovered")]
    Stalled(usize),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Rejections produced while reading population values from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("value {value:?} at position {position} is not a non-negative integer")]
    InvalidValue { position: usize, value: String },

    #[error("expected exactly {expected} population values, found {found}")]
    CountMismatch { expected: usize, found: usize },
}
