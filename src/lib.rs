//! Core library functions for the coverage planner

pub mod config;
pub mod error;
pub mod graph;
pub mod coverage;
pub mod data;
pub mod report;

pub use anyhow::{Result, anyhow};
pub use coverage::{place_centers, CoverageEngine, PlacementResult};
pub use error::{CoverageError, GraphError, InputError};
pub use graph::{CompressedGraph, GraphBuilder, NodeId, Reachability};
