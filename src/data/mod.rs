//! Input data handling module

pub mod population;

pub use population::{default_populations, parse_populations};
