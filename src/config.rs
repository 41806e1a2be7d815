//! Configuration management for the coverage planner

/// Default configuration for a placement run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of locations in the chain
    pub locations: usize,

    /// Population assigned to every location when none is supplied
    pub default_population: u64,

    /// Coverage radius in hops
    pub radius: i64,

    /// Graph size at which the candidate scan switches to the rayon pool
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locations: 10,
            default_population: 10,
            radius: 2,
            parallel_threshold: 1000,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        locations: usize,
        default_population: u64,
        radius: i64,
        parallel_threshold: usize,
    ) -> Self {
        Self {
            locations,
            default_population,
            radius,
            parallel_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_planner_defaults() {
        let config = Config::default();
        assert_eq!(config.locations, 10);
        assert_eq!(config.default_population, 10);
        assert_eq!(config.radius, 2);
        assert_eq!(config.parallel_threshold, 1000);
    }
}
