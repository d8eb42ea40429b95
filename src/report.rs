use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a finished search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub fitness: f64,
    pub antennas: usize,
    /// Antenna sites in ascending order.
    pub sites: Vec<usize>,
    pub generations: usize,
    pub stagnation: usize,
    pub num_farms: usize,
    pub radius: f64,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best fitness: {}", self.fitness)?;
        writeln!(f, "Solution: {:?}", self.sites)?;
        write!(
            f,
            "{} antennas cover {} farms at radius {} after {} generations",
            self.antennas, self.num_farms, self.radius, self.generations
        )
    }
}
