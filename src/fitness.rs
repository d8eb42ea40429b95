use crate::candidate::Candidate;
use crate::coverage::CoverageModel;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Covered farms per antenna.
///
/// For a fully covering candidate this is `num_farms / len`, so higher fitness
/// means fewer antennas.
pub fn fitness(model: &CoverageModel, candidate: &Candidate) -> Result<f64> {
    if candidate.is_empty() {
        return Err(Error::DegenerateCandidate);
    }
    Ok(model.covered_count(candidate) as f64 / candidate.len() as f64)
}

/// A candidate together with its evaluated fitness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phenotype {
    pub candidate: Candidate,
    pub fitness: f64,
}

impl Phenotype {
    /// Scores `candidate`, failing with [`Error::CoverageViolation`] if it
    /// leaves any farm uncovered.
    pub fn evaluate_feasible(model: &CoverageModel, candidate: Candidate) -> Result<Self> {
        if candidate.is_empty() {
            return Err(Error::DegenerateCandidate);
        }
        model.ensure_covers_all(&candidate)?;
        let fitness = model.num_farms() as f64 / candidate.len() as f64;
        Ok(Self { candidate, fitness })
    }

    /// Number of antennas.
    pub fn antennas(&self) -> usize {
        self.candidate.len()
    }
}
