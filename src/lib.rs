//! Genetic-algorithm search for small antenna coverage sets.
//!
//! Given a distance matrix between farms and a coverage radius, the search
//! looks for as few antenna sites as possible such that every farm lies within
//! the radius of some antenna. Every candidate the operators produce covers all
//! farms; fitness (`num_farms / antennas`) then rewards smaller covers.

use crate::error::Result;

/// The master engine trait.
pub trait Evolver {
    /// Advances the search by one transition and returns the phase reached.
    fn step(&mut self) -> Result<SearchPhase>;
    fn population(&self) -> &[Phenotype];
}

pub mod algorithms {
    pub mod generational;
}

pub mod operators {
    pub mod crossover;
    pub mod init;
    pub mod mutation;
    pub mod selection;
}

pub mod candidate;
pub mod config;
pub mod coverage;
pub mod error;
pub mod farm_set;
pub mod fitness;
pub mod matrix;
pub mod reference;
pub mod report;
mod seeded;

pub use algorithms::generational::{CoverSearch, GenerationStats, SearchPhase, SearchState};
pub use candidate::Candidate;
pub use config::SearchConfig;
pub use coverage::CoverageModel;
pub use error::{CheckpointError, ConfigError, Error};
pub use farm_set::FarmSet;
pub use fitness::{Phenotype, fitness};
pub use matrix::DistanceMatrix;
pub use report::SearchReport;
