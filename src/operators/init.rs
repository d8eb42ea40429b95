//! Randomized greedy construction of the starting population.

use crate::candidate::Candidate;
use crate::coverage::{CoverageAccumulator, CoverageModel};
use crate::error::{Error, Result};
use crate::fitness::Phenotype;
use crate::seeded::map_seeded;
use rand::Rng;
use tracing::{debug, instrument};

/// Builds one fully covering candidate.
///
/// Draws untried farms uniformly at random and keeps a farm only if it covers
/// at least one farm not yet covered. A rejected farm is never redrawn: the
/// covered set only grows, so it could not help later either.
pub fn greedy_candidate<R: Rng>(model: &CoverageModel, rng: &mut R) -> Result<Candidate> {
    let num_farms = model.num_farms();
    let mut untried: Vec<usize> = (0..num_farms).collect();
    let mut candidate = Candidate::empty(num_farms);
    let mut acc = CoverageAccumulator::new(model);

    while !acc.is_full() {
        if untried.is_empty() {
            return Err(Error::CoverageViolation {
                covered: acc.count(),
                num_farms,
            });
        }
        let farm = untried.swap_remove(rng.random_range(0..untried.len()));
        if acc.gain(model, farm) > 0 {
            acc.add(model, farm);
            candidate.push(farm);
        }
    }
    Ok(candidate)
}

/// Builds `size` greedy candidates and returns them scored, together with the
/// fittest one (the earliest, on ties).
#[instrument(level = "debug", skip(model, rng), fields(num_farms = model.num_farms()))]
pub fn build_initial_population<R: Rng>(
    size: usize,
    model: &CoverageModel,
    rng: &mut R,
) -> Result<(Vec<Phenotype>, Phenotype)> {
    let population = map_seeded(rng, size, |r| {
        Phenotype::evaluate_feasible(model, greedy_candidate(model, r)?)
    })?;

    let best = population
        .iter()
        .fold(None::<&Phenotype>, |best, p| match best {
            Some(b) if p.fitness <= b.fitness => Some(b),
            _ => Some(p),
        })
        .cloned()
        .ok_or(Error::DegenerateCandidate)?;

    debug!(
        best_fitness = best.fitness,
        best_antennas = best.antennas(),
        "initial population built"
    );
    Ok((population, best))
}
