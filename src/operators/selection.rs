//! Partitioned tournament selection.
//!
//! The population is shuffled and cut into `num_parents` contiguous groups;
//! the fittest member of each group becomes a parent. Every individual takes
//! part in exactly one tournament.

use crate::error::{ConfigError, Result};
use crate::fitness::Phenotype;
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::Range;
use tracing::instrument;

/// Splits `0..len` into `groups` contiguous ranges whose sizes differ by at
/// most one. When `len` does not divide evenly the trailing ranges are the
/// longer ones.
pub fn partition_bounds(len: usize, groups: usize) -> Vec<Range<usize>> {
    if groups == 0 {
        return Vec::new();
    }
    let base = len / groups;
    let longer = len % groups;
    let shorter = groups - longer;

    let mut start = 0;
    (0..groups)
        .map(|g| {
            let size = if g < shorter { base } else { base + 1 };
            let range = start..start + size;
            start += size;
            range
        })
        .collect()
}

/// Runs the tournaments for a fixed visiting `order` of population indices.
///
/// Within a group the first member is the provisional champion and is only
/// displaced by a member with strictly higher fitness, so ties go to whoever
/// comes first in `order`.
///
/// # Panics
///
/// Panics if `order` holds an index outside `population`.
pub fn tournament_champions(
    population: &[Phenotype],
    order: &[usize],
    num_parents: usize,
) -> Result<Vec<Phenotype>> {
    check_parent_count(num_parents, order.len())?;

    Ok(partition_bounds(order.len(), num_parents)
        .into_iter()
        .map(|group| {
            let mut members = order[group].iter().map(|&i| &population[i]);
            let first = members.next().expect("groups are non-empty");
            members.fold(first, |champion, p| {
                if p.fitness > champion.fitness {
                    p
                } else {
                    champion
                }
            })
        })
        .cloned()
        .collect())
}

/// Selects exactly `num_parents` parents from a uniformly shuffled population.
#[instrument(level = "debug", skip(population, rng), fields(population_size = population.len()))]
pub fn select_parents<R: Rng>(
    population: &[Phenotype],
    num_parents: usize,
    rng: &mut R,
) -> Result<Vec<Phenotype>> {
    check_parent_count(num_parents, population.len())?;

    let mut order: Vec<usize> = (0..population.len()).collect();
    order.shuffle(rng);
    tournament_champions(population, &order, num_parents)
}

fn check_parent_count(num_parents: usize, population_size: usize) -> Result<()> {
    if num_parents == 0 || num_parents > population_size {
        return Err(ConfigError::ParentsOutOfRange {
            num_parents,
            population_size,
        }
        .into());
    }
    Ok(())
}
