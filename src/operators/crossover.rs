//! Interleaving crossover with random repair.

use crate::candidate::Candidate;
use crate::coverage::{CoverageAccumulator, CoverageModel};
use crate::error::Result;
use rand::Rng;
use tracing::instrument;

/// Builds a child by walking both parents position by position.
///
/// At each position the gene of `lhs` is taken first, then the gene of `rhs`,
/// skipping genes already in the child. The walk stops as soon as the child
/// covers every farm, so `[0, 1] x [2, 3]` yields `[0, 2, 1, 3]` at most.
/// If both parents run out first, uniformly drawn farms are added until the
/// child covers everything.
#[instrument(level = "debug", skip_all, fields(lhs_len = lhs.len(), rhs_len = rhs.len()))]
pub fn crossover<R: Rng>(
    lhs: &Candidate,
    rhs: &Candidate,
    model: &CoverageModel,
    rng: &mut R,
) -> Result<Candidate> {
    model.check_sites(lhs.genes())?;
    model.check_sites(rhs.genes())?;

    let num_farms = model.num_farms();
    let mut child = Candidate::empty(num_farms);
    let mut acc = CoverageAccumulator::new(model);

    'interleave: for i in 0..lhs.len().max(rhs.len()) {
        for parent in [lhs, rhs] {
            if let Some(&gene) = parent.genes().get(i) {
                if child.push(gene) {
                    acc.add(model, gene);
                    if acc.is_full() {
                        break 'interleave;
                    }
                }
            }
        }
    }

    // Every farm is reachable from some site, so this terminates.
    while !acc.is_full() {
        let site = rng.random_range(0..num_farms);
        if child.push(site) {
            acc.add(model, site);
        }
    }
    Ok(child)
}
