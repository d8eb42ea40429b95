use crate::candidate::Candidate;
use crate::coverage::{CoverageAccumulator, CoverageModel};
use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::instrument;

/// Drops one gene chosen uniformly at random, then adds farms drawn uniformly
/// from those not in the candidate until every farm is covered again.
///
/// A parent with a redundant gene can therefore shrink by one.
#[instrument(level = "debug", skip_all, fields(parent_len = parent.len()))]
pub fn mutate<R: Rng>(parent: &Candidate, model: &CoverageModel, rng: &mut R) -> Result<Candidate> {
    if parent.is_empty() {
        return Err(Error::DegenerateCandidate);
    }
    model.check_sites(parent.genes())?;

    let num_farms = model.num_farms();
    let mut child = Candidate::from_sites(num_farms, parent.genes().iter().copied());
    child.remove_at(rng.random_range(0..child.len()));

    let mut acc = CoverageAccumulator::from_candidate(model, &child);
    while !acc.is_full() {
        let available = child.members().complement();
        let Some(&site) = available.choose(rng) else {
            return Err(Error::CoverageViolation {
                covered: acc.count(),
                num_farms,
            });
        };
        child.push(site);
        acc.add(model, site);
    }
    Ok(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DistanceMatrix;
    use rand::prelude::SeedableRng;
    use rand_pcg::Pcg64;

    fn line_model(n: usize, radius: f64) -> CoverageModel {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| (i as f64 - j as f64).abs()).collect())
            .collect();
        CoverageModel::new(DistanceMatrix::new(rows).unwrap(), radius).unwrap()
    }

    #[test]
    fn test_redundant_parent_can_shrink_without_repair() {
        // Radius 10 on 4 farms: any single site covers everything.
        let model = line_model(4, 10.0);
        let parent = Candidate::from_sites(4, [0, 3]);
        for seed in 0..10 {
            let mut rng = Pcg64::seed_from_u64(seed);
            let child = mutate(&parent, &model, &mut rng).unwrap();
            assert_eq!(child.len(), 1);
            assert!(parent.contains(child.genes()[0]));
        }
    }

    #[test]
    fn test_load_bearing_gene_gets_replaced() {
        // Radius 0: every farm is load-bearing.
        let model = line_model(5, 0.0);
        let parent = Candidate::from_sites(5, [4, 2, 0, 1, 3]);
        let mut rng = Pcg64::seed_from_u64(9);
        let child = mutate(&parent, &model, &mut rng).unwrap();
        assert_eq!(child.len(), 5);
        assert!(model.covers_all(&child));
        // The removed gene is the only one missing, so it comes back last.
        let removed = *child.genes().last().unwrap();
        let mut kept: Vec<_> = parent.genes().iter().copied().filter(|&g| g != removed).collect();
        kept.push(removed);
        assert_eq!(child.genes(), kept.as_slice());
    }

    #[test]
    fn test_repair_only_adds_unselected_in_range_farms() {
        let model = line_model(20, 1.0);
        let parent = Candidate::from_sites(20, [1, 4, 7, 10, 13, 16, 19]);
        assert!(model.covers_all(&parent));
        for seed in 0..30 {
            let mut rng = Pcg64::seed_from_u64(seed);
            let child = mutate(&parent, &model, &mut rng).unwrap();
            assert!(model.covers_all(&child));
            assert!(child.len() >= parent.len());
            assert!(child.genes().iter().all(|&g| g < 20));
            let mut sorted = child.sorted_sites();
            sorted.dedup();
            assert_eq!(sorted.len(), child.len());
        }
    }

    #[test]
    fn test_empty_parent_is_degenerate() {
        let model = line_model(3, 1.0);
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(matches!(
            mutate(&Candidate::empty(3), &model, &mut rng),
            Err(Error::DegenerateCandidate)
        ));
    }
}
