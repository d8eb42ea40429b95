//! Coverage evaluation.
//!
//! A site *reaches* every farm within the coverage radius of it. The model
//! precomputes one reach bitset per site, so the covered set of a candidate is
//! the union of its sites' reaches.

use crate::candidate::Candidate;
use crate::error::{ConfigError, Error, Result};
use crate::farm_set::FarmSet;
use crate::matrix::DistanceMatrix;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Serializes as the matrix and radius only; deserialization rebuilds the
/// reach sets through [`CoverageModel::new`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "ModelInputs", into = "ModelInputs")]
pub struct CoverageModel {
    matrix: DistanceMatrix,
    radius: f64,
    reach: Vec<FarmSet>,
}

#[derive(Serialize, Deserialize)]
struct ModelInputs {
    matrix: DistanceMatrix,
    radius: f64,
}

impl TryFrom<ModelInputs> for CoverageModel {
    type Error = ConfigError;

    fn try_from(inputs: ModelInputs) -> std::result::Result<Self, Self::Error> {
        Self::new(inputs.matrix, inputs.radius)
    }
}

impl From<CoverageModel> for ModelInputs {
    fn from(model: CoverageModel) -> Self {
        Self {
            matrix: model.matrix,
            radius: model.radius,
        }
    }
}

impl CoverageModel {
    /// Precomputes per-site reach for `radius`.
    ///
    /// Fails if the radius is negative or not finite, or if some farm is out
    /// of range of every site. The latter guarantees that selecting every farm
    /// covers everything, which bounds all repair loops.
    #[instrument(level = "debug", skip(matrix), fields(num_farms = matrix.num_farms()))]
    pub fn new(matrix: DistanceMatrix, radius: f64) -> std::result::Result<Self, ConfigError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }

        let n = matrix.num_farms();
        let reach: Vec<FarmSet> = matrix
            .rows()
            .map(|row| {
                let mut set = FarmSet::empty(n);
                for (farm, &d) in row.iter().enumerate() {
                    if d <= radius {
                        set.insert(farm);
                    }
                }
                set
            })
            .collect();

        let mut universe = FarmSet::empty(n);
        for set in &reach {
            universe.union_with(set);
        }
        if let Some(farm) = universe.complement().first().copied() {
            return Err(ConfigError::UncoverableFarm { farm });
        }

        let mean_reach = reach.iter().map(FarmSet::len).sum::<usize>() as f64 / n as f64;
        debug!(mean_reach, "coverage model ready");
        Ok(Self {
            matrix,
            radius,
            reach,
        })
    }

    pub fn num_farms(&self) -> usize {
        self.matrix.num_farms()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Farms within the radius of `site`.
    pub fn reach(&self, site: usize) -> Option<&FarmSet> {
        self.reach.get(site)
    }

    /// Union of the reaches of every site in `sites`. Sites outside the farm
    /// range reach nothing.
    pub fn coverage_of_sites(&self, sites: &[usize]) -> FarmSet {
        let mut acc = CoverageAccumulator::new(self);
        for &site in sites {
            acc.add(self, site);
        }
        acc.into_covered()
    }

    pub fn coverage_of(&self, candidate: &Candidate) -> FarmSet {
        self.coverage_of_sites(candidate.genes())
    }

    /// Number of farms within the radius of at least one site of `candidate`.
    /// An empty candidate covers nothing.
    pub fn covered_count(&self, candidate: &Candidate) -> usize {
        self.coverage_of(candidate).len()
    }

    pub fn covers_all(&self, candidate: &Candidate) -> bool {
        self.coverage_of(candidate).is_full()
    }

    /// Builds a candidate from caller-supplied sites, rejecting indices
    /// outside `0..num_farms`.
    pub fn candidate_from_sites(&self, sites: &[usize]) -> Result<Candidate> {
        self.check_sites(sites)?;
        Ok(Candidate::from_sites(self.num_farms(), sites.iter().copied()))
    }

    /// Fails with [`Error::FarmOutOfRange`] on the first site outside
    /// `0..num_farms`.
    pub fn check_sites(&self, sites: &[usize]) -> Result<()> {
        let num_farms = self.num_farms();
        match sites.iter().find(|&&s| s >= num_farms) {
            Some(&farm) => Err(Error::FarmOutOfRange { farm, num_farms }),
            None => Ok(()),
        }
    }

    /// Fails with [`Error::CoverageViolation`] unless `candidate` covers every
    /// farm.
    pub fn ensure_covers_all(&self, candidate: &Candidate) -> Result<()> {
        let covered = self.covered_count(candidate);
        if covered != self.num_farms() {
            return Err(Error::CoverageViolation {
                covered,
                num_farms: self.num_farms(),
            });
        }
        Ok(())
    }
}

/// Running union of reaches, for repair loops that add one site at a time.
#[derive(Clone, Debug)]
pub struct CoverageAccumulator {
    covered: FarmSet,
}

impl CoverageAccumulator {
    pub fn new(model: &CoverageModel) -> Self {
        Self {
            covered: FarmSet::empty(model.num_farms()),
        }
    }

    pub fn from_candidate(model: &CoverageModel, candidate: &Candidate) -> Self {
        Self {
            covered: model.coverage_of(candidate),
        }
    }

    /// Adds the reach of `site`, returning how many farms became covered.
    pub fn add(&mut self, model: &CoverageModel, site: usize) -> usize {
        match model.reach(site) {
            Some(reach) => {
                let gained = self.covered.count_new(reach);
                self.covered.union_with(reach);
                gained
            }
            None => 0,
        }
    }

    /// How many farms `site` would newly cover, without adding it.
    pub fn gain(&self, model: &CoverageModel, site: usize) -> usize {
        model
            .reach(site)
            .map_or(0, |reach| self.covered.count_new(reach))
    }

    pub fn count(&self) -> usize {
        self.covered.len()
    }

    pub fn is_full(&self) -> bool {
        self.covered.is_full()
    }

    pub fn into_covered(self) -> FarmSet {
        self.covered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::SeedableRng;
    use rand::{Rng, seq::SliceRandom};
    use rand_pcg::Pcg64;

    fn line_matrix(n: usize) -> DistanceMatrix {
        DistanceMatrix::new(
            (0..n)
                .map(|i| (0..n).map(|j| (i as f64 - j as f64).abs()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn pairwise_count(model: &CoverageModel, sites: &[usize]) -> usize {
        let n = model.num_farms();
        (0..n)
            .filter(|&b| {
                sites
                    .iter()
                    .any(|&a| model.matrix().distance(a, b) <= model.radius())
            })
            .count()
    }

    #[test]
    fn test_empty_candidate_covers_nothing() {
        let model = CoverageModel::new(line_matrix(5), 1.0).unwrap();
        assert_eq!(model.covered_count(&Candidate::empty(5)), 0);
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let model = CoverageModel::new(line_matrix(5), 1.0).unwrap();
        let c = Candidate::from_sites(5, [2]);
        assert_eq!(model.coverage_of(&c).iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_bitset_count_matches_pairwise_scan() {
        let model = CoverageModel::new(line_matrix(90), 3.0).unwrap();
        let mut rng = Pcg64::seed_from_u64(7);
        let mut farms: Vec<usize> = (0..90).collect();
        for _ in 0..50 {
            farms.shuffle(&mut rng);
            let k = rng.random_range(0..20);
            let c = Candidate::from_sites(90, farms[..k].iter().copied());
            assert_eq!(model.covered_count(&c), pairwise_count(&model, c.genes()));
        }
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(
            CoverageModel::new(line_matrix(3), -1.0).unwrap_err(),
            ConfigError::InvalidRadius(-1.0)
        );
        assert!(CoverageModel::new(line_matrix(3), f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_farm_no_site_can_reach() {
        // Farm 1 is 5 away from everything, itself included.
        let matrix = DistanceMatrix::new(vec![
            vec![0.0, 5.0],
            vec![5.0, 5.0],
        ])
        .unwrap();
        assert_eq!(
            CoverageModel::new(matrix, 1.0).unwrap_err(),
            ConfigError::UncoverableFarm { farm: 1 }
        );
    }

    #[test]
    fn test_candidate_from_sites_rejects_out_of_range() {
        let model = CoverageModel::new(line_matrix(4), 1.0).unwrap();
        assert!(matches!(
            model.candidate_from_sites(&[0, 4]),
            Err(Error::FarmOutOfRange {
                farm: 4,
                num_farms: 4
            })
        ));
    }

    #[test]
    fn test_deserialize_rebuilds_reach() {
        let model = CoverageModel::new(line_matrix(6), 1.0).unwrap();
        let json = serde_json::to_string(&model).unwrap();
        assert!(!json.contains("reach"));

        let back: CoverageModel = serde_json::from_str(&json).unwrap();
        for site in 0..6 {
            assert_eq!(back.reach(site), model.reach(site));
        }

        let tampered = json.replace("\"radius\":1.0", "\"radius\":-1.0");
        assert!(serde_json::from_str::<CoverageModel>(&tampered).is_err());
    }

    #[test]
    fn test_ensure_covers_all_reports_shortfall() {
        let model = CoverageModel::new(line_matrix(5), 1.0).unwrap();
        assert!(model.ensure_covers_all(&Candidate::from_sites(5, [1, 3])).is_ok());
        assert!(matches!(
            model.ensure_covers_all(&Candidate::from_sites(5, [1])),
            Err(Error::CoverageViolation {
                covered: 3,
                num_farms: 5
            })
        ));
    }

    #[test]
    fn test_accumulator_reports_gain() {
        let model = CoverageModel::new(line_matrix(6), 1.0).unwrap();
        let mut acc = CoverageAccumulator::new(&model);
        assert_eq!(acc.add(&model, 1), 3);
        assert_eq!(acc.gain(&model, 2), 1);
        assert_eq!(acc.add(&model, 6), 0);
        assert_eq!(acc.add(&model, 4), 3);
        assert!(acc.is_full());
    }
}
