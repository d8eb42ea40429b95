use crate::error::CheckpointError;
use crate::farm_set::FarmSet;
use serde::{Deserialize, Serialize};

/// A set of antenna sites.
///
/// Genes keep their insertion order, which crossover walks positionally; the
/// membership mask answers duplicate checks without scanning the genes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCandidate")]
pub struct Candidate {
    genes: Vec<usize>,
    members: FarmSet,
}

#[derive(Deserialize)]
struct RawCandidate {
    genes: Vec<usize>,
    members: FarmSet,
}

impl TryFrom<RawCandidate> for Candidate {
    type Error = CheckpointError;

    fn try_from(raw: RawCandidate) -> Result<Self, Self::Error> {
        let width = raw.members.width();
        let mut candidate = Self::empty(width);
        for gene in raw.genes {
            if gene >= width {
                return Err(CheckpointError::GeneOutOfRange { gene, width });
            }
            if !candidate.push(gene) {
                return Err(CheckpointError::DuplicateGene(gene));
            }
        }
        if candidate.members != raw.members {
            return Err(CheckpointError::MembershipMismatch);
        }
        Ok(candidate)
    }
}

impl Candidate {
    /// An empty candidate over `num_farms` farms.
    pub fn empty(num_farms: usize) -> Self {
        Self {
            genes: Vec::new(),
            members: FarmSet::empty(num_farms),
        }
    }

    /// Builds a candidate from sites in order, dropping repeats.
    ///
    /// # Panics
    ///
    /// Panics if a site is `>= num_farms`.
    pub fn from_sites(num_farms: usize, sites: impl IntoIterator<Item = usize>) -> Self {
        let mut candidate = Self::empty(num_farms);
        for site in sites {
            candidate.push(site);
        }
        candidate
    }

    /// Appends `site` unless already present. Returns whether it was added.
    ///
    /// # Panics
    ///
    /// Panics if `site` is out of range for the candidate's farms.
    pub fn push(&mut self, site: usize) -> bool {
        if !self.members.insert(site) {
            return false;
        }
        self.genes.push(site);
        true
    }

    /// Removes the gene at `position`, shifting later genes left.
    pub fn remove_at(&mut self, position: usize) -> usize {
        let site = self.genes.remove(position);
        self.members.remove(site);
        site
    }

    pub fn contains(&self, site: usize) -> bool {
        self.members.contains(site)
    }

    /// Sites in insertion order.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn members(&self) -> &FarmSet {
        &self.members
    }

    /// Number of antennas.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Sites in ascending order.
    pub fn sorted_sites(&self) -> Vec<usize> {
        self.members.iter().collect()
    }
}
