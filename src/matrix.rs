//! Pairwise farm distances.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Square matrix of non-negative distances between every pair of farms.
///
/// Stored row-major in a single buffer. Serializes as an array of rows, and
/// deserialization runs the same validation as [`DistanceMatrix::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    distances: Vec<f64>,
    num_farms: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, rejecting empty, ragged, negative or
    /// non-finite input.
    ///
    /// Asymmetric entries and a non-zero diagonal are accepted but logged.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        let num_farms = rows.len();
        if num_farms == 0 {
            return Err(ConfigError::EmptyMatrix);
        }

        let mut distances = Vec::with_capacity(num_farms * num_farms);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != num_farms {
                return Err(ConfigError::RaggedMatrix {
                    row,
                    len: values.len(),
                    expected: num_farms,
                });
            }
            if let Some((col, &value)) = values
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite() || **v < 0.0)
            {
                return Err(ConfigError::InvalidDistance { row, col, value });
            }
            distances.extend(values);
        }

        let matrix = Self {
            distances,
            num_farms,
        };
        matrix.warn_on_irregularities();
        Ok(matrix)
    }

    pub fn num_farms(&self) -> usize {
        self.num_farms
    }

    /// Distance from farm `from` to farm `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.num_farms && to < self.num_farms);
        self.distances[from * self.num_farms + to]
    }

    /// Distances from `farm` to every farm, in index order.
    ///
    /// # Panics
    ///
    /// Panics if `farm` is out of range.
    pub fn row(&self, farm: usize) -> &[f64] {
        let start = farm * self.num_farms;
        &self.distances[start..start + self.num_farms]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.distances.chunks_exact(self.num_farms)
    }

    fn warn_on_irregularities(&self) {
        let n = self.num_farms;
        let nonzero_diagonal = (0..n).filter(|&i| self.distance(i, i) != 0.0).count();
        if nonzero_diagonal > 0 {
            warn!(nonzero_diagonal, "distance matrix has non-zero self-distances");
        }

        let asymmetric = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.distance(i, j) != self.distance(j, i))
            .count();
        if asymmetric > 0 {
            warn!(asymmetric_pairs = asymmetric, "distance matrix is not symmetric");
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = ConfigError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.rows().map(<[f64]>::to_vec).collect()
    }
}
