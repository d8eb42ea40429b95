//! Fixed-width bitset over farm indices.
//!
//! Every candidate and every per-site reach is a [`FarmSet`] of the same width
//! (the number of farms), so coverage checks reduce to word-wise unions and a
//! popcount.

use crate::error::CheckpointError;
use serde::{Deserialize, Serialize};

const WORD_BITS: usize = u64::BITS as usize;

/// Deserialization checks that `words` matches `width` and that no bit past
/// `width` is set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFarmSet")]
pub struct FarmSet {
    words: Vec<u64>,
    width: usize,
}

#[derive(Deserialize)]
struct RawFarmSet {
    words: Vec<u64>,
    width: usize,
}

impl TryFrom<RawFarmSet> for FarmSet {
    type Error = CheckpointError;

    fn try_from(raw: RawFarmSet) -> Result<Self, Self::Error> {
        let RawFarmSet { words, width } = raw;
        let expected = width.div_ceil(WORD_BITS);
        if words.len() != expected {
            return Err(CheckpointError::WordCount {
                width,
                expected,
                words: words.len(),
            });
        }
        let mut set = Self { words, width };
        let before = set.len();
        set.clear_tail();
        if set.len() != before {
            return Err(CheckpointError::StrayBits { width });
        }
        Ok(set)
    }
}

impl FarmSet {
    /// Creates an empty set able to hold farms `0..width`.
    pub fn empty(width: usize) -> Self {
        Self {
            words: vec![0; width.div_ceil(WORD_BITS)],
            width,
        }
    }

    /// Creates a set containing every farm in `0..width`.
    pub fn full(width: usize) -> Self {
        let mut set = Self::empty(width);
        for word in &mut set.words {
            *word = u64::MAX;
        }
        set.clear_tail();
        set
    }

    /// Number of farms this set can address.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Inserts `farm`, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `farm >= width`.
    pub fn insert(&mut self, farm: usize) -> bool {
        assert!(
            farm < self.width,
            "farm {farm} out of range for set of width {}",
            self.width
        );
        let (word, mask) = Self::locate(farm);
        let was_absent = self.words[word] & mask == 0;
        self.words[word] |= mask;
        was_absent
    }

    /// Removes `farm`, returning `true` if it was present.
    pub fn remove(&mut self, farm: usize) -> bool {
        if farm >= self.width {
            return false;
        }
        let (word, mask) = Self::locate(farm);
        let was_present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        was_present
    }

    pub fn contains(&self, farm: usize) -> bool {
        if farm >= self.width {
            return false;
        }
        let (word, mask) = Self::locate(farm);
        self.words[word] & mask != 0
    }

    /// Number of farms in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// `true` when every farm in `0..width` is present.
    pub fn is_full(&self) -> bool {
        self.len() == self.width
    }

    /// In-place union. Both sets must share the same width.
    pub fn union_with(&mut self, other: &FarmSet) {
        debug_assert_eq!(self.width, other.width);
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= *b;
        }
    }

    /// Number of farms in `other` that are not in `self`.
    pub fn count_new(&self, other: &FarmSet) -> usize {
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (b & !a).count_ones() as usize)
            .sum()
    }

    /// Farms in `0..width` that are not in the set, in ascending order.
    pub fn complement(&self) -> Vec<usize> {
        (0..self.width).filter(|&farm| !self.contains(farm)).collect()
    }

    /// Iterates over members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let offset = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * WORD_BITS + offset)
            })
        })
    }

    fn locate(farm: usize) -> (usize, u64) {
        (farm / WORD_BITS, 1u64 << (farm % WORD_BITS))
    }

    fn clear_tail(&mut self) {
        let used = self.width % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }
}
