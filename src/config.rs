use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunables for a search run.
///
/// Missing fields take the reference values when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum distance at which an antenna covers a farm.
    pub radius: f64,
    pub population_size: usize,
    /// Tournament winners kept each generation. Also the number of groups.
    pub num_parents: usize,
    pub num_children_crossover: usize,
    pub num_children_mutation: usize,
    /// Generations without improvement before the run stops.
    pub max_stagnation: usize,
    /// Hard cap on generations, on top of the stagnation rule.
    pub max_generations: Option<usize>,
    /// Most recent generations kept in the search history. 0 keeps none.
    pub max_history: usize,
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            population_size: 1000,
            num_parents: 100,
            num_children_crossover: 600,
            num_children_mutation: 300,
            max_stagnation: 50,
            max_generations: None,
            max_history: 1000,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Rescales parents and children to `population_size` keeping the
    /// reference 10/60/30 split.
    pub fn with_population(mut self, population_size: usize) -> Self {
        let num_parents = (population_size / 10).max(2).min(population_size);
        let num_children_crossover = population_size.saturating_sub(num_parents) * 2 / 3;
        self.population_size = population_size;
        self.num_parents = num_parents;
        self.num_children_crossover = num_children_crossover;
        self.num_children_mutation = population_size
            .saturating_sub(num_parents)
            .saturating_sub(num_children_crossover);
        self
    }

    /// Checks the structural constraints between the tunables. The radius is
    /// checked when the coverage model is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.num_parents == 0 || self.num_parents > self.population_size {
            return Err(ConfigError::ParentsOutOfRange {
                num_parents: self.num_parents,
                population_size: self.population_size,
            });
        }
        let next_generation =
            self.num_parents + self.num_children_crossover + self.num_children_mutation;
        if next_generation != self.population_size {
            return Err(ConfigError::GenerationSizeMismatch {
                num_parents: self.num_parents,
                num_children_crossover: self.num_children_crossover,
                num_children_mutation: self.num_children_mutation,
                population_size: self.population_size,
            });
        }
        if self.num_children_crossover > 0 && self.num_parents < 2 {
            return Err(ConfigError::TooFewParentsForCrossover(self.num_parents));
        }
        if self.max_stagnation == 0 {
            return Err(ConfigError::ZeroStagnation);
        }
        Ok(())
    }
}
