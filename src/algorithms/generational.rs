//! Generational search with stagnation-based stopping.
//!
//! Each generation keeps `num_parents` tournament winners, breeds
//! `num_children_crossover` children by interleaving crossover and
//! `num_children_mutation` children by mutation, and replaces the whole
//! population with parents followed by the children. The run ends once
//! `max_stagnation` consecutive generations fail to beat the best fitness.
//!
//! # Example
//!
//! ```rust
//! use symbios_cover::{CoverSearch, DistanceMatrix, SearchConfig};
//!
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0.0, 1.0, 5.0],
//!     vec![1.0, 0.0, 5.0],
//!     vec![5.0, 5.0, 0.0],
//! ])?;
//! let config = SearchConfig {
//!     radius: 1.0,
//!     max_stagnation: 5,
//!     ..SearchConfig::default().with_population(20)
//! };
//! let report = CoverSearch::new(matrix, config)?.run()?;
//! assert_eq!(report.antennas, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::config::SearchConfig;
use crate::coverage::CoverageModel;
use crate::error::{CheckpointError, Result};
use crate::fitness::Phenotype;
use crate::matrix::DistanceMatrix;
use crate::operators::{crossover::crossover, init, mutation::mutate, selection};
use crate::report::SearchReport;
use crate::seeded::map_seeded;
use crate::Evolver;
use rand::Rng;
use rand::prelude::SeedableRng;
use rand::seq::index;
use rand_pcg::Pcg64; // Specific, serializable generator
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchPhase {
    Initializing,
    Evolving,
    Terminated,
}

/// Best fitness after one generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    /// Best fitness seen so far, this generation included.
    pub best_fitness: f64,
    /// Best fitness within this generation alone.
    pub generation_best: f64,
    pub mean_antennas: f64,
}

/// Everything that carries over between generations.
///
/// `history` keeps at most `max_history` entries, oldest dropped first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchState {
    pub phase: SearchPhase,
    pub generation: usize,
    /// Consecutive generations without improving `best`.
    pub stagnation: usize,
    pub population: Vec<Phenotype>,
    pub best: Option<Phenotype>,
    pub history: Vec<GenerationStats>,
}

impl SearchState {
    fn new() -> Self {
        Self {
            phase: SearchPhase::Initializing,
            generation: 0,
            stagnation: 0,
            population: Vec::new(),
            best: None,
            history: Vec::new(),
        }
    }
}

/// A search in progress.
///
/// Serializing captures the whole run, RNG included, so a deserialized search
/// continues exactly where the original left off. Deserialization rejects
/// checkpoints the search could not have produced.
#[derive(Serialize, Deserialize)]
#[serde(try_from = "Checkpoint")]
pub struct CoverSearch {
    model: CoverageModel,
    config: SearchConfig,
    state: SearchState,
    rng: Pcg64,
}

#[derive(Deserialize)]
struct Checkpoint {
    model: CoverageModel,
    config: SearchConfig,
    state: SearchState,
    rng: Pcg64,
}

impl TryFrom<Checkpoint> for CoverSearch {
    type Error = CheckpointError;

    fn try_from(checkpoint: Checkpoint) -> std::result::Result<Self, Self::Error> {
        let Checkpoint {
            model,
            config,
            state,
            rng,
        } = checkpoint;
        config.validate()?;
        if config.radius != model.radius() {
            return Err(CheckpointError::RadiusMismatch {
                config: config.radius,
                model: model.radius(),
            });
        }

        if state.phase != SearchPhase::Initializing {
            if state.best.is_none() {
                return Err(CheckpointError::MissingBest);
            }
            if state.population.len() != config.population_size {
                return Err(CheckpointError::PopulationSize {
                    len: state.population.len(),
                    population_size: config.population_size,
                });
            }
        }
        let num_farms = model.num_farms();
        if let Some(width) = state
            .population
            .iter()
            .chain(&state.best)
            .map(|p| p.candidate.members().width())
            .find(|&width| width != num_farms)
        {
            return Err(CheckpointError::WidthMismatch { width, num_farms });
        }

        Ok(Self {
            model,
            config,
            state,
            rng,
        })
    }
}

impl CoverSearch {
    /// Validates `config` and `matrix` and prepares a search. No candidates
    /// are built until the first [`step`](Evolver::step).
    pub fn new(matrix: DistanceMatrix, config: SearchConfig) -> Result<Self> {
        let model = CoverageModel::new(matrix, config.radius)?;
        Self::from_model(model, config)
    }

    /// Like [`new`](Self::new) with a prebuilt model. `config.radius` is
    /// replaced by the model's radius.
    pub fn from_model(model: CoverageModel, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let config = SearchConfig {
            radius: model.radius(),
            ..config
        };
        Ok(Self {
            rng: Pcg64::seed_from_u64(config.seed),
            model,
            config,
            state: SearchState::new(),
        })
    }

    pub fn phase(&self) -> SearchPhase {
        self.state.phase
    }

    /// Completed generations, not counting initialization.
    pub fn generation(&self) -> usize {
        self.state.generation
    }

    pub fn stagnation(&self) -> usize {
        self.state.stagnation
    }

    pub fn best(&self) -> Option<&Phenotype> {
        self.state.best.as_ref()
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.state.history
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn model(&self) -> &CoverageModel {
        &self.model
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Steps until the search terminates and reports the best solution.
    #[instrument(level = "info", skip(self), fields(num_farms = self.model.num_farms(), radius = self.config.radius))]
    pub fn run(&mut self) -> Result<SearchReport> {
        while self.step()? != SearchPhase::Terminated {}
        let report = self
            .report()
            .expect("a terminated search has a best solution");
        info!(
            fitness = report.fitness,
            antennas = report.antennas,
            generations = report.generations,
            "search finished"
        );
        Ok(report)
    }

    /// The best solution so far, or `None` before initialization.
    pub fn report(&self) -> Option<SearchReport> {
        self.state.best.as_ref().map(|best| SearchReport {
            fitness: best.fitness,
            antennas: best.antennas(),
            sites: best.candidate.sorted_sites(),
            generations: self.state.generation,
            stagnation: self.state.stagnation,
            num_farms: self.model.num_farms(),
            radius: self.model.radius(),
        })
    }

    fn initialize(&mut self) -> Result<()> {
        let (population, best) =
            init::build_initial_population(self.config.population_size, &self.model, &mut self.rng)?;
        info!(
            fitness = best.fitness,
            antennas = best.antennas(),
            "initial population ready"
        );
        self.state.population = population;
        self.state.best = Some(best);
        self.state.stagnation = 0;
        Ok(())
    }

    /// Runs one generation. State is only written once every child has been
    /// produced and scored.
    fn evolve(&mut self) -> Result<()> {
        let Self {
            model,
            config,
            state,
            rng,
        } = self;
        let (model, config) = (&*model, &*config);

        let mut stagnation = state.stagnation + 1;
        let parents = selection::select_parents(&state.population, config.num_parents, rng)?;

        let crossover_children = map_seeded(rng, config.num_children_crossover, |r| {
            let picks = index::sample(r, parents.len(), 2);
            let (lhs, rhs) = (&parents[picks.index(0)], &parents[picks.index(1)]);
            Phenotype::evaluate_feasible(model, crossover(&lhs.candidate, &rhs.candidate, model, r)?)
        })?;

        let mutation_children = map_seeded(rng, config.num_children_mutation, |r| {
            let parent = &parents[r.random_range(0..parents.len())];
            Phenotype::evaluate_feasible(model, mutate(&parent.candidate, model, r)?)
        })?;

        let mut population = parents;
        population.extend(crossover_children);
        population.extend(mutation_children);

        let mut best = state.best.clone();
        let mut generation_best = f64::NEG_INFINITY;
        for p in &population {
            generation_best = generation_best.max(p.fitness);
            if best.as_ref().is_none_or(|b| p.fitness > b.fitness) {
                best = Some(p.clone());
                stagnation = 0;
            }
        }

        let generation = state.generation + 1;
        let best_fitness = best.as_ref().map_or(0.0, |b| b.fitness);
        if stagnation == 0 {
            info!(
                generation,
                fitness = best_fitness,
                antennas = best.as_ref().map_or(0, Phenotype::antennas),
                "improved best solution"
            );
        }
        let mean_antennas =
            population.iter().map(Phenotype::antennas).sum::<usize>() as f64 / population.len() as f64;
        debug!(generation, generation_best, mean_antennas, stagnation, "generation complete");

        if config.max_history > 0 {
            state.history.push(GenerationStats {
                generation,
                best_fitness,
                generation_best,
                mean_antennas,
            });
            let excess = state.history.len().saturating_sub(config.max_history);
            state.history.drain(..excess);
        }
        state.population = population;
        state.best = best;
        state.stagnation = stagnation;
        state.generation = generation;
        Ok(())
    }

    fn should_terminate(&self) -> bool {
        self.state.stagnation >= self.config.max_stagnation
            || self
                .config
                .max_generations
                .is_some_and(|max| self.state.generation >= max)
    }
}

impl Evolver for CoverSearch {
    /// Advances one transition: initialization on the first call, then one
    /// generation per call. Does nothing once terminated.
    fn step(&mut self) -> Result<SearchPhase> {
        match self.state.phase {
            SearchPhase::Initializing => self.initialize()?,
            SearchPhase::Evolving => self.evolve()?,
            SearchPhase::Terminated => return Ok(SearchPhase::Terminated),
        }
        self.state.phase = if self.should_terminate() {
            SearchPhase::Terminated
        } else {
            SearchPhase::Evolving
        };
        Ok(self.state.phase)
    }

    fn population(&self) -> &[Phenotype] {
        &self.state.population
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};

    fn identity_matrix(n: usize) -> DistanceMatrix {
        DistanceMatrix::new(
            (0..n)
                .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 10.0 }).collect())
                .collect(),
        )
        .unwrap()
    }

    fn small_config(population: usize, max_stagnation: usize) -> SearchConfig {
        SearchConfig {
            radius: 1.0,
            max_stagnation,
            ..SearchConfig::default().with_population(population)
        }
    }

    #[test]
    fn test_first_step_initializes() {
        let mut search = CoverSearch::new(identity_matrix(3), small_config(10, 5)).unwrap();
        assert_eq!(search.phase(), SearchPhase::Initializing);
        assert!(search.report().is_none());

        assert_eq!(search.step().unwrap(), SearchPhase::Evolving);
        assert_eq!(search.population().len(), 10);
        assert_eq!(search.generation(), 0);
        assert_eq!(search.best().unwrap().fitness, 1.0);
    }

    #[test]
    fn test_generation_keeps_population_size() {
        let mut search = CoverSearch::new(identity_matrix(4), small_config(30, 5)).unwrap();
        search.step().unwrap();
        search.step().unwrap();
        assert_eq!(search.population().len(), 30);
        assert_eq!(search.generation(), 1);
        assert_eq!(search.history().len(), 1);
    }

    #[test]
    fn test_stops_after_max_stagnation_without_improvement() {
        // The optimum is found at initialization, so no generation improves.
        let mut search = CoverSearch::new(identity_matrix(3), small_config(10, 4)).unwrap();
        let report = search.run().unwrap();
        assert_eq!(report.generations, 4);
        assert_eq!(report.stagnation, 4);
        assert_eq!(report.antennas, 3);
        assert_eq!(search.step().unwrap(), SearchPhase::Terminated);
        assert_eq!(search.generation(), 4);
    }

    #[test]
    fn test_max_generations_caps_the_run() {
        let config = SearchConfig {
            max_generations: Some(2),
            ..small_config(10, 50)
        };
        let report = CoverSearch::new(identity_matrix(3), config).unwrap().run().unwrap();
        assert_eq!(report.generations, 2);
    }

    #[test]
    fn test_history_keeps_most_recent_generations() {
        let config = SearchConfig {
            max_history: 3,
            max_generations: Some(7),
            ..small_config(10, 50)
        };
        let mut search = CoverSearch::new(identity_matrix(3), config).unwrap();
        search.run().unwrap();
        let generations: Vec<usize> = search.history().iter().map(|h| h.generation).collect();
        assert_eq!(generations, vec![5, 6, 7]);

        let config = SearchConfig {
            max_history: 0,
            max_generations: Some(3),
            ..small_config(10, 50)
        };
        let mut search = CoverSearch::new(identity_matrix(3), config).unwrap();
        search.run().unwrap();
        assert!(search.history().is_empty());
    }

    fn checkpoint(search: &CoverSearch) -> Checkpoint {
        Checkpoint {
            model: search.model.clone(),
            config: search.config.clone(),
            state: search.state.clone(),
            rng: search.rng.clone(),
        }
    }

    fn started_search() -> CoverSearch {
        let mut search = CoverSearch::new(identity_matrix(4), small_config(20, 3)).unwrap();
        search.step().unwrap();
        search
    }

    #[test]
    fn test_checkpoint_accepts_untouched_state() {
        let search = started_search();
        let restored = CoverSearch::try_from(checkpoint(&search)).ok().unwrap();
        assert_eq!(restored.population(), search.population());
    }

    #[test]
    fn test_checkpoint_rejects_invalid_configuration() {
        let search = started_search();
        let mut cp = checkpoint(&search);
        cp.config.num_parents = 1;
        cp.config.num_children_mutation = 7;
        assert_eq!(
            CoverSearch::try_from(cp).err(),
            Some(CheckpointError::InvalidConfiguration(
                ConfigError::TooFewParentsForCrossover(1)
            ))
        );

        let mut cp = checkpoint(&search);
        cp.config.radius = 2.0;
        assert!(matches!(
            CoverSearch::try_from(cp).err(),
            Some(CheckpointError::RadiusMismatch { .. })
        ));
    }

    #[test]
    fn test_checkpoint_rejects_inconsistent_state() {
        let mut search = started_search();
        search.run().unwrap();

        let mut cp = checkpoint(&search);
        cp.state.best = None;
        assert_eq!(CoverSearch::try_from(cp).err(), Some(CheckpointError::MissingBest));

        let mut cp = checkpoint(&search);
        cp.state.population.pop();
        assert_eq!(
            CoverSearch::try_from(cp).err(),
            Some(CheckpointError::PopulationSize {
                len: 19,
                population_size: 20
            })
        );

        let mut cp = checkpoint(&search);
        if let Some(best) = cp.state.best.as_mut() {
            best.candidate = crate::candidate::Candidate::from_sites(5, [0, 1, 2, 3]);
        }
        assert_eq!(
            CoverSearch::try_from(cp).err(),
            Some(CheckpointError::WidthMismatch {
                width: 5,
                num_farms: 4
            })
        );
    }

    #[test]
    fn test_tampered_bincode_checkpoint_is_rejected() {
        let mut search = started_search();
        search.state.best = None;
        let bytes = bincode::serialize(&search).unwrap();
        assert!(bincode::deserialize::<CoverSearch>(&bytes).is_err());
    }

    #[test]
    fn test_invalid_configuration_is_rejected_up_front() {
        let config = SearchConfig {
            num_parents: 0,
            ..small_config(10, 5)
        };
        assert!(matches!(
            CoverSearch::new(identity_matrix(3), config),
            Err(Error::InvalidConfiguration(ConfigError::ParentsOutOfRange { .. }))
        ));

        let config = SearchConfig {
            radius: -2.0,
            ..small_config(10, 5)
        };
        assert!(matches!(
            CoverSearch::new(identity_matrix(3), config),
            Err(Error::InvalidConfiguration(ConfigError::InvalidRadius(_)))
        ));
    }
}
