/// Errors raised while validating a search or running it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("InvalidConfiguration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("DegenerateCandidate: fitness of an empty candidate is undefined")]
    DegenerateCandidate,
    #[error("FarmOutOfRange: farm={farm}, num_farms={num_farms}")]
    FarmOutOfRange { farm: usize, num_farms: usize },
    #[error("CoverageViolation: covered={covered}, num_farms={num_farms}")]
    CoverageViolation { covered: usize, num_farms: usize },
}

/// Configuration and input problems, detected once before the search starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("distance matrix has no farms")]
    EmptyMatrix,
    #[error("distance matrix row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("distance matrix entry [{row}][{col}] = {value} is negative or not finite")]
    InvalidDistance { row: usize, col: usize, value: f64 },
    #[error("coverage radius {0} is negative or not finite")]
    InvalidRadius(f64),
    #[error("farm {farm} is farther than the coverage radius from every site")]
    UncoverableFarm { farm: usize },
    #[error("population size must be greater than 0")]
    EmptyPopulation,
    #[error("num_parents={num_parents} must be in 1..={population_size}")]
    ParentsOutOfRange {
        num_parents: usize,
        population_size: usize,
    },
    #[error(
        "parents ({num_parents}) + crossover children ({num_children_crossover}) + mutation children ({num_children_mutation}) must equal population size ({population_size})"
    )]
    GenerationSizeMismatch {
        num_parents: usize,
        num_children_crossover: usize,
        num_children_mutation: usize,
        population_size: usize,
    },
    #[error("crossover needs at least 2 parents, got {0}")]
    TooFewParentsForCrossover(usize),
    #[error("max_stagnation must be greater than 0")]
    ZeroStagnation,
}

/// A checkpoint whose contents could not have been produced by a search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckpointError {
    #[error("farm set of width {width} needs {expected} words, got {words}")]
    WordCount {
        width: usize,
        expected: usize,
        words: usize,
    },
    #[error("farm set of width {width} has bits set past its width")]
    StrayBits { width: usize },
    #[error("gene {gene} out of range for {width} farms")]
    GeneOutOfRange { gene: usize, width: usize },
    #[error("gene {0} appears more than once")]
    DuplicateGene(usize),
    #[error("membership mask does not match the genes")]
    MembershipMismatch,
    #[error("candidate spans {width} farms, model has {num_farms}")]
    WidthMismatch { width: usize, num_farms: usize },
    #[error("population has {len} members, configuration expects {population_size}")]
    PopulationSize { len: usize, population_size: usize },
    #[error("search has started but records no best solution")]
    MissingBest,
    #[error("configured radius {config} differs from model radius {model}")]
    RadiusMismatch { config: f64, model: f64 },
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
