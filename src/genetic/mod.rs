//! Genetic search over formant-filter coefficient sets.

mod engine;
mod fitness;
mod phenotype;

pub use engine::{GeneticEngine, Population, compare_fitness};
pub use fitness::{EXCITATION_FREQUENCY, FitnessEvaluator};
pub use phenotype::Phenotype;

/// Number of chromosomes (filter coefficients) per phenotype.
pub const CHROMOSOME_COUNT: usize = 5;

/// Individuals created per generation step.
pub const POPULATION_SIZE: usize = 100;

/// Independent tournaments run per generation step.
pub const TOURNAMENT_ROUNDS: usize = 20;

/// Fitness differences within this tolerance rank as equal.
pub const FITNESS_EPSILON: f64 = 0.0001;
