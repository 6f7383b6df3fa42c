//! Population container and the engine driving selection and reproduction.

use std::cmp::Ordering;

use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::buffer::BufferError;

use super::fitness::FitnessEvaluator;
use super::phenotype::Phenotype;
use super::{FITNESS_EPSILON, POPULATION_SIZE, TOURNAMENT_ROUNDS};

/// An ordered collection of phenotypes evaluated and selected together.
///
/// A population owns its individuals; discarding the population discards
/// the whole generation. No history is kept across generations.
pub struct Population {
    individuals: Vec<Phenotype>,
}

impl Population {
    /// Builds a population of `count` random phenotypes.
    pub fn random<R: Rng>(count: usize, rng: &mut R) -> Self {
        Self {
            individuals: (0..count).map(|_| Phenotype::random(rng)).collect(),
        }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individuals in their current order.
    pub fn individuals(&self) -> &[Phenotype] {
        &self.individuals
    }

    /// Iterates over the individuals.
    pub fn iter(&self) -> std::slice::Iter<'_, Phenotype> {
        self.individuals.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Phenotype> {
        self.individuals.iter_mut()
    }

    /// Sorts individuals by stored fitness, best (highest) first.
    ///
    /// Fitness values within [`FITNESS_EPSILON`] of each other rank as
    /// equal; the sort is stable, so epsilon-ties keep their relative
    /// order.
    pub fn sort_by_fitness(&mut self) {
        self.individuals
            .sort_by(|a, b| compare_fitness(b.fitness(), a.fitness()));
    }
}

/// Epsilon-tolerant fitness ordering: differences within
/// [`FITNESS_EPSILON`] compare as equal. `NaN` compares as equal to
/// everything, so diverged candidates neither rise nor sink on their own.
pub fn compare_fitness(a: f64, b: f64) -> Ordering {
    let difference = a - b;
    if difference > FITNESS_EPSILON {
        Ordering::Greater
    } else if difference < -FITNESS_EPSILON {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Drives random generation, tournament selection, and crossover.
///
/// The engine owns its random stream; nothing in the crate touches global
/// random state. `new()` uses the thread-local generator, and `with_rng`
/// accepts any [`Rng`], which makes runs reproducible with a seeded
/// generator:
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use voxpop::GeneticEngine;
///
/// let mut engine = GeneticEngine::with_rng(StdRng::seed_from_u64(42));
/// let generation = engine.create_generation(10);
/// assert_eq!(generation.len(), 10);
/// ```
pub struct GeneticEngine<R: Rng = ThreadRng> {
    rng: R,
}

impl GeneticEngine<ThreadRng> {
    /// Creates an engine backed by the thread-local random generator.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for GeneticEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GeneticEngine<R> {
    /// Creates an engine backed by a caller-provided random generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Builds a generation of `count` random phenotypes.
    pub fn create_generation(&mut self, count: usize) -> Population {
        Population::random(count, &mut self.rng)
    }

    /// Picks two distinct individuals at random and returns the fitter of
    /// the pair: the higher stored fitness, which corresponds to the lower
    /// synthesis error.
    ///
    /// Index collisions are resolved by redrawing both indices. A `NaN`
    /// fitness never wins against a finite one.
    ///
    /// # Panics
    ///
    /// Panics if the population has fewer than two individuals.
    pub fn tournament_select<'p>(&mut self, population: &'p Population) -> &'p Phenotype {
        assert!(
            population.len() >= 2,
            "tournament needs at least two individuals"
        );

        let mut a = self.rng.gen_range(0..population.len());
        let mut b = self.rng.gen_range(0..population.len());
        while a == b {
            a = self.rng.gen_range(0..population.len());
            b = self.rng.gen_range(0..population.len());
        }

        let p_a = &population.individuals[a];
        let p_b = &population.individuals[b];

        if p_b.fitness().is_nan() {
            return p_a;
        }
        if p_a.fitness() > p_b.fitness() { p_a } else { p_b }
    }

    /// Produces a child from two parents; see [`Phenotype::crossover`].
    pub fn crossover(&mut self, a: &Phenotype, b: &Phenotype) -> Phenotype {
        Phenotype::crossover(a, b, &mut self.rng)
    }

    /// Runs one full generation step: creates [`POPULATION_SIZE`] random
    /// individuals, scores them all, then runs [`TOURNAMENT_ROUNDS`]
    /// independent tournaments over the same generation and returns the
    /// winners. The generation itself is dropped afterwards.
    ///
    /// # Errors
    ///
    /// Propagates [`BufferError::LengthMismatch`] from fitness evaluation.
    pub fn run_generation(
        &mut self,
        evaluator: &FitnessEvaluator<'_>,
    ) -> Result<Vec<Phenotype>, BufferError> {
        let mut generation = self.create_generation(POPULATION_SIZE);
        evaluator.fill_fitness(&mut generation)?;

        let mut winners = Vec::with_capacity(TOURNAMENT_ROUNDS);
        for round in 0..TOURNAMENT_ROUNDS {
            let winner = self.tournament_select(&generation).clone();
            debug!("tournament {}: fitness {}", round, winner.fitness());
            winners.push(winner);
        }

        Ok(winners)
    }

    /// Breeds a next generation from an already-scored population:
    /// `offspring_count` children, each crossed from two
    /// tournament-selected parents. The offspring carry zero fitness;
    /// score them with [`FitnessEvaluator::fill_fitness`] before selecting
    /// from them.
    ///
    /// Chaining `run_generation` / `breed` / `fill_fitness` is how
    /// multi-generation evolution is expressed; the engine imposes no
    /// convergence criterion of its own.
    pub fn breed(&mut self, population: &Population, offspring_count: usize) -> Population {
        let individuals = (0..offspring_count)
            .map(|_| {
                let mother = self.tournament_select(population);
                let father = self.tournament_select(population);
                Phenotype::crossover(mother, father, &mut self.rng)
            })
            .collect();

        Population { individuals }
    }
}
