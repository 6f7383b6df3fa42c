//! Candidate solutions: coefficient vectors and their fitness.

use rand::Rng;

use super::CHROMOSOME_COUNT;

/// One candidate solution: a fixed-size vector of filter coefficients and
/// the fitness the evaluator assigned to it.
///
/// Fitness is `0.0` until explicitly computed, and only the fitness
/// evaluator writes it. Higher fitness is better throughout the crate.
#[derive(Debug, Clone, Default)]
pub struct Phenotype {
    coefficients: [f64; CHROMOSOME_COUNT],
    fitness: f64,
}

impl Phenotype {
    /// Creates a phenotype with all-zero coefficients and zero fitness.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a phenotype from a known coefficient set, unscored.
    pub fn from_coefficients(coefficients: [f64; CHROMOSOME_COUNT]) -> Self {
        Self {
            coefficients,
            fitness: 0.0,
        }
    }

    /// Creates a phenotype with coefficients drawn uniformly from
    /// [-2.0, 2.0), quantized to 10000 steps across the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use voxpop::Phenotype;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let phenotype = Phenotype::random(&mut rng);
    /// assert!(phenotype.coefficients().iter().all(|c| (-2.0..2.0).contains(c)));
    /// ```
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut coefficients = [0.0; CHROMOSOME_COUNT];
        for coefficient in &mut coefficients {
            *coefficient = 4.0 * (rng.gen_range(0..10_000) as f64 / 10_000.0) - 2.0;
        }

        Self {
            coefficients,
            fitness: 0.0,
        }
    }

    /// Combines two parents gene by gene: each coefficient is copied from
    /// one parent or the other, never blended. The draw leans slightly
    /// toward `b` (49 of 100 outcomes pick `a`). The child's fitness is
    /// zero until recomputed.
    pub fn crossover<R: Rng>(a: &Self, b: &Self, rng: &mut R) -> Self {
        let mut coefficients = [0.0; CHROMOSOME_COUNT];
        for (index, coefficient) in coefficients.iter_mut().enumerate() {
            *coefficient = if rng.gen_range(0..100) > 50 {
                a.coefficients[index]
            } else {
                b.coefficients[index]
            };
        }

        Self {
            coefficients,
            fitness: 0.0,
        }
    }

    /// The chromosome vector.
    pub fn coefficients(&self) -> &[f64; CHROMOSOME_COUNT] {
        &self.coefficients
    }

    /// The stored fitness; `0.0` means not yet scored.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
