//! Fitness evaluation: synthesize, filter, and score candidates.

use crate::SAMPLE_RATE;
use crate::buffer::{BufferError, SampleBuffer};
use crate::synthesis::{PulseTrain, TapFilter};

use super::Phenotype;
use super::engine::Population;

/// Fundamental frequency of the excitation rendered for every candidate,
/// in Hz.
pub const EXCITATION_FREQUENCY: f64 = 400.0;

/// Scores phenotypes against a shared reference recording.
///
/// For each candidate the evaluator renders a one-second pulse train at
/// [`EXCITATION_FREQUENCY`], filters it with the candidate's coefficients,
/// and measures the mean square error against the reference. The stored
/// fitness is `1 / (1 + MSE)`, so higher is better: a perfect match scores
/// `1.0` and a diverging filter approaches `0.0`.
///
/// The reference buffer is borrowed for the evaluator's lifetime and never
/// mutated. Evaluations are independent of one another; nothing is shared
/// between candidates except the reference.
///
/// # Examples
///
/// ```
/// use voxpop::{FitnessEvaluator, Phenotype, PulseTrain, SAMPLE_RATE};
///
/// let reference = PulseTrain::render(400.0, SAMPLE_RATE as usize);
/// let evaluator = FitnessEvaluator::new(&reference);
///
/// // The identity filter reproduces the excitation exactly.
/// let identity = Phenotype::from_coefficients([1.0, 0.0, 0.0, 0.0, 0.0]);
/// assert_eq!(evaluator.evaluate(&identity).unwrap(), 1.0);
/// ```
pub struct FitnessEvaluator<'a> {
    reference: &'a SampleBuffer,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator scoring against `reference`.
    pub fn new(reference: &'a SampleBuffer) -> Self {
        Self { reference }
    }

    /// Scores a single phenotype without storing the result.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::LengthMismatch`] when the reference is not
    /// exactly one second long.
    pub fn evaluate(&self, phenotype: &Phenotype) -> Result<f64, BufferError> {
        let mut candidate = PulseTrain::render(EXCITATION_FREQUENCY, SAMPLE_RATE as usize);
        let frame_count = candidate.len();
        TapFilter::new(*phenotype.coefficients()).process(&mut candidate, 0, frame_count);

        let mse = candidate.mean_square_error(self.reference)?;
        Ok(1.0 / (1.0 + mse))
    }

    /// Scores every individual in `population`, storing each fitness.
    ///
    /// # Errors
    ///
    /// Stops at the first [`BufferError`]; individuals after the failure
    /// keep their previous fitness.
    pub fn fill_fitness(&self, population: &mut Population) -> Result<(), BufferError> {
        for individual in population.iter_mut() {
            let fitness = self.evaluate(individual)?;
            individual.set_fitness(fitness);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn reference() -> SampleBuffer {
        PulseTrain::render(EXCITATION_FREQUENCY, SAMPLE_RATE as usize)
    }

    #[test]
    fn test_identity_candidate_scores_perfect() {
        let reference = reference();
        let evaluator = FitnessEvaluator::new(&reference);
        let identity = Phenotype::from_coefficients([1.0, 0.0, 0.0, 0.0, 0.0]);

        assert_eq!(evaluator.evaluate(&identity).unwrap(), 1.0);
    }

    #[test]
    fn test_silent_candidate_scores_against_pulse_power() {
        // Zero coefficients silence the candidate entirely, so the error is
        // the mean power of the pulse train: 0.25. Fitness is 1 / 1.25.
        let reference = reference();
        let evaluator = FitnessEvaluator::new(&reference);
        let silent = Phenotype::new();

        let fitness = evaluator.evaluate(&silent).unwrap();
        assert!((fitness - 0.8).abs() < 1e-12, "got {}", fitness);
    }

    #[test]
    fn test_mismatched_reference_is_an_error() {
        let reference = PulseTrain::render(EXCITATION_FREQUENCY, 1000);
        let evaluator = FitnessEvaluator::new(&reference);

        assert!(evaluator.evaluate(&Phenotype::new()).is_err());
    }

    #[test]
    fn test_fill_fitness_matches_individual_evaluation() {
        let reference = reference();
        let evaluator = FitnessEvaluator::new(&reference);
        let mut rng = StdRng::seed_from_u64(17);
        let mut population = Population::random(5, &mut rng);

        evaluator.fill_fitness(&mut population).unwrap();

        for individual in population.iter() {
            let rescored = evaluator.evaluate(individual).unwrap();
            // NaN-safe comparison: a diverged candidate rescoring must
            // reproduce the stored bit pattern exactly.
            assert_eq!(rescored.to_bits(), individual.fitness().to_bits());
        }
    }
}
