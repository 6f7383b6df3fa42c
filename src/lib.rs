//! Voxpop - vowel synthesis by genetic search
//!
//! This library synthesizes speech-like signals by driving a pulse-train
//! excitation through resonant low-pass "formant" filters, and searches for
//! filter coefficients that reproduce a recorded reference vowel. The search
//! is a small genetic algorithm whose fitness function is the synthesis
//! pipeline itself: render, filter, and score by mean square error against
//! the reference.

pub mod buffer;
pub mod genetic;
pub mod signal;
pub mod synthesis;
#[cfg(feature = "wav-io")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use buffer::{BufferError, SampleBuffer};
pub use genetic::{
    CHROMOSOME_COUNT, FITNESS_EPSILON, FitnessEvaluator, GeneticEngine, POPULATION_SIZE,
    Phenotype, Population, TOURNAMENT_ROUNDS,
};
pub use signal::Signal;
pub use synthesis::{FormantFilter, PulseTrain, TapFilter, Vowel, render_vowel_sequence};

/// Sample rate shared by every synthesis and comparison step, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;
