//! Signal synthesis: excitation, formant shaping, and coefficient filters.

mod formant;
mod pulse;
mod taps;
mod vowel;

pub use formant::FormantFilter;
pub use pulse::PulseTrain;
pub use taps::TapFilter;
pub use vowel::{Vowel, render_vowel_sequence};
