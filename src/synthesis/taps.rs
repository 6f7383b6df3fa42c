//! Recursive filter driven by a phenotype's chromosome vector.

use crate::buffer::SampleBuffer;
use crate::genetic::CHROMOSOME_COUNT;

/// A recursive filter whose tap weights come straight from a chromosome
/// vector.
///
/// The first coefficient weights the current input sample; the remaining
/// coefficients weight a sliding window of the most recent outputs:
///
/// `y[n] = c[0]*x[n] + c[1]*y[n-1] + ... + c[4]*y[n-4]`
///
/// After each output the window shifts: the newest output is pushed at the
/// front and the oldest entry falls off the back. Arbitrary coefficients
/// make no stability promise; diverging output is scored, not prevented.
pub struct TapFilter {
    coefficients: [f64; CHROMOSOME_COUNT],
}

impl TapFilter {
    /// Creates a filter from a full set of tap weights.
    pub fn new(coefficients: [f64; CHROMOSOME_COUNT]) -> Self {
        Self { coefficients }
    }

    /// Filters `buffer` in place over the half-open frame range
    /// `[start, end)`. The output window starts from silence.
    ///
    /// # Panics
    ///
    /// Panics if `end` exceeds the buffer length or `start > end`.
    pub fn process(&self, buffer: &mut SampleBuffer, start: usize, end: usize) {
        let mut window = [0.0_f64; CHROMOSOME_COUNT];

        for sample in &mut buffer.samples_mut()[start..end] {
            let mut y = self.coefficients[0] * *sample;
            for (tap, &previous) in self.coefficients[1..].iter().zip(&window) {
                y += tap * previous;
            }

            window.rotate_right(1);
            window[0] = y;
            *sample = y;
        }
    }
}
