//! Two-pass formant filter built from cascaded low-pass sections.

use std::f64::consts::PI;

use log::debug;

use crate::SAMPLE_RATE;
use crate::buffer::SampleBuffer;

/// Bandwidth scalar for the first low-pass pass.
const FIRST_PASS_BANDWIDTH: f64 = 0.1;
/// Bandwidth scalar for the second low-pass pass.
const SECOND_PASS_BANDWIDTH: f64 = 0.001;

/// A vowel-shaping filter: two sequential two-pole low-pass sections tuned
/// to a pair of formant frequencies.
///
/// Coefficients follow Robert Bristow-Johnson's Audio EQ Cookbook low-pass
/// derivation. Formant frequencies are not validated against Nyquist; a
/// formant at or above half the sample rate produces numerically valid but
/// acoustically meaningless output.
///
/// # Examples
///
/// ```
/// use voxpop::{FormantFilter, PulseTrain, SAMPLE_RATE};
///
/// let mut buffer = PulseTrain::render(200.0, SAMPLE_RATE as usize);
/// FormantFilter::new(700.0, 1300.0).process(&mut buffer, 0, SAMPLE_RATE as usize);
/// ```
pub struct FormantFilter {
    f1: f64,
    f2: f64,
}

/// One low-pass section, already normalized by `a0`.
struct LowPass {
    b0: f64,
    a1: f64,
    a2: f64,
}

impl LowPass {
    fn at(frequency: f64, bandwidth: f64) -> Self {
        let w0 = 2.0 * PI * frequency / f64::from(SAMPLE_RATE);
        let alpha = w0.sin() * bandwidth;
        let b0 = (1.0 - w0.cos()) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * w0.cos();
        let a2 = 1.0 - alpha;

        debug!(
            "lowpass {} Hz: b0/a0 = {}, a1/a0 = {}, a2/a0 = {}",
            frequency,
            b0 / a0,
            a1 / a0,
            a2 / a0
        );

        Self {
            b0: b0 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }
}

impl FormantFilter {
    /// Creates a filter for the given first and second formant frequencies,
    /// in Hz.
    pub fn new(f1: f64, f2: f64) -> Self {
        Self { f1, f2 }
    }

    /// Filters `buffer` in place over the half-open frame range
    /// `[start, end)`.
    ///
    /// The recursive output history (y1, y2) is shared between the two
    /// passes: the second pass continues from the state the first pass left
    /// behind rather than starting from silence.
    ///
    /// # Panics
    ///
    /// Panics if `end` exceeds the buffer length or `start > end`.
    pub fn process(&self, buffer: &mut SampleBuffer, start: usize, end: usize) {
        let mut y1 = 0.0;
        let mut y2 = 0.0;

        let passes = [
            LowPass::at(self.f1, FIRST_PASS_BANDWIDTH),
            LowPass::at(self.f2, SECOND_PASS_BANDWIDTH),
        ];

        for pass in passes {
            for sample in &mut buffer.samples_mut()[start..end] {
                let y0 = pass.b0 * *sample - pass.a1 * y1 - pass.a2 * y2;
                y2 = y1;
                y1 = y0;
                *sample = y0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::PulseTrain;

    #[test]
    fn test_filtering_is_deterministic() {
        let source = PulseTrain::render(200.0, 4410);
        let filter = FormantFilter::new(700.0, 1300.0);

        let mut first = source.clone();
        filter.process(&mut first, 0, 4410);
        let mut second = source.clone();
        filter.process(&mut second, 0, 4410);

        assert_eq!(first.samples(), second.samples());
    }

    #[test]
    fn test_filter_changes_the_signal() {
        let source = PulseTrain::render(200.0, 4410);
        let mut filtered = source.clone();
        FormantFilter::new(700.0, 1300.0).process(&mut filtered, 0, 4410);

        assert_ne!(filtered.samples(), source.samples());
    }

    #[test]
    fn test_samples_outside_the_range_are_untouched() {
        let source = PulseTrain::render(200.0, 300);
        let mut filtered = source.clone();
        FormantFilter::new(700.0, 1300.0).process(&mut filtered, 100, 200);

        assert_eq!(&filtered.samples()[..100], &source.samples()[..100]);
        assert_eq!(&filtered.samples()[200..], &source.samples()[200..]);
        assert_ne!(&filtered.samples()[100..200], &source.samples()[100..200]);
    }

    #[test]
    fn test_attenuates_content_at_nyquist() {
        // An alternating signal sits at the Nyquist frequency, far above
        // both formants. The second pass rings for thousands of samples, so
        // give it a full second to settle before checking the tail.
        let mut buffer = SampleBuffer::from_samples(
            (0..44100).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect(),
        );
        FormantFilter::new(700.0, 1300.0).process(&mut buffer, 0, 44100);

        for &sample in &buffer.samples()[43000..] {
            assert!(sample.abs() < 0.01, "leaked {}", sample);
        }
    }

    #[test]
    fn test_output_stays_finite() {
        let mut buffer = PulseTrain::render(200.0, 44100);
        FormantFilter::new(700.0, 1300.0).process(&mut buffer, 0, 44100);

        assert!(buffer.samples().iter().all(|s| s.is_finite()));
    }
}
