//! Pulse-train excitation source.

use crate::SAMPLE_RATE;
use crate::buffer::SampleBuffer;
use crate::signal::Signal;

/// A bipolar pulse-train oscillator with a 25% duty cycle.
///
/// The waveform stands in for glottal excitation: for a period of
/// `SAMPLE_RATE / frequency` samples (truncating division), the first
/// quarter of each cycle is `+0.5` and the remainder is `-0.5`, so every
/// sample is drawn from {+0.5, -0.5}.
pub struct PulseTrain {
    period: usize,
    position: usize,
}

impl PulseTrain {
    /// Creates a pulse train at the given fundamental frequency.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Fundamental frequency in Hz; must be positive, and
    ///   frequencies above the sample rate collapse to a one-sample period
    pub fn new(frequency: f64) -> Self {
        let period = (f64::from(SAMPLE_RATE) / frequency) as usize;
        Self {
            period: period.max(1),
            position: 0,
        }
    }

    /// Renders `frame_count` samples into a fresh buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxpop::{PulseTrain, SAMPLE_RATE};
    ///
    /// let buffer = PulseTrain::render(400.0, SAMPLE_RATE as usize);
    /// assert_eq!(buffer.len(), 44100);
    /// assert!(buffer.samples().iter().all(|&s| s == 0.5 || s == -0.5));
    /// ```
    pub fn render(frequency: f64, frame_count: usize) -> SampleBuffer {
        let mut train = Self::new(frequency);
        let mut buffer = SampleBuffer::zeroed(frame_count);
        train.process(buffer.samples_mut());
        buffer
    }

    /// The period of one cycle, in samples.
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Signal for PulseTrain {
    fn next_sample(&mut self) -> f64 {
        let sample = if self.position < self.period / 4 {
            0.5
        } else {
            -0.5
        };

        self.position += 1;
        if self.position == self.period {
            self.position = 0;
        }

        sample
    }
}
