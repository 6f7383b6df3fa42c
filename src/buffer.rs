//! Audio sample buffers and the mean-square-error comparison metric.

use log::warn;
use thiserror::Error;

/// Errors arising from buffer operations.
#[derive(Debug, Error)]
pub enum BufferError {
    /// Two buffers of different lengths were compared. A mean square error
    /// over mismatched buffers is undefined, so no finite value is ever
    /// produced for this case.
    #[error("buffer lengths differ: {left} vs {right}")]
    LengthMismatch {
        /// Length of the buffer the comparison was called on.
        left: usize,
        /// Length of the buffer it was compared against.
        right: usize,
    },
}

/// An owned, fixed-length sequence of mono audio samples.
///
/// Legitimate signal values lie in [-1.0, 1.0]. Values outside that range
/// indicate a synthesis or filter defect upstream; they are counted and
/// reported during comparison rather than clamped.
///
/// # Examples
///
/// ```
/// use voxpop::SampleBuffer;
///
/// let a = SampleBuffer::from_samples(vec![0.5, -0.5]);
/// let b = SampleBuffer::from_samples(vec![0.5, 0.5]);
/// assert_eq!(a.mean_square_error(&b).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<f64>,
}

impl SampleBuffer {
    /// Creates a buffer of `length` silent samples.
    pub fn zeroed(length: usize) -> Self {
        Self {
            samples: vec![0.0; length],
        }
    }

    /// Wraps an existing sample vector.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Read access to the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Write access to the samples, for in-place processing.
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Computes the mean square error against another buffer of the same
    /// length: `(1/len) * sum((a[i] - b[i])^2)`.
    ///
    /// Samples outside [-1.0, 1.0] on either side are counted and surfaced
    /// through a single warning per call; they do not abort the comparison.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::LengthMismatch`] when the buffer lengths
    /// differ. Callers must handle the error before using the score for
    /// ranking; no sentinel value leaks into fitness ordering.
    pub fn mean_square_error(&self, other: &SampleBuffer) -> Result<f64, BufferError> {
        if self.len() != other.len() {
            return Err(BufferError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        if self.is_empty() {
            return Ok(0.0);
        }

        let mut out_of_range = 0usize;
        let mut sum = 0.0;
        for (&a, &b) in self.samples.iter().zip(&other.samples) {
            if !(-1.0..=1.0).contains(&a) {
                out_of_range += 1;
            }
            if !(-1.0..=1.0).contains(&b) {
                out_of_range += 1;
            }
            let difference = a - b;
            sum += difference * difference;
        }

        if out_of_range > 0 {
            warn!("{} samples outside [-1, 1] during comparison", out_of_range);
        }

        Ok(sum / self.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_comparison_is_zero() {
        for length in [1, 2, 7, 1024] {
            let buffer = SampleBuffer::from_samples((0..length).map(|i| (i as f64).sin()).collect());
            assert_eq!(buffer.mean_square_error(&buffer).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_comparison_is_symmetric() {
        let a = SampleBuffer::from_samples(vec![0.1, -0.4, 0.9, 0.0]);
        let b = SampleBuffer::from_samples(vec![-0.2, 0.3, 0.5, -1.0]);
        assert_eq!(
            a.mean_square_error(&b).unwrap(),
            b.mean_square_error(&a).unwrap()
        );
    }

    #[test]
    fn test_known_error_value() {
        // Differences are 0 and 1, so the mean of the squares is 0.5.
        let a = SampleBuffer::from_samples(vec![0.5, -0.5]);
        let b = SampleBuffer::from_samples(vec![0.5, 0.5]);
        assert_eq!(a.mean_square_error(&b).unwrap(), 0.5);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let a = SampleBuffer::zeroed(10);
        let b = SampleBuffer::zeroed(11);
        match a.mean_square_error(&b) {
            Err(BufferError::LengthMismatch { left, right }) => {
                assert_eq!(left, 10);
                assert_eq!(right, 11);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_samples_do_not_abort() {
        let a = SampleBuffer::from_samples(vec![2.0]);
        let b = SampleBuffer::from_samples(vec![0.0]);
        assert_eq!(a.mean_square_error(&b).unwrap(), 4.0);
    }

    #[test]
    fn test_empty_buffers_compare_clean() {
        let a = SampleBuffer::zeroed(0);
        let b = SampleBuffer::zeroed(0);
        assert_eq!(a.mean_square_error(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_zeroed_buffer() {
        let buffer = SampleBuffer::zeroed(128);
        assert_eq!(buffer.len(), 128);
        assert!(buffer.samples().iter().all(|&s| s == 0.0));
    }
}
