//! WAV file reading and writing at the crate's fixed sample rate.

use std::path::Path;

use thiserror::Error;

use crate::SAMPLE_RATE;
use crate::buffer::SampleBuffer;

/// Errors arising from WAV input and output.
#[derive(Debug, Error)]
pub enum WavError {
    /// The underlying codec or file system failed.
    #[error("WAV I/O failed: {0}")]
    Format(#[from] hound::Error),
    /// The file decoded cleanly but held no samples.
    #[error("WAV file contains no samples")]
    Empty,
}

/// Reads a WAV file into a mono sample buffer.
///
/// Multi-channel files contribute only their first channel. Integer
/// samples are normalized by `2^(bits - 1)`; float samples are passed
/// through unchanged. No sample-rate conversion is performed.
///
/// # Errors
///
/// Returns [`WavError::Format`] for unreadable or malformed files and
/// [`WavError::Empty`] for files with no samples.
///
/// # Examples
///
/// ```no_run
/// use voxpop::wav;
///
/// let reference = wav::read_mono("reference.wav")?;
/// # Ok::<(), voxpop::wav::WavError>(())
/// ```
pub fn read_mono<P: AsRef<Path>>(path: P) -> Result<SampleBuffer, WavError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Result<Vec<f64>, hound::Error> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|sample| sample.map(f64::from))
            .collect(),
        hound::SampleFormat::Int => {
            let max_value = (1_i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|sample| sample.map(|value| f64::from(value) / max_value))
                .collect()
        }
    };
    let samples = samples?;

    if samples.is_empty() {
        return Err(WavError::Empty);
    }

    let channel: Vec<f64> = if spec.channels > 1 {
        samples
            .iter()
            .step_by(spec.channels as usize)
            .copied()
            .collect()
    } else {
        samples
    };

    Ok(SampleBuffer::from_samples(channel))
}

/// Writes a sample buffer as a mono 32-bit-float WAV file at the crate's
/// sample rate.
///
/// # Errors
///
/// Returns [`WavError::Format`] when the file cannot be created or
/// written.
pub fn write_mono<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<(), WavError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in buffer.samples() {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::PulseTrain;

    #[test]
    fn test_roundtrip_preserves_the_signal() {
        let path = std::env::temp_dir().join("voxpop_wav_roundtrip.wav");
        let original = PulseTrain::render(400.0, 4410);

        write_mono(&path, &original).unwrap();
        let restored = read_mono(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(restored.len(), original.len());
        for (&a, &b) in restored.samples().iter().zip(original.samples()) {
            assert!((a - b).abs() < 1e-6, "sample drift: {} vs {}", a, b);
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("voxpop_missing.wav");
        assert!(read_mono(path).is_err());
    }
}
