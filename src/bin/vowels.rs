//! Renders the five-vowel formant sequence to a WAV file.

use anyhow::Result;
use log::info;
use voxpop::{render_vowel_sequence, wav};

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "out.wav".to_string());

    let buffer = render_vowel_sequence(200.0);
    wav::write_mono(&path, &buffer)?;
    info!("wrote {} frames to {}", buffer.len(), path);

    Ok(())
}
