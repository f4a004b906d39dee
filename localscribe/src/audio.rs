use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Sample rate whisper.cpp expects.
pub const SAMPLE_RATE: u32 = 16_000;

/// Load an audio file and return 16kHz mono f32 samples ready for whisper.
///
/// Decoding, channel downmix, and resampling are delegated to an ffmpeg
/// subprocess, so every format ffmpeg understands works (mp3, wav, ogg,
/// opus, m4a, flac, webm, ...). The samples are passed through untouched:
/// no normalization, no silence trimming.
pub fn load_audio(path: &Path) -> Result<Vec<f32>> {
    if !path.exists() {
        return Err(Error::AudioNotFound {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), "decoding audio");

    let output = Command::new("ffmpeg")
        .args(["-nostdin", "-threads", "0", "-i"])
        .arg(path)
        .args([
            "-f",
            "s16le",
            "-ac",
            "1",
            "-acodec",
            "pcm_s16le",
            "-ar",
            &SAMPLE_RATE.to_string(),
            "-",
        ])
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::AudioDecode("ffmpeg not found, install with: apt install ffmpeg".into())
            } else {
                Error::AudioDecode(format!("failed to run ffmpeg: {e}"))
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::AudioDecode(format!("ffmpeg failed: {stderr}")));
    }

    if output.stdout.is_empty() {
        return Err(Error::AudioDecode("ffmpeg produced no output".into()));
    }

    let samples = samples_from_s16le(&output.stdout);

    let duration = samples.len() as f64 / SAMPLE_RATE as f64;
    debug!(
        samples = samples.len(),
        duration_secs = format!("{duration:.1}"),
        "audio decoded"
    );

    Ok(samples)
}

/// Convert raw s16le PCM bytes to f32 samples in [-1.0, 1.0].
fn samples_from_s16le(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|chunk| {
            let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
            sample as f32 / 32768.0
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_samples_from_s16le_scaling() {
        let bytes = [
            0x00, 0x00, // 0
            0xFF, 0x7F, // i16::MAX
            0x00, 0x80, // i16::MIN
        ];
        let samples = samples_from_s16le(&bytes);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - 0.99997).abs() < 1e-4);
        assert_eq!(samples[2], -1.0);
    }

    #[test]
    fn test_samples_from_s16le_ignores_trailing_byte() {
        let samples = samples_from_s16le(&[0x00, 0x00, 0x7F]);
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_load_rejects_nonexistent() {
        let result = load_audio(&PathBuf::from("/nonexistent/audio.mp3"));
        assert!(matches!(result, Err(Error::AudioNotFound { .. })));
    }

    #[test]
    fn test_load_rejects_non_audio_file() {
        // ffmpeg should refuse a text file (and a missing ffmpeg also errors)
        let tmp = std::env::temp_dir().join("localscribe_test_not_audio.txt");
        std::fs::write(&tmp, "this is not audio").unwrap();
        let result = load_audio(&tmp);
        assert!(result.is_err());
        std::fs::remove_file(&tmp).ok();
    }
}
