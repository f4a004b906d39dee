//! Local Whisper transcription: audio file in, timestamped JSON transcript out.
//!
//! **localscribe** runs whisper.cpp on the local machine, so large audio
//! files transcribe without API limits or quotas. It handles model caching
//! (downloading ggml weights from HuggingFace on first use), audio decoding
//! (via ffmpeg, any format), and transcription with beam search.
//!
//! The default configuration is large-v3 weights quantized to int8, CPU
//! inference, beam width 5, and no word-level timestamps.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> localscribe::Result<()> {
//! let transcript = localscribe::transcribe_file("speech.mp3", "ur").await?;
//! println!("{}", transcript.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod model;
pub mod transcribe;
pub mod types;

pub use config::{Language, Model, Precision, TranscribeOptions};
pub use error::{Error, Result};
pub use transcribe::Transcriber;
pub use types::{Segment, Transcript};

use std::path::Path;

/// Transcribe a local audio file with the default model configuration and
/// the given language hint.
pub async fn transcribe_file(path: impl AsRef<Path>, language: &str) -> Result<Transcript> {
    let options = TranscribeOptions::new().language(language)?;
    let transcriber = Transcriber::new(options).await?;
    transcriber.transcribe(path)
}
