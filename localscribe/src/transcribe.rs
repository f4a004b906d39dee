use std::path::Path;

use tracing::{debug, info};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::config::{Language, TranscribeOptions};
use crate::error::{Error, Result};
use crate::types::{Segment, Transcript};
use crate::{audio, model};

/// A loaded whisper model, ready to transcribe.
///
/// Construction resolves the configured model file (downloading on first
/// use) and loads it into a whisper.cpp context. The context can be reused
/// across multiple `transcribe` calls.
pub struct Transcriber {
    ctx: WhisperContext,
    options: TranscribeOptions,
}

impl Transcriber {
    /// Load the model described by `options`. CPU inference only.
    pub async fn new(options: TranscribeOptions) -> Result<Self> {
        let cache_dir = options.resolve_cache_dir();
        let model_path = model::ensure_model(&options.model, options.precision, &cache_dir).await?;

        info!(model = %model_path.display(), "loading whisper model");

        let mut ctx_params = WhisperContextParameters::new();
        ctx_params.use_gpu(false);

        let ctx = WhisperContext::new_with_params(
            model_path
                .to_str()
                .ok_or_else(|| Error::Model("model path contains invalid UTF-8".into()))?,
            ctx_params,
        )?;

        Ok(Self { ctx, options })
    }

    /// Transcribe a local audio file.
    pub fn transcribe(&self, path: impl AsRef<Path>) -> Result<Transcript> {
        let samples = audio::load_audio(path.as_ref())?;
        self.transcribe_samples(&samples)
    }

    /// Transcribe 16kHz mono f32 samples.
    pub fn transcribe_samples(&self, samples: &[f32]) -> Result<Transcript> {
        let mut state = self.ctx.create_state()?;

        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: self.options.beam_size as i32,
            patience: -1.0,
        });

        // Language hint: detection only when explicitly requested
        match &self.options.language {
            Language::Auto => params.set_detect_language(true),
            Language::Code { code, .. } => params.set_language(Some(code)),
        }

        // Word-level timestamps stay off, segment granularity is enough
        params.set_token_timestamps(false);

        // Keep whisper.cpp's own stderr chatter off
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        info!(samples = samples.len(), "running transcription");
        state.full(params, samples)?;

        let num_segments = state.full_n_segments();
        debug!(num_segments, "transcription complete");

        // Single in-order pass over the decoder's segments. Whisper yields
        // them in time order; we keep that order and capture text verbatim.
        let mut segments = Vec::with_capacity(num_segments as usize);
        for i in 0..num_segments {
            let segment = state
                .get_segment(i)
                .ok_or_else(|| Error::Transcription(format!("segment {i} not found")))?;

            let text = segment
                .to_str_lossy()
                .map_err(|e| Error::Transcription(format!("segment text error: {e}")))?
                .into_owned();

            segments.push(Segment {
                // Segment ids are 1-based
                id: i + 1,
                start: segment.start_timestamp() as f64 / 100.0,
                end: segment.end_timestamp() as f64 / 100.0,
                text,
            });
        }

        let duration = samples.len() as f64 / audio::SAMPLE_RATE as f64;

        // Detected language from the whisper state, falling back to the hint
        let language = whisper_rs::get_lang_str(state.full_lang_id_from_state())
            .map(str::to_string)
            .or_else(|| self.options.language.code().map(str::to_string))
            .unwrap_or_else(|| "unknown".into());

        Ok(Transcript::assemble(language, duration, segments))
    }
}
