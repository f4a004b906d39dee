use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

/// A validated language for whisper transcription.
///
/// Wraps a language code that has been verified against whisper.cpp's
/// supported language list. Accepts both short codes ("ur", "en") and full
/// names ("urdu", "english").
#[derive(Debug, Clone)]
pub enum Language {
    /// Auto-detect language from audio.
    Auto,
    /// A validated language code (e.g. "ur", "en", "de").
    Code {
        /// Short code as whisper expects it.
        code: String,
        /// Whisper internal language ID.
        id: i32,
    },
}

impl Language {
    /// Create a language from a code or full name, validating against whisper.cpp.
    ///
    /// Returns an error if the language is not supported.
    pub fn new(lang: &str) -> Result<Self, Error> {
        let lower = lang.to_lowercase();
        if lower == "auto" {
            return Ok(Language::Auto);
        }

        match whisper_rs::get_lang_id(&lower) {
            Some(id) => {
                // Normalize to short code
                let code = whisper_rs::get_lang_str(id).unwrap_or(&lower).to_string();
                Ok(Language::Code { code, id })
            }
            None => Err(Error::UnsupportedLanguage(lang.to_string())),
        }
    }

    /// Get the short language code (e.g. "ur"), or None for Auto.
    pub fn code(&self) -> Option<&str> {
        match self {
            Language::Auto => None,
            Language::Code { code, .. } => Some(code),
        }
    }

    /// Whether this is auto-detection mode.
    pub fn is_auto(&self) -> bool {
        matches!(self, Language::Auto)
    }

    /// List all supported languages as (code, full_name) pairs.
    pub fn supported() -> Vec<(&'static str, &'static str)> {
        let max = whisper_rs::get_lang_max_id();
        (0..=max)
            .filter_map(|id| {
                let code = whisper_rs::get_lang_str(id)?;
                let name = whisper_rs::get_lang_str_full(id)?;
                Some((code, name))
            })
            .collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Auto => write!(f, "auto"),
            Language::Code { code, .. } => write!(f, "{code}"),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Auto
    }
}

/// Numeric precision of the model weights.
///
/// Selects which ggml artifact is fetched and loaded: full-precision or a
/// quantized variant. Quantized weights cut memory use enough to run the
/// large models on CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Unquantized weights (f16 ggml file).
    Full,
    /// 8-bit integer quantized weights (q8_0).
    Int8,
    /// q5_0 quantized weights.
    Q5,
}

impl Precision {
    /// Filename suffix for the quantized variants, None for full precision.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Precision::Full => None,
            Precision::Int8 => Some("q8_0"),
            Precision::Q5 => Some("q5_0"),
        }
    }
}

/// Whisper model sizes.
#[derive(Debug, Clone)]
pub enum Model {
    Tiny,
    Base,
    Small,
    Medium,
    LargeV2,
    LargeV3,
    LargeV3Turbo,
    /// User-provided .ggml file path (precision is whatever the file holds).
    Custom(PathBuf),
}

impl Model {
    /// Human-readable name.
    pub fn name(&self) -> &str {
        match self {
            Model::Tiny => "tiny",
            Model::Base => "base",
            Model::Small => "small",
            Model::Medium => "medium",
            Model::LargeV2 => "large-v2",
            Model::LargeV3 => "large-v3",
            Model::LargeV3Turbo => "large-v3-turbo",
            Model::Custom(_) => "custom",
        }
    }

    /// Model filename as published on HuggingFace by the whisper.cpp project.
    pub fn filename(&self, precision: Precision) -> String {
        match self {
            Model::Custom(path) => path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom-model".into()),
            _ => match precision.suffix() {
                Some(suffix) => format!("ggml-{}-{}.bin", self.name(), suffix),
                None => format!("ggml-{}.bin", self.name()),
            },
        }
    }

    /// Parse from string (e.g. CLI argument).
    pub fn parse_name(s: &str) -> Option<Self> {
        match s {
            "tiny" => Some(Model::Tiny),
            "base" => Some(Model::Base),
            "small" => Some(Model::Small),
            "medium" => Some(Model::Medium),
            "large-v2" => Some(Model::LargeV2),
            "large-v3" => Some(Model::LargeV3),
            "large-v3-turbo" => Some(Model::LargeV3Turbo),
            _ => None,
        }
    }
}

/// Builder for transcription options.
///
/// The defaults are the fixed production configuration: large-v3 weights
/// quantized to int8, CPU inference, beam search of width 5, no word-level
/// timestamps.
pub struct TranscribeOptions {
    pub model: Model,
    pub precision: Precision,
    pub language: Language,
    pub beam_size: u32,
    pub cache_dir: Option<PathBuf>,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            model: Model::LargeV3,
            precision: Precision::Int8,
            language: Language::Auto,
            beam_size: 5,
            cache_dir: None,
        }
    }
}

impl TranscribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Set the language hint. Validates against whisper's supported languages.
    /// Accepts codes ("ur", "en") or full names ("urdu", "english").
    pub fn language(mut self, lang: &str) -> Result<Self, Error> {
        self.language = Language::new(lang)?;
        Ok(self)
    }

    pub fn beam_size(mut self, size: u32) -> Self {
        self.beam_size = size;
        self
    }

    pub fn cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = Some(dir);
        self
    }

    /// Resolve the cache directory, defaulting to ~/.cache/localscribe/models.
    pub fn resolve_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from(".cache"))
                .join("localscribe")
                .join("models")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_short_code() {
        let lang = Language::new("ur").unwrap();
        assert_eq!(lang.code(), Some("ur"));
        assert!(!lang.is_auto());
    }

    #[test]
    fn test_language_full_name_normalized() {
        let lang = Language::new("urdu").unwrap();
        assert_eq!(lang.code(), Some("ur"));
    }

    #[test]
    fn test_language_auto() {
        let lang = Language::new("auto").unwrap();
        assert!(lang.is_auto());
        assert_eq!(lang.code(), None);
    }

    #[test]
    fn test_language_unsupported() {
        let err = Language::new("klingon").unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_language_supported_contains_urdu() {
        let langs = Language::supported();
        assert!(langs.iter().any(|(code, _)| *code == "ur"));
    }

    #[test]
    fn test_model_filename_full_precision() {
        assert_eq!(
            Model::LargeV3.filename(Precision::Full),
            "ggml-large-v3.bin"
        );
    }

    #[test]
    fn test_model_filename_quantized() {
        assert_eq!(
            Model::LargeV3.filename(Precision::Int8),
            "ggml-large-v3-q8_0.bin"
        );
        assert_eq!(Model::Small.filename(Precision::Q5), "ggml-small-q5_0.bin");
    }

    #[test]
    fn test_model_filename_custom_ignores_precision() {
        let model = Model::Custom(PathBuf::from("/models/my-model.bin"));
        assert_eq!(model.filename(Precision::Int8), "my-model.bin");
    }

    #[test]
    fn test_model_parse_name() {
        assert!(matches!(Model::parse_name("large-v3"), Some(Model::LargeV3)));
        assert!(matches!(Model::parse_name("tiny"), Some(Model::Tiny)));
        assert!(Model::parse_name("enormous").is_none());
    }

    #[test]
    fn test_options_defaults() {
        let opts = TranscribeOptions::default();
        assert_eq!(opts.model.name(), "large-v3");
        assert_eq!(opts.precision, Precision::Int8);
        assert_eq!(opts.beam_size, 5);
        assert!(opts.language.is_auto());
    }

    #[test]
    fn test_options_resolve_cache_dir_explicit() {
        let opts = TranscribeOptions::new().cache_dir(PathBuf::from("/tmp/models"));
        assert_eq!(opts.resolve_cache_dir(), PathBuf::from("/tmp/models"));
    }

    #[test]
    fn test_options_resolve_cache_dir_default_ends_with_models() {
        let opts = TranscribeOptions::default();
        let dir = opts.resolve_cache_dir();
        assert!(dir.ends_with("localscribe/models"));
    }
}
