use serde::{Deserialize, Serialize};

/// A transcript segment: one contiguous interval of recognized speech.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// 1-based sequence index, unique and order-significant within one
    /// transcript.
    pub id: i32,
    /// Start of the interval in seconds.
    pub start: f64,
    /// End of the interval in seconds, >= start.
    pub end: f64,
    /// Recognized text, captured verbatim from the decoder.
    pub text: String,
}

/// Complete transcription result.
///
/// Field order matters: it is the key order of the serialized JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub language: String,
    pub duration: f64,
    pub text: String,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Build a transcript from a fully collected segment list.
    ///
    /// `text` is the segment texts joined by single spaces in segment order,
    /// with no trimming or normalization. Callers must have drained the
    /// decoder's segment sequence completely before calling this.
    pub fn assemble(language: String, duration: f64, segments: Vec<Segment>) -> Self {
        let text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            language,
            duration,
            text,
            segments,
        }
    }

    /// Format as JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Format as pretty-printed JSON (2-space indent, non-ASCII kept literal).
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
