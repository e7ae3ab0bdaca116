//! Generation result types.

use crate::{Citation, GenerationModel, ImageModel};
use serde::{Deserialize, Serialize};

/// A completed text generation.
///
/// Produced exactly once per successful `/ask` call and never mutated;
/// `timestamp` is the capture time of generation, not of any later encode
/// or decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextResult {
    /// Generated answer text
    pub text: String,
    /// Source citations (may be empty)
    #[serde(default)]
    pub citations: Vec<Citation>,
    /// Model that produced the answer
    pub model: GenerationModel,
    /// Generation time, epoch seconds
    pub timestamp: f64,
}

/// A completed image generation.
///
/// `image_url` is either an ordinary HTTP(S) URL or an inline
/// `data:image/...;base64,...` URI, depending on the backend variant.
/// Consumers must support both forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    /// Where to obtain the image bytes
    pub image_url: String,
    /// Prompt that produced the image
    pub prompt: String,
    /// Model that produced the image
    pub model: ImageModel,
    /// Generation time, epoch seconds
    pub timestamp: f64,
}

/// Wire form of a generation result.
///
/// Image results carry metadata only: the encoded form deliberately excludes
/// image bytes, which travel out-of-band via the host message's attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EncodedResult {
    Text(TextResult),
    Image(ImageResult),
}

/// Current time as epoch seconds.
pub fn now_epoch() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
