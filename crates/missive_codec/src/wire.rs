//! Wire URL encoding and decoding for generation results.
//!
//! A result is encoded into a compact URL so it can ride along on an
//! outgoing message and be reconstructed when that message is later opened.
//! Text results round-trip fully; image results carry metadata only, because
//! the pixels travel via the host message's native attachment.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use missive_core::{
    Citation, EncodedResult, GenerationModel, ImageModel, ImageResult, TextResult, now_epoch,
};
use std::collections::HashMap;
use tracing::debug;
use url::Url;

/// Fixed location every wire URL points at.
pub const WIRE_BASE: &str = "https://aiassistant.app/response";

/// Sentinel standing in for an image URL that was never encoded.
///
/// Decoding an image wire URL yields metadata only; callers must source the
/// actual bytes from the host attachment.
pub const PLACEHOLDER_IMAGE_URL: &str = "mock://placeholder";

fn wire_base() -> Url {
    Url::parse(WIRE_BASE).expect("Valid wire base URL")
}

/// Encodes a result into its wire URL.
pub fn encode(result: &EncodedResult) -> Url {
    match result {
        EncodedResult::Text(text) => encode_text(text),
        EncodedResult::Image(image) => encode_image(image),
    }
}

/// Encodes a text result into its wire URL.
///
/// Citations travel as base64 of their JSON encoding; an empty list encodes
/// as the base64 of `[]` and round-trips to an empty list.
pub fn encode_text(result: &TextResult) -> Url {
    let citations_json = serde_json::to_vec(&result.citations).unwrap_or_default();
    let citations = BASE64.encode(citations_json);

    let mut url = wire_base();
    url.query_pairs_mut()
        .append_pair("type", "text")
        .append_pair("text", &result.text)
        .append_pair("model", result.model.id())
        .append_pair("citations", &citations)
        .append_pair("timestamp", &result.timestamp.to_string());
    url
}

/// Encodes an image result into its wire URL.
///
/// Metadata only: no field of the wire form can hold image bytes or even
/// the image URL, which keeps the message payload small.
pub fn encode_image(result: &ImageResult) -> Url {
    let mut url = wire_base();
    url.query_pairs_mut()
        .append_pair("type", "image")
        .append_pair("prompt", &result.prompt)
        .append_pair("model", result.model.id())
        .append_pair("timestamp", &result.timestamp.to_string());
    url
}

/// Decodes a wire URL back into a result.
///
/// Returns `None` for a missing or unknown `type`, a missing required field,
/// or an unknown model identifier; never panics. An unknown model is a hard
/// failure so a response is never silently relabeled to a different source.
/// Corrupt citations, by contrast, degrade to an empty list.
pub fn decode(url: &Url) -> Option<EncodedResult> {
    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();

    match params.get("type").map(String::as_str) {
        Some("text") => decode_text(&params),
        Some("image") => decode_image(&params),
        Some(other) => {
            debug!(wire_type = other, "Unknown wire type");
            None
        }
        None => {
            debug!("Wire URL missing type parameter");
            None
        }
    }
}

fn decode_text(params: &HashMap<String, String>) -> Option<EncodedResult> {
    let text = params.get("text")?.clone();
    let model = GenerationModel::from_id(params.get("model")?)?;

    let citations = params
        .get("citations")
        .and_then(|raw| BASE64.decode(raw.as_bytes()).ok())
        .and_then(|bytes| serde_json::from_slice::<Vec<Citation>>(&bytes).ok())
        .unwrap_or_default();

    Some(EncodedResult::Text(TextResult {
        text,
        citations,
        model,
        timestamp: decode_timestamp(params),
    }))
}

fn decode_image(params: &HashMap<String, String>) -> Option<EncodedResult> {
    let prompt = params.get("prompt")?.clone();
    let model = ImageModel::from_id(params.get("model")?)?;

    Some(EncodedResult::Image(ImageResult {
        image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        prompt,
        model,
        timestamp: decode_timestamp(params),
    }))
}

fn decode_timestamp(params: &HashMap<String, String>) -> f64 {
    params
        .get("timestamp")
        .and_then(|t| t.parse::<f64>().ok())
        .unwrap_or_else(now_epoch)
}
