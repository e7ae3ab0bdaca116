//! Outgoing message card assembly.

use crate::wire;
use derive_getters::Getters;
use missive_core::{ImageResult, TextResult};
use url::Url;

/// What the host message carries for a generation result: a caption and the
/// wire URL. The preview image itself is composited by the host shell.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct MessageCard {
    /// Caption shown under the card preview
    caption: String,
    /// Wire URL attached to the message
    url: Url,
}

impl MessageCard {
    /// Builds the card for a text result.
    ///
    /// # Examples
    ///
    /// ```
    /// use missive_codec::MessageCard;
    /// use missive_core::{Citation, GenerationModel, TextResult};
    ///
    /// let result = TextResult {
    ///     text: "Answer".to_string(),
    ///     citations: vec![Citation::new("Source", "https://example.com")],
    ///     model: GenerationModel::Claude,
    ///     timestamp: 1_700_000_000.0,
    /// };
    /// assert_eq!(MessageCard::for_text(&result).caption(), "Claude • 1 source");
    /// ```
    pub fn for_text(result: &TextResult) -> Self {
        let count = result.citations.len();
        let caption = format!(
            "{} • {} source{}",
            result.model.display_name(),
            count,
            if count == 1 { "" } else { "s" }
        );
        Self {
            caption,
            url: wire::encode_text(result),
        }
    }

    /// Builds the card for an image result.
    pub fn for_image(result: &ImageResult) -> Self {
        Self {
            caption: format!("{} • Generated Image", result.model.display_name()),
            url: wire::encode_image(result),
        }
    }
}
