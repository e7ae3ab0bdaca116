//! Backend model identifiers.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Text-generation backends the assistant can query.
///
/// Raw identifiers are the wire form used by the backend and the response
/// codec. Resolution from a raw identifier is strict: an unknown identifier
/// never falls back to a default model.
///
/// # Examples
///
/// ```
/// use missive_core::GenerationModel;
///
/// assert_eq!(GenerationModel::Claude.id(), "claude");
/// assert_eq!(GenerationModel::from_id("gpt4"), Some(GenerationModel::Gpt4));
/// assert_eq!(GenerationModel::from_id("unknown-xyz"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum GenerationModel {
    Claude,
    Gpt4,
    Gemini,
    Perplexity,
}

impl GenerationModel {
    /// Raw identifier used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            GenerationModel::Claude => "claude",
            GenerationModel::Gpt4 => "gpt4",
            GenerationModel::Gemini => "gemini",
            GenerationModel::Perplexity => "perplexity",
        }
    }

    /// Resolves a raw identifier to a model, strictly.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "claude" => Some(GenerationModel::Claude),
            "gpt4" => Some(GenerationModel::Gpt4),
            "gemini" => Some(GenerationModel::Gemini),
            "perplexity" => Some(GenerationModel::Perplexity),
            _ => None,
        }
    }

    /// Human-readable name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            GenerationModel::Claude => "Claude",
            GenerationModel::Gpt4 => "GPT-4",
            GenerationModel::Gemini => "Gemini",
            GenerationModel::Perplexity => "Perplexity",
        }
    }

    /// Glyph shown next to the model name.
    pub fn glyph(&self) -> &'static str {
        match self {
            GenerationModel::Claude => "🤖",
            GenerationModel::Gpt4 => "💬",
            GenerationModel::Gemini => "✨",
            GenerationModel::Perplexity => "🔍",
        }
    }
}

/// Image-generation backends.
///
/// Same shape as [`GenerationModel`]: descriptive lookup tables only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum ImageModel {
    Dalle,
}

impl ImageModel {
    /// Raw identifier used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            ImageModel::Dalle => "dalle",
        }
    }

    /// Resolves a raw identifier to a model, strictly.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "dalle" => Some(ImageModel::Dalle),
            _ => None,
        }
    }

    /// Human-readable name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            ImageModel::Dalle => "DALL-E 3",
        }
    }

    /// Glyph shown next to the model name.
    pub fn glyph(&self) -> &'static str {
        match self {
            ImageModel::Dalle => "🎨",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn model_ids_round_trip() {
        for model in GenerationModel::iter() {
            assert_eq!(GenerationModel::from_id(model.id()), Some(model));
        }
        for model in ImageModel::iter() {
            assert_eq!(ImageModel::from_id(model.id()), Some(model));
        }
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        assert_eq!(GenerationModel::from_id("unknown-xyz"), None);
        assert_eq!(ImageModel::from_id("midjourney"), None);
    }

    #[test]
    fn serde_uses_raw_ids() {
        let json = serde_json::to_string(&GenerationModel::Perplexity).expect("serialize");
        assert_eq!(json, "\"perplexity\"");
        let model: GenerationModel = serde_json::from_str("\"gemini\"").expect("deserialize");
        assert_eq!(model, GenerationModel::Gemini);
    }
}
