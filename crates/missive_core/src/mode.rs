//! Generation mode selection.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Which kind of generation a session is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Text,
    Image,
}

impl GenerationMode {
    /// Human-readable name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            GenerationMode::Text => "Text",
            GenerationMode::Image => "Image",
        }
    }
}
