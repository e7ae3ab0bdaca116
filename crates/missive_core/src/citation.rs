//! Source citations attached to text responses.

use serde::{Deserialize, Serialize};

/// A source reference attached to a text response.
///
/// An empty citation list on a response is a normal outcome, not an error:
/// some models simply do not cite sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source title
    pub title: String,
    /// Source URL
    pub url: String,
    /// Optional excerpt from the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Citation {
    /// Creates a citation without a snippet.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: None,
        }
    }
}
