//! Request bodies for the generation backend.

use crate::GenerationModel;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of a `POST /ask` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct AskRequest {
    /// Question to answer
    question: String,
    /// Model to route the question to
    model: GenerationModel,
    /// Anonymous device-scoped user identifier
    #[builder(default)]
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

impl AskRequest {
    /// Creates a new request with the given question and model.
    pub fn new(question: impl Into<String>, model: GenerationModel, user_id: Option<String>) -> Self {
        Self {
            question: question.into(),
            model,
            user_id,
        }
    }

    /// Creates a new builder for AskRequest.
    pub fn builder() -> AskRequestBuilder {
        AskRequestBuilder::default()
    }
}

/// Body of a `POST /generate-image` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Prompt describing the image
    prompt: String,
    /// Anonymous device-scoped user identifier
    #[builder(default)]
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

impl ImageRequest {
    /// Creates a new request with the given prompt.
    pub fn new(prompt: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            prompt: prompt.into(),
            user_id,
        }
    }

    /// Creates a new builder for ImageRequest.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}
