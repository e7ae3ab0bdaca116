//! HTTP client for the generation backend.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use missive_core::{
    AskRequest, ClientConfig, EncodedResult, GenerationMode, GenerationModel, ImageRequest,
    ImageResult, TextResult,
};
use missive_error::{ClientError, ConfigError, MissiveResult};
use reqwest::{Client, Url};
use tracing::{debug, error, instrument};

/// Client for the generation backend.
///
/// Performs exactly one network round trip per call and never retries:
/// every failure surfaces to the caller, which owns any retry-on-user-action
/// policy.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    client: Client,
    config: ClientConfig,
}

impl AssistantClient {
    /// Creates a client from configuration.
    ///
    /// The client-level timeout is the hard resource ceiling; `ask_text` and
    /// `generate_image` carry a tighter per-request timeout on top of it.
    pub fn new(config: ClientConfig) -> MissiveResult<Self> {
        let client = Client::builder()
            .timeout(config.resource_timeout())
            .build()
            .map_err(|e| ConfigError::http_client(e.to_string()))?;

        debug!(base_url = %config.base_url(), "Created assistant client");

        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let raw = format!("{}/{}", self.config.base_url().trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Asks a text-generation model a question.
    ///
    /// # Errors
    ///
    /// `Api` for a non-2xx status, `Decoding` when the body does not match
    /// the expected shape, `Transport` for connectivity or timeout failures.
    #[instrument(skip(self, question), fields(model = model.id()))]
    pub async fn ask_text(
        &self,
        question: &str,
        model: GenerationModel,
        user_id: Option<&str>,
    ) -> Result<TextResult, ClientError> {
        let url = self.endpoint("ask")?;
        let body = AskRequest::new(question, model, user_id.map(str::to_string));

        debug!(model = model.id(), "Sending ask request");

        let response = self
            .client
            .post(url)
            .timeout(self.config.request_timeout())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ClientError::Transport {
                    message: e.to_string(),
                    timeout: e.is_timeout(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: TextResult = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ClientError::Decoding(format!("Failed to parse ask response: {}", e))
        })?;

        debug!(
            citations = result.citations.len(),
            "Received text response"
        );

        Ok(result)
    }

    /// Generates an image from a prompt.
    ///
    /// The returned `image_url` may be an ordinary URL or an inline base64
    /// data URI; callers must not assume one form.
    #[instrument(skip(self, prompt))]
    pub async fn generate_image(
        &self,
        prompt: &str,
        user_id: Option<&str>,
    ) -> Result<ImageResult, ClientError> {
        let url = self.endpoint("generate-image")?;
        let body = ImageRequest::new(prompt, user_id.map(str::to_string));

        debug!("Sending image generation request");

        let response = self
            .client
            .post(url)
            .timeout(self.config.request_timeout())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ClientError::Transport {
                    message: e.to_string(),
                    timeout: e.is_timeout(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: ImageResult = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ClientError::Decoding(format!("Failed to parse image response: {}", e))
        })?;

        debug!("Received image response");

        Ok(result)
    }

    /// Runs one generation in the requested mode.
    ///
    /// Dispatches the user's input to `ask_text` or `generate_image` and
    /// returns the unified result form. `model` is consulted only in text
    /// mode; image generation is routed by the backend.
    pub async fn generate(
        &self,
        mode: GenerationMode,
        input: &str,
        model: GenerationModel,
        user_id: Option<&str>,
    ) -> Result<EncodedResult, ClientError> {
        match mode {
            GenerationMode::Text => Ok(EncodedResult::Text(
                self.ask_text(input, model, user_id).await?,
            )),
            GenerationMode::Image => Ok(EncodedResult::Image(
                self.generate_image(input, user_id).await?,
            )),
        }
    }

    /// Materializes image bytes from a source.
    ///
    /// An inline `data:image/...;base64,...` URI is decoded locally without
    /// a network call; anything else is fetched as an HTTP(S) URL under the
    /// resource ceiling.
    #[instrument(skip(self, source))]
    pub async fn download_image(&self, source: &str) -> Result<Vec<u8>, ClientError> {
        if source.starts_with("data:image") {
            return decode_data_uri(source);
        }

        let url = Url::parse(source).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", source, e)))?;

        debug!(url = %url, "Downloading image");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = ?e, "Image download failed");
            ClientError::Transport {
                message: e.to_string(),
                timeout: e.is_timeout(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let bytes = response.bytes().await.map_err(|e| ClientError::Transport {
            message: e.to_string(),
            timeout: e.is_timeout(),
        })?;

        debug!(size = bytes.len(), "Image downloaded");

        Ok(bytes.to_vec())
    }
}

fn decode_data_uri(source: &str) -> Result<Vec<u8>, ClientError> {
    let payload = source
        .split_once("base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| ClientError::Decoding("Data URI carries no base64 payload".to_string()))?;

    BASE64
        .decode(payload)
        .map_err(|e| ClientError::Decoding(format!("Invalid base64 image payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_decodes_without_network() {
        let bytes = decode_data_uri("data:image/png;base64,AAAA").expect("decode");
        assert_eq!(bytes, vec![0, 0, 0]);
    }

    #[test]
    fn data_uri_without_payload_is_a_decoding_error() {
        let err = decode_data_uri("data:image/png;base64").expect_err("no payload");
        assert!(matches!(err, ClientError::Decoding(_)));
    }

    #[test]
    fn invalid_base64_is_a_decoding_error() {
        let err = decode_data_uri("data:image/png;base64,!!!not-base64!!!").expect_err("bad payload");
        assert!(matches!(err, ClientError::Decoding(_)));
    }
}
