//! Client for the text-generation endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::{ConfigStore, CredentialStatus, GenerationConfig, SecureString};
use crate::error::ToolError;
use crate::tools::GenerationOutcome;

use super::wire::{ErrorEnvelope, GenerateRequest, GenerateResponse};

/// Something that turns a prompt into generated text.
///
/// Implementations must never panic or return early without an outcome:
/// every failure is folded into `GenerationOutcome::Failure`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> GenerationOutcome;
}

/// Issues one `generateContent` request per call.
///
/// Configuration (including the credential) is read from the store on every
/// call, never cached.
pub struct GenerationClient {
    client: Client,
    config: ConfigStore,
}

impl GenerationClient {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn request(
        &self,
        config: &GenerationConfig,
        api_key: &SecureString,
        prompt: &str,
    ) -> Result<String, ToolError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        tracing::debug!(
            url = %url,
            model = %config.model,
            prompt_len = prompt.len(),
            "Sending generation request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .header("x-goog-api-key", api_key.expose())
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            let message = serde_json::from_str::<ErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(error_text);

            tracing::warn!(
                status = %status,
                latency_ms,
                error = %message,
                "Generation endpoint error"
            );

            return Err(ToolError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ToolError::MalformedResponse(e.to_string()))?;

        let text = body
            .text()
            .ok_or_else(|| ToolError::MalformedResponse("response contained no text".to_string()))?;

        tracing::debug!(latency_ms, text_len = text.len(), "Generation complete");
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GenerationClient {
    async fn generate(&self, prompt: &str) -> GenerationOutcome {
        let config = self.config.get().generation;

        let api_key = match config.resolve_credential() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                tracing::warn!(%reason, "Generation skipped: no credential");
                return Err::<String, _>(ToolError::MissingCredential).into();
            }
        };

        let result = self.request(&config, &api_key, prompt).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "Generation failed");
        }
        result.into()
    }
}
