use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the ranking oracle
#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// OpenAI chat-completion client used as the ranking oracle
///
/// One request per mentor dossier. Generation parameters are pinned to
/// temperature 0 and top_p 1 so reruns over the same rows stay as
/// deterministic as the model allows. The oracle's output is treated as
/// opaque text; the output contract lives in the prompt, not here.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            client,
        }
    }

    /// Send one prompt and return the completion text
    ///
    /// No retry is attempted; the caller decides what a failure means.
    pub async fn rank(&self, prompt: &str) -> Result<String, OpenAiError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/'),
        );

        let payload = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
            top_p: 1.0,
        };

        tracing::debug!("Requesting completion ({} prompt chars)", prompt.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Completion request failed: {} - {}", status, body);
            return Err(OpenAiError::Api(format!(
                "Completion request failed: {}",
                status
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::InvalidResponse(format!("Failed to parse completion: {}", e)))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAiError::InvalidResponse("No choices in completion".into()))?;

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_client_creation() {
        let client = OpenAiClient::new(
            "https://api.openai.com".to_string(),
            "sk-test".to_string(),
            "gpt-4o".to_string(),
        );

        assert_eq!(client.base_url, "https://api.openai.com");
        assert_eq!(client.model, "gpt-4o");
    }

    #[test]
    fn test_request_serialization_pins_generation_params() {
        let payload = ChatRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            temperature: 0.0,
            top_p: 1.0,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
