use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{
    chain_suggestion::ports::LLMClient,
    common::{LLMConfig, entities::app_errors::CoreError},
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const SUGGESTION_TEMPERATURE: f32 = 0.4;

/// Text-only client for the Gemini `generateContent` endpoint with JSON
/// structured output.
#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            base_url: GEMINI_API_BASE.to_string(),
            client: Client::new(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model_name
        )
    }

    fn build_request(prompt: String, response_schema: serde_json::Value) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
                temperature: SUGGESTION_TEMPERATURE,
            },
        }
    }
}

fn first_text(response: GeminiResponse) -> Result<String, CoreError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        debug!(model = %self.model_name, "calling Gemini generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::build_request(prompt, response_schema))
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        first_text(gemini_response)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn client() -> GeminiLLMClient {
        GeminiLLMClient::new(LLMConfig {
            gemini_api_key: "key".to_string(),
            gemini_model: "gemini-2.0-flash".to_string(),
        })
    }

    #[test]
    fn test_endpoint_uses_model_name() {
        let client = client().with_base_url("http://localhost:8089/");
        assert_eq!(
            client.endpoint(),
            "http://localhost:8089/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_request_asks_for_json_output() {
        let request = GeminiLLMClient::build_request("hello".to_string(), json!({"type": "object"}));
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generation_config"]["response_mime_type"], "application/json");
        assert_eq!(body["generation_config"]["response_schema"]["type"], "object");
    }

    #[test]
    fn test_first_text_requires_a_candidate() {
        let empty: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(first_text(empty), Err(CoreError::ExternalServiceError(_))));

        let answered: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"suggestions\":[]}" }] } }]
        }))
        .unwrap();
        assert_eq!(first_text(answered).unwrap(), "{\"suggestions\":[]}");
    }
}
