//! Gemini `generateContent` client for number facts.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::{Duration, Instant};

use crate::config::GeminiConfig;

use super::error::FactError;
use super::provider::{mystery_fact, unavailable_fact, FactProvider};
use super::FactResult;

/// System instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a knowledgeable mathematician. Return the response in JSON format.";

/// Leading part of the user prompt, followed by the number.
pub const FACT_PROMPT_PREFIX: &str =
    "Tell me a brief, interesting, or scientific fact about the number";

fn fact_prompt(number: i64) -> String {
    format!(
        "{} {}. If the number is common, provide a unique mathematical property or a historical event associated with it.",
        FACT_PROMPT_PREFIX, number
    )
}

/// Client for the Gemini REST API.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    api_key: String,
}

impl GeminiClient {
    /// Create a client from config.
    ///
    /// Fails with [`FactError::NotConfigured`] when neither the config nor
    /// the configured environment variable holds an API key.
    pub fn new(config: GeminiConfig) -> Result<Self, FactError> {
        let api_key = config.resolve_api_key().ok_or(FactError::NotConfigured)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Ask the service for a fact about `number`.
    ///
    /// Returns [`FactError::EmptyResponse`] when the reply carries no text.
    pub async fn request_fact(&self, number: i64) -> Result<FactResult, FactError> {
        let url = self.endpoint();
        let body = self.build_request(number);

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            number,
            "Sending fact request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Fact API error"
            );

            return Err(FactError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&response_text).map_err(|e| {
            FactError::ParseError(format!("Failed to parse response JSON: {}", e))
        })?;

        let text = extract_text(parsed).ok_or(FactError::EmptyResponse)?;
        let fact = parse_fact(&text)?;

        tracing::debug!(latency_ms, category = %fact.category, "Fact received");
        Ok(fact)
    }

    fn build_request(&self, number: i64) -> ApiRequest {
        ApiRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(fact_prompt(number)),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(SYSTEM_INSTRUCTION.to_string()),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
                temperature: self.config.temperature,
            },
        }
    }
}

/// [`FactProvider`] backed by Gemini.
///
/// Never fails: an empty reply becomes [`mystery_fact`], anything else that
/// goes wrong becomes [`unavailable_fact`].
pub struct GeminiFactProvider {
    client: Option<GeminiClient>,
}

impl GeminiFactProvider {
    pub fn from_config(config: GeminiConfig) -> Self {
        let client = match GeminiClient::new(config) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!(error = %err, "Gemini client unavailable, facts will use placeholders");
                None
            }
        };
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}

#[async_trait]
impl FactProvider for GeminiFactProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn fetch_fact(&self, number: i64) -> Result<FactResult, FactError> {
        let Some(client) = &self.client else {
            tracing::warn!(number, "Fact requested without API key");
            return Ok(unavailable_fact(number));
        };

        match client.request_fact(number).await {
            Ok(fact) => Ok(fact),
            Err(FactError::EmptyResponse) => {
                tracing::warn!(number, "Gemini response text was empty");
                Ok(mystery_fact(number))
            }
            Err(err) => {
                tracing::warn!(number, error = %err, "Error generating number fact");
                Ok(unavailable_fact(number))
            }
        }
    }
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "fact": {
                "type": "STRING",
                "description": "The interesting fact about the number."
            },
            "category": {
                "type": "STRING",
                "description": "The category (e.g., 'Math', 'History', 'Science', 'Trivia')."
            }
        },
        "required": ["fact", "category"]
    })
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: ApiResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content?
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn parse_fact(text: &str) -> Result<FactResult, FactError> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|e| FactError::ParseError(format!("Malformed fact payload: {}", e)))
}

/// Drop a surrounding Markdown code fence, if the model added one.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_config() -> GeminiConfig {
        GeminiConfig {
            base_url: "https://api.example.com/".to_string(),
            model: "test-model".to_string(),
            api_key: Some("test-key".to_string()),
            api_key_env: "SMART_COUNTER_TEST_UNSET_KEY".to_string(),
            temperature: 0.7,
            timeout_seconds: None,
        }
    }

    #[test]
    fn client_requires_api_key() {
        let config = GeminiConfig {
            api_key: None,
            ..make_test_config()
        };
        assert!(matches!(
            GeminiClient::new(config),
            Err(FactError::NotConfigured)
        ));
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = GeminiClient::new(make_test_config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://api.example.com/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn build_request_embeds_number_and_schema() {
        let client = GeminiClient::new(make_test_config()).unwrap();
        let request = serde_json::to_value(client.build_request(42)).unwrap();

        let prompt = request["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.starts_with("Tell me a brief, interesting, or scientific fact about the number 42."));
        assert_eq!(request["contents"][0]["role"], "user");
        assert_eq!(
            request["systemInstruction"]["parts"][0]["text"],
            SYSTEM_INSTRUCTION
        );
        assert!(request["systemInstruction"].get("role").is_none());
        assert_eq!(
            request["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            request["generationConfig"]["responseSchema"]["required"],
            json!(["fact", "category"])
        );
    }

    #[test]
    fn extract_text_joins_parts() {
        let response: ApiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"fact\":"}, {"text": "\"x\"}"}]}
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "{\"fact\":\"x\"}");
    }

    #[test]
    fn extract_text_without_candidates_is_none() {
        let response: ApiResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert!(extract_text(response).is_none());
    }

    #[test]
    fn extract_text_blank_is_none() {
        let response: ApiResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}}]
        }))
        .unwrap();
        assert!(extract_text(response).is_none());
    }

    #[test]
    fn parse_fact_accepts_fenced_json() {
        let fact = parse_fact("```json\n{\"fact\": \"Seven is prime.\", \"category\": \"Math\"}\n```")
            .unwrap();
        assert_eq!(fact, FactResult::new("Seven is prime.", "Math"));
    }

    #[test]
    fn parse_fact_rejects_missing_fields() {
        assert!(matches!(
            parse_fact("{\"fact\": \"no category\"}"),
            Err(FactError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn unconfigured_provider_returns_system_placeholder() {
        let provider = GeminiFactProvider::from_config(GeminiConfig {
            api_key: None,
            ..make_test_config()
        });
        assert!(!provider.is_configured());

        let fact = provider.fetch_fact(9).await.unwrap();
        assert_eq!(fact, unavailable_fact(9));
    }
}
