// OpenAI chat-completions classifier
//
// Sends the classification prompt as a single user message and expects the
// completion text to contain the `{role, module}` JSON object. No retries;
// a bounded request timeout maps to an upstream failure.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::prompt::build_prompt;
use super::{Classification, ClassifyError, IntentClassifier};
use crate::catalog::RouteCatalog;

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct OpenAiClassifier {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    catalog: Arc<RouteCatalog>,
}

impl OpenAiClassifier {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        catalog: Arc<RouteCatalog>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model,
            catalog,
        })
    }

    /// Send one completion request and return the raw completion text.
    async fn send_completion(&self, prompt: &str) -> Result<String, ClassifyError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        let url = format!("{}/v1/chat/completions", self.base_url);

        tracing::debug!(model = %self.model, "Sending classification request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ClassifyError::Upstream(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Upstream(format!(
                "completion service returned {status}: {body}"
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::Upstream(format!("unreadable response body: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ClassifyError::Upstream("completion contained no choices".to_string()))
    }
}

#[async_trait]
impl IntentClassifier for OpenAiClassifier {
    async fn classify(&self, query: &str) -> Result<Classification, ClassifyError> {
        let prompt = build_prompt(&self.catalog, query);
        let completion = self.send_completion(&prompt).await?;

        tracing::debug!(completion = %completion, "Received classification completion");

        parse_classification(&completion)
    }
}

/// Best-effort parse of the completion text into a classification.
///
/// Models wrap the JSON in code fences or prose often enough that we parse
/// the outermost braced region rather than the whole completion.
fn parse_classification(text: &str) -> Result<Classification, ClassifyError> {
    let json = extract_json(text)
        .ok_or_else(|| ClassifyError::Malformed(format!("no JSON object in {text:?}")))?;

    let raw: RawClassification = serde_json::from_str(json)
        .map_err(|e| ClassifyError::Malformed(format!("{e} in {json:?}")))?;

    Ok(Classification {
        role: raw.role,
        module: raw.module,
    })
}

/// Outermost `{ ... }` region of the text, if any.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
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
    content: Option<String>,
}

/// Missing keys default to empty strings; the router treats those as an
/// unrecognized classification rather than a parse failure, matching how a
/// partially-filled reply should read to the user.
#[derive(Debug, Deserialize)]
struct RawClassification {
    #[serde(default)]
    role: String,
    #[serde(default)]
    module: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_creation() {
        let classifier = OpenAiClassifier::new(
            "test-key".to_string(),
            "https://api.openai.com".to_string(),
            "gpt-4-turbo".to_string(),
            Arc::new(RouteCatalog::builtin()),
        );
        assert!(classifier.is_ok());
    }

    #[test]
    fn test_parse_plain_json() {
        let parsed =
            parse_classification(r#"{"role": "general_user", "module": "taxi booking"}"#).unwrap();
        assert_eq!(parsed.role, "general_user");
        assert_eq!(parsed.module, "taxi booking");
    }

    #[test]
    fn test_parse_fenced_json() {
        let text = "```json\n{\"role\": \"service_provider\", \"module\": \"food partner\"}\n```";
        let parsed = parse_classification(text).unwrap();
        assert_eq!(parsed.role, "service_provider");
        assert_eq!(parsed.module, "food partner");
    }

    #[test]
    fn test_parse_json_with_surrounding_prose() {
        let text = "Sure! Here is the classification:\n{\"role\": \"general_user\", \"module\": \"wallet\"}\nLet me know if you need anything else.";
        let parsed = parse_classification(text).unwrap();
        assert_eq!(parsed.module, "wallet");
    }

    #[test]
    fn test_parse_missing_keys_defaults_to_empty() {
        let parsed = parse_classification(r#"{"module": "wallet"}"#).unwrap();
        assert_eq!(parsed.role, "");
        assert_eq!(parsed.module, "wallet");
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(
            parse_classification("I could not decide."),
            Err(ClassifyError::Malformed(_))
        ));
        assert!(matches!(
            parse_classification("{not json}"),
            Err(ClassifyError::Malformed(_))
        ));
    }
}
