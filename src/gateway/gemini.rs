//! Google Gemini generateContent provider.

use super::ProviderConfig;
use crate::error::GatewayError;
use serde::{Deserialize, Serialize};

const GENERATE_CONTENT_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

pub(super) async fn complete(
    client: &reqwest::Client,
    prompt: &str,
    config: &ProviderConfig,
) -> Result<String, GatewayError> {
    // Gemini has no separate system role on this endpoint; the instruction
    // rides in the same part as the prompt.
    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: format!("{}\n\n{}", super::SYSTEM_PROMPT, prompt),
            }],
        }],
    };

    let url = format!(
        "{GENERATE_CONTENT_URL}/{}:generateContent",
        config.model_or_default()
    );

    let response = client
        .post(&url)
        .query(&[("key", config.api_key.as_str())])
        .json(&request)
        .send()
        .await
        .map_err(|err| GatewayError::Request {
            provider: config.provider,
            message: err.to_string(),
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_else(|_| format!("HTTP {status}"));
        return Err(GatewayError::Provider {
            provider: config.provider,
            message,
        });
    }

    let body: GenerateResponse = response
        .json()
        .await
        .map_err(|err| GatewayError::Request {
            provider: config.provider,
            message: err.to_string(),
        })?;

    body.candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| GatewayError::Provider {
            provider: config.provider,
            message: "response contained no candidates".to_string(),
        })
}
