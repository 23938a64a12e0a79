//! OpenAI chat-completions provider.

use super::ProviderConfig;
use crate::error::GatewayError;
use serde::{Deserialize, Serialize};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
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
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: String,
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
    let request = ChatRequest {
        model: config.model_or_default(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: super::SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
        temperature: 0.2,
    };

    let response = client
        .post(CHAT_COMPLETIONS_URL)
        .bearer_auth(&config.api_key)
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

    let body: ChatResponse = response.json().await.map_err(|err| GatewayError::Request {
        provider: config.provider,
        message: err.to_string(),
    })?;

    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| GatewayError::Provider {
            provider: config.provider,
            message: "completion contained no choices".to_string(),
        })
}
