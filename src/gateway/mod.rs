//! The generation gateway: a single entry point for turning a natural
//! language description into a candidate workflow document via an external
//! LLM provider.
//!
//! Application code interacts with [`WorkflowGenerator`], never with provider
//! APIs directly. [`HttpGateway`] is the production implementation; tests
//! substitute their own.

mod gemini;
mod openai;

use crate::codec;
use crate::error::GatewayError;
use crate::workflow::WorkflowDocument;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Instruction prepended to every generation request. The reply must be one
/// JSON object in the canonical document shape; anything else is rejected.
const SYSTEM_PROMPT: &str = "You are an expert n8n workflow architect. Given a description of an \
automation, respond with exactly one JSON object describing an n8n workflow: a \"name\", a \
\"nodes\" array (each node with \"id\", \"name\", \"type\", \"position\" as [x, y], and \
\"parameters\"), a \"connections\" object keyed by source node name, \"active\" set to false, \
and a \"settings\" object. Use realistic n8n-nodes-base node types. Respond with the JSON \
document only, no prose.";

/// The supported generation providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAi,
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4o",
            Provider::Gemini => "gemini-1.5-flash",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a generator needs to talk to one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub provider: Provider,
    pub api_key: String,
    /// Overrides the provider's default model when set.
    pub model: Option<String>,
}

impl ProviderConfig {
    pub fn new(provider: Provider, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(self.provider.default_model())
    }
}

/// The boundary the synchronization store generates through.
#[async_trait]
pub trait WorkflowGenerator: Send + Sync {
    /// Produces a candidate document from a prompt, or fails with a
    /// human-readable message surfaced verbatim to the user.
    async fn generate(
        &self,
        prompt: &str,
        config: &ProviderConfig,
    ) -> Result<WorkflowDocument, GatewayError>;
}

/// HTTP-backed generator for the OpenAI and Gemini APIs.
pub struct HttpGateway {
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkflowGenerator for HttpGateway {
    async fn generate(
        &self,
        prompt: &str,
        config: &ProviderConfig,
    ) -> Result<WorkflowDocument, GatewayError> {
        if config.api_key.trim().is_empty() {
            return Err(GatewayError::MissingApiKey(config.provider));
        }
        debug!(provider = %config.provider, model = config.model_or_default(), "requesting workflow generation");
        let reply = match config.provider {
            Provider::OpenAi => openai::complete(&self.client, prompt, config).await?,
            Provider::Gemini => gemini::complete(&self.client, prompt, config).await?,
        };
        parse_reply(&reply)
    }
}

fn parse_reply(reply: &str) -> Result<WorkflowDocument, GatewayError> {
    codec::parse(extract_json(reply)).map_err(|err| GatewayError::MalformedReply(err.to_string()))
}

/// Models routinely wrap the document in markdown fences or a sentence of
/// prose despite instructions; recover the outermost JSON object.
fn extract_json(reply: &str) -> &str {
    match (reply.find('{'), reply.rfind('}')) {
        (Some(start), Some(end)) if start < end => &reply[start..=end],
        _ => reply.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_strips_markdown_fences() {
        let reply = "```json\n{\"name\": \"Demo\"}\n```";
        assert_eq!(extract_json(reply), "{\"name\": \"Demo\"}");
    }

    #[test]
    fn extract_json_passes_bare_objects_through() {
        assert_eq!(extract_json("{\"name\": \"Demo\"}"), "{\"name\": \"Demo\"}");
    }

    #[test]
    fn parse_reply_accepts_fenced_documents() {
        let reply = "Here is your workflow:\n```json\n{\"name\": \"Demo\", \"nodes\": []}\n```";
        let document = parse_reply(reply).expect("fenced reply should parse");
        assert_eq!(document.name, "Demo");
    }

    #[test]
    fn parse_reply_rejects_prose() {
        assert!(matches!(
            parse_reply("I could not generate a workflow."),
            Err(GatewayError::MalformedReply(_))
        ));
    }
}
