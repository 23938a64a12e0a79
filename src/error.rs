use crate::gateway::Provider;
use thiserror::Error;

/// Errors that can occur while converting between a workflow document and
/// its canonical text form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Failed to parse workflow JSON: {0}")]
    MalformedSyntax(String),

    #[error("Failed to serialize workflow: {0}")]
    Serialize(String),
}

/// Errors surfaced by the synchronization store as its single current-error
/// value. None of these are fatal; the store keeps the last valid document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The text view holds something that does not parse. The message is
    /// chosen by the call site ("Invalid JSON format" for inline edits,
    /// "Invalid workflow JSON" for imports).
    #[error("{0}")]
    MalformedSyntax(String),

    #[error("Please enter a workflow description")]
    EmptyPrompt,

    /// The generation gateway failed; the message is passed through verbatim.
    #[error("{0}")]
    GenerationFailure(String),

    #[error("Failed to copy to clipboard")]
    Clipboard,
}

/// Errors that can occur when requesting a generated workflow from a provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("No API key configured for {0}")]
    MissingApiKey(Provider),

    #[error("Request to {provider} failed: {message}")]
    Request { provider: Provider, message: String },

    #[error("{provider} returned an error: {message}")]
    Provider { provider: Provider, message: String },

    #[error("Model reply was not a workflow document: {0}")]
    MalformedReply(String),
}
