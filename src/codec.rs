//! Conversion between a [`WorkflowDocument`] and its canonical text form.
//!
//! The text form is pretty-printed JSON with 2-space indentation and stable
//! key order, used for the editable text view, clipboard copies, and file
//! import/export. `parse` checks syntactic well-formedness only — a
//! syntactically valid but half-finished document (missing `name`, dangling
//! connections) is accepted as-is, because the model has to tolerate
//! in-progress edits.

use crate::error::CodecError;
use crate::workflow::WorkflowDocument;

/// Renders the canonical pretty-printed text for a document.
///
/// For any document produced by this crate, `parse(serialize(doc))` yields a
/// structurally equal document.
pub fn serialize(document: &WorkflowDocument) -> Result<String, CodecError> {
    serde_json::to_string_pretty(document).map_err(|err| CodecError::Serialize(err.to_string()))
}

/// Parses canonical (or user-edited) text back into a document.
///
/// Never panics. Malformed text yields [`CodecError::MalformedSyntax`]; the
/// caller decides which user-facing message to attach.
pub fn parse(text: &str) -> Result<WorkflowDocument, CodecError> {
    serde_json::from_str(text).map_err(|err| CodecError::MalformedSyntax(err.to_string()))
}
