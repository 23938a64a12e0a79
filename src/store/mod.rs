//! The synchronization store: the single owner of the live workflow document
//! and the mediator for every mutation, so the text view and the graph view
//! never diverge.
//!
//! The consistency policy is asymmetric on purpose: the text is optimistic
//! (it follows every keystroke immediately, even through invalid states),
//! while the document is conservative (it only advances on a successful
//! parse). The graph is always projected from the document, so while the
//! text is transiently broken the canvas keeps showing the last valid
//! workflow alongside the recorded error.
//!
//! The store is a plain owned value — construct one per editing session and
//! pass it where it is needed.

use crate::codec;
use crate::error::StoreError;
use crate::gateway::{Provider, ProviderConfig, WorkflowGenerator};
use crate::projection::{self, GraphEdit, PresentationGraph};
use crate::workflow::{self, WorkflowDocument};
use tracing::{debug, warn};

/// Message recorded when inline-edited text fails to parse.
const INVALID_EDIT_MESSAGE: &str = "Invalid JSON format";
/// Message recorded when an imported file fails to parse.
const INVALID_IMPORT_MESSAGE: &str = "Invalid workflow JSON";

/// Process state of one editing session.
pub struct WorkflowStore {
    document: WorkflowDocument,
    text: String,
    error: Option<StoreError>,
    loading: bool,
    prompt: String,
    provider: Provider,
    openai_api_key: String,
    gemini_api_key: String,
}

impl WorkflowStore {
    /// Creates a store seeded with the built-in welcome document.
    pub fn new() -> Self {
        let mut store = Self {
            document: WorkflowDocument::default(),
            text: String::new(),
            error: None,
            loading: false,
            prompt: String::new(),
            provider: Provider::default(),
            openai_api_key: String::new(),
            gemini_api_key: String::new(),
        };
        store.replace_document(workflow::default_document());
        store
    }

    /// The current canonical document. Single source of truth; the text and
    /// graph accessors are derived views of this value.
    pub fn document(&self) -> &WorkflowDocument {
        &self.document
    }

    /// The current text view. May be transiently invalid while the user
    /// types; see [`WorkflowStore::set_text`].
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current error, if any. A single slot: each mutation either clears
    /// it or overwrites it.
    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    /// Whether a generation request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Projects the presentation graph from the current document. Recomputed
    /// on each call; the graph carries no state of its own.
    pub fn graph(&self) -> PresentationGraph {
        projection::project(&self.document)
    }

    /// Installs a document wholesale: re-serializes the text view and clears
    /// any error. Used by demo loading, generation success, and import.
    pub fn replace_document(&mut self, document: WorkflowDocument) {
        self.document = document;
        self.error = None;
        self.resync_text();
    }

    /// Applies a text edit. The text view updates unconditionally so it never
    /// lags a keystroke; the document only advances if the text parses.
    /// On failure the previous document stays active and the error slot
    /// records `"Invalid JSON format"`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        match codec::parse(&self.text) {
            Ok(document) => {
                self.document = document;
                self.error = None;
            }
            Err(err) => {
                debug!(%err, "text edit does not parse; keeping previous document");
                self.error = Some(StoreError::MalformedSyntax(INVALID_EDIT_MESSAGE.to_string()));
            }
        }
    }

    /// Imports externally supplied text (a file's contents). Unlike
    /// [`WorkflowStore::set_text`], failure does not touch the text view, and
    /// the error message comes from the import domain.
    pub fn import_from_text(&mut self, text: &str) {
        match codec::parse(text) {
            Ok(document) => self.replace_document(document),
            Err(err) => {
                debug!(%err, "import rejected");
                self.error = Some(StoreError::MalformedSyntax(
                    INVALID_IMPORT_MESSAGE.to_string(),
                ));
            }
        }
    }

    /// Canonical serialization of the current document for the file-save
    /// collaborator. Always reflects the document, never the possibly-invalid
    /// in-progress text.
    pub fn export_text(&self) -> Result<String, StoreError> {
        codec::serialize(&self.document)
            .map_err(|err| StoreError::MalformedSyntax(err.to_string()))
    }

    /// Export filename derived from the document name: whitespace runs become
    /// underscores, suffixed `.json`.
    pub fn export_file_name(&self) -> String {
        let mut out = String::with_capacity(self.document.name.len() + 5);
        let mut in_whitespace = false;
        for ch in self.document.name.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    out.push('_');
                }
                in_whitespace = true;
            } else {
                out.push(ch);
                in_whitespace = false;
            }
        }
        out.push_str(".json");
        out
    }

    /// Folds a graph-view edit back into the document and re-serializes the
    /// text view. Edits referencing unknown ids are no-ops.
    pub fn apply_graph_edit(&mut self, edit: &GraphEdit) {
        if projection::apply_edit(&mut self.document, edit) {
            self.error = None;
            self.resync_text();
        }
    }

    /// Replaces the document with a randomly chosen demo.
    pub fn load_demo(&mut self) {
        self.replace_document(workflow::random_demo());
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = provider;
    }

    pub fn set_openai_api_key(&mut self, key: impl Into<String>) {
        self.openai_api_key = key.into();
    }

    pub fn set_gemini_api_key(&mut self, key: impl Into<String>) {
        self.gemini_api_key = key.into();
    }

    /// Records an error reported by an external collaborator (for example a
    /// denied clipboard write) in the same slot as the store's own errors.
    pub fn set_error(&mut self, error: StoreError) {
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Requests a generated workflow for the current prompt and provider.
    ///
    /// A blank prompt is rejected up front without touching the gateway. On
    /// success the result is installed like [`WorkflowStore::replace_document`];
    /// on failure the previous document stays active and the gateway's
    /// message is recorded verbatim.
    ///
    /// A result that settles after newer manual edits still overwrites them:
    /// last writer wins, because only one authoritative document exists. The
    /// UI is expected to disable the trigger while `is_loading` is true, so
    /// the store does not serialize concurrent requests itself.
    pub async fn request_generation<G>(&mut self, gateway: &G)
    where
        G: WorkflowGenerator + ?Sized,
    {
        if self.prompt.trim().is_empty() {
            self.error = Some(StoreError::EmptyPrompt);
            return;
        }

        self.loading = true;
        self.error = None;
        let config = ProviderConfig::new(self.provider, self.api_key_for(self.provider));

        match gateway.generate(&self.prompt, &config).await {
            Ok(document) => {
                debug!(name = %document.name, "generated workflow installed");
                self.replace_document(document);
            }
            Err(err) => {
                warn!(%err, provider = %self.provider, "workflow generation failed");
                self.error = Some(StoreError::GenerationFailure(err.to_string()));
            }
        }
        self.loading = false;
    }

    fn api_key_for(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAi => &self.openai_api_key,
            Provider::Gemini => &self.gemini_api_key,
        }
    }

    fn resync_text(&mut self) {
        match codec::serialize(&self.document) {
            Ok(text) => self.text = text,
            // Unreachable for documents built from parsed JSON; the text view
            // is left as-is rather than panicking.
            Err(err) => warn!(%err, "re-serialization failed; text view unchanged"),
        }
    }
}

impl Default for WorkflowStore {
    fn default() -> Self {
        Self::new()
    }
}
