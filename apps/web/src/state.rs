use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::report::DocumentRasterizer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds collaborators only. Recommendations never live here: they travel
/// with the client in hidden form fields (see `form_state`).
#[derive(Clone)]
pub struct AppState {
    /// Default: `LlmClient` (Gemini).
    pub generator: Arc<dyn TextGenerator>,
    /// Default: `HtmlToPdfConverter`.
    pub rasterizer: Arc<dyn DocumentRasterizer>,
}
