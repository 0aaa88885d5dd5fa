//! Preview pipeline errors.

use thiserror::Error;

use storyloom::validation::ValidationErrors;

use crate::domain::previews::renderer::RenderError;

/// Failures surfaced by preview generation.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The personalization broke one or more validation rules; carries all
    /// of them.
    #[error("invalid personalization")]
    Validation(#[source] ValidationErrors),

    /// The requested theme does not exist in the catalog.
    #[error("unknown theme {theme_id:?}")]
    TemplateNotFound {
        /// The theme id the request named.
        theme_id: String,
    },

    /// The rendering collaborator failed. Surfaced generically; detail goes
    /// to server logs.
    #[error("preview rendering failed")]
    Rendering(#[source] RenderError),
}
