//! External collaborator settings.

use clap::Args;

/// Endpoints and policy for the services' external collaborators.
#[derive(Debug, Args)]
pub struct CollaboratorsConfig {
    /// Base URL of the placeholder image service behind the preview renderer
    #[arg(
        long,
        env = "RENDERER_BASE_URL",
        default_value = "https://via.placeholder.com"
    )]
    pub renderer_base_url: String,

    /// Base URL print-ready asset references point into
    #[arg(
        long,
        env = "ASSET_BASE_URL",
        default_value = "https://storage.example.com"
    )]
    pub asset_base_url: String,

    /// Comma-separated content screening denylist; empty keeps the built-in
    /// baseline list
    #[arg(long, env = "CONTENT_DENYLIST", value_delimiter = ',', num_args = 0..)]
    pub content_denylist: Vec<String>,
}
