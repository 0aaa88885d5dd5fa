//! Server configuration module

use clap::Parser;

use storyloom_app::context::AppConfig;

use crate::config::{
    collaborators::CollaboratorsConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod collaborators;
pub(crate) mod logging;
pub(crate) mod server;

/// Storyloom JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storyloom-json", about = "Storyloom JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// External collaborator settings.
    #[command(flatten)]
    pub collaborators: CollaboratorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Collaborator settings in the shape the app context consumes.
    #[must_use]
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            renderer_base_url: self.collaborators.renderer_base_url.clone(),
            asset_base_url: self.collaborators.asset_base_url.clone(),
            denylist: self.collaborators.content_denylist.clone(),
        }
    }
}
