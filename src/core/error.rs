//! Custom error types for the application.
//!
//! - [`ConfigError`] - Loading the site configuration
//! - [`RenderError`] - Template rendering of documents
//! - [`PrerenderError`] - Writing prerendered documents to disk

use std::path::PathBuf;

use thiserror::Error;

/// Site configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A document template failed to load or render.
#[derive(Debug, Error)]
#[error("template `{name}` failed: {source}")]
pub struct RenderError {
    pub name: &'static str,
    #[source]
    pub source: minijinja::Error,
}

/// Prerendering the site failed.
#[derive(Debug, Error)]
pub enum PrerenderError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
