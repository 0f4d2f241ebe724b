//! Application configuration.
//!
//! Centralizes configuration constants and the bundled site description.
//! Assets are loaded at compile time using `include_str!`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::models::LinkDescriptor;

// =============================================================================
// Bundled Assets (loaded at compile time)
// =============================================================================

/// Site description parsed by [`SiteConfig::bundled`].
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Inline SVG logo shown in the header home link.
pub const LOGO_SVG: &str = include_str!("../assets/logo.svg");

// =============================================================================
// Routing & Accessibility
// =============================================================================

/// Path of the home page.
pub const HOME_PATH: &str = "/";

/// Label announced when navigating to [`HOME_PATH`].
pub const HOME_LABEL: &str = "Home page";

/// Id of the route-change live region.
pub const ROUTE_REGION_ID: &str = "route-change-region";

/// Id of the element the client app mounts into.
pub const APP_ROOT_ID: &str = "app";

/// sessionStorage key holding saved scroll positions.
pub const SCROLL_STORAGE_KEY: &str = "scroll-positions";

// =============================================================================
// Environment
// =============================================================================

/// Environment name that enables development-only behavior.
pub const DEVELOPMENT_ENV: &str = "development";

/// Port of the live-reload socket when the site config omits one.
pub const DEFAULT_LIVE_RELOAD_PORT: u16 = 8002;

// =============================================================================
// Site Configuration
// =============================================================================

/// Static description of the site: chrome, navigation and asset wiring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    pub footer: String,
    #[serde(default = "default_live_reload_port")]
    pub live_reload_port: u16,
    pub assets: ClientAssets,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Stylesheets linked on every page, ahead of the page's own links.
    #[serde(default)]
    pub stylesheets: Vec<LinkDescriptor>,
}

/// Location of the compiled client bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAssets {
    /// wasm-bindgen JS glue module.
    pub script: String,
    pub wasm: String,
}

/// One entry of the main navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_live_reload_port() -> u16 {
    DEFAULT_LIVE_RELOAD_PORT
}

impl SiteConfig {
    /// Parse the configuration bundled into the binary.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml(SITE_TOML)
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source)
    }
}

// =============================================================================
// Shell Options
// =============================================================================

/// Document shell behavior resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    pub enable_live_reload: bool,
    pub live_reload_port: u16,
}

impl ShellOptions {
    /// Resolve options from the environment name.
    ///
    /// Live reload is only enabled when the name is exactly [`DEVELOPMENT_ENV`].
    pub fn resolve(env: Option<&str>, live_reload_port: u16) -> Self {
        let enable_live_reload = env == Some(DEVELOPMENT_ENV);
        Self {
            enable_live_reload,
            live_reload_port,
        }
    }
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self::resolve(None, DEFAULT_LIVE_RELOAD_PORT)
    }
}
