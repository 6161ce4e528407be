//! Configuration for the Atelier CLI.
//!
//! [`AtelierConfig`] loads from a TOML file, environment variables, and
//! defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `ATELIER_CONFIG` environment variable
//! 3. XDG default: `~/.config/atelier/config.toml`
//! 4. Built-in defaults
//!
//! `ATELIER_<SECTION>_<KEY>` variables override string values from the file.

use std::path::PathBuf;

use atelier_collection::{DEFAULT_RELATED_LIMIT, ErrorHandling};
use atelier_core::{CONTENT_EXTENSIONS, Error, Result};
use confyg::{Confygery, env};
use serde::{Deserialize, Serialize};

/// Content root used when neither the flag nor the config names one.
pub const DEFAULT_CONTENT_ROOT: &str = "content";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Atelier CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtelierConfig {
    /// Where content lives on disk.
    pub content: ContentConfig,

    /// News queries.
    pub news: NewsConfig,

    /// Collection loading.
    pub loader: LoaderConfig,
}

/// Content location configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content root directory.
    pub path: Option<String>,

    /// News directory, relative to the content root.
    pub news_dir: String,

    /// Software directory, relative to the content root.
    pub software_dir: String,

    /// File extensions treated as content.
    pub extensions: Vec<String>,
}

/// News query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Default number of related posts.
    pub related_limit: usize,
}

/// Loader configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// What to do with sources that fail to load.
    pub error_handling: ErrorHandling,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: None,
            news_dir: "news".to_string(),
            software_dir: "software".to_string(),
            extensions: CONTENT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl AtelierConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("ATELIER");
        env_opts.add_section("content");
        env_opts.add_section("news");
        env_opts.add_section("loader");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("ATELIER_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("atelier").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// The content root directory.
    pub fn content_root(&self) -> PathBuf {
        PathBuf::from(self.content.path.as_deref().unwrap_or(DEFAULT_CONTENT_ROOT))
    }

    /// Directory holding news posts.
    pub fn news_path(&self) -> PathBuf {
        self.content_root().join(&self.content.news_dir)
    }

    /// Directory holding software pages.
    pub fn software_path(&self) -> PathBuf {
        self.content_root().join(&self.content.software_dir)
    }
}

// ============================================================================
// Tests
// ============================================================================
