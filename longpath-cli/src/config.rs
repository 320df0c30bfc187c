//! longpath configuration loading from `.longpathrc.toml`.
//!
//! Configuration is optional - longpath uses built-in defaults if no config
//! file exists. Command-line flags always win over the file.
//!
//! # Example Configuration
//!
//! ```toml
//! [search]
//! strategy = "random-walk"
//! iterations = 10000
//! seed = 42
//! prune = true
//!
//! [limits]
//! max_vertices = 100000
//!
//! [output]
//! format = "text"
//! color = true
//! compact = false
//! ```

use serde::Deserialize;
use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".longpathrc.toml";

/// Root configuration structure loaded from `.longpathrc.toml`.
///
/// All sections are optional and will use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
pub struct LongpathConfig {
    /// Default search settings.
    #[serde(default)]
    pub search: SearchSettings,

    /// Guards against graphs too large to search.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Search defaults used when the matching flag is not given.
#[derive(Debug, Deserialize, Default)]
pub struct SearchSettings {
    /// Strategy name: `breadth-first` or `random-walk`.
    #[serde(default)]
    pub strategy: Option<String>,

    /// Number of random walks.
    #[serde(default)]
    pub iterations: Option<usize>,

    /// Fixed random-walk seed. Unset means a fresh seed on every run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Whether to prune to start/end candidates before searching.
    ///
    /// Default: `true`
    #[serde(default)]
    pub prune: Option<bool>,
}

/// Size limits applied after loading the graph.
#[derive(Debug, Deserialize, Default)]
pub struct LimitsConfig {
    /// Refuse to search graphs with more vertices than this.
    ///
    /// Default: no limit.
    #[serde(default)]
    pub max_vertices: Option<usize>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format.
    ///
    /// Valid values: `text`, `table`, `json`
    /// Default: `text`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    ///
    /// Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,

    /// Print JSON on a single line.
    ///
    /// Default: `false`
    #[serde(default)]
    pub compact: Option<bool>,
}

impl LongpathConfig {
    /// Load configuration from `.longpathrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Get the default output format string, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Get the color preference, if configured.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    /// Whether JSON output should be single-line. Defaults to `false`.
    pub fn compact_json(&self) -> bool {
        self.output.compact.unwrap_or(false)
    }

    /// Get the configured strategy name, if any.
    pub fn strategy_name(&self) -> Option<&str> {
        self.search.strategy.as_deref()
    }

    /// Whether to prune before searching. Defaults to `true`.
    pub fn prune(&self) -> bool {
        self.search.prune.unwrap_or(true)
    }

    pub fn max_vertices(&self) -> Option<usize> {
        self.limits.max_vertices
    }
}
