use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::DEFAULT_CAPACITY;
use crate::fs::atomic_write;
use crate::language::{AUTO_DETECT, default_target, parse_source_arg, parse_target_arg};
use crate::paths;
use crate::session::DEFAULT_TIMEOUT;
use crate::speech::DEFAULT_SPEECH_ENDPOINT;
use crate::translation::DEFAULT_TRANSLATE_ENDPOINT;

/// Largest accepted provider timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 120;

const DEFAULT_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();

/// Default settings in the `[polyglot]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolyglotConfig {
    /// Default source language (display name, code, or `auto`).
    pub from: Option<String>,
    /// Default target language (display name or code).
    pub to: Option<String>,
    /// Directory downloads are written to.
    pub output_dir: Option<PathBuf>,
    /// Command used to play synthesized audio, e.g. `mpv --no-video`.
    pub player: Option<String>,
    /// Show debug information by default.
    #[serde(default)]
    pub debug: bool,
}

/// Provider settings in the `[providers]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Base URL of the translation endpoint.
    pub translate_endpoint: Option<String>,
    /// Base URL of the speech endpoint.
    pub speech_endpoint: Option<String>,
    /// Timeout for one provider call, in seconds.
    pub timeout_secs: Option<u64>,
    /// Number of synthesized clips kept in memory per session.
    pub speech_cache_capacity: Option<usize>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/polyglot/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub polyglot: PolyglotConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Source selection (display name or the auto-detect sentinel).
    pub source: &'static str,
    /// Target selection (display name).
    pub target: &'static str,
    pub translate_endpoint: String,
    pub speech_endpoint: String,
    pub timeout: Duration,
    pub speech_cache_capacity: usize,
    pub output_dir: PathBuf,
    pub player: Option<String>,
    pub debug: bool,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub debug: bool,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if a language is not in the catalog or the timeout is out
/// of range.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let defaults = &config_file.polyglot;
    let providers = &config_file.providers;

    let source = options
        .from
        .as_deref()
        .or(defaults.from.as_deref())
        .map_or(Ok(AUTO_DETECT), parse_source_arg)?;

    let target = options
        .to
        .as_deref()
        .or(defaults.to.as_deref())
        .map_or_else(|| Ok(default_target()), parse_target_arg)?;

    let timeout_secs = providers.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 || timeout_secs > MAX_TIMEOUT_SECS {
        bail!(
            "Invalid configuration: 'timeout_secs' must be between 1 and {MAX_TIMEOUT_SECS} \
             (got {timeout_secs})"
        );
    }

    let output_dir = options
        .output_dir
        .as_ref()
        .or(defaults.output_dir.as_ref())
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(ResolvedConfig {
        source,
        target,
        translate_endpoint: providers
            .translate_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_TRANSLATE_ENDPOINT.to_string()),
        speech_endpoint: providers
            .speech_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_SPEECH_ENDPOINT.to_string()),
        timeout: Duration::from_secs(timeout_secs),
        speech_cache_capacity: providers.speech_cache_capacity.unwrap_or(DEFAULT_CAPACITY),
        output_dir,
        player: defaults
            .player
            .clone()
            .filter(|p| !p.trim().is_empty()),
        debug: options.debug || defaults.debug,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/polyglot/config.toml`
    /// or `~/.config/polyglot/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, returning defaults when it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, contents.as_bytes())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
