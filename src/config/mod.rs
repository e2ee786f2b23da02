mod manager;

pub use manager::{
    ConfigFile, ConfigManager, MAX_TIMEOUT_SECS, PolyglotConfig, ProvidersConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};
