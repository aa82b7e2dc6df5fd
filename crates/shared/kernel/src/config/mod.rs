use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`FOLIO__MOTION__REVEAL_MS=800`).
pub const ENV_PREFIX: &str = "FOLIO";
/// Config file used when no path is given, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "site";

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with environment overrides layered on top.
///
/// 1. **Base File**: settings from `path` (any format the `config` crate recognises by
///    extension, e.g. `site.toml`). Defaults to `site` in the current working directory.
/// 2. **Environment Overrides**: variables prefixed with `FOLIO__`; nested keys are separated
///    by double underscores (`FOLIO__PORTAL__TARGET_ID` maps to `portal.target_id`).
///
/// # Errors
/// Returns an error if the file cannot be found or its content does not match `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
/// use folio_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Parses configuration embedded in the binary as TOML.
///
/// Used on targets without a filesystem (the browser build embeds its `site.toml`).
///
/// # Errors
/// Returns an error if the TOML is malformed or does not match `T`.
pub fn parse_config<T>(toml: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let config = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .context("Failed to parse embedded config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize embedded config")?;

    Ok(config)
}
