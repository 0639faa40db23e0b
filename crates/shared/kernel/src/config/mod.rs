use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "BAZAAR";

/// Custom error type for config loading.
#[bazaar_derive::bazaar_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layering, lowest priority first:
/// 1. **Type defaults**: `T` must fill missing fields itself (e.g. `#[serde(default)]`).
/// 2. **Base File**: when `path` is given, the file (`.toml`, `.json`, `.yaml`; the extension
///    may be omitted) must exist.
/// 3. **Environment Overrides**: variables prefixed with `BAZAAR__`. Nested structures are
///    addressed with double underscores (`BAZAAR__SHIPPING__PUBLISH_DELAY_HOURS` maps to
///    `shipping.publish_delay_hours`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or if the merged
/// sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
