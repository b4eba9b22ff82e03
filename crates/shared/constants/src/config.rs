use crate::error::{ConstantsErrorExt, Result};
use crate::registry::RegistryConfig;
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable prefix for registry overrides.
pub const ENV_PREFIX: &str = "PARKPASSES";

/// Loads [`RegistryConfig`] from a file layered with environment overrides.
///
/// 1. **Base File**: settings from `path` (any format the `config` crate recognises by
///    extension). Defaults to `constants` in the current working directory.
/// 2. **Environment Overrides**: variables prefixed with `PARKPASSES__`, nested with double
///    underscores, e.g. `PARKPASSES__OVERRIDES__PARK_PASSES_SUPPORT_EMAIL`. They replace the
///    file value of the same key.
///
/// # Errors
/// Returns [`crate::ConstantsError::Config`] if the file is missing or either layer does not
/// match [`RegistryConfig`].
///
/// # Example
/// ```rust
/// use parkpasses_constants::config::load_config;
///
/// let cfg = load_config(Some("config/missing")).unwrap_or_default();
/// assert!(cfg.overrides.is_empty());
/// ```
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<RegistryConfig> {
    load_layers(path, None)
}

/// Same as [`load_config`], reading the environment layer from `env` instead of the process
/// environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env(
    path: Option<impl AsRef<Path>>,
    env: impl IntoIterator<Item = (String, String)>,
) -> Result<RegistryConfig> {
    load_layers(path, Some(env.into_iter().collect()))
}

fn load_layers(
    path: Option<impl AsRef<Path>>,
    env: Option<config::Map<String, String>>,
) -> Result<RegistryConfig> {
    let effective_path =
        path.map_or_else(|| PathBuf::from("constants"), |p| p.as_ref().to_path_buf());

    info!("Loading constants config from {}", effective_path.display());

    // File keys keep their case while environment keys arrive lowercased, so the layers are
    // deserialized separately and merged once the keys are normalised.
    let file = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<RegistryConfig>()
        .context("Failed to deserialize config")?;

    let environment = Config::builder()
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .source(env),
        )
        .build()
        .context("Failed to read environment overrides")?
        .try_deserialize::<RegistryConfig>()
        .context("Failed to deserialize environment overrides")?;

    debug!(
        file = file.overrides.len(),
        environment = environment.overrides.len(),
        "constants overrides loaded"
    );

    Ok(file.merge(environment))
}
