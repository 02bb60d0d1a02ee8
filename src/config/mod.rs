mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration and looks up the credential in the environment.
///
/// `CONFIG_PATH` names the YAML file. A missing credential is not an error
/// here; the resolver reports it to the user instead.
pub async fn load() -> Result<Config> {
    load_with(env::var("CONFIG_PATH").ok(), |name| env::var(name).ok()).await
}

/// `explicit_path` is the value of `CONFIG_PATH`, if set. Without one, a
/// missing `config.yaml` means built-in defaults; an explicit path that
/// cannot be read is an error. `lookup` resolves environment variables.
pub async fn load_with<F>(explicit_path: Option<String>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match explicit_path {
        Some(path) => load_from_path(&path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_path(DEFAULT_CONFIG_PATH).await?
        }
        None => {
            debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    apply_credential(&mut config, lookup);

    Ok(config)
}

/// Reads and validates a YAML file without touching the credential.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;

    load_from_str(&config_str)
}

pub fn load_from_str(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;

    if config.llm.model.trim().is_empty() {
        return Err(Error::config("llm.model must not be empty"));
    }
    if config.llm.api_key_env.trim().is_empty() {
        return Err(Error::config("llm.api_key_env must not be empty"));
    }

    Ok(config)
}

/// Fills `llm.api_key` from the variable named by `llm.api_key_env`.
/// Blank values count as unset.
pub fn apply_credential<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    config.llm.api_key = lookup(&config.llm.api_key_env)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
}
