use config::{Config, Environment, File, Map};
use hhub_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the config file looked up in the working directory (`hhub.toml`, `hhub.json`, ...).
const DEFAULT_CONFIG_NAME: &str = "hhub";

#[hhub_derive::hhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: a file, then `HHUB__`-prefixed environment overrides.
///
/// * With `Some(path)` the file must exist.
/// * With `None` an `hhub.*` file in the working directory is used if present; otherwise only
///   defaults and the environment apply.
///
/// Nested keys use a double underscore: `HHUB__DATABASE__URL` maps to `database.url`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a value cannot be parsed, or the
/// merged document does not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use hhub_kernel::config::load_config;
/// use hhub_kernel::domain::config::ApiConfig;
///
/// let cfg: ApiConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path.map(|p| p.as_ref().to_path_buf()), None)
}

fn load_layered<T>(
    path: Option<PathBuf>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            File::from(path.as_path()).required(true)
        }
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hhub_domain::config::ApiConfig;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn defaults_apply_without_file_or_env() {
        let cfg: ApiConfig = load_layered(None, Some(Map::new())).expect("defaults");
        assert_eq!(cfg.server.port, 5555);
        assert_eq!(cfg.database.url, "sqlite::memory:");
    }

    #[test]
    fn file_values_are_loaded() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
        writeln!(file, "[server]\nport = 8088\n\n[log]\nlevel = \"debug\"").expect("write config");

        let cfg: ApiConfig =
            load_layered(Some(file.path().to_path_buf()), Some(Map::new())).expect("file config");
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.log.level, "debug");
        assert_eq!(cfg.database.url, "sqlite::memory:");
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
        writeln!(file, "[database]\nurl = \"sqlite://./from-file.db\"").expect("write config");

        let overrides = env(&[
            ("HHUB__DATABASE__URL", "sqlite://./from-env.db?mode=rwc"),
            ("HHUB__SERVER__PORT", "9090"),
        ]);
        let cfg: ApiConfig =
            load_layered(Some(file.path().to_path_buf()), Some(overrides)).expect("layered config");
        assert_eq!(cfg.database.url, "sqlite://./from-env.db?mode=rwc");
        assert_eq!(cfg.server.port, 9090);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.toml");

        let err = load_layered::<ApiConfig>(Some(missing), Some(Map::new())).unwrap_err();
        assert_eq!(err.kind(), "Config");
    }
}
