//! Optional TOML configuration.
//!
//! ```toml
//! catalog = "/usr/share/inegi/municipios.csv"
//!
//! [endpoints]
//! archive_url = "http://localhost:8000/data/"
//! ```
//!
//! Every key is optional; anything left out keeps its built-in default.

use std::path::{Path, PathBuf};

use covid19mx_source::Endpoints;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "COVID19MX_CONFIG";

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Municipal catalog CSV used instead of the embedded one.
    pub catalog: Option<PathBuf>,
    /// Remote endpoints.
    pub endpoints: Endpoints,
}

impl Config {
    /// Loads the config from `explicit`, else from the file named by
    /// [`CONFIG_ENV`], else returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if the chosen file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });

        match path {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ConfigIo`] or [`CliError::ConfigParse`].
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        log::debug!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::de::from_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml::de::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_single_endpoint() {
        let config: Config = toml::de::from_str(
            r#"
            catalog = "municipios.csv"

            [endpoints]
            archive_url = "http://localhost:8000/data/"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog, Some(PathBuf::from("municipios.csv")));
        assert_eq!(config.endpoints.archive_url, "http://localhost:8000/data/");
        assert_eq!(
            config.endpoints.attack_rate_url,
            Endpoints::default().attack_rate_url
        );
    }

    #[test]
    fn reads_config_file() {
        let path = std::env::temp_dir().join(format!(
            "covid19mx-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[endpoints]\nmunicipal_url = \"http://localhost/mun\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path));
        std::fs::remove_file(&path).ok();

        assert_eq!(
            config.unwrap().endpoints.municipal_url,
            "http://localhost/mun"
        );
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = Config::from_path(Path::new("/nonexistent/covid19mx.toml")).unwrap_err();
        assert!(matches!(err, CliError::ConfigIo { .. }));
        assert!(err.to_string().contains("/nonexistent/covid19mx.toml"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "covid19mx-bad-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[endpoints\n").unwrap();

        let err = Config::from_path(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, CliError::ConfigParse { .. }));
    }
}
