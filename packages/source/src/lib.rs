#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fetchers and decoders for the COVID-19 feeds.
//!
//! * [`sinave`]: state-level rows wrapped in a `{"d": "..."}` envelope;
//! * [`municipal`]: per-category municipal counts embedded in a script
//!   fragment, read by [`script::parse_script`];
//! * [`archive`]: dated `{"states": [...]}` snapshots, remote or local.
//!
//! Every request is sent once and awaited before the next one; the first
//! error is returned to the caller.

pub mod archive;
pub mod http;
pub mod municipal;
pub mod script;
pub mod sinave;

use std::path::PathBuf;

use covid19mx_source_models::StateRecord;
use serde::{Deserialize, Serialize};

/// Errors that can occur while fetching or decoding a feed.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status other than 200.
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
        /// Start of the response body.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (local snapshot files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload decoded as JSON but does not have the expected shape.
    #[error("Unexpected payload: {message}")]
    Payload {
        /// Description of what went wrong.
        message: String,
    },

    /// The SINAVE map page did not reference any known data endpoint.
    #[error("Could not find datasource")]
    SourceNotFound,
}

/// Remote endpoints used by the fetchers.
///
/// Every field has a default, so a config file only needs to list the
/// endpoints it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Map page used to detect which SINAVE endpoint is live.
    pub sinave_map_url: String,
    /// First candidate SINAVE data endpoint.
    pub sinave_url_a: String,
    /// Second candidate SINAVE data endpoint.
    pub sinave_url_b: String,
    /// SINAVE endpoint that includes the attack-rate column (default
    /// source).
    pub attack_rate_url: String,
    /// Base URL of the dated snapshot archive.
    pub archive_url: String,
    /// Municipal-level endpoint.
    pub municipal_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            sinave_map_url: "https://covid19.sinave.gob.mx/mapa.aspx".to_owned(),
            sinave_url_a: "https://covid19.sinave.gob.mx/Mapa.aspx/Grafica22".to_owned(),
            sinave_url_b: "https://covid19.sinave.gob.mx/Mapa.aspx/Grafica23".to_owned(),
            attack_rate_url: "https://covid19.sinave.gob.mx/Log.aspx/Grafica22".to_owned(),
            archive_url: "https://wallyqs.github.io/covid19mx/data/".to_owned(),
            municipal_url: "https://coronavirus.gob.mx/fHDMap/info/getInfoMun.php".to_owned(),
        }
    }
}

/// Where the state-level data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The configured attack-rate endpoint.
    Default,
    /// Whichever SINAVE endpoint the map page currently references.
    Detect,
    /// A SINAVE endpoint given explicitly.
    Url(String),
    /// A snapshot served over HTTP (`https://.../<date>.json`).
    SnapshotUrl(String),
    /// A snapshot on the local filesystem.
    File(PathBuf),
}

impl DataSource {
    /// Interprets a `--source` value.
    ///
    /// Empty → [`Self::Default`], `auto` → [`Self::Detect`], an `http(s)`
    /// URL ending in `.json` → [`Self::SnapshotUrl`], anything else
    /// mentioning `.json` → [`Self::File`], otherwise [`Self::Url`].
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::Default;
        };
        let is_http = raw.starts_with("http://") || raw.starts_with("https://");
        if raw == "auto" {
            Self::Detect
        } else if is_http && raw.ends_with(".json") {
            Self::SnapshotUrl(raw.to_owned())
        } else if !is_http && raw.contains(".json") {
            Self::File(PathBuf::from(raw))
        } else {
            Self::Url(raw.to_owned())
        }
    }
}

/// Loads the state rows (national row included) from `source`.
///
/// # Errors
///
/// Returns [`SourceError`] from whichever fetcher or decoder is used.
pub async fn load_states(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    source: &DataSource,
) -> Result<Vec<StateRecord>, SourceError> {
    match source {
        DataSource::Default => sinave::fetch_states(client, &endpoints.attack_rate_url).await,
        DataSource::Detect => {
            let url = sinave::detect_latest_data_source(client, endpoints).await?;
            sinave::fetch_states(client, &url).await
        }
        DataSource::Url(url) => sinave::fetch_states(client, url).await,
        DataSource::SnapshotUrl(url) => Ok(archive::fetch_snapshot(client, url).await?.states),
        DataSource::File(path) => Ok(archive::read_snapshot(path)?.states),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_values() {
        assert_eq!(DataSource::parse(None), DataSource::Default);
        assert_eq!(DataSource::parse(Some("  ")), DataSource::Default);
        assert_eq!(DataSource::parse(Some("auto")), DataSource::Detect);
        assert_eq!(
            DataSource::parse(Some("data/2020-04-19.json")),
            DataSource::File(PathBuf::from("data/2020-04-19.json"))
        );
        assert_eq!(
            DataSource::parse(Some("https://wallyqs.github.io/covid19mx/data/2020-04-19.json")),
            DataSource::SnapshotUrl(
                "https://wallyqs.github.io/covid19mx/data/2020-04-19.json".to_owned()
            )
        );
        assert_eq!(
            DataSource::parse(Some("https://covid19.sinave.gob.mx/Mapa.aspx/Grafica23")),
            DataSource::Url("https://covid19.sinave.gob.mx/Mapa.aspx/Grafica23".to_owned())
        );
    }

    #[test]
    fn partial_endpoint_config_keeps_defaults() {
        let endpoints: Endpoints =
            serde_json::from_str(r#"{"archive_url": "http://localhost:8000/"}"#).unwrap();
        assert_eq!(endpoints.archive_url, "http://localhost:8000/");
        assert_eq!(
            endpoints.municipal_url,
            Endpoints::default().municipal_url
        );
    }
}
