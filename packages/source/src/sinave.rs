//! SINAVE state-level feed.
//!
//! The endpoint answers a bodyless `POST` with `{"d": "<string>"}` where the
//! string is itself a JSON array of positional rows, e.g.
//!
//! ```text
//! ["1","Aguascalientes","1353758.409","01","24","243","74","0","1.77"]
//! ```
//!
//! Cells are strings. Index 1 is the state name, 4..=7 are the positive,
//! negative, suspect and death counts and 8 (newer feeds only) the attack
//! rate.

use covid19mx_source_models::{CaseCounts, StateRecord};
use serde::Deserialize;

use crate::http::send_text;
use crate::{Endpoints, SourceError};

const NAME_COL: usize = 1;
const POSITIVE_COL: usize = 4;
const NEGATIVE_COL: usize = 5;
const SUSPECT_COL: usize = 6;
const DEATHS_COL: usize = 7;
const ATTACK_RATE_COL: usize = 8;

#[derive(Debug, Deserialize)]
struct Envelope {
    d: String,
}

/// Fetches and decodes the state rows from a SINAVE endpoint.
///
/// The national row is kept; see
/// [`StateRecord::is_national`](covid19mx_source_models::StateRecord::is_national).
///
/// # Errors
///
/// Returns [`SourceError`] if the request fails or the payload does not
/// decode.
pub async fn fetch_states(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<StateRecord>, SourceError> {
    log::info!("Fetching state data from {url}");
    let body = send_text(
        client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json; charset=UTF-8"),
    )
    .await?;

    let states = decode_envelope(&body)?;
    log::debug!("Decoded {} state rows", states.len());
    Ok(states)
}

/// Finds which of the two known SINAVE endpoints currently serves data by
/// looking for its name in the map page.
///
/// # Errors
///
/// Returns [`SourceError::SourceNotFound`] if the page references neither
/// endpoint, or any request error.
pub async fn detect_latest_data_source(
    client: &reqwest::Client,
    endpoints: &Endpoints,
) -> Result<String, SourceError> {
    log::info!("Detecting data source from {}", endpoints.sinave_map_url);
    let page = send_text(client.get(&endpoints.sinave_map_url)).await?;
    let url = pick_data_source(&page, endpoints)?;
    log::info!("Using data source {url}");
    Ok(url.to_owned())
}

fn pick_data_source<'a>(page: &str, endpoints: &'a Endpoints) -> Result<&'a str, SourceError> {
    [&endpoints.sinave_url_a, &endpoints.sinave_url_b]
        .into_iter()
        .find(|url| {
            url.rsplit('/')
                .next()
                .is_some_and(|name| !name.is_empty() && page.contains(name))
        })
        .map(String::as_str)
        .ok_or(SourceError::SourceNotFound)
}

/// Decodes the `{"d": "[[...], ...]"}` envelope into state rows.
///
/// # Errors
///
/// Returns [`SourceError::Json`] if either JSON layer is malformed and
/// [`SourceError::Payload`] if a row lacks a column, a cell is not a string
/// or a number does not parse.
pub fn decode_envelope(body: &str) -> Result<Vec<StateRecord>, SourceError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let rows: Vec<Vec<serde_json::Value>> = serde_json::from_str(&envelope.d)?;

    rows.iter()
        .enumerate()
        .map(|(idx, row)| decode_row(idx, row))
        .collect()
}

fn decode_row(idx: usize, row: &[serde_json::Value]) -> Result<StateRecord, SourceError> {
    let name = cell(idx, row, NAME_COL)?.to_owned();
    let counts = CaseCounts {
        positive: count(idx, row, POSITIVE_COL)?,
        negative: count(idx, row, NEGATIVE_COL)?,
        suspect: count(idx, row, SUSPECT_COL)?,
        deaths: count(idx, row, DEATHS_COL)?,
    };
    let attack_rate = if row.len() > ATTACK_RATE_COL {
        let raw = cell(idx, row, ATTACK_RATE_COL)?;
        raw.parse::<f64>().map_err(|e| SourceError::Payload {
            message: format!("row {idx} column {ATTACK_RATE_COL}: '{raw}' is not a rate: {e}"),
        })?
    } else {
        0.0
    };

    Ok(StateRecord {
        name,
        counts,
        attack_rate,
    })
}

fn cell(idx: usize, row: &[serde_json::Value], col: usize) -> Result<&str, SourceError> {
    let value = row.get(col).ok_or_else(|| SourceError::Payload {
        message: format!("row {idx} has {} columns, expected column {col}", row.len()),
    })?;
    value.as_str().ok_or_else(|| SourceError::Payload {
        message: format!("row {idx} column {col}: expected string, got {value}"),
    })
}

fn count(idx: usize, row: &[serde_json::Value], col: usize) -> Result<u64, SourceError> {
    let raw = cell(idx, row, col)?;
    raw.parse::<u64>().map_err(|e| SourceError::Payload {
        message: format!("row {idx} column {col}: '{raw}' is not a count: {e}"),
    })
}
