//! `--since` resolution.

use chrono::{Days, NaiveDate};

use crate::CliError;

/// Resolves a `--since` value to the snapshot date it refers to.
///
/// Accepted forms, relative to `today`:
///
/// * `today`, `yesterday`;
/// * a day count, optionally signed and/or suffixed with `d` (`2`, `-2`,
///   `2d`, `-2d`); the sign is ignored, offsets always point to the past;
/// * `N days ago` (`1 day ago` also works);
/// * an explicit `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`CliError::InvalidSince`] for anything else and
/// [`CliError::SinceOutOfRange`] if the offset underflows the calendar.
pub fn resolve_since(raw: &str, today: NaiveDate) -> Result<NaiveDate, CliError> {
    let value = raw.trim();

    let Some(days) = days_back(value) else {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            CliError::InvalidSince {
                value: raw.to_owned(),
            }
        });
    };

    today
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| CliError::SinceOutOfRange {
            value: raw.to_owned(),
        })
}

fn days_back(value: &str) -> Option<u64> {
    match value {
        "today" => return Some(0),
        "yesterday" => return Some(1),
        _ => {}
    }

    if let Some(count) = value
        .strip_suffix(" days ago")
        .or_else(|| value.strip_suffix(" day ago"))
    {
        return count.trim().parse().ok();
    }

    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let count = unsigned.strip_suffix('d').unwrap_or(unsigned);
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    count.parse().ok()
}
