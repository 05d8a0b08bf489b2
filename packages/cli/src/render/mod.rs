//! Output renderers.
//!
//! Every renderer writes to an [`io::Write`] so tests can render into a
//! `Vec<u8>`; `main` passes a locked, buffered stdout.

mod awk;
mod delimited;
mod json;
mod table;

use std::io;

use covid19mx_analytics::StateDataset;
use covid19mx_analytics_models::DatasetDiff;
use covid19mx_source_models::MunicipalRecord;

/// Output format selected with `-o`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// CSV with quoted text fields.
    Csv,
    /// Bordered fixed-width table.
    #[default]
    Table,
    /// Tab-separated rows without spaces in names.
    Awk,
}

/// Renders a state dataset.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn states<W: io::Write>(
    out: &mut W,
    format: OutputFormat,
    dataset: &StateDataset,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => json::states(out, dataset),
        OutputFormat::Csv => delimited::states(out, dataset),
        OutputFormat::Table => table::states(out, dataset),
        OutputFormat::Awk => awk::states(out, dataset),
    }
}

/// Renders municipal records.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn municipios<'a, W: io::Write>(
    out: &mut W,
    format: OutputFormat,
    municipios: impl IntoIterator<Item = &'a MunicipalRecord>,
) -> io::Result<()> {
    let municipios: Vec<&MunicipalRecord> = municipios.into_iter().collect();
    match format {
        OutputFormat::Json => json::municipios(out, &municipios),
        OutputFormat::Csv => delimited::municipios(out, &municipios),
        OutputFormat::Table => table::municipios(out, &municipios),
        OutputFormat::Awk => awk::municipios(out, &municipios),
    }
}

/// Renders a comparison against an earlier snapshot.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn diff<W: io::Write>(out: &mut W, format: OutputFormat, diff: &DatasetDiff) -> io::Result<()> {
    match format {
        OutputFormat::Json => json::diff(out, diff),
        OutputFormat::Csv => delimited::diff(out, diff),
        OutputFormat::Table => table::diff(out, diff),
        OutputFormat::Awk => awk::diff(out, diff),
    }
}
