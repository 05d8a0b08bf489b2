#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point: COVID-19 case statistics for Mexico.
//!
//! By default prints the latest per-state figures from SINAVE. `--since`
//! compares them against an archived snapshot and `--municipio` switches to
//! municipal data.

use std::io::{self, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use clap::Parser;
use covid19mx_analytics::{StateDataset, aggregate, diff};
use covid19mx_cli::config::Config;
use covid19mx_cli::filter::MunicipioFilter;
use covid19mx_cli::render::{self, OutputFormat};
use covid19mx_cli::since::resolve_since;
use covid19mx_geography::Catalog;
use covid19mx_source::{DataSource, archive, municipal};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\nRelease-Date April 20th, 2020");

const USER_AGENT: &str = concat!("covid19mx/", env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(
    name = "covid19mx",
    version,
    long_version = LONG_VERSION,
    about = "COVID-19 case statistics for Mexico"
)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    /// SINAVE endpoint URL, snapshot `.json` file or URL, or `auto` to detect
    /// the live endpoint
    #[arg(long)]
    source: Option<String>,
    /// Compare against the archived snapshot of an earlier day (`1d`,
    /// `yesterday`, `3`, `2020-04-18`, ...)
    #[arg(long, conflicts_with = "municipio")]
    since: Option<String>,
    /// Show municipal data: a state code (e.g. "09"), `*`/`all`, or `states`
    /// for per-state rollups
    #[arg(long, visible_alias = "mun")]
    municipio: Option<MunicipioFilter>,
    /// Municipal catalog CSV (`code,name`) to use instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// TOML config file (defaults to `$COVID19MX_CONFIG`)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let mut out = BufWriter::new(io::stdout().lock());

    if let Some(filter) = &cli.municipio {
        if cli.source.is_some() {
            log::warn!("--source is ignored in municipal mode");
        }
        let catalog_path = cli.catalog.as_deref().or(config.catalog.as_deref());
        let catalog = load_catalog(catalog_path)?;
        show_municipal(&client, &config, &catalog, filter, cli.output, &mut out).await?;
    } else {
        let since = cli
            .since
            .as_deref()
            .map(|raw| resolve_since(raw, chrono::Local::now().date_naive()))
            .transpose()?;

        let source = DataSource::parse(cli.source.as_deref());
        let records = covid19mx_source::load_states(&client, &config.endpoints, &source).await?;
        let dataset = StateDataset::from_records(records);

        if let Some(date) = since {
            let url = archive::snapshot_url(&config.endpoints.archive_url, date);
            let snapshot = archive::fetch_snapshot(&client, &url).await?;
            let previous = StateDataset::from_records(snapshot.states);
            render::diff(&mut out, cli.output, &diff::compare(&dataset, &previous))?;
        } else {
            render::states(&mut out, cli.output, &dataset)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, covid19mx_geography::GeographyError> {
    let catalog = match path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::embedded()?,
    };
    log::debug!("Municipal catalog has {} entries", catalog.len());
    Ok(catalog)
}

async fn show_municipal(
    client: &reqwest::Client,
    config: &Config,
    catalog: &Catalog,
    filter: &MunicipioFilter,
    format: OutputFormat,
    out: &mut impl io::Write,
) -> Result<(), Box<dyn std::error::Error>> {
    if let MunicipioFilter::State(code) = filter {
        match filter.state_name(catalog) {
            Some(name) => log::info!("Showing municipios of {name} ({code})"),
            None => log::warn!("The municipal catalog has no entries for state {code}"),
        }
    }

    let categories =
        municipal::fetch_all_categories(client, &config.endpoints.municipal_url).await?;
    let result = aggregate::aggregate(catalog, &categories);

    match filter {
        MunicipioFilter::All => render::municipios(out, format, result.municipios())?,
        MunicipioFilter::State(code) => render::municipios(out, format, result.in_state(code))?,
        MunicipioFilter::States => render::states(out, format, &result.state_dataset())?,
    }
    Ok(())
}
