//! Loaders for the static CEPII GeoDist covariates: the dyadic file (one row
//! per ordered country pair) and the country file (one row per country).
//! Both ship as columnar parquet; only the known covariates are kept, and
//! optional covariates that are absent are silently omitted.

use std::path::Path;

use log::info;
use polars::prelude::*;

use crate::config::Config;
use crate::error::GravityError;
use crate::{tabular, COL};

/// Static pairwise covariates keyed by (iso_o, iso_d).
pub struct DyadicTable(pub DataFrame);

/// Static per-country covariates keyed by iso3. Joined twice downstream, once
/// per side of the flow.
#[derive(Debug)]
pub struct CountryTable(pub DataFrame);

fn read_columnar(path: &Path) -> Result<DataFrame, GravityError> {
    if !path.exists() {
        return Err(GravityError::MissingInput(path.to_path_buf()));
    }
    let scan = |p: &Path| -> PolarsResult<DataFrame> {
        LazyFrame::scan_parquet(p, ScanArgsParquet::default())?.collect()
    };
    scan(path).map_err(|source| GravityError::Columnar {
        path: path.to_path_buf(),
        source,
    })
}

fn select_present(df: DataFrame, wanted: &[&str]) -> PolarsResult<DataFrame> {
    let present: Vec<&str> = wanted
        .iter()
        .copied()
        .filter(|name| df.get_column_names().contains(name))
        .collect();
    df.select(present)
}

pub fn load_dyadic(config: &Config) -> Result<DyadicTable, GravityError> {
    let path = &config.dyadic_path;
    info!("Loading dyadic covariates from '{}'", path.display());
    let df = read_columnar(path)?;
    tabular::ensure_columns(&df, &[COL::DYADIC_ISO_ORIGIN, COL::DYADIC_ISO_DEST], path)?;
    let df = select_present(
        df,
        &[
            COL::DYADIC_ISO_ORIGIN,
            COL::DYADIC_ISO_DEST,
            COL::DYADIC_DISTANCE,
            COL::DYADIC_CONTIGUOUS,
            COL::DYADIC_COMMON_LANGUAGE,
            COL::DYADIC_COLONIAL_LINK,
        ],
    )?;
    // ISO join keys are exact-match strings
    let df = df
        .lazy()
        .with_columns([
            col(COL::DYADIC_ISO_ORIGIN).cast(DataType::String),
            col(COL::DYADIC_ISO_DEST).cast(DataType::String),
        ])
        .collect()?;
    info!("Dyadic covariates loaded: {} country pairs", df.height());
    Ok(DyadicTable(df))
}

pub fn load_country(config: &Config) -> Result<CountryTable, GravityError> {
    let path = &config.country_path;
    info!("Loading country covariates from '{}'", path.display());
    let df = read_columnar(path)?;
    tabular::ensure_columns(&df, &[COL::COUNTRY_ISO], path)?;
    let df = select_present(
        df,
        &[COL::COUNTRY_ISO, COL::COUNTRY_AREA, COL::COUNTRY_LANDLOCKED],
    )?;
    let df = df
        .lazy()
        .with_columns([col(COL::COUNTRY_ISO).cast(DataType::String)])
        .collect()?;
    info!("Country covariates loaded: {} countries", df.height());
    Ok(CountryTable(df))
}
