//! The five-stage inner-join sequence connecting flows to every covariate
//! table. Inner joins silently drop unmatched keys, so every stage records
//! its row counts and the result type carries them as part of the contract.

use log::{debug, info};
use polars::prelude::*;

use crate::cepii::{CountryTable, DyadicTable};
use crate::flows::FlowTable;
use crate::un_series::CountryYearTable;
use crate::COL;

/// Row counts around a single join stage. Inner joins are
/// cardinality-non-increasing, so `rows_after <= rows_before` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub stage: &'static str,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl StageReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_before - self.rows_after
    }
}

/// The fully joined table plus the attrition report of every join stage.
pub struct MergedTable {
    pub df: DataFrame,
    pub stages: Vec<StageReport>,
}

/// Clone a frame with every column name suffixed, so a table joined once per
/// side never collides with itself.
fn suffixed(df: &DataFrame, suffix: &str) -> PolarsResult<DataFrame> {
    let mut out = df.clone();
    let names: Vec<String> = out
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for name in names {
        out.rename(&name, &format!("{name}{suffix}"))?;
    }
    Ok(out)
}

fn inner_join(
    stage: &'static str,
    left: DataFrame,
    right: DataFrame,
    left_on: &[&str],
    right_on: &[&str],
    stages: &mut Vec<StageReport>,
) -> PolarsResult<DataFrame> {
    let rows_before = left.height();
    let joined = left
        .lazy()
        .join(
            right.lazy(),
            left_on.iter().map(|name| col(*name)).collect::<Vec<_>>(),
            right_on.iter().map(|name| col(*name)).collect::<Vec<_>>(),
            JoinArgs::new(JoinType::Inner),
        )
        .collect()?;
    info!(
        "Join '{stage}': {rows_before} -> {} rows",
        joined.height()
    );
    stages.push(StageReport {
        stage,
        rows_before,
        rows_after: joined.height(),
    });
    Ok(joined)
}

/// Execute the five inner joins in their fixed order: flows to dyadic pairs,
/// then the country covariates for each side, then the country-year
/// covariates for each side.
pub fn merge_all(
    flows: FlowTable,
    dyadic: DyadicTable,
    country: CountryTable,
    country_year: CountryYearTable,
) -> PolarsResult<MergedTable> {
    let mut stages = Vec::new();

    let df = inner_join(
        "flows-dyadic",
        flows.0,
        dyadic.0,
        &[COL::FLOW_ORIGIN_ISO, COL::FLOW_DEST_ISO],
        &[COL::DYADIC_ISO_ORIGIN, COL::DYADIC_ISO_DEST],
        &mut stages,
    )?;

    let country_iso_i = format!("{}{}", COL::COUNTRY_ISO, COL::ORIGIN_SUFFIX);
    let df = inner_join(
        "origin-country",
        df,
        suffixed(&country.0, COL::ORIGIN_SUFFIX)?,
        &[COL::FLOW_ORIGIN_ISO],
        &[country_iso_i.as_str()],
        &mut stages,
    )?;

    let country_iso_j = format!("{}{}", COL::COUNTRY_ISO, COL::DEST_SUFFIX);
    let df = inner_join(
        "dest-country",
        df,
        suffixed(&country.0, COL::DEST_SUFFIX)?,
        &[COL::FLOW_DEST_ISO],
        &[country_iso_j.as_str()],
        &mut stages,
    )?;

    let code_i = format!("{}{}", COL::COUNTRY_CODE, COL::ORIGIN_SUFFIX);
    let period_i = format!("{}{}", COL::PERIOD, COL::ORIGIN_SUFFIX);
    let df = inner_join(
        "origin-country-year",
        df,
        suffixed(&country_year.0, COL::ORIGIN_SUFFIX)?,
        &[COL::FLOW_ORIGIN, COL::FLOW_PERIOD],
        &[code_i.as_str(), period_i.as_str()],
        &mut stages,
    )?;

    let code_j = format!("{}{}", COL::COUNTRY_CODE, COL::DEST_SUFFIX);
    let period_j = format!("{}{}", COL::PERIOD, COL::DEST_SUFFIX);
    let df = inner_join(
        "dest-country-year",
        df,
        suffixed(&country_year.0, COL::DEST_SUFFIX)?,
        &[COL::FLOW_DEST, COL::FLOW_PERIOD],
        &[code_j.as_str(), period_j.as_str()],
        &mut stages,
    )?;

    debug!("Columns after merge: {:?}", df.get_column_names());
    Ok(MergedTable { df, stages })
}
