//! Final assembly of the published table: renames to the published column
//! names, fixed column ordering, the final missing-value sweep and the CSV
//! write. Nothing is written unless every upstream stage has succeeded.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::info;
use polars::prelude::*;

use crate::COL;

/// Working-name to published-name pairs. Columns that already carry their
/// published name (population, PSR, area, landlocked) are not listed.
const RENAMES: [(&str, &str); 11] = [
    (COL::FLOW_DEST, COL::OUT_DEST),
    (COL::FLOW_PERIOD, COL::OUT_PERIOD),
    (COL::FLOW_COUNT, COL::OUT_FLOW),
    (COL::DYADIC_DISTANCE, COL::OUT_DISTANCE),
    (COL::DYADIC_CONTIGUOUS, COL::OUT_CONTIGUOUS),
    (COL::DYADIC_COMMON_LANGUAGE, COL::OUT_COMMON_LANGUAGE),
    (COL::DYADIC_COLONIAL_LINK, COL::OUT_COLONIAL_LINK),
    (COL::UNDER5_MORTALITY_RATE_I, COL::OUT_MORTALITY_I),
    (COL::UNDER5_MORTALITY_RATE_J, COL::OUT_MORTALITY_J),
    (COL::URBAN_PCT_I, COL::OUT_URBAN_I),
    (COL::URBAN_PCT_J, COL::OUT_URBAN_J),
];

/// Rename to the published names, select the fixed column order (absent
/// optional columns are silently omitted), report column-wise missing-value
/// counts and drop every row that still has one.
pub fn assemble(mut df: DataFrame) -> PolarsResult<DataFrame> {
    for (working, published) in RENAMES {
        if df.get_column_names().contains(&working) {
            df.rename(working, published)?;
        }
    }
    let present: Vec<&str> = COL::OUTPUT_COLUMNS
        .iter()
        .copied()
        .filter(|name| df.get_column_names().contains(name))
        .collect();
    let df = df.select(present)?;

    info!(
        "Missing values per column before the final sweep:\n{}",
        df.null_count()
    );
    let rows_before = df.height();
    let df = df.lazy().drop_nulls(None).collect()?;
    info!(
        "Final sweep dropped {} rows with missing values, {} rows remain",
        rows_before - df.height(),
        df.height()
    );
    Ok(df)
}

/// Write the assembled table as a UTF-8, comma-separated file with a header
/// row.
pub fn write_output(df: &mut DataFrame, path: &Path) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)?;
    info!("Wrote {} rows to '{}'", df.height(), path.display());
    Ok(())
}
