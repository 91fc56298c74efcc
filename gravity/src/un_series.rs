//! Loader for the dynamic UN covariates, published in long (series/value)
//! form across several files, and the long-to-wide reshape into one record
//! per (country, period).

use itertools::Itertools;
use log::{info, warn};
use polars::prelude::*;

use crate::config::Config;
use crate::error::GravityError;
use crate::{tabular, COL};

/// One row per (country_code, period) with one column per recognized series,
/// population already rescaled to an absolute count.
#[derive(Debug)]
pub struct CountryYearTable(pub DataFrame);

/// The recognized series and their canonical short names.
const RECOGNIZED_SERIES: [(&str, &str); 5] = [
    (COL::SERIES_POPULATION, COL::POPULATION),
    (COL::SERIES_AGE_0_14, COL::AGE_0_14_PCT),
    (COL::SERIES_AGE_60_PLUS, COL::AGE_60_PLUS_PCT),
    (COL::SERIES_UNDER5_MORTALITY, COL::UNDER5_MORTALITY_RATE),
    (COL::SERIES_URBAN, COL::URBAN_PCT),
];

const LONG_COLUMNS: [&str; 4] = [
    COL::UN_COUNTRY_CODE,
    COL::UN_PERIOD,
    COL::UN_SERIES,
    COL::UN_VALUE,
];

/// Load every configured long-format file. Files that cannot be parsed or
/// that lack the long-format contract columns are skipped with a warning;
/// having no usable file at all is fatal.
pub fn load_country_year(config: &Config) -> Result<CountryYearTable, GravityError> {
    let mut frames: Vec<LazyFrame> = Vec::new();
    for path in config.un_series_paths() {
        let df = match tabular::read_delimited(path) {
            Ok(df) => df,
            Err(e) => {
                warn!("Skipping long-format file '{}': {e}", path.display());
                continue;
            }
        };
        match tabular::ensure_columns(&df, &LONG_COLUMNS, path) {
            Ok(()) => frames.push(df.lazy().select(LONG_COLUMNS.map(col))),
            Err(e) => warn!("Skipping long-format file '{}': {e}", path.display()),
        }
    }
    if frames.is_empty() {
        return Err(GravityError::NoSeriesInput);
    }

    let long = concat(frames, UnionArgs::default())?.collect()?;
    let rows_long = long.height();

    let recognized = Series::new(
        "recognized_series",
        RECOGNIZED_SERIES.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
    );
    let cleaned = long
        .lazy()
        .filter(col(COL::UN_SERIES).is_in(lit(recognized)))
        .with_columns([
            // Strip thousands separators before coercing the values
            col(COL::UN_VALUE)
                .str()
                .replace_all(lit(","), lit(""), true)
                .cast(DataType::Float64),
            col(COL::UN_COUNTRY_CODE).cast(DataType::Int64),
            col(COL::UN_PERIOD).cast(DataType::Int64),
        ])
        .drop_nulls(Some(vec![
            col(COL::UN_COUNTRY_CODE),
            col(COL::UN_PERIOD),
            col(COL::UN_VALUE),
        ]));

    // Long to wide: one aggregation per recognized series. Duplicate
    // (country, period, series) rows collapse to their mean.
    let aggregations: Vec<Expr> = RECOGNIZED_SERIES
        .into_iter()
        .map(|(series_name, short_name)| {
            col(COL::UN_VALUE)
                .filter(col(COL::UN_SERIES).eq(lit(series_name)))
                .mean()
                .alias(short_name)
        })
        .collect();

    let wide = cleaned
        .group_by([col(COL::UN_COUNTRY_CODE), col(COL::UN_PERIOD)])
        .agg(aggregations)
        .rename(
            [COL::UN_COUNTRY_CODE, COL::UN_PERIOD],
            [COL::COUNTRY_CODE, COL::PERIOD],
        )
        // The population series is published in millions
        .with_column((col(COL::POPULATION) * lit(1_000_000.0)).alias(COL::POPULATION))
        .sort([COL::COUNTRY_CODE, COL::PERIOD], SortMultipleOptions::default())
        .collect()?;

    info!(
        "UN series reshaped: {} country-year rows from {} long rows across [{}]",
        wide.height(),
        rows_long,
        config.un_series_paths().iter().map(|p| p.display()).join(", ")
    );
    Ok(CountryYearTable(wide))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn config_with_series(dir: &tempfile::TempDir, population: &str) -> Config {
        Config {
            un_population_path: write_fixture(dir, "population.csv", population),
            un_mortality_path: dir.path().join("absent_mortality.csv"),
            un_urban_path: dir.path().join("absent_urban.csv"),
            ..Default::default()
        }
    }

    const HEADER: &str = "Region/Country/Area,Year,Series,Value\n";

    #[test]
    fn reshapes_long_series_to_one_row_per_country_year() {
        let dir = tempfile::tempdir().unwrap();
        let contents = format!(
            "{HEADER}\
             4,2000,\"Population mid-year estimates (millions)\",20.0\n\
             4,2000,\"Population aged 0 to 14 years old (percentage)\",30\n\
             4,2000,\"Population aged 60+ years old (percentage)\",10\n\
             4,2000,\"Under five mortality rate for both sexes (per 1,000 live births)\",100\n\
             4,2000,\"Urban population (percent)\",22\n\
             4,2000,\"Some unrecognized series\",99\n"
        );
        let config = config_with_series(&dir, &contents);
        let wide = load_country_year(&config).unwrap().0;

        assert_eq!(wide.height(), 1);
        let row_value = |name: &str| wide.column(name).unwrap().f64().unwrap().get(0);
        assert_eq!(row_value(COL::POPULATION), Some(20_000_000.0));
        assert_eq!(row_value(COL::AGE_0_14_PCT), Some(30.0));
        assert_eq!(row_value(COL::AGE_60_PLUS_PCT), Some(10.0));
        assert_eq!(row_value(COL::UNDER5_MORTALITY_RATE), Some(100.0));
        assert_eq!(row_value(COL::URBAN_PCT), Some(22.0));
        assert!(!wide.get_column_names().contains(&"Some unrecognized series"));
    }

    #[test]
    fn round_trips_values_when_keys_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let contents = format!(
            "{HEADER}\
             4,2000,\"Urban population (percent)\",22.5\n\
             4,2005,\"Urban population (percent)\",25.5\n\
             8,2000,\"Urban population (percent)\",41.25\n"
        );
        let config = config_with_series(&dir, &contents);
        let wide = load_country_year(&config).unwrap().0;

        assert_eq!(wide.height(), 3);
        let urban: Vec<Option<f64>> = wide
            .column(COL::URBAN_PCT)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        // Sorted by (country_code, period)
        assert_eq!(urban, vec![Some(22.5), Some(25.5), Some(41.25)]);
    }

    #[test]
    fn duplicate_keys_collapse_to_their_mean() {
        let dir = tempfile::tempdir().unwrap();
        let contents = format!(
            "{HEADER}\
             4,2000,\"Urban population (percent)\",20\n\
             4,2000,\"Urban population (percent)\",30\n"
        );
        let config = config_with_series(&dir, &contents);
        let wide = load_country_year(&config).unwrap().0;
        assert_eq!(wide.height(), 1);
        assert_eq!(
            wide.column(COL::URBAN_PCT).unwrap().f64().unwrap().get(0),
            Some(25.0)
        );
    }

    #[test]
    fn strips_thousands_separators_and_drops_uncoercible_rows() {
        let dir = tempfile::tempdir().unwrap();
        let contents = format!(
            "{HEADER}\
             4,2000,\"Urban population (percent)\",\"1,234.5\"\n\
             4,2005,\"Urban population (percent)\",not_a_number\n\
             oops,2000,\"Urban population (percent)\",10\n"
        );
        let config = config_with_series(&dir, &contents);
        let wide = load_country_year(&config).unwrap().0;
        assert_eq!(wide.height(), 1);
        assert_eq!(
            wide.column(COL::URBAN_PCT).unwrap().f64().unwrap().get(0),
            Some(1234.5)
        );
    }

    #[test]
    fn files_missing_the_contract_columns_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let good = format!("{HEADER}4,2000,\"Urban population (percent)\",22\n");
        let config = Config {
            un_population_path: write_fixture(&dir, "population.csv", &good),
            un_mortality_path: write_fixture(&dir, "mortality.csv", "wrong,columns\n1,2\n"),
            un_urban_path: dir.path().join("missing.csv"),
            ..Default::default()
        };
        let wide = load_country_year(&config).unwrap().0;
        assert_eq!(wide.height(), 1);
    }

    #[test]
    fn no_usable_input_at_all_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            un_population_path: dir.path().join("a.csv"),
            un_mortality_path: dir.path().join("b.csv"),
            un_urban_path: dir.path().join("c.csv"),
            ..Default::default()
        };
        let err = load_country_year(&config).unwrap_err();
        assert!(matches!(err, GravityError::NoSeriesInput));
    }
}
