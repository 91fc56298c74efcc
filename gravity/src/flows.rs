//! Loading and validation of the observed migration flow table, the base
//! table of the gravity model.

use log::info;
use polars::prelude::*;

use crate::config::Config;
use crate::error::GravityError;
use crate::{tabular, COL};

/// Validated flow observations: one row per directed (origin, destination,
/// period) with a strictly positive migrant count.
#[derive(Debug)]
pub struct FlowTable(pub DataFrame);

const CONTRACT_COLUMNS: [&str; 6] = [
    COL::FLOW_ORIGIN,
    COL::FLOW_DEST,
    COL::FLOW_ORIGIN_ISO,
    COL::FLOW_DEST_ISO,
    COL::FLOW_PERIOD,
    COL::FLOW_COUNT,
];

/// Load the flow file, coerce the numeric key and count columns (cells that
/// fail coercion become null and their rows are dropped), and keep only
/// strictly positive flows.
pub fn load_flows(config: &Config) -> Result<FlowTable, GravityError> {
    let path = &config.flows_path;
    info!("Loading flows from '{}'", path.display());
    let df = tabular::read_simple_csv(path)?;
    tabular::ensure_columns(&df, &CONTRACT_COLUMNS, path)?;

    let rows_before = df.height();
    let df = df
        .lazy()
        .select(CONTRACT_COLUMNS.map(col))
        .with_columns([
            col(COL::FLOW_ORIGIN).cast(DataType::Int64),
            col(COL::FLOW_DEST).cast(DataType::Int64),
            col(COL::FLOW_PERIOD).cast(DataType::Int64),
            col(COL::FLOW_COUNT).cast(DataType::Float64),
        ])
        .drop_nulls(Some(vec![
            col(COL::FLOW_ORIGIN),
            col(COL::FLOW_DEST),
            col(COL::FLOW_PERIOD),
            col(COL::FLOW_COUNT),
        ]))
        .filter(col(COL::FLOW_COUNT).gt(lit(0.0)))
        .collect()?;

    info!(
        "Flows filtered to strictly positive counts: {} of {} rows retained",
        df.height(),
        rows_before
    );
    Ok(FlowTable(df))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config_with_flows(contents: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flows.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let config = Config {
            flows_path: path,
            ..Default::default()
        };
        (dir, config)
    }

    #[test]
    fn keeps_only_strictly_positive_numeric_rows() {
        let (_dir, config) = config_with_flows(
            "origin,destination,origIso,destIso,year,migrantCount\n\
             4,8,AFG,ALB,2000,10\n\
             4,8,AFG,ALB,2005,0\n\
             4,8,AFG,ALB,2010,-3\n\
             oops,8,AFG,ALB,2000,5\n\
             4,8,AFG,ALB,not_a_year,5\n",
        );
        let flows = load_flows(&config).unwrap();
        assert_eq!(flows.0.height(), 1);
        assert_eq!(
            flows.0.column(COL::FLOW_COUNT).unwrap().f64().unwrap().get(0),
            Some(10.0)
        );
        assert_eq!(
            flows.0.column(COL::FLOW_ORIGIN).unwrap().i64().unwrap().get(0),
            Some(4)
        );
    }

    #[test]
    fn iso_codes_stay_string_typed() {
        let (_dir, config) = config_with_flows(
            "origin,destination,origIso,destIso,year,migrantCount\n4,8,AFG,ALB,2000,10\n",
        );
        let flows = load_flows(&config).unwrap();
        assert_eq!(
            flows.0.column(COL::FLOW_ORIGIN_ISO).unwrap().dtype(),
            &DataType::String
        );
    }

    #[test]
    fn missing_contract_column_is_fatal() {
        let (_dir, config) = config_with_flows("origin,destination,year\n4,8,2000\n");
        let err = load_flows(&config).unwrap_err();
        assert!(matches!(err, GravityError::MissingColumns { .. }));
    }

    #[test]
    fn missing_file_is_fatal() {
        let config = Config {
            flows_path: "does/not/exist.csv".into(),
            ..Default::default()
        };
        let err = load_flows(&config).unwrap_err();
        assert!(matches!(err, GravityError::MissingInput(_)));
    }
}
