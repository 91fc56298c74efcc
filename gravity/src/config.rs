use std::default::Default;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Immutable run configuration: where every input file lives and where the
/// output table goes. Constructed once per run and passed by reference into
/// each stage, never accessed as global state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub flows_path: PathBuf,
    pub dyadic_path: PathBuf,
    pub country_path: PathBuf,
    pub un_population_path: PathBuf,
    pub un_mortality_path: PathBuf,
    pub un_urban_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            flows_path: "data/azose_raftery_flows.csv".into(),
            dyadic_path: "data/dist_cepii.parquet".into(),
            country_path: "data/geo_cepii.parquet".into(),
            un_population_path: "data/population_un.csv".into(),
            un_mortality_path: "data/mortality_un.csv".into(),
            un_urban_path: "data/urban_un.csv".into(),
            output_path: "gravity_data.csv".into(),
        }
    }
}

impl Config {
    /// The long-format series files, in load order.
    pub fn un_series_paths(&self) -> [&PathBuf; 3] {
        [
            &self.un_population_path,
            &self.un_mortality_path,
            &self.un_urban_path,
        ]
    }
}
