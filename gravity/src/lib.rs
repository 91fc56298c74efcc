//! Builds the single analysis-ready table for a bilateral-migration gravity
//! model: loads flows, static pairwise and per-country covariates and the
//! long-format UN country-year series, chains five narrowing inner joins,
//! derives the working-age share and potential support ratio, and writes one
//! flat CSV keyed by (origin, destination, period).

use anyhow::Result;
use log::info;
use polars::frame::DataFrame;

use crate::config::Config;
use crate::merge::StageReport;

// Re-exports
pub use column_names as COL;

// Modules
pub mod cepii;
pub mod column_names;
pub mod composite;
pub mod config;
pub mod error;
pub mod flows;
pub mod merge;
pub mod output;
pub mod tabular;
pub mod un_series;

/// The whole pipeline behind one value: loaders, merge, composite variables
/// and output assembly, all driven by an immutable [`Config`].
pub struct GravityPipeline {
    pub config: Config,
}

/// The result of a pipeline run: the assembled table plus the attrition
/// report of every join stage.
pub struct PipelineRun {
    pub data: DataFrame,
    pub stages: Vec<StageReport>,
}

impl GravityPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run every stage in memory and return the final table without writing
    /// it. Stages execute strictly sequentially; any fatal load error aborts
    /// the whole run.
    pub fn build(&self) -> Result<PipelineRun> {
        info!("Starting gravity pipeline");
        let flows = flows::load_flows(&self.config)?;
        let dyadic = cepii::load_dyadic(&self.config)?;
        let country = cepii::load_country(&self.config)?;
        let country_year = un_series::load_country_year(&self.config)?;

        let merged = merge::merge_all(flows, dyadic, country, country_year)?;
        let with_ratios = composite::add_composites(merged.df)?;
        let data = output::assemble(with_ratios)?;
        Ok(PipelineRun {
            data,
            stages: merged.stages,
        })
    }

    /// Run the pipeline and write the flat output table. Nothing is written
    /// unless every stage succeeds.
    pub fn run(&self) -> Result<PipelineRun> {
        let mut run = self.build()?;
        output::write_output(&mut run.data, &self.config.output_path)?;
        Ok(run)
    }
}
