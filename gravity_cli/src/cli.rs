use std::path::PathBuf;

use clap::{command, Args, Parser, Subcommand, ValueEnum};
use enum_dispatch::enum_dispatch;
use log::info;

use gravity::{cepii, config::Config, flows, un_series, GravityPipeline};

use crate::display::{display_frame_head, display_null_counts, display_stage_reports};
use crate::error::GravityCliResult;

/// Trait that defines what to run when a given subcommand is invoked.
#[enum_dispatch]
pub trait RunCommand {
    fn run(&self, config: Config) -> GravityCliResult<()>;
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Builds the analysis-ready table for a bilateral-migration gravity model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[arg(long, global = true, help = "Path to an explicit TOML config file")]
    pub config: Option<PathBuf>,
}

#[enum_dispatch(RunCommand)]
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline and write the flat output table
    Run(RunArgs),
    /// Load a single input through its loader and show the parsed head rows
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[arg(long, help = "Override the configured flow file")]
    flows: Option<PathBuf>,
    #[arg(long, help = "Override the configured dyadic covariate file")]
    dyadic: Option<PathBuf>,
    #[arg(long, help = "Override the configured country covariate file")]
    country: Option<PathBuf>,
    #[arg(long, help = "Override the configured UN population series file")]
    population: Option<PathBuf>,
    #[arg(long, help = "Override the configured UN mortality series file")]
    mortality: Option<PathBuf>,
    #[arg(long, help = "Override the configured UN urbanization series file")]
    urban: Option<PathBuf>,
    #[arg(short = 'o', long, help = "Override the configured output file")]
    output: Option<PathBuf>,
}

impl RunArgs {
    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(path) = &self.flows {
            config.flows_path = path.clone();
        }
        if let Some(path) = &self.dyadic {
            config.dyadic_path = path.clone();
        }
        if let Some(path) = &self.country {
            config.country_path = path.clone();
        }
        if let Some(path) = &self.population {
            config.un_population_path = path.clone();
        }
        if let Some(path) = &self.mortality {
            config.un_mortality_path = path.clone();
        }
        if let Some(path) = &self.urban {
            config.un_urban_path = path.clone();
        }
        if let Some(path) = &self.output {
            config.output_path = path.clone();
        }
        config
    }
}

impl RunCommand for RunArgs {
    fn run(&self, config: Config) -> GravityCliResult<()> {
        info!("Running `run` subcommand");
        let config = self.apply_overrides(config);
        let output_path = config.output_path.clone();
        let run = GravityPipeline::new(config).run()?;
        display_stage_reports(&run.stages);
        println!(
            "\nWrote {} rows x {} columns to '{}'.",
            run.data.height(),
            run.data.width(),
            output_path.display()
        );
        Ok(())
    }
}

/// Which input to preview through its loader.
#[derive(ValueEnum, Clone, Debug)]
pub enum PreviewInput {
    Flows,
    Dyadic,
    Country,
    Series,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[arg(value_enum, help = "The input to load and display")]
    input: PreviewInput,
    #[arg(
        short = 'm',
        long,
        default_value_t = 10,
        help = "Number of head rows to display"
    )]
    max_results: usize,
    #[arg(long, help = "Also display column-wise missing-value counts")]
    null_counts: bool,
}

impl RunCommand for PreviewArgs {
    fn run(&self, config: Config) -> GravityCliResult<()> {
        info!("Running `preview` subcommand");
        let df = match self.input {
            PreviewInput::Flows => flows::load_flows(&config)?.0,
            PreviewInput::Dyadic => cepii::load_dyadic(&config)?.0,
            PreviewInput::Country => cepii::load_country(&config)?.0,
            PreviewInput::Series => un_series::load_country_year(&config)?.0,
        };
        display_frame_head(&df, Some(self.max_results));
        if self.null_counts {
            display_null_counts(&df)?;
        }
        Ok(())
    }
}
