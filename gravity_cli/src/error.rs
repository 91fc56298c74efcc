use gravity::error::GravityError;
use polars::error::PolarsError;

#[derive(thiserror::Error, Debug)]
pub enum GravityCliError {
    #[error("Anyhow error")]
    Anyhow(#[from] anyhow::Error),
    #[error("gravity error")]
    Gravity(#[from] GravityError),
    #[error("polars error")]
    Polars(#[from] PolarsError),
    #[error("std IO error")]
    Io(#[from] std::io::Error),
}

pub type GravityCliResult<T> = Result<T, GravityCliError>;
