//! Error types.
//!
//! Fatal load conditions are distinguishable by variant so a missing file is
//! never reported as a parse failure. Row-level problems (cells that fail
//! numeric coercion) are not errors at all; they become nulls and are dropped
//! at the owning stage.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GravityError {
    #[error("input file not found: '{}'", .0.display())]
    MissingInput(PathBuf),
    #[error("could not parse '{}' with any known separator/encoding combination", .0.display())]
    Unparseable(PathBuf),
    #[error("required columns [{}] missing from '{}'", .columns.join(", "), .path.display())]
    MissingColumns {
        path: PathBuf,
        columns: Vec<String>,
    },
    #[error("could not read columnar file '{}': {source}", .path.display())]
    Columnar {
        path: PathBuf,
        source: polars::error::PolarsError,
    },
    #[error("no long-format input provided the required series columns")]
    NoSeriesInput,
    #[error("wrapped polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
    #[error("wrapped IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("wrapped anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
