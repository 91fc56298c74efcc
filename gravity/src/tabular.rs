//! Resilient reading of delimited text files with uncertain separator,
//! encoding and header placement.
//!
//! Every cell is left string-typed (`infer_schema_length = 0`); numeric
//! coercion is deferred to the callers, which know which columns are keys and
//! which are values.

use std::collections::HashSet;
use std::path::Path;

use log::debug;
use polars::prelude::*;

use crate::error::GravityError;

/// One (separator, encoding, header offset) parse attempt.
#[derive(Debug, Clone, Copy)]
pub struct ParseCandidate {
    pub separator: u8,
    pub encoding: CsvEncoding,
    pub skip_rows: usize,
}

/// Candidates in priority order: comma before semicolon, strict UTF-8 before
/// lossy decoding (the latin1 fallback), no leading title row before one.
pub fn default_candidates() -> Vec<ParseCandidate> {
    let mut candidates = Vec::new();
    for separator in [b',', b';'] {
        for encoding in [CsvEncoding::Utf8, CsvEncoding::LossyUtf8] {
            for skip_rows in [0, 1] {
                candidates.push(ParseCandidate {
                    separator,
                    encoding,
                    skip_rows,
                });
            }
        }
    }
    candidates
}

fn read_with(path: &Path, candidate: &ParseCandidate) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(candidate.skip_rows)
        .with_infer_schema_length(Some(0))
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(candidate.separator)
                .with_encoding(candidate.encoding),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
}

/// Read a delimited text file, trying each candidate in turn and returning
/// the first viable parse. A parse is only viable if it yields at least two
/// columns: a mismatched separator still "parses" as a single junk column and
/// must fall through to the next candidate.
pub fn read_delimited(path: &Path) -> Result<DataFrame, GravityError> {
    if !path.exists() {
        return Err(GravityError::MissingInput(path.to_path_buf()));
    }
    for candidate in default_candidates() {
        match read_with(path, &candidate) {
            Ok(df) if df.width() >= 2 => {
                debug!(
                    "Parsed '{}' with separator {:?}, encoding {:?}, {} skipped row(s)",
                    path.display(),
                    char::from(candidate.separator),
                    candidate.encoding,
                    candidate.skip_rows
                );
                return Ok(df);
            }
            Ok(_) => debug!(
                "Rejecting single-column parse of '{}' with separator {:?}",
                path.display(),
                char::from(candidate.separator)
            ),
            Err(e) => debug!(
                "Candidate {:?} failed for '{}': {e}",
                candidate,
                path.display()
            ),
        }
    }
    Err(GravityError::Unparseable(path.to_path_buf()))
}

/// Read a well-formed comma-separated file with a standard header row.
pub fn read_simple_csv(path: &Path) -> Result<DataFrame, GravityError> {
    if !path.exists() {
        return Err(GravityError::MissingInput(path.to_path_buf()));
    }
    let candidate = ParseCandidate {
        separator: b',',
        encoding: CsvEncoding::Utf8,
        skip_rows: 0,
    };
    Ok(read_with(path, &candidate)?)
}

/// Check that every required column is present, or fail with the missing
/// names and the offending path.
pub fn ensure_columns(
    df: &DataFrame,
    required: &[&str],
    path: &Path,
) -> Result<(), GravityError> {
    let present: HashSet<&str> = df.get_column_names().into_iter().collect();
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !present.contains(**name))
        .map(|name| name.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(GravityError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        })
    }
}
