//! Derivation of the composite demographic variables: the working-age share
//! and the potential support ratio (PSR), for both sides of the flow. Pure
//! expression work over the already-joined table; no I/O.

use polars::prelude::*;

use crate::COL;

fn working_age_expr(suffix: &str) -> Expr {
    // 15-59 share as a proxy for the working-age population
    (lit(100.0)
        - col(&format!("{}{suffix}", COL::AGE_0_14_PCT))
        - col(&format!("{}{suffix}", COL::AGE_60_PLUS_PCT)))
    .alias(&format!("{}{suffix}", COL::WORKING_AGE_PCT))
}

fn psr_expr(suffix: &str) -> Expr {
    let elderly = col(&format!("{}{suffix}", COL::AGE_60_PLUS_PCT));
    // A zero elderly share must yield a missing PSR, never infinity
    let denominator = when(elderly.clone().eq(lit(0.0)))
        .then(lit(NULL))
        .otherwise(elderly);
    (col(&format!("{}{suffix}", COL::WORKING_AGE_PCT)) / denominator)
        .alias(&format!("{}{suffix}", COL::PSR))
}

/// Add `working_age_pct_{i,j}` and `PSR_{i,j}` to the merged table.
pub fn add_composites(df: DataFrame) -> PolarsResult<DataFrame> {
    df.lazy()
        .with_columns([
            working_age_expr(COL::ORIGIN_SUFFIX),
            working_age_expr(COL::DEST_SUFFIX),
        ])
        .with_columns([psr_expr(COL::ORIGIN_SUFFIX), psr_expr(COL::DEST_SUFFIX)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged_fixture(age_60_plus_i: f64) -> DataFrame {
        polars::df!(
            "age_0_14_pct_i" => &[30.0],
            "age_60_plus_pct_i" => &[age_60_plus_i],
            "age_0_14_pct_j" => &[25.0],
            "age_60_plus_pct_j" => &[15.0],
        )
        .unwrap()
    }

    #[test]
    fn computes_working_age_share_and_psr() {
        let df = add_composites(merged_fixture(10.0)).unwrap();
        let value = |name: &str| df.column(name).unwrap().f64().unwrap().get(0);
        assert_eq!(value("working_age_pct_i"), Some(60.0));
        assert_eq!(value("PSR_i"), Some(6.0));
        assert_eq!(value("working_age_pct_j"), Some(60.0));
        assert_eq!(value("PSR_j"), Some(4.0));
    }

    #[test]
    fn age_shares_partition_the_population() {
        let df = add_composites(merged_fixture(10.0)).unwrap();
        let value = |name: &str| df.column(name).unwrap().f64().unwrap().get(0).unwrap();
        let total =
            value("working_age_pct_i") + value("age_0_14_pct_i") + value("age_60_plus_pct_i");
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_elderly_share_yields_missing_psr_not_infinity() {
        let df = add_composites(merged_fixture(0.0)).unwrap();
        assert_eq!(df.column("PSR_i").unwrap().f64().unwrap().get(0), None);
        // The other side is unaffected
        assert_eq!(df.column("PSR_j").unwrap().f64().unwrap().get(0), Some(4.0));
    }

    #[test]
    fn null_elderly_share_propagates_missingness() {
        let df = polars::df!(
            "age_0_14_pct_i" => &[Some(30.0)],
            "age_60_plus_pct_i" => &[None::<f64>],
            "age_0_14_pct_j" => &[Some(25.0)],
            "age_60_plus_pct_j" => &[Some(15.0)],
        )
        .unwrap();
        let df = add_composites(df).unwrap();
        assert_eq!(df.column("PSR_i").unwrap().f64().unwrap().get(0), None);
    }
}
