//! Safe date parsing for designated columns.

use polars::prelude::{DataFrame, Expr, IntoLazy, StrptimeOptions, col};
use tracing::warn;

use lake_common::sentinel::DATE_FORMAT;

use crate::error::Result;

/// Parses the configured date columns against the one accepted format.
///
/// Non-conforming values become null — the explicit "no value" marker —
/// rather than failing the batch. These columns are the only ones exempt
/// from the later null imputation, so the marker survives to the output.
pub fn parse_date_columns(df: DataFrame, date_columns: &[String]) -> Result<DataFrame> {
    let present: Vec<&String> = date_columns
        .iter()
        .filter(|name| {
            let found = df.column(name).is_ok();
            if !found {
                warn!(column = %name, "configured date column not present, skipping");
            }
            found
        })
        .collect();
    if present.is_empty() {
        return Ok(df);
    }

    let exprs: Vec<Expr> = present
        .into_iter()
        .map(|name| {
            col(name.as_str())
                .str()
                .to_date(StrptimeOptions {
                    format: Some(DATE_FORMAT.into()),
                    strict: false,
                    exact: true,
                    cache: true,
                })
                .alias(name.as_str())
        })
        .collect();
    Ok(df.lazy().with_columns(exprs).collect()?)
}
