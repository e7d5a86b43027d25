//! Type-conditional null imputation.

use polars::prelude::{DataFrame, DataType, Float64Chunked, Int64Chunked, IntoSeries, StringChunked};
use tracing::debug;

use lake_common::sentinel::{NUMERIC_FILL, UNKNOWN_TEXT};
use lake_common::{parse_f64, parse_i64};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolvedType {
    Integer,
    Float,
    Text,
}

/// Decides what a normalized text column "really" is.
///
/// A column is numeric only when every non-null value parses; an empty
/// column stays text. Integer wins over float when no value needs a
/// fractional part.
fn resolve_type(values: &StringChunked) -> ResolvedType {
    let mut non_null = 0usize;
    let mut floats = 0usize;
    let mut ints = 0usize;
    for value in values.iter().flatten() {
        non_null += 1;
        if parse_f64(value).is_some() {
            floats += 1;
        }
        if parse_i64(value).is_some() {
            ints += 1;
        }
    }
    if non_null == 0 || floats < non_null {
        ResolvedType::Text
    } else if ints == non_null {
        ResolvedType::Integer
    } else {
        ResolvedType::Float
    }
}

/// Fills nulls according to each column's resolved type.
///
/// Date columns are left untouched — their nulls are the intentional
/// unparsable-date marker. Text columns get the "desconocido" sentinel.
/// Columns whose normalized text is wholly numeric are re-derived to a
/// numeric dtype with nulls filled with zero. After this pass no cell in a
/// non-date column is null.
pub fn impute_nulls(mut df: DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    for name in names {
        let dtype = df.column(&name)?.dtype().clone();
        if dtype == DataType::Date {
            continue;
        }
        // Everything non-date is normalized text at this point.
        let values = df.column(&name)?.str()?.clone();
        let resolved = resolve_type(&values);
        debug!(column = %name, resolved = ?resolved, "imputing nulls");
        let series = match resolved {
            ResolvedType::Integer => values
                .iter()
                .map(|opt| Some(opt.and_then(parse_i64).unwrap_or(NUMERIC_FILL)))
                .collect::<Int64Chunked>()
                .into_series(),
            ResolvedType::Float => values
                .iter()
                .map(|opt| Some(opt.and_then(parse_f64).unwrap_or(NUMERIC_FILL as f64)))
                .collect::<Float64Chunked>()
                .into_series(),
            ResolvedType::Text => values
                .iter()
                .map(|opt| Some(opt.unwrap_or(UNKNOWN_TEXT)))
                .collect::<StringChunked>()
                .into_series(),
        };
        df.with_column(series.with_name(name.as_str().into()))?;
    }
    Ok(df)
}
