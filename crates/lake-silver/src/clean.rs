//! Uniform text normalization across all columns.

use polars::prelude::{DataFrame, DataType, Expr, IntoLazy, Null, col, lit};

use crate::error::Result;

/// Strips control characters, trims, and lower-cases every column.
///
/// All columns are treated uniformly, including ones that are not
/// semantically text: they are cast to strings first, and later stages
/// re-derive typed columns from the normalized text. Running this before
/// date parsing and imputation is what makes that uniformity safe.
pub fn normalize_text(df: DataFrame) -> Result<DataFrame> {
    let exprs: Vec<Expr> = df
        .get_column_names()
        .iter()
        .map(|name| {
            col(name.as_str())
                .cast(DataType::String)
                .str()
                .replace_all(lit(r"[\r\n\t]"), lit(""), false)
                .str()
                .strip_chars(lit(Null {}))
                .str()
                .to_lowercase()
                .alias(name.as_str())
        })
        .collect();
    Ok(df.lazy().with_columns(exprs).collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn str_at(df: &DataFrame, column: &str, idx: usize) -> Option<String> {
        df.column(column)
            .unwrap()
            .str()
            .unwrap()
            .get(idx)
            .map(str::to_string)
    }

    #[test]
    fn control_characters_are_stripped() {
        let frame = df!("nombre" => ["A\tna\r\n"]).unwrap();
        let cleaned = normalize_text(frame).unwrap();
        assert_eq!(str_at(&cleaned, "nombre", 0).as_deref(), Some("ana"));
    }

    #[test]
    fn values_are_trimmed_and_lowercased() {
        let frame = df!("origen" => ["  Online  ", "TIENDA"]).unwrap();
        let cleaned = normalize_text(frame).unwrap();
        assert_eq!(str_at(&cleaned, "origen", 0).as_deref(), Some("online"));
        assert_eq!(str_at(&cleaned, "origen", 1).as_deref(), Some("tienda"));
    }

    #[test]
    fn numeric_columns_become_normalized_text() {
        let frame = df!("tiempo" => [15i64, 30]).unwrap();
        let cleaned = normalize_text(frame).unwrap();
        assert_eq!(
            cleaned.column("tiempo").unwrap().dtype(),
            &DataType::String
        );
        assert_eq!(str_at(&cleaned, "tiempo", 0).as_deref(), Some("15"));
    }

    #[test]
    fn nulls_survive_normalization() {
        let frame = df!("nombre" => [Some("Ana"), None]).unwrap();
        let cleaned = normalize_text(frame).unwrap();
        assert_eq!(str_at(&cleaned, "nombre", 1), None);
    }
}
