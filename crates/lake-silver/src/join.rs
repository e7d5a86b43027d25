//! Key-reconciled inner join of bronze tables.

use polars::prelude::{DataFrame, IntoLazy, JoinArgs, JoinType, MaintainOrderJoin, col};
use tracing::info;

use crate::error::{Result, SilverError};

/// Renames the secondary table's key column to match the primary's, then
/// inner-joins on that key.
///
/// Rows with no counterpart on either side are silently dropped. That is a
/// deliberate policy, unmatched rows are considered incomplete for silver
/// analytics, and data-quality consumers should account for it. Keys must
/// match exactly after the rename; no case or whitespace folding is applied.
/// Surviving rows keep the primary table's order, so repeated runs over the
/// same bronze inputs produce identical silver output.
pub fn join_on_key(
    primary: DataFrame,
    mut secondary: DataFrame,
    join_key: &str,
    secondary_key: &str,
) -> Result<DataFrame> {
    if primary.column(join_key).is_err() {
        return Err(SilverError::JoinKeyMissing {
            column: join_key.to_string(),
            table: "primary".to_string(),
        });
    }
    if secondary.column(secondary_key).is_ok() && secondary_key != join_key {
        secondary.rename(secondary_key, join_key.into())?;
    }
    if secondary.column(join_key).is_err() {
        return Err(SilverError::JoinKeyMissing {
            column: secondary_key.to_string(),
            table: "secondary".to_string(),
        });
    }

    let before = (primary.height(), secondary.height());
    let mut args = JoinArgs::new(JoinType::Inner);
    args.maintain_order = MaintainOrderJoin::Left;
    let joined = primary
        .lazy()
        .join(secondary.lazy(), [col(join_key)], [col(join_key)], args)
        .collect()?;
    info!(
        key = join_key,
        primary_rows = before.0,
        secondary_rows = before.1,
        joined_rows = joined.height(),
        "inner join complete"
    );
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn unmatched_rows_are_dropped_on_both_sides() {
        let primary = df!(
            "codigo" => [1i64],
            "nombre" => ["ana"],
        )
        .unwrap();
        let secondary = df!(
            "codigo_cliente" => [1i64, 2],
            "tiempo" => [15i64, 30],
        )
        .unwrap();

        let joined = join_on_key(primary, secondary, "codigo", "codigo_cliente").unwrap();
        assert_eq!(joined.height(), 1);
        let codigo = joined.column("codigo").unwrap().i64().unwrap();
        assert_eq!(codigo.get(0), Some(1));
        let tiempo = joined.column("tiempo").unwrap().i64().unwrap();
        assert_eq!(tiempo.get(0), Some(15));
    }

    #[test]
    fn schema_is_union_minus_duplicated_key() {
        let primary = df!("codigo" => [1i64], "nombre" => ["ana"]).unwrap();
        let secondary = df!("codigo_cliente" => [1i64], "tiempo" => [15i64]).unwrap();
        let joined = join_on_key(primary, secondary, "codigo", "codigo_cliente").unwrap();
        let names: Vec<&str> = joined.get_column_names_str();
        assert_eq!(names, vec!["codigo", "nombre", "tiempo"]);
    }

    #[test]
    fn joined_rows_keep_primary_order() {
        let primary = df!(
            "codigo" => [3i64, 1, 2],
            "nombre" => ["marta", "ana", "luis"],
        )
        .unwrap();
        let secondary = df!(
            "codigo_cliente" => [1i64, 2, 3],
            "tiempo" => [15i64, 30, 45],
        )
        .unwrap();

        let joined = join_on_key(primary, secondary, "codigo", "codigo_cliente").unwrap();
        let codigo: Vec<Option<i64>> = joined
            .column("codigo")
            .unwrap()
            .i64()
            .unwrap()
            .iter()
            .collect();
        assert_eq!(codigo, vec![Some(3), Some(1), Some(2)]);
        let tiempo: Vec<Option<i64>> = joined
            .column("tiempo")
            .unwrap()
            .i64()
            .unwrap()
            .iter()
            .collect();
        assert_eq!(tiempo, vec![Some(45), Some(15), Some(30)]);
    }

    #[test]
    fn missing_primary_key_errors() {
        let primary = df!("id" => [1i64]).unwrap();
        let secondary = df!("codigo_cliente" => [1i64]).unwrap();
        let error = join_on_key(primary, secondary, "codigo", "codigo_cliente").unwrap_err();
        assert!(matches!(error, SilverError::JoinKeyMissing { .. }));
    }

    #[test]
    fn missing_secondary_key_errors() {
        let primary = df!("codigo" => [1i64]).unwrap();
        let secondary = df!("otra" => [1i64]).unwrap();
        let error = join_on_key(primary, secondary, "codigo", "codigo_cliente").unwrap_err();
        assert!(matches!(
            error,
            SilverError::JoinKeyMissing { table, .. } if table == "secondary"
        ));
    }
}
