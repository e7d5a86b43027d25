//! Structured SQL recovery through an ephemeral in-memory engine.

use std::path::Path;

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tracing::debug;

use lake_common::format_numeric;

use crate::error::{IngestError, Result};
use crate::table::RawTable;

fn execution_error(path: &Path, error: &rusqlite::Error) -> IngestError {
    IngestError::SqlExecution {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn cell_from_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(v) => Some(v.to_string()),
        ValueRef::Real(v) => Some(format_numeric(v)),
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Lists base tables in creation order (`sqlite_master` rowid order).
fn list_tables(conn: &Connection, path: &Path) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY rowid")
        .map_err(|e| execution_error(path, &e))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| execution_error(path, &e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| execution_error(path, &e))?;
    Ok(names)
}

fn read_table(conn: &Connection, path: &Path, name: &str) -> Result<RawTable> {
    // Table names come back from sqlite_master, but quote anyway.
    let query = format!("SELECT * FROM \"{}\"", name.replace('"', "\"\""));
    let mut stmt = conn
        .prepare(&query)
        .map_err(|e| execution_error(path, &e))?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| (*c).to_string()).collect();

    let mut table = RawTable::new(columns);
    let width = table.width();
    let mut rows = stmt.query([]).map_err(|e| execution_error(path, &e))?;
    while let Some(row) = rows.next().map_err(|e| execution_error(path, &e))? {
        let mut cells = Vec::with_capacity(width);
        for idx in 0..width {
            let value = row.get_ref(idx).map_err(|e| execution_error(path, &e))?;
            cells.push(cell_from_value(value));
        }
        table.push_row(cells);
    }
    Ok(table)
}

/// Executes a SQL script against a fresh in-memory engine and reads back the
/// first table it created.
///
/// One engine instance per call; the connection is torn down when it goes out
/// of scope on every path. Scripts that create several tables only yield the
/// first — callers needing more must enumerate the table list themselves.
pub fn extract_first_table(path: &Path, script: &str) -> Result<RawTable> {
    let conn = Connection::open_in_memory().map_err(|e| execution_error(path, &e))?;

    conn.execute_batch(script)
        .map_err(|e| execution_error(path, &e))?;

    let tables = list_tables(&conn, path)?;
    let Some(first) = tables.first() else {
        return Err(IngestError::NoTablesProduced {
            path: path.to_path_buf(),
        });
    };
    debug!(
        path = %path.display(),
        table = %first,
        total = tables.len(),
        "reading first table produced by script"
    );
    read_table(&conn, path, first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("clientes.sql")
    }

    #[test]
    fn extracts_rows_from_created_table() {
        let script = "\
            CREATE TABLE clientes (codigo INTEGER, nombre TEXT, fecha_nacimiento TEXT);\n\
            INSERT INTO clientes VALUES (1, 'Ana', '1990-01-01');\n\
            INSERT INTO clientes VALUES (2, 'Luis', NULL);\n";
        let table = extract_first_table(&path(), script).unwrap();
        assert_eq!(table.columns, vec!["codigo", "nombre", "fecha_nacimiento"]);
        assert_eq!(table.height(), 2);
        assert_eq!(table.rows[0][1].as_deref(), Some("Ana"));
        assert_eq!(table.rows[1][2], None);
    }

    #[test]
    fn only_the_first_table_is_returned() {
        let script = "\
            CREATE TABLE first (a INTEGER);\n\
            INSERT INTO first VALUES (1);\n\
            CREATE TABLE second (b INTEGER);\n\
            INSERT INTO second VALUES (2);\n";
        let table = extract_first_table(&path(), script).unwrap();
        assert_eq!(table.columns, vec!["a"]);
        assert_eq!(table.height(), 1);
        assert_eq!(table.rows[0][0].as_deref(), Some("1"));
    }

    #[test]
    fn zero_tables_is_no_tables_produced() {
        let error = extract_first_table(&path(), "SELECT 1;").unwrap_err();
        assert!(matches!(error, IngestError::NoTablesProduced { .. }));
    }

    #[test]
    fn unsupported_dialect_is_an_execution_error() {
        let script = "CREATE TABLE t (a INT) ENGINE=InnoDB DEFAULT CHARSET=utf8;";
        let error = extract_first_table(&path(), script).unwrap_err();
        assert!(matches!(error, IngestError::SqlExecution { .. }));
    }

    #[test]
    fn round_trip_preserves_shape() {
        let script = "\
            CREATE TABLE t (a INTEGER, b TEXT);\n\
            INSERT INTO t VALUES (1, 'x'), (2, 'y'), (3, 'z');\n";
        let table = extract_first_table(&path(), script).unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 3);
    }
}
