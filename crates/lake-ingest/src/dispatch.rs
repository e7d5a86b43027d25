//! Shape-driven routing of sources to readers.

use std::fs;

use tracing::debug;

use crate::delimited::{read_delimited, read_fixed_layout};
use crate::error::{IngestError, Result};
use crate::source::{SourceDescriptor, SourceShape};
use crate::sql::recover_table;
use crate::table::RawTable;

/// Reads a source into a raw table according to its declared shape.
///
/// Delimited and unknown shapes get a best-effort delimited read; fixed
/// layout gets the hardcoded contract; SQL scripts go through the recovery
/// chain. A failure here is descriptor-level: the caller reports it and
/// moves on to the next source.
pub fn read_source(descriptor: &SourceDescriptor) -> Result<RawTable> {
    debug!(
        path = %descriptor.path.display(),
        shape = descriptor.shape.label(),
        "reading source"
    );
    match descriptor.shape {
        SourceShape::DelimitedText | SourceShape::Unknown => read_delimited(&descriptor.path),
        SourceShape::FixedLayout => read_fixed_layout(&descriptor.path),
        SourceShape::SqlScript => {
            let script =
                fs::read_to_string(&descriptor.path).map_err(|e| IngestError::FileRead {
                    path: descriptor.path.clone(),
                    source: e,
                })?;
            recover_table(&descriptor.path, &script)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, name: &str, content: &str) -> SourceDescriptor {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        SourceDescriptor::new(path)
    }

    #[test]
    fn csv_routes_to_delimited_reader() {
        let dir = TempDir::new().unwrap();
        let descriptor = write_source(&dir, "clientes_info.csv", "codigo_cliente,tiempo\n1,15\n");
        let table = read_source(&descriptor).unwrap();
        assert_eq!(table.columns, vec!["codigo_cliente", "tiempo"]);
    }

    #[test]
    fn txt_routes_to_fixed_layout() {
        let dir = TempDir::new().unwrap();
        let descriptor = write_source(&dir, "clientes_extra.txt", "1,online,u1,2023-01-01\n");
        let table = read_source(&descriptor).unwrap();
        assert_eq!(table.columns[0], "codigo");
    }

    #[test]
    fn sql_routes_to_recovery_chain() {
        let dir = TempDir::new().unwrap();
        let descriptor = write_source(
            &dir,
            "clientes.sql",
            "CREATE TABLE clientes (codigo INTEGER, nombre TEXT);\nINSERT INTO clientes VALUES (1, 'Ana');\n",
        );
        let table = read_source(&descriptor).unwrap();
        assert_eq!(table.columns, vec!["codigo", "nombre"]);
        assert_eq!(table.height(), 1);
    }

    #[test]
    fn unknown_shape_gets_best_effort_delimited() {
        let dir = TempDir::new().unwrap();
        let descriptor = write_source(&dir, "data.dat", "a,b\n1,2\n");
        let table = read_source(&descriptor).unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
    }

    #[test]
    fn missing_sql_file_is_a_file_read_error() {
        let descriptor = SourceDescriptor::new("does/not/exist.sql");
        let error = read_source(&descriptor).unwrap_err();
        assert!(matches!(error, IngestError::FileRead { .. }));
    }
}
