//! Sentinel values and fixed schema contracts shared by the bronze and
//! silver stages.
//!
//! These are part of the data contract between stages: bronze writes
//! [`NULL_SENTINEL`] into every originally-missing cell, and the silver
//! imputer fills text nulls with [`UNKNOWN_TEXT`]. Keeping them as named
//! constants keeps the contract visible and testable instead of scattering
//! string literals across the pipeline.

/// Marker written into bronze cells that were missing or empty in the source.
pub const NULL_SENTINEL: &str = "NULL";

/// Fill value for null text cells in the silver stage.
pub const UNKNOWN_TEXT: &str = "desconocido";

/// Fill value for null numeric cells in the silver stage.
pub const NUMERIC_FILL: i64 = 0;

/// The one accepted date layout for silver date columns (`2024-01-31`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column names imposed on fixed-layout (`.txt`) sources.
///
/// Fixed-layout sources carry no header row; this schema is a format
/// contract with the upstream provider, not an inference. The names line up
/// with the join keys used downstream.
pub const FIXED_LAYOUT_COLUMNS: [&str; 4] =
    ["codigo", "origen_compra", "id_usuario", "fecha_registro"];

/// Suffix appended to a source's base name to form its bronze file name.
pub const BRONZE_SUFFIX: &str = "_bronze.csv";

/// Synthesized column-name prefix when a recovered table has no declared
/// columns (`col_1`, `col_2`, ...).
pub const SYNTHETIC_COLUMN_PREFIX: &str = "col_";
