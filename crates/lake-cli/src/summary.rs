//! Terminal summaries for completed runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lake_ingest::{BronzeReport, SourceStatus};
use lake_silver::SilverSummary;

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Prints one row per source plus a completion line.
///
/// The completion line is printed regardless of partial failures: bronze
/// failures are per-source, never batch-fatal.
pub fn print_bronze_summary(report: &BronzeReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Shape"),
        header_cell("Rows"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    let mut total_rows = 0usize;
    for entry in &report.sources {
        let source = entry.source.path.display().to_string();
        let shape = entry.source.shape.label();
        match &entry.status {
            SourceStatus::Written { rows, path, .. } => {
                total_rows += rows;
                table.add_row(vec![
                    Cell::new(source),
                    Cell::new(shape),
                    Cell::new(rows),
                    Cell::new(path.display()).fg(Color::Green),
                ]);
            }
            SourceStatus::Failed { error } => {
                table.add_row(vec![
                    Cell::new(source),
                    Cell::new(shape),
                    Cell::new("-"),
                    Cell::new(error).fg(Color::Red),
                ]);
            }
        }
    }
    println!("{table}");
    println!(
        "Bronze load complete: {} sources, {} rows, {} failures",
        report.sources.len(),
        total_rows,
        report.failure_count()
    );
}

pub fn print_silver_summary(summary: &SilverSummary) {
    println!(
        "Silver dataset written: {} ({} rows, {} columns)",
        summary.output.display(),
        summary.rows,
        summary.columns
    );
}
