use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use etl_model::{ArtifactKind, TableReport, TableStatus};
use etl_output::LoadReport;

pub fn print_summary(reports: &[TableReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Description"),
        header_cell("Status"),
        header_cell("Input"),
        header_cell("Rows"),
        header_cell("Cols"),
        header_cell("Nulls %"),
        header_cell("Dupes"),
        header_cell("Artifacts"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 3..=8 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_rows = 0usize;
    for report in reports {
        let profile = report.profile.as_ref();
        total_rows += profile.map_or(0, |p| p.rows);
        table.add_row(vec![
            Cell::new(report.table.name()).add_attribute(Attribute::Bold),
            Cell::new(report.table.description()),
            status_cell(report.status),
            optional_cell(report.input_rows),
            optional_cell(profile.map(|p| p.rows)),
            optional_cell(profile.map(|p| p.cols)),
            profile.map_or_else(|| dim_cell("-"), |p| Cell::new(format!("{:.2}", p.null_ratio_percent()))),
            optional_cell(profile.map(|p| p.duplicates)),
            artifacts_cell(report),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} tables", reports.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    let problems: Vec<&TableReport> = reports
        .iter()
        .filter(|report| report.error.is_some() || report.status == TableStatus::Degraded)
        .collect();
    if !problems.is_empty() {
        eprintln!("Issues:");
        for report in problems {
            if let Some(error) = &report.error {
                eprintln!("- {}: {error}", report.table);
            }
            for attempt in report.attempts.iter().filter(|attempt| !attempt.is_ok()) {
                let reason = attempt.error.as_deref().unwrap_or_default();
                eprintln!("- {} ({}): {reason}", report.table, attempt.artifact);
            }
        }
    }
}

pub fn print_load_summary(report: &LoadReport) {
    println!(
        "Load: {} file(s) copied, {} failed",
        report.copied.len(),
        report.failures.len()
    );
    for (path, error) in &report.failures {
        eprintln!("- {}: {error}", path.display());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: TableStatus) -> Cell {
    let color = match status {
        TableStatus::Full => Color::Green,
        TableStatus::Degraded => Color::Yellow,
        TableStatus::Skipped => Color::DarkGrey,
        TableStatus::Failed => Color::Red,
    };
    Cell::new(status.label()).fg(color)
}

fn artifacts_cell(report: &TableReport) -> Cell {
    if report.attempts.is_empty() {
        return dim_cell("-");
    }
    let written = report.attempts.iter().filter(|a| a.is_ok()).count();
    let cell = Cell::new(format!("{written}/{}", ArtifactKind::CHAIN.len()));
    if written == ArtifactKind::CHAIN.len() {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Yellow)
    }
}

fn optional_cell(value: Option<usize>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
