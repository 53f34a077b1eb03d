use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rewrite_model::{FileOutcome, FileStatus};

pub fn print_summary(outcomes: &[FileOutcome]) {
    println!();
    println!("{}", summary_table(outcomes));
}

/// One row per file plus a total row.
pub fn summary_table(outcomes: &[FileOutcome]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rules"),
        header_cell("Collisions"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut total_rules = 0usize;
    let mut total_collisions = 0usize;
    let mut failed = 0usize;
    for outcome in outcomes {
        let rules = outcome.rule_count();
        total_rules += rules.unwrap_or(0);
        total_collisions += outcome.collision_count();
        if !outcome.is_success() {
            failed += 1;
        }
        table.add_row(vec![
            Cell::new(outcome.path.display()),
            rules.map_or_else(|| dim_cell("-"), Cell::new),
            count_cell(outcome.collision_count(), &outcome.status),
            status_cell(&outcome.status),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rules).add_attribute(Attribute::Bold),
        Cell::new(total_collisions).add_attribute(Attribute::Bold),
        Cell::new(format!("{failed} failed")).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: &FileStatus) -> Cell {
    match status {
        FileStatus::Passed { .. } => Cell::new("OK")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        FileStatus::Collisions { .. } => Cell::new("FAILED").fg(Color::Red),
        FileStatus::Unreadable { .. } => Cell::new("UNREADABLE").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, status: &FileStatus) -> Cell {
    match status {
        FileStatus::Unreadable { .. } => dim_cell("-"),
        _ if count > 0 => Cell::new(count)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        _ => dim_cell(count),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
