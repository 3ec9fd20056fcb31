use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use canvas_cli::report::{ErrorReport, MessageKind, VisibilityRow};
use canvas_debugger::MessageCount;

pub fn print_error_report(report: &ErrorReport) {
    println!("Debugger tab: {}", report.current_tab);
    if report.hide_errors {
        println!("Errors are hidden in the debugger ({} suppressed)", report.total);
    }
    print_counts(&report.count);
    if report.errors.is_empty() {
        println!("No errors to show ({} hidden by widget visibility)", report.hidden());
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Kind"),
        header_cell("Source"),
        header_cell("Property"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for row in &report.errors {
        table.add_row(vec![
            Cell::new(&row.key),
            kind_cell(row.kind),
            optional_cell(row.source.as_deref()),
            optional_cell(row.property_path.as_deref()),
            Cell::new(row.message.as_deref().unwrap_or_default()),
        ]);
    }
    println!("{table}");
    if report.hidden() > 0 {
        println!("{} error(s) hidden by widget visibility", report.hidden());
    }
}

pub fn print_counts(count: &MessageCount) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Errors"), header_cell("Warnings")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        count_cell(count.errors, Color::Red),
        count_cell(count.warnings, Color::Yellow),
    ]);
    println!("{table}");
}

pub fn print_visibility(rows: &[VisibilityRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Widget"),
        header_cell("Type"),
        header_cell("Own"),
        header_cell("Effective"),
        header_cell("Ancestors"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for row in rows {
        let ancestors = if row.ancestors.is_empty() {
            dim_cell("(root)")
        } else {
            Cell::new(row.ancestors.join(" < "))
        };
        table.add_row(vec![
            Cell::new(&row.widget).add_attribute(Attribute::Bold),
            Cell::new(&row.widget_type),
            flag_cell(row.is_visible),
            flag_cell(row.effective),
            ancestors,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn kind_cell(kind: MessageKind) -> Cell {
    let color = match kind {
        MessageKind::Error => Color::Red,
        MessageKind::Warning => Color::Yellow,
    };
    Cell::new(kind.label()).fg(color)
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell("✗")
    }
}
