//! Terminal rendering of dashboard, tracker, and unit tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use labops_model::{ANNEX_UNITS, INPATIENT_UNITS, MetricKind, OUTPATIENT_UNITS};
use labops_report::{RecordStatus, TrendDirection};

use labops_cli::types::{DashboardResult, StatusReport};

pub fn print_dashboard(result: &DashboardResult) {
    println!("Period:   {}", result.periods.current);
    println!("Previous: {}", result.periods.previous);
    println!(
        "Records:  {} of {} fetched",
        result.filtered_count, result.fetched_count
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Current"),
        header_cell("Previous"),
        header_cell("Change"),
        header_cell("Trend"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for metric in &result.kpis.metrics {
        table.add_row(vec![
            Cell::new(metric.metric.label()).add_attribute(Attribute::Bold),
            Cell::new(metric_value(metric.metric, metric.current)),
            dim_cell(metric_value(metric.metric, metric.previous)),
            change_cell(metric.trend.percentage, metric.trend.direction),
            trend_cell(metric.trend.direction),
        ]);
    }
    println!("{table}");

    if !result.daily_counts.is_empty() {
        print_counts("Tests per day", "Day", result.daily_counts.iter());
    }
    if !result.hourly_counts.is_empty() {
        let rows: Vec<(String, &u64)> = result
            .hourly_counts
            .iter()
            .map(|(hour, count)| (format!("{hour:02}:00"), count))
            .collect();
        print_counts("Tests per hour", "Hour", rows.iter().map(|(k, v)| (k, *v)));
    }
    if !result.unit_counts.is_empty() {
        print_unit_table(result);
    }
    if !result.test_counts.is_empty() {
        print_top_tests(result);
    }
}

pub fn print_status(report: &StatusReport) {
    let mut totals = Table::new();
    totals.set_header(vec![header_cell("Status"), header_cell("Records")]);
    apply_table_style(&mut totals);
    align_column(&mut totals, 1, CellAlignment::Right);
    for (class, count) in &report.class_counts {
        totals.add_row(vec![Cell::new(class), Cell::new(count)]);
    }
    println!("{totals}");

    if report.rows.is_empty() {
        println!("No records in the selected period.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Lab No"),
        header_cell("Test"),
        header_cell("Unit"),
        header_cell("Expected"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.lab_number),
            Cell::new(&row.test_name),
            Cell::new(&row.hospital_unit),
            dim_cell(&row.expected),
            status_cell(row.status),
        ]);
    }
    println!("{table}");
}

pub fn print_units() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Grouping"), header_cell("Unit")]);
    apply_table_style(&mut table);
    let groups: [(&str, &[&str]); 3] = [
        ("Main Lab (inpatient)", INPATIENT_UNITS),
        ("Main Lab (outpatient)", OUTPATIENT_UNITS),
        ("Annex", ANNEX_UNITS),
    ];
    for (grouping, units) in groups {
        for unit in units {
            table.add_row(vec![dim_cell(grouping), Cell::new(*unit)]);
        }
    }
    println!("{table}");
}

fn print_counts<'a, K: std::fmt::Display + 'a>(
    title: &str,
    key_header: &str,
    rows: impl Iterator<Item = (K, &'a u64)>,
) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(key_header), header_cell("Tests")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (key, count) in rows {
        table.add_row(vec![Cell::new(key), Cell::new(count)]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_unit_table(result: &DashboardResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Unit"),
        header_cell("Tests"),
        header_cell("Revenue"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (unit, count) in &result.unit_counts {
        let revenue = result.unit_revenue.get(unit).copied().unwrap_or(0.0);
        table.add_row(vec![
            Cell::new(unit),
            Cell::new(count),
            Cell::new(format!("{revenue:.2}")),
        ]);
    }
    println!();
    println!("By unit:");
    println!("{table}");
}

fn print_top_tests(result: &DashboardResult) {
    let mut ordered: Vec<(&String, &u64)> = result.test_counts.iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let mut table = Table::new();
    table.set_header(vec![header_cell("Test"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (test, count) in ordered.into_iter().take(10) {
        table.add_row(vec![Cell::new(test), Cell::new(count)]);
    }
    println!();
    println!("Top tests:");
    println!("{table}");
}

fn metric_value(metric: MetricKind, value: f64) -> String {
    match metric {
        MetricKind::Revenue => format!("{value:.2}"),
        _ => format!("{}", value as u64),
    }
}

fn change_cell(percentage: f64, direction: TrendDirection) -> Cell {
    if percentage == 0.0 {
        return dim_cell("0.0%");
    }
    Cell::new(format!("{percentage:+.1}%")).fg(direction_color(direction))
}

fn trend_cell(direction: TrendDirection) -> Cell {
    match direction {
        TrendDirection::Neutral => dim_cell(direction.arrow()),
        _ => Cell::new(direction.arrow())
            .fg(direction_color(direction))
            .add_attribute(Attribute::Bold),
    }
}

fn status_cell(status: RecordStatus) -> Cell {
    match status {
        RecordStatus::Completed => Cell::new(status.to_string()).fg(Color::Green),
        RecordStatus::Delayed => Cell::new(status.to_string())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        RecordStatus::DueNow | RecordStatus::Urgent { .. } => {
            Cell::new(status.to_string()).fg(Color::Yellow)
        }
        RecordStatus::Remaining { .. } => Cell::new(status.to_string()),
        RecordStatus::NoEta => dim_cell(status.to_string()),
    }
}

fn direction_color(direction: TrendDirection) -> Color {
    match direction {
        TrendDirection::Positive => Color::Green,
        TrendDirection::Negative => Color::Red,
        TrendDirection::Neutral => Color::DarkGrey,
    }
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
