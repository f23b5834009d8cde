use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pulsar_cli::script::Transcript;
use pulsar_editor::Effect;
use pulsar_editor::options::SelectOption;
use pulsar_model::{PulsarQuery, QueryField};

use crate::commands::{OptionsReport, ReconcileReport};

pub fn print_transcript(transcript: &Transcript) {
    let mut table = Table::new();
    let mut header = vec![header_cell("#"), header_cell("Event")];
    header.extend(query_header());
    header.push(header_cell("Effect"));
    table.set_header(header);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for step in &transcript.steps {
        let mut row = vec![Cell::new(step.index), Cell::new(&step.event)];
        row.extend(query_cells(&step.query));
        row.push(effect_cell(step.effect));
        table.add_row(row);
    }
    println!("{table}");
    println!(
        "Executions: {} query run(s), {} catalog fetch(es)",
        transcript.query_runs(),
        transcript.catalog_fetches()
    );
}

pub fn print_options(report: &OptionsReport) {
    let sections: [(&str, &[SelectOption]); 5] = [
        ("App", &report.apps),
        ("Job", &report.jobs),
        ("Metric", &report.metrics),
        ("Aggregation", &report.aggregations),
        ("Geo", &report.geo),
    ];
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Selector"),
        header_cell("Label"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    for (selector, options) in sections {
        if options.is_empty() {
            table.add_row(vec![
                Cell::new(selector).add_attribute(Attribute::Bold),
                dim_cell("(none)"),
                dim_cell("-"),
            ]);
            continue;
        }
        for (i, option) in options.iter().enumerate() {
            let selector_cell = if i == 0 {
                Cell::new(selector).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                selector_cell,
                Cell::new(&option.label),
                Cell::new(&option.value),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_reconcile(report: &ReconcileReport) {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(query_header());
    table.set_header(header);
    apply_table_style(&mut table);
    let mut before = vec![Cell::new("before").add_attribute(Attribute::Bold)];
    before.extend(query_cells(&report.before));
    let mut after = vec![Cell::new("after").add_attribute(Attribute::Bold)];
    after.extend(query_cells(&report.after));
    table.add_row(before);
    table.add_row(after);
    println!("{table}");
    println!("Effect: {}", report.effect);
}

/// Column headers matching [`query_cells`].
fn query_header() -> Vec<Cell> {
    let mut cells: Vec<Cell> = QueryField::ALL
        .iter()
        .map(|field| header_cell(field.label()))
        .collect();
    cells.push(header_cell("Mode"));
    cells
}

fn query_cells(query: &PulsarQuery) -> Vec<Cell> {
    vec![
        value_cell(query.appid.as_deref()),
        value_cell(query.jobid.as_deref()),
        value_cell(query.metric_type.map(|m| m.as_str())),
        value_cell(query.agg.map(|a| a.as_str())),
        value_cell(query.geo.as_deref()),
        value_cell(query.asn.as_deref()),
        Cell::new(query.mode.as_str()),
    ]
}

fn value_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn effect_cell(effect: Effect) -> Cell {
    match effect {
        Effect::None => dim_cell("-"),
        Effect::FetchCatalog => Cell::new(effect.as_str()).fg(Color::Yellow),
        Effect::RunQuery => Cell::new(effect.as_str())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
