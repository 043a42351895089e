//! Solution output formatter

use comfy_table::{presets::NOTHING, Table};
use serde_json::Value;

use super::common::{escape_csv, print_json, print_yaml};
use super::fields::FieldMapping;
use crate::cli::OutputFormat;

/// Columns of the list view
pub const TABLE_FIELDS: &[FieldMapping] = &[
    FieldMapping::plain("name", ".data.name"),
    FieldMapping::plain("isSystem", ".data.isSystem"),
    FieldMapping::plain("isSubscribed", ".data.isSubscribed"),
    FieldMapping::plain("dependencies", ".data.dependencies"),
];

/// Fields of the detail view
pub const DETAIL_FIELDS: &[FieldMapping] = &[
    FieldMapping::plain("name", ".data.name"),
    FieldMapping::plain("isSystem", ".data.isSystem"),
    FieldMapping::plain("isSubscribed", ".data.isSubscribed"),
    FieldMapping::plain("dependencies", ".data.dependencies"),
    FieldMapping::timestamp("installDate", ".createdAt"),
    FieldMapping::timestamp("updateDate", ".updatedAt"),
];

/// Output a solution collection in the specified format
pub fn output_solutions(items: &[Value], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => println!("{}", build_table(items, TABLE_FIELDS, no_header)),
        OutputFormat::Detail => print!("{}", render_detail(items, DETAIL_FIELDS)),
        OutputFormat::Csv => print!("{}", render_csv(items, TABLE_FIELDS, no_header)),
        OutputFormat::Json => print_json(items),
        OutputFormat::Yaml => print_yaml(items),
    }
}

/// Rendered cell values, one row per item
fn rows(items: &[Value], fields: &[FieldMapping]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|item| fields.iter().map(|f| f.render(item)).collect())
        .collect()
}

fn build_table(items: &[Value], fields: &[FieldMapping], no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(fields.iter().map(|f| f.label.to_uppercase()));
    }
    for row in rows(items, fields) {
        table.add_row(row);
    }
    table
}

fn render_csv(items: &[Value], fields: &[FieldMapping], no_header: bool) -> String {
    let mut out = String::new();
    if !no_header {
        let header: Vec<&str> = fields.iter().map(|f| f.label).collect();
        out.push_str(&header.join(","));
        out.push('\n');
    }
    for row in rows(items, fields) {
        let escaped: Vec<String> = row.iter().map(|v| escape_csv(v)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

/// One `label: value` block per item, separated by blank lines
fn render_detail(items: &[Value], fields: &[FieldMapping]) -> String {
    let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0) + 1;
    let blocks: Vec<String> = items
        .iter()
        .map(|item| {
            fields
                .iter()
                .map(|f| format!("{:<width$} {}\n", format!("{}:", f.label), f.render(item)))
                .collect::<String>()
        })
        .collect();
    blocks.join("\n")
}
