//! Output formatting module
//!
//! Renders platform collections as table, detail, CSV, JSON or YAML.
//! Tabular views are driven by field mappings; structured formats print the
//! raw items unchanged.

mod common;
mod fields;
mod solutions;

pub use common::{escape_csv, print_json, print_yaml};
pub use fields::{format_value, resolve_path, FieldKind, FieldMapping};
pub use solutions::{output_solutions, DETAIL_FIELDS, TABLE_FIELDS};
