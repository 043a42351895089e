//! Field mappings: column labels bound to paths inside a JSON item

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// How a mapped value is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Printed as-is
    Plain,
    /// RFC 3339 timestamp, normalized to UTC
    Timestamp,
}

/// A column label and the `.a.b` path its value is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub label: &'static str,
    pub path: &'static str,
    pub kind: FieldKind,
}

impl FieldMapping {
    pub const fn plain(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            kind: FieldKind::Plain,
        }
    }

    pub const fn timestamp(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            kind: FieldKind::Timestamp,
        }
    }

    /// Display string of this field for one item; missing values are empty
    pub fn render(&self, item: &Value) -> String {
        match resolve_path(item, self.path) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) if self.kind == FieldKind::Timestamp => format_timestamp(s),
            Some(value) => format_value(value),
        }
    }
}

/// Look up a dotted path such as `.data.name`
pub fn resolve_path<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(item, |current, segment| current.get(segment))
}

/// Render a JSON value for table cells: strings unquoted, arrays as `[a, b]`
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(_) => value.to_string(),
    }
}

fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        Err(_) => raw.to_string(),
    }
}
