//! Small helpers shared by the import widget's update and view code.

use common::model::import::SnapshotSection;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Example rows shown per snapshot section.
pub const SNAPSHOT_ROW_LIMIT: usize = 5;

/// Blocking notice for precondition errors (missing file, commit before
/// preview, bulk action with nothing checked).
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Section keys ordered by numeric value, so "10" sorts after "2".
/// Non-numeric keys sort after numeric ones, lexicographically.
pub fn ordered_section_keys(snapshot: &HashMap<String, SnapshotSection>) -> Vec<String> {
    let mut keys: Vec<String> = snapshot.keys().cloned().collect();
    keys.sort_by(|a, b| match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    keys
}

/// Display text for one snapshot cell; absent and null values are blank.
pub fn cell_text(row: &serde_json::Map<String, Value>, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_keys(keys: &[&str]) -> HashMap<String, SnapshotSection> {
        keys.iter()
            .map(|k| (k.to_string(), SnapshotSection::default()))
            .collect()
    }

    #[test]
    fn section_keys_sort_numerically() {
        let snapshot = snapshot_with_keys(&["10", "2", "1"]);
        assert_eq!(ordered_section_keys(&snapshot), vec!["1", "2", "10"]);
    }

    #[test]
    fn non_numeric_keys_sort_last() {
        let snapshot = snapshot_with_keys(&["extra", "3", "1"]);
        assert_eq!(ordered_section_keys(&snapshot), vec!["1", "3", "extra"]);
    }

    #[test]
    fn cell_text_handles_missing_and_typed_values() {
        let row: serde_json::Map<String, Value> =
            serde_json::from_str(r#"{"x": 1, "name": "widget", "none": null}"#).unwrap();
        assert_eq!(cell_text(&row, "x"), "1");
        assert_eq!(cell_text(&row, "name"), "widget");
        assert_eq!(cell_text(&row, "none"), "");
        assert_eq!(cell_text(&row, "absent"), "");
    }
}
