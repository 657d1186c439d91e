//! Wire contract of the external import service.
//!
//! The preview/commit endpoints live outside this repository; these types
//! only describe the JSON they accept and return. Both endpoints take a
//! multipart body (`file` + optional `code` for preview, `job_id` +
//! optional `code` for commit) and answer with the shapes below. Every
//! field except `ok` is optional on the wire, so all of them default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Result of submitting a file to the preview endpoint.
///
/// A successful preview (`ok: true`) carries the job identifier the commit
/// endpoint later expects, the project code detected inside the file, and
/// a per-section snapshot of the parsed content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PreviewResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<HashMap<String, SnapshotSection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
}

/// One parsed section of the uploaded workbook, keyed in the snapshot map
/// by its ordinal section number as a string.
///
/// `rows` holds at most a handful of example rows; `row_count` is the
/// total detected server-side and may exceed the examples carried here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSection {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,
}

impl SnapshotSection {
    /// Total rows detected for the section, falling back to the number of
    /// example rows when the server omits the count.
    pub fn total_rows(&self) -> u64 {
        self.row_count.unwrap_or(self.rows.len() as u64)
    }
}

/// Result of committing a previously previewed job.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CommitResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PreviewResponse {
    /// Human-readable reason for a failed preview: the server error, else
    /// the joined issue list, else a generic fallback.
    pub fn failure_message(&self) -> String {
        failure_message(self.error.as_deref(), self.issues.as_deref())
    }
}

impl CommitResponse {
    /// Human-readable reason for a failed commit, same precedence as
    /// [`PreviewResponse::failure_message`].
    pub fn failure_message(&self) -> String {
        failure_message(self.error.as_deref(), self.issues.as_deref())
    }
}

/// Issue lists are displayed as one line, semicolon separated.
pub fn join_issues(issues: &[String]) -> String {
    issues.join("; ")
}

fn failure_message(error: Option<&str>, issues: Option<&[String]>) -> String {
    if let Some(error) = error.filter(|e| !e.is_empty()) {
        return error.to_string();
    }
    match issues {
        Some(list) if !list.is_empty() => join_issues(list),
        _ => "Unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_response_decodes_full_payload() {
        let json = r#"{
            "ok": true,
            "job_id": "J1",
            "detected_code": "291RT",
            "snapshot": {
                "1": { "columns": ["x"], "rows": [{"x": 1}], "row_count": 1 }
            }
        }"#;
        let resp: PreviewResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ok);
        assert_eq!(resp.job_id.as_deref(), Some("J1"));
        assert_eq!(resp.detected_code.as_deref(), Some("291RT"));
        let snapshot = resp.snapshot.unwrap();
        let section = &snapshot["1"];
        assert_eq!(section.columns, vec!["x"]);
        assert_eq!(section.rows.len(), 1);
        assert_eq!(section.total_rows(), 1);
    }

    #[test]
    fn preview_response_defaults_missing_fields() {
        let resp: PreviewResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.ok);
        assert!(resp.job_id.is_none());
        assert!(resp.snapshot.is_none());
    }

    #[test]
    fn section_row_count_may_exceed_example_rows() {
        let json = r#"{ "columns": ["a"], "rows": [{"a": "v"}], "row_count": 40 }"#;
        let section: SnapshotSection = serde_json::from_str(json).unwrap();
        assert_eq!(section.rows.len(), 1);
        assert_eq!(section.total_rows(), 40);
    }

    #[test]
    fn section_total_rows_falls_back_to_examples() {
        let section = SnapshotSection {
            columns: vec!["a".into()],
            rows: vec![Map::new(), Map::new()],
            row_count: None,
        };
        assert_eq!(section.total_rows(), 2);
    }

    #[test]
    fn failure_message_prefers_server_error() {
        let resp: PreviewResponse =
            serde_json::from_str(r#"{ "ok": false, "error": "bad format", "issues": ["x"] }"#)
                .unwrap();
        assert_eq!(resp.failure_message(), "bad format");
    }

    #[test]
    fn failure_message_joins_issues_when_error_absent() {
        let resp = CommitResponse {
            ok: false,
            issues: Some(vec!["first".into(), "second".into()]),
            error: None,
        };
        assert_eq!(resp.failure_message(), "first; second");
    }

    #[test]
    fn failure_message_falls_back_when_nothing_provided() {
        let resp = CommitResponse::default();
        assert_eq!(resp.failure_message(), "Unknown error");
        let empty_error = PreviewResponse {
            error: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty_error.failure_message(), "Unknown error");
    }
}
