//! Row state for the import workflow widget.
//!
//! Each selected file becomes one [`Row`]; rows are independent of each
//! other and their lifecycle is the explicit [`RowStatus`] machine below.
//! The browser file handles are kept out of `Row` on purpose: they live in
//! a row-id-keyed map on the component, so all of the lifecycle logic here
//! stays free of `web-sys` types and runs under plain host tests.

use common::model::import::{join_issues, CommitResponse, PreviewResponse, SnapshotSection};
use std::collections::HashMap;
use std::fmt;
use yew::NodeRef;

/// Lifecycle of one file row.
///
/// Preview: `New -> Previewing -> {Previewed | PreviewFailed}`.
/// Commit, from a previewed row: `Committing -> {Committed | CommitFailed}`.
/// Every transition is user-triggered; there is no automatic retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStatus {
    New,
    Previewing,
    Previewed,
    PreviewFailed,
    Committed,
    Committing,
    CommitFailed,
}

impl RowStatus {
    /// Transition table. In-flight states are reachable only from idle
    /// states and resolve only to their own outcome states, so a row can
    /// never carry two requests at once.
    pub fn permits(self, next: RowStatus) -> bool {
        use RowStatus::*;
        match next {
            Previewing => matches!(self, New | Previewed | PreviewFailed | Committed | CommitFailed),
            Previewed | PreviewFailed => self == Previewing,
            Committing => matches!(self, Previewed | Committed | CommitFailed),
            Committed | CommitFailed => self == Committing,
            New => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RowStatus::New => "New",
            RowStatus::Previewing => "Previewing\u{2026}",
            RowStatus::Previewed => "Previewed",
            RowStatus::PreviewFailed => "Preview failed",
            RowStatus::Committing => "Committing\u{2026}",
            RowStatus::Committed => "Committed",
            RowStatus::CommitFailed => "Commit failed",
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One file pending import.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub id: String,
    pub file_name: String,
    /// User-entered project code overriding whatever the server detects.
    pub override_code: String,
    pub checked: bool,
    pub status: RowStatus,
    /// Set only by a successful preview; a commit needs it.
    pub job_id: String,
    pub detected_code: String,
    /// Error or issue text shown in the issues cell.
    pub issues: String,
    pub snapshot: Option<HashMap<String, SnapshotSection>>,
}

impl Row {
    pub fn new(file_name: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            file_name: file_name.to_string(),
            override_code: String::new(),
            checked: false,
            status: RowStatus::New,
            job_id: String::new(),
            detected_code: String::new(),
            issues: String::new(),
            snapshot: None,
        }
    }

    /// Trimmed override code, or `None` when blank.
    pub fn override_trimmed(&self) -> Option<String> {
        let code = self.override_code.trim();
        (!code.is_empty()).then(|| code.to_string())
    }

    /// Whether a commit may be attempted: the row needs a job identifier
    /// from a successful preview and must not have a request in flight.
    pub fn can_commit(&self) -> bool {
        !self.job_id.is_empty() && self.status.permits(RowStatus::Committing)
    }

    /// Moves into `Previewing` if the transition table allows it.
    pub fn begin_preview(&mut self) -> bool {
        if self.status.permits(RowStatus::Previewing) {
            self.status = RowStatus::Previewing;
            true
        } else {
            false
        }
    }

    /// Moves into `Committing` if the transition table allows it.
    pub fn begin_commit(&mut self) -> bool {
        if self.status.permits(RowStatus::Committing) {
            self.status = RowStatus::Committing;
            true
        } else {
            false
        }
    }

    /// Applies a preview outcome. The snapshot is replaced wholesale, but
    /// existing issue text is left alone on success: the snapshot block
    /// only supplements it.
    pub fn finish_preview(&mut self, outcome: Result<PreviewResponse, String>) {
        if self.status != RowStatus::Previewing {
            return;
        }
        match outcome {
            Ok(resp) if resp.ok => {
                self.job_id = resp.job_id.unwrap_or_default();
                self.detected_code = resp
                    .detected_code
                    .filter(|code| !code.is_empty())
                    .or_else(|| self.override_trimmed())
                    .unwrap_or_default();
                self.snapshot = resp.snapshot;
                self.status = RowStatus::Previewed;
            }
            Ok(resp) => {
                self.fail_preview(resp.failure_message());
            }
            Err(err) => {
                self.fail_preview(err);
            }
        }
    }

    /// A failed preview shows only its error text; any snapshot from an
    /// earlier successful preview is dropped with it.
    fn fail_preview(&mut self, message: String) {
        self.status = RowStatus::PreviewFailed;
        self.issues = message;
        self.snapshot = None;
    }

    /// Applies a commit outcome. A clean commit clears the issues cell;
    /// one with warnings shows the joined issue list.
    pub fn finish_commit(&mut self, outcome: Result<CommitResponse, String>) {
        if self.status != RowStatus::Committing {
            return;
        }
        match outcome {
            Ok(resp) if resp.ok => {
                self.status = RowStatus::Committed;
                self.issues = resp.issues.as_deref().map(join_issues).unwrap_or_default();
            }
            Ok(resp) => {
                self.status = RowStatus::CommitFailed;
                self.issues = resp.failure_message();
            }
            Err(err) => {
                self.status = RowStatus::CommitFailed;
                self.issues = err;
            }
        }
    }
}

/// Widget state: rows in display order plus the file handles bound to them.
pub struct ImportComponent {
    pub rows: Vec<Row>,
    /// Row id -> selected file. The entry exclusively owns the handle and
    /// dies with the row.
    pub files: HashMap<String, web_sys::File>,
    pub check_all: bool,
    /// User-visible activity lines, newest last.
    pub log: Vec<String>,
    pub file_input_ref: NodeRef,
}

impl ImportComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            files: HashMap::new(),
            check_all: false,
            log: Vec::new(),
            file_input_ref: NodeRef::default(),
        }
    }

    /// Appends one row for a newly selected file and returns its id.
    pub fn add_row(&mut self, file_name: &str) -> String {
        let row = Row::new(file_name);
        let id = row.id.clone();
        self.rows.push(row);
        id
    }

    pub fn row_mut(&mut self, id: &str) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Checked rows in display order.
    pub fn checked_ids(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| row.checked)
            .map(|row| row.id.clone())
            .collect()
    }

    pub fn push_log(&mut self, line: String) {
        self.log.push(line);
    }
}
