use common::model::import::{CommitResponse, PreviewResponse};

/// Messages for the import workflow widget. Row-scoped messages carry the
/// row id; request outcomes arrive as `Result`s with transport failures
/// already stringified.
pub enum Msg {
    OpenFileDialog,
    FilesSelected(Vec<web_sys::File>),
    OverrideChanged(String, String),
    RowChecked(String, bool),
    CheckAll(bool),
    PreviewRow(String),
    CommitRow(String),
    PreviewChecked,
    CommitChecked,
    PreviewFinished(String, Result<PreviewResponse, String>),
    CommitFinished(String, Result<CommitResponse, String>),
}
