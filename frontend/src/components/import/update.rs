//! Update logic for the import widget, Elm style: mutate state from a
//! message, run network requests in spawned tasks, and fold their
//! outcomes back in as follow-up messages.
//!
//! Bulk actions collect their request data up front, mark every selected
//! row in flight, then issue the requests strictly one at a time; each
//! row's outcome is applied independently, so one failure never touches a
//! sibling row. Precondition errors (no file, no job id, nothing checked)
//! surface as a blocking alert and issue no network call at all.

use gloo_console::error;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData, HtmlInputElement};
use yew::prelude::*;

use common::model::import::{CommitResponse, PreviewResponse};

use super::helpers::alert;
use super::messages::Msg;
use super::state::{ImportComponent, RowStatus};

pub fn update(component: &mut ImportComponent, ctx: &Context<ImportComponent>, msg: Msg) -> bool {
    match msg {
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FilesSelected(files) => {
            for file in files {
                let id = component.add_row(&file.name());
                component.files.insert(id, file);
            }
            // Reset the input so the same file can be chosen again later.
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            true
        }
        Msg::OverrideChanged(id, value) => {
            if let Some(row) = component.row_mut(&id) {
                row.override_code = value;
            }
            false
        }
        Msg::RowChecked(id, checked) => {
            if let Some(row) = component.row_mut(&id) {
                row.checked = checked;
            }
            true
        }
        Msg::CheckAll(checked) => {
            component.check_all = checked;
            for row in &mut component.rows {
                row.checked = checked;
            }
            true
        }
        Msg::PreviewRow(id) => {
            start_previews(component, ctx, vec![id]);
            true
        }
        Msg::PreviewChecked => {
            let ids = component.checked_ids();
            if ids.is_empty() {
                alert("Select at least one row to preview.");
                return false;
            }
            start_previews(component, ctx, ids);
            true
        }
        Msg::CommitRow(id) => {
            start_commits(component, ctx, vec![id]);
            true
        }
        Msg::CommitChecked => {
            let ids = component.checked_ids();
            if ids.is_empty() {
                alert("Select at least one row to commit.");
                return false;
            }
            start_commits(component, ctx, ids);
            true
        }
        Msg::PreviewFinished(id, outcome) => {
            if let Err(err) = &outcome {
                error!(format!("preview request failed: {err}"));
            }
            if let Some(row) = component.row_mut(&id) {
                row.finish_preview(outcome);
                let line = match row.status {
                    RowStatus::Previewed => format!(
                        "Previewed {}: code={} sections={}",
                        row.file_name,
                        row.detected_code,
                        row.snapshot.as_ref().map_or(0, |s| s.len())
                    ),
                    _ => format!("Preview failed for {}: {}", row.file_name, row.issues),
                };
                component.push_log(line);
            }
            true
        }
        Msg::CommitFinished(id, outcome) => {
            if let Err(err) = &outcome {
                error!(format!("commit request failed: {err}"));
            }
            if let Some(row) = component.row_mut(&id) {
                row.finish_commit(outcome);
                let line = match row.status {
                    RowStatus::Committed => format!("Committed job {}", row.job_id),
                    _ => format!("Commit failed for {}: {}", row.file_name, row.issues),
                };
                component.push_log(line);
            }
            true
        }
    }
}

/// Marks each previewable row in flight and queues its request. Rows
/// without a bound file alert and are skipped; rows already in flight are
/// skipped silently by the transition table.
fn start_previews(component: &mut ImportComponent, ctx: &Context<ImportComponent>, ids: Vec<String>) {
    let mut jobs = Vec::new();
    for id in ids {
        let Some(file) = component.files.get(&id).cloned() else {
            alert("Missing file for this row.");
            continue;
        };
        let Some(row) = component.row_mut(&id) else {
            continue;
        };
        if !row.begin_preview() {
            continue;
        }
        jobs.push((id, file, row.override_trimmed()));
    }
    if jobs.is_empty() {
        return;
    }

    let url = ctx.props().endpoints.preview.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        // One request in flight at a time; a bulk action's total latency
        // is the sum of its rows' latencies.
        for (id, file, code) in jobs {
            let outcome = send_preview(&url, &file, code.as_deref()).await;
            link.send_message(Msg::PreviewFinished(id, outcome));
        }
    });
}

/// Same shape as `start_previews`, for commits. Rows without a job
/// identifier alert and are skipped: the user must preview first.
fn start_commits(component: &mut ImportComponent, ctx: &Context<ImportComponent>, ids: Vec<String>) {
    let mut jobs = Vec::new();
    for id in ids {
        let Some(row) = component.row_mut(&id) else {
            continue;
        };
        if row.job_id.is_empty() {
            alert("Preview this row first: it has no job identifier yet.");
            continue;
        }
        if !row.begin_commit() {
            continue;
        }
        jobs.push((id, row.job_id.clone(), row.override_trimmed()));
    }
    if jobs.is_empty() {
        return;
    }

    let url = ctx.props().endpoints.commit.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        for (id, job_id, code) in jobs {
            let outcome = send_commit(&url, &job_id, code.as_deref()).await;
            link.send_message(Msg::CommitFinished(id, outcome));
        }
    });
}

async fn send_preview(
    url: &str,
    file: &File,
    code: Option<&str>,
) -> Result<PreviewResponse, String> {
    let form = FormData::new().map_err(describe)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(describe)?;
    if let Some(code) = code {
        form.append_with_str("code", code).map_err(describe)?;
    }
    let response = Request::post(url)
        .body(form)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    response
        .json::<PreviewResponse>()
        .await
        .map_err(|err| err.to_string())
}

async fn send_commit(
    url: &str,
    job_id: &str,
    code: Option<&str>,
) -> Result<CommitResponse, String> {
    let form = FormData::new().map_err(describe)?;
    form.append_with_str("job_id", job_id).map_err(describe)?;
    if let Some(code) = code {
        form.append_with_str("code", code).map_err(describe)?;
    }
    let response = Request::post(url)
        .body(form)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    response
        .json::<CommitResponse>()
        .await
        .map_err(|err| err.to_string())
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
