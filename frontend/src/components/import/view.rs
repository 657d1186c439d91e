//! Table rendering for the import widget.
//!
//! Everything here derives from `ImportComponent` state, including the
//! per-row snapshot block: re-rendering after a repeated preview replaces
//! the block instead of stacking a second one, and the issue text next to
//! it is rendered from its own field, so the snapshot never disturbs it.

use common::model::import::SnapshotSection;
use std::collections::HashMap;
use web_sys::{Event, HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{cell_text, ordered_section_keys, SNAPSHOT_ROW_LIMIT};
use super::messages::Msg;
use super::state::{ImportComponent, Row};

pub fn view(component: &ImportComponent, ctx: &Context<ImportComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="import-widget">
            { build_toolbar(component, link) }
            { build_table(component, link) }
            { build_activity_log(component) }
        </div>
    }
}

fn build_toolbar(component: &ImportComponent, link: &Scope<ImportComponent>) -> Html {
    let on_files = link.callback(|event: Event| {
        let mut files = Vec::new();
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            if let Some(list) = input.files() {
                for i in 0..list.length() {
                    if let Some(file) = list.item(i) {
                        files.push(file);
                    }
                }
            }
        }
        Msg::FilesSelected(files)
    });

    html! {
        <div class="import-toolbar">
            <button onclick={link.callback(|_| Msg::OpenFileDialog)}>{ "Choose files" }</button>
            <button onclick={link.callback(|_| Msg::PreviewChecked)}>{ "Preview checked" }</button>
            <button onclick={link.callback(|_| Msg::CommitChecked)}>{ "Commit checked" }</button>
            <input
                type="file"
                multiple=true
                style="display: none;"
                ref={component.file_input_ref.clone()}
                onchange={on_files}
            />
        </div>
    }
}

fn build_table(component: &ImportComponent, link: &Scope<ImportComponent>) -> Html {
    let on_check_all = link.callback(|event: Event| {
        let checked = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or(false);
        Msg::CheckAll(checked)
    });

    html! {
        <table class="import-table">
            <thead>
                <tr>
                    <th>
                        <input type="checkbox" checked={component.check_all} onchange={on_check_all} />
                    </th>
                    <th>{ "Filename" }</th>
                    <th>{ "Detected code" }</th>
                    <th>{ "Override code" }</th>
                    <th>{ "Status" }</th>
                    <th>{ "Issues" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for component.rows.iter().map(|row| build_row(row, link)) }
            </tbody>
        </table>
    }
}

fn build_row(row: &Row, link: &Scope<ImportComponent>) -> Html {
    let on_check = {
        let id = row.id.clone();
        link.callback(move |event: Event| {
            let checked = event
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.checked())
                .unwrap_or(false);
            Msg::RowChecked(id.clone(), checked)
        })
    };
    let on_override = {
        let id = row.id.clone();
        link.callback(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            Msg::OverrideChanged(id.clone(), value)
        })
    };
    let on_preview = {
        let id = row.id.clone();
        link.callback(move |_| Msg::PreviewRow(id.clone()))
    };
    let on_commit = {
        let id = row.id.clone();
        link.callback(move |_| Msg::CommitRow(id.clone()))
    };

    html! {
        <tr key={row.id.clone()}>
            <td><input type="checkbox" checked={row.checked} onchange={on_check} /></td>
            <td>{ &row.file_name }</td>
            <td class="detected">{ &row.detected_code }</td>
            <td>
                <input
                    type="text"
                    placeholder="Override code (optional)"
                    value={row.override_code.clone()}
                    oninput={on_override}
                />
            </td>
            <td class="status">{ row.status.label() }</td>
            <td class="issues">
                { &row.issues }
                { build_snapshot(row.snapshot.as_ref()) }
            </td>
            <td>
                <button onclick={on_preview}>{ "Preview" }</button>
                <button onclick={on_commit}>{ "Commit" }</button>
            </td>
        </tr>
    }
}

fn build_snapshot(snapshot: Option<&HashMap<String, SnapshotSection>>) -> Html {
    let Some(snapshot) = snapshot.filter(|sections| !sections.is_empty()) else {
        return Html::default();
    };
    let sections: Html = ordered_section_keys(snapshot)
        .into_iter()
        .filter_map(|key| {
            snapshot
                .get(&key)
                .map(|section| build_section(&key, section))
        })
        .collect();
    html! {
        <details class="snapshot">
            <summary>
                { format!("Preview snapshot (first {SNAPSHOT_ROW_LIMIT} rows per section)") }
            </summary>
            { sections }
        </details>
    }
}

fn build_section(key: &str, section: &SnapshotSection) -> Html {
    html! {
        <>
            <div class="snapshot-heading">
                { format!("Section {}: {} row(s) detected", key, section.total_rows()) }
            </div>
            <table class="snapshot-table">
                <thead>
                    <tr>
                        { for section.columns.iter().map(|column| html! { <th>{ column }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for section.rows.iter().take(SNAPSHOT_ROW_LIMIT).map(|example| html! {
                        <tr>
                            { for section.columns.iter().map(|column| html! {
                                <td>{ cell_text(example, column) }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </>
    }
}

fn build_activity_log(component: &ImportComponent) -> Html {
    html! {
        <div class="import-log">
            { for component.log.iter().map(|line| html! { <div>{ line }</div> }) }
        </div>
    }
}
