use leptos::html::Input;
use leptos::*;

use crate::components::common::alert;
use crate::forms::{check_csv_file, format_file_size, upload_target};
use crate::models::CsvImportReport;
use crate::state::use_api_client;

#[derive(Debug, Clone, PartialEq)]
enum UploadOutcome {
    Imported {
        message: String,
        report: CsvImportReport,
    },
    Failed(String),
}

/// Import IoT readings for the selected farm from a CSV file
#[component]
pub fn CsvUpload(#[prop(into)] farm_id: Signal<Option<i64>>) -> impl IntoView {
    let client = use_api_client();
    let file = create_rw_signal(None::<web_sys::File>);
    let outcome = create_rw_signal(None::<UploadOutcome>);
    let input_ref = create_node_ref::<Input>();

    let clear_input = move || {
        file.set(None);
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let on_change = move |ev: ev::Event| {
        let selected = event_target::<web_sys::HtmlInputElement>(&ev)
            .files()
            .and_then(|files| files.get(0));
        let Some(selected) = selected else {
            return;
        };

        match check_csv_file(&selected.name(), &selected.type_()) {
            Ok(()) => {
                file.set(Some(selected));
                outcome.set(None);
            }
            Err(e) => {
                alert(&e.to_string());
                clear_input();
            }
        }
    };

    let upload = create_action(move |(selected, farm_id): &(web_sys::File, i64)| {
        let client = client.clone();
        let selected = selected.clone();
        let farm_id = *farm_id;
        async move { client.upload_iot_csv(farm_id, &selected).await }
    });

    create_effect(move |_| {
        if let Some(result) = upload.value().get() {
            match result {
                Ok((report, message)) => {
                    log::info!("Imported CSV for farm: {:?}", report);
                    outcome.set(Some(UploadOutcome::Imported {
                        message: message.unwrap_or_else(|| "Upload successful".to_string()),
                        report,
                    }));
                    clear_input();
                }
                Err(e) => {
                    log::error!("CSV upload failed: {}", e);
                    outcome.set(Some(UploadOutcome::Failed(e.user_message())));
                }
            }
        }
    });

    let on_upload = move |_| match upload_target(file.get_untracked(), farm_id.get_untracked()) {
        Ok(target) => {
            outcome.set(None);
            upload.dispatch(target);
        }
        Err(e) => alert(&e.to_string()),
    };

    view! {
        <div class="card csv-upload">
            <h3>"Upload Data IoT (CSV)"</h3>
            <label class="upload-drop">
                <span class="upload-link">"Click to upload"</span>
                <span>" or drag and drop"</span>
                <p class="hint">"CSV file with headers: timestamp, temperature, humidity, ammonia"</p>
                <input
                    type="file"
                    accept=".csv,text/csv"
                    class="hidden"
                    node_ref=input_ref
                    on:change=on_change
                />
            </label>

            {move || {
                file.get().map(|selected| {
                    view! {
                        <div class="upload-file">
                            <span class="upload-file-name">{selected.name()}</span>
                            <span class="upload-file-size">{format_file_size(selected.size())}</span>
                            <button class="icon-button" aria-label="Hapus file" on:click=move |_| clear_input()>
                                "×"
                            </button>
                        </div>
                    }
                })
            }}

            <button
                class="button primary wide"
                on:click=on_upload
                disabled=move || file.with(Option::is_none) || upload.pending().get()
            >
                {move || if upload.pending().get() { "Uploading..." } else { "Upload CSV" }}
            </button>

            {move || outcome.get().map(|o| view! { <UploadResult outcome=o /> })}

            <div class="upload-help">
                <p>"Format CSV yang diperlukan:"</p>
                <ul>
                    <li>"Header: timestamp, temperature, humidity, ammonia"</li>
                    <li>"Timestamp format: YYYY-MM-DD HH:MM:SS"</li>
                    <li>"Temperature: 0-50°C"</li>
                    <li>"Humidity: 0-100%"</li>
                    <li>"Ammonia: 0-100 ppm"</li>
                </ul>
            </div>
        </div>
    }
}

#[component]
fn UploadResult(outcome: UploadOutcome) -> impl IntoView {
    let count = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());

    match outcome {
        UploadOutcome::Failed(message) => view! {
            <div class="upload-result failed">
                <p>{message}</p>
            </div>
        }
        .into_view(),
        UploadOutcome::Imported { message, report } => {
            let (shown, hidden) = report.error_preview();
            let errors = (!shown.is_empty()).then(|| {
                let items = shown
                    .iter()
                    .map(|e| view! { <li>{e.clone()}</li> })
                    .collect_view();
                view! {
                    <div class="upload-errors">
                        <p>"Errors found:"</p>
                        <ul>
                            {items}
                            {(hidden > 0).then(|| view! { <li>{format!("... and {} more errors", hidden)}</li> })}
                        </ul>
                    </div>
                }
            });

            view! {
                <div class="upload-result imported">
                    <p class="upload-message">{message}</p>
                    <p>"Total rows: " {count(report.total_rows)}</p>
                    <p>"Successfully inserted: " {count(report.inserted)}</p>
                    {errors}
                </div>
            }
            .into_view()
        }
    }
}
