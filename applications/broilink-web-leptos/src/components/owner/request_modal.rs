use leptos::*;

use crate::chart::Choice;
use crate::forms::validate_request;
use crate::models::{OwnerRequest, RequestType};
use crate::state::use_api_client;

/// Form for asking the admin to add a farm or a farm worker
#[component]
pub fn RequestModal(on_close: Callback<()>) -> impl IntoView {
    let client = use_api_client();
    let request_type = create_rw_signal(RequestType::default());
    let content = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let sent = create_rw_signal(None::<String>);

    let submit = create_action(move |request: &OwnerRequest| {
        let client = client.clone();
        let request = request.clone();
        async move { client.submit_owner_request(&request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit.value().get() {
            match result {
                Ok(reply) => {
                    error.set(None);
                    sent.set(Some(
                        reply
                            .message
                            .unwrap_or_else(|| "Pengajuan berhasil dikirim".to_string()),
                    ));
                }
                Err(e) => {
                    log::error!("Owner request failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match validate_request(request_type.get_untracked(), &content.get_untracked()) {
            Ok(request) => {
                error.set(None);
                submit.dispatch(request);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal request-modal">
                <h3>"Pengajuan ke Admin"</h3>
                {move || match sent.get() {
                    Some(message) => view! {
                        <p class="modal-message">{message}</p>
                        <button class="button primary" on:click=move |_| on_close.call(())>
                            "Tutup"
                        </button>
                    }
                    .into_view(),
                    None => view! {
                        <form on:submit=on_submit>
                            <label class="form-field">
                                <span>"Jenis Pengajuan"</span>
                                <select on:change=move |ev| {
                                    if let Some(kind) = RequestType::from_label(&event_target_value(&ev)) {
                                        request_type.set(kind);
                                    }
                                }>
                                    {RequestType::ALL
                                        .iter()
                                        .map(|&kind| view! {
                                            <option
                                                value=kind.label()
                                                selected=move || request_type.get() == kind
                                            >
                                                {kind.label()}
                                            </option>
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="form-field">
                                <span>"Isi Pengajuan"</span>
                                <textarea
                                    rows="4"
                                    prop:value=move || content.get()
                                    on:input=move |ev| content.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                            <div class="modal-actions">
                                <button type="button" class="button" on:click=move |_| on_close.call(())>
                                    "Batal"
                                </button>
                                <button type="submit" class="button primary" disabled=move || submit.pending().get()>
                                    {move || if submit.pending().get() { "Mengirim..." } else { "Kirim" }}
                                </button>
                            </div>
                        </form>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}
