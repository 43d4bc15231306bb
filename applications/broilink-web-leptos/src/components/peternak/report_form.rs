use leptos::*;

use crate::components::common::{alert, SuccessModal};
use crate::forms::ReportForm;
use crate::models::DailyReport;
use crate::state::use_api_client;

/// Daily feed, water, weight and mortality report
#[component]
pub fn ReportEntry() -> impl IntoView {
    let client = use_api_client();
    let form = create_rw_signal(ReportForm::default());
    let form_error = create_rw_signal(None::<String>);
    let saved = create_rw_signal(false);

    let submit = create_action(move |report: &DailyReport| {
        let client = client.clone();
        let report = report.clone();
        async move { client.submit_report(&report).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit.value().get() {
            match result {
                Ok(_) => {
                    form.set(ReportForm::default());
                    saved.set(true);
                }
                Err(e) => {
                    log::error!("Report submission failed: {}", e);
                    alert(&format!("Gagal menyimpan data! {}", e.user_message()));
                }
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ReportForm::validate) {
            Ok(report) => {
                form_error.set(None);
                submit.dispatch(report);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="report-entry">
            <div class="page-header">
                <div>
                    <h2>"Input Hasil Kerja"</h2>
                    <p class="subtitle">"Laporkan aktivitas harian Anda"</p>
                </div>
            </div>

            <form class="report-form" on:submit=on_submit>
                <div class="report-grid">
                    <ReportInput
                        title="Laporan Pakan Harian"
                        label="Jumlah Pakan (dalam kg)"
                        placeholder="Masukkan jumlah pakan"
                        step="0.1"
                        form=form
                        get=|f| f.pakan.clone()
                        set=|f, v| f.pakan = v
                    />
                    <ReportInput
                        title="Laporan Minum Harian"
                        label="Jumlah Minum (dalam liter)"
                        placeholder="Masukkan jumlah minum"
                        step="0.1"
                        form=form
                        get=|f| f.minum.clone()
                        set=|f, v| f.minum = v
                    />
                    <ReportInput
                        title="Laporan Sampling Bobot"
                        label="Bobot Rata-rata (dalam kg)"
                        placeholder="Masukkan bobot rata-rata"
                        step="0.01"
                        form=form
                        get=|f| f.bobot.clone()
                        set=|f, v| f.bobot = v
                    />
                    <ReportInput
                        title="Tingkat Kematian"
                        label="Jumlah Kematian (ekor)"
                        placeholder="Masukkan jumlah kematian"
                        step="1"
                        form=form
                        get=|f| f.kematian.clone()
                        set=|f, v| f.kematian = v
                    />
                </div>

                {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <div class="form-actions">
                    <button type="submit" class="button primary" disabled=move || submit.pending().get()>
                        {move || if submit.pending().get() { "Menyimpan..." } else { "Simpan Laporan" }}
                    </button>
                </div>
            </form>

            <SuccessModal
                open=saved
                message="Data berhasil disimpan!"
                on_close=Callback::new(move |_| saved.set(false))
            />
        </div>
    }
}

#[component]
fn ReportInput(
    title: &'static str,
    label: &'static str,
    placeholder: &'static str,
    step: &'static str,
    form: RwSignal<ReportForm>,
    get: fn(&ReportForm) -> String,
    set: fn(&mut ReportForm, String),
) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{title}</h3>
            <label class="form-field">
                <span>{label}</span>
                <input
                    type="number"
                    min="0"
                    step=step
                    placeholder=placeholder
                    required=true
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        </div>
    }
}
