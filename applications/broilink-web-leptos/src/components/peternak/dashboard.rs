use leptos::*;

use crate::chart::{format_value, PeternakView, ReportMetric, Selection};
use crate::components::common::{ComparisonChartView, ErrorBanner, LabelSelect, OptionalSelect, SensorCards};
use crate::state::{spawn_tracked_fetch, use_api_client, FetchState, RequestSequence};

/// Farm worker landing page: enclosure readings and the last week of reports
#[component]
pub fn PeternakDashboard() -> impl IntoView {
    let client = use_api_client();
    let state = create_rw_signal(FetchState::with_placeholder(PeternakView::mock()));
    let primary = create_rw_signal(ReportMetric::Pakan);
    let secondary = create_rw_signal(None::<ReportMetric>);
    let sequence = RequestSequence::new();

    spawn_tracked_fetch(
        "peternak dashboard",
        state,
        &sequence,
        async move { client.get_peternak_dashboard().await },
        |previous, data| {
            previous
                .cloned()
                .unwrap_or_else(PeternakView::mock)
                .merged(&data)
        },
    );

    let current = move || state.with(|s| s.current().cloned().unwrap_or_else(PeternakView::mock));
    let chart = Signal::derive(move || {
        let mut selection = Selection::new(primary.get());
        selection.secondary = secondary.get();
        current().chart(&selection)
    });

    view! {
        <div class="peternak-dashboard">
            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
                on_dismiss=Callback::new(move |_| state.update(FetchState::dismiss))
            />

            <div class="page-header">
                <div>
                    <h2>"Dashboard Peternak"</h2>
                    <p class="subtitle">{move || current().farm_name}</p>
                </div>
            </div>

            <SensorCards sensors=Signal::derive(move || current().sensors) />

            <div class="card chart-card">
                <h3>"Ringkasan Laporan (7 Hari Terakhir)"</h3>
                {move || {
                    let totals = current().totals();
                    view! {
                        <div class="totals">
                            <span>"Total Pakan: " {format_value(totals.pakan)} " kg"</span>
                            <span>"Total Minum: " {format_value(totals.minum)} " L"</span>
                            <span>"Rata-rata Bobot: " {format_value(totals.rata_bobot)} " kg"</span>
                            <span>"Total Kematian: " {format_value(totals.kematian)} " ekor"</span>
                        </div>
                    }
                }}
                <div class="chart-filters">
                    <LabelSelect label="Pilih Data 1 (Batang):" value=primary />
                    <OptionalSelect label="Pilih Data 2 (Garis):" value=secondary />
                </div>
                <ComparisonChartView chart=chart />
            </div>
        </div>
    }
}
