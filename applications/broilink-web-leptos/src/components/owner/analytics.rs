use leptos::*;

use crate::api::{export_file_name, save_file, ApiError};
use crate::chart::{AnalyticsView, Choice, ReportMetric, Selection, TimeRange};
use crate::components::common::{alert, ComparisonChartView, ErrorBanner, LabelSelect, OptionalSelect};
use crate::models::FarmSlot;
use crate::state::{spawn_tracked_fetch, use_api_client, FetchState, RequestSequence};

/// Manual report history for one farm, with CSV export
#[component]
pub fn Analytics() -> impl IntoView {
    let client = use_api_client();

    let state = create_rw_signal(FetchState::with_placeholder(AnalyticsView::mock()));
    let primary = create_rw_signal(ReportMetric::Pakan);
    let secondary = create_rw_signal(None::<ReportMetric>);
    let range = create_rw_signal(TimeRange::Day);
    let farm = create_rw_signal(FarmSlot::default());
    let sequence = RequestSequence::new();

    let selection = Signal::derive(move || Selection {
        primary: primary.get(),
        secondary: secondary.get(),
        range: range.get(),
    });

    let fetch_client = client.clone();
    create_effect(move |_| {
        let selection = selection.get();
        let farm_id = farm.get().farm_id();
        let client = fetch_client.clone();
        spawn_tracked_fetch(
            "owner analytics",
            state,
            &sequence,
            async move {
                client
                    .get_analytics(farm_id, selection.range.analytics_period())
                    .await
            },
            move |previous, data| {
                previous
                    .cloned()
                    .unwrap_or_else(AnalyticsView::mock)
                    .merged(&data, &selection)
            },
        );
    });

    let export = create_action(move |farm_id: &i64| {
        let client = client.clone();
        let farm_id = *farm_id;
        async move {
            let bytes = client.export_farm_csv(farm_id).await?;
            save_file(&bytes, &export_file_name(farm_id))?;
            Ok::<_, ApiError>(())
        }
    });

    create_effect(move |_| match export.value().get() {
        Some(Ok(())) => log::info!("Export successful"),
        Some(Err(e)) => alert(&format!("Gagal export data: {}", e.user_message())),
        None => {}
    });

    let chart = Signal::derive(move || {
        let selection = selection.get();
        state.with(|s| {
            s.current()
                .cloned()
                .unwrap_or_else(AnalyticsView::mock)
                .series
                .chart(&selection, selection.range.axis_caption())
        })
    });

    view! {
        <div class="analytics">
            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
                on_dismiss=Callback::new(move |_| state.update(FetchState::dismiss))
            />

            <div class="page-header">
                <h2>"Analisis Laporan Peternakan"</h2>
                <button
                    class="button primary"
                    disabled=move || export.pending().get()
                    on:click=move |_| export.dispatch(farm.get_untracked().farm_id())
                >
                    {move || if export.pending().get() { "Mengekspor..." } else { "Export Data" }}
                </button>
            </div>

            <div class="card chart-card">
                <h3>{move || format!("Grafik Analisis Laporan {}", farm.get().label())}</h3>
                <div class="chart-filters">
                    <LabelSelect label="Pilih Data 1 (Batang):" value=primary />
                    <OptionalSelect label="Pilih Data 2 (Garis):" value=secondary />
                    <LabelSelect label="Jangka Waktu:" value=range />
                    <LabelSelect label="Pilih Kandang:" value=farm />
                </div>
                <ComparisonChartView chart=chart />
            </div>
        </div>
    }
}
