use leptos::*;

use crate::chart::{Choice, MonitoringView, Selection, SensorMetric, TimeRange};
use crate::components::common::{ComparisonChartView, ErrorBanner, LabelSelect, OptionalSelect, SensorCards};
use crate::models::FarmSlot;
use crate::state::{spawn_tracked_fetch, use_api_client, FetchState, RequestSequence};

/// Live sensor readings and their history for one farm
#[component]
pub fn Monitoring() -> impl IntoView {
    let client = use_api_client();

    let state = create_rw_signal(FetchState::with_placeholder(MonitoringView::mock()));
    let primary = create_rw_signal(SensorMetric::Temperature);
    let secondary = create_rw_signal(None::<SensorMetric>);
    let range = create_rw_signal(TimeRange::Day);
    let farm = create_rw_signal(FarmSlot::default());
    let sequence = RequestSequence::new();

    let selection = Signal::derive(move || Selection {
        primary: primary.get(),
        secondary: secondary.get(),
        range: range.get(),
    });

    create_effect(move |_| {
        let selection = selection.get();
        let farm_id = farm.get().farm_id();
        let client = client.clone();
        spawn_tracked_fetch(
            "owner monitoring",
            state,
            &sequence,
            async move {
                client
                    .get_monitoring(farm_id, selection.range.monitoring_period())
                    .await
            },
            move |previous, data| {
                previous
                    .cloned()
                    .unwrap_or_else(MonitoringView::mock)
                    .merged(&data, &selection)
            },
        );
    });

    let current = move || state.with(|s| s.current().cloned().unwrap_or_else(MonitoringView::mock));
    let chart = Signal::derive(move || {
        let selection = selection.get();
        current().series.chart(&selection, selection.range.axis_caption())
    });

    view! {
        <div class="monitoring">
            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
                on_dismiss=Callback::new(move |_| state.update(FetchState::dismiss))
            />

            <div class="page-header">
                <h2>"Monitoring Detail Peternakan"</h2>
                {move || state.with(FetchState::is_loading).then(|| {
                    view! { <span class="loading">"Memuat..."</span> }
                })}
            </div>

            <SensorCards sensors=Signal::derive(move || current().sensors) />

            <div class="card chart-card">
                <h3>{move || format!("Grafik Data Sensor {}", farm.get().label())}</h3>
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
