use leptos::*;

use super::request_modal::RequestModal;
use crate::chart::{Overview, OverviewView, OwnerDashboardView, ReportMetric, Selection, TimeRange};
use crate::components::common::{ComparisonChartView, ErrorBanner, LabelSelect, OptionalSelect};
use crate::models::FarmStatus;
use crate::state::{spawn_tracked_fetch, use_api_client, FetchState, RequestSequence};

/// Owner landing page: first farm's condition, latest reports, activity feed
#[component]
pub fn OwnerDashboard() -> impl IntoView {
    let client = use_api_client();

    let dashboard = create_rw_signal(FetchState::with_placeholder(OwnerDashboardView::mock()));
    let overview = create_rw_signal(FetchState::with_placeholder(OverviewView::mock()));
    let primary = create_rw_signal(Overview(ReportMetric::Kematian));
    let secondary = create_rw_signal(None::<Overview>);
    let show_request = create_rw_signal(false);

    let dashboard_sequence = RequestSequence::new();
    let overview_sequence = RequestSequence::new();

    let dashboard_client = client.clone();
    spawn_tracked_fetch(
        "owner dashboard",
        dashboard,
        &dashboard_sequence,
        async move { dashboard_client.get_owner_dashboard().await },
        |previous, data| {
            previous
                .cloned()
                .unwrap_or_else(OwnerDashboardView::mock)
                .merged(&data)
        },
    );

    // Charts only follow a farm the backend actually reported
    let farm_id = create_memo(move |_| {
        dashboard.with(|s| match s {
            FetchState::Ready(view) => view.farm.farm_id,
            _ => None,
        })
    });

    let selection = Signal::derive(move || Selection {
        primary: primary.get(),
        secondary: secondary.get(),
        range: TimeRange::Day,
    });

    create_effect(move |_| {
        let selection = selection.get();
        let Some(farm_id) = farm_id.get() else {
            return;
        };
        let client = client.clone();
        spawn_tracked_fetch(
            "owner overview chart",
            overview,
            &overview_sequence,
            async move {
                client
                    .get_analytics(farm_id, TimeRange::Day.analytics_period())
                    .await
            },
            move |previous, data| {
                previous
                    .cloned()
                    .unwrap_or_else(OverviewView::mock)
                    .merged(&data, &selection)
            },
        );
    });

    let chart = Signal::derive(move || {
        let selection = selection.get();
        overview.with(|s| {
            s.current()
                .cloned()
                .unwrap_or_else(OverviewView::mock)
                .series
                .chart(&selection, "Jam")
        })
    });

    let view_data = move || dashboard.with(|s| s.current().cloned().unwrap_or_else(OwnerDashboardView::mock));

    view! {
        <div class="owner-dashboard">
            <ErrorBanner
                message=Signal::derive(move || dashboard.with(|s| s.error().map(str::to_string)))
                on_dismiss=Callback::new(move |_| dashboard.update(FetchState::dismiss))
            />

            <div class="page-header">
                <div>
                    <h2>"Dashboard Owner"</h2>
                    <p class="subtitle">"Pantau kondisi semua kandang dan aktivitas peternakan Anda"</p>
                </div>
                <button class="button primary" on:click=move |_| show_request.set(true)>
                    "Pengajuan"
                </button>
            </div>

            <div class="dashboard-grid">
                <div class="card farm-card">
                    <h3>"Kondisi Kandang"</h3>
                    {move || {
                        let farm = view_data().farm;
                        let status = FarmStatus::parse(&farm.status);
                        view! {
                            <p class="farm-name">{farm.name}</p>
                            <span class=status.map(|s| s.css_class()).unwrap_or("status-badge")>
                                {status.map(|s| s.label().to_string()).unwrap_or(farm.status)}
                            </span>
                            <p class="farm-temperature">{farm.temperature}</p>
                        }
                    }}
                </div>

                <div class="card chart-card">
                    <h3>"Analisis Laporan (Terbaru)"</h3>
                    <div class="chart-filters">
                        <LabelSelect label="Data 1 (Batang):" value=primary />
                        <OptionalSelect label="Data 2 (Garis):" value=secondary />
                    </div>
                    <ComparisonChartView chart=chart />
                </div>
            </div>

            <div class="card">
                <h3>"Aktivitas Peternakan"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Waktu"</th>
                            <th>"Aktivitas"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            view_data()
                                .activities
                                .into_iter()
                                .map(|entry| {
                                    let class = entry.css_class();
                                    view! {
                                        <tr>
                                            <td>{entry.time}</td>
                                            <td>
                                                <p>{entry.activity}</p>
                                                <p class="detail">{entry.detail}</p>
                                            </td>
                                            <td><span class=class>{entry.status}</span></td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            {move || show_request.get().then(|| view! {
                <RequestModal on_close=Callback::new(move |_| show_request.set(false)) />
            })}
        </div>
    }
}
