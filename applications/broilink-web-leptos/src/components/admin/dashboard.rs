use leptos::*;
use leptos_router::A;

use crate::chart::format_value;
use crate::components::common::ErrorBanner;
use crate::models::Farm;
use crate::state::{spawn_tracked_fetch, use_api_client, FetchState, RequestSequence};

/// Admin landing page: every farm with its latest condition
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let client = use_api_client();
    let farms = create_rw_signal(FetchState::with_placeholder(Farm::mock_list()));
    let sequence = RequestSequence::new();

    spawn_tracked_fetch(
        "admin farms",
        farms,
        &sequence,
        async move { client.get_farms().await },
        |previous, fresh| {
            if fresh.is_empty() {
                log::warn!("Farm list is empty, keeping previous list");
                previous.cloned().unwrap_or_else(Farm::mock_list)
            } else {
                fresh
            }
        },
    );

    let rows = move || farms.with(|s| s.current().cloned().unwrap_or_default());

    view! {
        <div class="admin-dashboard">
            <ErrorBanner
                message=Signal::derive(move || farms.with(|s| s.error().map(str::to_string)))
                on_dismiss=Callback::new(move |_| farms.update(FetchState::dismiss))
            />

            <div class="page-header">
                <h2>"Daftar Kandang"</h2>
                {move || farms.with(FetchState::is_loading).then(|| {
                    view! { <span class="loading">"Memuat..."</span> }
                })}
            </div>

            <div class="card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Kandang"</th>
                            <th>"Status"</th>
                            <th>"Suhu"</th>
                            <th>"Kelembapan"</th>
                            <th>"Amonia"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|farm| (farm.key(), farm.display_name())
                            children=|farm| view! { <FarmRow farm=farm /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn FarmRow(farm: Farm) -> impl IntoView {
    let reading = |value: Option<f64>, unit: &str| {
        value
            .map(|v| format!("{}{}", format_value(v), unit))
            .unwrap_or_else(|| "-".to_string())
    };
    let status = farm.farm_status();
    let config_href = match farm.key() {
        Some(id) => format!("/admin/konfigurasi?farm={}", id),
        None => "/admin/konfigurasi".to_string(),
    };

    view! {
        <tr>
            <td>{farm.display_name()}</td>
            <td>
                {match status {
                    Some(s) => view! { <span class=s.css_class()>{s.label()}</span> }.into_view(),
                    None => "-".into_view(),
                }}
            </td>
            <td>{reading(farm.temperature, "°C")}</td>
            <td>{reading(farm.humidity, "%")}</td>
            <td>{reading(farm.ammonia, " ppm")}</td>
            <td>
                <A href=config_href class="button small">"Konfigurasi"</A>
            </td>
        </tr>
    }
}
