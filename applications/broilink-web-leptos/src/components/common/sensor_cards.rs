use leptos::*;

use crate::chart::format_value;
use crate::models::SensorSnapshot;

/// Current temperature, humidity, ammonia and enclosure status
#[component]
pub fn SensorCards(#[prop(into)] sensors: Signal<SensorSnapshot>) -> impl IntoView {
    let status = move || sensors.get().status;

    view! {
        <div class="sensor-grid">
            <SensorCard
                title="Suhu"
                value=Signal::derive(move || format!("{}°C", format_value(sensors.get().temperature)))
            />
            <SensorCard
                title="Kelembapan"
                value=Signal::derive(move || format!("{}%", format_value(sensors.get().humidity)))
            />
            <SensorCard
                title="Amonia"
                value=Signal::derive(move || format!("{} ppm", format_value(sensors.get().ammonia)))
            />
            <div class="card sensor-card">
                <h3>"Status Kandang"</h3>
                <span class=move || status().css_class()>{move || status().label()}</span>
            </div>
        </div>
    }
}

#[component]
fn SensorCard(title: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="card sensor-card">
            <h3>{title}</h3>
            <div class="sensor-value">{value}</div>
        </div>
    }
}
