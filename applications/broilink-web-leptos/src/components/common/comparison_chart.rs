use leptos::*;

use crate::chart::{format_value, ComparisonChart, Dataset};

/// Bar chart with an optional line overlay on a second axis
#[component]
pub fn ComparisonChartView(#[prop(into)] chart: Signal<ComparisonChart>) -> impl IntoView {
    let primary_ticks = move || chart.with(|c| c.primary.scale.ticks());
    let secondary_ticks = move || chart.with(|c| c.secondary.as_ref().map(|d| d.scale.ticks()));

    view! {
        <div class="chart">
            <div class="chart-legend">
                {move || chart.with(|c| legend_item(&c.primary, "legend-swatch bar"))}
                {move || {
                    chart.with(|c| {
                        c.secondary.as_ref().map(|line| legend_item(line, "legend-swatch line"))
                    })
                }}
            </div>

            <div class="chart-body">
                <div class="chart-axis left">
                    {move || tick_labels(primary_ticks())}
                </div>

                <div class="chart-plot">
                    <div class="chart-bars">
                        {move || {
                            let color = chart.with(|c| c.primary.color);
                            chart
                                .with(|c| c.bars())
                                .into_iter()
                                .map(|bar| {
                                    let title = format!("{}: {}", bar.label, format_value(bar.value));
                                    view! {
                                        <div class="chart-slot">
                                            <div
                                                class="chart-bar"
                                                title=title
                                                style=format!(
                                                    "height: {:.2}%; background-color: {};",
                                                    bar.height,
                                                    color,
                                                )
                                            ></div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    {move || {
                        chart.with(|c| {
                            c.secondary.as_ref().map(|line| {
                                let color = line.color;
                                let points = c.overlay_polyline();
                                view! {
                                    <svg
                                        class="chart-overlay"
                                        viewBox="0 0 100 100"
                                        preserveAspectRatio="none"
                                    >
                                        <polyline
                                            points=points
                                            fill="none"
                                            stroke=color
                                            stroke-width="1.5"
                                            vector-effect="non-scaling-stroke"
                                        />
                                    </svg>
                                }
                            })
                        })
                    }}
                </div>

                {move || {
                    secondary_ticks().map(|ticks| {
                        view! { <div class="chart-axis right">{tick_labels(ticks)}</div> }
                    })
                }}
            </div>

            <div class="chart-categories">
                {move || {
                    chart
                        .with(|c| c.categories.clone())
                        .into_iter()
                        .map(|label| view! { <span class="chart-category">{label}</span> })
                        .collect_view()
                }}
            </div>
            <div class="chart-caption">{move || chart.with(|c| c.caption)}</div>
        </div>
    }
}

fn legend_item(dataset: &Dataset, swatch: &'static str) -> impl IntoView {
    view! {
        <span class="legend-item">
            <span class=swatch style=format!("background-color: {};", dataset.color)></span>
            {dataset.legend}
        </span>
    }
}

fn tick_labels(ticks: [f64; 5]) -> impl IntoView {
    ticks
        .into_iter()
        .map(|tick| view! { <span class="chart-tick">{format_value(tick)}</span> })
        .collect_view()
}
