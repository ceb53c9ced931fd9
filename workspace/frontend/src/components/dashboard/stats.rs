use yew::prelude::*;

use crate::presenter::ForecastSummary;

#[derive(Properties, PartialEq)]
pub struct ForecastStatsProps {
    pub summary: ForecastSummary,
}

#[function_component(ForecastStats)]
pub fn forecast_stats(props: &ForecastStatsProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Low Likely"}</div>
                    <div class="stat-value text-error">{&summary.low}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"High Likely"}</div>
                    <div class="stat-value text-success">{&summary.high}</div>
                    {if summary.inverted_range {
                        html! { <div class="stat-desc text-warning">{"Range reported inverted"}</div> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Horizon"}</div>
                    <div class="stat-value text-primary">{format!("{} days", summary.values.len())}</div>
                </div>
            </div>
        </div>
    }
}
