use common::ForecastResult;
use yew::prelude::*;

use super::chart::ForecastChart;
use super::stats::ForecastStats;
use crate::common::notice::FailureNotice;
use crate::presenter::{updated_label, ForecastSummary};
use crate::state::Operation;

#[derive(Properties, PartialEq)]
pub struct ForecastPanelProps {
    pub operation: Operation<ForecastResult>,
    pub on_retry: Callback<()>,
}

/// Forecast results card. The last successful forecast stays visible while
/// a new request is pending or after it failed.
#[function_component(ForecastPanel)]
pub fn forecast_panel(props: &ForecastPanelProps) -> Html {
    let operation = &props.operation;
    let summary = operation.result().map(ForecastSummary::from);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                {match &summary {
                    Some(summary) => html! {
                        <div class="flex justify-between items-center">
                            <h2 class="card-title">{"Results for "}<b>{&summary.company}</b></h2>
                            {if let Some(at) = operation.completed_at() {
                                html! { <span class="text-xs text-gray-500">{updated_label(at)}</span> }
                            } else {
                                html! {}
                            }}
                        </div>
                    },
                    None => html! { <h2 class="card-title">{"Forecast"}</h2> },
                }}

                {if let Some(message) = operation.error() {
                    html! {
                        <FailureNotice
                            kind={operation.kind()}
                            message={message.to_string()}
                            on_retry={Some(props.on_retry.clone())}
                            retry_disabled={operation.is_pending()}
                        />
                    }
                } else {
                    html! {}
                }}

                {match summary {
                    Some(summary) => html! {
                        <>
                            <ForecastStats summary={summary.clone()} />
                            <div class="mt-6">
                                <ForecastChart summary={summary.clone()} />
                            </div>
                            {if let Some(plot) = &summary.plot {
                                html! {
                                    <div class="mt-6 flex flex-col items-center gap-4">
                                        <h3 class="font-semibold">{"Actual vs Predicted Stock Prices"}</h3>
                                        <img src={plot.url.clone()} alt="Stock Plot" class="rounded-xl shadow-lg w-4/5 max-w-3xl" />
                                        <a href={plot.url.clone()} download={plot.file_name.clone()} class="btn btn-sm btn-outline">
                                            <i class="fas fa-download"></i>
                                            {" Download Plot"}
                                        </a>
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                        </>
                    },
                    None if operation.is_pending() => html! {
                        <div class="flex flex-col justify-center items-center py-12 gap-4">
                            <span class="loading loading-spinner loading-lg"></span>
                            <p class="text-sm text-gray-500">{"Running forecast..."}</p>
                        </div>
                    },
                    None => html! {
                        <div class="text-center py-8 text-gray-500">
                            <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                            <p>{"No forecast yet."}</p>
                            <p class="text-sm mt-2">{"Choose a country and company, then press Predict."}</p>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
