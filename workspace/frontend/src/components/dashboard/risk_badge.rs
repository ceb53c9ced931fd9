use common::RiskIndexResult;
use yew::prelude::*;

use crate::common::notice::FailureNotice;
use crate::presenter::{updated_label, RiskBadge};
use crate::state::Operation;

#[derive(Properties, PartialEq)]
pub struct RiskPanelProps {
    pub operation: Operation<RiskIndexResult>,
    pub on_retry: Callback<()>,
}

/// GeoRisk badge. Renders nothing until there is a response, a failure or
/// a request in flight.
#[function_component(RiskPanel)]
pub fn risk_panel(props: &RiskPanelProps) -> Html {
    let operation = &props.operation;
    let badge = operation.result().and_then(RiskBadge::from_result);

    if operation.result().is_none() && operation.error().is_none() && !operation.is_pending() {
        return html! {};
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center text-center">
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

                {match badge {
                    Some(badge) => html! {
                        <>
                            <h3 class="card-title">{"GeoRisk Score for "}<b>{&badge.company}</b></h3>
                            <p class={classes!("text-4xl", "font-bold", badge.color_class())}>{&badge.value}</p>
                            <p class="text-sm font-semibold">{badge.label()}</p>
                            <p class="text-xs text-gray-500">
                                {"Higher score → Higher geopolitical tension & market volatility."}
                            </p>
                            {if let Some(at) = operation.completed_at() {
                                html! { <span class="text-xs text-gray-400">{updated_label(at)}</span> }
                            } else {
                                html! {}
                            }}
                        </>
                    },
                    None if operation.is_pending() => html! {
                        <div class="flex items-center gap-2 text-sm text-gray-500">
                            <span class="loading loading-spinner loading-sm"></span>
                            {"Loading GeoRisk Index..."}
                        </div>
                    },
                    None => match operation.result() {
                        Some(result) => html! {
                            <p class="text-sm text-gray-500">
                                {format!("No GeoRisk score available for {}", result.company)}
                            </p>
                        },
                        None => html! {},
                    },
                }}
            </div>
        </div>
    }
}
