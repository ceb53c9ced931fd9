use yew::prelude::*;

use crate::presenter::button_label;
use crate::state::{OperationKind, OperationStatus};

#[derive(Properties, PartialEq)]
pub struct TriggerButtonsProps {
    pub forecast_status: OperationStatus,
    pub risk_status: OperationStatus,
    pub on_predict: Callback<()>,
    pub on_risk: Callback<()>,
}

#[function_component(TriggerButtons)]
pub fn trigger_buttons(props: &TriggerButtonsProps) -> Html {
    html! {
        <div class="card-actions justify-start mt-6 gap-3">
            <TriggerButton
                kind={OperationKind::Forecast}
                status={props.forecast_status}
                class="btn btn-primary"
                on_click={props.on_predict.clone()}
            />
            <TriggerButton
                kind={OperationKind::RiskIndex}
                status={props.risk_status}
                class="btn btn-secondary"
                on_click={props.on_risk.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TriggerButtonProps {
    kind: OperationKind,
    status: OperationStatus,
    class: &'static str,
    on_click: Callback<()>,
}

#[function_component(TriggerButton)]
fn trigger_button(props: &TriggerButtonProps) -> Html {
    let pending = props.status == OperationStatus::Pending;
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <button class={props.class} disabled={pending} {onclick}>
            {if pending {
                html! { <span class="loading loading-spinner loading-sm"></span> }
            } else {
                html! {}
            }}
            {button_label(props.kind, props.status)}
        </button>
    }
}
