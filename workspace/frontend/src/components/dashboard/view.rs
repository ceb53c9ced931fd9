use yew::prelude::*;

use super::actions::TriggerButtons;
use super::forecast_panel::ForecastPanel;
use super::risk_badge::RiskPanel;
use super::selection::SelectionPanel;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let Some(dashboard) = use_dashboard() else {
        log::error!("Dashboard rendered outside of a DashboardProvider");
        return html! {
            <div class="alert alert-error">{"Dashboard state is unavailable."}</div>
        };
    };
    let snapshot = dashboard.snapshot();

    let on_country = {
        let dashboard = dashboard.clone();
        Callback::from(move |country: String| dashboard.select_country(country))
    };
    let on_company = {
        let dashboard = dashboard.clone();
        Callback::from(move |company: String| dashboard.select_company(company))
    };
    let on_days = {
        let dashboard = dashboard.clone();
        Callback::from(move |raw: String| dashboard.set_days(raw))
    };
    let on_predict = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| dashboard.trigger_forecast())
    };
    let on_risk = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| dashboard.trigger_risk_index())
    };

    html! {
        <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
            <div class="space-y-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Forecast Request"}</h2>
                        <SelectionPanel
                            selection={snapshot.selection().clone()}
                            range={snapshot.range()}
                            on_country={on_country}
                            on_company={on_company}
                            on_days={on_days}
                        />
                        <TriggerButtons
                            forecast_status={snapshot.forecast().status()}
                            risk_status={snapshot.risk_index().status()}
                            on_predict={on_predict.clone()}
                            on_risk={on_risk.clone()}
                        />
                    </div>
                </div>
                <RiskPanel operation={snapshot.risk_index().clone()} on_retry={on_risk} />
            </div>
            <div class="xl:col-span-2">
                <ForecastPanel operation={snapshot.forecast().clone()} on_retry={on_predict} />
            </div>
        </div>
    }
}
