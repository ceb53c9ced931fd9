use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::catalog;
use crate::state::{DayRange, SelectionState};

#[derive(Properties, PartialEq)]
pub struct SelectionPanelProps {
    pub selection: SelectionState,
    pub range: DayRange,
    pub on_country: Callback<String>,
    pub on_company: Callback<String>,
    /// Emits the raw input; answers whether it was accepted.
    pub on_days: Callback<String, bool>,
}

#[function_component(SelectionPanel)]
pub fn selection_panel(props: &SelectionPanelProps) -> Html {
    let selection = &props.selection;
    let raw_days = use_state(|| selection.days.to_string());
    let days_rejected = use_state(|| false);

    let on_country_change = {
        let on_country = props.on_country.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_country.emit(select.value());
        })
    };

    let on_company_change = {
        let on_company = props.on_company.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_company.emit(select.value());
        })
    };

    let on_days_input = {
        let on_days = props.on_days.clone();
        let raw_days = raw_days.clone();
        let days_rejected = days_rejected.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            raw_days.set(value.clone());
            days_rejected.set(!on_days.emit(value));
        })
    };

    // Leaving the field snaps it back to the stored day count.
    let on_days_blur = {
        let raw_days = raw_days.clone();
        let days_rejected = days_rejected.clone();
        let days = selection.days;
        Callback::from(move |_: FocusEvent| {
            raw_days.set(days.to_string());
            days_rejected.set(false);
        })
    };

    let country = selection.country.clone().unwrap_or_default();
    let company = selection.company.clone().unwrap_or_default();

    html! {
        <div class="space-y-4">
            <div class="form-control w-full">
                <label class="label"><span class="label-text">{"Select Country"}</span></label>
                <select class="select select-bordered w-full" onchange={on_country_change}>
                    <option value="" selected={country.is_empty()}>{"-- Select --"}</option>
                    {for catalog::countries().map(|name| html! {
                        <option key={name} value={name} selected={name == country}>{name}</option>
                    })}
                </select>
            </div>

            {if selection.country.is_some() {
                html! {
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Select Company"}</span></label>
                        <select class="select select-bordered w-full" onchange={on_company_change}>
                            <option value="" selected={company.is_empty()}>{"-- Select --"}</option>
                            {for selection.company_options().iter().map(|name| html! {
                                <option key={*name} value={*name} selected={*name == company}>{*name}</option>
                            })}
                        </select>
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="form-control w-44">
                <label class="label"><span class="label-text">{"Days to Forecast"}</span></label>
                <input
                    type="number"
                    class={classes!("input", "input-bordered", (*days_rejected).then_some("input-error"))}
                    min={props.range.min.to_string()}
                    max={props.range.max.to_string()}
                    step="1"
                    value={(*raw_days).clone()}
                    oninput={on_days_input}
                    onblur={on_days_blur}
                />
                {if *days_rejected {
                    html! {
                        <label class="label">
                            <span class="label-text-alt text-error">
                                {format!("{}. Keeping {} days.", props.range.hint(), selection.days)}
                            </span>
                        </label>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
