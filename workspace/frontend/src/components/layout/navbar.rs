use yew::prelude::*;

use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let endpoint = settings::get_settings().api_base_url();

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="app-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none px-4">
                <span class="badge badge-ghost font-mono text-xs" title="Prediction service">
                    <i class="fas fa-plug mr-2"></i>{endpoint}
                </span>
            </div>
        </div>
    }
}
