use std::collections::HashMap;

use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings::{self, AppSettings, MAX_TIMEOUT_MS};

const TEXT_FIELDS: [&str; 6] = [
    "api_host",
    "api_port",
    "api_path",
    "log_level",
    "forecast_timeout_ms",
    "risk_timeout_ms",
];

/// Settings after applying the submitted form values to `current`.
///
/// Fields that do not parse keep their current value.
fn settings_from_form(current: &AppSettings, values: &HashMap<String, String>) -> AppSettings {
    let mut next = current.clone();
    next.apply_overrides(|name| values.get(name).cloned());
    next
}

fn read_form(form: &HtmlFormElement) -> Option<HashMap<String, String>> {
    let data = FormData::new_with_form(form).ok()?;
    let mut values: HashMap<String, String> = TEXT_FIELDS
        .iter()
        .filter_map(|name| data.get(name).as_string().map(|v| (name.to_string(), v)))
        .collect();
    // An unchecked checkbox is absent from the form data.
    values.insert("api_use_https".to_string(), data.has("api_use_https").to_string());
    Some(values)
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let current = use_state(settings::get_settings);
    let form_ref = use_node_ref();
    let toast = use_context::<ToastContext>();

    let on_submit = {
        let current = current.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Settings form is not mounted");
                return;
            };
            let Some(values) = read_form(&form) else {
                log::error!("Failed to read settings form");
                return;
            };

            let next = settings_from_form(&current, &values);
            if next == *current {
                if let Some(toast) = &toast {
                    toast.show_info("No changes to save".to_string());
                }
                return;
            }

            settings::update_settings(|s| *s = next.clone());
            log::set_max_level(next.log_level.to_level_filter());
            log::info!("Settings updated, API base URL: {}", next.api_base_url());

            let saved = next.save_to_storage();
            if let Some(toast) = &toast {
                match &saved {
                    Ok(()) => toast.show_success("Settings saved".to_string()),
                    Err(e) => toast.show_error(format!("Settings applied but not saved: {:?}", e)),
                }
            }
            if let Err(e) = saved {
                log::error!("Failed to persist settings: {:?}", e);
            }
            current.set(next);
        })
    };

    let level = current.log_level.as_str().to_lowercase();

    html! {
        <form ref={form_ref} onsubmit={on_submit} class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Prediction Service"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"Host"}</span></label>
                        <input type="text" name="api_host" value={current.api_host.clone()} class="input input-bordered w-full" />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Port"}</span></label>
                        <input type="number" name="api_port" min="1" max="65535" value={current.api_port.to_string()} class="input input-bordered w-full" />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Path prefix"}</span></label>
                        <input type="text" name="api_path" placeholder="/api" value={current.api_path.clone()} class="input input-bordered w-full" />
                    </div>
                    <div class="form-control">
                        <label class="label cursor-pointer justify-start gap-4">
                            <input type="checkbox" name="api_use_https" class="checkbox" checked={current.api_use_https} />
                            <span class="label-text">{"Use HTTPS"}</span>
                        </label>
                    </div>
                    <p class="text-sm opacity-70 mt-2">{current.api_base_url()}</p>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Requests & Logging"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"Prediction timeout (ms)"}</span></label>
                        <input type="number" name="forecast_timeout_ms" min="1" max={MAX_TIMEOUT_MS.to_string()} value={current.forecast_timeout_ms.to_string()} class="input input-bordered w-full" />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"GeoRisk Index timeout (ms)"}</span></label>
                        <input type="number" name="risk_timeout_ms" min="1" max={MAX_TIMEOUT_MS.to_string()} value={current.risk_timeout_ms.to_string()} class="input input-bordered w-full" />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Log level"}</span></label>
                        <select name="log_level" class="select select-bordered w-full">
                            {for ["error", "warn", "info", "debug", "trace"].iter().map(|option| html! {
                                <option value={*option} selected={level == *option}>{*option}</option>
                            })}
                        </select>
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button type="submit" class="btn btn-primary">{"Save"}</button>
                    </div>
                </div>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn values(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_form_values_update_settings() {
        let current = AppSettings::default();
        let next = settings_from_form(
            &current,
            &values(&[
                ("api_host", "10.1.2.3"),
                ("api_port", "8080"),
                ("api_path", ""),
                ("api_use_https", "false"),
                ("log_level", "warn"),
                ("forecast_timeout_ms", "60000"),
                ("risk_timeout_ms", "20000"),
            ]),
        );

        assert_eq!(next.api_base_url(), "http://10.1.2.3:8080");
        assert_eq!(next.log_level, Level::Warn);
        assert_eq!(next.forecast_timeout_ms, 60000);
        assert_eq!(next.days, current.days);
    }

    #[test]
    fn test_unchecking_https_turns_it_off() {
        let mut current = AppSettings::default();
        current.api_use_https = true;

        let next = settings_from_form(&current, &values(&[("api_use_https", "false")]));
        assert!(!next.api_use_https);
    }

    #[test]
    fn test_unparseable_fields_keep_current_values() {
        let current = AppSettings::default();
        let next = settings_from_form(
            &current,
            &values(&[("api_port", "99999"), ("forecast_timeout_ms", "-5")]),
        );
        assert_eq!(next, current);
    }
}
