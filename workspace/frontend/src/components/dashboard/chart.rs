use plotly::common::{Fill, Line, LineShape, Mode};
use plotly::Scatter;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::presenter::ForecastSummary;

const CHART_ID: &str = "chart-forecast";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Line trace of the forecast keyed by `Day 1..N`.
pub fn forecast_trace(summary: &ForecastSummary) -> Box<Scatter<String, f64>> {
    Scatter::new(summary.labels.clone(), summary.values.clone())
        .mode(Mode::LinesMarkers)
        .name("Forecast Price")
        .line(
            Line::new()
                .color("rgba(255, 99, 132, 1)")
                .width(2.0)
                .shape(LineShape::Spline),
        )
        .fill(Fill::ToZeroY)
        .fill_color("rgba(255, 99, 132, 0.3)")
}

pub fn forecast_layout(summary: &ForecastSummary) -> serde_json::Value {
    serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 60, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false, "type": "category"},
        "yaxis": {"showgrid": true, "gridcolor": "#eee", "title": {"text": format!("{} price", summary.company)}},
        "showlegend": false
    })
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn render_chart(div_id: &str, summary: &ForecastSummary) -> Result<(), serde_wasm_bindgen::Error> {
    let data = to_js(&[forecast_trace(summary)])?;
    let layout = to_js(&forecast_layout(summary))?;
    let config = to_js(&serde_json::json!({"responsive": true, "displayModeBar": false}))?;
    newPlot(div_id, data, layout, config);
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub summary: ForecastSummary,
}

#[function_component(ForecastChart)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.summary.clone()), move |(chart_ref, summary)| {
        if let Some(element) = chart_ref.cast::<HtmlElement>() {
            element.set_id(CHART_ID);
            log::trace!("Plotting {} forecast points for {}", summary.values.len(), summary.company);
            if let Err(e) = render_chart(CHART_ID, summary) {
                log::error!("Failed to render forecast chart: {}", e);
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} class="chart-container" style="width:100%; height:350px;"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ForecastResult;

    fn summary() -> ForecastSummary {
        ForecastSummary::from(&ForecastResult {
            company: "TCS".to_string(),
            low_likely: 140.5,
            high_likely: 162.3,
            forecast: vec![150.0, 151.0, 152.0],
            plot_url: None,
        })
    }

    #[test]
    fn test_trace_is_keyed_by_day_labels() {
        let trace = serde_json::to_value(forecast_trace(&summary())).unwrap();
        assert_eq!(trace["type"], "scatter");
        assert_eq!(trace["x"], serde_json::json!(["Day 1", "Day 2", "Day 3"]));
        assert_eq!(trace["y"], serde_json::json!([150.0, 151.0, 152.0]));
        assert_eq!(trace["name"], "Forecast Price");
    }

    #[test]
    fn test_layout_uses_category_axis() {
        let layout = forecast_layout(&summary());
        assert_eq!(layout["xaxis"]["type"], "category");
        assert_eq!(layout["yaxis"]["title"]["text"], "TCS price");
    }
}
