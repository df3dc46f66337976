//! Plotly-backed renderer.
//!
//! The fragment is a target `<div>`, a `<script src>` for plotly.js and an
//! inline script calling `Plotly.newPlot`. Pages that inject it with
//! `innerHTML` must re-create the script elements for them to run.

use serde::Serialize;
use serde_json::json;

use tipboard_common::Result;

use crate::model::BarChart;
use crate::raster::{self, RasterOptions};
use crate::{series_color, ChartRenderer};

#[derive(Debug, Serialize)]
struct BarTrace<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
    legendgroup: &'a str,
    x: Vec<&'a str>,
    y: Vec<f64>,
    marker: Marker,
}

#[derive(Debug, Serialize)]
struct Marker {
    color: &'static str,
}

#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    cdn_url: String,
    raster: RasterOptions,
}

impl PlotlyRenderer {
    pub fn new(cdn_url: impl Into<String>, raster: RasterOptions) -> Self {
        Self { cdn_url: cdn_url.into(), raster }
    }

    fn traces<'a>(chart: &'a BarChart) -> Vec<BarTrace<'a>> {
        chart
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| BarTrace {
                kind: "bar",
                name: &s.name,
                legendgroup: &s.name,
                x: s.points.iter().map(|(x, _)| x.as_str()).collect(),
                y: s.points.iter().map(|(_, y)| *y).collect(),
                marker: Marker { color: series_color(i) },
            })
            .collect()
    }

    fn layout(chart: &BarChart) -> serde_json::Value {
        json!({
            "title": { "text": chart.title },
            "barmode": "group",
            "xaxis": {
                "title": { "text": chart.x_label },
                "categoryorder": "array",
                "categoryarray": chart.categories,
            },
            "yaxis": { "title": { "text": chart.y_label } },
            "legend": { "title": { "text": chart.legend_title } },
        })
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render_html(&self, chart: &BarChart) -> Result<String> {
        let div_id = uuid::Uuid::new_v4().to_string();
        let traces = script_safe_json(&Self::traces(chart))?;
        let layout = script_safe_json(&Self::layout(chart))?;

        Ok(format!(
            r#"<div>
<div id="{id}" class="plotly-graph-div" style="height:100%; width:100%;"></div>
<script type="text/javascript" src="{cdn}" charset="utf-8"></script>
<script type="text/javascript">
window.PLOTLYENV = window.PLOTLYENV || {{}};
if (document.getElementById("{id}")) {{
    Plotly.newPlot("{id}", {traces}, {layout}, {{"responsive": true}});
}}
</script>
</div>"#,
            id = div_id,
            cdn = html_attr_escape(&self.cdn_url),
            traces = traces,
            layout = layout,
        ))
    }

    fn render_png(&self, chart: &BarChart) -> Result<Vec<u8>> {
        raster::render_png(chart, &self.raster)
    }
}

/// JSON for embedding in an inline `<script>`; `</` would close the element early.
fn script_safe_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn html_attr_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
