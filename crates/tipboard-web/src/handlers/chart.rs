//! Chart endpoints.
//!
//! Both run the same filter → aggregate → render path. Selection errors are
//! answered with status 200: a placeholder `<div>` for the fragment endpoint,
//! an `{"error": ...}` object for the JSON one.

use axum::{
    extract::{RawQuery, State},
    response::Html,
    Json,
};
use serde::Serialize;
use tracing::warn;

use tipboard_chart::{encode_base64, BarChart};
use tipboard_common::SelectionError;
use tipboard_data::AggregateResult;

use crate::error::ApiError;
use crate::query::parse_selection;
use crate::state::SharedState;

pub const FRAGMENT_TITLE: &str = "Filtered Revenue";
pub const IMAGE_TITLE: &str = "Revenue";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChartPayload {
    Rendered { html_content: String, image_base64: String },
    Failed { error: String },
}

fn aggregate(state: &SharedState, raw_query: Option<&str>) -> Result<AggregateResult, SelectionError> {
    let selection = parse_selection(raw_query, state.dataset.domain());
    state.dataset.aggregate(&selection).inspect_err(|err| {
        warn!(query = raw_query.unwrap_or_default(), "Chart not rendered: {}", err);
    })
}

/// GET /api/chart - HTML fragment
pub async fn chart_fragment(
    State(state): State<SharedState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, ApiError> {
    let result = match aggregate(&state, query.as_deref()) {
        Ok(result) => result,
        Err(err) => return Ok(Html(format!("<div>{err}</div>"))),
    };
    let chart = BarChart::grouped(FRAGMENT_TITLE, &result, state.dataset.domain());
    Ok(Html(state.renderer.render_html(&chart)?))
}

/// GET /api/chart_a - HTML fragment plus base64 PNG, as JSON
pub async fn chart_structured(
    State(state): State<SharedState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ChartPayload>, ApiError> {
    let result = match aggregate(&state, query.as_deref()) {
        Ok(result) => result,
        Err(err) => return Ok(Json(ChartPayload::Failed { error: err.to_string() })),
    };
    let chart = BarChart::grouped(IMAGE_TITLE, &result, state.dataset.domain());
    let html_content = state.renderer.render_html(&chart)?;
    let png = state.renderer.render_png(&chart)?;
    Ok(Json(ChartPayload::Rendered {
        html_content,
        image_base64: encode_base64(&png),
    }))
}
