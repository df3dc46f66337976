//! Dashboard page: one checkbox per dimension value plus a chart container
//! that the page's script fills from /api/chart.

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::error::ApiError;
use crate::query::{DAYS_PARAM, SEXES_PARAM};
use crate::state::SharedState;
use crate::templates::DASHBOARD;

pub const DASHBOARD_TITLE: &str = "Tipboard Revenue Dashboard";

/// GET /index_two
pub async fn dashboard(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let domain = state.dataset.domain();
    let html = state.templates.render(
        DASHBOARD,
        context! {
            title => DASHBOARD_TITLE,
            days => domain.days,
            sexes => domain.sexes,
            days_param => DAYS_PARAM,
            sexes_param => SEXES_PARAM,
        },
    )?;
    Ok(Html(html))
}
