//! Helpers shared by the router tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use tipboard_chart::{BarChart, ChartRenderer};
use tipboard_common::{Result, TipboardError};
use tipboard_config::Config;
use tipboard_data::TipsDataset;
use tipboard_web::{router::build_router, state::AppState};

pub struct Reply {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl Reply {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("body is JSON")
    }
}

/// Renders the chart model itself as JSON, so responses can be compared.
pub struct ModelRenderer;

impl ChartRenderer for ModelRenderer {
    fn render_html(&self, chart: &BarChart) -> Result<String> {
        Ok(serde_json::to_string(chart)?)
    }

    fn render_png(&self, _chart: &BarChart) -> Result<Vec<u8>> {
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}

pub struct BrokenRenderer;

impl ChartRenderer for BrokenRenderer {
    fn render_html(&self, _chart: &BarChart) -> Result<String> {
        Ok("<div></div>".to_string())
    }

    fn render_png(&self, _chart: &BarChart) -> Result<Vec<u8>> {
        Err(TipboardError::Render("no raster backend".to_string()))
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.chat.stream_delay_ms = 1;
    config
}

pub fn app() -> Router {
    build_router(AppState::new(test_config()).unwrap())
}

pub fn app_with_config(config: Config) -> Router {
    build_router(AppState::new(config).unwrap())
}

pub fn app_with_renderer(renderer: Arc<dyn ChartRenderer>) -> Router {
    let state = AppState::with_parts(TipsDataset::bundled().unwrap(), renderer, test_config()).unwrap();
    build_router(state)
}

pub async fn send(app: Router, request: Request<Body>) -> Reply {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    Reply {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Reply {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Reply {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
