//! Router-level tests for the pages and chart endpoints.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use std::sync::Arc;

use common::{app, app_with_config, app_with_renderer, get, test_config, BrokenRenderer, ModelRenderer};

const ALL_DAYS: &str = "days=Fri&days=Sat&days=Sun&days=Thur";

#[tokio::test]
async fn test_index_links_to_chat_apps() {
    let reply = get(app(), "/").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type.starts_with("text/html"));
    assert!(reply.body.contains("Instant Bot"));
    assert!(reply.body.contains("Streaming Bot"));
    assert!(reply.body.contains("(Test APP)"));
    assert!(reply.body.contains("/index_two"));
}

#[tokio::test]
async fn test_dashboard_has_checked_box_per_value() {
    let reply = get(app(), "/index_two").await;
    assert_eq!(reply.status, StatusCode::OK);
    for value in ["Fri", "Sat", "Sun", "Thur", "Female", "Male"] {
        assert!(
            reply.body.contains(&format!(r#"value="{value}" checked"#)),
            "missing checkbox for {value}"
        );
    }
    assert!(reply.body.contains(r#"id="chart-container""#));
    assert!(reply.body.contains(r#"document.createElement("script")"#));
    assert!(reply.body.contains("/api/chart?"));
}

#[tokio::test]
async fn test_chart_fragment_renders_plotly() {
    let reply = get(app(), "/api/chart").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type.starts_with("text/html"));
    assert!(reply.body.contains("Plotly.newPlot("));
    assert!(reply.body.contains("Filtered Revenue"));
}

#[tokio::test]
async fn test_explicitly_empty_days_is_placeholder() {
    let reply = get(app(), "/api/chart?days=").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type.starts_with("text/html"));
    assert_eq!(reply.body, "<div>Please select at least one filter.</div>");
}

#[tokio::test]
async fn test_explicitly_empty_sexes_is_placeholder() {
    let reply = get(app(), "/api/chart?days=Sun&sexes=").await;
    assert_eq!(reply.body, "<div>Please select at least one filter.</div>");
}

#[tokio::test]
async fn test_no_matching_rows_is_placeholder() {
    let reply = get(app(), "/api/chart?days=Mon").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "<div>No data matches your filters.</div>");
}

#[tokio::test]
async fn test_omitted_days_means_all_days() {
    let omitted = get(app_with_renderer(Arc::new(ModelRenderer)), "/api/chart?sexes=Male").await;
    let explicit = get(
        app_with_renderer(Arc::new(ModelRenderer)),
        &format!("/api/chart?{ALL_DAYS}&sexes=Male"),
    )
    .await;
    assert_eq!(omitted.body, explicit.body);

    let chart: serde_json::Value = omitted.json();
    assert_eq!(chart["categories"], serde_json::json!(["Fri", "Sat", "Sun", "Thur"]));
}

#[tokio::test]
async fn test_fragment_plots_full_table_sums() {
    let reply = get(app_with_renderer(Arc::new(ModelRenderer)), "/api/chart?days=Fri&sexes=Female").await;
    let chart: serde_json::Value = reply.json();
    assert_eq!(chart["series"][0]["name"], "Female");
    let total = chart["series"][0]["points"][0][1].as_f64().unwrap();
    assert!((total - 127.31).abs() < 1e-6);
}

#[tokio::test]
async fn test_same_query_same_aggregate() {
    let uri = "/api/chart?days=Sat&days=Sun&sexes=Female";
    let first = get(app_with_renderer(Arc::new(ModelRenderer)), uri).await;
    let second = get(app_with_renderer(Arc::new(ModelRenderer)), uri).await;
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_structured_success_has_html_and_png() {
    let reply = get(app(), "/api/chart_a?days=Fri&sexes=Female&sexes=Male").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type.starts_with("application/json"));

    let body = reply.json();
    let html = body["html_content"].as_str().unwrap();
    let png = body["image_base64"].as_str().unwrap();
    assert!(html.contains("Plotly.newPlot("));
    assert!(html.contains(r#""text":"Revenue""#));
    // base64 of the PNG signature
    assert!(png.starts_with("iVBORw0KGgo"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_structured_no_match_has_only_error() {
    let reply = get(app(), "/api/chart_a?days=Mon&sexes=Male").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), serde_json::json!({ "error": "No data matches your filters." }));
}

#[tokio::test]
async fn test_structured_empty_selection_has_only_error() {
    let reply = get(app(), "/api/chart_a?sexes=").await;
    assert_eq!(reply.json(), serde_json::json!({ "error": "Please select at least one filter." }));
}

#[tokio::test]
async fn test_render_failure_is_server_error() {
    let reply = get(app_with_renderer(Arc::new(BrokenRenderer)), "/api/chart_a").await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(reply.json()["error"].as_str().unwrap().contains("no raster backend"));
}

#[tokio::test]
async fn test_api_data_smoke() {
    let reply = get(app(), "/api/data").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), serde_json::json!({ "data": 123 }));
}

#[tokio::test]
async fn test_healthz_reports_rows() {
    let reply = get(app(), "/healthz").await;
    assert_eq!(reply.json(), serde_json::json!({ "status": "ok", "rows": 244 }));
}

#[tokio::test]
async fn test_static_files_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), "static ok").unwrap();

    let mut config = test_config();
    config.server.static_dir = dir.path().to_string_lossy().into_owned();

    let reply = get(app_with_config(config), "/static/hello.txt").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "static ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let reply = get(app(), "/nope").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}
