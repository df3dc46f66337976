//! Shared application state for the web server.
//!
//! Built once at startup and never mutated, so handlers share it through an
//! `Arc` without locking.

use std::sync::Arc;

use tipboard_chart::{ChartRenderer, PlotlyRenderer, RasterOptions};
use tipboard_common::Result;
use tipboard_config::Config;
use tipboard_data::TipsDataset;

use crate::templates::Templates;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub dataset: Arc<TipsDataset>,
    pub renderer: Arc<dyn ChartRenderer>,
    pub templates: Arc<Templates>,
    pub config: Config,
}

impl AppState {
    /// Load the bundled dataset and build the Plotly renderer from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let dataset = TipsDataset::bundled()?;
        let renderer = PlotlyRenderer::new(
            config.chart.plotly_cdn.clone(),
            RasterOptions {
                width: config.chart.png_width,
                height: config.chart.png_height,
                scale: config.chart.png_scale,
            },
        );
        Self::with_parts(dataset, Arc::new(renderer), config)
    }

    pub fn with_parts(dataset: TipsDataset, renderer: Arc<dyn ChartRenderer>, config: Config) -> Result<Self> {
        config.validate().map_err(anyhow::Error::from)?;
        Ok(Self {
            dataset: Arc::new(dataset),
            renderer,
            templates: Arc::new(Templates::new()?),
            config,
        })
    }
}

pub type SharedState = Arc<AppState>;
