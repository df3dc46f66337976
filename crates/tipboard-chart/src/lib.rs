//! tipboard-chart — Turns an aggregate into a grouped bar chart.
//!
//! Two outputs are produced from the same `BarChart` model:
//!   - an embeddable HTML fragment (Plotly, loaded from a CDN)
//!   - a PNG raster for clients that cannot run scripts

pub mod model;
pub mod plotly;
pub mod raster;

pub use model::{BarChart, Series};
pub use plotly::PlotlyRenderer;
pub use raster::RasterOptions;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tipboard_common::Result;

/// Something that can draw a `BarChart`. Implementations must be stateless
/// per call; one instance is shared by every request.
pub trait ChartRenderer: Send + Sync {
    /// HTML fragment suitable for insertion into an existing page.
    fn render_html(&self, chart: &BarChart) -> Result<String>;

    /// PNG-encoded image of the same chart.
    fn render_png(&self, chart: &BarChart) -> Result<Vec<u8>>;
}

/// Standard (padded) base64, as expected by `data:image/png;base64,` URLs.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Plotly's default qualitative palette.
pub(crate) const PALETTE: [&str; 6] = ["#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3"];

pub(crate) fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
