//! PNG export of a `BarChart`.
//!
//! Draws axes, horizontal gridlines, bars and a legend of color swatches.
//! No text is drawn.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tracing::debug;

use tipboard_common::{Result, TipboardError};

use crate::model::BarChart;
use crate::series_color;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const PLOT_BACKGROUND: Rgba<u8> = Rgba([229, 236, 246, 255]);
const GRID: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS: Rgba<u8> = Rgba([68, 68, 68, 255]);
const GRID_LINES: u32 = 5;
/// Largest edge, in pixels, an export may have.
const MAX_EDGE: u32 = 16_384;

/// Logical size plus a scale factor, like a plot export's `width`, `height`, `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { width: 800, height: 400, scale: 2 }
    }
}

impl RasterOptions {
    /// Output size in pixels. Zero, overflowing or oversized edges are errors.
    pub fn pixel_size(&self) -> Result<(u32, u32)> {
        let scale = self.scale.max(1);
        let edge = |logical: u32| logical.checked_mul(scale).filter(|px| (1..=MAX_EDGE).contains(px));
        match (edge(self.width), edge(self.height)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(TipboardError::Render(format!(
                "invalid image size {}x{} at scale {}",
                self.width, self.height, scale
            ))),
        }
    }
}

pub fn render_png(chart: &BarChart, options: &RasterOptions) -> Result<Vec<u8>> {
    let img = rasterize(chart, options)?;
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    debug!(bytes = out.len(), bars = chart.bar_count(), "Encoded chart PNG");
    Ok(out)
}

fn rasterize(chart: &BarChart, options: &RasterOptions) -> Result<RgbaImage> {
    let (width, height) = options.pixel_size()?;
    let s = options.scale.max(1);

    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

    // Plot area, leaving room on the right for the legend.
    let left = 80 * s;
    let right = width.saturating_sub(140 * s).max(left + 1);
    let top = 60 * s;
    let bottom = height.saturating_sub(60 * s).max(top + 1);
    fill_rect(&mut img, left, top, right, bottom, PLOT_BACKGROUND);

    let plot_h = (bottom - top) as f64;
    for i in 1..=GRID_LINES {
        let y = bottom - ((plot_h * i as f64) / GRID_LINES as f64) as u32;
        fill_rect(&mut img, left, y, right, y + s, GRID);
    }

    let max = chart.max_value();
    let max = if max > 0.0 { max * 1.05 } else { 1.0 };

    let n_categories = chart.categories.len().max(1) as u32;
    let n_series = chart.series.len().max(1) as u32;
    let slot_w = (right - left) / n_categories;
    let group_w = slot_w * 4 / 5;
    let bar_w = (group_w / n_series).max(1);

    for (ci, category) in chart.categories.iter().enumerate() {
        let group_x = left + slot_w * ci as u32 + (slot_w - group_w) / 2;
        for (si, series) in chart.series.iter().enumerate() {
            let Some((_, value)) = series.points.iter().find(|(x, _)| x == category) else {
                continue;
            };
            let bar_h = ((value.max(0.0) / max) * plot_h) as u32;
            let x0 = group_x + bar_w * si as u32;
            fill_rect(&mut img, x0, bottom - bar_h, x0 + bar_w, bottom, parse_hex(series_color(si)));
        }
    }

    // Axes
    fill_rect(&mut img, left, top, left + s, bottom + s, AXIS);
    fill_rect(&mut img, left, bottom, right, bottom + s, AXIS);

    // Legend swatches
    let swatch = 20 * s;
    let legend_x = right + 30 * s;
    for (si, _) in chart.series.iter().enumerate() {
        let y0 = top + (swatch + 10 * s) * si as u32;
        fill_rect(&mut img, legend_x, y0, legend_x + swatch, y0 + swatch, parse_hex(series_color(si)));
    }

    Ok(img)
}

/// Fill `[x0, x1) × [y0, y1)`, clipped to the image.
fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    let x1 = x1.min(img.width());
    let y1 = y1.min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, color);
        }
    }
}

fn parse_hex(hex: &str) -> Rgba<u8> {
    let hex = hex.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .unwrap_or(0)
    };
    Rgba([channel(0), channel(2), channel(4), 255])
}
