use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use eframe::egui::{self, Color32, ColorImage, Context, Rect};
use image::{Rgb, RgbImage};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::IMAGE_EXTENSION;
use crate::domain::{NamedSeries, PipelineResult};
use crate::engine::ChartSink;
use crate::sink::image_sink::save_jpeg;
use crate::sink::palette::{dimmed, symbol_colors};
use crate::ui::utils::rgb_to_color32;

/// Result of the last screenshot write
#[derive(Debug, Clone)]
pub enum CaptureStatus {
    Saved(PathBuf),
    Failed(String),
}

/// The on-screen chart. `display` swaps in the new series; `persist` queues
/// a screenshot of the plot area which is written once the frame that shows
/// those series has been captured.
#[derive(Default)]
pub struct ChartSurface {
    series: Vec<NamedSeries>,
    colors: Vec<Color32>,
    out_dir: PathBuf,
    pending_capture: Option<PathBuf>,
    capture_requested: bool,
    plot_rect: Option<Rect>,
    last_capture: Option<CaptureStatus>,
}

impl ChartSurface {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }

    pub fn series(&self) -> &[NamedSeries] {
        &self.series
    }

    /// Line colour per series, index-aligned with `series()`
    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    pub fn last_capture(&self) -> Option<&CaptureStatus> {
        self.last_capture.as_ref()
    }

    pub fn capture_pending(&self) -> bool {
        self.pending_capture.is_some()
    }

    /// Remembered so the screenshot can be cropped to the chart alone
    pub fn set_plot_rect(&mut self, rect: Rect) {
        self.plot_rect = Some(rect);
    }

    /// Call after the chart has been drawn for this frame.
    pub fn request_pending_capture(&mut self, ctx: &Context) {
        if self.pending_capture.is_some() && !self.capture_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.capture_requested = true;
        }
    }

    /// Picks up a finished screenshot (if any) and writes the pending file.
    pub fn handle_screenshots(&mut self, ctx: &Context) {
        let shot: Option<Arc<ColorImage>> = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(Arc::clone(image)),
                _ => None,
            })
        });
        let Some(image) = shot else {
            return;
        };
        let Some(path) = self.pending_capture.take() else {
            return;
        };
        self.capture_requested = false;

        let cropped = match self.plot_rect {
            Some(rect) => image.region(&rect, Some(ctx.pixels_per_point())),
            None => (*image).clone(),
        };

        self.last_capture = Some(match save_jpeg(&color_image_to_rgb(&cropped), &path) {
            Ok(()) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_sink_events {
                    log::info!("📸 Chart captured to {}", path.display());
                }
                CaptureStatus::Saved(path)
            }
            Err(e) => {
                log::error!("❌ Chart capture failed: {:#}", e);
                CaptureStatus::Failed(format!("{:#}", e))
            }
        });
    }
}

impl ChartSink for ChartSurface {
    fn display(&mut self, result: &PipelineResult) -> Result<()> {
        let series = result.series();
        let palette = symbol_colors(series.len().div_ceil(2));
        self.colors = (0..series.len())
            .map(|i| {
                let base = palette[i / 2];
                rgb_to_color32(if i % 2 == 0 { base } else { dimmed(base) })
            })
            .collect();
        self.series = series.to_vec();
        Ok(())
    }

    fn persist(&mut self, output_name: &str) -> Result<PathBuf> {
        if output_name.trim().is_empty() {
            bail!("Output name is empty");
        }
        let path = self
            .out_dir
            .join(format!("{}.{}", output_name, IMAGE_EXTENSION));
        self.pending_capture = Some(path.clone());
        self.capture_requested = false;
        Ok(path)
    }
}

/// Drops the alpha channel; screenshots are opaque.
pub fn color_image_to_rgb(image: &ColorImage) -> RgbImage {
    let [w, h] = image.size;
    RgbImage::from_fn(w as u32, h as u32, |x, y| {
        let c = image.pixels[y as usize * w + x as usize];
        Rgb([c.r(), c.g(), c.b()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SeriesPoint, SymbolSeries};

    fn result_for(symbols: &[&str]) -> PipelineResult {
        symbols
            .iter()
            .map(|s| {
                let pts = vec![SeriesPoint::new(1.0, 1.0), SeriesPoint::new(2.0, 3.0)];
                SymbolSeries {
                    price: NamedSeries::new(*s, pts.clone()),
                    trend: NamedSeries::new(format!("{} Trend", s), pts),
                }
            })
            .collect()
    }

    #[test]
    fn display_replaces_series_and_assigns_colors() {
        let mut surface = ChartSurface::new(".");
        surface.display(&result_for(&["A", "B"])).unwrap();
        assert_eq!(surface.series().len(), 4);
        assert_eq!(surface.colors().len(), 4);
        // Price and trend of one symbol share a hue but differ in brightness
        assert_ne!(surface.colors()[0], surface.colors()[1]);

        surface.display(&result_for(&["C"])).unwrap();
        assert_eq!(surface.series().len(), 2);
        assert_eq!(surface.series()[0].name, "C");
    }

    #[test]
    fn persist_queues_capture_with_jpg_name() {
        let mut surface = ChartSurface::new("out");
        let path = surface.persist("chart").unwrap();
        assert_eq!(path, PathBuf::from("out").join("chart.jpg"));
        assert!(surface.capture_pending());
        assert!(surface.persist("  ").is_err());
    }

    #[test]
    fn color_image_converts_row_major() {
        let image = ColorImage::from_rgba_unmultiplied([2, 1], &[255, 0, 0, 255, 0, 0, 255, 255]);
        let rgb = color_image_to_rgb(&image);
        assert_eq!(rgb.dimensions(), (2, 1));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([0, 0, 255]));
    }
}
