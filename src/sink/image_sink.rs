use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use image::{ImageFormat, Rgb, RgbImage};

use crate::config::{IMAGE_EXTENSION, PLOT_CONFIG};
use crate::domain::{NamedSeries, PipelineResult};
use crate::engine::ChartSink;
use crate::sink::palette::{dimmed, symbol_colors};
use crate::utils::maths_utils;

/// Headless sink: remembers the displayed series and rasterises them to a
/// JPEG on `persist`.
#[derive(Debug, Clone)]
pub struct ImageSink {
    out_dir: PathBuf,
    width: u32,
    height: u32,
    displayed: Vec<NamedSeries>,
}

impl Default for ImageSink {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ImageSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            width: PLOT_CONFIG.image_width,
            height: PLOT_CONFIG.image_height,
            displayed: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn displayed(&self) -> &[NamedSeries] {
        &self.displayed
    }

    pub fn image_path(&self, output_name: &str) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", output_name, IMAGE_EXTENSION))
    }

    /// Draws the displayed series. Series come in (price, trend) pairs; both
    /// members of a pair share a hue.
    pub fn render(&self) -> RgbImage {
        let bg = PLOT_CONFIG.image_background;
        let mut img = RgbImage::from_pixel(self.width, self.height, Rgb([bg.r(), bg.g(), bg.b()]));

        let margin = PLOT_CONFIG.image_margin.min(self.width / 4).min(self.height / 4) as f64;
        let plot_x = (margin, self.width as f64 - 1.0 - margin);
        // Pixel rows grow downwards
        let plot_y = (self.height as f64 - 1.0 - margin, margin);

        let frame = PLOT_CONFIG.image_frame;
        draw_frame(&mut img, plot_x, plot_y, Rgb([frame.r(), frame.g(), frame.b()]));

        let ys: Vec<Vec<f64>> = self.displayed.iter().map(NamedSeries::ys).collect();
        let Some(y_bounds) = maths_utils::padded_bounds(ys.iter().map(Vec::as_slice), 0.05) else {
            return img;
        };
        let x_max = self
            .displayed
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.x))
            .fold(1.0_f64, f64::max);
        let x_bounds = (1.0, x_max);

        let colors = symbol_colors(self.displayed.len().div_ceil(2));
        for (i, series) in self.displayed.iter().enumerate() {
            let base = colors[i / 2];
            let (rgb, width) = if i % 2 == 0 {
                (base, PLOT_CONFIG.price_line_width)
            } else {
                (dimmed(base), PLOT_CONFIG.trend_line_width)
            };

            let pixels: Vec<(f64, f64)> = series
                .points
                .iter()
                .map(|p| {
                    (
                        maths_utils::rescale(p.x, x_bounds, plot_x),
                        maths_utils::rescale(p.y, y_bounds, plot_y),
                    )
                })
                .collect();
            for pair in pixels.windows(2) {
                draw_segment(&mut img, pair[0], pair[1], Rgb(rgb), width);
            }
            if let [only] = pixels.as_slice() {
                draw_segment(&mut img, *only, *only, Rgb(rgb), width);
            }
        }
        img
    }
}

impl ChartSink for ImageSink {
    fn display(&mut self, result: &PipelineResult) -> Result<()> {
        self.displayed = result.series().to_vec();
        Ok(())
    }

    fn persist(&mut self, output_name: &str) -> Result<PathBuf> {
        if output_name.trim().is_empty() {
            bail!("output name is empty");
        }
        let path = self.image_path(output_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        save_jpeg(&self.render(), &path)?;
        Ok(path)
    }
}

pub fn save_jpeg(img: &RgbImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Jpeg)
        .with_context(|| format!("Failed to write image: {}", path.display()))
}

fn put_dot(img: &mut RgbImage, x: f64, y: f64, color: Rgb<u8>, width: f32) {
    let radius = ((width - 1.0) / 2.0).max(0.0).round() as i64;
    let (cx, cy) = (x.round() as i64, y.round() as i64);
    for px in cx - radius..=cx + radius {
        for py in cy - radius..=cy + radius {
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

fn draw_segment(img: &mut RgbImage, from: (f64, f64), to: (f64, f64), color: Rgb<u8>, width: f32) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil().max(1.0) as usize;
    for s in 0..=steps {
        let t = s as f64 / steps as f64;
        let x = from.0 + (to.0 - from.0) * t;
        let y = from.1 + (to.1 - from.1) * t;
        put_dot(img, x, y, color, width);
    }
}

fn draw_frame(img: &mut RgbImage, (x0, x1): (f64, f64), (y0, y1): (f64, f64), color: Rgb<u8>) {
    draw_segment(img, (x0, y0), (x1, y0), color, 1.0);
    draw_segment(img, (x0, y1), (x1, y1), color, 1.0);
    draw_segment(img, (x0, y0), (x0, y1), color, 1.0);
    draw_segment(img, (x1, y0), (x1, y1), color, 1.0);
}
