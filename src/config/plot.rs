//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Gradient sampled once per symbol to pick its line colour
    pub symbol_gradient_colors: &'static [&'static str],
    /// Width of the price line
    pub price_line_width: f32,
    /// Width of the trend line
    pub trend_line_width: f32,
    /// Trend lines are drawn at this fraction of the price line's brightness
    pub trend_dim_factor: f32,
    /// Background of persisted images
    pub image_background: Color32,
    /// Axis/frame colour in persisted images
    pub image_frame: Color32,
    /// Headless image size (pixels)
    pub image_width: u32,
    pub image_height: u32,
    /// Blank border around the plotted area in headless images (pixels)
    pub image_margin: u32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    symbol_gradient_colors: &[
        "#1f77b4", // Blue
        "#2ca02c", // Green
        "#ffb703", // Amber
        "#ff4500", // Orange red
        "#9467bd", // Purple
    ],
    price_line_width: 1.5,
    trend_line_width: 2.0,
    trend_dim_factor: 0.6,
    image_background: Color32::WHITE,
    image_frame: Color32::from_rgb(90, 90, 90),
    image_width: 1200,
    image_height: 600,
    image_margin: 40,
};
