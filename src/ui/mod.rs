pub mod app;
mod app_async;
pub mod config;
pub mod plot_view;
pub mod styles;
pub mod surface;
mod ui_render;
pub mod ui_text;
pub mod utils;

pub use app::{SettingsOverrides, TrendViewerApp, ViewerSettings};
pub use surface::ChartSurface;
