use eframe::egui::{self, Ui};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoints};

use crate::config::PLOT_CONFIG;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::surface::ChartSurface;
use crate::ui::utils::format_price;

/// Draws every series on the surface as a fast line. Returns the rect the
/// plot occupied so it can be captured later.
pub fn show_chart(ui: &mut Ui, surface: &ChartSurface) -> Option<egui::Rect> {
    if surface.series().is_empty() {
        ui.centered_and_justified(|ui| ui.label_subdued(UI_TEXT.empty_chart));
        return None;
    }

    let legend = Legend::default().position(Corner::LeftTop);
    let response = Plot::new("trend_plot")
        .legend(legend)
        .custom_x_axes(vec![create_x_axis()])
        .custom_y_axes(vec![create_y_axis()])
        .show(ui, |plot_ui| {
            for (i, (series, color)) in surface
                .series()
                .iter()
                .zip(surface.colors().iter().copied())
                .enumerate()
            {
                // Series arrive as (price, trend) pairs
                let width = if i % 2 == 0 {
                    PLOT_CONFIG.price_line_width
                } else {
                    PLOT_CONFIG.trend_line_width
                };
                let points: Vec<[f64; 2]> = series.points.iter().copied().map(Into::into).collect();
                plot_ui.line(
                    Line::new(series.name.clone(), PlotPoints::new(points))
                        .color(color)
                        .width(width),
                );
            }
        });

    Some(response.response.rect)
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| format!("{:.0}", grid_mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Left)
}
