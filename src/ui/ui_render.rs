use eframe::egui::{
    Button, CentralPanel, ComboBox, Context, DragValue, Frame, Margin, SidePanel, TextEdit,
    TopBottomPanel,
};
use strum::IntoEnumIterator;

use crate::data::SourceKind;

use crate::ui::app::TrendViewerApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::surface::CaptureStatus;
use crate::ui::utils::{parse_symbols, section_heading, spaced_separator};

impl TrendViewerApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 8));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                section_heading(ui, UI_TEXT.settings_heading);

                ui.label(UI_TEXT.symbols_label);
                ui.add(
                    TextEdit::singleline(&mut self.settings.symbols_text)
                        .hint_text(UI_TEXT.symbols_hint),
                );
                ui.label_subdued(format!(
                    "{} symbol(s)",
                    parse_symbols(&self.settings.symbols_text).len()
                ));

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(UI_TEXT.interval_label);
                    ui.add(DragValue::new(&mut self.settings.interval).range(1..=5000));
                });

                ui.add_space(6.0);
                ui.label(UI_TEXT.output_label);
                ui.text_edit_singleline(&mut self.settings.output_name);

                spaced_separator(ui);

                let running = self.is_running();
                let label = if running {
                    UI_TEXT.running
                } else {
                    UI_TEXT.display_button
                };
                if ui.add_enabled(!running, Button::new(label)).clicked() {
                    self.start_pipeline();
                }
                if running {
                    ui.spinner();
                }

                spaced_separator(ui);
                let mut picked = self.source_selection.kind;
                ui.add_enabled_ui(!running, |ui| {
                    ComboBox::from_label(UI_TEXT.source_label)
                        .selected_text(picked.to_string())
                        .show_ui(ui, |ui| {
                            for kind in SourceKind::iter() {
                                ui.selectable_value(&mut picked, kind, kind.to_string());
                            }
                        });
                });
                self.switch_source(picked);
                ui.metric(UI_TEXT.source_label, self.source.signature(), UI_CONFIG.colors.ok);
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                if let Some(rect) = crate::ui::plot_view::show_chart(ui, &self.surface) {
                    self.surface.set_plot_rect(rect);
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(run) = &self.last_run {
                        ui.metric("📈", &format!("{} symbols", run.symbol_count), UI_CONFIG.colors.ok);
                        ui.separator();
                        ui.metric("Series", &run.series_count.to_string(), UI_CONFIG.colors.ok);
                        ui.separator();
                        ui.metric(
                            "⏱",
                            &format!("{:.0} ms", run.elapsed.as_secs_f64() * 1000.0),
                            UI_CONFIG.colors.label,
                        );
                        if let Some(path) = &run.image_path {
                            ui.separator();
                            ui.label_subdued(path.display().to_string());
                        }
                    }

                    match self.surface.last_capture() {
                        Some(CaptureStatus::Saved(path)) => {
                            ui.separator();
                            ui.metric("💾", &path.display().to_string(), UI_CONFIG.colors.ok);
                        }
                        Some(CaptureStatus::Failed(msg)) => {
                            ui.separator();
                            ui.label_warning(format!("Save failed: {}", msg));
                        }
                        None => {}
                    }

                    if let Some(err) = &self.last_error {
                        ui.separator();
                        ui.label_error(err);
                    }
                });
            });
    }
}
