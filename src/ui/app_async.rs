use eframe::egui;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::engine::{PipelineRequest, deliver, spawn_pipeline};
use crate::ui::app::{RunSummary, TrendViewerApp};
use crate::ui::utils::parse_symbols;

impl TrendViewerApp {
    /// Kicks off one pipeline run. Ignored while a run is in flight.
    pub(super) fn start_pipeline(&mut self) {
        if self.pipeline_promise.is_some() {
            return;
        }

        let req = PipelineRequest {
            symbols: parse_symbols(&self.settings.symbols_text),
            interval: self.settings.interval,
            source: self.source.clone(),
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!(
                "▶️ Display requested: {:?} (window {}) from {}",
                req.symbols,
                req.interval,
                self.source.signature()
            );
        }

        self.last_error = None;
        self.pipeline_promise = Some(spawn_pipeline(self.runtime.clone(), req));
    }

    /// Delivers a finished run to the on-screen chart. This is the only place
    /// the chart changes.
    pub(super) fn poll_pipeline(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.pipeline_promise.take() else {
            return;
        };
        let outcome = match promise.try_take() {
            Ok(outcome) => outcome,
            Err(still_running) => {
                self.pipeline_promise = Some(still_running);
                ctx.request_repaint();
                return;
            }
        };

        let symbol_count = outcome.symbols.len();
        let elapsed = outcome.elapsed;
        match deliver(outcome.result, &mut self.surface, &self.settings.output_name) {
            Ok(report) => {
                let image_path = match report.persisted {
                    Ok(path) => Some(path),
                    Err(e) => {
                        self.last_error = Some(format!("{:#}", e));
                        None
                    }
                };
                self.last_run = Some(RunSummary {
                    symbol_count,
                    series_count: report.series_count,
                    elapsed,
                    image_path,
                });
            }
            Err(e) => {
                log::error!("❌ {}", e);
                self.last_error = Some(e.to_string());
            }
        }
        ctx.request_repaint();
    }
}
