use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::PIPELINE;
use crate::data::{PriceHistorySource, SourceKind, SourceSelection};
use crate::engine::PipelineOutcome;
use crate::ui::surface::ChartSurface;
use crate::ui::utils::setup_custom_visuals;

/// What the user can edit, persisted between sessions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerSettings {
    pub symbols_text: String,
    pub interval: usize,
    pub output_name: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            symbols_text: PIPELINE.symbols.join(", "),
            interval: PIPELINE.interval,
            output_name: PIPELINE.output_name.to_string(),
        }
    }
}

/// Overrides from the command line. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub symbols: Option<Vec<String>>,
    pub interval: Option<usize>,
    pub output_name: Option<String>,
}

impl ViewerSettings {
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Self {
        if let Some(symbols) = &overrides.symbols {
            self.symbols_text = symbols.join(", ");
        }
        if let Some(interval) = overrides.interval {
            self.interval = interval;
        }
        if let Some(name) = &overrides.output_name {
            self.output_name = name.clone();
        }
        self
    }
}

/// Summary of the last delivered chart, for the status bar.
#[derive(Debug, Clone)]
pub(super) struct RunSummary {
    pub(super) symbol_count: usize,
    pub(super) series_count: usize,
    pub(super) elapsed: Duration,
    pub(super) image_path: Option<PathBuf>,
}

pub struct TrendViewerApp {
    pub(super) settings: ViewerSettings,
    pub(super) source: Arc<dyn PriceHistorySource>,
    pub(super) source_selection: SourceSelection,
    pub(super) runtime: Handle,
    pub(super) pipeline_promise: Option<Promise<PipelineOutcome>>,
    pub(super) surface: ChartSurface,
    pub(super) last_run: Option<RunSummary>,
    pub(super) last_error: Option<String>,
}

impl TrendViewerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        source: Arc<dyn PriceHistorySource>,
        source_selection: SourceSelection,
        runtime: Handle,
        overrides: SettingsOverrides,
        out_dir: PathBuf,
    ) -> Self {
        let stored: ViewerSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Restored settings: {:?}", stored);
        }

        setup_custom_visuals(&cc.egui_ctx);

        Self {
            settings: stored.with_overrides(&overrides),
            source,
            source_selection,
            runtime,
            pipeline_promise: None,
            surface: ChartSurface::new(out_dir),
            last_run: None,
            last_error: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.pipeline_promise.is_some()
    }

    /// Rebuilds the price source. Runs already in flight keep the old one.
    pub(super) fn switch_source(&mut self, kind: SourceKind) {
        if kind == self.source_selection.kind {
            return;
        }
        let selection = self.source_selection.with_kind(kind);
        match selection.build() {
            Ok(source) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("Source switched to {}", source.signature());
                }
                self.source = source;
                self.source_selection = selection;
                self.last_error = None;
            }
            Err(e) => {
                log::error!("❌ Cannot use {} source: {:#}", kind, e);
                self.last_error = Some(format!("{:#}", e));
            }
        }
    }
}

impl eframe::App for TrendViewerApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Shutting down; pending pipeline: {}", self.is_running());
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Saving settings: {:?}", self.settings);
        }
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.surface.handle_screenshots(ctx);
        self.poll_pipeline(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // After the chart is drawn, so the capture shows the delivered series
        self.surface.request_pending_capture(ctx);
        if self.surface.capture_pending() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let stored = ViewerSettings {
            symbols_text: "X".to_string(),
            interval: 10,
            output_name: "old".to_string(),
        };
        let overrides = SettingsOverrides {
            symbols: Some(vec!["A".to_string(), "B".to_string()]),
            interval: None,
            output_name: None,
        };
        let merged = stored.with_overrides(&overrides);
        assert_eq!(merged.symbols_text, "A, B");
        assert_eq!(merged.interval, 10);
        assert_eq!(merged.output_name, "old");
    }

    #[test]
    fn default_settings_match_pipeline_config() {
        let settings = ViewerSettings::default();
        assert_eq!(settings.symbols_text, "MSFT, AAPL, GOOG");
        assert_eq!(settings.interval, 200);
        assert_eq!(settings.output_name, "chart");
    }

    #[test]
    fn settings_survive_serde_with_missing_fields() {
        let parsed: ViewerSettings = serde_json::from_str(r#"{"interval": 7}"#).unwrap();
        assert_eq!(parsed.interval, 7);
        assert_eq!(parsed.output_name, "chart");
    }
}
