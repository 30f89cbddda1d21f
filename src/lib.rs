#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod headless;
pub mod sink;
pub mod ui;
pub mod utils;

// The concurrent pipeline and its delivery contract
pub mod engine;

use std::path::PathBuf;
use std::sync::Arc;

// Re-export commonly used types
pub use data::{PriceHistorySource, SourceKind, SourceSelection, build_source};
pub use domain::{NamedSeries, PipelineResult, SymbolHistory};
pub use engine::{ChartSink, PipelineError, deliver, run_pipeline};
pub use headless::run_headless;
pub use ui::TrendViewerApp;

// CLI argument parsing
use clap::Parser;

use crate::config::PIPELINE;
use crate::ui::SettingsOverrides;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Symbols to chart, in display order (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub symbols: Option<Vec<String>>,

    /// Number of most recent closes to fit and draw
    #[arg(long)]
    pub interval: Option<usize>,

    /// Where price histories come from
    #[arg(long, value_enum, default_value_t = SourceKind::Demo)]
    pub source: SourceKind,

    /// Directory of `<SYMBOL>.json` histories (json source)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Image name without extension
    #[arg(long)]
    pub output: Option<String>,

    /// Directory the image is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Run once without a window and exit
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Also write the series as JSON (headless only)
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Simulated per-symbol fetch latency for the demo source
    #[arg(long)]
    pub demo_latency_ms: Option<u64>,
}

impl Cli {
    pub fn symbols_or_default(&self) -> Vec<String> {
        self.symbols
            .clone()
            .unwrap_or_else(|| PIPELINE.default_symbols())
    }

    pub fn interval_or_default(&self) -> usize {
        self.interval.unwrap_or(PIPELINE.interval)
    }

    pub fn output_or_default(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| PIPELINE.output_name.to_string())
    }

    pub fn source_selection(&self) -> SourceSelection {
        SourceSelection {
            kind: self.source,
            data_dir: self.data_dir.clone(),
            demo_latency_ms: self.demo_latency_ms,
        }
    }

    /// Only what was given explicitly; the GUI keeps its stored values otherwise.
    pub fn settings_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            symbols: self.symbols.clone(),
            interval: self.interval,
            output_name: self.output.clone(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    args: &Cli,
    source: Arc<dyn PriceHistorySource>,
    runtime: tokio::runtime::Handle,
) -> Box<dyn eframe::App> {
    let app = TrendViewerApp::new(
        cc,
        source,
        args.source_selection(),
        runtime,
        args.settings_overrides(),
        args.out_dir.clone(),
    );
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_follow_pipeline_config() {
        let args = Cli::parse_from(["trend-viewer"]);
        assert_eq!(args.symbols_or_default(), vec!["MSFT", "AAPL", "GOOG"]);
        assert_eq!(args.interval_or_default(), 200);
        assert_eq!(args.output_or_default(), "chart");
        assert_eq!(args.source, SourceKind::Demo);
        assert!(!args.headless);
        assert!(args.settings_overrides().symbols.is_none());
    }

    #[test]
    fn cli_parses_symbol_list_in_order() {
        let args = Cli::parse_from([
            "trend-viewer",
            "--symbols",
            "GOOG,MSFT",
            "--source",
            "json",
            "--data-dir",
            "data",
        ]);
        assert_eq!(args.symbols_or_default(), vec!["GOOG", "MSFT"]);
        assert_eq!(args.source, SourceKind::Json);
        assert_eq!(args.data_dir, Some(PathBuf::from("data")));
        assert_eq!(args.source_selection().kind, SourceKind::Json);
    }
}
