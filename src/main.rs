#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eframe::NativeOptions;
use tokio::runtime::Runtime;

use trend_viewer::ui::config::UI_TEXT;
use trend_viewer::{Cli, run_app, run_headless};

const APP_STATE_PATH: &str = "app_state.json";

fn main() -> ExitCode {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    use anyhow::Context;

    // C. Source and runtime shared by every pipeline run
    let source = args.source_selection().build()?;
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;

    if args.headless {
        let report = run_headless(&rt, &args, source)?;
        // The chart was produced; a failed write is still a failed run
        let path = report.persisted?;
        log::info!("✅ {} series written to {}", report.series_count, path.display());
        return Ok(());
    }

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };
    let handle = rt.handle().clone();

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, &args, source, handle))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}
