use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use crate::Cli;
use crate::data::PriceHistorySource;
use crate::domain::PipelineResult;
use crate::engine::{DeliveryReport, deliver, run_pipeline};
use crate::sink::ImageSink;

/// Runs one pipeline without a window and hands the result to an
/// `ImageSink`. Any pipeline failure is returned as an error and no image is
/// written.
pub fn run_headless(
    runtime: &Runtime,
    args: &Cli,
    source: Arc<dyn PriceHistorySource>,
) -> Result<DeliveryReport> {
    let symbols = args.symbols_or_default();
    let interval = args.interval_or_default();
    log::info!(
        "🚀 Headless run: {:?} (window {}) from {}",
        symbols,
        interval,
        source.signature()
    );

    let outcome = runtime.block_on(run_pipeline(&symbols, source, interval));

    if let (Some(path), Ok(result)) = (&args.export_json, &outcome) {
        export_json(result, path)?;
    }

    let mut sink = ImageSink::new(&args.out_dir);
    let report = deliver(outcome, &mut sink, &args.output_or_default())?;
    Ok(report)
}

/// Writes the ordered series list as pretty JSON.
pub fn export_json(result: &PipelineResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("Failed to serialise result")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Exported {} series to {}", result.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemorySource;
    use clap::Parser;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("trend_viewer_headless_{}_{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn source() -> Arc<dyn PriceHistorySource> {
        Arc::new(
            InMemorySource::new()
                .with_history("A", &[1.0, 2.0, 3.0, 4.0])
                .with_history("B", &[4.0, 3.0, 2.0, 1.0]),
        )
    }

    #[test]
    fn successful_run_writes_image_and_json() {
        let dir = temp_dir("ok");
        let json_path = dir.join("result.json");
        let args = Cli::parse_from([
            "trend-viewer",
            "--headless",
            "--symbols",
            "A,B",
            "--interval",
            "3",
            "--out-dir",
            dir.to_str().unwrap(),
            "--export-json",
            json_path.to_str().unwrap(),
        ]);
        let rt = Runtime::new().unwrap();

        let report = run_headless(&rt, &args, source()).unwrap();
        assert_eq!(report.series_count, 4);
        let image = report.persisted.unwrap();
        assert_eq!(image, dir.join("chart.jpg"));
        assert!(image.exists());

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        let names: Vec<&str> = json["series"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["A", "A Trend", "B", "B Trend"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn failed_run_writes_nothing() {
        let dir = temp_dir("fail");
        let json_path = dir.join("result.json");
        let args = Cli::parse_from([
            "trend-viewer",
            "--headless",
            "--symbols",
            "A,B",
            "--interval",
            "10",
            "--out-dir",
            dir.to_str().unwrap(),
            "--export-json",
            json_path.to_str().unwrap(),
        ]);
        let rt = Runtime::new().unwrap();

        assert!(run_headless(&rt, &args, source()).is_err());
        assert!(!dir.join("chart.jpg").exists());
        assert!(!json_path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
