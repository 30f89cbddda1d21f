use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::PipelineResult;
use crate::engine::error::PipelineError;

/// The rendering/persistence surface a finished result is handed to.
///
/// Implementations are only ever driven from one thread: whoever owns the
/// surface calls `deliver` with a completed outcome.
pub trait ChartSink {
    /// Replace whatever is currently shown with `result`.
    fn display(&mut self, result: &PipelineResult) -> Result<()>;

    /// Write the currently displayed chart to `<output_name>.jpg` and return the
    /// path. Only called after a successful `display` of the same run.
    fn persist(&mut self, output_name: &str) -> Result<PathBuf>;
}

#[derive(Debug)]
pub struct DeliveryReport {
    pub series_count: usize,
    /// A failed write does not undo the display.
    pub persisted: Result<PathBuf>,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("pipeline failed, chart left unchanged: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("display failed: {0:#}")]
    Display(anyhow::Error),
}

/// Hands a finished pipeline outcome to `sink`, all or nothing: a failed run
/// never reaches the sink, a successful one is displayed once and then
/// persisted.
pub fn deliver(
    outcome: Result<PipelineResult, PipelineError>,
    sink: &mut dyn ChartSink,
    output_name: &str,
) -> Result<DeliveryReport, DeliveryError> {
    let result = outcome?;

    sink.display(&result).map_err(DeliveryError::Display)?;
    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_sink_events {
        log::info!("Displayed {} series: {:?}", result.len(), result.names());
    }

    let persisted = sink.persist(output_name);
    match &persisted {
        Ok(path) => log::info!("Chart image: {}", path.display()),
        Err(e) => log::error!("⚠️  Failed to save chart image: {:#}", e),
    }

    Ok(DeliveryReport {
        series_count: result.len(),
        persisted,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analysis::DeriveError;
    use crate::data::InMemorySource;
    use crate::domain::{NamedSeries, SeriesPoint, SymbolSeries};
    use crate::engine::run_pipeline;
    use anyhow::bail;
    use std::sync::Arc;
    use std::time::Duration;

    /// Records every call; optionally fails display or persist.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub displayed: Vec<Vec<String>>,
        pub persisted: Vec<String>,
        pub calls: Vec<&'static str>,
        pub fail_display: bool,
        pub fail_persist: bool,
    }

    impl ChartSink for RecordingSink {
        fn display(&mut self, result: &PipelineResult) -> Result<()> {
            self.calls.push("display");
            if self.fail_display {
                bail!("surface gone");
            }
            self.displayed
                .push(result.names().into_iter().map(String::from).collect());
            Ok(())
        }

        fn persist(&mut self, output_name: &str) -> Result<PathBuf> {
            self.calls.push("persist");
            if self.fail_persist {
                bail!("disk full");
            }
            self.persisted.push(output_name.to_string());
            Ok(PathBuf::from(format!("{}.jpg", output_name)))
        }
    }

    fn sample_result() -> PipelineResult {
        let line = |name: &str| NamedSeries::new(name, vec![SeriesPoint::new(1.0, 2.0)]);
        std::iter::once(SymbolSeries {
            price: line("A"),
            trend: line("A Trend"),
        })
        .collect()
    }

    #[test]
    fn success_displays_then_persists() {
        let mut sink = RecordingSink::default();
        let report = deliver(Ok(sample_result()), &mut sink, "chart").unwrap();

        assert_eq!(sink.calls, vec!["display", "persist"]);
        assert_eq!(sink.displayed, vec![vec!["A", "A Trend"]]);
        assert_eq!(report.series_count, 2);
        assert_eq!(report.persisted.unwrap(), PathBuf::from("chart.jpg"));
    }

    #[test]
    fn failed_pipeline_never_touches_sink() {
        let mut sink = RecordingSink::default();
        let outcome = Err(PipelineError::Derivation {
            symbol: "A".to_string(),
            source: DeriveError::InsufficientData {
                required: 3,
                available: 2,
            },
        });

        let err = deliver(outcome, &mut sink, "chart").unwrap_err();
        assert!(matches!(err, DeliveryError::Pipeline(_)));
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn persist_failure_keeps_display() {
        let mut sink = RecordingSink {
            fail_persist: true,
            ..Default::default()
        };
        let report = deliver(Ok(sample_result()), &mut sink, "chart").unwrap();

        assert_eq!(sink.displayed.len(), 1);
        assert!(report.persisted.is_err());
    }

    #[test]
    fn display_failure_skips_persist() {
        let mut sink = RecordingSink {
            fail_display: true,
            ..Default::default()
        };
        let err = deliver(Ok(sample_result()), &mut sink, "chart").unwrap_err();

        assert!(matches!(err, DeliveryError::Display(_)));
        assert_eq!(sink.calls, vec!["display"]);
    }

    fn symbols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn failed_retrieval_reaches_no_sink_call() {
        let source = InMemorySource::new()
            .with_history("A", &[1.0, 2.0, 3.0, 4.0])
            .with_delay("A", Duration::from_millis(30))
            .with_failure("B", "service unavailable");
        let outcome = run_pipeline(&symbols(&["A", "B"]), Arc::new(source), 3).await;

        let mut sink = RecordingSink::default();
        let err = deliver(outcome, &mut sink, "chart").unwrap_err();

        assert!(matches!(
            err,
            DeliveryError::Pipeline(PipelineError::Retrieval { ref symbol, .. }) if symbol == "B"
        ));
        assert!(sink.calls.is_empty());
    }

    #[tokio::test]
    async fn short_history_reaches_no_sink_call() {
        let source = InMemorySource::new().with_history("A", &[1.0, 2.0]);
        let outcome = run_pipeline(&symbols(&["A"]), Arc::new(source), 3).await;

        let mut sink = RecordingSink::default();
        let err = deliver(outcome, &mut sink, "chart").unwrap_err();

        match err {
            DeliveryError::Pipeline(e) => assert!(e.is_insufficient_data()),
            other => panic!("unexpected error: {}", other),
        }
        assert!(sink.calls.is_empty());
    }

    #[tokio::test]
    async fn successful_run_is_displayed_once_in_input_order() {
        let source = InMemorySource::new()
            .with_history("A", &[1.0, 2.0, 3.0])
            .with_history("B", &[3.0, 2.0, 1.0])
            .with_delay("A", Duration::from_millis(30));
        let outcome = run_pipeline(&symbols(&["A", "B"]), Arc::new(source), 3).await;

        let mut sink = RecordingSink::default();
        deliver(outcome, &mut sink, "chart").unwrap();

        assert_eq!(sink.calls, vec!["display", "persist"]);
        assert_eq!(sink.displayed, vec![vec!["A", "A Trend", "B", "B Trend"]]);
    }
}
