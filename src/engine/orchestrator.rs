use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::{JoinSet, spawn_blocking};
use tokio::time::Instant;

use crate::analysis::{
    DeriveError, build_price_series, build_trend_series, extract_window, fit_trend,
    trend_series_name,
};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::PriceHistorySource;
use crate::domain::{NamedSeries, PipelineResult, SymbolSeries, Window};
use crate::engine::error::PipelineError;

/// Runs retrieve -> window -> (price series || trend fit -> trend series) for
/// every symbol concurrently and returns the series in input order.
///
/// The first failing symbol aborts the remaining branches and becomes the
/// returned error. Must be called from within a tokio runtime.
pub async fn run_pipeline(
    symbols: &[String],
    source: Arc<dyn PriceHistorySource>,
    interval: usize,
) -> Result<PipelineResult, PipelineError> {
    if symbols.is_empty() {
        return Err(PipelineError::EmptyInput("symbol list"));
    }
    if interval == 0 {
        return Err(PipelineError::EmptyInput("window size"));
    }

    let start_time = Instant::now();
    log::info!(
        "Pipeline started for {} symbols (window {}, source {})",
        symbols.len(),
        interval,
        source.signature()
    );

    // Task id -> slot in the output, so fan-in never depends on completion order
    let mut workers = JoinSet::new();
    let mut slot_of = HashMap::with_capacity(symbols.len());
    for (slot, symbol) in symbols.iter().enumerate() {
        let handle = workers.spawn(process_symbol(symbol.clone(), Arc::clone(&source), interval));
        slot_of.insert(handle.id(), slot);
    }

    let mut slots: Vec<Option<SymbolSeries>> = (0..symbols.len()).map(|_| None).collect();
    while let Some(joined) = workers.join_next_with_id().await {
        let outcome = match joined {
            Ok((id, branch)) => branch.map(|series| (id, series)),
            Err(join_error) => {
                let symbol = slot_of
                    .get(&join_error.id())
                    .map(|&slot| symbols[slot].clone())
                    .unwrap_or_default();
                Err(PipelineError::Worker {
                    symbol,
                    source: join_error,
                })
            }
        };

        match outcome {
            Ok((id, series)) => {
                if let Some(&slot) = slot_of.get(&id) {
                    slots[slot] = Some(series);
                }
            }
            Err(e) => {
                workers.abort_all();
                log::error!("❌ Pipeline aborted after {:?}: {}", start_time.elapsed(), e);
                return Err(e);
            }
        }
    }

    let result: PipelineResult = slots.into_iter().flatten().collect();
    debug_assert_eq!(result.len(), symbols.len() * 2);

    log::info!(
        "✅ Pipeline produced {} series in {:?}",
        result.len(),
        start_time.elapsed()
    );
    Ok(result)
}

/// One symbol's branch. Owns everything it creates; nothing is shared with
/// sibling branches except the read-only source.
async fn process_symbol(
    symbol: String,
    source: Arc<dyn PriceHistorySource>,
    interval: usize,
) -> Result<SymbolSeries, PipelineError> {
    let start_time = Instant::now();

    let history = source
        .retrieve(&symbol)
        .await
        .map_err(|source| PipelineError::Retrieval {
            symbol: symbol.clone(),
            source,
        })?;
    if history.is_empty() {
        return Err(PipelineError::Retrieval {
            symbol,
            source: anyhow::anyhow!("source returned no data"),
        });
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_history_span {
        log::info!(
            "{}: {} observations ({})",
            symbol,
            history.len(),
            history.span_label()
        );
    }

    let derive_err = |source: DeriveError| PipelineError::Derivation {
        symbol: symbol.clone(),
        source,
    };
    let window = Arc::new(extract_window(&history, interval).map_err(derive_err)?);
    drop(history);

    let price_task = spawn_blocking({
        let window = Arc::clone(&window);
        let name = symbol.clone();
        move || build_price_series(&window, &name)
    });
    let trend_task = spawn_blocking({
        let window = Arc::clone(&window);
        let name = trend_series_name(&symbol);
        move || derive_trend_series(&window, &name)
    });

    let (price, trend) = futures::future::try_join(price_task, trend_task)
        .await
        .map_err(|source| PipelineError::Worker {
            symbol: symbol.clone(),
            source,
        })?;
    let series = SymbolSeries {
        price: price.map_err(derive_err)?,
        trend: trend.map_err(derive_err)?,
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_symbol_timings {
        log::info!("{} derived in {:?}", symbol, start_time.elapsed());
    }
    #[cfg(not(debug_assertions))]
    let _ = start_time;

    Ok(series)
}

fn derive_trend_series(window: &Window, name: &str) -> Result<NamedSeries, DeriveError> {
    let trend = fit_trend(window.values())?;
    build_trend_series(&trend, name, window.len())
}
