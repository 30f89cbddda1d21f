pub mod bn_kline;

use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Instant;

use crate::config::BINANCE;
use crate::data::source::PriceHistorySource;
use crate::domain::{PriceObservation, SymbolHistory};
use crate::utils::TimeUtils;

/// Spot klines from the public Binance REST API. Symbols are Binance pair
/// names such as `BTCUSDT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinanceSource;

#[async_trait]
impl PriceHistorySource for BinanceSource {
    fn signature(&self) -> &'static str {
        "Binance API"
    }

    async fn retrieve(&self, symbol: &str) -> Result<SymbolHistory> {
        let start_time = Instant::now();
        let pair_name = symbol.trim().to_uppercase();

        let klines = bn_kline::load_klines(&pair_name).await?;
        log::info!(
            "{} Number of {} klines in Binance data is: {} ({:?})",
            pair_name,
            TimeUtils::interval_to_string(BINANCE.limits.interval_ms),
            klines.len(),
            start_time.elapsed()
        );

        let observations = klines.into_iter().map(PriceObservation::from).collect();
        Ok(SymbolHistory::new(symbol, observations))
    }
}
