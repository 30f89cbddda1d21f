use std::time::Duration;

use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::Utc;

use crate::config::DEMO;
use crate::data::source::PriceHistorySource;
use crate::domain::{PriceObservation, SymbolHistory};
use crate::utils::TimeUtils;

/// Generates a daily price walk per symbol. The same symbol always yields the
/// same closes; only the timestamps move with the clock.
#[derive(Debug, Clone)]
pub struct DemoSource {
    history_len: usize,
    latency: Duration,
}

impl Default for DemoSource {
    fn default() -> Self {
        Self {
            history_len: DEMO.history_len,
            latency: Duration::from_millis(DEMO.latency_ms),
        }
    }
}

impl DemoSource {
    pub fn with_latency_ms(mut self, ms: u64) -> Self {
        self.latency = Duration::from_millis(ms);
        self
    }

    pub fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }
}

/// Stable per-symbol seed in [0, 1).
fn symbol_seed(symbol: &str) -> f64 {
    let hash = symbol
        .bytes()
        .fold(2166136261u32, |h, b| (h ^ b as u32).wrapping_mul(16777619));
    (hash % 10_000) as f64 / 10_000.0
}

pub fn synthetic_closes(symbol: &str, len: usize) -> Vec<f64> {
    let seed = symbol_seed(symbol);
    let start = DEMO.base_price * (1.0 + 4.0 * seed);
    let drift = DEMO.drift * (seed - 0.3);
    let period = 20.0 + 60.0 * seed;
    let phase = seed * std::f64::consts::TAU;

    (0..len)
        .map(|i| {
            let t = i as f64;
            let trend = 1.0 + drift * t;
            let swing = 1.0 + DEMO.swing * (t / period * std::f64::consts::TAU + phase).sin();
            let wobble = 1.0 + 0.01 * (t * 1.7 + phase).sin() * (t * 0.31).cos();
            start * trend * swing * wobble
        })
        .collect()
}

#[async_trait]
impl PriceHistorySource for DemoSource {
    fn signature(&self) -> &'static str {
        "Demo Data"
    }

    async fn retrieve(&self, symbol: &str) -> Result<SymbolHistory> {
        if symbol.trim().is_empty() {
            bail!("blank symbol");
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let closes = synthetic_closes(symbol, self.history_len);
        let today_ms = Utc::now().timestamp_millis() / TimeUtils::MS_IN_D * TimeUtils::MS_IN_D;
        let first_ms = today_ms - (self.history_len as i64 - 1) * TimeUtils::MS_IN_D;

        let observations = closes
            .into_iter()
            .enumerate()
            .map(|(i, close)| PriceObservation::new(first_ms + i as i64 * TimeUtils::MS_IN_D, close))
            .collect();
        Ok(SymbolHistory::new(symbol, observations))
    }
}
