use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;

use crate::data::source::PriceHistorySource;
use crate::domain::SymbolHistory;

#[derive(Debug, Clone)]
enum Behaviour {
    Fail(String),
    Hang,
}

/// Fixed histories held in memory, with optional per-symbol latency and
/// injected failures. Clones share the call counter.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    histories: HashMap<String, Vec<f64>>,
    delays: HashMap<String, Duration>,
    behaviours: HashMap<String, Behaviour>,
    calls: Arc<AtomicUsize>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, symbol: &str, closes: &[f64]) -> Self {
        self.histories.insert(symbol.to_string(), closes.to_vec());
        self
    }

    pub fn with_delay(mut self, symbol: &str, delay: Duration) -> Self {
        self.delays.insert(symbol.to_string(), delay);
        self
    }

    /// `retrieve(symbol)` fails with `message` (after any configured delay).
    pub fn with_failure(mut self, symbol: &str, message: &str) -> Self {
        self.behaviours
            .insert(symbol.to_string(), Behaviour::Fail(message.to_string()));
        self
    }

    /// `retrieve(symbol)` never completes.
    pub fn with_hang(mut self, symbol: &str) -> Self {
        self.behaviours.insert(symbol.to_string(), Behaviour::Hang);
        self
    }

    /// Number of `retrieve` calls started so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceHistorySource for InMemorySource {
    fn signature(&self) -> &'static str {
        "In Memory"
    }

    async fn retrieve(&self, symbol: &str) -> Result<SymbolHistory> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(symbol) {
            tokio::time::sleep(*delay).await;
        }

        match self.behaviours.get(symbol) {
            Some(Behaviour::Fail(message)) => bail!("{}", message),
            Some(Behaviour::Hang) => std::future::pending::<()>().await,
            None => {}
        }

        self.histories
            .get(symbol)
            .map(|closes| SymbolHistory::from_closes(symbol, closes))
            .ok_or_else(|| anyhow!("unknown symbol {}", symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_history() {
        let source = InMemorySource::new().with_history("A", &[1.0, 2.0]);
        let history = source.retrieve("A").await.unwrap();
        assert_eq!(history.symbol, "A");
        assert_eq!(history.closes().collect::<Vec<_>>(), vec![1.0, 2.0]);
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn unknown_symbol_is_an_error() {
        let source = InMemorySource::new();
        let err = source.retrieve("ZZZ").await.unwrap_err();
        assert!(err.to_string().contains("ZZZ"));
    }

    #[tokio::test]
    async fn injected_failure_wins_over_history() {
        let source = InMemorySource::new()
            .with_history("A", &[1.0])
            .with_failure("A", "service unavailable");
        let err = source.retrieve("A").await.unwrap_err();
        assert_eq!(err.to_string(), "service unavailable");
    }
}
