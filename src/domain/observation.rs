use serde::{Deserialize, Serialize};

use crate::utils::time_utils;

/// A single retrieved data point. Only the close is used downstream; the
/// timestamp is kept for logging and export.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceObservation {
    pub open_timestamp_ms: i64,
    pub close: f64,
}

impl PriceObservation {
    pub fn new(open_timestamp_ms: i64, close: f64) -> Self {
        Self {
            open_timestamp_ms,
            close,
        }
    }
}

/// Full chronological history for one symbol, as produced by a retrieval.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SymbolHistory {
    pub symbol: String,
    pub observations: Vec<PriceObservation>,
}

impl SymbolHistory {
    pub fn new(symbol: impl Into<String>, observations: Vec<PriceObservation>) -> Self {
        Self {
            symbol: symbol.into(),
            observations,
        }
    }

    /// Builds a history from bare closing values, stamping each one with its
    /// position so ordering survives export.
    pub fn from_closes(symbol: impl Into<String>, closes: &[f64]) -> Self {
        let observations = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceObservation::new(i as i64, close))
            .collect();
        Self::new(symbol, observations)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn closes(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.observations.iter().map(|o| o.close)
    }

    /// Human readable span, e.g. "2024-01-02 .. 2024-10-15" (for logs only).
    pub fn span_label(&self) -> String {
        match (self.observations.first(), self.observations.last()) {
            (Some(first), Some(last)) => format!(
                "{} .. {}",
                time_utils::epoch_ms_to_utc(first.open_timestamp_ms),
                time_utils::epoch_ms_to_utc(last.open_timestamp_ms)
            ),
            _ => String::from("empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_closes_keeps_order() {
        let history = SymbolHistory::from_closes("A", &[1.0, 2.0, 3.0]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.closes().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
        assert_eq!(history.observations[2].open_timestamp_ms, 2);
    }

    #[test]
    fn empty_history_has_empty_span() {
        let history = SymbolHistory::new("A", Vec::new());
        assert!(history.is_empty());
        assert_eq!(history.span_label(), "empty");
    }
}
