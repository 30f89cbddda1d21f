use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::data::binance::BinanceSource;
use crate::data::demo::DemoSource;
use crate::data::json_dir::JsonDirSource;
use crate::domain::SymbolHistory;

/// Anything that can hand back the full price history of one symbol.
///
/// Implementations are shared across concurrently running symbol tasks, so
/// they must tolerate parallel `retrieve` calls for distinct symbols.
#[async_trait]
pub trait PriceHistorySource: Send + Sync {
    /// Chronologically ordered history for `symbol`, or an error describing
    /// why it could not be fetched.
    async fn retrieve(&self, symbol: &str) -> Result<SymbolHistory>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Selectable on the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum SourceKind {
    /// Deterministic synthetic prices, no network
    #[strum(serialize = "demo")]
    Demo,
    /// One JSON file per symbol in a directory
    #[strum(serialize = "json")]
    Json,
    /// Binance spot klines
    #[strum(serialize = "binance")]
    Binance,
}

pub fn build_source(
    kind: SourceKind,
    data_dir: Option<PathBuf>,
    demo_latency_ms: Option<u64>,
) -> Result<Arc<dyn PriceHistorySource>> {
    let source: Arc<dyn PriceHistorySource> = match kind {
        SourceKind::Demo => {
            let mut demo = DemoSource::default();
            if let Some(ms) = demo_latency_ms {
                demo = demo.with_latency_ms(ms);
            }
            Arc::new(demo)
        }
        SourceKind::Json => match data_dir {
            Some(dir) => Arc::new(JsonDirSource::new(dir)),
            None => bail!("--data-dir is required for the json source"),
        },
        SourceKind::Binance => Arc::new(BinanceSource),
    };
    log::info!("Using price source: {}", source.signature());
    Ok(source)
}

/// A source kind plus the options needed to build it, so a running app can
/// switch kinds without going back to the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSelection {
    pub kind: SourceKind,
    pub data_dir: Option<PathBuf>,
    pub demo_latency_ms: Option<u64>,
}

impl SourceSelection {
    pub fn build(&self) -> Result<Arc<dyn PriceHistorySource>> {
        build_source(self.kind, self.data_dir.clone(), self.demo_latency_ms)
    }

    pub fn with_kind(&self, kind: SourceKind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use strum::IntoEnumIterator;

    #[test]
    fn every_kind_is_listed_and_parses_from_its_name() {
        let kinds: Vec<SourceKind> = SourceKind::iter().collect();
        assert_eq!(kinds, vec![SourceKind::Demo, SourceKind::Json, SourceKind::Binance]);
        for kind in kinds {
            assert_eq!(SourceKind::from_str(&kind.to_string(), false), Ok(kind));
        }
    }

    #[test]
    fn json_needs_a_data_dir() {
        let selection = SourceSelection {
            kind: SourceKind::Demo,
            data_dir: None,
            demo_latency_ms: Some(0),
        };
        assert!(selection.build().is_ok());
        assert!(selection.with_kind(SourceKind::Json).build().is_err());

        let with_dir = SourceSelection {
            data_dir: Some(PathBuf::from("data")),
            ..selection.with_kind(SourceKind::Json)
        };
        assert_eq!(with_dir.build().unwrap().signature(), "JSON Directory");
    }
}
