use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;

use crate::data::source::PriceHistorySource;
use crate::domain::{PriceObservation, SymbolHistory};

/// Reads `<dir>/<SYMBOL>.json`. The file is either a list of observations
/// (`[{"open_timestamp_ms": .., "close": ..}, ..]`) or a bare list of closes,
/// oldest first.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HistoryFile {
    Observations(Vec<PriceObservation>),
    Closes(Vec<f64>),
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding `symbol`'s history. Symbols that could name a path
    /// outside the directory are rejected.
    pub fn path_for(&self, symbol: &str) -> Result<PathBuf> {
        if symbol.is_empty()
            || symbol.contains("..")
            || symbol.contains(['/', '\\'])
            || Path::new(symbol).is_absolute()
        {
            bail!("{:?} is not a valid symbol file name", symbol);
        }
        Ok(self.dir.join(format!("{}.json", symbol)))
    }
}

fn parse_history(symbol: &str, content: &str) -> Result<SymbolHistory> {
    let parsed: HistoryFile = serde_json::from_str(content)
        .with_context(|| format!("{}: not a list of observations or closes", symbol))?;

    let history = match parsed {
        HistoryFile::Observations(observations) => {
            if observations
                .windows(2)
                .any(|w| w[0].open_timestamp_ms > w[1].open_timestamp_ms)
            {
                bail!("{}: observations are not in chronological order", symbol);
            }
            SymbolHistory::new(symbol, observations)
        }
        HistoryFile::Closes(closes) => SymbolHistory::from_closes(symbol, &closes),
    };
    Ok(history)
}

#[async_trait]
impl PriceHistorySource for JsonDirSource {
    fn signature(&self) -> &'static str {
        "JSON Directory"
    }

    async fn retrieve(&self, symbol: &str) -> Result<SymbolHistory> {
        let path = self.path_for(symbol)?;
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_history(symbol, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_closes() {
        let history = parse_history("A", "[1.0, 2.5, 3]").unwrap();
        assert_eq!(history.closes().collect::<Vec<_>>(), vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn parses_observations() {
        let json = r#"[{"open_timestamp_ms": 10, "close": 1.0}, {"open_timestamp_ms": 20, "close": 2.0}]"#;
        let history = parse_history("A", json).unwrap();
        assert_eq!(history.observations[1], PriceObservation::new(20, 2.0));
    }

    #[test]
    fn rejects_out_of_order_observations() {
        let json = r#"[{"open_timestamp_ms": 20, "close": 1.0}, {"open_timestamp_ms": 10, "close": 2.0}]"#;
        assert!(parse_history("A", json).is_err());
    }

    #[test]
    fn symbols_cannot_escape_data_dir() {
        let source = JsonDirSource::new("data");
        assert_eq!(source.path_for("MSFT").unwrap(), PathBuf::from("data").join("MSFT.json"));
        for symbol in ["../x", "a/b", "..", "a\\b", "/etc/passwd", ""] {
            assert!(source.path_for(symbol).is_err(), "{:?} accepted", symbol);
        }
    }

    #[tokio::test]
    async fn traversal_symbol_fails_retrieval() {
        let source = JsonDirSource::new(std::env::temp_dir());
        assert!(source.retrieve("../secret").await.is_err());
    }

    #[tokio::test]
    async fn missing_file_names_path() {
        let source = JsonDirSource::new(std::env::temp_dir().join("trend-viewer-no-such-dir"));
        let err = source.retrieve("MSFT").await.unwrap_err();
        assert!(format!("{:#}", err).contains("MSFT.json"));
    }
}
