//! Pipeline configuration: which symbols, how much history, where the image goes.

pub struct PipelineConfig {
    /// Symbols charted by default, in display order
    pub symbols: &'static [&'static str],
    /// Number of most recent observations per symbol (the window size)
    pub interval: usize,
    /// Image file stem written after a successful display ("<name>.jpg")
    pub output_name: &'static str,
}

pub const PIPELINE: PipelineConfig = PipelineConfig {
    symbols: &["MSFT", "AAPL", "GOOG"],
    interval: 200,
    output_name: "chart",
};

/// Extension appended to `output_name` by every sink that persists images.
pub const IMAGE_EXTENSION: &str = "jpg";

impl PipelineConfig {
    pub fn default_symbols(&self) -> Vec<String> {
        self.symbols.iter().map(|s| s.to_string()).collect()
    }
}
