//! Synthetic data source knobs.
//!
//! The demo source stands in for a remote price service so the viewer runs
//! offline. Output is deterministic per symbol.

pub struct DemoConfig {
    /// Observations generated per symbol
    pub history_len: usize,
    /// Simulated retrieval latency per call (milliseconds)
    pub latency_ms: u64,
    /// Price of the first observation before per-symbol offset is applied
    pub base_price: f64,
    /// Daily drift applied to the synthetic walk (fraction of price)
    pub drift: f64,
    /// Amplitude of the periodic component (fraction of price)
    pub swing: f64,
}

pub const DEMO: DemoConfig = DemoConfig {
    history_len: 500,
    latency_ms: 150,
    base_price: 100.0,
    drift: 0.0008,
    swing: 0.06,
};
