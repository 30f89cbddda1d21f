//! Binance-specific configuration constants and types.

/// Configuration for Binance REST API client
/// (This is the runtime struct used by the Http Client)
pub struct BinanceApiConfig {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

impl Default for BinanceApiConfig {
    fn default() -> Self {
        Self {
            timeout_ms: BINANCE.client.timeout_ms,
            retries: BINANCE.client.retries,
            backoff_ms: BINANCE.client.backoff_ms,
        }
    }
}

/// Configuration for REST API Limits
pub struct RestLimits {
    /// Number of klines requested per symbol (Binance caps this at 1000)
    pub klines_limit: i32,
    /// Kline width used for every request
    pub interval_ms: i64,
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    // The SDK's own transport retries. The pipeline itself never retries.
    pub retries: u32,
    pub backoff_ms: u64,
}

/// The Master Configuration Struct
pub struct BinanceConfig {
    pub limits: RestLimits,
    pub client: ClientDefaults,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    limits: RestLimits {
        klines_limit: 1000,
        interval_ms: crate::utils::TimeUtils::MS_IN_D,
    },
    client: ClientDefaults {
        timeout_ms: 5000,
        retries: 0,
        backoff_ms: 0,
    },
};
