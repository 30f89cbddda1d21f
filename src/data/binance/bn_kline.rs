// Std library crates
use std::convert::TryFrom;
use std::fmt;

// External crates
use anyhow::{Result, bail};
use binance_sdk::config::ConfigurationRestApi;
use binance_sdk::spot::{
    SpotRestApi,
    rest_api::{KlinesIntervalEnum, KlinesItemInner, KlinesParams, RestApi},
};
use binance_sdk::{errors, errors::ConnectorError as connection_error};

// Local crates
use crate::config::binance::{BINANCE, BinanceApiConfig};
use crate::domain::PriceObservation;
use crate::utils::TimeUtils;

// "MS -> Enum". Returns Result instead of panicking.
pub fn try_interval_from_ms(ms: i64) -> Result<KlinesIntervalEnum, String> {
    match ms {
        TimeUtils::MS_IN_MIN => Ok(KlinesIntervalEnum::Interval1m),
        TimeUtils::MS_IN_15_MIN => Ok(KlinesIntervalEnum::Interval15m),
        TimeUtils::MS_IN_30_MIN => Ok(KlinesIntervalEnum::Interval30m),
        TimeUtils::MS_IN_H => Ok(KlinesIntervalEnum::Interval1h),
        TimeUtils::MS_IN_4_H => Ok(KlinesIntervalEnum::Interval4h),
        TimeUtils::MS_IN_D => Ok(KlinesIntervalEnum::Interval1d),
        TimeUtils::MS_IN_W => Ok(KlinesIntervalEnum::Interval1w),
        _ => Err(format!("Unsupported interval: {}ms", ms)),
    }
}

/// The two kline fields the viewer needs.
#[derive(Debug, PartialEq)]
pub struct BNKline {
    pub open_timestamp_ms: i64,
    pub close_price: f64,
}

// Custom error type for BNKline for better error messages.
#[derive(Debug)]
pub enum BNKlineError {
    InvalidLength,
    InvalidType(String),
    ConnectionFailed(String),
}

impl fmt::Display for BNKlineError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BNKlineError::InvalidLength => write!(f, "Invalid length"),
            BNKlineError::InvalidType(string) => write!(f, "Invalid type: {}", string),
            BNKlineError::ConnectionFailed(msg) => {
                write!(f, "Binance API connection failed: {}.", msg)
            }
        }
    }
}

impl std::error::Error for BNKlineError {}

// Binance sends prices as strings inside a heterogeneous array.
fn kline_item_to_float(item: Option<KlinesItemInner>) -> Option<f64> {
    item.and_then(|inner| {
        if let KlinesItemInner::String(s) = inner {
            s.parse::<f64>().ok().filter(|v| v.is_finite())
        } else {
            None
        }
    })
}

impl TryFrom<Vec<KlinesItemInner>> for BNKline {
    type Error = BNKlineError;

    fn try_from(vec_inner_klines: Vec<KlinesItemInner>) -> Result<Self, Self::Error> {
        // [open_time, open, high, low, close, ...]
        let mut items = vec_inner_klines.into_iter();
        let open_timestamp_ms = match items.next().ok_or(BNKlineError::InvalidLength)? {
            KlinesItemInner::Integer(a) => a,
            _ => return Err(BNKlineError::InvalidType("open_time".to_string())),
        };
        let close_price = kline_item_to_float(items.nth(3))
            .ok_or_else(|| BNKlineError::InvalidType("close".to_string()))?;

        Ok(BNKline {
            open_timestamp_ms,
            close_price,
        })
    }
}

impl From<BNKline> for PriceObservation {
    fn from(kline: BNKline) -> Self {
        PriceObservation::new(kline.open_timestamp_ms, kline.close_price)
    }
}

fn convert_klines(data: Vec<Vec<KlinesItemInner>>) -> Result<Vec<BNKline>, BNKlineError> {
    data.into_iter().map(Vec::try_into).collect()
}

fn configure_binance_client() -> Result<RestApi, anyhow::Error> {
    let config = BinanceApiConfig::default();
    let rest_conf = ConfigurationRestApi::builder()
        .timeout(config.timeout_ms)
        .retries(config.retries)
        .backoff(config.backoff_ms)
        .build()?;
    Ok(SpotRestApi::production(rest_conf))
}

fn log_connector_error(symbol: &str, conn_err: &errors::ConnectorError) {
    match conn_err {
        connection_error::ConnectorClientError(msg) => {
            log::error!("{} Client error: Check your request parameters. {}", symbol, msg);
        }
        connection_error::TooManyRequestsError(msg) => {
            log::error!("{} Rate limit exceeded. {}", symbol, msg);
        }
        connection_error::RateLimitBanError(msg) => {
            log::error!("{} IP address banned due to excessive rate limits. {}", symbol, msg);
        }
        errors::ConnectorError::ServerError { msg, status_code } => {
            log::error!("{} Server error: {} (status code: {:?})", symbol, msg, status_code);
        }
        errors::ConnectorError::NetworkError(msg) => {
            log::error!("{} Network error: Check your internet connection. {}", symbol, msg);
        }
        errors::ConnectorError::NotFoundError(msg) => {
            log::error!("{} Resource not found. {}", symbol, msg);
        }
        connection_error::BadRequestError(msg) => {
            log::error!("{} Bad request (unknown symbol?). {}", symbol, msg);
        }
        other => {
            log::error!("{} Unexpected ConnectionError variant: {:?}", symbol, other);
        }
    }
}

/// Fetches the newest `BINANCE.limits.klines_limit` klines for `symbol`, oldest first.
pub async fn load_klines(symbol: &str) -> Result<Vec<BNKline>, anyhow::Error> {
    let rest_client = configure_binance_client()?;

    let interval = try_interval_from_ms(BINANCE.limits.interval_ms).map_err(anyhow::Error::msg)?;
    let params = KlinesParams::builder(symbol.to_string(), interval)
        .limit(BINANCE.limits.klines_limit)
        .build()?;

    let new_klines = match rest_client.klines(params).await {
        Ok(response) => response.data().await?,
        Err(e) => {
            let msg = e.to_string();
            if let Some(conn_err) = e.downcast_ref::<errors::ConnectorError>() {
                log_connector_error(symbol, conn_err);
            } else {
                log::error!("An unexpected error occurred for {}: {:#}", symbol, e);
            }
            return Err(anyhow::Error::new(BNKlineError::ConnectionFailed(msg))
                .context(format!("Binance API call failed for {}", symbol)));
        }
    };

    let klines = convert_klines(new_klines).map_err(|e| {
        anyhow::Error::new(e).context(format!("{} convert_klines failed", symbol))
    })?;
    if klines.is_empty() {
        bail!("{}: Binance returned zero klines", symbol);
    }
    if klines
        .windows(2)
        .any(|w| w[0].open_timestamp_ms >= w[1].open_timestamp_ms)
    {
        bail!("{}: klines are not strictly chronological", symbol);
    }
    Ok(klines)
}
