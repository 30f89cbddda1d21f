use crate::analysis::DeriveError;
use crate::domain::{NamedSeries, SeriesPoint, TrendLine, Window};

const TREND_SUFFIX: &str = " Trend";

pub fn trend_series_name(symbol: &str) -> String {
    format!("{}{}", symbol, TREND_SUFFIX)
}

/// One point per window value, x counting from 1.
pub fn build_price_series(window: &Window, name: &str) -> Result<NamedSeries, DeriveError> {
    if window.is_empty() {
        return Err(DeriveError::EmptyInput("price window"));
    }
    let points = window
        .values()
        .iter()
        .enumerate()
        .map(|(i, &y)| SeriesPoint::new((i + 1) as f64, y))
        .collect();
    Ok(NamedSeries::new(name, points))
}

/// Samples the fitted line at x = 1..=n.
pub fn build_trend_series(
    trend: &TrendLine,
    name: &str,
    n: usize,
) -> Result<NamedSeries, DeriveError> {
    if n == 0 {
        return Err(DeriveError::EmptyInput("trend length"));
    }
    let points = (1..=n)
        .map(|i| {
            let x = i as f64;
            SeriesPoint::new(x, trend.value_at(x))
        })
        .collect();
    Ok(NamedSeries::new(name, points))
}
