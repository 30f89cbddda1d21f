use chrono::DateTime;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_MIN * 15;
    pub const MS_IN_30_MIN: i64 = Self::MS_IN_MIN * 30;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_4_H: i64 = Self::MS_IN_H * 4;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Convert interval in milliseconds to a Binance-style shorthand (e.g. `30m`, `1h`).
    pub fn interval_to_string(interval_ms: i64) -> &'static str {
        match interval_ms {
            Self::MS_IN_MIN => "1m",
            Self::MS_IN_15_MIN => "15m",
            Self::MS_IN_30_MIN => "30m",
            Self::MS_IN_H => "1h",
            Self::MS_IN_4_H => "4h",
            Self::MS_IN_D => "1d",
            Self::MS_IN_W => "1w",
            _ => "unknown",
        }
    }
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    epoch_sec_to_utc(epoch_ms / 1000)
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => format!("<invalid ts {}>", epoch_sec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_as_date() {
        // 2024-01-02T00:00:00Z
        assert_eq!(epoch_ms_to_utc(1_704_153_600_000), "2024-01-02");
    }

    #[test]
    fn interval_shorthand() {
        assert_eq!(TimeUtils::interval_to_string(TimeUtils::MS_IN_D), "1d");
        assert_eq!(TimeUtils::interval_to_string(12345), "unknown");
        // Named in the Binance source's log line
        assert_eq!(
            TimeUtils::interval_to_string(crate::config::BINANCE.limits.interval_ms),
            "1d"
        );
    }
}
