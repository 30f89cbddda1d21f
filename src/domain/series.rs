use serde::{Deserialize, Serialize};

/// Rendering hint carried on every series. Sinks may ignore it.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display,
)]
pub enum ChartStyle {
    #[default]
    #[strum(serialize = "fast line")]
    FastLine,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<SeriesPoint> for [f64; 2] {
    fn from(p: SeriesPoint) -> Self {
        [p.x, p.y]
    }
}

/// A display name plus its points, ready for a sink.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    pub style: ChartStyle,
    pub points: Vec<SeriesPoint>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.into(),
            style: ChartStyle::FastLine,
            points,
        }
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// The two series a single symbol contributes.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSeries {
    pub price: NamedSeries,
    pub trend: NamedSeries,
}

/// Final ordered output of one pipeline run: for every input symbol, in input
/// order, its price series immediately followed by its trend series.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PipelineResult {
    series: Vec<NamedSeries>,
}

impl PipelineResult {
    pub fn series(&self) -> &[NamedSeries] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}

impl FromIterator<SymbolSeries> for PipelineResult {
    fn from_iter<I: IntoIterator<Item = SymbolSeries>>(iter: I) -> Self {
        let series = iter
            .into_iter()
            .flat_map(|s| [s.price, s.trend])
            .collect();
        Self { series }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str) -> NamedSeries {
        NamedSeries::new(name, vec![SeriesPoint::new(1.0, 1.0)])
    }

    #[test]
    fn result_interleaves_price_then_trend() {
        let result: PipelineResult = vec![
            SymbolSeries {
                price: line("A"),
                trend: line("A Trend"),
            },
            SymbolSeries {
                price: line("B"),
                trend: line("B Trend"),
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(result.names(), vec!["A", "A Trend", "B", "B Trend"]);
    }

    #[test]
    fn style_hint_defaults_to_fast_line() {
        assert_eq!(line("A").style, ChartStyle::FastLine);
        assert_eq!(ChartStyle::FastLine.to_string(), "fast line");
    }
}
