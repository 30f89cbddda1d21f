use statrs::statistics::Statistics;

use crate::analysis::DeriveError;
use crate::domain::TrendLine;

/// Ordinary least-squares fit of `values` against positions `1..=N`.
///
/// With a single value there is no x-variance; the line is flat through it.
pub fn fit_trend(values: &[f64]) -> Result<TrendLine, DeriveError> {
    let n = values.len();
    if n == 0 {
        return Err(DeriveError::EmptyInput("trend values"));
    }

    // Mean of 1..=n
    let x_mean = (n as f64 + 1.0) / 2.0;
    let y_mean = values.iter().mean();

    let (sxy, sxx) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sxy, sxx), (i, &y)| {
            let dx = (i + 1) as f64 - x_mean;
            (sxy + dx * (y - y_mean), sxx + dx * dx)
        });

    let k = if sxx == 0.0 { 0.0 } else { sxy / sxx };
    let d = y_mean - k * x_mean;
    Ok(TrendLine { k, d })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE * (1.0 + b.abs())
    }

    #[test]
    fn exact_line_through_three_points() {
        let trend = fit_trend(&[10.0, 20.0, 30.0]).unwrap();
        assert!(approx_eq(trend.k, 10.0), "k = {}", trend.k);
        assert!(approx_eq(trend.d, 0.0), "d = {}", trend.d);
    }

    #[test]
    fn recovers_generating_line() {
        for &(k0, d0) in &[(0.5, 3.0), (-2.25, 100.0), (0.0, 42.0), (1e-3, -7.5)] {
            let values: Vec<f64> = (1..=200).map(|i| k0 * i as f64 + d0).collect();
            let trend = fit_trend(&values).unwrap();
            assert!(approx_eq(trend.k, k0), "k {} vs {}", trend.k, k0);
            assert!(approx_eq(trend.d, d0), "d {} vs {}", trend.d, d0);
        }
    }

    #[test]
    fn fitting_is_deterministic() {
        let values: Vec<f64> = (0..200)
            .map(|i| 100.0 + (i as f64 * 0.37).sin() * 5.0 + i as f64 * 0.1)
            .collect();
        let first = fit_trend(&values).unwrap();
        let second = fit_trend(&values).unwrap();
        assert_eq!(first.k.to_bits(), second.k.to_bits());
        assert_eq!(first.d.to_bits(), second.d.to_bits());
    }

    #[test]
    fn single_value_gives_flat_line() {
        let trend = fit_trend(&[7.0]).unwrap();
        assert_eq!(trend, TrendLine { k: 0.0, d: 7.0 });
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            fit_trend(&[]),
            Err(DeriveError::EmptyInput("trend values"))
        );
    }
}
