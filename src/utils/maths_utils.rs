use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

/// Bounds covering every value of every slice, padded so a flat line still
/// gets a non-zero range. `None` when all slices are empty.
pub fn padded_bounds<'a>(slices: impl IntoIterator<Item = &'a [f64]>, pad_pct: f64) -> Option<(f64, f64)> {
    let (lo, hi) = slices
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(get_min_max)
        .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))?;

    let span = hi - lo;
    let pad = if span > 0.0 {
        span * pad_pct
    } else {
        // Flat data: open up a band around the value
        lo.abs().max(1.0) * pad_pct
    };
    Some((lo - pad, hi + pad))
}

/// Linear map of `value` from `[from_lo, from_hi]` onto `[to_lo, to_hi]`.
pub fn rescale(value: f64, (from_lo, from_hi): (f64, f64), (to_lo, to_hi): (f64, f64)) -> f64 {
    let from_span = from_hi - from_lo;
    if from_span == 0.0 {
        return (to_lo + to_hi) / 2.0;
    }
    to_lo + (value - from_lo) / from_span * (to_hi - to_lo)
}
