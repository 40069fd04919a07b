//! Summary helpers over slices of `f64`.

/// Arithmetic mean, or `None` for an empty slice.
///
/// Each term is scaled by `1/n` before summing, so finite inputs always give a
/// finite mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    Some(values.iter().map(|value| value / n).sum())
}

/// Percentile of `values` using linear interpolation between the closest ranks.
///
/// The values are sorted internally. For `n` values the rank is
/// `pct / 100 * (n - 1)`; a fractional rank is interpolated between the two
/// neighbouring order statistics. `pct` is clamped to `0..=100`.
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let last = sorted.len() - 1;
    let rank = pct.clamp(0.0, 100.0) / 100.0 * last as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(last);

    if lower == upper {
        return Some(sorted[lower]);
    }

    let weight = rank - lower as f64;
    Some(sorted[lower] + weight * (sorted[upper] - sorted[lower]))
}
