//! Order statistics over 8-bit channel samples.


/// Percentile of `data` with linear interpolation between closest ranks.
///
/// `p` is in percent, `[0, 100]`. The rank of the result is `p / 100 * (n - 1)`; a
/// fractional rank interpolates between the two neighbouring order statistics.
/// Sorts the input buffer in place.
pub fn percentile(data: &mut [u8], p: f64) -> f64 {
    debug_assert!(!data.is_empty());
    debug_assert!((0.0..=100.0).contains(&p));

    data.sort_unstable();
    percentile_sorted(data, p)
}

fn percentile_sorted(sorted: &[u8], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    let low = sorted[lower] as f64;
    let high = sorted[upper] as f64;

    low + (high - low) * fraction
}

/// Interquartile range: 75th percentile minus 25th percentile.
///
/// Returns `None` for an empty buffer. Sorts the input buffer in place.
pub fn interquartile_range(data: &mut [u8]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }

    data.sort_unstable();

    Some(percentile_sorted(data, 75.0) - percentile_sorted(data, 25.0))
}

/// `count` evenly spaced integer positions over the inclusive range `[0, last]`.
///
/// Positions are computed as `i * last / (count - 1)` and truncated; the final position is
/// exactly `last`. A single position is `0`.
pub fn linspace_indices(last: u32, count: usize) -> Vec<u32> {
    match count {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let step = last as f64 / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        last
                    } else {
                        (i as f64 * step) as u32
                    }
                })
                .collect()
        }
    }
}
