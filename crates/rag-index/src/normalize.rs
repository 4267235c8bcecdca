//! Z-score normalization across the current build's asset population.

use std::collections::BTreeMap;

/// Normalize raw feature values to sample z-scores.
///
/// Sample standard deviation uses the N-1 divisor (minimum 1). A
/// zero-variance population falls back to a unit scale, which maps every
/// value to 0 rather than dividing by zero.
pub fn zscores(values: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    if values.is_empty() {
        return BTreeMap::new();
    }
    let n = values.len() as f64;
    let mean = values.values().sum::<f64>() / n;
    let var = values
        .values()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0).max(1.0);
    let std = if var > 0.0 { var.sqrt() } else { 1.0 };
    values
        .iter()
        .map(|(k, v)| (k.clone(), (v - mean) / std))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn map_of(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn empty_population() {
        assert!(zscores(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn population_mean_is_zero() {
        let z = zscores(&map_of(&[("A", 10.0), ("B", 20.0), ("C", 60.0)]));
        let mean: f64 = z.values().sum::<f64>() / z.len() as f64;
        assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn preserves_ordering() {
        let z = zscores(&map_of(&[("A", 1000.0), ("B", -500.0)]));
        assert!(z["A"] > 0.0);
        assert!(z["B"] < 0.0);
        assert!(z["A"] > z["B"]);
    }

    #[test]
    fn zero_variance_maps_everything_to_zero() {
        let z = zscores(&map_of(&[("A", 5.0), ("B", 5.0), ("C", 5.0)]));
        for v in z.values() {
            assert_abs_diff_eq!(*v, 0.0);
        }
    }

    #[test]
    fn single_asset_is_zero() {
        let z = zscores(&map_of(&[("A", 123.4)]));
        assert_abs_diff_eq!(z["A"], 0.0);
    }
}
