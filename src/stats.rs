//! Aggregate helpers shared by the metric calculators

/// Tolerance below which a sum or mean is treated as zero.
pub(crate) const EPSILON: f64 = 1e-9;

/// Arithmetic mean; 0.0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
  if values.is_empty() {
    return 0.0;
  }

  values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 divisor); 0.0 for fewer than 2 values.
pub(crate) fn std_deviation(values: &[f64]) -> f64 {
  if values.len() < 2 {
    return 0.0;
  }

  let mean_value = mean(values);
  let sum_squared_diff: f64 = values
    .iter()
    .map(|value| {
      let diff = value - mean_value;
      diff * diff
    })
    .sum();

  let variance = sum_squared_diff / (values.len() - 1) as f64;
  variance.sqrt()
}

/// Coefficient of variation (stddev / mean), a scale-free dispersion
/// measure. 0.0 when the mean is ~0 to avoid a blow-up on degenerate data.
pub(crate) fn coefficient_of_variation(values: &[f64]) -> f64 {
  if values.is_empty() {
    return 0.0;
  }

  let mean_value = mean(values);
  if mean_value.abs() < EPSILON {
    return 0.0;
  }

  std_deviation(values) / mean_value
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;

  #[test]
  fn test_mean_of_values() {
    assert_approx_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, 1e-12);
    assert_approx_eq!(mean(&[300.0]), 300.0, 1e-12);
  }

  #[test]
  fn test_mean_of_empty_slice_is_zero() {
    assert_eq!(mean(&[]), 0.0);
  }

  #[test]
  fn test_std_deviation_uses_bessel_correction() {
    // Sample variance of [1..5] is 2.5, so stddev is sqrt(2.5)
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_approx_eq!(std_deviation(&values), 2.5_f64.sqrt(), 1e-12);
  }

  #[test]
  fn test_std_deviation_of_short_slices_is_zero() {
    assert_eq!(std_deviation(&[]), 0.0);
    assert_eq!(std_deviation(&[42.0]), 0.0);
  }

  #[test]
  fn test_cv_of_identical_values_is_zero() {
    assert_eq!(coefficient_of_variation(&[300.0, 300.0, 300.0]), 0.0);
  }

  #[test]
  fn test_cv_guards_against_near_zero_mean() {
    // Mean is 0, dividing would blow up; defined as 0 instead
    assert_eq!(coefficient_of_variation(&[-1.0, 1.0]), 0.0);
    assert_eq!(coefficient_of_variation(&[0.0, 0.0, 0.0]), 0.0);
  }

  #[test]
  fn test_cv_of_dispersed_values() {
    // stddev = sqrt(2.5) ~= 1.5811, mean = 3
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_approx_eq!(
      coefficient_of_variation(&values),
      2.5_f64.sqrt() / 3.0,
      1e-12
    );
  }
}
