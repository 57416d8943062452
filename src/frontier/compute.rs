//! # Frontier Computation
//!
//! $$
//! \sigma_p(w) = \sqrt{w^2\sigma_A^2 + (1-w)^2\sigma_B^2 + 2w(1-w)\rho\sigma_A\sigma_B}
//! $$
//!
//! Parametric frontier over the long-only weight interval with
//! efficient/inefficient classification around the minimum-variance point.

use super::sampling::sample_random_portfolios;
use super::types::FrontierPoint;
use super::types::FrontierResult;
use super::types::FrontierSegments;
use super::types::TwoAssetInputs;
use crate::error::FrontierError;

/// Covariance implied by pairwise correlation and per-asset volatilities.
pub fn covariance(std_a: f64, std_b: f64, correlation: f64) -> f64 {
  correlation * std_a * std_b
}

/// Expected portfolio return at weight `w` in asset A.
pub fn portfolio_return(w: f64, mean_a: f64, mean_b: f64) -> f64 {
  w * mean_a + (1.0 - w) * mean_b
}

/// Portfolio standard deviation at weight `w` in asset A.
///
/// For correlations in `[-1, 1]` the quadratic form is non-negative, but
/// floating-point cancellation near the zero-variance boundary can produce
/// a tiny negative value; the variance is clamped at zero before the root.
pub fn portfolio_std_dev(w: f64, std_a: f64, std_b: f64, cov: f64) -> f64 {
  let variance =
    w * w * std_a * std_a + (1.0 - w) * (1.0 - w) * std_b * std_b + 2.0 * w * (1.0 - w) * cov;
  variance.max(0.0).sqrt()
}

fn validate(inputs: &TwoAssetInputs, curve_resolution: usize) -> Result<(), FrontierError> {
  if inputs.asset_a.std_dev < 0.0 {
    return Err(FrontierError::InvalidParameter(format!(
      "asset A standard deviation must be non-negative, got {}",
      inputs.asset_a.std_dev
    )));
  }
  if inputs.asset_b.std_dev < 0.0 {
    return Err(FrontierError::InvalidParameter(format!(
      "asset B standard deviation must be non-negative, got {}",
      inputs.asset_b.std_dev
    )));
  }
  if !(-1.0..=1.0).contains(&inputs.correlation) {
    return Err(FrontierError::InvalidParameter(format!(
      "correlation must lie in [-1, 1], got {}",
      inputs.correlation
    )));
  }
  if curve_resolution < 2 {
    return Err(FrontierError::InvalidParameter(format!(
      "curve resolution must be at least 2, got {curve_resolution}"
    )));
  }

  Ok(())
}

/// Compute the frontier curve, its segments, the minimum-variance point and
/// the random-portfolio cloud for the supplied inputs.
///
/// `curve_resolution` weights are spaced evenly over `[0, 1]` inclusive of
/// both endpoints. `sample_count` random portfolios are drawn independently
/// of the curve; a seed makes the draw reproducible.
pub fn compute_frontier(
  inputs: &TwoAssetInputs,
  curve_resolution: usize,
  sample_count: usize,
  seed: Option<u64>,
) -> Result<FrontierResult, FrontierError> {
  validate(inputs, curve_resolution)?;

  let cov = covariance(
    inputs.asset_a.std_dev,
    inputs.asset_b.std_dev,
    inputs.correlation,
  );

  // i / (n - 1) lands exactly on 0 and 1 at the endpoints.
  let last = (curve_resolution - 1) as f64;
  let curve: Vec<FrontierPoint> = (0..curve_resolution)
    .map(|i| {
      let w = i as f64 / last;
      FrontierPoint {
        weight_a: w,
        expected_return: portfolio_return(
          w,
          inputs.asset_a.mean_return,
          inputs.asset_b.mean_return,
        ),
        std_dev: portfolio_std_dev(w, inputs.asset_a.std_dev, inputs.asset_b.std_dev, cov),
      }
    })
    .collect();

  // Strict comparison keeps the lowest-weight point on ties.
  let mut min_idx = 0;
  for (i, point) in curve.iter().enumerate() {
    if point.std_dev < curve[min_idx].std_dev {
      min_idx = i;
    }
  }

  let segments = FrontierSegments {
    inefficient: curve[..=min_idx].to_vec(),
    efficient: curve[min_idx..].to_vec(),
  };

  let random_sample = sample_random_portfolios(inputs, sample_count, seed);

  Ok(FrontierResult {
    min_variance: curve[min_idx],
    curve,
    segments,
    random_sample,
  })
}
