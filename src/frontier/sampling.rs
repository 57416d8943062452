//! # Random Portfolio Sampling
//!
//! $$
//! w \sim \mathcal{U}[0, 1]
//! $$
//!
//! Illustrative random-portfolio cloud drawn alongside the frontier curve.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Uniform;

use super::compute::covariance;
use super::compute::portfolio_return;
use super::compute::portfolio_std_dev;
use super::types::RiskReturnPoint;
use super::types::TwoAssetInputs;

/// Draw `count` uniformly weighted portfolios in risk/return space.
///
/// The draw is independent of the parametric curve and never influences
/// minimum-variance selection. A seed makes the cloud reproducible;
/// without one the generator is seeded from entropy.
pub fn sample_random_portfolios(
  inputs: &TwoAssetInputs,
  count: usize,
  seed: Option<u64>,
) -> Vec<RiskReturnPoint> {
  if count == 0 {
    return Vec::new();
  }

  let mut rng = match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let cov = covariance(
    inputs.asset_a.std_dev,
    inputs.asset_b.std_dev,
    inputs.correlation,
  );
  let weights = Array1::random_using(count, Uniform::new_inclusive(0.0, 1.0), &mut rng);

  weights
    .iter()
    .map(|&w| RiskReturnPoint {
      std_dev: portfolio_std_dev(w, inputs.asset_a.std_dev, inputs.asset_b.std_dev, cov),
      expected_return: portfolio_return(
        w,
        inputs.asset_a.mean_return,
        inputs.asset_b.mean_return,
      ),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::frontier::types::AssetParams;

  fn reference_inputs() -> TwoAssetInputs {
    TwoAssetInputs::new(
      AssetParams::new(0.10, 0.20),
      AssetParams::new(0.15, 0.30),
      0.20,
    )
  }

  #[test]
  fn cloud_has_requested_size() {
    let sample = sample_random_portfolios(&reference_inputs(), 500, Some(1));
    assert_eq!(sample.len(), 500);
  }

  #[test]
  fn zero_count_yields_empty_cloud() {
    let sample = sample_random_portfolios(&reference_inputs(), 0, Some(1));
    assert!(sample.is_empty());
  }

  #[test]
  fn seeded_draws_are_reproducible() {
    let a = sample_random_portfolios(&reference_inputs(), 200, Some(7));
    let b = sample_random_portfolios(&reference_inputs(), 200, Some(7));
    assert_eq!(a, b);
  }

  #[test]
  fn cloud_stays_inside_achievable_envelope() {
    let inputs = reference_inputs();
    let sample = sample_random_portfolios(&inputs, 2000, Some(3));

    for point in &sample {
      assert!(point.std_dev.is_finite());
      assert!(point.std_dev >= 0.0);
      assert!(point.std_dev <= 0.30 + 1e-12);
      assert!(point.expected_return >= 0.10 - 1e-12);
      assert!(point.expected_return <= 0.15 + 1e-12);
    }
  }
}
