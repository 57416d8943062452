//! # Frontier Types
//!
//! $$
//! (\mu_A, \mu_B, \sigma_A, \sigma_B, \rho) \mapsto \{(w, \mu_p, \sigma_p)\}
//! $$
//!
//! Parameter and result containers for frontier computation.

use impl_new_derive::ImplNew;

/// Expected return and volatility of a single asset.
#[derive(ImplNew, Clone, Copy, Debug, PartialEq)]
pub struct AssetParams {
  /// Expected (mean) return.
  pub mean_return: f64,
  /// Standard deviation of returns, must be non-negative.
  pub std_dev: f64,
}

/// Full parameter set for one frontier computation.
///
/// Inputs are taken by value on every call; nothing is retained between
/// recomputations.
#[derive(ImplNew, Clone, Copy, Debug, PartialEq)]
pub struct TwoAssetInputs {
  pub asset_a: AssetParams,
  pub asset_b: AssetParams,
  /// Pairwise return correlation, must lie in `[-1, 1]`.
  pub correlation: f64,
}

/// One point on the parametric frontier curve.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrontierPoint {
  /// Fraction of the portfolio allocated to asset A.
  pub weight_a: f64,
  pub expected_return: f64,
  pub std_dev: f64,
}

/// Risk/return coordinates of one randomly weighted portfolio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskReturnPoint {
  pub std_dev: f64,
  pub expected_return: f64,
}

/// Frontier curve split at the minimum-variance point.
///
/// The minimum-variance point closes `inefficient` and opens `efficient`,
/// so both segments contain that one shared boundary point.
#[derive(Clone, Debug, Default)]
pub struct FrontierSegments {
  /// Points from `weight_a = 0` through the minimum-variance weight.
  pub inefficient: Vec<FrontierPoint>,
  /// Points from the minimum-variance weight through `weight_a = 1`.
  pub efficient: Vec<FrontierPoint>,
}

/// Output of a frontier computation.
#[derive(Clone, Debug, Default)]
pub struct FrontierResult {
  /// Frontier curve ordered by ascending weight in asset A.
  pub curve: Vec<FrontierPoint>,
  pub segments: FrontierSegments,
  /// Curve member with globally minimal standard deviation. Ties resolve
  /// to the lowest weight.
  pub min_variance: FrontierPoint,
  /// Illustrative random-portfolio cloud; empty when sampling is disabled.
  pub random_sample: Vec<RiskReturnPoint>,
}
