//! # Frontier Engine
//!
//! $$
//! (\mu_A, \mu_B, \sigma_A, \sigma_B, \rho) \mapsto \text{frontier result}
//! $$
//!
//! Configured entry point for frontier recomputation on parameter changes.

use tracing::debug;

use super::compute::compute_frontier;
use super::types::FrontierResult;
use super::types::TwoAssetInputs;
use crate::error::FrontierError;

/// Curve samples across `[0, 1]` used when no explicit resolution is set.
pub const DEFAULT_CURVE_RESOLUTION: usize = 200;
/// Random portfolios drawn for the illustrative scatter by default.
pub const DEFAULT_SAMPLE_COUNT: usize = 3000;

/// Runtime configuration for [`FrontierEngine`].
#[derive(Clone, Copy, Debug)]
pub struct FrontierEngineConfig {
  /// Number of weight samples across `[0, 1]`, at least 2.
  pub curve_resolution: usize,
  /// Number of random portfolios in the scatter cloud; 0 disables it.
  pub sample_count: usize,
  /// Fixed sampling seed for reproducible clouds.
  pub seed: Option<u64>,
}

impl Default for FrontierEngineConfig {
  fn default() -> Self {
    Self {
      curve_resolution: DEFAULT_CURVE_RESOLUTION,
      sample_count: DEFAULT_SAMPLE_COUNT,
      seed: None,
    }
  }
}

/// Stateless engine recomputing the frontier from scratch on every call.
///
/// Interactive callers invoke [`FrontierEngine::compute`] once per parameter
/// change; nothing persists between invocations.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEngine {
  config: FrontierEngineConfig,
}

impl FrontierEngine {
  /// Construct a new engine with explicit configuration.
  pub fn new(config: FrontierEngineConfig) -> Self {
    Self { config }
  }

  /// Borrow engine configuration.
  pub fn config(&self) -> &FrontierEngineConfig {
    &self.config
  }

  /// Compute the frontier for the supplied inputs.
  pub fn compute(&self, inputs: &TwoAssetInputs) -> Result<FrontierResult, FrontierError> {
    let result = compute_frontier(
      inputs,
      self.config.curve_resolution,
      self.config.sample_count,
      self.config.seed,
    )?;

    debug!(
      min_variance_weight = result.min_variance.weight_a,
      min_variance_std_dev = result.min_variance.std_dev,
      curve_points = result.curve.len(),
      "frontier recomputed"
    );

    Ok(result)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::frontier::types::AssetParams;

  #[test]
  fn default_config_matches_reference_ui() {
    let config = FrontierEngineConfig::default();
    assert_eq!(config.curve_resolution, 200);
    assert_eq!(config.sample_count, 3000);
    assert!(config.seed.is_none());
  }

  #[test]
  fn engine_matches_free_function_with_same_seed() {
    let inputs = TwoAssetInputs::new(
      AssetParams::new(0.10, 0.20),
      AssetParams::new(0.15, 0.30),
      0.20,
    );
    let engine = FrontierEngine::new(FrontierEngineConfig {
      curve_resolution: 150,
      sample_count: 100,
      seed: Some(11),
    });

    let from_engine = engine.compute(&inputs).unwrap();
    let from_fn = compute_frontier(&inputs, 150, 100, Some(11)).unwrap();

    assert_eq!(from_engine.curve, from_fn.curve);
    assert_eq!(from_engine.min_variance, from_fn.min_variance);
    assert_eq!(from_engine.random_sample, from_fn.random_sample);
  }

  #[test]
  fn engine_rejects_invalid_inputs() {
    let inputs = TwoAssetInputs::new(
      AssetParams::new(0.10, 0.20),
      AssetParams::new(0.15, 0.30),
      -2.0,
    );
    let engine = FrontierEngine::new(FrontierEngineConfig::default());
    assert!(engine.compute(&inputs).is_err());
  }
}
