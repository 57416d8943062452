//! # Frontier
//!
//! $$
//! \sigma_p^2(w) = w^2\sigma_A^2 + (1-w)^2\sigma_B^2 + 2w(1-w)\rho\sigma_A\sigma_B
//! $$
//!
//! Two-asset risk/return frontier computation and classification.

pub mod compute;
pub mod engine;
pub mod sampling;
pub mod types;

pub use compute::compute_frontier;
pub use compute::covariance;
pub use compute::portfolio_return;
pub use compute::portfolio_std_dev;
pub use engine::DEFAULT_CURVE_RESOLUTION;
pub use engine::DEFAULT_SAMPLE_COUNT;
pub use engine::FrontierEngine;
pub use engine::FrontierEngineConfig;
pub use sampling::sample_random_portfolios;
pub use types::AssetParams;
pub use types::FrontierPoint;
pub use types::FrontierResult;
pub use types::FrontierSegments;
pub use types::RiskReturnPoint;
pub use types::TwoAssetInputs;
