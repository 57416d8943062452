//! # frontier-rs
//!
//! `frontier-rs` computes the risk/return frontier of a two-asset portfolio
//! from five scalar inputs: each asset's expected return and volatility plus
//! their pairwise correlation. The frontier is classified into efficient and
//! inefficient segments around the minimum-variance portfolio, and an
//! illustrative random-portfolio cloud is drawn alongside it.
//!
//! ## Modules
//!
//! | Module            | Description                                                       |
//! |-------------------|-------------------------------------------------------------------|
//! | [`frontier`]      | Parametric frontier computation, sampling and the engine wrapper. |
//! | [`error`]         | Input validation error types.                                     |
//! | [`visualization`] | Chart assembly for computed frontiers.                            |
//!
//! ## Example Usage
//!
//! ```rust
//! use frontier_rs::frontier::AssetParams;
//! use frontier_rs::frontier::FrontierEngine;
//! use frontier_rs::frontier::FrontierEngineConfig;
//! use frontier_rs::frontier::TwoAssetInputs;
//!
//! let inputs = TwoAssetInputs::new(
//!   AssetParams::new(0.10, 0.20),
//!   AssetParams::new(0.15, 0.30),
//!   0.20,
//! );
//! let engine = FrontierEngine::new(FrontierEngineConfig::default());
//! let result = engine.compute(&inputs).unwrap();
//! assert!(result.min_variance.std_dev <= 0.20);
//! ```

pub mod error;
pub mod frontier;
pub mod visualization;
