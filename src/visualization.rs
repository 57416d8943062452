//! # Visualization
//!
//! $$
//! \{(\sigma_p, \mu_p)\} \mapsto \text{risk/return frontier chart}
//! $$
//!
use plotly::Layout;
use plotly::Plot;
use plotly::Scatter;
use plotly::common::DashType;
use plotly::common::Line;
use plotly::common::Marker;
use plotly::common::MarkerSymbol;
use plotly::common::Mode;
use plotly::layout::Axis;

use crate::frontier::FrontierPoint;
use crate::frontier::FrontierResult;
use crate::frontier::TwoAssetInputs;

fn risk_return_xy(points: &[FrontierPoint]) -> (Vec<f64>, Vec<f64>) {
  (
    points.iter().map(|p| p.std_dev).collect(),
    points.iter().map(|p| p.expected_return).collect(),
  )
}

/// Builder assembling the two-asset frontier chart.
///
/// Renders what the core produced without recomputing or validating:
/// the random cloud, the dashed inefficient and solid efficient segments,
/// one marker per pure asset and a star on the minimum-variance portfolio.
pub struct FrontierPlotter {
  title: String,
  width: usize,
  height: usize,
  show_legend: bool,
}

impl FrontierPlotter {
  pub fn new() -> Self {
    Self {
      title: "Two-Asset Frontier".to_string(),
      width: 900,
      height: 600,
      show_legend: true,
    }
  }

  pub fn title(mut self, title: &str) -> Self {
    self.title = title.into();
    self
  }

  pub fn width(mut self, width: usize) -> Self {
    self.width = width;
    self
  }

  pub fn height(mut self, height: usize) -> Self {
    self.height = height;
    self
  }

  pub fn show_legend(mut self, show: bool) -> Self {
    self.show_legend = show;
    self
  }

  /// Assemble the chart for one computed frontier.
  pub fn plot(&self, inputs: &TwoAssetInputs, result: &FrontierResult) -> Plot {
    let mut plot = Plot::new();

    if !result.random_sample.is_empty() {
      let xs: Vec<f64> = result.random_sample.iter().map(|p| p.std_dev).collect();
      let ys: Vec<f64> = result
        .random_sample
        .iter()
        .map(|p| p.expected_return)
        .collect();
      plot.add_trace(
        Scatter::new(xs, ys)
          .mode(Mode::Markers)
          .name("Random Portfolios")
          .marker(Marker::new().size(4).color("gray").opacity(0.2)),
      );
    }

    let (x_inef, y_inef) = risk_return_xy(&result.segments.inefficient);
    plot.add_trace(
      Scatter::new(x_inef, y_inef)
        .mode(Mode::Lines)
        .name("Inefficient")
        .line(Line::new().color("red").dash(DashType::Dash)),
    );

    let (x_ef, y_ef) = risk_return_xy(&result.segments.efficient);
    plot.add_trace(
      Scatter::new(x_ef, y_ef)
        .mode(Mode::Lines)
        .name("Efficient Frontier")
        .line(Line::new().color("red").width(2.0)),
    );

    plot.add_trace(
      Scatter::new(
        vec![inputs.asset_a.std_dev],
        vec![inputs.asset_a.mean_return],
      )
      .mode(Mode::Markers)
      .name("Stock A")
      .marker(Marker::new().size(9)),
    );

    plot.add_trace(
      Scatter::new(
        vec![inputs.asset_b.std_dev],
        vec![inputs.asset_b.mean_return],
      )
      .mode(Mode::Markers)
      .name("Stock B")
      .marker(Marker::new().size(9)),
    );

    plot.add_trace(
      Scatter::new(
        vec![result.min_variance.std_dev],
        vec![result.min_variance.expected_return],
      )
      .mode(Mode::Markers)
      .name("Minimum-Variance Portfolio")
      .marker(Marker::new().size(12).symbol(MarkerSymbol::Star).color("black")),
    );

    plot.set_layout(
      Layout::new()
        .title(self.title.as_str())
        .width(self.width)
        .height(self.height)
        .show_legend(self.show_legend)
        .x_axis(Axis::new().title("Standard Deviation (Risk)"))
        .y_axis(Axis::new().title("Expected Return")),
    );

    plot
  }
}

impl Default for FrontierPlotter {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::frontier::AssetParams;
  use crate::frontier::compute_frontier;

  fn computed() -> (TwoAssetInputs, FrontierResult) {
    let inputs = TwoAssetInputs::new(
      AssetParams::new(0.10, 0.20),
      AssetParams::new(0.15, 0.30),
      0.20,
    );
    let result = compute_frontier(&inputs, 200, 500, Some(42)).unwrap();
    (inputs, result)
  }

  #[test]
  fn chart_carries_all_traces() {
    let (inputs, result) = computed();
    let plot = FrontierPlotter::new().plot(&inputs, &result);
    assert_eq!(plot.data().len(), 6);
  }

  #[test]
  fn empty_cloud_drops_scatter_trace() {
    let inputs = TwoAssetInputs::new(
      AssetParams::new(0.10, 0.20),
      AssetParams::new(0.15, 0.30),
      0.20,
    );
    let result = compute_frontier(&inputs, 200, 0, None).unwrap();
    let plot = FrontierPlotter::new().plot(&inputs, &result);
    assert_eq!(plot.data().len(), 5);
  }

  #[test]
  fn frontier_chart_writes_html() {
    let (inputs, result) = computed();
    let plot = FrontierPlotter::new()
      .title("Two-Stock Frontier")
      .plot(&inputs, &result);
    plot.write_html("target/two_asset_frontier_test.html");
  }
}
