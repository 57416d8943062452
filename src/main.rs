use std::env;

use anyhow::Result;
use frontier_rs::frontier::AssetParams;
use frontier_rs::frontier::FrontierEngine;
use frontier_rs::frontier::FrontierEngineConfig;
use frontier_rs::frontier::TwoAssetInputs;
use frontier_rs::visualization::FrontierPlotter;

const USAGE: &str =
  "usage: frontier-rs [mean_a mean_b std_a std_b correlation] [resolution] [samples] [seed]";

fn main() -> Result<()> {
  let args: Vec<String> = env::args().skip(1).collect();
  if args.iter().any(|a| a == "-h" || a == "--help") {
    println!("{USAGE}");
    return Ok(());
  }

  // Reference parameters from the interactive sliders' defaults.
  let mut params = [0.10, 0.15, 0.20, 0.30, 0.20];
  for (slot, arg) in params.iter_mut().zip(args.iter()) {
    *slot = arg.parse()?;
  }

  let mut config = FrontierEngineConfig::default();
  if let Some(arg) = args.get(5) {
    config.curve_resolution = arg.parse()?;
  }
  if let Some(arg) = args.get(6) {
    config.sample_count = arg.parse()?;
  }
  if let Some(arg) = args.get(7) {
    config.seed = Some(arg.parse()?);
  }

  let inputs = TwoAssetInputs::new(
    AssetParams::new(params[0], params[2]),
    AssetParams::new(params[1], params[3]),
    params[4],
  );

  let engine = FrontierEngine::new(config);
  let result = engine.compute(&inputs)?;

  let mvp = result.min_variance;
  println!("Minimum-variance portfolio:");
  println!("  Weight in Stock A: {:.4}", mvp.weight_a);
  println!("  Expected return:   {:.4}", mvp.expected_return);
  println!("  Std deviation:     {:.4}", mvp.std_dev);

  let plot = FrontierPlotter::new().plot(&inputs, &result);
  let out = "target/two_asset_frontier.html";
  plot.write_html(out);
  println!("Chart written to {out}");

  Ok(())
}
