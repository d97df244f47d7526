use anyhow::Result;
use delta_gamma_var::quant::var::DeltaGammaPortfolio;
use delta_gamma_var::quant::var::VarSimulation;
use delta_gamma_var::visualization::VarPlotter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let portfolio = DeltaGammaPortfolio {
    s: 100.0, // underlying price
    p: 1_000_000.0, // portfolio value
    delta: 0.5,
    gamma: 0.01,
    sigma: 0.02, // daily volatility (2%)
    t: 3.0, // horizon in days
  };

  let estimate = VarSimulation::new(Some(5000), Some(0.99), None).simulate(&portfolio)?;
  let reference = portfolio.delta_normal_var(estimate.confidence_level)?;
  tracing::info!(
    seed = estimate.seed,
    var_percentage = estimate.var_percentage,
    delta_normal = reference,
    "simulation finished"
  );

  println!(
    "{}-day {}% VaR: {:.2}",
    portfolio.t,
    estimate.confidence_level * 100.0,
    estimate.var
  );

  VarPlotter::new().show(&estimate);

  Ok(())
}
