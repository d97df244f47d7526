//! # Simulation
//!
//! $$
//! \Delta x_i \overset{iid}{\sim} \mathcal N(0,\sigma^2T),\quad
//! \Delta P_{(1)}\le\dots\le\Delta P_{(N)},\quad
//! \mathrm{VaR}_c=\Delta P_{(\lfloor(1-c)N\rfloor)}
//! $$
//!
use impl_new_derive::ImplNew;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use rand_distr::Distribution;
use rand_distr::Normal;

use super::delta_gamma::DeltaGammaPortfolio;
use super::error::VarError;
use crate::stats::empirical::ecdf;
use crate::stats::empirical::sorted_ascending;
use crate::stats::empirical::tail_index;

/// Default number of simulated shocks
pub const DEFAULT_NUM_SIMULATIONS: usize = 5000;
/// Default confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.99;

/// Monte Carlo configuration. Unset fields fall back to the defaults above;
/// an unset `seed` draws a fresh one from the thread RNG.
#[derive(ImplNew, Clone, Copy, Debug, Default, PartialEq)]
pub struct VarSimulation {
  pub num_simulations: Option<usize>,
  pub confidence_level: Option<f64>,
  pub seed: Option<u64>,
}

/// Outcome of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct VarEstimate {
  /// Value change at the tail index, negative for a loss.
  pub var: f64,
  /// `var / p * 100`.
  pub var_percentage: f64,
  /// Confidence level the quantile was read at.
  pub confidence_level: f64,
  /// Zero-based position of `var` in `sorted_changes`.
  pub tail_index: usize,
  /// Seed that reproduces this run.
  pub seed: u64,
  /// Simulated value changes, ascending.
  pub sorted_changes: Array1<f64>,
}

impl VarEstimate {
  /// `(var, var_percentage)`.
  pub fn pair(&self) -> (f64, f64) {
    (self.var, self.var_percentage)
  }

  pub fn num_simulations(&self) -> usize {
    self.sorted_changes.len()
  }

  /// Worst simulated value change.
  pub fn min_change(&self) -> f64 {
    self.sorted_changes[0]
  }

  /// Best simulated value change.
  pub fn max_change(&self) -> f64 {
    self.sorted_changes[self.sorted_changes.len() - 1]
  }

  /// Empirical CDF ordinates matching `sorted_changes`.
  pub fn cdf(&self) -> Array1<f64> {
    ecdf(self.num_simulations())
  }
}

impl VarSimulation {
  pub fn num_simulations(&self) -> usize {
    self.num_simulations.unwrap_or(DEFAULT_NUM_SIMULATIONS)
  }

  pub fn confidence_level(&self) -> f64 {
    self.confidence_level.unwrap_or(DEFAULT_CONFIDENCE_LEVEL)
  }

  fn validate(&self, portfolio: &DeltaGammaPortfolio) -> Result<(), VarError> {
    // negated comparisons so NaN is rejected as well
    if !(portfolio.sigma > 0.0) || !(portfolio.t > 0.0) {
      return Err(VarError::InvalidParameter(format!(
        "volatility (sigma) and time horizon (t) must be positive, got sigma = {}, t = {}",
        portfolio.sigma, portfolio.t
      )));
    }

    let confidence_level = self.confidence_level();
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
      return Err(VarError::InvalidParameter(format!(
        "confidence level must be in (0, 1), got {confidence_level}"
      )));
    }

    if self.num_simulations() == 0 {
      return Err(VarError::InvalidParameter(
        "number of simulations must be at least 1".into(),
      ));
    }

    Ok(())
  }

  /// Draw the price shocks for `portfolio` from a generator seeded with `seed`.
  pub fn sample_shocks(
    &self,
    portfolio: &DeltaGammaPortfolio,
    seed: u64,
  ) -> Result<Array1<f64>, VarError> {
    let normal = Normal::new(0.0, portfolio.horizon_std_dev())
      .map_err(|e| VarError::InvalidParameter(format!("shock distribution: {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);

    Ok(Array1::from_iter(
      (0..self.num_simulations()).map(|_| normal.sample(&mut rng)),
    ))
  }

  /// Run the simulation and read off the VaR.
  ///
  /// Fails with [`VarError::InvalidParameter`] before any sampling when
  /// `sigma` or `t` is not positive, the confidence level is outside `(0, 1)`
  /// or the number of simulations is zero.
  pub fn simulate(&self, portfolio: &DeltaGammaPortfolio) -> Result<VarEstimate, VarError> {
    if let Err(err) = self.validate(portfolio) {
      tracing::warn!(%err, "rejected VaR simulation");
      return Err(err);
    }

    let n = self.num_simulations();
    let confidence_level = self.confidence_level();
    let seed = self.seed.unwrap_or_else(|| rand::rng().random());
    tracing::debug!(n, confidence_level, seed, "simulating delta-gamma VaR");

    let shocks = self.sample_shocks(portfolio, seed)?;
    let sorted_changes = sorted_ascending(&portfolio.value_changes(&shocks));

    let k = tail_index(n, confidence_level);
    let var = sorted_changes[k];
    let var_percentage = var / portfolio.p * 100.0;
    tracing::trace!(k, var, var_percentage, "tail quantile");

    Ok(VarEstimate {
      var,
      var_percentage,
      confidence_level,
      tail_index: k,
      seed,
      sorted_changes,
    })
  }
}

/// Monte Carlo VaR with optional overrides of the defaults and a fresh seed.
pub fn simulate_var(
  portfolio: &DeltaGammaPortfolio,
  num_simulations: Option<usize>,
  confidence_level: Option<f64>,
) -> Result<VarEstimate, VarError> {
  VarSimulation::new(num_simulations, confidence_level, None).simulate(portfolio)
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use tracing_test::traced_test;

  use super::*;

  fn example() -> DeltaGammaPortfolio {
    DeltaGammaPortfolio::new(100.0, 1_000_000.0, 0.5, 0.01, 0.02, 3.0)
  }

  fn seeded(seed: u64) -> VarSimulation {
    VarSimulation::new(Some(5000), Some(0.99), Some(seed))
  }

  #[test]
  fn same_seed_reproduces_run() {
    let a = seeded(42).simulate(&example()).unwrap();
    let b = seeded(42).simulate(&example()).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.seed, 42);
  }

  #[test]
  fn different_seeds_differ() {
    let a = seeded(1).simulate(&example()).unwrap();
    let b = seeded(2).simulate(&example()).unwrap();
    assert_ne!(a.sorted_changes, b.sorted_changes);
  }

  #[test]
  fn sorted_changes_are_non_decreasing() {
    let est = seeded(7).simulate(&example()).unwrap();

    assert_eq!(est.num_simulations(), 5000);
    assert!(est
      .sorted_changes
      .windows(2)
      .into_iter()
      .all(|w| w[0] <= w[1]));
    assert_eq!(est.min_change(), est.sorted_changes[0]);
    assert!(est.min_change() <= est.var && est.var <= est.max_change());
  }

  #[test]
  fn var_is_read_at_truncated_index() {
    let est = seeded(11).simulate(&example()).unwrap();

    assert_eq!(est.tail_index, 50);
    assert_eq!(est.var, est.sorted_changes[50]);
    assert!(est.var < 0.0);
  }

  #[test]
  fn percentage_is_relative_to_portfolio_value() {
    let est = seeded(3).simulate(&example()).unwrap();
    assert_relative_eq!(est.var_percentage, est.var / 1_000_000.0 * 100.0);
    assert_eq!(est.pair(), (est.var, est.var_percentage));
  }

  #[test]
  fn flat_portfolio_has_zero_var() {
    let pf = DeltaGammaPortfolio::new(100.0, 1_000_000.0, 0.0, 0.0, 0.02, 3.0);
    let est = seeded(5).simulate(&pf).unwrap();

    assert_eq!(est.var, 0.0);
    assert_eq!(est.var_percentage, 0.0);
  }

  #[test]
  fn defaults_are_applied() {
    let sim = VarSimulation::default();
    assert_eq!(sim.num_simulations(), DEFAULT_NUM_SIMULATIONS);
    assert_eq!(sim.confidence_level(), DEFAULT_CONFIDENCE_LEVEL);

    let est = simulate_var(&example(), None, None).unwrap();
    assert_eq!(est.num_simulations(), 5000);
    assert_eq!(est.confidence_level, 0.99);
    assert_eq!(est.cdf().len(), 5000);
  }

  #[test]
  fn rejects_non_positive_sigma_and_horizon() {
    for (sigma, t) in [(0.0, 3.0), (-0.02, 3.0), (0.02, 0.0), (0.02, -1.0), (f64::NAN, 3.0)] {
      let pf = DeltaGammaPortfolio { sigma, t, ..example() };
      assert!(matches!(
        seeded(1).simulate(&pf),
        Err(VarError::InvalidParameter(_))
      ));
    }
  }

  #[test]
  fn rejects_confidence_outside_open_interval() {
    for c in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
      let sim = VarSimulation::new(Some(100), Some(c), Some(1));
      assert!(matches!(
        sim.simulate(&example()),
        Err(VarError::InvalidParameter(_))
      ));
    }
  }

  #[test]
  fn rejects_zero_simulations() {
    let sim = VarSimulation::new(Some(0), None, Some(1));
    assert!(matches!(
      sim.simulate(&example()),
      Err(VarError::InvalidParameter(_))
    ));
  }

  #[test]
  fn single_simulation_uses_the_only_draw() {
    let est = VarSimulation::new(Some(1), Some(0.99), Some(9))
      .simulate(&example())
      .unwrap();
    assert_eq!(est.tail_index, 0);
    assert_eq!(est.var, est.sorted_changes[0]);
  }

  #[test]
  fn higher_confidence_is_at_least_as_extreme() {
    let vars: Vec<f64> = [0.9, 0.95, 0.99, 0.999]
      .iter()
      .map(|&c| {
        VarSimulation::new(Some(5000), Some(c), Some(21))
          .simulate(&example())
          .unwrap()
          .var
      })
      .collect();
    assert!(vars.windows(2).all(|w| w[1] <= w[0]));
  }

  #[test]
  fn positive_gamma_cushions_the_left_tail() {
    let linear = DeltaGammaPortfolio { gamma: 0.0, ..example() };
    let convex = seeded(17).simulate(&example()).unwrap();
    let flat = seeded(17).simulate(&linear).unwrap();
    assert!(convex.var >= flat.var);
  }

  #[test]
  fn linear_portfolio_converges_to_delta_normal() {
    let pf = DeltaGammaPortfolio { gamma: 0.0, ..example() };
    let est = VarSimulation::new(Some(100_000), Some(0.99), Some(2024))
      .simulate(&pf)
      .unwrap();
    let reference = pf.delta_normal_var(0.99).unwrap();

    assert_relative_eq!(est.var, reference, max_relative = 0.05);
  }

  #[traced_test]
  #[test]
  fn seed_is_logged() {
    seeded(31337).simulate(&example()).unwrap();
    assert!(logs_contain("seed=31337"));
  }
}
