//! # Delta-Gamma Portfolio
//!
//! $$
//! \Delta P = S\,\delta\,\Delta x + \tfrac12 S^2\gamma\,\Delta x^2
//! $$
//!
//! Second-order Taylor expansion of the portfolio value in the underlying price.
use impl_new_derive::ImplNew;
use ndarray::Array1;
use statrs::distribution::ContinuousCDF;
use statrs::distribution::Normal;

use super::error::VarError;

/// Risk description of a portfolio exposed to a single underlying.
#[derive(ImplNew, Clone, Copy, Debug, PartialEq)]
pub struct DeltaGammaPortfolio {
  /// Current price of the underlying.
  pub s: f64,
  /// Current portfolio value.
  pub p: f64,
  /// Portfolio delta.
  pub delta: f64,
  /// Portfolio gamma.
  pub gamma: f64,
  /// Daily volatility of the underlying shock.
  pub sigma: f64,
  /// Horizon in days.
  pub t: f64,
}

impl DeltaGammaPortfolio {
  /// Standard deviation of the shock over the horizon, `σ√T`.
  pub fn horizon_std_dev(&self) -> f64 {
    self.sigma * self.t.sqrt()
  }

  /// Value change for a single shock `dx`.
  #[inline]
  pub fn value_change(&self, dx: f64) -> f64 {
    self.s * self.delta * dx + 0.5 * self.s.powi(2) * self.gamma * dx.powi(2)
  }

  /// Value changes for a vector of shocks.
  pub fn value_changes(&self, shocks: &Array1<f64>) -> Array1<f64> {
    let linear = self.s * self.delta;
    let quadratic = 0.5 * self.s.powi(2) * self.gamma;
    shocks.mapv(|dx| linear * dx + quadratic * dx * dx)
  }

  /// Closed-form delta-normal quantile of `ΔP` at the `1 - c` tail.
  ///
  /// Ignores gamma; for `gamma == 0` the simulated VaR converges to this value.
  pub fn delta_normal_var(&self, confidence_level: f64) -> Result<f64, VarError> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
      return Err(VarError::InvalidParameter(format!(
        "confidence level must be in (0, 1), got {confidence_level}"
      )));
    }

    let std_normal = Normal::new(0.0, 1.0)
      .map_err(|e| VarError::InvalidParameter(format!("standard normal: {e}")))?;
    let z = std_normal.inverse_cdf(1.0 - confidence_level);

    Ok((self.s * self.delta).abs() * self.horizon_std_dev() * z)
  }
}
