//! # delta-gamma-var
//!
//! $$
//! \Delta P \approx S\,\delta\,\Delta x + \tfrac12 S^2\gamma\,\Delta x^2,\qquad
//! \Delta x \sim \mathcal N(0,\sigma^2 T)
//! $$
//!
//! Monte Carlo Value-at-Risk for a portfolio described by its delta and gamma
//! with respect to a single underlying.
//!
//! | Module            | Description                                                          |
//! |-------------------|----------------------------------------------------------------------|
//! | [`quant`]         | Portfolio parameters, simulation configuration and the VaR pipeline. |
//! | [`stats`]         | Empirical quantiles, CDF ordinates and histogram binning.            |
//! | [`visualization`] | Histogram and CDF charts of the simulated value changes.             |
//!
//! ## Example Usage
//!
//! ```rust
//! use delta_gamma_var::quant::var::DeltaGammaPortfolio;
//! use delta_gamma_var::quant::var::VarSimulation;
//!
//! let portfolio = DeltaGammaPortfolio::new(100.0, 1_000_000.0, 0.5, 0.01, 0.02, 3.0);
//! let estimate = VarSimulation::new(Some(5000), Some(0.99), Some(42))
//!   .simulate(&portfolio)
//!   .unwrap();
//! println!("{:.2} ({:.4}%)", estimate.var, estimate.var_percentage);
//! ```

pub mod quant;
pub mod stats;
pub mod visualization;

pub use quant::var::simulate_var;
pub use quant::var::DeltaGammaPortfolio;
pub use quant::var::VarError;
pub use quant::var::VarEstimate;
pub use quant::var::VarSimulation;
pub use visualization::VarPlotter;
