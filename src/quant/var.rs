//! # Value-at-Risk
//!
//! $$
//! \mathrm{VaR}_c = \Delta P_{(k)},\qquad k=\lfloor (1-c)N \rfloor
//! $$
//!
//! Monte Carlo VaR of a delta-gamma portfolio. The simulation returns the sorted
//! value changes alongside the quantile so charts can be drawn without re-sampling.

pub mod delta_gamma;
pub mod error;
pub mod simulation;

pub use delta_gamma::DeltaGammaPortfolio;
pub use error::VarError;
pub use simulation::simulate_var;
pub use simulation::VarEstimate;
pub use simulation::VarSimulation;
pub use simulation::DEFAULT_CONFIDENCE_LEVEL;
pub use simulation::DEFAULT_NUM_SIMULATIONS;
