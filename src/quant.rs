//! # Quant
//!
//! $$
//! \Pr\left(\Delta P \le \mathrm{VaR}_c\right) = 1 - c
//! $$
//!
pub mod var;
