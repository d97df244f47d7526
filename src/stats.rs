//! # Stats
//!
//! $$
//! \hat F_N(x)=\frac1N\sum_{i=1}^N \mathbf 1\{X_i\le x\}
//! $$
//!
pub mod empirical;

pub use empirical::ecdf;
pub use empirical::empirical_quantile;
pub use empirical::histogram;
pub use empirical::sorted_ascending;
pub use empirical::tail_index;
pub use empirical::Histogram;
