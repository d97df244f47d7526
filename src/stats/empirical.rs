//! # Empirical
//!
//! $$
//! \hat F_N(x_{(i)}) = \frac{i}{N},\qquad \hat q_\alpha = x_{(\lfloor \alpha N \rfloor)}
//! $$
//!
//! Order statistics of a simulated sample.
use ndarray::Array1;

/// Sample sorted ascending under the IEEE-754 total order.
pub fn sorted_ascending(values: &Array1<f64>) -> Array1<f64> {
  let mut sorted = values.to_vec();
  sorted.sort_unstable_by(f64::total_cmp);
  Array1::from(sorted)
}

/// Zero-based index of the `1 - confidence_level` tail in a sample of size `n`.
///
/// Truncates toward zero. The result is clamped to `n - 1` so the index stays
/// addressable for any `n >= 1`.
#[inline]
pub fn tail_index(n: usize, confidence_level: f64) -> usize {
  let k = ((1.0 - confidence_level) * n as f64) as usize;
  k.min(n.saturating_sub(1))
}

/// Empirical quantile at the `1 - confidence_level` tail of an ascending sample.
///
/// # Panics
/// Panics if `sorted` is empty.
pub fn empirical_quantile(sorted: &Array1<f64>, confidence_level: f64) -> f64 {
  assert!(!sorted.is_empty(), "empirical quantile of an empty sample");
  sorted[tail_index(sorted.len(), confidence_level)]
}

/// CDF ordinates `i / n` for `i = 1..=n`.
pub fn ecdf(n: usize) -> Array1<f64> {
  let n_f = n as f64;
  Array1::from_iter((1..=n).map(|i| i as f64 / n_f))
}

/// Equal-width histogram.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
  /// Bin edges, `bins + 1` values.
  pub edges: Array1<f64>,
  /// Observation count per bin.
  pub counts: Array1<usize>,
}

impl Histogram {
  /// Midpoint of each bin.
  pub fn centers(&self) -> Array1<f64> {
    Array1::from_iter(self.edges.windows(2).into_iter().map(|w| 0.5 * (w[0] + w[1])))
  }

  /// Width of the bins.
  pub fn bin_width(&self) -> f64 {
    if self.edges.len() < 2 {
      return 0.0;
    }
    self.edges[1] - self.edges[0]
  }

  /// Largest bin count.
  pub fn max_count(&self) -> usize {
    self.counts.iter().copied().max().unwrap_or(0)
  }
}

/// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// Every bin is half-open except the last, which also holds `max`. A constant
/// sample is centred in a unit-wide range.
pub fn histogram(values: &Array1<f64>, bins: usize) -> Histogram {
  let bins = bins.max(1);
  if values.is_empty() {
    return Histogram {
      edges: Array1::linspace(0.0, 1.0, bins + 1),
      counts: Array1::zeros(bins),
    };
  }

  let (mut lo, mut hi) = values
    .iter()
    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
      (lo.min(v), hi.max(v))
    });
  if lo == hi {
    lo -= 0.5;
    hi += 0.5;
  }

  let edges = Array1::linspace(lo, hi, bins + 1);
  let width = (hi - lo) / bins as f64;
  let mut counts = Array1::<usize>::zeros(bins);
  for &v in values.iter() {
    let idx = (((v - lo) / width) as usize).min(bins - 1);
    counts[idx] += 1;
  }

  Histogram { edges, counts }
}
