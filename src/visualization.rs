//! # Visualization
//!
//! $$
//! \{\Delta P_{(i)}\}_{i=1}^N \mapsto \text{histogram},\ \left(\Delta P_{(i)}, \tfrac iN\right)
//! $$
//!
//! Diagnostic charts of a [`VarEstimate`]: the distribution of simulated value
//! changes with the VaR region shaded, and the empirical CDF with the tail level.
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use plotly::common::DashType;
use plotly::common::Fill;
use plotly::common::Line;
use plotly::common::Marker;
use plotly::common::Mode;
use plotly::layout::Axis;
use plotly::layout::Margin;
use plotly::Bar;
use plotly::Layout;
use plotly::Plot;
use plotly::Scatter;

use crate::quant::var::VarEstimate;
use crate::stats::empirical::histogram;

const VALUE_CHANGE_AXIS: &str = "Change in Portfolio Value (ΔP)";

fn percent_label(confidence_level: f64) -> String {
  let pct = confidence_level * 100.0;
  if (pct - pct.round()).abs() < 1e-9 {
    format!("{:.0}", pct)
  } else {
    format!("{:.1}", pct)
  }
}

pub struct VarPlotter {
  bins: usize,
  line_width: f64,
  show_legend: bool,
  width: usize,
  height: usize,
}

impl Default for VarPlotter {
  fn default() -> Self {
    Self::new()
  }
}

impl VarPlotter {
  pub fn new() -> Self {
    Self {
      bins: 50,
      line_width: 2.0,
      show_legend: true,
      width: 1200,
      height: 600,
    }
  }

  pub fn bins(mut self, n: usize) -> Self {
    self.bins = n.max(1);
    self
  }

  pub fn line_width(mut self, w: f64) -> Self {
    self.line_width = w;
    self
  }

  pub fn show_legend(mut self, show: bool) -> Self {
    self.show_legend = show;
    self
  }

  pub fn size(mut self, width: usize, height: usize) -> Self {
    self.width = width;
    self.height = height;
    self
  }

  fn layout(&self, title: &str, y_title: &str) -> Layout {
    Layout::new()
      .title(title)
      .width(self.width)
      .height(self.height)
      .show_legend(self.show_legend)
      .margin(Margin::new().left(72).right(24).top(72).bottom(56))
      .x_axis(Axis::new().title(VALUE_CHANGE_AXIS).show_grid(true))
      .y_axis(Axis::new().title(y_title).show_grid(true))
  }

  fn var_label(estimate: &VarEstimate) -> String {
    format!(
      "VaR ({}%): {:.2}",
      percent_label(estimate.confidence_level),
      estimate.var
    )
  }

  /// Histogram of the simulated value changes, the VaR marker and the shaded
  /// region between the worst outcome and the VaR.
  pub fn histogram_plot(&self, estimate: &VarEstimate) -> Plot {
    let hist = histogram(&estimate.sorted_changes, self.bins);
    let y_top = hist.max_count().max(1) as f64 * 1.05;
    let (lo, var) = (estimate.min_change(), estimate.var);

    let mut plot = Plot::new();
    plot.set_layout(
      self
        .layout(
          "Monte Carlo Simulation: Portfolio Value Changes (ΔP)",
          "Frequency",
        )
        .bar_gap(0.0),
    );

    plot.add_trace(
      Bar::new(hist.centers().to_vec(), hist.counts.to_vec())
        .name("Portfolio ΔP Distribution")
        .opacity(0.7)
        .marker(
          Marker::new()
            .color("blue")
            .line(Line::new().color("black").width(1.0)),
        ),
    );
    plot.add_trace(
      Scatter::new(vec![lo, lo, var, var, lo], vec![0.0, y_top, y_top, 0.0, 0.0])
        .mode(Mode::Lines)
        .fill(Fill::ToSelf)
        .fill_color("rgba(255,0,0,0.3)")
        .line(Line::new().width(0.0))
        .name("VaR Region"),
    );
    plot.add_trace(
      Scatter::new(vec![var, var], vec![0.0, y_top])
        .mode(Mode::Lines)
        .line(
          Line::new()
            .color("red")
            .dash(DashType::Dash)
            .width(self.line_width),
        )
        .name(Self::var_label(estimate).as_str()),
    );

    plot
  }

  /// Empirical CDF of the sorted value changes with the VaR and the tail level.
  pub fn cdf_plot(&self, estimate: &VarEstimate) -> Plot {
    let tail = 1.0 - estimate.confidence_level;
    let (lo, hi, var) = (estimate.min_change(), estimate.max_change(), estimate.var);

    let mut plot = Plot::new();
    plot.set_layout(self.layout(
      "Cumulative Distribution Function (CDF) of ΔP",
      "Cumulative Probability",
    ));

    plot.add_trace(
      Scatter::new(estimate.sorted_changes.to_vec(), estimate.cdf().to_vec())
        .mode(Mode::Lines)
        .line(Line::new().color("blue"))
        .name("Cumulative Distribution"),
    );
    plot.add_trace(
      Scatter::new(vec![var, var], vec![0.0, 1.0])
        .mode(Mode::Lines)
        .line(
          Line::new()
            .color("red")
            .dash(DashType::Dash)
            .width(self.line_width),
        )
        .name(Self::var_label(estimate).as_str()),
    );
    plot.add_trace(
      Scatter::new(vec![lo, hi], vec![tail, tail])
        .mode(Mode::Lines)
        .line(
          Line::new()
            .color("green")
            .dash(DashType::Dash)
            .width(self.line_width),
        )
        .name(
          format!(
            "Confidence Level: {:.1}%",
            estimate.confidence_level * 100.0
          )
          .as_str(),
        ),
    );

    plot
  }

  /// Open both charts in the browser.
  pub fn show(&self, estimate: &VarEstimate) {
    self.histogram_plot(estimate).show();
    self.cdf_plot(estimate).show();
  }

  /// Write both charts as standalone HTML files into `dir`.
  pub fn write_html<P: AsRef<Path>>(
    &self,
    estimate: &VarEstimate,
    dir: P,
  ) -> io::Result<[PathBuf; 2]> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let histogram_path = dir.join("var_histogram.html");
    let cdf_path = dir.join("var_cdf.html");
    fs::write(&histogram_path, self.histogram_plot(estimate).to_html())?;
    fs::write(&cdf_path, self.cdf_plot(estimate).to_html())?;
    tracing::info!(dir = %dir.display(), "wrote VaR charts");

    Ok([histogram_path, cdf_path])
  }
}
