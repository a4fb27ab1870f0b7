use crate::error::Result;

use gtools_events::EventTree;
use gtools_fit::{fit_exponential, ExpFit};
use gtools_hist::{FitWindow, Histogram};
use gtools_plot::Figure;

use log::info;
use std::path::PathBuf;

/// Everything needed to analyse one quantity of an event tree
///
/// The reference analysis hardcoded these per script variant; collecting
/// them here collapses the variants into one routine. `window` is the pair
/// of physical fit boundaries, or `None` to skip fitting entirely and only
/// draw the histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityConfig {
    /// Branch of the event tree to analyse
    pub branch: String,
    /// X axis label, e.g. `Global Time [ns]`
    pub x_label: String,
    /// Y axis label, e.g. `Neutron Number`
    pub y_label: String,
    /// Number of histogram bins
    pub bins: usize,
    /// Lower edge of the binned range
    pub low: f64,
    /// Upper edge of the binned range (excluded)
    pub high: f64,
    /// Physical fit boundaries, or `None` for no fit
    pub window: Option<(f64, f64)>,
    /// Use a logarithmic y axis
    pub log_scale: bool,
    /// Output figure path without extension
    pub output_stem: PathBuf,
}

/// Run the full pipeline for one quantity of a loaded tree
///
/// Flattens the configured branch, bins it normalised to the tree's event
/// count, optionally fits an exponential over the configured window, and
/// writes `<output_stem>.svg` and `<output_stem>.png`.
///
/// When a fit is made its parameters are logged in the reference format and
/// returned:
///
/// ```text
/// k = -0.010173 (0.000211)
/// exp(k) = 0.989879 (0.000209)
/// ```
///
/// Every failure is fatal: a missing branch, a window with an empty bin, an
/// unwritable output file. Nothing is retried and no partial results are
/// produced.
pub fn run_quantity(tree: &EventTree, config: &QuantityConfig) -> Result<Option<ExpFit>> {
    let sample = tree.branch(&config.branch)?.flatten();
    let histogram = Histogram::new(
        sample.values(),
        config.bins,
        config.low,
        config.high,
        tree.n_events(),
    )?;

    let fitted = match config.window {
        Some((lower, upper)) => {
            let window = FitWindow::from_bounds(&histogram, lower, upper)?;
            let fit = fit_exponential(&window.centers(&histogram), window.counts(&histogram))?;

            info!("k = {:.6} ({:.6})", fit.slope, fit.slope_err);
            let (factor, factor_err) = fit.exp_slope();
            info!("exp(k) = {:.6} ({:.6})", factor, factor_err);

            Some((window, fit))
        }
        None => None,
    };

    let mut figure = Figure::new(&histogram, &config.x_label, &config.y_label);
    if config.log_scale {
        figure.set_log_scale();
    }
    if let Some((window, fit)) = &fitted {
        figure.set_fit(window, fit);
    }
    figure.write(&config.output_stem)?;

    Ok(fitted.map(|(_, fit)| fit))
}
