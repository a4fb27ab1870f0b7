//! Module for rendering histogram and fit figures
//!
//! Draws a [Histogram](gtools_hist::Histogram) as a step-style trace with an
//! optional fit overlay: two vertical dashed boundary markers at the fit
//! window edges and the re-exponentiated fit curve across the window,
//! labelled with its correlation coefficient. Figures are written to both
//! SVG (vector) and PNG (raster) from one call.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use gtools_hist::{FitWindow, Histogram};
//! # use gtools_fit::fit_exponential;
//! # use gtools_plot::Figure;
//! let hist = Histogram::new(&[12.5, 40.0], 50, 0.0, 1250.0, 100).unwrap();
//! let window = FitWindow::from_bounds(&hist, 400.0, 1000.0).unwrap();
//! let fit = fit_exponential(&window.centers(&hist), window.counts(&hist)).unwrap();
//!
//! // Initialise the figure and set some options
//! let mut figure = Figure::new(&hist, "Global Time [ns]", "Neutron Number");
//! figure.set_log_scale();
//! figure.set_fit(&window, &fit);
//!
//! // Writes NeutronGlobalTime.svg and NeutronGlobalTime.png
//! figure.write("NeutronGlobalTime").unwrap();
//! ```

mod error;
mod figure;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use figure::Figure;
