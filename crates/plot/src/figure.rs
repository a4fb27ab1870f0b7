use crate::error::{Error, Result};

use gtools_fit::ExpFit;
use gtools_hist::{FitWindow, Histogram};
use gtools_utils::{f, ValueExt};

use log::debug;
use plotters::chart::ChartContext;
use plotters::coord::{CoordTranslate, Shift};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use std::path::Path;

/// Figure size in pixels, also the SVG user-unit size
const FIGURE_SIZE: (u32, u32) = (1000, 800);

/// A histogram figure with an optional exponential-fit overlay
///
/// Renders the histogram as a step-style trace over its full range. When a
/// fit is attached, the figure gains two vertical dashed markers at the fit
/// window boundaries, the fitted curve across the window, and a legend
/// giving the correlation of the fit.
///
/// One [write()](Figure::write) call persists the same figure as both
/// `<stem>.svg` and `<stem>.png`.
///
/// ```rust, no_run
/// # use gtools_hist::Histogram;
/// # use gtools_plot::Figure;
/// let hist = Histogram::new(&[5.0, 80.0], 50, 0.0, 300.0, 10).unwrap();
///
/// let mut figure = Figure::new(&hist, "Neutron Generation", "Neutron Number");
/// figure.set_log_scale();
/// figure.write("NeutronGeneration").unwrap();
/// ```
#[derive(Debug)]
pub struct Figure<'a> {
    histogram: &'a Histogram,
    x_label: &'a str,
    y_label: &'a str,
    log_y: bool,
    fit: Option<(&'a FitWindow, &'a ExpFit)>,
}

/// Precomputed point series, shared by the linear and log renderers
struct Traces {
    step: Vec<(f64, f64)>,
    markers: Vec<Vec<(f64, f64)>>,
    curve: Option<(Vec<(f64, f64)>, String)>,
}

impl<'a> Figure<'a> {
    /// Set up a figure of a histogram with the given axis labels
    pub fn new(histogram: &'a Histogram, x_label: &'a str, y_label: &'a str) -> Self {
        Self {
            histogram,
            x_label,
            y_label,
            log_y: false,
            fit: None,
        }
    }

    /// Use a logarithmic y axis
    pub fn set_log_scale(&mut self) {
        self.log_y = true;
    }

    /// Overlay a fitted exponential and its window boundary markers
    ///
    /// The window must be the one the fit was made over, derived from the
    /// same histogram this figure draws.
    pub fn set_fit(&mut self, window: &'a FitWindow, fit: &'a ExpFit) {
        self.fit = Some((window, fit));
    }

    /// Write the figure to `<stem>.svg` and `<stem>.png`
    ///
    /// Both files hold the same rendering. Failures propagate immediately;
    /// a partially written pair is not cleaned up.
    pub fn write<P: AsRef<Path>>(&self, stem: P) -> Result<()> {
        let stem = stem.as_ref();
        self.write_svg(stem.with_extension("svg"))?;
        self.write_png(stem.with_extension("png"))?;
        Ok(())
    }

    /// Write the vector form of the figure
    pub fn write_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        debug!("Writing {}", path.as_ref().display());
        let root = SVGBackend::new(path.as_ref(), FIGURE_SIZE).into_drawing_area();
        self.render(root)
    }

    /// Write the raster form of the figure
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        debug!("Writing {}", path.as_ref().display());
        let root = BitMapBackend::new(path.as_ref(), FIGURE_SIZE).into_drawing_area();
        self.render(root)
    }

    /// Draw the full figure onto a backend drawing area
    fn render<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(backend)?;

        let (y_min, y_max) = self.y_range();
        let x_range = self.histogram.low()..self.histogram.high();
        let traces = self.traces(y_min);

        // the log coordinate is a different chart type, hence two arms
        if self.log_y {
            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d(x_range, (y_min..y_max).log_scale())
                .map_err(backend)?;
            chart
                .configure_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .y_label_formatter(&|v: &f64| v.sci(1, 2))
                .draw()
                .map_err(backend)?;
            self.draw_traces(&mut chart, &traces).map_err(backend)?;
        } else {
            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d(x_range, y_min..y_max)
                .map_err(backend)?;
            chart
                .configure_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .draw()
                .map_err(backend)?;
            self.draw_traces(&mut chart, &traces).map_err(backend)?;
        }

        root.present().map_err(backend)
    }

    /// Draw the data series and legend, independent of the y coordinate type
    fn draw_traces<'b, DB, CT>(
        &self,
        chart: &mut ChartContext<'b, DB, CT>,
        traces: &Traces,
    ) -> core::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
    where
        DB: DrawingBackend + 'b,
        CT: CoordTranslate<From = (f64, f64)>,
    {
        chart
            .draw_series(LineSeries::new(traces.step.iter().copied(), &BLUE))?
            .label("simulation")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        for (i, marker) in traces.markers.iter().enumerate() {
            let series = chart.draw_series(DashedLineSeries::new(
                marker.iter().copied(),
                6,
                4,
                ShapeStyle::from(&BLACK),
            ))?;
            // one legend entry covers both boundary markers
            if i == 0 {
                series
                    .label("fitting boundary")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
            }
        }

        if let Some((points, label)) = &traces.curve {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), &RED))?
                .label(label.clone())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
        }

        if self.fit.is_some() {
            chart
                .configure_series_labels()
                .border_style(BLACK)
                .background_style(WHITE.mix(0.8))
                .draw()?;
        }

        Ok(())
    }

    /// Build the point series for the histogram, markers, and fit curve
    fn traces(&self, y_floor: f64) -> Traces {
        let edges = self.histogram.edges();
        let counts = self.histogram.counts();

        let mut step = Vec::with_capacity(2 * counts.len());
        for (i, &count) in counts.iter().enumerate() {
            // a log axis cannot take empty bins, pin them to the floor
            let count = if self.log_y { count.max(y_floor) } else { count };
            step.push((edges[i], count));
            step.push((edges[i + 1], count));
        }

        let mut markers = Vec::new();
        let mut curve = None;
        if let Some((window, fit)) = self.fit {
            let (w_min, w_max) = min_max(window.counts(self.histogram));
            for x in [
                window.lower_edge(self.histogram),
                window.upper_edge(self.histogram),
            ] {
                markers.push(vec![(x, w_min / 1.2), (x, w_max * 1.2)]);
            }

            let x = window.centers(self.histogram);
            let y = fit.curve(&x);
            let points = x.into_iter().zip(y).collect();
            curve = Some((points, f!("fit (r={:.6})", fit.correlation)));
        }

        Traces {
            step,
            markers,
            curve,
        }
    }

    /// Y-axis limits, following the reference plots
    ///
    /// With a fit attached the windowed counts set the limits, a decade of
    /// headroom below and a fifth above. Without one the whole histogram
    /// does, and on a log axis only the positive counts have a say.
    fn y_range(&self) -> (f64, f64) {
        let relevant: Vec<f64> = match self.fit {
            Some((window, _)) => window.counts(self.histogram).to_vec(),
            None => self
                .histogram
                .counts()
                .iter()
                .copied()
                .filter(|&c| !self.log_y || c > 0.0)
                .collect(),
        };

        if relevant.is_empty() {
            return if self.log_y { (1e-3, 1.0) } else { (0.0, 1.0) };
        }

        let (min, max) = min_max(&relevant);
        if self.log_y {
            let min = if min > 0.0 { min / 10.0 } else { max / 1e3 };
            (min, (max * 1.2).max(min * 10.0))
        } else {
            (0.0, (max * 1.2).max(1e-12))
        }
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}

fn backend<E>(error: DrawingAreaErrorKind<E>) -> Error
where
    E: std::error::Error + Send + Sync,
{
    Error::Backend(error.to_string())
}
