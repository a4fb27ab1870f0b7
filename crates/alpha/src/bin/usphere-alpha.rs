//! Prompt neutron decay-constant analysis of a uranium-sphere simulation
//!
//! Loads the event tree written by the simulation run, then histograms and
//! fits the two quantities of interest: neutron arrival time and neutron
//! generation count. Figures land next to the data; everything printed is
//! also appended to a log file named after this executable.
//!
//! All analysis parameters are fixed constants below. The only input is the
//! data file, `usphere.json:tree` by default or the first argument if given.

use gtools_alpha::{run_quantity, Error, QuantityConfig, TeeLogger};
use gtools_events::read_tree_spec;

use log::{info, LevelFilter};
use std::env;
use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

/// Default `path:tree` specifier of the simulation output
const DATA_SPEC: &str = "usphere.json:tree";

/// The two analyses of the reference workflow
fn quantities() -> [QuantityConfig; 2] {
    [
        QuantityConfig {
            branch: "NeutronGlobalTime".to_string(),
            x_label: "Global Time [ns]".to_string(),
            y_label: "Neutron Number".to_string(),
            bins: 50,
            low: 0.0,
            high: 1250.0,
            window: Some((400.0, 1000.0)),
            log_scale: true,
            output_stem: "NeutronGlobalTime".into(),
        },
        QuantityConfig {
            branch: "NeutronGeneration".to_string(),
            x_label: "Neutron Generation".to_string(),
            y_label: "Neutron Number".to_string(),
            bins: 50,
            low: 0.0,
            high: 300.0,
            window: Some((54.0, 156.0)),
            log_scale: true,
            output_stem: "NeutronGeneration".into(),
        },
    ]
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    TeeLogger::init(log_path(), LevelFilter::Info)?;

    let spec = env::args().nth(1).unwrap_or_else(|| DATA_SPEC.to_string());
    let tree = read_tree_spec(&spec)?;
    info!("{} events loaded", tree.n_events());

    for config in &quantities() {
        run_quantity(&tree, config)?;
    }
    Ok(())
}

/// Log file named after the executable, `usphere-alpha.log`
fn log_path() -> PathBuf {
    env::args()
        .next()
        .map(PathBuf::from)
        .and_then(|argv0| argv0.file_stem().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("usphere-alpha"))
        .with_extension("log")
}
