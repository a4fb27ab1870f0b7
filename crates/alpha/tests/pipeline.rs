//! End-to-end tests for the decay-constant pipeline

use gtools_alpha::{run_quantity, QuantityConfig};
use gtools_events::{Branch, EventTree};

use std::fs;
use std::path::PathBuf;

const DECAY_RATE: f64 = 0.01;

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Synthetic tree of 1000 events whose arrival times follow an exponential
/// decay with rate 0.01 over [0, 1250], sampled by inverse CDF so the test
/// is deterministic
fn synthetic_tree(n_events: usize, values_per_event: usize) -> EventTree {
    let total = n_events * values_per_event;
    let truncation = 1.0 - (-DECAY_RATE * 1250.0_f64).exp();

    let times: Vec<f64> = (0..total)
        .map(|i| {
            let u = (i as f64 + 0.5) / total as f64;
            -(1.0 - u * truncation).ln() / DECAY_RATE
        })
        .collect();

    let entries = times
        .chunks(values_per_event)
        .map(|chunk| chunk.to_vec())
        .collect();

    EventTree::new("tree", vec![Branch::new("NeutronGlobalTime", entries)]).unwrap()
}

fn time_config(stem: PathBuf) -> QuantityConfig {
    QuantityConfig {
        branch: "NeutronGlobalTime".to_string(),
        x_label: "Global Time [ns]".to_string(),
        y_label: "Neutron Number".to_string(),
        bins: 50,
        low: 0.0,
        high: 1250.0,
        window: Some((400.0, 1000.0)),
        log_scale: true,
        output_stem: stem,
    }
}

#[test]
fn recovers_the_decay_constant() {
    let dir = out_dir("decay");
    let tree = synthetic_tree(1000, 500);

    let fit = run_quantity(&tree, &time_config(dir.join("NeutronGlobalTime")))
        .unwrap()
        .expect("window was configured, a fit should come back");

    // recover k within 10% with a strongly linear log histogram
    assert!(
        (fit.slope + DECAY_RATE).abs() < 0.1 * DECAY_RATE,
        "slope {} too far from {}",
        fit.slope,
        -DECAY_RATE
    );
    assert!(fit.correlation < -0.9, "r = {}", fit.correlation);
    assert!(fit.slope_err.abs() < DECAY_RATE);

    for ext in ["svg", "png"] {
        let path = dir.join("NeutronGlobalTime").with_extension(ext);
        assert!(path.exists(), "{} missing", path.display());
    }
}

#[test]
fn no_window_means_no_fit() {
    let dir = out_dir("nofit");
    let tree = synthetic_tree(100, 20);

    let mut config = time_config(dir.join("NeutronGlobalTime"));
    config.window = None;

    let fit = run_quantity(&tree, &config).unwrap();
    assert!(fit.is_none());
    assert!(dir.join("NeutronGlobalTime.svg").exists());
}

#[test]
fn sparse_window_bins_fail_the_fit() {
    let dir = out_dir("sparse");
    // ten early values leave the fit window completely empty
    let entries = (0..10).map(|i| vec![5.0 + i as f64]).collect();
    let tree = EventTree::new("tree", vec![Branch::new("NeutronGlobalTime", entries)]).unwrap();

    let result = run_quantity(&tree, &time_config(dir.join("NeutronGlobalTime")));
    assert!(result.is_err());
}

#[test]
fn missing_branch_is_fatal() {
    let dir = out_dir("missing");
    let tree = EventTree::new("tree", Vec::new()).unwrap();

    let result = run_quantity(&tree, &time_config(dir.join("NeutronGlobalTime")));
    assert!(result.is_err());
}
