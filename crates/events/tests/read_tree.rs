//! Integration tests for the JSON event-tree reader

use gtools_events::{read_tree, read_tree_spec, Error, EventTree};
use rstest::{fixture, rstest};

#[fixture]
fn usphere() -> EventTree {
    read_tree("./data/usphere.json", "tree").unwrap()
}

#[rstest]
fn event_count_from_file(usphere: EventTree) {
    assert_eq!(usphere.n_events(), 4);
    assert_eq!(
        usphere.branch_names(),
        vec!["NeutronGeneration", "NeutronGlobalTime"]
    );
}

#[rstest]
fn branch_flattens_in_event_order(usphere: EventTree) {
    let sample = usphere.branch("NeutronGlobalTime").unwrap().flatten();
    assert_eq!(sample.len(), 6);
    assert_eq!(sample.values(), &[12.5, 40.0, 310.2, 55.1, 700.0, 980.4]);
}

#[rstest]
fn missing_branch_is_an_error(usphere: EventTree) {
    assert!(matches!(
        usphere.branch("NeutronEnergy"),
        Err(Error::BranchNotFound(_))
    ));
}

#[test]
fn spec_addressing_matches_explicit_arguments() {
    let explicit = read_tree("./data/usphere.json", "tree").unwrap();
    let spec = read_tree_spec("./data/usphere.json:tree").unwrap();
    assert_eq!(explicit, spec);
}

#[test]
fn empty_tree_loads_with_zero_events() {
    let tree = read_tree("./data/usphere.json", "empty").unwrap();
    assert_eq!(tree.n_events(), 0);
}

#[test]
fn missing_tree_is_an_error() {
    assert!(matches!(
        read_tree("./data/usphere.json", "nope"),
        Err(Error::TreeNotFound(_))
    ));
}

#[test]
fn missing_file_is_an_error() {
    assert!(matches!(
        read_tree("./data/absent.json", "tree"),
        Err(Error::IOError(_))
    ));
}
