use alphabeta::search::{reachable_positions, sample_positions, verify_positions};

#[test]
fn whole_state_space_agrees() {
    let positions = reachable_positions();
    let report = verify_positions(&positions, None).unwrap();

    assert!(report.is_consistent(), "{:?}", report.disagreements);
    assert_eq!(report.positions, 4_520);
    assert_eq!(report.cutoff_positions, 2_148);
    assert_eq!(report.pruned_nodes.get(), 474_866);
    assert_eq!(report.unpruned_nodes.get(), 2_125_535);
    assert!(report.pruning_ratio() > 0.75);
}

#[test]
fn sampled_sweep_agrees() {
    let positions = sample_positions(50, 3);
    let report = verify_positions(&positions, None).unwrap();

    assert!(report.is_consistent());
    assert_eq!(report.positions, 50);
    assert!(report.pruned_nodes <= report.unpruned_nodes);
}
