//! End-to-end checks of the public API on generated graphs.

use chromatic::prelude::*;
use chromatic::validate::validate_coloring;

#[test]
fn same_inputs_give_the_same_graph() {
    let a = new_graph(10, 42).unwrap();
    let b = new_graph(10, 42).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, new_graph(10, 43).unwrap());
}

#[test]
fn weights_are_symmetric_with_zero_diagonal() {
    let g = new_graph(30, 7).unwrap();
    for i in 0..30 {
        assert_eq!(g.weight(i, i), 0);
        for j in 0..30 {
            assert_eq!(g.weight(i, j), g.weight(j, i));
            assert!(g.weight(i, j) < 100);
        }
    }
}

#[test]
fn exact_result_is_bounded_and_dominated_by_greedy() {
    for seed in 0..15 {
        let g = new_graph(6, seed).unwrap();
        for threshold in [0, 33, 66, 99] {
            let exact = brute_force_chromatic_number(&g, threshold).unwrap();
            let upper = greedy_chromatic_number(&g, threshold).unwrap();
            assert!((1..=6).contains(&exact));
            assert!(upper >= exact);
        }
    }
}

#[test]
fn threshold_99_means_one_color() {
    let g = new_graph(7, 2024).unwrap();
    assert_eq!(brute_force_chromatic_number(&g, 99).unwrap(), 1);
    assert_eq!(greedy_chromatic_number(&g, 99).unwrap(), 1);
}

#[test]
fn complete_graph_means_n_colors() {
    let th = EdgeThreshold::new(0).unwrap();
    for n in 1..=6 {
        let g = Graph::complete(n).unwrap();
        for &algo in Algorithm::all() {
            assert_eq!(algo.run(&g, th).unwrap().chromatic_number, n, "{algo} n={n}");
        }
    }
}

#[test]
fn bipartite_graph_means_two_colors() {
    let g = Graph::complete_bipartite(3, 4).unwrap();
    assert_eq!(brute_force_chromatic_number(&g, 0).unwrap(), 2);
    assert_eq!(greedy_chromatic_number(&g, 0).unwrap(), 2);
}

#[test]
fn four_vertices_seed_42_threshold_50() {
    let g = new_graph(4, 42).unwrap();
    let r = brute_force_chromatic_number(&g, 50).unwrap();
    for _ in 0..3 {
        let again = new_graph(4, 42).unwrap();
        assert_eq!(brute_force_chromatic_number(&again, 50).unwrap(), r);
    }
    assert!(greedy_chromatic_number(&g, 50).unwrap() >= r);
}

#[test]
fn alphabet_boundary() {
    let g36 = new_graph(36, 1).unwrap();
    let aborted = BruteForceSolver::new(BruteForceConfig {
        parallel: true,
        deadline: Some(std::time::Duration::from_millis(20)),
        ..BruteForceConfig::default()
    })
    .solve(&g36, EdgeThreshold::new(50).unwrap());
    assert!(matches!(aborted, Err(ColoringError::SearchAborted { .. })));

    assert!(chromatic::brute::check_supported(36).is_ok());

    let g37 = new_graph(37, 1).unwrap();
    assert!(matches!(
        brute_force_chromatic_number(&g37, 50),
        Err(ColoringError::UnsupportedSize { .. })
    ));
}

#[test]
fn invalid_arguments_are_rejected_up_front() {
    assert!(matches!(new_graph(0, 1), Err(ColoringError::InvalidArgument(_))));
    let g = new_graph(3, 1).unwrap();
    assert!(matches!(
        brute_force_chromatic_number(&g, -1),
        Err(ColoringError::InvalidArgument(_))
    ));
    assert!(matches!(
        greedy_chromatic_number(&g, 100),
        Err(ColoringError::InvalidArgument(_))
    ));
}

#[test]
fn java_generator_solutions_are_proper() {
    let th = EdgeThreshold::new(50).unwrap();
    let g = Graph::generate_with(6, 42, PrngKind::JavaLcg).unwrap();
    for &algo in Algorithm::all() {
        let sol = algo.run(&g, th).unwrap();
        validate_coloring(&g, th, &sol.coloring).unwrap();
    }
}
