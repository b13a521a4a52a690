//! End-to-end rank computations on small hand-checked graphs.

use pagerank_core::{RankConfig, RankEngine, RankError};
use pagerank_linalg::{DenseMatrix, LinalgError};

fn ranks(values: &[f64], config: RankConfig) -> Vec<f64> {
    let c = DenseMatrix::from_flat(values).expect("perfect square input");
    let mut engine = RankEngine::new(c, config).expect("valid engine");
    engine.compute_ranks().expect("converges").scores
}

mod scenarios {
    use super::*;

    #[test]
    fn test_three_cycle_uniform() {
        let scores = ranks(
            &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            RankConfig::new().with_damping(0.85).with_threshold(0.001),
        );
        for s in scores {
            assert!((s - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_two_nodes_one_link() {
        // Column 1 links into row 0; column 0 is dangling.
        let scores = ranks(&[0.0, 1.0, 0.0, 0.0], RankConfig::default());
        assert!(scores[0] > scores[1]);
        assert!((scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_four_page_web() {
        // A -> B, C; B -> C; C -> A; D -> C
        let scores = ranks(
            &[
                0.0, 0.0, 1.0, 0.0, //
                1.0, 0.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, 1.0, //
                0.0, 0.0, 0.0, 0.0,
            ],
            RankConfig::new().with_threshold(1e-10),
        );

        // C collects the most links, D receives none.
        let best = scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i);
        assert_eq!(best, Some(2));
        assert!((scores[3] - 0.15 / 4.0).abs() < 1e-6);
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn test_lower_damping_flattens_ranks() {
        let star = [
            0.0, 1.0, 1.0, 1.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0,
        ];
        let low = ranks(&star, RankConfig::new().with_damping(0.5));
        let high = ranks(&star, RankConfig::new().with_damping(0.95));
        assert!(high[0] - high[1] > low[0] - low[1]);
    }

    #[test]
    fn test_full_damping_strongly_connected() {
        // With damping 1 the 3-cycle has no teleport term but still converges
        // from the uniform start.
        let scores = ranks(
            &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            RankConfig::new().with_damping(1.0),
        );
        for s in scores {
            assert!((s - 1.0 / 3.0).abs() < 1e-9);
        }
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_flat_input_not_square() {
        assert_eq!(
            DenseMatrix::from_flat(&[0.0; 5]).unwrap_err(),
            LinalgError::NotPerfectSquare { len: 5 }
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = DenseMatrix::square(3).unwrap();
        assert!(matches!(
            m.get(5, 0),
            Err(LinalgError::IndexOutOfBounds { row: 5, col: 0, rows: 3, cols: 3 })
        ));
    }

    #[test]
    fn test_rectangular_connectivity() {
        let c = DenseMatrix::zeros(3, 2).unwrap();
        assert!(matches!(
            RankEngine::with_defaults(c),
            Err(RankError::NotSquare { rows: 3, cols: 2 })
        ));
    }

    #[test]
    fn test_periodic_graph_without_teleport_hits_cap() {
        // Node 2 feeds node 1 once; afterwards the 0 <-> 1 cycle swaps its
        // mass every step because damping 1 leaves no teleport term.
        let c = DenseMatrix::from_flat(&[
            0.0, 1.0, 0.0, //
            1.0, 0.0, 1.0, //
            0.0, 0.0, 0.0,
        ])
        .unwrap();
        let config = RankConfig::new()
            .with_damping(1.0)
            .with_max_iterations(Some(50));
        let mut engine = RankEngine::new(c, config).unwrap();
        let err = engine.compute_ranks().unwrap_err();
        assert!(matches!(err, RankError::NotConverged { iterations: 50, .. }));
    }
}
