use std::time::Duration;

use depot_tour::distance::CostMatrix;
use depot_tour::models::Point;
use depot_tour::solver::{LocalSearchStrategy, SolverConfig, TourSolver};
use proptest::prelude::*;

fn points_strategy(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-90.0f64..=90.0, -180.0f64..=180.0), 1..=max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (lat, lon))| {
                if i == 0 {
                    Point::depot(lat, lon)
                } else {
                    Point::stop(i, lat, lon)
                }
            })
            .collect()
    })
}

fn matrix_strategy(max: usize) -> impl Strategy<Value = CostMatrix> {
    (1..=max).prop_flat_map(|n| {
        prop::collection::vec(1i64..100_000, n * n).prop_map(move |mut data| {
            for i in 0..n {
                data[i * n + i] = 0;
            }
            CostMatrix::from_data(n, data).expect("square, non-negative, zero diagonal")
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal(points in points_strategy(12)) {
        let m = CostMatrix::from_points(&points).unwrap();
        prop_assert!(m.is_symmetric());
        for i in 0..m.size() {
            prop_assert_eq!(m.get(i, i), 0);
            for j in 0..m.size() {
                prop_assert!(m.get(i, j) >= 0);
                prop_assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn matrix_is_reproducible(points in points_strategy(8)) {
        let a = CostMatrix::from_points(&points).unwrap();
        let b = CostMatrix::from_points(&points).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn solver_returns_valid_tour(m in matrix_strategy(9), guided in any::<bool>(), or_opt in any::<bool>()) {
        let strategy = if guided {
            LocalSearchStrategy::GuidedLocalSearch
        } else {
            LocalSearchStrategy::TwoOpt
        };
        let config = SolverConfig::default()
            .with_time_limit(Duration::from_secs(10))
            .with_max_iterations(20)
            .with_strategy(strategy)
            .with_or_opt(or_opt);
        let s = TourSolver::new(config).solve(&m).unwrap();

        let n = m.size();
        let seq = s.tour.sequence();
        prop_assert_eq!(seq.len(), n + 1);
        prop_assert_eq!(seq[0], 0);
        prop_assert_eq!(seq[n], 0);
        prop_assert!(s.tour.is_valid(n));

        let recomputed: i64 = seq.windows(2).map(|w| m.get(w[0], w[1])).sum();
        prop_assert_eq!(recomputed, s.cost);
        prop_assert!(s.cost <= s.stats.construction_cost);
    }

    #[test]
    fn solver_is_deterministic(m in matrix_strategy(8)) {
        let config = SolverConfig::default()
            .with_time_limit(Duration::from_secs(10))
            .with_max_iterations(15);
        let solver = TourSolver::new(config);
        let a = solver.solve(&m).unwrap();
        let b = solver.solve(&m).unwrap();
        prop_assert_eq!(a.tour, b.tour);
        prop_assert_eq!(a.cost, b.cost);
    }
}
