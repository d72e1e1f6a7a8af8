use std::time::Duration;

use depot_tour::dataset;
use depot_tour::distance::CostMatrix;
use depot_tour::models::{Point, Tour};
use depot_tour::solver::{LocalSearchStrategy, SolverConfig, TourSolver};
use depot_tour::TourError;

fn config() -> SolverConfig {
    SolverConfig::default()
        .with_time_limit(Duration::from_secs(30))
        .with_max_iterations(200)
}

/// Exact optimum by depth-first enumeration with cost bounding.
fn brute_force(m: &CostMatrix) -> i64 {
    fn dfs(m: &CostMatrix, last: usize, visited: &mut [bool], depth: usize, cost: i64, best: &mut i64) {
        let n = m.size();
        if cost >= *best {
            return;
        }
        if depth == n {
            *best = (*best).min(cost + m.get(last, 0));
            return;
        }
        for next in 1..n {
            if !visited[next] {
                visited[next] = true;
                dfs(m, next, visited, depth + 1, cost + m.get(last, next), best);
                visited[next] = false;
            }
        }
    }

    let n = m.size();
    if n <= 1 {
        return 0;
    }
    let mut visited = vec![false; n];
    visited[0] = true;
    let mut best = i64::MAX;
    dfs(m, 0, &mut visited, 1, 0, &mut best);
    best
}

#[test]
fn right_triangle_instance() {
    let m = CostMatrix::from_data(3, vec![0, 3000, 4000, 3000, 0, 5000, 4000, 5000, 0])
        .expect("valid");
    let s = TourSolver::new(config()).solve(&m).expect("solved");
    assert_eq!(s.cost, 12000);
    let seq = s.tour.sequence();
    assert!(seq == [0, 1, 2, 0] || seq == [0, 2, 1, 0]);
}

#[test]
fn single_depot_is_trivial() {
    let points = vec![Point::depot(40.8190, 29.3005)];
    let (_, s) = TourSolver::new(config()).solve_points(&points).expect("solved");
    assert_eq!(s.tour, Tour::trivial(0));
    assert_eq!(s.cost, 0);
}

#[test]
fn two_points_round_trip() {
    let points = dataset::turkey()[..2].to_vec();
    let (m, s) = TourSolver::new(config()).solve_points(&points).expect("solved");
    assert_eq!(s.tour.sequence(), &[0, 1, 0]);
    assert_eq!(s.cost, 2 * m.get(0, 1));
}

#[test]
fn dataset_reaches_optimum() {
    let points = dataset::turkey();
    let (m, s) = TourSolver::new(config()).solve_points(&points).expect("solved");
    assert!(s.tour.is_valid(10));
    assert_eq!(m.tour_cost(&s.tour), s.cost);
    assert_eq!(s.cost, brute_force(&m));
}

#[test]
fn reported_cost_matches_recomputed() {
    let m = CostMatrix::from_points(&dataset::turkey()).expect("valid");
    for strategy in [
        LocalSearchStrategy::TwoOpt,
        LocalSearchStrategy::GuidedLocalSearch,
    ] {
        for or_opt in [false, true] {
            let c = config().with_strategy(strategy).with_or_opt(or_opt);
            let s = TourSolver::new(c).solve(&m).expect("solved");
            let recomputed: i64 = s.tour.legs().map(|(a, b)| m.get(a, b)).sum();
            assert_eq!(recomputed, s.cost);
            assert!(s.cost <= s.stats.construction_cost);
        }
    }
}

#[test]
fn solves_are_deterministic() {
    let m = CostMatrix::from_points(&dataset::turkey()).expect("valid");
    let solver = TourSolver::new(config());
    let a = solver.solve(&m).expect("solved");
    let b = solver.solve(&m).expect("solved");
    assert_eq!(a.tour, b.tour);
    assert_eq!(a.cost, b.cost);
}

#[test]
fn guided_never_worse_than_descent() {
    let m = CostMatrix::from_points(&dataset::turkey()).expect("valid");
    let plain = TourSolver::new(config().with_strategy(LocalSearchStrategy::TwoOpt))
        .solve(&m)
        .expect("solved");
    let guided = TourSolver::new(config()).solve(&m).expect("solved");
    assert!(guided.cost <= plain.cost);
}

#[test]
fn adding_a_stop_never_decreases_cost() {
    let all = dataset::turkey();
    let mut previous = 0;
    for n in 1..=8 {
        let (m, s) = TourSolver::new(config())
            .solve_points(&all[..n])
            .expect("solved");
        assert_eq!(s.cost, brute_force(&m));
        assert!(s.cost >= previous);
        previous = s.cost;
    }
}

#[test]
fn custom_start_index() {
    let m = CostMatrix::from_points(&dataset::turkey()).expect("valid");
    let s = TourSolver::new(config().with_start(4)).solve(&m).expect("solved");
    assert_eq!(s.tour.start(), 4);
    assert!(s.tour.is_valid(10));
    // The optimal cycle does not depend on where it starts
    assert_eq!(s.cost, brute_force(&m));
}

#[test]
fn invalid_coordinate_is_rejected() {
    let mut points = dataset::turkey();
    points[3] = Point::stop(3, f64::INFINITY, 28.8640);
    let r = TourSolver::new(config()).solve_points(&points);
    assert!(matches!(r, Err(TourError::InvalidCoordinate { index: 3, .. })));
}

#[test]
fn empty_instance_is_infeasible() {
    let r = TourSolver::new(config()).solve_points(&[]);
    assert!(matches!(r, Err(TourError::Infeasible(_))));
}

#[test]
fn exhausted_budget_before_construction() {
    let m = CostMatrix::from_points(&dataset::turkey()).expect("valid");
    let r = TourSolver::new(config().with_time_limit(Duration::ZERO)).solve(&m);
    assert!(matches!(r, Err(TourError::Timeout { .. })));
}

#[test]
fn short_budget_still_returns_valid_tour() {
    let m = CostMatrix::from_points(&dataset::turkey()).expect("valid");
    let c = SolverConfig::default().with_time_limit(Duration::from_millis(50));
    let s = TourSolver::new(c).solve(&m).expect("solved");
    assert!(s.tour.is_valid(10));
    assert_eq!(m.tour_cost(&s.tour), s.cost);
}

#[test]
fn returns_best_tour_not_last() {
    let m = CostMatrix::from_points(&dataset::turkey()).expect("valid");
    let mut previous: Option<i64> = None;
    let mut saw_worse_last = false;
    for rounds in 0..=40 {
        let s = TourSolver::new(config().with_max_iterations(rounds))
            .solve(&m)
            .expect("solved");
        assert_eq!(m.tour_cost(&s.tour), s.cost);
        assert!(s.cost <= s.stats.last_cost);
        // One more penalty round keeps the best unless its optimum beats it
        let expected = previous.map_or(s.stats.last_cost, |p| p.min(s.stats.last_cost));
        assert_eq!(s.cost, expected, "rounds={rounds}");
        saw_worse_last |= s.stats.last_cost > s.cost;
        previous = Some(s.cost);
    }
    assert!(saw_worse_last);
}

#[test]
fn oversized_matrix_json_is_rejected() {
    let r = serde_json::from_str::<CostMatrix>(r#"{"data":[0],"size":3,"symmetric":true}"#);
    assert!(r.is_err());

    let big = i64::MAX / 2;
    let json = format!(r#"{{"size":2,"data":[0,{big},{big},0]}}"#);
    assert!(serde_json::from_str::<CostMatrix>(&json).is_err());
}
