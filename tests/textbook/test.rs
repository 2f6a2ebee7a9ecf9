use rational_simplex::{
    Dantzig, FeasibilityResult, find_best_solution, find_start_corner, OptimizationResult,
    prepare_with_start_corner, R, SimplexError, solve, Solution, Solver, Tableau,
};

use super::{production_planning, values};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn production_planning_feasible_start() {
    init();
    let mut tableau = production_planning(false);

    assert_eq!(solve(&mut tableau).unwrap(), OptimizationResult::FiniteOptimum(Solution {
        objective_value: R!(49000),
        values: values(&[130, 20, 0, 0, 120]),
    }));
}

#[test]
fn production_planning_step_by_step() {
    init();
    let mut tableau = production_planning(true);
    assert!(!tableau.is_primal_feasible());

    let start_corner = match find_start_corner(&tableau).unwrap() {
        FeasibilityResult::Feasible(start_corner) => start_corner,
        FeasibilityResult::Infeasible => panic!("y = 1 is attainable"),
    };
    prepare_with_start_corner(&start_corner, &mut tableau).unwrap();
    assert!(tableau.is_primal_feasible());

    let result = find_best_solution(&mut tableau).unwrap();
    assert_eq!(result, OptimizationResult::FiniteOptimum(Solution {
        objective_value: R!(49000),
        values: values(&[130, 20, 0, 0, 120, 19]),
    }));
    assert_eq!(tableau.objective_function_value(), Ok(R!(49000)));
}

#[test]
fn pivot_rules_agree() {
    init();
    let mut bland = production_planning(true);
    let mut dantzig = production_planning(true);

    let bland = Solver::new().solve(&mut bland).unwrap();
    let dantzig = Solver::<Dantzig>::default().solve(&mut dantzig).unwrap();
    assert_eq!(bland, dantzig);
}

#[test]
fn infeasible() {
    init();
    let mut tableau = Tableau::from_canonical(
        vec![R!(1), R!(1)],
        vec![vec![R!(1), R!(1)], vec![R!(-1), R!(-1)]],
        vec![R!(2), R!(-3)],
    ).unwrap();

    assert_eq!(solve(&mut tableau).unwrap(), OptimizationResult::Infeasible);
}

#[test]
fn unbounded() {
    init();
    let mut tableau = Tableau::from_canonical(
        vec![R!(1), R!(1)],
        vec![vec![R!(1), R!(-1)]],
        vec![R!(1)],
    ).unwrap();

    assert_eq!(solve(&mut tableau).unwrap(), OptimizationResult::Unbounded);
}

#[test]
fn iteration_limit() {
    init();
    let mut tableau = production_planning(true);

    let result = Solver::new().with_max_iterations(0).solve(&mut tableau);
    assert!(matches!(result, Err(SimplexError::IterationLimit(0))));
}

#[test]
fn dimension_mismatch() {
    let result = Tableau::from_canonical(vec![R!(1)], vec![vec![R!(1), R!(2)]], vec![R!(1)]);
    assert!(matches!(result, Err(SimplexError::Dimension(_))));
}
