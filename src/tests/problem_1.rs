//! Production planning with a lower bound.
//!
//! Maximize `300x + 500y` subject to `x + 2y <= 170`, `x + y <= 150`, `3y <= 180` and `y >= 1`.
//! The last constraint makes the slack basis infeasible, so both phases are needed.
use crate::algorithm::{OptimizationResult, Solution};
use crate::algorithm::two_phase::phase_one::{artificial_tableau, FeasibilityResult};
use crate::algorithm::two_phase::Solver;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::R;

#[test]
fn conversion_pipeline() {
    let solver = Solver::new();

    // Artificial tableau form
    let artificial_tableau_form_computed = artificial_tableau(&tableau_form()).unwrap();
    assert_eq!(artificial_tableau_form_computed, artificial_tableau_form());

    // Get to a basic feasible solution
    let mut tableau_form_computed = tableau_form();
    assert!(!tableau_form_computed.is_primal_feasible());
    let start_corner = match solver.find_start_corner(&tableau_form_computed).unwrap() {
        FeasibilityResult::Feasible(start_corner) => start_corner,
        FeasibilityResult::Infeasible => panic!("problem is feasible"),
    };
    assert_eq!(start_corner.basis(), &[2, 0, 4, 1]);

    // Non-artificial tableau form in the start corner
    solver.prepare_with_start_corner(&start_corner, &mut tableau_form_computed).unwrap();
    assert_eq!(tableau_form_computed.basis(), &[2, 0, 4, 1]);
    assert_eq!(tableau_form_computed.non_basis(), &[3, 5]);
    assert_eq!(
        tableau_form_computed.solution().unwrap(),
        vec![R!(149), R!(1), R!(19), R!(0), R!(177), R!(0)],
    );
    assert_eq!(tableau_form_computed.objective_function_value(), Ok(R!(45200)));

    // Optimize
    let result = solver.find_best_solution(&mut tableau_form_computed).unwrap();
    assert_eq!(result, optimal_form());
    assert!(tableau_form_computed.is_valid_partition());
}

#[test]
fn solve() {
    let mut tableau = tableau_form();
    assert_eq!(Solver::new().solve(&mut tableau).unwrap(), optimal_form());
}

pub fn tableau_form() -> Tableau {
    Tableau::from_canonical(
        vec![R!(300), R!(500)],
        vec![
            vec![R!(1), R!(2)],
            vec![R!(1), R!(1)],
            vec![R!(0), R!(3)],
            vec![R!(0), R!(-1)],
        ],
        vec![R!(170), R!(150), R!(180), R!(-1)],
    ).unwrap()
}

pub fn artificial_tableau_form() -> Tableau {
    let rows = [
        [1, 2, 1, 0, 0, 0],
        [1, 1, 0, 1, 0, 0],
        [0, 3, 0, 0, 1, 0],
        // Negated, because its constraint value is negative
        [0, 1, 0, 0, 0, -1],
    ];

    let mut tableau = Tableau::new(4, 10).unwrap();
    for (row, values) in rows.into_iter().enumerate() {
        for (column, value) in values.into_iter().enumerate() {
            tableau.set_coefficient(row, column, R!(value));
        }
    }
    for (row, value) in [170, 150, 180, 1].into_iter().enumerate() {
        tableau.set_constraint_value(row, R!(value));
    }
    for (column, value) in [2, 7, 1, 1, 1, -1].into_iter().enumerate() {
        tableau.set_cost(column, R!(value));
    }
    tableau.set_negated_objective_value(R!(501));
    tableau.set_non_basis(&[0, 1, 2, 3, 4, 5]);
    tableau.set_basis(&[6, 7, 8, 9]);

    tableau
}

pub fn optimal_form() -> OptimizationResult {
    OptimizationResult::FiniteOptimum(Solution {
        objective_value: R!(49000),
        values: vec![R!(130), R!(20), R!(0), R!(0), R!(120), R!(19)],
    })
}
