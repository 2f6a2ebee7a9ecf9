//! A degenerate problem on which the largest coefficient rule cycles.
//!
//! From Chvátal, Linear Programming, chapter 3.
use crate::algorithm::{OptimizationResult, Solution};
use crate::algorithm::two_phase::Solver;
use crate::algorithm::two_phase::strategy::pivot_rule::{Dantzig, PivotRule, PivotSelection};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::error::SimplexError;
use crate::R;

#[test]
fn bland_terminates() {
    let mut tableau = tableau_form();

    let result = Solver::new().with_max_iterations(7).solve(&mut tableau).unwrap();
    assert_eq!(result, optimal_form());
    assert_eq!(tableau.basis(), &[4, 0, 2]);
    assert_eq!(tableau.non_basis(), &[6, 5, 3, 1]);
}

#[test]
fn dantzig_cycles() {
    let mut tableau = tableau_form();
    let mut rule = Dantzig::new();

    let mut bases = Vec::new();
    for _ in 0..7 {
        match tableau.update_pivot_with(&mut rule).unwrap() {
            PivotSelection::Pivot { .. } => tableau.step().unwrap(),
            selection => panic!("cycling tableau should keep pivoting, got {:?}", selection),
        }
        bases.push(tableau.basis().to_vec());
    }

    // All pivots are degenerate, the basis after the first pivot comes back after six more
    assert_eq!(bases[0], vec![0, 5, 6]);
    assert_eq!(bases[6], bases[0]);
    assert_eq!(tableau.objective_function_value(), Ok(R!(0)));

    let mut tableau = tableau_form();
    let result = Solver::<Dantzig>::default().with_max_iterations(50).solve(&mut tableau);
    assert!(matches!(result, Err(SimplexError::IterationLimit(50))));
}

pub fn tableau_form() -> Tableau {
    Tableau::from_canonical(
        vec![R!(10), R!(-57), R!(-9), R!(-24)],
        vec![
            vec![R!(1, 2), R!(-11, 2), R!(-5, 2), R!(9)],
            vec![R!(1, 2), R!(-3, 2), R!(-1, 2), R!(1)],
            vec![R!(1), R!(0), R!(0), R!(0)],
        ],
        vec![R!(0), R!(0), R!(1)],
    ).unwrap()
}

pub fn optimal_form() -> OptimizationResult {
    OptimizationResult::FiniteOptimum(Solution {
        objective_value: R!(1),
        values: vec![R!(1), R!(0), R!(1), R!(0), R!(2), R!(0), R!(0)],
    })
}
