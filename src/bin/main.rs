use std::process::exit;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use itertools::Itertools;
use log::info;

use rational_simplex::{Bland, Dantzig, FeasibilityResult, OptimizationResult, PivotRule, R, SimplexError, Solver, Tableau};

/// Solves a small production planning problem with the two phase Simplex method.
#[derive(Parser)]
#[command(name = "rational-simplex", version, about, long_about = None)]
struct Opts {
    /// Maximum number of pivots per phase
    #[arg(short, long)]
    max_iterations: Option<usize>,
    /// Rule used to select the entering column
    #[arg(short, long, value_enum, default_value_t = Rule::Bland)]
    pivot_rule: Rule,
    /// Print every tableau, not only the final ones
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    Bland,
    Dantzig,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let result = match opts.pivot_rule {
        Rule::Bland => run(configure::<Bland>(&opts), opts.verbose),
        Rule::Dantzig => run(configure::<Dantzig>(&opts), opts.verbose),
    };
    if let Err(error) = result {
        eprintln!("Error: {}", error);
        exit(1);
    }
}

fn configure<PR: PivotRule>(opts: &Opts) -> Solver<PR> {
    let solver = Solver::<PR>::default();
    match opts.max_iterations {
        Some(max_iterations) => solver.with_max_iterations(max_iterations),
        None => solver,
    }
}

fn run<PR: PivotRule>(solver: Solver<PR>, verbose: bool) -> Result<(), SimplexError> {
    let mut tableau = test_data()?;
    tableau.update_pivot_with(&mut PR::new())?;
    println!("Initial tableau:\n{}\n", tableau);

    let start = Instant::now();
    let start_corner = match solver.find_start_corner(&tableau)? {
        FeasibilityResult::Feasible(start_corner) => start_corner,
        FeasibilityResult::Infeasible => {
            println!("Problem is not feasible.");
            return Ok(());
        },
    };
    info!("Phase one took {:?}", start.elapsed());
    if verbose {
        println!("Phase one tableau:\n{}\n", start_corner.tableau());
    }
    println!("Phase one solution: [ {} ]\n", start_corner.tableau().solution()?.iter().join(", "));

    let start = Instant::now();
    solver.prepare_with_start_corner(&start_corner, &mut tableau)?;
    info!("Preparing phase two took {:?}", start.elapsed());
    if verbose {
        println!("Tableau for phase two:\n{}\n", tableau);
    }

    let start = Instant::now();
    let result = solver.find_best_solution(&mut tableau)?;
    info!("Phase two took {:?}", start.elapsed());
    println!("Final tableau:\n{}\n", tableau);

    match result {
        OptimizationResult::FiniteOptimum(solution) => println!("Solution computed.\n{}", solution),
        OptimizationResult::Infeasible => println!("Problem is not feasible."),
        OptimizationResult::Unbounded => println!("Problem is unbounded."),
    }

    Ok(())
}

/// Maximize `300x + 500y` subject to `x + 2y <= 170`, `x + y <= 150`, `3y <= 180` and `y >= 1`.
fn test_data() -> Result<Tableau, SimplexError> {
    let rows = [
        ([1, 2], 170),
        ([1, 1], 150),
        ([0, 3], 180),
        ([0, -1], -1),
    ];

    let mut tableau = Tableau::new(4, 6)?;
    for (row, (coefficients, constraint_value)) in rows.into_iter().enumerate() {
        for (column, coefficient) in coefficients.into_iter().enumerate() {
            tableau.set_coefficient(row, column, R!(coefficient));
        }
        tableau.set_constraint_value(row, R!(constraint_value));
    }
    tableau.set_cost(0, R!(300));
    tableau.set_cost(1, R!(500));
    tableau.set_basis(&[2, 3, 4, 5]);
    tableau.set_non_basis(&[0, 1]);

    Ok(tableau)
}
