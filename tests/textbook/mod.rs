//! Small problems from introductory texts on linear programming.
use rational_simplex::{R, Rational, Tableau};

mod test;

/// Maximize `300x + 500y` subject to `x + 2y <= 170`, `x + y <= 150` and `3y <= 180`.
///
/// The optimum lies at `x = 130`, `y = 20`.
fn production_planning(lower_bound_on_y: bool) -> Tableau {
    let mut constraints = vec![
        vec![R!(1), R!(2)],
        vec![R!(1), R!(1)],
        vec![R!(0), R!(3)],
    ];
    let mut b = vec![R!(170), R!(150), R!(180)];
    if lower_bound_on_y {
        constraints.push(vec![R!(0), R!(-1)]);
        b.push(R!(-1));
    }

    Tableau::from_canonical(vec![R!(300), R!(500)], constraints, b).unwrap()
}

fn values(values: &[i64]) -> Vec<Rational> {
    values.iter().map(|&value| R!(value)).collect()
}
