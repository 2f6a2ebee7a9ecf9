//! Property-based tests for the exact arithmetic.
use proptest::prelude::*;

use crate::data::number_types::rational::{gcd, Rational};

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -10_000i64..10_000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
}

proptest! {
    #[test]
    fn normalize_reduces_and_keeps_value(n in small_int(), d in non_zero_int()) {
        let mut r = Rational::new_raw(n, d);
        prop_assert!(r.normalize().is_ok());

        prop_assert!(r.denominator() > 0);
        prop_assert_eq!(gcd(r.numerator() as i128, r.denominator() as i128), 1);
        // n' / d' == n / d
        prop_assert_eq!(r.numerator() as i128 * d as i128, n as i128 * r.denominator() as i128);
    }

    #[test]
    fn add_commutative(a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int()) {
        let x = Rational::new(a, b);
        let y = Rational::new(c, d);
        prop_assert_eq!(x + y, y + x);
    }

    #[test]
    fn sub_inverts_add(a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int()) {
        let x = Rational::new(a, b);
        let y = Rational::new(c, d);
        prop_assert_eq!((x + y) - y, x);
    }

    #[test]
    fn div_inverts_mul(a in small_int(), b in non_zero_int(), c in non_zero_int(), d in non_zero_int()) {
        let x = Rational::new(a, b);
        let y = Rational::new(c, d);
        prop_assert_eq!((x * y) / y, x);
    }

    #[test]
    fn distributive(a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int(), e in small_int()) {
        let x = Rational::new(a, b);
        let y = Rational::new(c, d);
        let z = Rational::from(e);
        prop_assert_eq!(z * (x + y), z * x + z * y);
    }

    #[test]
    fn ordering_matches_floats(a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int()) {
        let x = Rational::new(a, b);
        let y = Rational::new(c, d);
        let (fx, fy) = (a as f64 / b as f64, c as f64 / d as f64);
        if fx < fy {
            prop_assert!(x < y);
        }
        if fy < fx {
            prop_assert!(y < x);
        }
    }
}
