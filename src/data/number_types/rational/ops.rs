//! # Operator traits
//!
//! The `std::ops` traits, wrapping the checked operations of `Rational`. Operators can't return a
//! `Result`, so they panic where the checked variant would return an error, just like division by
//! zero panics for the primitive integers. Algorithmic code uses the checked methods instead.
use std::iter::Sum;
use std::ops::Neg;

use num_traits::Zero;

use crate::data::number_types::rational::Rational;
use crate::error::ArithmeticError;

fn expect_value(result: Result<Rational, ArithmeticError>, operation: &str) -> Rational {
    match result {
        Ok(value) => value,
        Err(error) => panic!("rational {} failed: {}", operation, error),
    }
}

macro_rules! impl_field_operation {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident) => {
        impl std::ops::$trait for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                expect_value(self.$checked(&rhs), stringify!($method))
            }
        }

        impl std::ops::$trait<&Rational> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                expect_value(self.$checked(rhs), stringify!($method))
            }
        }

        impl std::ops::$trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                expect_value(self.$checked(&rhs), stringify!($method))
            }
        }

        impl std::ops::$trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Self) -> Self::Output {
                expect_value(self.$checked(rhs), stringify!($method))
            }
        }

        impl std::ops::$assign_trait for Rational {
            fn $assign_method(&mut self, rhs: Self) {
                *self = expect_value(self.$checked(&rhs), stringify!($method));
            }
        }

        impl std::ops::$assign_trait<&Rational> for Rational {
            fn $assign_method(&mut self, rhs: &Self) {
                *self = expect_value(self.$checked(rhs), stringify!($method));
            }
        }
    };
}

impl_field_operation!(Add, add, AddAssign, add_assign, checked_add);
impl_field_operation!(Sub, sub, SubAssign, sub_assign, checked_sub);
impl_field_operation!(Mul, mul, MulAssign, mul_assign, checked_mul);
impl_field_operation!(Div, div, DivAssign, div_assign, checked_div);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        expect_value(self.checked_neg(), "negation")
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        expect_value(self.checked_neg(), "negation")
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, item| total + item)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, item| total + item)
    }
}
