/// Shorthand for creating a rational number, mostly in tests.
///
/// `R!(3)` is the integer three and `R!(3, 4)` is three quarters, normalized.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational::from($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational::new($numer, $denom)
    };
}
