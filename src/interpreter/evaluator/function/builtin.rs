use std::f64::consts::PI;

/// Converts an angle from degrees to radians.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::radians;
///
/// assert!((radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[must_use]
pub fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Defines a trigonometric builtin taking its argument in degrees.
///
/// The functions are total: no argument is rejected, so `tan(90)` yields a
/// very large number rather than an error.
macro_rules! degree_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[must_use]
        pub fn $fname(degrees: f64) -> f64 {
            radians(degrees).$real_fn()
        }
    };
}

degree_builtin!(sin, sin);
degree_builtin!(cos, cos);
degree_builtin!(tan, tan);
