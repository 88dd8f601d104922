/// Check for equality between two components allowing for rounding errors
/// accumulated over a chain of conversions.
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0e-4);
    }};
    ($actual:expr,$expected:expr,$epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}
