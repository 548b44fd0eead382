//! Test support shared by the area crates.
//!
//! - [`fixtures`]: area file texts and temp-file writers
//! - [`generators`]: synthetic lon/lat grids
//! - `assert_approx_eq!`, `assert_coords_approx_eq!`, `assert_all_approx_eq!`
//!
//! Pull it in as a dev-dependency with a path to `crates/test-utils`.

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;

/// Assert `|left - right| <= epsilon`, all as `f64`.
///
/// NaN on either side always fails. An optional trailing format string and
/// arguments are appended to the panic message.
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001, 1.0, 1e-3);
/// assert_approx_eq!(2.0_f32, 2.0, 0.0, "row {}", 3);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $epsilon, "")
    };
    ($left:expr, $right:expr, $epsilon:expr, $($msg:tt)+) => {{
        let (left, right, epsilon) = ($left as f64, $right as f64, $epsilon as f64);
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: {} ≈ {} (diff {} > {}) {}",
                left,
                right,
                diff,
                epsilon,
                format_args!($($msg)+)
            );
        }
    }};
}

/// Assert two `(f64, f64)` coordinate pairs agree component-wise.
///
/// ```
/// use test_utils::assert_coords_approx_eq;
///
/// assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 1e-3);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let (lx, ly): (f64, f64) = $left;
        let (rx, ry): (f64, f64) = $right;
        $crate::assert_approx_eq!(lx, rx, $epsilon, "(x of {:?} vs {:?})", (lx, ly), (rx, ry));
        $crate::assert_approx_eq!(ly, ry, $epsilon, "(y of {:?} vs {:?})", (lx, ly), (rx, ry));
    }};
}

/// Assert two float slices have the same length and agree element-wise.
///
/// ```
/// use test_utils::assert_all_approx_eq;
///
/// assert_all_approx_eq!(&[1.0, 2.0], &[1.0, 2.0000001], 1e-6);
/// ```
#[macro_export]
macro_rules! assert_all_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left: &[f64] = $left;
        let right: &[f64] = $right;
        assert_eq!(left.len(), right.len(), "slice lengths differ");
        for (i, (l, r)) in left.iter().zip(right).enumerate() {
            $crate::assert_approx_eq!(*l, *r, $epsilon, "at index {}", i);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_within_tolerance() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0);
        assert_approx_eq!(-5.5, -5.500001, 0.0001, "negative values");
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_outside_tolerance() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_nan_never_equal() {
        assert_approx_eq!(f64::NAN, f64::NAN, 1.0);
    }

    #[test]
    fn test_coords() {
        assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
    }

    #[test]
    #[should_panic(expected = "at index 1")]
    fn test_slices_report_index() {
        assert_all_approx_eq!(&[1.0, 2.0], &[1.0, 2.5], 0.1);
    }
}
