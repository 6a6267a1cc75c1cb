/// Number formatting helpers.
///
/// This module renders `f64` results for display with a fixed number of
/// significant digits, switching to scientific notation for very large or
/// very small magnitudes.
pub mod num;
