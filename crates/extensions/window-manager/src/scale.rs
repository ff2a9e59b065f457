//! Logical to physical pixel conversion.

/// Scale a logical length to physical pixels.
///
/// The product is truncated toward zero, matching how native hosts cast
/// floating sizes to integer pixels. Out-of-range values saturate.
pub fn to_physical(logical: f64, ratio: f64) -> i32 {
    (logical * ratio) as i32
}
