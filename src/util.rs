/// Normalize `num` into 0..=1 relative to the range `min..=max`.
///
/// Values outside the range are clamped to the nearest end.
pub fn scale(num: f64, min: f64, max: f64) -> f64 {
    if num < min {
        return 0.0;
    }
    if num > max {
        return 1.0;
    }
    (num - min) / (max - min)
}

/// Inverse of [`scale`]: map a normalized 0..=1 value back into `min..=max`.
pub fn to_absolute(num: f64, min: f64, max: f64) -> f64 {
    if num < 0.0 {
        return min;
    }
    if num > 1.0 {
        return max;
    }
    num * (max - min) + min
}
