//! One-decimal rounding policy for reported quantities.

/// Rounds a value to one decimal place, half away from zero.
///
/// Applied to every depth and duration that appears in kernel output.
/// Scheduling arithmetic always uses the exact unrounded value so rounding
/// never accumulates into cycle start times.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
