/// Re-maps `value` from `[from_start, from_end]` onto `[to_start, to_end]`.
///
/// The mapping is linear and unclamped; reversed target ranges flip the axis.
#[must_use]
pub fn map_range(value: f64, from_start: f64, from_end: f64, to_start: f64, to_end: f64) -> f64 {
    to_start + (value - from_start) / (from_end - from_start) * (to_end - to_start)
}
