//! Display strings shared by the summary and detail records.

/// Placeholder for a missing player or playtime bound.
pub const UNKNOWN_BOUND: &str = "?";

/// "{min}-{max}", no collapsing even when both bounds match.
pub fn player_range(min: &str, max: &str) -> String {
    format!("{min}-{max}")
}

/// "{max} min" when both bounds are equal, "{min}-{max} min" otherwise.
pub fn playtime(min: &str, max: &str) -> String {
    if min == max {
        format!("{max} min")
    } else {
        format!("{min}-{max} min")
    }
}
