//! Status rendering helpers.

/// Marker for an attempt still available.
pub const REMAINING_MARK: &str = "❤️";

/// Marker for an attempt already spent.
pub const SPENT_MARK: &str = "♡";

/// Render the attempt budget as hearts: `(allowed - used)` remaining markers
/// followed by `used` spent markers.
///
/// Markers are joined with a single space; some terminals render adjacent
/// emoji glyphs run together otherwise. Pure function, no side effects.
pub fn hearts_status(used: u32, allowed: u32) -> String {
    debug_assert!(used <= allowed, "attempt counter exceeded the budget");
    let remaining = allowed.saturating_sub(used) as usize;

    let mut marks = Vec::with_capacity(allowed as usize);
    marks.extend(std::iter::repeat(REMAINING_MARK).take(remaining));
    marks.extend(std::iter::repeat(SPENT_MARK).take(used as usize));
    marks.join(" ")
}
